//! Pure kernel-extraction and formatting helpers.
//!
//! These are stateless string transformations with no dependency on the
//! formatter or any field type. Formatting is exact digit-string
//! arithmetic: the kernel's digits are reinterpreted at the configured
//! precision without ever going through floating point, so arbitrarily
//! long inputs never drift.

use crate::core::options::FormatOptions;

/// Extract the numeric kernel from raw display text: every character
/// except decimal digits and the configured decimal separator is
/// removed.
///
/// Only the first decimal separator is honored. Any later occurrences
/// are treated as noise: their segments are concatenated into the
/// fractional part ("1,23,45" → "1,2345").
pub fn extract_kernel(text: &str, decimal: char) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == decimal)
        .collect();

    let mut segments = cleaned.split(decimal);
    let first = segments.next().unwrap_or("");
    let rest: String = segments.collect();

    if cleaned.contains(decimal) {
        let mut kernel = String::with_capacity(cleaned.len());
        kernel.push_str(first);
        kernel.push(decimal);
        kernel.push_str(&rest);
        kernel
    } else {
        cleaned
    }
}

/// Format a kernel (with optional leading minus) into display text.
///
/// The decimal separator inside the kernel is *not* positionally
/// honored: only the digit count and the configured precision decide
/// where the decimal mark lands. The separator's sole role upstream is
/// delimiting the kernel during extraction.
///
/// Edge cases: an empty kernel formats to the empty string; a kernel
/// with no digits at all (only punctuation/minus) formats to
/// `prefix + "-"` when negative, otherwise the empty string.
pub fn format_kernel(kernel: &str, opts: &FormatOptions) -> String {
    if kernel.is_empty() {
        return String::new();
    }

    let negative = opts.allow_negative && kernel.starts_with('-');
    let digits: String = kernel.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return if negative {
            format!("{}-", opts.prefix)
        } else {
            String::new()
        };
    }

    let (int_part, frac_part) = split_at_precision(&digits, opts.precision);
    let grouped = group_thousands(&int_part, opts.thousands);

    let mut out = String::with_capacity(opts.prefix.len() + grouped.len() + opts.precision + 2);
    out.push_str(&opts.prefix);
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if opts.precision > 0 {
        out.push(opts.decimal);
        out.push_str(&frac_part);
    }
    out
}

/// Interpret a digit string at fixed precision: the last `precision`
/// digits become the fraction (left-padded with zeros when short), the
/// remainder becomes the integer part with leading zeros dropped.
fn split_at_precision(digits: &str, precision: usize) -> (String, String) {
    if digits.len() <= precision {
        let frac = format!("{:0>width$}", digits, width = precision);
        return ("0".to_string(), frac);
    }

    let split = digits.len() - precision;
    let int_raw = &digits[..split];
    let frac = digits[split..].to_string();

    let int_trimmed = int_raw.trim_start_matches('0');
    let int_part = if int_trimmed.is_empty() {
        "0".to_string()
    } else {
        int_trimmed.to_string()
    };

    (int_part, frac)
}

/// Insert the grouping separator every three digits from the right.
/// The leading group of 1–3 digits gets no separator before it.
fn group_thousands(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Convert a kernel into a signed floating-point value.
///
/// The decimal separator is replaced by a literal period before
/// parsing. Empty or unparseable kernels yield NaN, which is propagated
/// to the caller untrapped.
pub fn kernel_value(kernel: &str, negative: bool, decimal: char) -> f64 {
    let normalized: String = kernel
        .chars()
        .map(|c| if c == decimal { '.' } else { c })
        .collect();

    match normalized.parse::<f64>() {
        Ok(v) if negative => -v,
        Ok(v) => v,
        Err(_) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_opts() -> FormatOptions {
        FormatOptions::default()
    }

    // -- extract_kernel --------------------------------------------------

    #[test]
    fn extract_keeps_digits_and_decimal() {
        assert_eq!(extract_kernel("€ 1.234,56", ','), "1234,56");
    }

    #[test]
    fn extract_strips_everything_else() {
        assert_eq!(extract_kernel("abc-€$ ", ','), "");
    }

    #[test]
    fn extract_collapses_extra_separators() {
        // Only the first mark is honored; later segments merge into the fraction
        assert_eq!(extract_kernel("1,23,45", ','), "1,2345");
        assert_eq!(extract_kernel("1,2,3,4", ','), "1,234");
    }

    #[test]
    fn extract_respects_configured_separator() {
        assert_eq!(extract_kernel("$ 1,234.56", '.'), "1234.56");
    }

    // -- format_kernel ---------------------------------------------------

    #[test]
    fn format_empty_is_empty() {
        assert_eq!(format_kernel("", &default_opts()), "");
    }

    #[test]
    fn format_default_scenario() {
        assert_eq!(format_kernel("123456", &default_opts()), "€ 1.234,56");
    }

    #[test]
    fn format_groups_thousands() {
        // "1234567" digits with precision 2 → integer part 1.234.567 style
        assert_eq!(format_kernel("123456700", &default_opts()), "€ 1.234.567,00");
    }

    #[test]
    fn format_no_separator_before_first_group() {
        assert_eq!(format_kernel("12345", &default_opts()), "€ 123,45");
        assert_eq!(format_kernel("1234567", &default_opts()), "€ 12.345,67");
    }

    #[test]
    fn format_pads_short_input() {
        assert_eq!(format_kernel("5", &default_opts()), "€ 0,05");
        assert_eq!(format_kernel("56", &default_opts()), "€ 0,56");
    }

    #[test]
    fn format_strips_leading_zeros() {
        assert_eq!(format_kernel("0012345", &default_opts()), "€ 123,45");
    }

    #[test]
    fn format_negative() {
        assert_eq!(format_kernel("-123456", &default_opts()), "€ -1.234,56");
    }

    #[test]
    fn format_negative_disallowed_drops_sign() {
        let opts = FormatOptions {
            allow_negative: false,
            ..default_opts()
        };
        assert_eq!(format_kernel("-123456", &opts), "€ 1.234,56");
    }

    #[test]
    fn format_minus_only() {
        assert_eq!(format_kernel("-", &default_opts()), "€ -");
    }

    #[test]
    fn format_separator_only_is_empty() {
        assert_eq!(format_kernel(",", &default_opts()), "");
    }

    #[test]
    fn format_precision_three() {
        let opts = FormatOptions {
            precision: 3,
            ..default_opts()
        };
        assert_eq!(format_kernel("1234567", &opts), "€ 1.234,567");
    }

    #[test]
    fn format_precision_zero_omits_separator() {
        let opts = FormatOptions {
            precision: 0,
            ..default_opts()
        };
        assert_eq!(format_kernel("1234567", &opts), "€ 1.234.567");
    }

    #[test]
    fn format_dollar_style() {
        let opts = FormatOptions {
            decimal: '.',
            thousands: ',',
            precision: 3,
            prefix: "$ ".to_string(),
            ..default_opts()
        };
        assert_eq!(format_kernel("1234567", &opts), "$ 1,234.567");
    }

    #[test]
    fn format_long_digit_string_is_exact() {
        // 21 digits would lose precision through f64 division; string
        // arithmetic must keep every digit intact.
        assert_eq!(
            format_kernel("123456789012345678901", &default_opts()),
            "€ 1.234.567.890.123.456.789,01"
        );
    }

    #[test]
    fn format_decimal_position_in_kernel_is_ignored() {
        // Only digit count matters: "1,2345" has five digits → 123,45
        assert_eq!(format_kernel("1,2345", &default_opts()), "€ 123,45");
    }

    // -- kernel_value ----------------------------------------------------

    #[test]
    fn value_parses_with_decimal_replaced() {
        assert_eq!(kernel_value("1234,56", false, ','), 1234.56);
    }

    #[test]
    fn value_applies_sign() {
        assert_eq!(kernel_value("1234,56", true, ','), -1234.56);
    }

    #[test]
    fn value_empty_is_nan() {
        assert!(kernel_value("", false, ',').is_nan());
    }
}
