//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! preset defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.moneta/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::options::FormatOptions;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MonetaConfig {
    #[serde(default)]
    pub format: FormatSection,
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FormatSection {
    pub decimal: Option<char>,
    pub thousands: Option<char>,
    pub precision: Option<usize>,
    pub prefix: Option<String>,
    pub allow_negative: Option<bool>,
    pub select_on_focus: Option<bool>,
}

/// One field in the demo form: a label and an optional initial value
/// projected into the field at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldEntry {
    pub label: String,
    pub initial: Option<f64>,
}

// ============================================================================
// CLI Overrides
// ============================================================================

/// Format overrides from CLI flags (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub decimal: Option<char>,
    pub thousands: Option<char>,
    pub precision: Option<usize>,
    pub prefix: Option<String>,
    /// `--no-negative` flag: forces `allow_negative = false`.
    pub no_negative: bool,
    /// `--select-on-focus` flag: forces `select_on_focus = true`.
    pub select_on_focus: bool,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub options: FormatOptions,
    pub fields: Vec<FieldEntry>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.moneta/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".moneta").join("config.toml"))
}

/// Load config from `~/.moneta/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MonetaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MonetaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MonetaConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MonetaConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MonetaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Moneta Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: preset defaults → this file → env vars → CLI flags.

# [format]
# decimal = ","                # Decimal separator (one character)
# thousands = "."              # Grouping separator (one character)
# precision = 2                # Fractional digits (0 omits the separator)
# prefix = "€ "                # Literal prepended to every non-empty value
# allow_negative = true        # Accept a leading minus
# select_on_focus = false      # Select all on focus instead of caret-at-end

# [[fields]]
# label = "Amount"
# initial = 1234.56

# [[fields]]
# label = "Deposit"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing:
/// `base` (preset defaults) → config file → env vars → CLI flags.
pub fn resolve(config: &MonetaConfig, base: FormatOptions, cli: &CliOverrides) -> ResolvedConfig {
    // Each scalar: CLI → env → config → preset base
    let decimal = cli
        .decimal
        .or_else(|| env_char("MONETA_DECIMAL"))
        .or(config.format.decimal)
        .unwrap_or(base.decimal);

    let thousands = cli
        .thousands
        .or_else(|| env_char("MONETA_THOUSANDS"))
        .or(config.format.thousands)
        .unwrap_or(base.thousands);

    let precision = cli
        .precision
        .or_else(|| env_parse("MONETA_PRECISION"))
        .or(config.format.precision)
        .unwrap_or(base.precision);

    let prefix = cli
        .prefix
        .clone()
        .or_else(|| std::env::var("MONETA_PREFIX").ok())
        .or_else(|| config.format.prefix.clone())
        .unwrap_or(base.prefix);

    // Flags only force one direction; env and file carry full booleans
    let allow_negative = if cli.no_negative {
        false
    } else {
        env_parse("MONETA_ALLOW_NEGATIVE")
            .or(config.format.allow_negative)
            .unwrap_or(base.allow_negative)
    };

    let select_on_focus = if cli.select_on_focus {
        true
    } else {
        env_parse("MONETA_SELECT_ON_FOCUS")
            .or(config.format.select_on_focus)
            .unwrap_or(base.select_on_focus)
    };

    if decimal == thousands {
        warn!(
            "decimal and thousands separator are both {:?}; values will not round-trip",
            decimal
        );
    }

    let fields = if config.fields.is_empty() {
        default_fields()
    } else {
        config.fields.clone()
    };

    ResolvedConfig {
        options: FormatOptions {
            decimal,
            thousands,
            precision,
            prefix,
            allow_negative,
            select_on_focus,
        },
        fields,
    }
}

/// The demo form when no `[[fields]]` entries are configured.
fn default_fields() -> Vec<FieldEntry> {
    vec![
        FieldEntry {
            label: "Amount".to_string(),
            initial: None,
        },
        FieldEntry {
            label: "Deposit".to_string(),
            initial: None,
        },
    ]
}

fn env_char(name: &str) -> Option<char> {
    std::env::var(name).ok().and_then(|s| s.chars().next())
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}
