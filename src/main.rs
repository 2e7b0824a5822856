use clap::Parser;
use moneta::Preset;
use moneta::core::config::{self, CliOverrides};
use moneta::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "moneta", about = "Monetary input-field formatter")]
struct Args {
    /// Base format preset
    #[arg(short, long, default_value_t, value_enum)]
    preset: Preset,

    /// Decimal separator (one character)
    #[arg(long)]
    decimal: Option<char>,

    /// Thousands separator (one character)
    #[arg(long)]
    thousands: Option<char>,

    /// Fractional digits
    #[arg(long)]
    precision: Option<usize>,

    /// Literal prepended to every non-empty value
    #[arg(long)]
    prefix: Option<String>,

    /// Reject the minus key and strip any sign
    #[arg(long)]
    no_negative: bool,

    /// Select the whole text when a field gains focus
    #[arg(long)]
    select_on_focus: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to moneta.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("moneta.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Moneta starting up with preset: {:?}", args.preset);

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        Default::default()
    });

    let cli = CliOverrides {
        decimal: args.decimal,
        thousands: args.thousands,
        precision: args.precision,
        prefix: args.prefix,
        no_negative: args.no_negative,
        select_on_focus: args.select_on_focus,
    };
    let resolved = config::resolve(&file_config, args.preset.options(), &cli);

    tui::run(resolved)
}
