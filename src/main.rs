use clap::Parser;
use mototaxi::LogLevel;
use mototaxi::core::config;
use mototaxi::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mototaxi", about = "Moto-taxi demo app for the terminal")]
struct Args {
    /// Config file (defaults to ~/.mototaxi/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,

    /// Where to write the log
    #[arg(long, default_value = "mototaxi.log")]
    log_file: PathBuf,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // The TUI owns the terminal, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    log::info!("MotoTaxiApp starting up (v{})", env!("CARGO_PKG_VERSION"));

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{}, falling back to defaults", e);
            eprintln!("mototaxi: {e}, falling back to defaults");
            config::MotoTaxiConfig::default()
        }
    };
    let resolved = config::resolve(&file_config);

    tui::run(resolved)
}
