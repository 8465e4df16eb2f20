use clap::Parser;
use pinlist::core::config::{DEFAULT_LOG_FILE, WidgetConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(
    name = "pinlist",
    version,
    about = "Always-on-top to-do checklist with a clock and a daily quote"
)]
struct Args {}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let _args = Args::parse();

    // Initialize file logger - writes to pinlist.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(DEFAULT_LOG_FILE) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = WidgetConfig::default();
    log::info!(
        "Pinlist starting up with storage at {}",
        config.storage_path.display()
    );

    pinlist::tui::run(config)
}
