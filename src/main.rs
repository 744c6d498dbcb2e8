use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use vestenet::core::config;
use vestenet::tui;

#[derive(Parser)]
#[command(name = "vestenet", about = "Terminal storefront demo")]
struct Args {
    /// Screen to start on: login, registration or main
    #[arg(short, long)]
    screen: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to vestenet.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("vestenet.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
    let resolved = config::resolve(&file_config, args.screen.as_deref());

    log::info!(
        "Vestenet starting up on screen {:?}",
        resolved.start_screen.route()
    );

    tui::run(resolved)
}
