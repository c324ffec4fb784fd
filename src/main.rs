use anyhow::{Context, Result};
use gradebook::api::HttpTransport;
use gradebook::config::Config;
use gradebook::logger::Logger;
use gradebook::ui;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Some(position) = args.iter().position(|arg| arg == "--generate-config") {
        let path = match args.get(position + 1) {
            Some(path) => PathBuf::from(path),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = Config::load()?;

    let logger = Logger::new();
    let log_file = if config.logging.enabled {
        Logger::default_log_path()
    } else {
        None
    };
    logger.install(log_file.as_deref())?;
    log::info!("Starting gradebook against {}", config.api.base_url);

    let transport = HttpTransport::new(config.api.base_url.clone()).context("Failed to create HTTP client")?;

    // Run the TUI application
    ui::run_app(config, Arc::new(transport), logger).await?;

    Ok(())
}
