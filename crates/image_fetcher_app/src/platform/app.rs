use std::io;
use std::path::PathBuf;

use anyhow::Context;
use fetch_logging::{fetch_info, fetch_warn};
use image_fetcher_core::parse_url_list;
use image_fetcher_engine::EngineHandle;

use super::config::{load_config, FetcherConfig, CONFIG_FILENAME};
use super::console::{self, ConsoleSink};
use super::logging;

pub fn run_app() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, config_error) = match load_config(&cwd) {
        Ok(config) => (config, None),
        Err(err) => (FetcherConfig::default(), Some(err)),
    };

    logging::initialize(config.log_destination);
    if let Some(err) = config_error {
        fetch_warn!("Ignoring {}: {}", CONFIG_FILENAME, err);
    }
    fetch_info!(
        "Starting with output_dir={:?} timeout={}s",
        config.output_dir,
        config.request_timeout_secs
    );

    console::print_banner();
    let line = console::prompt_for_urls(&mut io::stdin().lock(), &mut io::stdout())
        .context("failed to read URLs from standard input")?;
    let urls = parse_url_list(&line);
    fetch_info!("Received {} URL(s)", urls.len());

    let engine = EngineHandle::new(config.engine_config())
        .context("failed to start the fetch runtime")?;
    engine.run(&urls, &ConsoleSink).with_context(|| {
        format!(
            "cannot use output directory {}",
            engine.output_dir().display()
        )
    })?;

    console::print_closing();
    Ok(())
}
