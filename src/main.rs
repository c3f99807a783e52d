use anyhow::Context;
use clap::Parser;

use stockview::cli::Cli;
use stockview::config::Config;
use stockview::inventory::{spawn_worker, StockClient};
use stockview::logging::{init_file_tracing, init_stderr_tracing};
use stockview::ui::events::EventHandler;
use stockview::ui::render::entry_lines;
use stockview::ui::{self, App};

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    match &cli.base_url {
        Some(base_url) => Ok(config.with_base_url(base_url.clone())?),
        None => Ok(config),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let client = StockClient::new(&config.service.base_url);

    if cli.print {
        init_stderr_tracing(&config.logging.level);
        let snapshot = client
            .list_stocks()
            .await
            .context("Failed to list stocks")?;
        for line in entry_lines(&snapshot) {
            println!("{}", line);
        }
        return Ok(());
    }

    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| config.logging.file_path());
    init_file_tracing(&log_path, &config.logging.level)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;
    tracing::info!(base_url = %config.service.base_url, "Starting stockview");

    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let (commands, worker) = spawn_worker(client, events.sender());
    let mut app = App::new(config.service.base_url.clone());
    app.set_command_sender(commands);

    tokio::task::spawn_blocking(move || ui::run(app, events, tick_rate))
        .await
        .context("UI thread panicked")??;

    worker.abort();
    tracing::info!("Exited cleanly");
    Ok(())
}
