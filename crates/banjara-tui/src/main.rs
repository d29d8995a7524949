use std::sync::Arc;

use anyhow::Result;
use banjara_core::{BanjaraClient, Config};

mod app;
mod handler;
mod logging;
mod tui;
mod ui;

#[cfg(test)]
mod testing;

use app::App;
use tui::{EventHandler, Tui};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::new(), Some(e)),
    };

    match logging::init(config.log_level()) {
        Ok(path) => tracing::debug!(path = %path.display(), "logging initialized"),
        Err(e) => eprintln!("warning: logging disabled: {e}"),
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "could not read config, using defaults");
    }

    let client = BanjaraClient::new(&config.base_url());
    tracing::info!(base_url = client.base_url(), "starting BanjaraGPT client");

    // Wake a sleeping backend without holding up startup
    let waker = client.clone();
    tokio::spawn(async move { waker.wake().await });

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new();

    let mut app = App::new(Arc::new(client), events.sender());
    app.fetch_chats();

    let result = run(&mut terminal, &mut app, &mut events).await;

    tui::restore()?;
    tracing::info!("exiting");
    result
}

async fn run(terminal: &mut Tui, app: &mut App, events: &mut EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event),
            None => break,
        }
    }
    Ok(())
}
