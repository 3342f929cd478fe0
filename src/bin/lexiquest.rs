use anyhow::Result;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;
use tui_showcase::lexiquest::app::handler;
use tui_showcase::lexiquest::app::state::AppState;
use tui_showcase::lexiquest::config;
use tui_showcase::lexiquest::ui;
use tui_showcase::term::{self, AppEvent};
use tui_showcase::trace;

#[tokio::main]
async fn main() -> Result<()> {
    term::install_panic_hook();

    let cfg = config::load_config()?;
    trace::init(config::APP_NAME, cfg.logging.enabled, &cfg.logging.level);

    let mut terminal = term::setup_terminal()?;
    let result = run_app(&mut terminal, cfg).await;
    term::restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg);
    term::spawn_input_task(event_tx.clone());
    term::spawn_tick_task(event_tx, state.config.ui.tick_rate_ms);

    tracing::info!("lexiquest started");

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let Some(event) = event_rx.recv().await else {
            break;
        };

        handler::handle_event(&mut state, event);

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    tracing::info!("lexiquest stopped");
    Ok(())
}
