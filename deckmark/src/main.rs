mod app;
mod assets;
mod config;
mod effects;
mod logging;
mod screens;
mod terminal;

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use app::App;
use config::Args;
use deckmark_core::DeckStore;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    terminal::install_panic_hook();

    let args = Args::parse();
    let _logger = logging::setup_logging(&args.log_level, &args.log_dir)?;

    let snapshot = args.initial_snapshot()?;
    if let Some(root) = &args.asset_root {
        assets::check_assets(root);
    }
    log::info!(
        "starting with {} deck(s), {} cards",
        snapshot.decks().len(),
        snapshot.total_cards()
    );
    let app = App::new(DeckStore::new(snapshot));

    // Setup terminal; the guard restores it however this function exits
    let guard = terminal::TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, app);

    // Restore terminal
    drop(terminal);
    drop(guard);

    if let Err(e) = &result {
        log::error!("run loop failed: {e}");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> color_eyre::Result<()> {
    loop {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // Poll with ~30fps tick so transitions keep animating
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && app.handle_key(key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    log::info!("quit after {} change(s)", app.store.revision());
    Ok(())
}
