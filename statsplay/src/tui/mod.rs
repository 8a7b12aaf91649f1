// statsplay/src/tui/mod.rs
pub mod app;
pub mod ui;
pub mod widgets;

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::tui::app::App;
use crate::ui::theme::Themes;

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Runs the interactive shell until the user quits.
///
/// The terminal is restored even when drawing or reading events fails.
pub async fn run_tui(mut app: App, themes: Themes) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter the alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Interactive shell started.");
    let result = event_loop(&mut terminal, &mut app, &themes).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("Interactive shell closed.");
    result
}

async fn event_loop(terminal: &mut CrosstermTerminal, app: &mut App, themes: &Themes) -> Result<()> {
    let mut event_stream = EventStream::new();

    while !app.should_quit {
        let theme_map = themes.select(app.dark_mode);
        terminal.draw(|f| ui::draw(f, app, theme_map)).context("Failed to draw frame")?;

        match event_stream.next().await {
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                debug!("Key event: {:?}", key.code);
                app.handle_key(key);
            }
            // Resizes and releases just trigger a redraw.
            Some(Ok(_)) => {}
            Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
            None => break,
        }
    }
    Ok(())
}
