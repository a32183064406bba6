//! BLOCKFALL - terminal driver
//!
//! Owns the clock and the terminal. Key presses and gravity ticks are
//! serialized into one stream of commands for the engine.

use blockfall::input::{Input, KeyBindings};
use blockfall::settings::Settings;
use blockfall::{ui, Game, Outcome};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, stdout},
    time::{Duration, Instant},
};

/// Get the blockfall temp directory, creating it if needed
fn blockfall_temp_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("blockfall");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn new_game(settings: &Settings) -> io::Result<Game> {
    let (rows, columns) = (settings.field.rows, settings.field.columns);
    let game = match settings.gameplay.seed {
        Some(seed) => Game::with_seed(rows, columns, seed),
        None => Game::new(rows, columns),
    };
    game.map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}

fn main() -> io::Result<()> {
    let session_id: u32 = rand::random();

    // Log to a file, the terminal belongs to the renderer
    let log_dir = blockfall_temp_dir();
    let log_file = format!("{:08x}.log", session_id);
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let directive: tracing_subscriber::filter::Directive = "blockfall=debug"
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .with_ansi(false)
        .init();

    tracing::info!(
        "BLOCKFALL starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    let settings = Settings::load();
    if Settings::settings_path().is_some_and(|path| !path.exists()) {
        // Write defaults so the player has a file to edit
        if let Err(e) = settings.save() {
            tracing::warn!("Could not save default settings: {}", e);
        }
    }

    // Fail before touching the terminal if the field size is unusable
    let game = new_game(&settings)?;

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, game, &settings);

    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    let lines = result?;
    println!("Thanks for playing BLOCKFALL! Lines cleared: {}", lines);
    Ok(())
}

/// Run the event loop until the player quits; returns the lines cleared
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut game: Game,
    settings: &Settings,
) -> io::Result<u32> {
    let bindings = KeyBindings::from_settings(settings);
    let gravity = Duration::from_millis(settings.gameplay.gravity_ms.max(1));
    let mut next_tick = Instant::now() + gravity;

    loop {
        terminal.draw(|frame| ui::render_game(frame, &game, settings))?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        let input = if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => bindings.map(key),
                _ => None,
            }
        } else {
            next_tick = Instant::now() + gravity;
            Some(Input::Command(blockfall::Command::GravityTick))
        };

        match input {
            Some(Input::Quit) => return Ok(game.lines_cleared()),
            Some(Input::Restart) => {
                game.restart();
                next_tick = Instant::now() + gravity;
            }
            Some(Input::Command(command)) => match game.handle_command(command) {
                Ok(Outcome::GameOver) => {
                    tracing::info!(lines = game.lines_cleared(), "game over");
                }
                Ok(Outcome::Locked { lines_cleared }) if lines_cleared > 0 => {
                    tracing::debug!(lines_cleared, total = game.lines_cleared(), "lines cleared");
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!(?command, "command failed: {}", e);
                }
            },
            None => {}
        }
    }
}
