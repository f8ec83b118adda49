//! Norsk Yatzy terminal game.
//!
//! A ratatui interface over the yatzy-core rules engine: a setup screen
//! for 2-4 players, the dice row and shared score table, and an optional
//! AI advice panel backed by Gemini.

mod advice;
mod app;
mod events;
mod setup;
mod ui;

use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;
use yatzy_core::Game;

use advice::GeminiAdvisor;
use app::App;
use events::{handle_event, EventResult};
use setup::SetupScreen;
use ui::render::render;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present; the advice panel picks up GEMINI_API_KEY.
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

/// Why the game screen was left.
enum AppExit {
    Quit,
    ToSetup,
}

async fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    loop {
        let Some(names) = run_setup(terminal)? else {
            // User cancelled
            return Ok(());
        };

        // The setup screen clamps the count, but the engine still validates.
        let game = Game::new(names)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        let (advice_tx, advice_rx) = advice::spawn_worker(GeminiAdvisor::from_env());
        let app = App::new(game, advice_tx, advice_rx);
        match run_app(terminal, app).await? {
            AppExit::Quit => return Ok(()),
            AppExit::ToSetup => continue,
        }
    }
}

/// Run the player setup screen. `None` means the user backed out.
fn run_setup<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> io::Result<Option<Vec<String>>> {
    let mut setup = SetupScreen::new();

    loop {
        terminal.draw(|f| {
            let area = f.area();
            setup.render(f, area);
        })?;

        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            setup.handle_event(ev);
        }

        if setup.cancelled {
            return Ok(None);
        }
        if setup.finished {
            return Ok(Some(setup.player_names()));
        }
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<AppExit> {
    loop {
        terminal.draw(|f| render(f, &app))?;

        // Poll for events with a timeout so animations keep ticking
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            match handle_event(&mut app, ev) {
                EventResult::Quit => return Ok(AppExit::Quit),
                EventResult::ExitToSetup => return Ok(AppExit::ToSetup),
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        } else {
            app.tick();
        }
    }
}

fn print_help() {
    println!("Norsk Yatzy - terningspill for 2-4 spillere");
    println!();
    println!("USAGE:");
    println!("  yatzy [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help    Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("  GEMINI_API_KEY   Enables the in-game AI advice panel (optional).");
    println!("                   Without it the panel shows an unavailable notice.");
    println!();
    println!("KEYS:");
    println!("  r / space     Roll the unlocked dice");
    println!("  1-5           Lock or unlock a die");
    println!("  up/down       Select an open category");
    println!("  enter         Record the selected category");
    println!("  a             Ask the AI for advice");
    println!("  n             New game with the same players");
    println!("  e             Back to the setup screen");
    println!("  q             Quit");
}
