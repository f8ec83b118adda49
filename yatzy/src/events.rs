//! Event handling for the Yatzy TUI.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
    /// Leave the session and go back to the player setup screen.
    ExitToSetup,
}

/// Handle a terminal event.
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    if app.show_winner {
        return handle_winner_overlay_key(app, key);
    }

    match key.code {
        KeyCode::Char('q') => EventResult::Quit,

        // Roll
        KeyCode::Char('r') | KeyCode::Char(' ') => {
            app.start_roll();
            EventResult::NeedsRedraw
        }

        // Lock/unlock a die by slot
        KeyCode::Char(c @ '1'..='5') => {
            let slot = c.to_digit(10).unwrap_or(1) as usize - 1;
            app.toggle_lock(slot);
            EventResult::NeedsRedraw
        }

        // Category cursor
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next();
            EventResult::NeedsRedraw
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_prev();
            EventResult::NeedsRedraw
        }

        // Commit the selected category
        KeyCode::Enter => {
            app.commit_selected();
            EventResult::NeedsRedraw
        }

        // Advice
        KeyCode::Char('a') => {
            app.request_advice();
            EventResult::NeedsRedraw
        }

        // New game with the same players
        KeyCode::Char('n') => {
            app.new_game();
            EventResult::NeedsRedraw
        }

        // Bring the winner overlay back after closing it
        KeyCode::Char('w') => {
            if app.game.is_over() {
                app.show_winner = true;
            }
            EventResult::NeedsRedraw
        }

        // Back to the setup screen for a different set of players
        KeyCode::Char('e') => EventResult::ExitToSetup,

        _ => EventResult::Continue,
    }
}

/// Keys while the winner overlay is open.
fn handle_winner_overlay_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            // Close and leave the final table on screen.
            app.show_winner = false;
            EventResult::NeedsRedraw
        }
        KeyCode::Char('n') => {
            app.new_game();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('q') => EventResult::Quit,
        _ => EventResult::Continue,
    }
}
