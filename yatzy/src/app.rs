//! Main application state and logic.

use tokio::sync::mpsc;
use yatzy_core::category::NUM_CATEGORIES;
use yatzy_core::{AdviceContext, Category, Game};

use crate::ui::theme::GameTheme;

/// Ticks a roll animation runs before the new faces are revealed. The
/// engine has already rolled; the frames only gate visibility.
pub const ROLL_ANIMATION_FRAMES: u8 = 6;

/// Main application state.
pub struct App {
    /// The authoritative game session.
    pub game: Game,

    pub theme: GameTheme,

    /// Selected row in the category list (index into `Category::ALL`).
    pub selected: usize,

    /// Frames elapsed of the roll animation, while one is running.
    pub rolling: Option<u8>,

    // Channel communication with the advice worker
    advice_tx: mpsc::Sender<AdviceContext>,
    advice_rx: mpsc::Receiver<String>,
    /// Latest advice line, once a reply has arrived.
    pub advice: Option<String>,
    pub advice_pending: bool,

    status: Option<String>,
    pub show_winner: bool,
}

impl App {
    /// Create the application around a fresh game and the advice
    /// worker's channel endpoints.
    pub fn new(
        game: Game,
        advice_tx: mpsc::Sender<AdviceContext>,
        advice_rx: mpsc::Receiver<String>,
    ) -> Self {
        Self {
            game,
            theme: GameTheme::default(),
            selected: 0,
            rolling: None,
            advice_tx,
            advice_rx,
            advice: None,
            advice_pending: false,
            status: None,
            show_winner: false,
        }
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling.is_some()
    }

    /// The category under the cursor.
    pub fn selected_category(&self) -> Category {
        Category::ALL[self.selected]
    }

    /// Submit a roll intent and start the reveal animation.
    pub fn start_roll(&mut self) {
        if self.is_rolling() {
            return;
        }
        match self.game.roll() {
            Ok(()) => {
                self.rolling = Some(0);
                self.advice = None;
                self.status = None;
            }
            Err(e) => self.set_status(format!("Ugyldig trekk: {e}")),
        }
    }

    /// Advance animations and drain worker replies. Called on every idle
    /// tick of the event loop.
    pub fn tick(&mut self) {
        if let Some(frames) = self.rolling {
            if frames + 1 >= ROLL_ANIMATION_FRAMES {
                self.rolling = None;
                if self.game.rolls_left() == 0 {
                    self.set_status("Ingen kast igjen - velg poengsum");
                }
            } else {
                self.rolling = Some(frames + 1);
            }
        }

        while let Ok(text) = self.advice_rx.try_recv() {
            self.advice = Some(text);
            self.advice_pending = false;
        }
    }

    pub fn toggle_lock(&mut self, slot: usize) {
        if self.is_rolling() {
            return;
        }
        if let Err(e) = self.game.toggle_lock(slot) {
            self.set_status(format!("Ugyldig trekk: {e}"));
        }
    }

    /// Move the cursor down to the next category the current player can
    /// still choose.
    pub fn select_next(&mut self) {
        let sheet = self.game.current_player().sheet();
        for step in 1..=NUM_CATEGORIES {
            let idx = (self.selected + step) % NUM_CATEGORIES;
            if !sheet.contains(Category::ALL[idx]) {
                self.selected = idx;
                return;
            }
        }
    }

    /// Move the cursor up to the previous open category.
    pub fn select_prev(&mut self) {
        let sheet = self.game.current_player().sheet();
        for step in 1..=NUM_CATEGORIES {
            let idx = (self.selected + NUM_CATEGORIES - step) % NUM_CATEGORIES;
            if !sheet.contains(Category::ALL[idx]) {
                self.selected = idx;
                return;
            }
        }
    }

    /// Snap the cursor onto an open category of the current player.
    fn reset_selection(&mut self) {
        self.selected = self
            .game
            .current_player()
            .sheet()
            .open_categories()
            .next()
            .map(Category::index)
            .unwrap_or(0);
    }

    /// Commit the selected category, passing along the score the table
    /// already shows. The engine recomputes and records its own value.
    pub fn commit_selected(&mut self) {
        if self.is_rolling() {
            return;
        }
        let category = self.selected_category();
        let shown = self.game.potential_score(category);
        match self.game.commit_category(category, shown) {
            Ok(score) => {
                self.set_status(format!("{category}: {score} poeng"));
                self.advice = None;
                if self.game.is_over() {
                    self.show_winner = true;
                } else {
                    self.reset_selection();
                }
            }
            Err(e) => self.set_status(format!("Ugyldig trekk: {e}")),
        }
    }

    /// Ask the advice worker for a suggestion on the current turn.
    pub fn request_advice(&mut self) {
        if self.advice_pending {
            return;
        }
        match self.game.advice_context() {
            Some(ctx) => {
                if self.advice_tx.try_send(ctx).is_ok() {
                    self.advice_pending = true;
                    self.status = None;
                }
            }
            None => self.set_status("Kast terningene først"),
        }
    }

    /// Same players, fresh sheets.
    pub fn new_game(&mut self) {
        self.game = self.game.restart();
        self.selected = 0;
        self.rolling = None;
        self.advice = None;
        self.advice_pending = false;
        self.status = Some("Nytt spill i gang".to_string());
        self.show_winner = false;
    }
}
