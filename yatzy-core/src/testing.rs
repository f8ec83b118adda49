//! Testing utilities.
//!
//! - `TestHarness` drives a game deterministically from a seed
//! - `MockAdvisor` returns scripted advice without any network
//! - assertion helpers for state-machine tests

use crate::advisor::{AdviceContext, AdviceError, AdviceFuture, Advisor};
use crate::category::Category;
use crate::game::Game;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::sync::Mutex;

/// An advisor that replays scripted results in order.
///
/// Once the script runs out it answers with a fixed placeholder, so tests
/// never hang on an empty queue.
pub struct MockAdvisor {
    responses: Mutex<VecDeque<Result<String, AdviceError>>>,
}

impl MockAdvisor {
    pub fn new<S: Into<String>>(responses: Vec<S>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(|s| Ok(s.into())).collect()),
        }
    }

    /// Script raw results, including failures.
    pub fn with_results(results: Vec<Result<String, AdviceError>>) -> Self {
        Self {
            responses: Mutex::new(results.into_iter().collect()),
        }
    }

    /// An advisor whose every call fails.
    pub fn failing() -> Self {
        Self::with_results(vec![])
    }

    fn next(&self) -> Result<String, AdviceError> {
        let mut responses = self.responses.lock().expect("advisor script lock");
        match responses.pop_front() {
            Some(result) => result,
            None => Err(AdviceError::Provider("no scripted advice left".into())),
        }
    }
}

impl Advisor for MockAdvisor {
    fn advise<'a>(&'a self, _ctx: &'a AdviceContext) -> AdviceFuture<'a> {
        Box::pin(async move { self.next() })
    }
}

/// Drives a [`Game`] with a seeded RNG so whole-game scenarios replay
/// identically.
pub struct TestHarness {
    pub game: Game,
    rng: StdRng,
}

impl TestHarness {
    pub fn new(names: &[&str]) -> Self {
        Self::with_seed(names, 0xA11CE)
    }

    pub fn with_seed(names: &[&str], seed: u64) -> Self {
        Self {
            game: Game::new(names.to_vec()).expect("test harness player count"),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Roll once; the scenario is expected to make this legal.
    pub fn roll(&mut self) {
        self.game
            .roll_with_rng(&mut self.rng)
            .expect("roll was legal in this scenario");
    }

    /// Commit a category, passing the displayed potential score through
    /// the way a frontend would. Returns the recorded score.
    pub fn commit(&mut self, category: Category) -> u32 {
        let shown = self.game.potential_score(category);
        self.game
            .commit_category(category, shown)
            .expect("commit was legal in this scenario")
    }

    /// One roll, then commit. The basic move of a scripted game.
    pub fn roll_and_commit(&mut self, category: Category) -> u32 {
        self.roll();
        self.commit(category)
    }

    /// Roll, then pin the table to exact faces. Scenario tests use this
    /// where a score must be known in advance.
    pub fn roll_fixed(&mut self, faces: [u8; 5]) {
        self.roll();
        self.game.set_faces(faces);
    }

    /// First open category of the current player, if any.
    pub fn next_open(&self) -> Option<Category> {
        self.game.current_player().sheet().open_categories().next()
    }

    /// Play every remaining turn, always taking the first open category.
    pub fn play_to_completion(&mut self) {
        while !self.game.is_over() {
            let category = self.next_open().expect("open category before game over");
            self.roll_and_commit(category);
        }
    }

    /// Grand totals in player order.
    pub fn totals(&self) -> Vec<u32> {
        self.game.players().iter().map(|p| p.grand_total()).collect()
    }
}

/// Assert a rejected intent left the game exactly as it was.
#[track_caller]
pub fn assert_unchanged(before: &Game, after: &Game) {
    assert_eq!(before, after, "rejection must leave the game untouched");
}

/// Assert every sheet in the game is complete.
#[track_caller]
pub fn assert_all_sheets_complete(game: &Game) {
    for player in game.players() {
        assert!(
            player.sheet().is_complete(),
            "expected a complete sheet for {}",
            player.name()
        );
    }
}
