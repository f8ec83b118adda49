//! Game state machine: turns, rolls, locks, commits, completion.
//!
//! This module is the single place that mutates game state. The
//! presentation layer submits intents (roll, toggle a lock, commit a
//! category) and renders the snapshot it reads back; every rejected intent
//! returns an [`IllegalMove`] and leaves the state exactly as it was.

use crate::advisor::AdviceContext;
use crate::category::Category;
use crate::dice::{Hand, HAND_SIZE};
use crate::scoring;
use crate::sheet::ScoreSheet;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Rolls a player gets each turn.
pub const ROLLS_PER_TURN: u8 = 3;

/// Errors constructing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("player count must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {0}")]
    InvalidConfiguration(usize),
}

/// Why an intent was rejected. Rejections never change state; a UI that
/// over-permits clicks is expected to see these routinely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("the game is over")]
    GameOver,

    #[error("nothing has been rolled this turn")]
    NothingRolled,

    #[error("no rolls left this turn")]
    OutOfRolls,

    #[error("no die in slot {0}")]
    NoSuchDie(usize),

    #[error("{0} is already recorded")]
    CategoryTaken(Category),
}

/// A player: stable id (creation order), display name, score card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: usize,
    name: String,
    sheet: ScoreSheet,
}

impl Player {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sheet(&self) -> &ScoreSheet {
        &self.sheet
    }

    /// Upper sum + bonus + lower section, per the scoring module.
    pub fn grand_total(&self) -> u32 {
        scoring::grand_total(&self.sheet)
    }
}

/// The authoritative state of one game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    players: Vec<Player>,
    current: usize,
    hand: Hand,
    rolls_left: u8,
    turn_count: u32,
    game_over: bool,
    winner: Option<usize>,
}

impl Game {
    /// Start a game for 2..=4 named players.
    pub fn new<S: Into<String>>(names: Vec<S>) -> Result<Game, GameError> {
        let count = names.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(GameError::InvalidConfiguration(count));
        }

        let players = names
            .into_iter()
            .enumerate()
            .map(|(id, name)| Player {
                id,
                name: name.into(),
                sheet: ScoreSheet::new(),
            })
            .collect();

        Ok(Game {
            players,
            current: 0,
            hand: Hand::new(),
            rolls_left: ROLLS_PER_TURN,
            turn_count: 0,
            game_over: false,
            winner: None,
        })
    }

    /// A fresh game with the same players, empty sheets.
    pub fn restart(&self) -> Game {
        Game {
            players: self
                .players
                .iter()
                .map(|p| Player {
                    id: p.id,
                    name: p.name.clone(),
                    sheet: ScoreSheet::new(),
                })
                .collect(),
            current: 0,
            hand: Hand::new(),
            rolls_left: ROLLS_PER_TURN,
            turn_count: 0,
            game_over: false,
            winner: None,
        }
    }

    // --- read surface ---

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: usize) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn rolls_left(&self) -> u8 {
        self.rolls_left
    }

    /// Completed rounds (increments when the turn wraps back to player 0).
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.players.get(id))
    }

    /// What `category` would score against the current dice. For display
    /// and highlighting; committing recomputes through the same path.
    pub fn potential_score(&self, category: Category) -> u32 {
        scoring::score_for(category, self.hand.faces())
    }

    /// Snapshot for the advice collaborator, or `None` while there is
    /// nothing to advise on (no roll yet this turn, or game over).
    pub fn advice_context(&self) -> Option<AdviceContext> {
        if self.game_over || self.rolls_left == ROLLS_PER_TURN {
            return None;
        }
        Some(AdviceContext {
            faces: self.hand.faces(),
            open_categories: self.current_player().sheet.open_categories().collect(),
            rolls_left: self.rolls_left,
        })
    }

    /// Pin the table to exact faces (test scenarios only).
    pub(crate) fn set_faces(&mut self, faces: [u8; HAND_SIZE]) {
        self.hand.set_faces(faces);
    }

    // --- intents ---

    /// Flip the lock flag of the die in `slot`. Locking only means
    /// anything between the first and last roll of a turn.
    pub fn toggle_lock(&mut self, slot: usize) -> Result<(), IllegalMove> {
        if self.game_over {
            return Err(IllegalMove::GameOver);
        }
        if self.rolls_left == ROLLS_PER_TURN {
            return Err(IllegalMove::NothingRolled);
        }
        if self.rolls_left == 0 {
            return Err(IllegalMove::OutOfRolls);
        }
        if slot >= HAND_SIZE {
            return Err(IllegalMove::NoSuchDie(slot));
        }
        self.hand.toggle_lock(slot);
        Ok(())
    }

    /// Reroll the unlocked dice with faces from `rng` and spend one roll.
    pub fn roll_with_rng<R: Rng>(&mut self, rng: &mut R) -> Result<(), IllegalMove> {
        if self.game_over {
            return Err(IllegalMove::GameOver);
        }
        if self.rolls_left == 0 {
            return Err(IllegalMove::OutOfRolls);
        }
        self.hand.roll_with_rng(rng);
        self.rolls_left -= 1;
        Ok(())
    }

    /// [`Game::roll_with_rng`] with the thread RNG.
    pub fn roll(&mut self) -> Result<(), IllegalMove> {
        self.roll_with_rng(&mut rand::thread_rng())
    }

    /// Record `category` for the current player and advance the turn.
    ///
    /// `_client_score` is whatever the presentation layer already showed
    /// the player; the dice on the table decide what gets recorded, so a
    /// stale or forged value changes nothing. Returns the recorded score.
    pub fn commit_category(
        &mut self,
        category: Category,
        _client_score: u32,
    ) -> Result<u32, IllegalMove> {
        if self.game_over {
            return Err(IllegalMove::GameOver);
        }
        if self.rolls_left == ROLLS_PER_TURN {
            return Err(IllegalMove::NothingRolled);
        }
        if self.players[self.current].sheet.contains(category) {
            return Err(IllegalMove::CategoryTaken(category));
        }

        let score = scoring::score_for(category, self.hand.faces());
        self.players[self.current].sheet.record(category, score);

        self.current = (self.current + 1) % self.players.len();
        if self.current == 0 {
            self.turn_count += 1;
        }
        self.hand.reset();
        self.rolls_left = ROLLS_PER_TURN;

        self.game_over = self.players.iter().all(|p| p.sheet.is_complete());
        if self.game_over {
            self.winner = self.decide_winner();
        }

        Ok(score)
    }

    /// Highest grand total; ties go to the earliest player.
    fn decide_winner(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for player in &self.players {
            let total = player.grand_total();
            // strictly greater, so earlier players win ties
            if best.map_or(true, |(_, top)| total > top) {
                best = Some((player.id, total));
            }
        }
        best.map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_player() -> Game {
        Game::new(vec!["Spiller 1", "Spiller 2"]).unwrap()
    }

    #[test]
    fn player_count_is_bounded() {
        assert_eq!(
            Game::new(vec!["solo"]).unwrap_err(),
            GameError::InvalidConfiguration(1)
        );
        assert_eq!(
            Game::new(vec!["a", "b", "c", "d", "e"]).unwrap_err(),
            GameError::InvalidConfiguration(5)
        );
        assert!(Game::new(vec!["a", "b", "c", "d"]).is_ok());
    }

    #[test]
    fn fresh_game_state() {
        let game = two_player();
        assert_eq!(game.rolls_left(), ROLLS_PER_TURN);
        assert_eq!(game.current_index(), 0);
        assert_eq!(game.turn_count(), 0);
        assert!(!game.is_over());
        assert!(game.winner().is_none());
        assert_eq!(game.hand(), &Hand::new());
    }

    #[test]
    fn lock_needs_a_roll_first() {
        let mut game = two_player();
        assert_eq!(game.toggle_lock(0), Err(IllegalMove::NothingRolled));

        let mut rng = StdRng::seed_from_u64(1);
        game.roll_with_rng(&mut rng).unwrap();
        assert_eq!(game.toggle_lock(0), Ok(()));
        assert!(game.hand().dice()[0].locked);
        assert_eq!(game.toggle_lock(9), Err(IllegalMove::NoSuchDie(9)));
    }

    #[test]
    fn lock_is_refused_once_rolls_are_spent() {
        let mut game = two_player();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..3 {
            game.roll_with_rng(&mut rng).unwrap();
        }
        assert_eq!(game.rolls_left(), 0);
        assert_eq!(game.toggle_lock(0), Err(IllegalMove::OutOfRolls));
    }

    #[test]
    fn roll_decrements_and_then_rejects() {
        let mut game = two_player();
        let mut rng = StdRng::seed_from_u64(5);
        for expected in (0..3).rev() {
            game.roll_with_rng(&mut rng).unwrap();
            assert_eq!(game.rolls_left(), expected);
        }

        let before = game.clone();
        assert_eq!(
            game.roll_with_rng(&mut rng),
            Err(IllegalMove::OutOfRolls)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn commit_needs_a_roll_first() {
        let mut game = two_player();
        assert_eq!(
            game.commit_category(Category::Chance, 0),
            Err(IllegalMove::NothingRolled)
        );
    }

    #[test]
    fn commit_records_the_recomputed_score_not_the_claimed_one() {
        let mut game = two_player();
        let mut rng = StdRng::seed_from_u64(11);
        game.roll_with_rng(&mut rng).unwrap();

        let expected = game.potential_score(Category::Chance);
        let recorded = game.commit_category(Category::Chance, 9999).unwrap();
        assert_eq!(recorded, expected);
        assert_eq!(game.players()[0].sheet().score(Category::Chance), Some(expected));
    }

    #[test]
    fn commit_advances_turn_and_resets_dice() {
        let mut game = two_player();
        let mut rng = StdRng::seed_from_u64(2);
        game.roll_with_rng(&mut rng).unwrap();
        game.toggle_lock(1).unwrap();
        game.commit_category(Category::Ones, 0).unwrap();

        assert_eq!(game.current_index(), 1);
        assert_eq!(game.turn_count(), 0);
        assert_eq!(game.rolls_left(), ROLLS_PER_TURN);
        assert_eq!(game.hand(), &Hand::new());

        // back to player 0 wraps the round counter
        game.roll_with_rng(&mut rng).unwrap();
        game.commit_category(Category::Ones, 0).unwrap();
        assert_eq!(game.current_index(), 0);
        assert_eq!(game.turn_count(), 1);
    }

    #[test]
    fn advice_context_waits_for_a_roll() {
        let mut game = two_player();
        assert!(game.advice_context().is_none());

        let mut rng = StdRng::seed_from_u64(8);
        game.roll_with_rng(&mut rng).unwrap();
        let ctx = game.advice_context().unwrap();
        assert_eq!(ctx.faces, game.hand().faces());
        assert_eq!(ctx.rolls_left, 2);
        assert_eq!(ctx.open_categories.len(), 15);
    }
}
