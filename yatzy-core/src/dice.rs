//! The five-die hand a turn is played with.
//!
//! Dice belong to the current turn only: a fresh turn resets every die to
//! an unlocked placeholder face. Locked dice keep their value across rolls.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Dice per hand.
pub const HAND_SIZE: usize = 5;

/// Face shown by fresh dice before the first roll of a turn.
pub const PLACEHOLDER_FACE: u8 = 1;

/// A single die: stable slot id, current face, lock flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    pub id: usize,
    pub value: u8,
    pub locked: bool,
}

/// The five dice of the turn in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    dice: [Die; HAND_SIZE],
}

impl Hand {
    /// A fresh hand: all dice unlocked at the placeholder face.
    pub fn new() -> Self {
        let mut dice = [Die {
            id: 0,
            value: PLACEHOLDER_FACE,
            locked: false,
        }; HAND_SIZE];
        for (id, die) in dice.iter_mut().enumerate() {
            die.id = id;
        }
        Hand { dice }
    }

    pub fn dice(&self) -> &[Die; HAND_SIZE] {
        &self.dice
    }

    /// The five face values, in slot order.
    pub fn faces(&self) -> [u8; HAND_SIZE] {
        self.dice.map(|d| d.value)
    }

    /// Flip the lock flag of the die in `slot`.
    ///
    /// # Panics
    /// Panics if `slot >= HAND_SIZE`; callers validate slot ids first.
    pub fn toggle_lock(&mut self, slot: usize) {
        self.dice[slot].locked = !self.dice[slot].locked;
    }

    /// Reroll every unlocked die with faces drawn from `rng`.
    pub fn roll_with_rng<R: Rng>(&mut self, rng: &mut R) {
        for die in &mut self.dice {
            if !die.locked {
                die.value = rng.gen_range(1..=6);
            }
        }
    }

    /// Back to the fresh-turn state: all unlocked, placeholder face.
    pub fn reset(&mut self) {
        *self = Hand::new();
    }

    /// Overwrite every face, ignoring locks. Scenario tests pin hands
    /// with this; gameplay only changes faces through `roll_with_rng`.
    pub(crate) fn set_faces(&mut self, faces: [u8; HAND_SIZE]) {
        for (die, face) in self.dice.iter_mut().zip(faces) {
            die.value = face;
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Hand::new()
    }
}
