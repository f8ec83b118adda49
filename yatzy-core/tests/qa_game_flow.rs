//! QA tests for the turn/game state machine.
//!
//! Whole-game scenarios are scripted with pinned hands so every recorded
//! score is known in advance: completion timing, winner selection and the
//! tie-break, and the rejection paths that must leave state untouched.

use yatzy_core::testing::{assert_all_sheets_complete, assert_unchanged, TestHarness};
use yatzy_core::{Category, Game, GameError, IllegalMove};

/// One hand per category and the score it yields. Playing this script
/// gives an upper section of 62 (no bonus), a lower section of 102, and a
/// grand total of 164.
const SCRIPT: [(Category, [u8; 5], u32); 15] = [
    (Category::Ones, [1, 1, 2, 3, 4], 2),
    (Category::Twos, [2, 2, 2, 3, 4], 6),
    (Category::Threes, [3, 3, 3, 1, 2], 9),
    (Category::Fours, [4, 4, 4, 1, 2], 12),
    (Category::Fives, [5, 5, 5, 1, 2], 15),
    (Category::Sixes, [6, 6, 6, 1, 2], 18),
    (Category::OnePair, [5, 5, 1, 2, 3], 10),
    (Category::TwoPairs, [3, 3, 2, 2, 6], 10),
    (Category::ThreeOfAKind, [4, 4, 4, 1, 2], 12),
    (Category::FourOfAKind, [2, 2, 2, 2, 6], 8),
    (Category::SmallStraight, [1, 2, 3, 4, 5], 15),
    (Category::LargeStraight, [2, 3, 4, 5, 6], 20),
    (Category::FullHouse, [3, 3, 3, 2, 2], 13),
    (Category::Chance, [4, 4, 3, 2, 1], 14),
    (Category::Yatzy, [1, 2, 3, 4, 5], 0),
];

const SCRIPT_TOTAL: u32 = 164;

#[test]
fn scripted_game_ends_exactly_on_the_last_commit() {
    let mut harness = TestHarness::new(&["Spiller 1", "Spiller 2"]);

    for (round, (category, hand, expected)) in SCRIPT.into_iter().enumerate() {
        for player in 0..2 {
            // Never over before the last commit of the last round.
            assert!(!harness.game.is_over(), "over early at round {round}");
            assert_eq!(harness.game.current_index(), player);

            harness.roll_fixed(hand);
            assert_eq!(harness.game.potential_score(category), expected);
            assert_eq!(harness.commit(category), expected);
        }
    }

    assert!(harness.game.is_over());
    assert_all_sheets_complete(&harness.game);
    assert_eq!(harness.game.turn_count(), 15);
    assert_eq!(harness.totals(), vec![SCRIPT_TOTAL, SCRIPT_TOTAL]);
}

#[test]
fn equal_totals_go_to_the_first_player() {
    let mut harness = TestHarness::new(&["Spiller 1", "Spiller 2"]);
    for (category, hand, _) in SCRIPT {
        for _ in 0..2 {
            harness.roll_fixed(hand);
            harness.commit(category);
        }
    }

    assert_eq!(harness.totals(), vec![SCRIPT_TOTAL, SCRIPT_TOTAL]);
    let winner = harness.game.winner().expect("finished game has a winner");
    assert_eq!(winner.id(), 0);
    assert_eq!(winner.name(), "Spiller 1");
}

#[test]
fn higher_grand_total_wins() {
    let mut harness = TestHarness::new(&["Spiller 1", "Spiller 2"]);
    for (category, hand, _) in SCRIPT {
        for player in 0..2 {
            // Player 2 banks a full 30 on Chance instead of 14.
            let hand = if player == 1 && category == Category::Chance {
                [6, 6, 6, 6, 6]
            } else {
                hand
            };
            harness.roll_fixed(hand);
            harness.commit(category);
        }
    }

    assert_eq!(harness.totals(), vec![SCRIPT_TOTAL, SCRIPT_TOTAL + 16]);
    let winner = harness.game.winner().expect("finished game has a winner");
    assert_eq!(winner.id(), 1);
    assert_eq!(winner.name(), "Spiller 2");
}

#[test]
fn roll_with_no_rolls_left_is_a_no_op() {
    let mut harness = TestHarness::new(&["a", "b"]);
    harness.roll();
    harness.roll();
    harness.roll();
    assert_eq!(harness.game.rolls_left(), 0);

    let before = harness.game.clone();
    assert_eq!(harness.game.roll(), Err(IllegalMove::OutOfRolls));
    assert_unchanged(&before, &harness.game);
}

#[test]
fn locking_is_rejected_outside_the_roll_window() {
    let mut harness = TestHarness::new(&["a", "b"]);

    // Before any roll there is nothing to lock.
    let before = harness.game.clone();
    assert_eq!(harness.game.toggle_lock(0), Err(IllegalMove::NothingRolled));
    assert_unchanged(&before, &harness.game);

    // After the last roll the turn is commit-only.
    harness.roll();
    harness.roll();
    harness.roll();
    let before = harness.game.clone();
    assert_eq!(harness.game.toggle_lock(0), Err(IllegalMove::OutOfRolls));
    assert_unchanged(&before, &harness.game);
}

#[test]
fn commit_before_the_first_roll_is_rejected() {
    let mut harness = TestHarness::new(&["a", "b"]);
    let before = harness.game.clone();
    assert_eq!(
        harness.game.commit_category(Category::Chance, 30),
        Err(IllegalMove::NothingRolled)
    );
    assert_unchanged(&before, &harness.game);
}

#[test]
fn double_commit_keeps_the_first_recorded_value() {
    let mut harness = TestHarness::new(&["a", "b"]);

    harness.roll_fixed([6, 6, 1, 2, 3]);
    assert_eq!(harness.commit(Category::OnePair), 12);

    harness.roll_fixed([4, 4, 1, 2, 3]);
    harness.commit(Category::OnePair);

    // Player 1 again, trying to rewrite the pair with a better hand.
    harness.roll_fixed([6, 6, 6, 6, 6]);
    let before = harness.game.clone();
    assert_eq!(
        harness.game.commit_category(Category::OnePair, 12),
        Err(IllegalMove::CategoryTaken(Category::OnePair))
    );
    assert_unchanged(&before, &harness.game);
    assert_eq!(
        harness.game.players()[0].sheet().score(Category::OnePair),
        Some(12)
    );
}

#[test]
fn finished_game_rejects_every_intent() {
    let mut harness = TestHarness::new(&["a", "b"]);
    harness.play_to_completion();
    assert!(harness.game.is_over());

    let before = harness.game.clone();
    assert_eq!(harness.game.roll(), Err(IllegalMove::GameOver));
    assert_eq!(harness.game.toggle_lock(0), Err(IllegalMove::GameOver));
    assert_eq!(
        harness.game.commit_category(Category::Chance, 0),
        Err(IllegalMove::GameOver)
    );
    assert_unchanged(&before, &harness.game);
    assert!(harness.game.advice_context().is_none());
}

#[test]
fn restart_keeps_names_and_clears_everything_else() {
    let mut harness = TestHarness::new(&["Kari", "Ola"]);
    harness.play_to_completion();

    let fresh = harness.game.restart();
    assert!(!fresh.is_over());
    assert!(fresh.winner().is_none());
    assert_eq!(fresh.turn_count(), 0);
    assert_eq!(fresh.current_index(), 0);
    let names: Vec<&str> = fresh.players().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Kari", "Ola"]);
    assert!(fresh.players().iter().all(|p| p.sheet().filled() == 0));
}

#[test]
fn player_count_outside_two_to_four_is_refused() {
    assert_eq!(
        Game::new(Vec::<String>::new()).unwrap_err(),
        GameError::InvalidConfiguration(0)
    );
    assert_eq!(
        Game::new(vec!["solo"]).unwrap_err(),
        GameError::InvalidConfiguration(1)
    );
    for count in 2..=4 {
        let names: Vec<String> = (1..=count).map(|i| format!("Spiller {i}")).collect();
        assert!(Game::new(names).is_ok());
    }
}

#[test]
fn three_player_turn_order_wraps_in_creation_order() {
    let mut harness = TestHarness::new(&["a", "b", "c"]);
    for expected in [0, 1, 2, 0, 1, 2] {
        assert_eq!(harness.game.current_index(), expected);
        let category = harness.next_open().unwrap();
        harness.roll_and_commit(category);
    }
    assert_eq!(harness.game.turn_count(), 2);
}
