//! Category scoring and the derived score-card totals.
//!
//! Norwegian rules: highest pair counts, two pairs must be distinct faces,
//! a full house is the weighted 3x+2x sum, straights are fixed 15/20, and
//! Yatzy needs all five dice alike.
//!
//! Everything here is a pure function of its arguments; the game state
//! machine calls in at commit time and the presentation layer calls in to
//! preview potential scores.

use crate::category::Category;
use crate::sheet::ScoreSheet;

/// Upper-section total required to earn the bonus.
pub const BONUS_THRESHOLD: u32 = 63;

/// Flat bonus for reaching [`BONUS_THRESHOLD`].
pub const BONUS_SCORE: u32 = 50;

/// Fixed scores for the pattern categories.
pub const SMALL_STRAIGHT_SCORE: u32 = 15;
pub const LARGE_STRAIGHT_SCORE: u32 = 20;
pub const YATZY_SCORE: u32 = 50;

/// Occurrences of each face, indexed by face value (index 0 unused).
fn face_counts(faces: [u8; 5]) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for &face in &faces {
        counts[face as usize] += 1;
    }
    counts
}

/// Highest face appearing at least `n` times, scored as `face * n`.
fn n_of_a_kind(counts: &[u8; 7], n: u8) -> u32 {
    for face in (1..=6u32).rev() {
        if counts[face as usize] >= n {
            return face * u32::from(n);
        }
    }
    0
}

/// Score a five-die hand against a category.
///
/// Face values must be in 1..=6; slot order does not matter. Always
/// non-negative, and the same hand scores the same every time.
pub fn score_for(category: Category, faces: [u8; 5]) -> u32 {
    let counts = face_counts(faces);
    let sum: u32 = faces.iter().map(|&f| u32::from(f)).sum();

    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => {
            // face() is Some for every upper category
            let face = u32::from(category.face().unwrap_or(0));
            u32::from(counts[face as usize]) * face
        }
        Category::OnePair => n_of_a_kind(&counts, 2),
        Category::TwoPairs => {
            let mut pair_sum = 0u32;
            let mut pairs = 0;
            for face in (1..=6u32).rev() {
                if counts[face as usize] >= 2 {
                    pair_sum += 2 * face;
                    pairs += 1;
                    if pairs == 2 {
                        return pair_sum;
                    }
                }
            }
            0
        }
        Category::ThreeOfAKind => n_of_a_kind(&counts, 3),
        Category::FourOfAKind => n_of_a_kind(&counts, 4),
        Category::SmallStraight => {
            if (1..=5).all(|f| counts[f] >= 1) {
                SMALL_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::LargeStraight => {
            if (2..=6).all(|f| counts[f] >= 1) {
                LARGE_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::FullHouse => {
            let three = (1..=6u32).rev().find(|&f| counts[f as usize] >= 3);
            let two = three.and_then(|three_face| {
                (1..=6u32)
                    .rev()
                    .find(|&f| f != three_face && counts[f as usize] >= 2)
            });
            match (three, two) {
                (Some(three_face), Some(two_face)) => 3 * three_face + 2 * two_face,
                _ => 0,
            }
        }
        Category::Chance => sum,
        Category::Yatzy => {
            if counts.iter().any(|&c| c == 5) {
                YATZY_SCORE
            } else {
                0
            }
        }
    }
}

/// Sum of the recorded upper-section scores (absent = 0).
pub fn upper_sum(sheet: &ScoreSheet) -> u32 {
    Category::UPPER
        .into_iter()
        .map(|c| sheet.score(c).unwrap_or(0))
        .sum()
}

/// The upper-section bonus: 50 at 63 points, otherwise nothing.
pub fn bonus(sheet: &ScoreSheet) -> u32 {
    if upper_sum(sheet) >= BONUS_THRESHOLD {
        BONUS_SCORE
    } else {
        0
    }
}

/// Upper sum + bonus + all recorded lower-section scores.
pub fn grand_total(sheet: &ScoreSheet) -> u32 {
    let lower: u32 = Category::LOWER
        .into_iter()
        .map(|c| sheet.score(c).unwrap_or(0))
        .sum();
    upper_sum(sheet) + bonus(sheet) + lower
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_section_counts_matching_faces() {
        assert_eq!(score_for(Category::Ones, [1, 1, 1, 1, 1]), 5);
        assert_eq!(score_for(Category::Twos, [2, 2, 3, 4, 5]), 4);
        assert_eq!(score_for(Category::Sixes, [6, 6, 6, 1, 2]), 18);
        assert_eq!(score_for(Category::Fours, [1, 2, 3, 5, 6]), 0);
    }

    #[test]
    fn one_pair_takes_the_highest_pair() {
        assert_eq!(score_for(Category::OnePair, [2, 2, 5, 5, 6]), 10);
        assert_eq!(score_for(Category::OnePair, [1, 2, 3, 4, 5]), 0);
        // A triple still counts as a pair of that face.
        assert_eq!(score_for(Category::OnePair, [3, 3, 3, 1, 2]), 6);
    }

    #[test]
    fn two_pairs_need_distinct_faces() {
        // Pair of 2 + pair of 5; the third 5 is not a second pair.
        assert_eq!(score_for(Category::TwoPairs, [2, 2, 5, 5, 5]), 14);
        assert_eq!(score_for(Category::TwoPairs, [3, 3, 6, 6, 1]), 18);
        // Four of a kind is a single pair value, not two pairs.
        assert_eq!(score_for(Category::TwoPairs, [4, 4, 4, 4, 1]), 0);
        assert_eq!(score_for(Category::TwoPairs, [1, 2, 3, 4, 5]), 0);
    }

    #[test]
    fn n_of_a_kind_takes_the_highest_qualifying_face() {
        assert_eq!(score_for(Category::ThreeOfAKind, [2, 2, 2, 5, 5]), 6);
        assert_eq!(score_for(Category::ThreeOfAKind, [5, 5, 5, 5, 1]), 15);
        assert_eq!(score_for(Category::FourOfAKind, [6, 6, 6, 6, 2]), 24);
        assert_eq!(score_for(Category::FourOfAKind, [6, 6, 6, 2, 2]), 0);
    }

    #[test]
    fn straights_are_exact_coverage() {
        assert_eq!(score_for(Category::SmallStraight, [1, 2, 3, 4, 5]), 15);
        assert_eq!(score_for(Category::SmallStraight, [5, 4, 3, 2, 1]), 15);
        assert_eq!(score_for(Category::SmallStraight, [1, 2, 3, 4, 4]), 0);
        assert_eq!(score_for(Category::LargeStraight, [2, 3, 4, 5, 6]), 20);
        assert_eq!(score_for(Category::LargeStraight, [1, 2, 3, 4, 5]), 0);
    }

    #[test]
    fn full_house_is_weighted_three_plus_two() {
        assert_eq!(score_for(Category::FullHouse, [3, 3, 3, 4, 4]), 17);
        assert_eq!(score_for(Category::FullHouse, [5, 5, 2, 2, 2]), 16);
        // Four of a kind has no distinct pair.
        assert_eq!(score_for(Category::FullHouse, [2, 2, 2, 2, 5]), 0);
        // Five alike is not a house either.
        assert_eq!(score_for(Category::FullHouse, [6, 6, 6, 6, 6]), 0);
    }

    #[test]
    fn chance_sums_everything() {
        assert_eq!(score_for(Category::Chance, [1, 2, 3, 4, 5]), 15);
        assert_eq!(score_for(Category::Chance, [6, 6, 6, 6, 6]), 30);
    }

    #[test]
    fn yatzy_needs_all_five() {
        assert_eq!(score_for(Category::Yatzy, [6, 6, 6, 6, 6]), 50);
        assert_eq!(score_for(Category::Yatzy, [1, 1, 1, 1, 1]), 50);
        assert_eq!(score_for(Category::Yatzy, [6, 6, 6, 6, 1]), 0);
    }

    #[test]
    fn exhaustive_hands_stay_in_range() {
        // All 6^5 = 7776 hands, every category: non-negative by type,
        // bounded by the best possible score on the card.
        for a in 1..=6u8 {
            for b in 1..=6u8 {
                for c in 1..=6u8 {
                    for d in 1..=6u8 {
                        for e in 1..=6u8 {
                            let hand = [a, b, c, d, e];
                            let sum: u32 = hand.iter().map(|&f| u32::from(f)).sum();
                            assert_eq!(score_for(Category::Chance, hand), sum);
                            for cat in Category::ALL {
                                assert!(score_for(cat, hand) <= YATZY_SCORE);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let hand = [2, 2, 5, 5, 5];
        for cat in Category::ALL {
            let first = score_for(cat, hand);
            for _ in 0..10 {
                assert_eq!(score_for(cat, hand), first);
            }
        }
    }

    #[test]
    fn bonus_boundary_at_63() {
        let mut below = ScoreSheet::new();
        // 2+4+9+16+25+6 = 62
        below.record(Category::Ones, 2);
        below.record(Category::Twos, 4);
        below.record(Category::Threes, 9);
        below.record(Category::Fours, 16);
        below.record(Category::Fives, 25);
        below.record(Category::Sixes, 6);
        assert_eq!(upper_sum(&below), 62);
        assert_eq!(bonus(&below), 0);

        let mut at = ScoreSheet::new();
        // 3+6+9+12+15+18 = 63
        at.record(Category::Ones, 3);
        at.record(Category::Twos, 6);
        at.record(Category::Threes, 9);
        at.record(Category::Fours, 12);
        at.record(Category::Fives, 15);
        at.record(Category::Sixes, 18);
        assert_eq!(upper_sum(&at), 63);
        assert_eq!(bonus(&at), 50);
    }

    #[test]
    fn grand_total_is_upper_plus_bonus_plus_lower() {
        let mut sheet = ScoreSheet::new();
        sheet.record(Category::Ones, 3);
        sheet.record(Category::Twos, 6);
        sheet.record(Category::Threes, 9);
        sheet.record(Category::Fours, 12);
        sheet.record(Category::Fives, 15);
        sheet.record(Category::Sixes, 18);
        sheet.record(Category::OnePair, 12);
        sheet.record(Category::Yatzy, 50);

        let lower = 12 + 50;
        assert_eq!(
            grand_total(&sheet),
            upper_sum(&sheet) + bonus(&sheet) + lower
        );
        assert_eq!(grand_total(&sheet), 63 + 50 + 62);
    }
}
