//! Scoring for completed puzzles.

use std::{fmt::Debug, time::Duration};

use tango_generator::Difficulty;

/// Computes the score awarded for a completed puzzle.
///
/// The policy is consulted exactly once per session, at the moment the board
/// becomes full and violation-free. Implementations receive the frozen solve
/// time and the puzzle difficulty.
pub trait ScorePolicy: Debug {
    /// Returns the score for a puzzle solved in `elapsed` at `difficulty`.
    fn score(&self, elapsed: Duration, difficulty: Difficulty) -> u32;
}

/// The default scoring policy.
///
/// Starts from 1000 points, deducts 10 points per elapsed second (never going
/// below zero), then multiplies by a difficulty factor of 1.0, 1.5, or 2.0.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use tango_game::{ScorePolicy as _, StandardScoring};
/// use tango_generator::Difficulty;
///
/// let policy = StandardScoring;
/// assert_eq!(policy.score(Duration::from_secs(30), Difficulty::Easy), 700);
/// assert_eq!(policy.score(Duration::from_secs(30), Difficulty::Hard), 1400);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardScoring;

impl ScorePolicy for StandardScoring {
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn score(&self, elapsed: Duration, difficulty: Difficulty) -> u32 {
        let base = 1000_u64.saturating_sub(elapsed.as_secs().saturating_mul(10));
        let multiplier = match difficulty {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        };
        (base as f64 * multiplier) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_solve_scores_full_base() {
        let policy = StandardScoring;
        assert_eq!(policy.score(Duration::ZERO, Difficulty::Easy), 1000);
        assert_eq!(policy.score(Duration::ZERO, Difficulty::Medium), 1500);
        assert_eq!(policy.score(Duration::ZERO, Difficulty::Hard), 2000);
    }

    #[test]
    fn test_ten_points_per_second() {
        let policy = StandardScoring;
        assert_eq!(policy.score(Duration::from_secs(1), Difficulty::Easy), 990);
        assert_eq!(
            policy.score(Duration::from_secs(42), Difficulty::Easy),
            580
        );
    }

    #[test]
    fn test_multiplier_applies_after_deduction() {
        let policy = StandardScoring;
        assert_eq!(
            policy.score(Duration::from_secs(30), Difficulty::Medium),
            1050
        );
    }

    #[test]
    fn test_base_floors_at_zero() {
        let policy = StandardScoring;
        assert_eq!(policy.score(Duration::from_secs(100), Difficulty::Easy), 0);
        assert_eq!(policy.score(Duration::from_secs(3600), Difficulty::Hard), 0);
    }

    #[test]
    fn test_sub_second_precision_ignored() {
        let policy = StandardScoring;
        assert_eq!(
            policy.score(Duration::from_millis(900), Difficulty::Easy),
            1000
        );
    }
}
