//! Pure ELO rating update math
//!
//! Classic logistic expected-score model over integer ratings. The functions
//! here are pure and infallible: win counts are trusted as supplied, and
//! score validation belongs to the match workflow, not the engine.

use serde::{Deserialize, Serialize};

/// Sensitivity constant for rating updates
pub const DEFAULT_K_FACTOR: f64 = 32.0;

/// Logistic curve scale: a 400-point gap means 10:1 expected odds
const RATING_SCALE: f64 = 400.0;

/// Result of a rating update for both sides of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingUpdate {
    pub new_rating_a: i64,
    pub new_rating_b: i64,
    pub delta_a: i64,
    pub delta_b: i64,
}

/// Expected score for side A against side B: 1 / (1 + 10^((b - a) / 400))
pub fn expected_score(rating_a: i64, rating_b: i64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) as f64 / RATING_SCALE))
}

/// Compute new ratings for both sides of a best-of-three result.
///
/// The side with strictly more wins scores 1, the other 0. Deltas are
/// rounded half-away-from-zero and applied without clamping. Tied win
/// counts score 0 for both sides; callers are expected to reject ties
/// before reaching this point.
pub fn compute_rating_update(
    rating_a: i64,
    rating_b: i64,
    wins_a: u32,
    wins_b: u32,
) -> RatingUpdate {
    compute_rating_update_with_k(rating_a, rating_b, wins_a, wins_b, DEFAULT_K_FACTOR)
}

/// Same as [`compute_rating_update`] with an explicit K factor.
pub fn compute_rating_update_with_k(
    rating_a: i64,
    rating_b: i64,
    wins_a: u32,
    wins_b: u32,
    k_factor: f64,
) -> RatingUpdate {
    let actual_a = if wins_a > wins_b { 1.0 } else { 0.0 };
    let actual_b = if wins_b > wins_a { 1.0 } else { 0.0 };

    let expected_a = expected_score(rating_a, rating_b);
    let expected_b = expected_score(rating_b, rating_a);

    let delta_a = (k_factor * (actual_a - expected_a)).round() as i64;
    let delta_b = (k_factor * (actual_b - expected_b)).round() as i64;

    RatingUpdate {
        new_rating_a: rating_a + delta_a,
        new_rating_b: rating_b + delta_b,
        delta_a,
        delta_b,
    }
}
