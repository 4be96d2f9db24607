//! Urgency classification of the total score.

use crate::models::{ScoreResult, SubScores, UrgencyTier};

/// Totals at or above this are Critical.
const CRITICAL_THRESHOLD: u8 = 7;

/// Totals at or above this (but below critical) are Moderate.
const MODERATE_THRESHOLD: u8 = 5;

/// Map a total score onto its urgency tier.
///
/// Thresholds are checked highest-severity-first so the critical path is a
/// single comparison. Every total in 0..=18 lands in exactly one tier; the
/// classifier never touches the sub-scores behind the total.
pub fn classify(total: u8) -> UrgencyTier {
    if total >= CRITICAL_THRESHOLD {
        UrgencyTier::Critical
    } else if total >= MODERATE_THRESHOLD {
        UrgencyTier::Moderate
    } else {
        UrgencyTier::Low
    }
}

/// Bundle sub-scores with their classification into a final result.
pub fn score_result(subscores: SubScores) -> ScoreResult {
    let tier = classify(subscores.total());
    ScoreResult::new(subscores, tier)
}
