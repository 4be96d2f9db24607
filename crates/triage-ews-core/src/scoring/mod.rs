//! Early-warning scoring pipeline.
//!
//! Pipeline: Domain Validation → Band Scoring → Urgency Classification

mod calculator;
mod classifier;
mod ranker;

pub use calculator::*;
pub use classifier::*;
pub use ranker::*;

use crate::models::{OutOfDomainError, ScoreResult, VitalSigns};

pub type ScoringResult<T> = Result<T, OutOfDomainError>;

/// Score one reading end to end: validate, band each parameter, classify
/// the total, and bundle the result with its tier metadata.
///
/// Pure and stateless; identical readings always produce identical results,
/// and concurrent callers need no synchronization.
pub fn assess(vitals: &VitalSigns) -> ScoringResult<ScoreResult> {
    // Step 1: Validate the reading and band each parameter
    let subscores = match compute_subscores(vitals) {
        Ok(subscores) => subscores,
        Err(err) => {
            tracing::warn!(%err, "rejected vital-sign reading");
            return Err(err);
        }
    };

    // Step 2: Classify the total and attach tier metadata
    let result = score_result(subscores);

    if result.is_critical() {
        tracing::warn!(total = result.total, "critical early-warning score");
    } else {
        tracing::debug!(
            total = result.total,
            tier = result.tier.label(),
            "reading scored"
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Consciousness, UrgencyTier};

    #[test]
    fn test_assess_moderate_reading() {
        let vitals = VitalSigns::new(24, 88, 160, 110, Consciousness::Alert, 37.2);
        let result = assess(&vitals).unwrap();

        assert_eq!(result.subscores.as_array(), [2, 3, 0, 1, 0, 0]);
        assert_eq!(result.total, 6);
        assert_eq!(result.tier, UrgencyTier::Moderate);
        assert_eq!(result.max_wait_minutes, 30);
    }

    #[test]
    fn test_assess_critical_reading() {
        let vitals = VitalSigns::new(22, 90, 140, 95, Consciousness::Alert, 38.1);
        let result = assess(&vitals).unwrap();

        assert_eq!(result.subscores.as_array(), [2, 3, 0, 1, 0, 2]);
        assert_eq!(result.total, 8);
        assert_eq!(result.tier, UrgencyTier::Critical);
        assert_eq!(result.max_wait_minutes, 0);
    }

    #[test]
    fn test_assess_rejects_out_of_domain_reading() {
        let vitals = VitalSigns::new(16, 98, 400, 72, Consciousness::Alert, 36.8);
        assert_eq!(assess(&vitals), Err(OutOfDomainError::SystolicBp(400)));
    }

    #[test]
    fn test_assess_is_idempotent() {
        let vitals = VitalSigns::new(22, 90, 140, 95, Consciousness::Alert, 38.1);
        assert_eq!(assess(&vitals).unwrap(), assess(&vitals).unwrap());
    }
}
