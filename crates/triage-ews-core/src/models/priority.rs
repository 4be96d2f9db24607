//! Priority-ranking models for the critical worklist.

use serde::{Deserialize, Serialize};

/// Per-factor points behind one critical priority key.
///
/// Every factor is additive; the scalar key is the sum. Kept so staff can
/// see why one patient outranks another.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PriorityBreakdown {
    /// Clinical severity: total score × 100
    pub severity: u64,
    /// Delay past the 30-minute grace period: (wait − 30) × 10
    pub delay: u64,
    /// +50 when age is known and over 65
    pub age: u64,
    /// +200 when oxygen saturation is below 85%
    pub hypoxia: u64,
    /// +150 when systolic pressure is below 80 mmHg
    pub hypotension: u64,
    /// +150 when heart rate is above 140 or below 40 bpm
    pub heart_rate_extreme: u64,
    /// +250 when responsive only to pain, or unresponsive
    pub consciousness: u64,
    /// +100 when temperature is above 40.0 or below 34.0 °C
    pub temperature_extreme: u64,
}

impl PriorityBreakdown {
    /// The priority key: sum of every factor's points.
    pub fn total(&self) -> u64 {
        self.severity
            + self.delay
            + self.age
            + self.hypoxia
            + self.hypotension
            + self.heart_rate_extreme
            + self.consciousness
            + self.temperature_extreme
    }
}

/// One critical patient as presented on the ranked worklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedCase {
    /// Patient this row refers to
    pub patient_id: String,
    /// Name shown on the board
    pub display_name: String,
    /// Total early-warning score behind the ranking
    pub total_score: u8,
    /// Minutes waited at ranking time
    pub wait_minutes: u32,
    /// The comparable priority key (higher = seen first)
    pub priority: u64,
    /// Why the key is what it is
    pub breakdown: PriorityBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_total_is_sum_of_factors() {
        let breakdown = PriorityBreakdown {
            severity: 800,
            delay: 150,
            age: 50,
            hypoxia: 0,
            hypotension: 0,
            heart_rate_extreme: 0,
            consciousness: 0,
            temperature_extreme: 0,
        };
        assert_eq!(breakdown.total(), 1000);
    }

    #[test]
    fn test_default_breakdown_is_zero() {
        assert_eq!(PriorityBreakdown::default().total(), 0);
    }
}
