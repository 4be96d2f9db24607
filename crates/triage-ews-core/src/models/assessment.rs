//! Assessment models: sub-scores, urgency tiers, and recorded results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::vitals::VitalSigns;

/// Per-parameter sub-scores, each in 0..=3.
///
/// Derived from exactly one `VitalSigns` reading; never stored apart from
/// its source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubScores {
    /// Respiratory-rate band score
    pub respiratory_rate: u8,
    /// Oxygen-saturation band score
    pub oxygen_saturation: u8,
    /// Systolic-blood-pressure band score
    pub systolic_bp: u8,
    /// Heart-rate band score
    pub heart_rate: u8,
    /// Consciousness score (0 alert, 3 otherwise)
    pub consciousness: u8,
    /// Temperature band score
    pub temperature: u8,
}

impl SubScores {
    /// Total early-warning score, the sum of all six bands (0..=18).
    pub fn total(&self) -> u8 {
        self.respiratory_rate
            + self.oxygen_saturation
            + self.systolic_bp
            + self.heart_rate
            + self.consciousness
            + self.temperature
    }

    /// The six scores in chart order, for display.
    pub fn as_array(&self) -> [u8; 6] {
        [
            self.respiratory_rate,
            self.oxygen_saturation,
            self.systolic_bp,
            self.heart_rate,
            self.consciousness,
            self.temperature,
        ]
    }
}

/// Urgency classification derived from the total score.
///
/// Ordered from least to most urgent. Wait bounds and colors are fixed
/// clinical policy, not configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum UrgencyTier {
    /// Total 0-4: routine attention
    Low,
    /// Total 5-6: urgent attention
    Moderate,
    /// Total 7+: immediate attention
    Critical,
}

impl UrgencyTier {
    /// Maximum allowable wait before first attention, in minutes.
    pub fn max_wait_minutes(&self) -> u32 {
        match self {
            UrgencyTier::Critical => 0,
            UrgencyTier::Moderate => 30,
            UrgencyTier::Low => 60,
        }
    }

    /// Fixed display color for dashboards and wristbands.
    pub fn color_hex(&self) -> &'static str {
        match self {
            UrgencyTier::Critical => "#dc3545",
            UrgencyTier::Moderate => "#ffc107",
            UrgencyTier::Low => "#28a745",
        }
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            UrgencyTier::Critical => "Critical",
            UrgencyTier::Moderate => "Moderate",
            UrgencyTier::Low => "Low",
        }
    }

    /// One-line instruction shown to front-desk staff.
    pub fn description(&self) -> &'static str {
        match self {
            UrgencyTier::Critical => "Immediate attention, critical patient",
            UrgencyTier::Moderate => "Urgent attention, within 30 minutes",
            UrgencyTier::Low => "Routine attention, within 60 minutes",
        }
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, UrgencyTier::Critical)
    }
}

/// The complete outcome of scoring one reading.
///
/// Immutable once produced; a new reading always produces a new result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreResult {
    /// Per-parameter band scores, kept for audit and display
    pub subscores: SubScores,
    /// Sum of the six sub-scores (0..=18)
    pub total: u8,
    /// Urgency classification of the total
    pub tier: UrgencyTier,
    /// Wait bound copied from the tier, in minutes
    pub max_wait_minutes: u32,
    /// Display color copied from the tier
    pub color_hex: String,
}

impl ScoreResult {
    /// Assemble a result from sub-scores and their classification.
    pub fn new(subscores: SubScores, tier: UrgencyTier) -> Self {
        let total = subscores.total();
        Self {
            subscores,
            total,
            tier,
            max_wait_minutes: tier.max_wait_minutes(),
            color_hex: tier.color_hex().to_string(),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.tier.is_critical()
    }
}

/// One recorded triage assessment: the reading plus its computed result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assessment {
    /// Unique assessment ID
    pub id: String,
    /// Patient this reading belongs to
    pub patient_id: String,
    /// The measured vital signs
    pub vitals: VitalSigns,
    /// The computed score and classification
    pub result: ScoreResult,
    /// When the reading was taken
    pub recorded_at: DateTime<Utc>,
}

impl Assessment {
    /// Record a new assessment for a patient.
    pub fn new(patient_id: String, vitals: VitalSigns, result: ScoreResult) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            patient_id,
            vitals,
            result,
            recorded_at: Utc::now(),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.result.is_critical()
    }
}
