//! Critical worklist ranking for the waiting room board.
//!
//! Takes the host's current (patient, assessment) pairs, keeps the
//! critical-tier patients still waiting, and orders them by priority key,
//! highest first. Ties fall back to arrival order; beyond that the sort is
//! stable so input order holds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Assessment, CareState, PatientSnapshot, RankedCase, UrgencyTier};
use crate::scoring::critical_priority_breakdown;

/// One patient with their latest assessment, as supplied by the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorklistEntry {
    /// Intake snapshot (identity, age, arrival, care state)
    pub patient: PatientSnapshot,
    /// Latest recorded assessment for this patient
    pub assessment: Assessment,
}

impl WorklistEntry {
    pub fn new(patient: PatientSnapshot, assessment: Assessment) -> Self {
        Self {
            patient,
            assessment,
        }
    }
}

/// The ranked board plus what was left off it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorklistReport {
    /// Critical cases, most urgent first
    pub cases: Vec<RankedCase>,
    /// Entries below the Critical tier
    pub skipped_non_critical: usize,
    /// Critical entries already in care or attended
    pub skipped_not_waiting: usize,
}

/// Waiting-room counts per tier for the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TierTally {
    pub critical: usize,
    pub moderate: usize,
    pub low: usize,
}

impl TierTally {
    pub fn total(&self) -> usize {
        self.critical + self.moderate + self.low
    }
}

/// Rank the critical patients still waiting, most time-critical first.
///
/// Wait minutes and priority keys are recomputed from scratch against the
/// supplied `now`; nothing is cached between calls. Patients whose state is
/// no longer Waiting are excluded even when their score is critical, the
/// board only shows who can still be called in.
pub fn rank_critical_cases(entries: &[WorklistEntry], now: DateTime<Utc>) -> WorklistReport {
    let mut skipped_non_critical = 0usize;
    let mut skipped_not_waiting = 0usize;
    let mut ranked: Vec<(RankedCase, DateTime<Utc>)> = Vec::new();

    for entry in entries {
        if !entry.assessment.is_critical() {
            skipped_non_critical += 1;
            continue;
        }
        if entry.patient.care_state != CareState::Waiting {
            skipped_not_waiting += 1;
            continue;
        }

        let wait_minutes = entry.patient.wait_minutes(now);
        let breakdown = critical_priority_breakdown(
            &entry.assessment.result,
            &entry.assessment.vitals,
            wait_minutes,
            entry.patient.age_years,
        );

        let case = RankedCase {
            patient_id: entry.patient.id.clone(),
            display_name: entry.patient.display_name(),
            total_score: entry.assessment.result.total,
            wait_minutes,
            priority: breakdown.total(),
            breakdown,
        };
        ranked.push((case, entry.patient.arrived_at));
    }

    // Priority descending, earliest arrival first on ties.
    ranked.sort_by(|a, b| b.0.priority.cmp(&a.0.priority).then(a.1.cmp(&b.1)));

    tracing::debug!(
        ranked = ranked.len(),
        skipped_non_critical,
        skipped_not_waiting,
        "ranked critical worklist"
    );

    WorklistReport {
        cases: ranked.into_iter().map(|(case, _)| case).collect(),
        skipped_non_critical,
        skipped_not_waiting,
    }
}

/// Count assessments per tier. The caller chooses the slice (typically the
/// current waiting room); this just tallies it.
pub fn tier_tally(assessments: &[Assessment]) -> TierTally {
    let mut tally = TierTally::default();
    for assessment in assessments {
        match assessment.result.tier {
            UrgencyTier::Critical => tally.critical += 1,
            UrgencyTier::Moderate => tally.moderate += 1,
            UrgencyTier::Low => tally.low += 1,
        }
    }
    tally
}
