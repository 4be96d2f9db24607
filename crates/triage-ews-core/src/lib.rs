//! Triage EWS Core Library
//!
//! Early-warning vital-sign scoring and critical priority ranking for
//! hospital front-desk triage.
//!
//! # Architecture
//!
//! ```text
//! Vitals reading → Domain Validation → Band Scoring → Total Score
//!                                                          │
//!                                              Urgency Classification
//!                                                          │
//!                                         tier + wait bound + display color
//!                                                          │
//!                                  ┌───────────────────────▼───────────────┐
//!                                  │   Critical tier only: priority key    │
//!                                  │   severity ×100, delay, age bonus,    │
//!                                  │   vital-sign extreme penalties        │
//!                                  └───────────────────────┬───────────────┘
//!                                                          │
//!                          ┌───────────────────────────────┼───────────────┐
//!                          ▼                               ▼               ▼
//!                      Worklist                        Dashboard      Waiting-room
//!                      ranking                         payload        board payload
//! ```
//!
//! # Core Principle
//!
//! **Scores are recomputed, never cached.** A new reading or another minute
//! of waiting produces a fresh result; nothing in the engine holds state.
//!
//! # Modules
//!
//! - [`models`]: Domain types (VitalSigns, ScoreResult, PatientSnapshot, etc.)
//! - [`scoring`]: Band calculator, urgency classifier, critical priority ranker
//! - [`worklist`]: Critical worklist ranking and tier tallies
//! - [`export`]: Dashboard and waiting-room payloads

pub mod export;
pub mod models;
pub mod scoring;
pub mod worklist;

// Re-export commonly used types
pub use export::{DashboardExport, WaitingRoomExport};
pub use models::{
    Assessment, CareState, Consciousness, OutOfDomainError, PatientSnapshot, PriorityBreakdown,
    RankedCase, ScoreResult, SubScores, UrgencyTier, VitalSigns,
};
pub use scoring::{
    assess, classify, compute_subscores, critical_priority, critical_priority_breakdown,
    score_result, ScoringResult,
};
pub use worklist::{rank_critical_cases, tier_tally, TierTally, WorklistEntry, WorklistReport};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

use chrono::{DateTime, Utc};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum TriageEwsError {
    #[error("Out of domain: {0}")]
    OutOfDomain(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<OutOfDomainError> for TriageEwsError {
    fn from(e: OutOfDomainError) -> Self {
        TriageEwsError::OutOfDomain(e.to_string())
    }
}

impl From<serde_json::Error> for TriageEwsError {
    fn from(e: serde_json::Error) -> Self {
        TriageEwsError::SerializationError(e.to_string())
    }
}

impl From<chrono::ParseError> for TriageEwsError {
    fn from(e: chrono::ParseError) -> Self {
        TriageEwsError::InvalidInput(format!("bad timestamp: {}", e))
    }
}

/// Parse an RFC 3339 timestamp coming across the FFI boundary.
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, TriageEwsError> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

// =========================================================================
// Factory Function (exported to FFI)
// =========================================================================

/// Create the engine facade.
#[uniffi::export]
pub fn create_engine() -> Arc<TriageEngine> {
    tracing::info!("triage engine initialized");
    Arc::new(TriageEngine)
}

// =========================================================================
// Main API Object
// =========================================================================

/// Stateless engine facade for FFI.
///
/// Every method is a pure function of its arguments; the object exists only
/// to give host bindings a handle.
#[derive(uniffi::Object)]
pub struct TriageEngine;

#[uniffi::export]
impl TriageEngine {
    // =====================================================================
    // Scoring Operations
    // =====================================================================

    /// Band each vital sign of a reading.
    pub fn compute_subscores(&self, vitals: FfiVitalSigns) -> Result<FfiSubScores, TriageEwsError> {
        let vitals: VitalSigns = vitals.into();
        let subscores = scoring::compute_subscores(&vitals)?;
        Ok(subscores.into())
    }

    /// Score a reading end to end: sub-scores, total, tier, wait bound.
    pub fn assess(&self, vitals: FfiVitalSigns) -> Result<FfiScoreResult, TriageEwsError> {
        let vitals: VitalSigns = vitals.into();
        let result = scoring::assess(&vitals)?;
        Ok(result.into())
    }

    /// Score a reading and bind it to a patient as a recorded assessment.
    pub fn record_assessment(
        &self,
        patient_id: String,
        vitals: FfiVitalSigns,
    ) -> Result<FfiAssessment, TriageEwsError> {
        let vitals: VitalSigns = vitals.into();
        let result = scoring::assess(&vitals)?;
        Ok(Assessment::new(patient_id, vitals, result).into())
    }

    // =====================================================================
    // Priority Operations
    // =====================================================================

    /// The critical priority key for one patient.
    ///
    /// Zero for any tier below Critical. Recompute whenever the wait or the
    /// reading changes.
    pub fn critical_priority(
        &self,
        result: FfiScoreResult,
        vitals: FfiVitalSigns,
        wait_minutes: u32,
        age_years: Option<u32>,
    ) -> u64 {
        let result: ScoreResult = result.into();
        let vitals: VitalSigns = vitals.into();
        scoring::critical_priority(&result, &vitals, wait_minutes, age_years)
    }

    /// Per-factor points behind the critical priority key.
    pub fn critical_priority_breakdown(
        &self,
        result: FfiScoreResult,
        vitals: FfiVitalSigns,
        wait_minutes: u32,
        age_years: Option<u32>,
    ) -> FfiPriorityBreakdown {
        let result: ScoreResult = result.into();
        let vitals: VitalSigns = vitals.into();
        scoring::critical_priority_breakdown(&result, &vitals, wait_minutes, age_years).into()
    }

    // =====================================================================
    // Worklist Operations
    // =====================================================================

    /// Rank the critical patients still waiting, most urgent first.
    pub fn rank_worklist(
        &self,
        entries: Vec<FfiWorklistEntry>,
        now: String,
    ) -> Result<FfiWorklistReport, TriageEwsError> {
        let now = parse_timestamp(&now)?;
        let entries = convert_entries(entries)?;
        Ok(worklist::rank_critical_cases(&entries, now).into())
    }

    // =====================================================================
    // Export Operations
    // =====================================================================

    /// Waiting-room board as JSON.
    pub fn waiting_room_json(
        &self,
        entries: Vec<FfiWorklistEntry>,
        now: String,
    ) -> Result<String, TriageEwsError> {
        let now = parse_timestamp(&now)?;
        let entries = convert_entries(entries)?;
        Ok(WaitingRoomExport::from_entries(&entries, now).to_json()?)
    }

    /// Waiting-room board as CSV.
    pub fn waiting_room_csv(
        &self,
        entries: Vec<FfiWorklistEntry>,
        now: String,
    ) -> Result<String, TriageEwsError> {
        let now = parse_timestamp(&now)?;
        let entries = convert_entries(entries)?;
        Ok(WaitingRoomExport::from_entries(&entries, now).to_csv())
    }

    /// Dashboard payload (tier tally plus top critical cases) as JSON.
    pub fn dashboard_json(
        &self,
        entries: Vec<FfiWorklistEntry>,
        now: String,
    ) -> Result<String, TriageEwsError> {
        let now = parse_timestamp(&now)?;
        let entries = convert_entries(entries)?;
        Ok(DashboardExport::from_entries(&entries, now).to_json()?)
    }
}

fn convert_entries(entries: Vec<FfiWorklistEntry>) -> Result<Vec<WorklistEntry>, TriageEwsError> {
    entries.into_iter().map(WorklistEntry::try_from).collect()
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe consciousness level.
#[derive(Debug, Clone, uniffi::Enum)]
pub enum FfiConsciousness {
    Alert,
    Voice,
    Pain,
    Unresponsive,
}

impl From<FfiConsciousness> for Consciousness {
    fn from(level: FfiConsciousness) -> Self {
        match level {
            FfiConsciousness::Alert => Consciousness::Alert,
            FfiConsciousness::Voice => Consciousness::Voice,
            FfiConsciousness::Pain => Consciousness::Pain,
            FfiConsciousness::Unresponsive => Consciousness::Unresponsive,
        }
    }
}

impl From<Consciousness> for FfiConsciousness {
    fn from(level: Consciousness) -> Self {
        match level {
            Consciousness::Alert => FfiConsciousness::Alert,
            Consciousness::Voice => FfiConsciousness::Voice,
            Consciousness::Pain => FfiConsciousness::Pain,
            Consciousness::Unresponsive => FfiConsciousness::Unresponsive,
        }
    }
}

/// FFI-safe urgency tier.
#[derive(Debug, Clone, uniffi::Enum)]
pub enum FfiUrgencyTier {
    Low,
    Moderate,
    Critical,
}

impl From<FfiUrgencyTier> for UrgencyTier {
    fn from(tier: FfiUrgencyTier) -> Self {
        match tier {
            FfiUrgencyTier::Low => UrgencyTier::Low,
            FfiUrgencyTier::Moderate => UrgencyTier::Moderate,
            FfiUrgencyTier::Critical => UrgencyTier::Critical,
        }
    }
}

impl From<UrgencyTier> for FfiUrgencyTier {
    fn from(tier: UrgencyTier) -> Self {
        match tier {
            UrgencyTier::Low => FfiUrgencyTier::Low,
            UrgencyTier::Moderate => FfiUrgencyTier::Moderate,
            UrgencyTier::Critical => FfiUrgencyTier::Critical,
        }
    }
}

/// FFI-safe care state.
#[derive(Debug, Clone, uniffi::Enum)]
pub enum FfiCareState {
    Waiting,
    InCare,
    Attended,
    Referred,
}

impl From<FfiCareState> for CareState {
    fn from(state: FfiCareState) -> Self {
        match state {
            FfiCareState::Waiting => CareState::Waiting,
            FfiCareState::InCare => CareState::InCare,
            FfiCareState::Attended => CareState::Attended,
            FfiCareState::Referred => CareState::Referred,
        }
    }
}

impl From<CareState> for FfiCareState {
    fn from(state: CareState) -> Self {
        match state {
            CareState::Waiting => FfiCareState::Waiting,
            CareState::InCare => FfiCareState::InCare,
            CareState::Attended => FfiCareState::Attended,
            CareState::Referred => FfiCareState::Referred,
        }
    }
}

/// FFI-safe vital-sign reading.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiVitalSigns {
    pub respiratory_rate: u8,
    pub oxygen_saturation: u8,
    pub systolic_bp: u16,
    pub heart_rate: u16,
    pub consciousness: FfiConsciousness,
    pub temperature: f32,
}

impl From<FfiVitalSigns> for VitalSigns {
    fn from(vitals: FfiVitalSigns) -> Self {
        VitalSigns {
            respiratory_rate: vitals.respiratory_rate,
            oxygen_saturation: vitals.oxygen_saturation,
            systolic_bp: vitals.systolic_bp,
            heart_rate: vitals.heart_rate,
            consciousness: vitals.consciousness.into(),
            temperature: vitals.temperature,
        }
    }
}

impl From<VitalSigns> for FfiVitalSigns {
    fn from(vitals: VitalSigns) -> Self {
        Self {
            respiratory_rate: vitals.respiratory_rate,
            oxygen_saturation: vitals.oxygen_saturation,
            systolic_bp: vitals.systolic_bp,
            heart_rate: vitals.heart_rate,
            consciousness: vitals.consciousness.into(),
            temperature: vitals.temperature,
        }
    }
}

/// FFI-safe sub-scores with their total.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSubScores {
    pub respiratory_rate: u8,
    pub oxygen_saturation: u8,
    pub systolic_bp: u8,
    pub heart_rate: u8,
    pub consciousness: u8,
    pub temperature: u8,
    pub total: u8,
}

impl From<SubScores> for FfiSubScores {
    fn from(subscores: SubScores) -> Self {
        let total = subscores.total();
        Self {
            respiratory_rate: subscores.respiratory_rate,
            oxygen_saturation: subscores.oxygen_saturation,
            systolic_bp: subscores.systolic_bp,
            heart_rate: subscores.heart_rate,
            consciousness: subscores.consciousness,
            temperature: subscores.temperature,
            total,
        }
    }
}

impl From<FfiSubScores> for SubScores {
    fn from(subscores: FfiSubScores) -> Self {
        SubScores {
            respiratory_rate: subscores.respiratory_rate,
            oxygen_saturation: subscores.oxygen_saturation,
            systolic_bp: subscores.systolic_bp,
            heart_rate: subscores.heart_rate,
            consciousness: subscores.consciousness,
            temperature: subscores.temperature,
        }
    }
}

/// FFI-safe score result with display metadata.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiScoreResult {
    pub subscores: FfiSubScores,
    pub total: u8,
    pub tier: FfiUrgencyTier,
    pub tier_label: String,
    pub description: String,
    pub max_wait_minutes: u32,
    pub color_hex: String,
}

impl From<ScoreResult> for FfiScoreResult {
    fn from(result: ScoreResult) -> Self {
        Self {
            subscores: result.subscores.clone().into(),
            total: result.total,
            tier_label: result.tier.label().to_string(),
            description: result.tier.description().to_string(),
            tier: result.tier.into(),
            max_wait_minutes: result.max_wait_minutes,
            color_hex: result.color_hex,
        }
    }
}

impl From<FfiScoreResult> for ScoreResult {
    fn from(result: FfiScoreResult) -> Self {
        ScoreResult {
            subscores: result.subscores.into(),
            total: result.total,
            tier: result.tier.into(),
            max_wait_minutes: result.max_wait_minutes,
            color_hex: result.color_hex,
        }
    }
}

/// FFI-safe recorded assessment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAssessment {
    pub id: String,
    pub patient_id: String,
    pub vitals: FfiVitalSigns,
    pub result: FfiScoreResult,
    pub recorded_at: String,
}

impl From<Assessment> for FfiAssessment {
    fn from(assessment: Assessment) -> Self {
        Self {
            id: assessment.id,
            patient_id: assessment.patient_id,
            vitals: assessment.vitals.into(),
            result: assessment.result.into(),
            recorded_at: assessment.recorded_at.to_rfc3339(),
        }
    }
}

impl TryFrom<FfiAssessment> for Assessment {
    type Error = TriageEwsError;

    fn try_from(assessment: FfiAssessment) -> Result<Self, Self::Error> {
        Ok(Assessment {
            id: assessment.id,
            patient_id: assessment.patient_id,
            vitals: assessment.vitals.into(),
            result: assessment.result.into(),
            recorded_at: parse_timestamp(&assessment.recorded_at)?,
        })
    }
}

/// FFI-safe patient snapshot.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientSnapshot {
    pub id: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub record_number: Option<String>,
    pub age_years: Option<u32>,
    pub chief_complaint: String,
    pub care_state: FfiCareState,
    pub arrived_at: String,
}

impl From<PatientSnapshot> for FfiPatientSnapshot {
    fn from(patient: PatientSnapshot) -> Self {
        Self {
            id: patient.id,
            given_name: patient.given_name,
            family_name: patient.family_name,
            record_number: patient.record_number,
            age_years: patient.age_years,
            chief_complaint: patient.chief_complaint,
            care_state: patient.care_state.into(),
            arrived_at: patient.arrived_at.to_rfc3339(),
        }
    }
}

impl TryFrom<FfiPatientSnapshot> for PatientSnapshot {
    type Error = TriageEwsError;

    fn try_from(patient: FfiPatientSnapshot) -> Result<Self, Self::Error> {
        Ok(PatientSnapshot {
            id: patient.id,
            given_name: patient.given_name,
            family_name: patient.family_name,
            record_number: patient.record_number,
            age_years: patient.age_years,
            chief_complaint: patient.chief_complaint,
            care_state: patient.care_state.into(),
            arrived_at: parse_timestamp(&patient.arrived_at)?,
        })
    }
}

/// FFI-safe worklist entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiWorklistEntry {
    pub patient: FfiPatientSnapshot,
    pub assessment: FfiAssessment,
}

impl TryFrom<FfiWorklistEntry> for WorklistEntry {
    type Error = TriageEwsError;

    fn try_from(entry: FfiWorklistEntry) -> Result<Self, Self::Error> {
        Ok(WorklistEntry {
            patient: entry.patient.try_into()?,
            assessment: entry.assessment.try_into()?,
        })
    }
}

/// FFI-safe priority breakdown.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPriorityBreakdown {
    pub severity: u64,
    pub delay: u64,
    pub age: u64,
    pub hypoxia: u64,
    pub hypotension: u64,
    pub heart_rate_extreme: u64,
    pub consciousness: u64,
    pub temperature_extreme: u64,
    pub total: u64,
}

impl From<PriorityBreakdown> for FfiPriorityBreakdown {
    fn from(breakdown: PriorityBreakdown) -> Self {
        let total = breakdown.total();
        Self {
            severity: breakdown.severity,
            delay: breakdown.delay,
            age: breakdown.age,
            hypoxia: breakdown.hypoxia,
            hypotension: breakdown.hypotension,
            heart_rate_extreme: breakdown.heart_rate_extreme,
            consciousness: breakdown.consciousness,
            temperature_extreme: breakdown.temperature_extreme,
            total,
        }
    }
}

/// FFI-safe ranked case.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRankedCase {
    pub patient_id: String,
    pub display_name: String,
    pub total_score: u8,
    pub wait_minutes: u32,
    pub priority: u64,
    pub breakdown: FfiPriorityBreakdown,
}

impl From<RankedCase> for FfiRankedCase {
    fn from(case: RankedCase) -> Self {
        Self {
            patient_id: case.patient_id,
            display_name: case.display_name,
            total_score: case.total_score,
            wait_minutes: case.wait_minutes,
            priority: case.priority,
            breakdown: case.breakdown.into(),
        }
    }
}

/// FFI-safe worklist report.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiWorklistReport {
    pub cases: Vec<FfiRankedCase>,
    pub skipped_non_critical: u32,
    pub skipped_not_waiting: u32,
}

impl From<WorklistReport> for FfiWorklistReport {
    fn from(report: WorklistReport) -> Self {
        Self {
            cases: report.cases.into_iter().map(|c| c.into()).collect(),
            skipped_non_critical: report.skipped_non_critical as u32,
            skipped_not_waiting: report.skipped_not_waiting as u32,
        }
    }
}
