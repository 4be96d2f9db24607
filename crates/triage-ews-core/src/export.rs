//! Dashboard and waiting-room payload builders for the host application.
//!
//! Pure data assembly, no transport: the host serves these over whatever
//! channel it likes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CareState, RankedCase};
use crate::worklist::{rank_critical_cases, tier_tally, TierTally, WorklistEntry};

/// Most critical cases shown on the dashboard at once.
const CRITICAL_CASES_LIMIT: usize = 10;

/// One row on the waiting-room board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitingRoomRow {
    /// Patient ID
    pub patient_id: String,
    /// Display name (with unidentified-arrival fallback)
    pub display_name: String,
    /// Document/record number, if known
    pub record_number: Option<String>,
    /// Age in years, if known
    pub age_years: Option<u32>,
    /// Stated reason for the visit
    pub chief_complaint: String,
    /// Wait formatted for display ("45m", "3h 12m")
    pub wait_display: String,
    /// Wait in whole minutes
    pub wait_minutes: u32,
    /// Urgency tier label
    pub tier_label: String,
    /// Tier display color
    pub color_hex: String,
}

/// The waiting-room board: everyone still waiting, newest arrival first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitingRoomExport {
    /// When this payload was assembled
    pub generated_at: String,
    /// Board rows
    pub rows: Vec<WaitingRoomRow>,
}

impl WaitingRoomExport {
    /// Build the board from the host's current entries.
    ///
    /// Patients already in care or attended are left off; rows are ordered
    /// newest arrival first, matching the front-desk sidebar.
    pub fn from_entries(entries: &[WorklistEntry], now: DateTime<Utc>) -> Self {
        let mut waiting: Vec<&WorklistEntry> = entries
            .iter()
            .filter(|entry| entry.patient.care_state == CareState::Waiting)
            .collect();
        waiting.sort_by(|a, b| b.patient.arrived_at.cmp(&a.patient.arrived_at));

        let rows = waiting
            .into_iter()
            .map(|entry| WaitingRoomRow {
                patient_id: entry.patient.id.clone(),
                display_name: entry.patient.display_name(),
                record_number: entry.patient.record_number.clone(),
                age_years: entry.patient.age_years,
                chief_complaint: entry.patient.chief_complaint.clone(),
                wait_display: entry.patient.wait_display(now),
                wait_minutes: entry.patient.wait_minutes(now),
                tier_label: entry.assessment.result.tier.label().to_string(),
                color_hex: entry.assessment.result.color_hex.clone(),
            })
            .collect();

        Self {
            generated_at: now.to_rfc3339(),
            rows,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        // Header
        csv.push_str(
            "patient_id,display_name,record_number,age_years,chief_complaint,wait,tier\n",
        );

        for row in &self.rows {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                escape_csv(&row.patient_id),
                escape_csv(&row.display_name),
                row.record_number.as_deref().unwrap_or(""),
                row.age_years.map(|a| a.to_string()).unwrap_or_default(),
                escape_csv(&row.chief_complaint),
                escape_csv(&row.wait_display),
                escape_csv(&row.tier_label),
            ));
        }

        csv
    }
}

/// Real-time dashboard numbers: tier tally plus the top critical cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardExport {
    /// When this payload was assembled
    pub generated_at: String,
    /// Counts per tier over the supplied entries
    pub tally: TierTally,
    /// Highest-priority critical cases, capped for display
    pub critical_cases: Vec<RankedCase>,
}

impl DashboardExport {
    /// Build the dashboard payload from the host's current entries.
    pub fn from_entries(entries: &[WorklistEntry], now: DateTime<Utc>) -> Self {
        let assessments: Vec<_> = entries
            .iter()
            .map(|entry| entry.assessment.clone())
            .collect();

        let mut critical_cases = rank_critical_cases(entries, now).cases;
        critical_cases.truncate(CRITICAL_CASES_LIMIT);

        Self {
            generated_at: now.to_rfc3339(),
            tally: tier_tally(&assessments),
            critical_cases,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
