//! Patient snapshot as the engine sees it: read-only intake context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where the patient is in the care flow.
///
/// Owned and advanced by the host application; the engine only reads it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CareState {
    /// In the waiting room, not yet seen
    Waiting,
    /// Currently with a clinician
    InCare,
    /// Seen and discharged
    Attended,
    /// Transferred to another service
    Referred,
}

impl CareState {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CareState::Waiting => "Waiting",
            CareState::InCare => "In care",
            CareState::Attended => "Attended",
            CareState::Referred => "Referred",
        }
    }
}

/// Read-only view of one patient's intake record.
///
/// Demographics are optional: unconscious or undocumented arrivals are
/// registered with nothing but a complaint and an arrival time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientSnapshot {
    /// Unique patient ID
    pub id: String,
    /// Given name, if known
    pub given_name: Option<String>,
    /// Family name, if known
    pub family_name: Option<String>,
    /// Document/record number, if known
    pub record_number: Option<String>,
    /// Age in years, if known
    pub age_years: Option<u32>,
    /// Reason for the visit as stated at intake
    pub chief_complaint: String,
    /// Current care-flow state
    pub care_state: CareState,
    /// When the patient arrived at the front desk
    pub arrived_at: DateTime<Utc>,
}

impl PatientSnapshot {
    /// Register an arrival with the minimum the front desk always has.
    pub fn new(chief_complaint: String, arrived_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            given_name: None,
            family_name: None,
            record_number: None,
            age_years: None,
            chief_complaint,
            care_state: CareState::Waiting,
            arrived_at,
        }
    }

    /// Whole minutes waited so far, for priority calculations.
    ///
    /// Zero once the patient is in care or attended. Referred patients keep
    /// accruing wait until the transfer actually happens.
    pub fn wait_minutes(&self, now: DateTime<Utc>) -> u32 {
        if matches!(self.care_state, CareState::Attended | CareState::InCare) {
            return 0;
        }
        now.signed_duration_since(self.arrived_at)
            .num_minutes()
            .max(0) as u32
    }

    /// Wait formatted for the waiting-room board.
    pub fn wait_display(&self, now: DateTime<Utc>) -> String {
        match self.care_state {
            CareState::Attended => return "Attended".into(),
            CareState::InCare => return "In care".into(),
            _ => {}
        }

        let minutes = self.wait_minutes(now);
        let days = minutes / (24 * 60);
        let hours = (minutes % (24 * 60)) / 60;
        let mins = minutes % 60;

        if days > 0 {
            format!("{}d {}h", days, hours)
        } else if hours > 0 {
            format!("{}h {}m", hours, mins)
        } else {
            format!("{}m", mins)
        }
    }

    /// Best available display name, falling back for undocumented arrivals.
    pub fn display_name(&self) -> String {
        match (&self.given_name, &self.family_name) {
            (Some(given), Some(family)) => format!("{} {}", given, family),
            (Some(given), None) => given.clone(),
            (None, Some(family)) => family.clone(),
            (None, None) => match &self.record_number {
                Some(record) => format!("Patient record {}", record),
                None => "Unidentified patient".into(),
            },
        }
    }

    /// Whether the patient arrived with any identity on file.
    pub fn is_identified(&self) -> bool {
        self.given_name.is_some() || self.family_name.is_some() || self.record_number.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn arrival() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_new_patient_defaults() {
        let patient = PatientSnapshot::new("chest pain".into(), arrival());
        assert_eq!(patient.chief_complaint, "chest pain");
        assert_eq!(patient.care_state, CareState::Waiting);
        assert!(!patient.is_identified());
        assert_eq!(patient.id.len(), 36); // UUID format
    }

    #[test]
    fn test_wait_minutes_while_waiting() {
        let patient = PatientSnapshot::new("fall".into(), arrival());
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 45, 0).unwrap();
        assert_eq!(patient.wait_minutes(now), 45);
    }

    #[test]
    fn test_wait_minutes_zero_once_in_care_or_attended() {
        let mut patient = PatientSnapshot::new("fall".into(), arrival());
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        patient.care_state = CareState::InCare;
        assert_eq!(patient.wait_minutes(now), 0);

        patient.care_state = CareState::Attended;
        assert_eq!(patient.wait_minutes(now), 0);
    }

    #[test]
    fn test_wait_minutes_keeps_accruing_when_referred() {
        let mut patient = PatientSnapshot::new("fracture".into(), arrival());
        patient.care_state = CareState::Referred;
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 11, 30, 0).unwrap();
        assert_eq!(patient.wait_minutes(now), 90);
    }

    #[test]
    fn test_wait_minutes_never_negative() {
        let patient = PatientSnapshot::new("headache".into(), arrival());
        let before_arrival = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(patient.wait_minutes(before_arrival), 0);
    }

    #[test]
    fn test_wait_display_formats() {
        let patient = PatientSnapshot::new("fall".into(), arrival());

        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 45, 0).unwrap();
        assert_eq!(patient.wait_display(now), "45m");

        let now = Utc.with_ymd_and_hms(2024, 3, 1, 13, 12, 0).unwrap();
        assert_eq!(patient.wait_display(now), "3h 12m");

        let now = Utc.with_ymd_and_hms(2024, 3, 3, 14, 0, 0).unwrap();
        assert_eq!(patient.wait_display(now), "2d 4h");
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut patient = PatientSnapshot::new("unconscious on arrival".into(), arrival());
        assert_eq!(patient.display_name(), "Unidentified patient");

        patient.record_number = Some("30123456".into());
        assert_eq!(patient.display_name(), "Patient record 30123456");
        assert!(patient.is_identified());

        patient.family_name = Some("Rivas".into());
        assert_eq!(patient.display_name(), "Rivas");

        patient.given_name = Some("Elena".into());
        assert_eq!(patient.display_name(), "Elena Rivas");
    }
}
