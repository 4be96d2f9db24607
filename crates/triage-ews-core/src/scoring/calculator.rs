//! Per-parameter band scoring.
//!
//! Each vital sign maps onto a fixed clinical band table worth 0 to 3
//! points; the total early-warning score is the sum over all six. Bands are
//! inclusive on both ends and partition the legal domain with no gaps, so
//! every in-domain reading scores without error.

use crate::models::{Consciousness, OutOfDomainError, SubScores, VitalSigns};

/// Score respiratory rate in breaths/min.
///
/// ≤8→3, 9-11→1, 12-20→0, 21-24→2, ≥25→3.
pub fn respiratory_rate_score(rate: u8) -> u8 {
    match rate {
        0..=8 => 3,
        9..=11 => 1,
        12..=20 => 0,
        21..=24 => 2,
        _ => 3,
    }
}

/// Score oxygen saturation in percent.
///
/// ≤91→3, 92-93→2, 94-95→1, ≥96→0.
pub fn oxygen_saturation_score(saturation: u8) -> u8 {
    match saturation {
        0..=91 => 3,
        92..=93 => 2,
        94..=95 => 1,
        _ => 0,
    }
}

/// Score systolic blood pressure in mmHg.
///
/// ≤90→3, 91-100→2, 101-110→1, 111-219→0, ≥220→3.
pub fn systolic_bp_score(systolic: u16) -> u8 {
    match systolic {
        0..=90 => 3,
        91..=100 => 2,
        101..=110 => 1,
        111..=219 => 0,
        _ => 3,
    }
}

/// Score heart rate in bpm.
///
/// ≤40→3, 41-50→1, 51-90→0, 91-110→1, 111-130→2, ≥131→3.
pub fn heart_rate_score(rate: u16) -> u8 {
    match rate {
        0..=40 => 3,
        41..=50 => 1,
        51..=90 => 0,
        91..=110 => 1,
        111..=130 => 2,
        _ => 3,
    }
}

/// Score AVPU consciousness: anything below Alert takes full points.
pub fn consciousness_score(level: Consciousness) -> u8 {
    match level {
        Consciousness::Alert => 0,
        _ => 3,
    }
}

/// Score body temperature in °C.
///
/// ≤35.0→3, 35.1-36.0→1, 36.1-38.0→0, 38.1-39.0→2, ≥39.1→3. Both extremes
/// score 3 on purpose; hypothermia is as alarming as high fever. Readings
/// come at one-decimal precision, so the guard chain matches the inclusive
/// band bounds exactly.
pub fn temperature_score(temperature: f32) -> u8 {
    if temperature <= 35.0 {
        3
    } else if temperature <= 36.0 {
        1
    } else if temperature <= 38.0 {
        0
    } else if temperature <= 39.0 {
        2
    } else {
        3
    }
}

/// Band every parameter of a validated reading.
///
/// Re-validates defensively; a reading outside the declared domains is
/// reported, never clamped or scored.
pub fn compute_subscores(vitals: &VitalSigns) -> Result<SubScores, OutOfDomainError> {
    vitals.validate()?;

    Ok(SubScores {
        respiratory_rate: respiratory_rate_score(vitals.respiratory_rate),
        oxygen_saturation: oxygen_saturation_score(vitals.oxygen_saturation),
        systolic_bp: systolic_bp_score(vitals.systolic_bp),
        heart_rate: heart_rate_score(vitals.heart_rate),
        consciousness: consciousness_score(vitals.consciousness),
        temperature: temperature_score(vitals.temperature),
    })
}
