//! Vital-sign reading models and input-domain validation.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Legal input domain for respiratory rate (breaths/min).
pub const RESPIRATORY_RATE_DOMAIN: RangeInclusive<u8> = 1..=60;
/// Legal input domain for oxygen saturation (%).
pub const OXYGEN_SATURATION_DOMAIN: RangeInclusive<u8> = 50..=100;
/// Legal input domain for systolic blood pressure (mmHg).
pub const SYSTOLIC_BP_DOMAIN: RangeInclusive<u16> = 50..=300;
/// Legal input domain for heart rate (bpm).
pub const HEART_RATE_DOMAIN: RangeInclusive<u16> = 20..=200;
/// Legal input domain for body temperature (°C, one-decimal readings).
pub const TEMPERATURE_DOMAIN: RangeInclusive<f32> = 30.0..=45.0;

/// AVPU consciousness level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Consciousness {
    /// Awake and oriented
    Alert,
    /// Responds only to verbal stimulus
    Voice,
    /// Responds only to painful stimulus
    Pain,
    /// No response to any stimulus
    Unresponsive,
}

impl Consciousness {
    /// Single-letter chart code (A/V/P/U).
    pub fn code(&self) -> &'static str {
        match self {
            Consciousness::Alert => "A",
            Consciousness::Voice => "V",
            Consciousness::Pain => "P",
            Consciousness::Unresponsive => "U",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Consciousness::Alert => "Alert",
            Consciousness::Voice => "Responds to voice",
            Consciousness::Pain => "Responds to pain",
            Consciousness::Unresponsive => "Unresponsive",
        }
    }

    /// Any level below Alert counts as altered consciousness.
    pub fn is_altered(&self) -> bool {
        !matches!(self, Consciousness::Alert)
    }
}

/// A value outside the declared input domain for one vital sign.
///
/// The engine reports the violation and never clamps; the caller decides
/// whether to reject the reading or correct it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OutOfDomainError {
    #[error("respiratory rate {0} breaths/min is outside the supported range 1-60")]
    RespiratoryRate(u8),
    #[error("oxygen saturation {0}% is outside the supported range 50-100")]
    OxygenSaturation(u8),
    #[error("systolic blood pressure {0} mmHg is outside the supported range 50-300")]
    SystolicBp(u16),
    #[error("heart rate {0} bpm is outside the supported range 20-200")]
    HeartRate(u16),
    #[error("temperature {0:.1}°C is outside the supported range 30.0-45.0")]
    Temperature(f32),
}

/// One complete set of vital-sign measurements taken at intake.
///
/// Immutable value: a repeat measurement is a new `VitalSigns`, never an
/// edit of an old one. Temperature is expected at one-decimal precision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalSigns {
    /// Respiratory rate in breaths per minute
    pub respiratory_rate: u8,
    /// Peripheral oxygen saturation in percent
    pub oxygen_saturation: u8,
    /// Systolic blood pressure in mmHg
    pub systolic_bp: u16,
    /// Heart rate in beats per minute
    pub heart_rate: u16,
    /// AVPU consciousness level
    pub consciousness: Consciousness,
    /// Body temperature in °C
    pub temperature: f32,
}

impl VitalSigns {
    /// Create a reading from all six measurements.
    pub fn new(
        respiratory_rate: u8,
        oxygen_saturation: u8,
        systolic_bp: u16,
        heart_rate: u16,
        consciousness: Consciousness,
        temperature: f32,
    ) -> Self {
        Self {
            respiratory_rate,
            oxygen_saturation,
            systolic_bp,
            heart_rate,
            consciousness,
            temperature,
        }
    }

    /// Check every measurement against its declared domain.
    ///
    /// Reports the first violation in field order. Values outside these
    /// ranges are instrument or transcription defects, not scoreable
    /// readings.
    pub fn validate(&self) -> Result<(), OutOfDomainError> {
        if !RESPIRATORY_RATE_DOMAIN.contains(&self.respiratory_rate) {
            return Err(OutOfDomainError::RespiratoryRate(self.respiratory_rate));
        }
        if !OXYGEN_SATURATION_DOMAIN.contains(&self.oxygen_saturation) {
            return Err(OutOfDomainError::OxygenSaturation(self.oxygen_saturation));
        }
        if !SYSTOLIC_BP_DOMAIN.contains(&self.systolic_bp) {
            return Err(OutOfDomainError::SystolicBp(self.systolic_bp));
        }
        if !HEART_RATE_DOMAIN.contains(&self.heart_rate) {
            return Err(OutOfDomainError::HeartRate(self.heart_rate));
        }
        if !TEMPERATURE_DOMAIN.contains(&self.temperature) {
            return Err(OutOfDomainError::Temperature(self.temperature));
        }
        Ok(())
    }

    /// Convenience check for callers that only need a yes/no.
    pub fn is_in_domain(&self) -> bool {
        self.validate().is_ok()
    }
}
