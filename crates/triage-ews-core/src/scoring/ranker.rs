//! Critical priority ranking using weighted additive scoring.
//!
//! Factor weights:
//! - Clinical severity: total score × 100
//! - Delay: 10 points per minute waited beyond a 30-minute grace period
//! - Age over 65: +50
//! - Oxygen saturation below 85%: +200
//! - Systolic pressure below 80 mmHg: +150
//! - Heart rate above 140 or below 40 bpm: +150
//! - Pain-responsive or unresponsive: +250
//! - Temperature above 40.0 or below 34.0 °C: +100
//!
//! The penalty thresholds sit beyond the 0-3 band edges: among patients who
//! all maxed a band, the ranker still separates the worst off. Weights are
//! fixed clinical policy, not tuning knobs.

use crate::models::{Consciousness, PriorityBreakdown, ScoreResult, VitalSigns};

/// Points per unit of total score.
const SEVERITY_WEIGHT: u64 = 100;

/// Minutes a critical patient may wait before delay points accrue.
const DELAY_GRACE_MINUTES: u32 = 30;

/// Points per minute waited beyond the grace period.
const DELAY_WEIGHT: u64 = 10;

/// Age above which the elderly bonus applies.
const ELDERLY_AGE_YEARS: u32 = 65;
const ELDERLY_BONUS: u64 = 50;

/// Severe hypoxia: saturation strictly below this.
const HYPOXIA_SPO2_FLOOR: u8 = 85;
const HYPOXIA_BONUS: u64 = 200;

/// Shock: systolic pressure strictly below this.
const SHOCK_SYSTOLIC_FLOOR: u16 = 80;
const SHOCK_BONUS: u64 = 150;

/// Heart-rate extremes: strictly above/below these.
const TACHYCARDIA_CEILING: u16 = 140;
const BRADYCARDIA_FLOOR: u16 = 40;
const HEART_RATE_BONUS: u64 = 150;

const CONSCIOUSNESS_BONUS: u64 = 250;

/// Temperature extremes: strictly above/below these.
const HYPERTHERMIA_CEILING: f32 = 40.0;
const HYPOTHERMIA_FLOOR: f32 = 34.0;
const TEMPERATURE_BONUS: u64 = 100;

/// Per-factor points for one critical case.
///
/// Zero across the board for any tier below Critical; the key only orders
/// patients inside that tier. Recompute whenever wait time or vitals
/// change, the result is never cached.
pub fn critical_priority_breakdown(
    result: &ScoreResult,
    vitals: &VitalSigns,
    wait_minutes: u32,
    age_years: Option<u32>,
) -> PriorityBreakdown {
    if !result.is_critical() {
        return PriorityBreakdown::default();
    }

    let mut breakdown = PriorityBreakdown {
        severity: u64::from(result.total) * SEVERITY_WEIGHT,
        ..PriorityBreakdown::default()
    };

    if wait_minutes > DELAY_GRACE_MINUTES {
        breakdown.delay = u64::from(wait_minutes - DELAY_GRACE_MINUTES) * DELAY_WEIGHT;
    }

    if let Some(age) = age_years {
        if age > ELDERLY_AGE_YEARS {
            breakdown.age = ELDERLY_BONUS;
        }
    }

    if vitals.oxygen_saturation < HYPOXIA_SPO2_FLOOR {
        breakdown.hypoxia = HYPOXIA_BONUS;
    }

    if vitals.systolic_bp < SHOCK_SYSTOLIC_FLOOR {
        breakdown.hypotension = SHOCK_BONUS;
    }

    if vitals.heart_rate > TACHYCARDIA_CEILING || vitals.heart_rate < BRADYCARDIA_FLOOR {
        breakdown.heart_rate_extreme = HEART_RATE_BONUS;
    }

    if matches!(
        vitals.consciousness,
        Consciousness::Pain | Consciousness::Unresponsive
    ) {
        breakdown.consciousness = CONSCIOUSNESS_BONUS;
    }

    if vitals.temperature > HYPERTHERMIA_CEILING || vitals.temperature < HYPOTHERMIA_FLOOR {
        breakdown.temperature_extreme = TEMPERATURE_BONUS;
    }

    breakdown
}

/// The scalar priority key: higher is seen first.
pub fn critical_priority(
    result: &ScoreResult,
    vitals: &VitalSigns,
    wait_minutes: u32,
    age_years: Option<u32>,
) -> u64 {
    critical_priority_breakdown(result, vitals, wait_minutes, age_years).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::calculator::compute_subscores;
    use crate::scoring::classifier::score_result;

    /// Critical reading with no ranker extremes: total 8, nothing past the
    /// penalty thresholds.
    fn critical_vitals() -> (VitalSigns, ScoreResult) {
        let vitals = VitalSigns::new(22, 90, 140, 95, Consciousness::Alert, 38.1);
        let result = score_result(compute_subscores(&vitals).unwrap());
        assert_eq!(result.total, 8);
        assert!(result.is_critical());
        (vitals, result)
    }

    fn moderate_vitals() -> (VitalSigns, ScoreResult) {
        let vitals = VitalSigns::new(24, 88, 160, 110, Consciousness::Alert, 37.2);
        let result = score_result(compute_subscores(&vitals).unwrap());
        assert_eq!(result.total, 6);
        (vitals, result)
    }

    #[test]
    fn test_zero_for_non_critical_tier() {
        let (vitals, result) = moderate_vitals();
        // Extreme wait and age change nothing below the Critical tier.
        assert_eq!(critical_priority(&result, &vitals, 500, Some(90)), 0);
        assert_eq!(
            critical_priority_breakdown(&result, &vitals, 500, Some(90)),
            PriorityBreakdown::default()
        );
    }

    #[test]
    fn test_severity_alone() {
        let (vitals, result) = critical_vitals();
        assert_eq!(critical_priority(&result, &vitals, 0, None), 800);
        assert_eq!(critical_priority(&result, &vitals, 30, Some(65)), 800);
    }

    #[test]
    fn test_delay_accrues_past_grace_period() {
        let (vitals, result) = critical_vitals();
        assert_eq!(critical_priority(&result, &vitals, 30, None), 800);
        assert_eq!(critical_priority(&result, &vitals, 31, None), 810);
        assert_eq!(critical_priority(&result, &vitals, 90, None), 800 + 600);
    }

    #[test]
    fn test_wait_delta_orders_identical_patients() {
        let (vitals, result) = critical_vitals();
        let short = critical_priority(&result, &vitals, 20, None);
        let long = critical_priority(&result, &vitals, 90, None);
        assert!(long > short);
        assert_eq!(long - short, 600);
    }

    #[test]
    fn test_elderly_bonus_requires_known_age_over_65() {
        let (vitals, result) = critical_vitals();
        assert_eq!(critical_priority(&result, &vitals, 0, None), 800);
        assert_eq!(critical_priority(&result, &vitals, 0, Some(65)), 800);
        assert_eq!(critical_priority(&result, &vitals, 0, Some(66)), 850);
    }

    #[test]
    fn test_hypoxia_bonus_below_85() {
        let (mut vitals, result) = critical_vitals();

        vitals.oxygen_saturation = 85;
        assert_eq!(critical_priority(&result, &vitals, 0, None), 800);

        vitals.oxygen_saturation = 84;
        assert_eq!(critical_priority(&result, &vitals, 0, None), 1000);
    }

    #[test]
    fn test_saturation_80_vs_86_differ_by_exactly_200() {
        let (mut vitals, result) = critical_vitals();

        vitals.oxygen_saturation = 86;
        let at_86 = critical_priority(&result, &vitals, 0, None);
        vitals.oxygen_saturation = 80;
        let at_80 = critical_priority(&result, &vitals, 0, None);

        assert_eq!(at_80 - at_86, 200);
    }

    #[test]
    fn test_shock_bonus_below_80_systolic() {
        let (mut vitals, result) = critical_vitals();

        vitals.systolic_bp = 80;
        assert_eq!(critical_priority(&result, &vitals, 0, None), 800);

        vitals.systolic_bp = 79;
        assert_eq!(critical_priority(&result, &vitals, 0, None), 950);
    }

    #[test]
    fn test_heart_rate_bonus_outside_40_to_140() {
        let (mut vitals, result) = critical_vitals();

        vitals.heart_rate = 140;
        assert_eq!(critical_priority(&result, &vitals, 0, None), 800);
        vitals.heart_rate = 141;
        assert_eq!(critical_priority(&result, &vitals, 0, None), 950);

        vitals.heart_rate = 40;
        assert_eq!(critical_priority(&result, &vitals, 0, None), 800);
        vitals.heart_rate = 39;
        assert_eq!(critical_priority(&result, &vitals, 0, None), 950);
    }

    #[test]
    fn test_consciousness_bonus_for_pain_and_unresponsive() {
        let (mut vitals, result) = critical_vitals();

        vitals.consciousness = Consciousness::Voice;
        assert_eq!(critical_priority(&result, &vitals, 0, None), 800);

        vitals.consciousness = Consciousness::Pain;
        assert_eq!(critical_priority(&result, &vitals, 0, None), 1050);

        vitals.consciousness = Consciousness::Unresponsive;
        assert_eq!(critical_priority(&result, &vitals, 0, None), 1050);
    }

    #[test]
    fn test_temperature_bonus_outside_34_to_40() {
        let (mut vitals, result) = critical_vitals();

        vitals.temperature = 40.0;
        assert_eq!(critical_priority(&result, &vitals, 0, None), 800);
        vitals.temperature = 40.1;
        assert_eq!(critical_priority(&result, &vitals, 0, None), 900);

        vitals.temperature = 34.0;
        assert_eq!(critical_priority(&result, &vitals, 0, None), 800);
        vitals.temperature = 33.9;
        assert_eq!(critical_priority(&result, &vitals, 0, None), 900);
    }

    #[test]
    fn test_reference_case_wait_45_age_70() {
        let (vitals, result) = critical_vitals();
        // 8×100 severity, (45−30)×10 delay, +50 elderly; no vital-sign
        // penalty fires for this reading.
        let breakdown = critical_priority_breakdown(&result, &vitals, 45, Some(70));
        assert_eq!(breakdown.severity, 800);
        assert_eq!(breakdown.delay, 150);
        assert_eq!(breakdown.age, 50);
        assert_eq!(breakdown.hypoxia, 0);
        assert_eq!(breakdown.hypotension, 0);
        assert_eq!(breakdown.heart_rate_extreme, 0);
        assert_eq!(breakdown.consciousness, 0);
        assert_eq!(breakdown.temperature_extreme, 0);
        assert_eq!(breakdown.total(), 1000);
    }

    #[test]
    fn test_all_penalties_stack() {
        let vitals = VitalSigns::new(4, 60, 60, 30, Consciousness::Unresponsive, 31.0);
        let result = score_result(compute_subscores(&vitals).unwrap());
        assert_eq!(result.total, 18);

        // 1800 severity + 200 hypoxia + 150 shock + 150 bradycardia
        // + 250 unresponsive + 100 hypothermia.
        assert_eq!(critical_priority(&result, &vitals, 0, None), 2650);
        // Plus 600 delay and 50 elderly.
        assert_eq!(critical_priority(&result, &vitals, 90, Some(80)), 3300);
    }

    #[test]
    fn test_recomputation_is_stable() {
        let (vitals, result) = critical_vitals();
        let first = critical_priority(&result, &vitals, 45, Some(70));
        let second = critical_priority(&result, &vitals, 45, Some(70));
        assert_eq!(first, second);
    }
}
