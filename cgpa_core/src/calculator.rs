//! # CGPA Calculator
//!
//! Pure conversions from validated input to a CGPA and a percentage.
//! Follows the engine pattern used throughout the crate:
//!
//! - [`ValidatedForm`] - parsed input (see [`validate`](crate::validate))
//! - [`CalculationResult`] - output (JSON-serializable)
//! - [`calculate`] - pure calculation function
//!
//! ## Rounding
//!
//! Both outputs are rounded half away from zero to exactly two fractional
//! digits, on the exact decimal value: `83.125` becomes `83.13`, `9` becomes
//! `9.00`. The percentage is derived from the unrounded CGPA and rounded on
//! its own.
//!
//! ## Example
//!
//! ```rust
//! use std::str::FromStr;
//!
//! use cgpa_core::calculator::calculate;
//! use cgpa_core::scale::GradingScale;
//! use cgpa_core::validate::{ValidatedForm, ValidatedInput};
//! use rust_decimal::Decimal;
//!
//! let form = ValidatedForm {
//!     input: ValidatedInput::PerSemester(vec![
//!         Decimal::from_str("8.5").unwrap(),
//!         Decimal::from_str("9.0").unwrap(),
//!     ]),
//!     scale: GradingScale::TenPoint,
//!     custom_scale: None,
//! };
//!
//! let result = calculate(&form).unwrap();
//! assert_eq!(result.cgpa.to_string(), "8.75");
//! assert_eq!(result.percentage.to_string(), "83.13");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::{FormResult, ValidationError};
use crate::scale::{GradingScale, CUSTOM_KEY, FOUR_POINT_KEY, TEN_POINT_KEY};
use crate::validate::{ValidatedForm, ValidatedInput};

/// Fractional digits kept in every result
pub const RESULT_DECIMALS: u32 = 2;

/// Percentage multiplier for the 4.0 scale
pub const FOUR_POINT_MULTIPLIER: Decimal = Decimal::from_parts(25, 0, 0, false, 0);
/// Percentage multiplier for the 10.0 scale (9.5)
pub const TEN_POINT_MULTIPLIER: Decimal = Decimal::from_parts(95, 0, 0, false, 1);
/// Percentage multiplier applied to an unrecognized scale key
pub const FALLBACK_MULTIPLIER: Decimal = Decimal::TEN;

/// CGPA and its percentage equivalent.
///
/// ## JSON Example
///
/// ```json
/// { "cgpa": "8.75", "percentage": "83.13" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Cumulative grade point average, two fractional digits
    pub cgpa: Decimal,
    /// Percentage on the selected scale, two fractional digits
    pub percentage: Decimal,
}

/// Round half away from zero to two fractional digits, always keeping
/// exactly two digits after the point.
///
/// Values too large to carry two fractional digits (above roughly `7.9e26`)
/// are reported as [`Overflow`](ValidationError::Overflow).
pub fn round2(value: Decimal) -> FormResult<Decimal> {
    let mut rounded =
        value.round_dp_with_strategy(RESULT_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(RESULT_DECIMALS);
    if rounded.scale() != RESULT_DECIMALS {
        return Err(ValidationError::overflow("rounding to two decimals"));
    }
    Ok(rounded)
}

/// Unrounded CGPA for the active method.
///
/// Per-semester input gives the arithmetic mean; aggregate input gives
/// `total / semesters`.
pub fn mean_cgpa(input: &ValidatedInput) -> FormResult<Decimal> {
    match input {
        ValidatedInput::PerSemester(values) => {
            if values.is_empty() {
                return Err(ValidationError::EmptyInput);
            }
            let sum = values
                .iter()
                .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
                .ok_or_else(|| ValidationError::overflow("SGPA sum"))?;
            sum.checked_div(Decimal::from(values.len()))
                .ok_or_else(|| ValidationError::overflow("SGPA mean"))
        }
        ValidatedInput::Aggregate { total, semesters } => total
            .checked_div(*semesters)
            .ok_or_else(|| ValidationError::overflow("total SGPA / semesters")),
    }
}

/// CGPA rounded to two fractional digits.
pub fn compute_cgpa(input: &ValidatedInput) -> FormResult<Decimal> {
    mean_cgpa(input).and_then(round2)
}

/// Convert a CGPA to a percentage on the given scale.
///
/// `custom_scale` is only consulted for [`GradingScale::Custom`] and must
/// then be positive.
///
/// ```rust
/// use cgpa_core::calculator::compute_percentage;
/// use cgpa_core::scale::GradingScale;
/// use rust_decimal::Decimal;
///
/// let pct = compute_percentage(Decimal::from(9), GradingScale::FourPoint, None).unwrap();
/// assert_eq!(pct.to_string(), "225.00");
/// ```
pub fn compute_percentage(
    cgpa: Decimal,
    scale: GradingScale,
    custom_scale: Option<Decimal>,
) -> FormResult<Decimal> {
    compute_percentage_for_key(cgpa, scale.key(), custom_scale)
}

/// Convert a CGPA to a percentage, dispatching on a scale selector key.
///
/// Unknown keys fall back to `cgpa * 10`.
pub fn compute_percentage_for_key(
    cgpa: Decimal,
    key: &str,
    custom_scale: Option<Decimal>,
) -> FormResult<Decimal> {
    let percentage = match key {
        FOUR_POINT_KEY => cgpa.checked_mul(FOUR_POINT_MULTIPLIER),
        TEN_POINT_KEY => cgpa.checked_mul(TEN_POINT_MULTIPLIER),
        CUSTOM_KEY => {
            let scale = match custom_scale {
                Some(scale) if scale > Decimal::ZERO => scale,
                Some(scale) => return Err(ValidationError::invalid_custom_scale(scale.to_string())),
                None => return Err(ValidationError::invalid_custom_scale("")),
            };
            cgpa.checked_div(scale)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        }
        _ => cgpa.checked_mul(FALLBACK_MULTIPLIER),
    };

    percentage
        .ok_or_else(|| ValidationError::overflow("percentage"))
        .and_then(round2)
}

/// Compute CGPA and percentage from validated input.
pub fn calculate(form: &ValidatedForm) -> FormResult<CalculationResult> {
    let mean = mean_cgpa(&form.input)?;
    let percentage = compute_percentage(mean, form.scale, form.custom_scale)?;

    Ok(CalculationResult {
        cgpa: round2(mean)?,
        percentage,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use proptest::prelude::*;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn per_semester(values: &[&str]) -> ValidatedInput {
        ValidatedInput::PerSemester(values.iter().map(|v| dec(v)).collect())
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(dec("83.125")).unwrap().to_string(), "83.13");
        assert_eq!(round2(dec("83.124")).unwrap().to_string(), "83.12");
        assert_eq!(round2(dec("0.005")).unwrap().to_string(), "0.01");
        assert_eq!(round2(dec("9")).unwrap().to_string(), "9.00");
        assert_eq!(round2(dec("7.1")).unwrap().to_string(), "7.10");
    }

    #[test]
    fn test_huge_aggregate_reports_overflow() {
        let input = ValidatedInput::Aggregate {
            total: Decimal::from_scientific("1e27").unwrap(),
            semesters: Decimal::ONE,
        };
        assert_eq!(
            compute_cgpa(&input),
            Err(ValidationError::overflow("rounding to two decimals"))
        );

        let form = ValidatedForm {
            input,
            scale: GradingScale::FourPoint,
            custom_scale: None,
        };
        assert!(matches!(calculate(&form), Err(ValidationError::Overflow { .. })));

        let input = ValidatedInput::Aggregate {
            total: Decimal::from_scientific("1e26").unwrap(),
            semesters: Decimal::ONE,
        };
        let cgpa = compute_cgpa(&input).unwrap();
        assert_eq!(cgpa.scale(), RESULT_DECIMALS);
        assert_eq!(cgpa.to_string(), "100000000000000000000000000.00");
    }

    #[test]
    fn test_mean_of_semesters() {
        // (8.5 + 9.0) / 2 = 8.75
        assert_eq!(compute_cgpa(&per_semester(&["8.5", "9.0"])).unwrap(), dec("8.75"));
        // (7 + 8 + 8) / 3 = 7.666... -> 7.67
        assert_eq!(
            compute_cgpa(&per_semester(&["7", "8", "8"])).unwrap().to_string(),
            "7.67"
        );
    }

    #[test]
    fn test_aggregate_division() {
        let input = ValidatedInput::Aggregate {
            total: dec("27"),
            semesters: dec("3"),
        };
        assert_eq!(compute_cgpa(&input).unwrap().to_string(), "9.00");

        let input = ValidatedInput::Aggregate {
            total: dec("25"),
            semesters: dec("3"),
        };
        assert_eq!(compute_cgpa(&input).unwrap().to_string(), "8.33");
    }

    #[test]
    fn test_empty_semesters_rejected() {
        assert_eq!(
            compute_cgpa(&ValidatedInput::PerSemester(vec![])),
            Err(ValidationError::EmptyInput)
        );
    }

    #[test]
    fn test_percentage_fixed_scales() {
        let cgpa = dec("8.75");
        assert_eq!(
            compute_percentage(cgpa, GradingScale::TenPoint, None).unwrap().to_string(),
            "83.13"
        );
        assert_eq!(
            compute_percentage(dec("3.2"), GradingScale::FourPoint, None).unwrap().to_string(),
            "80.00"
        );
    }

    #[test]
    fn test_percentage_custom_scale() {
        // 4 / 5 * 100 = 80
        let pct = compute_percentage(dec("4"), GradingScale::Custom, Some(dec("5"))).unwrap();
        assert_eq!(pct.to_string(), "80.00");

        // 2 / 3 * 100 = 66.666... -> 66.67
        let pct = compute_percentage(dec("2"), GradingScale::Custom, Some(dec("3"))).unwrap();
        assert_eq!(pct.to_string(), "66.67");
    }

    #[test]
    fn test_percentage_custom_scale_requires_positive_value() {
        assert!(compute_percentage(dec("4"), GradingScale::Custom, None).is_err());
        assert_eq!(
            compute_percentage(dec("4"), GradingScale::Custom, Some(Decimal::ZERO)),
            Err(ValidationError::invalid_custom_scale("0"))
        );
    }

    #[test]
    fn test_percentage_fallback_for_unknown_key() {
        let pct = compute_percentage_for_key(dec("7.5"), "5.0", None).unwrap();
        assert_eq!(pct.to_string(), "75.00");
    }

    #[test]
    fn test_custom_scale_ignored_for_fixed_scale() {
        let pct = compute_percentage(dec("8"), GradingScale::TenPoint, Some(dec("4"))).unwrap();
        assert_eq!(pct.to_string(), "76.00");
    }

    #[test]
    fn test_percentage_uses_unrounded_cgpa() {
        // mean = 25/3 = 8.333..., 8.333... * 9.5 = 79.1666... -> 79.17
        // (rounding the CGPA first would give 8.33 * 9.5 = 79.135 -> 79.14)
        let form = ValidatedForm {
            input: ValidatedInput::Aggregate {
                total: dec("25"),
                semesters: dec("3"),
            },
            scale: GradingScale::TenPoint,
            custom_scale: None,
        };
        let result = calculate(&form).unwrap();
        assert_eq!(result.cgpa.to_string(), "8.33");
        assert_eq!(result.percentage.to_string(), "79.17");
    }

    #[test]
    fn test_overflow_is_reported() {
        let pct = compute_percentage(Decimal::MAX, GradingScale::FourPoint, None);
        assert_eq!(pct, Err(ValidationError::overflow("percentage")));
    }

    #[test]
    fn test_result_serialization() {
        let result = CalculationResult {
            cgpa: dec("9.00"),
            percentage: dec("225.00"),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"cgpa":"9.00","percentage":"225.00"}"#);
    }

    fn sgpa() -> impl Strategy<Value = Decimal> {
        (0u32..=1000).prop_map(|hundredths| Decimal::new(hundredths as i64, 2))
    }

    proptest! {
        #[test]
        fn prop_cgpa_is_rounded_mean(values in prop::collection::vec(sgpa(), 1..12)) {
            let sum: Decimal = values.iter().copied().sum();
            let expected = round2(sum / Decimal::from(values.len())).unwrap();
            let cgpa = compute_cgpa(&ValidatedInput::PerSemester(values)).unwrap();
            prop_assert_eq!(cgpa, expected);
            prop_assert!(cgpa >= Decimal::ZERO && cgpa <= Decimal::TEN);
        }

        #[test]
        fn prop_aggregate_is_rounded_quotient(total in 0u32..100_000, semesters in 1u32..20) {
            let total = Decimal::new(total as i64, 2);
            let semesters = Decimal::from(semesters);
            let cgpa = compute_cgpa(&ValidatedInput::Aggregate { total, semesters }).unwrap();
            prop_assert_eq!(cgpa, round2(total / semesters).unwrap());
        }

        #[test]
        fn prop_percentage_is_monotonic(a in sgpa(), b in sgpa(), custom in 1u32..=20) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let custom = Some(Decimal::from(custom));
            for scale in GradingScale::ALL {
                let p_low = compute_percentage(low, scale, custom).unwrap();
                let p_high = compute_percentage(high, scale, custom).unwrap();
                prop_assert!(p_low <= p_high);
            }
        }
    }
}
