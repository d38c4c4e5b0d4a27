//! # Input Validation
//!
//! Decides whether the current form state can be calculated and, when it can,
//! parses the raw text into exact decimals. Validation is pure: it borrows the
//! form's pieces and never mutates them.
//!
//! ## Rules (first failure wins)
//!
//! 1. Per-semester method: empty entries are ignored. No remaining entries is
//!    [`EmptyInput`](ValidationError::EmptyInput); any remaining entry that is
//!    not a number in `[0, 10]` is [`OutOfRange`](ValidationError::OutOfRange).
//! 2. Aggregate method: an empty field is
//!    [`MissingField`](ValidationError::MissingField), an unparsable one is
//!    [`NotANumber`](ValidationError::NotANumber), a negative total or a
//!    semester count `<= 0` is [`InvalidRange`](ValidationError::InvalidRange).
//! 3. Custom scale: empty, unparsable or `<= 0` is
//!    [`InvalidCustomScale`](ValidationError::InvalidCustomScale).
//!
//! ## Example
//!
//! ```rust
//! use cgpa_core::form::{AggregateInput, InputMethod, SemesterList};
//! use cgpa_core::scale::GradingScale;
//! use cgpa_core::validate::validate;
//! use cgpa_core::ValidationError;
//!
//! let mut semesters = SemesterList::new();
//! semesters.update(0, "11");
//! semesters.update(1, "5");
//!
//! let err = validate(
//!     InputMethod::PerSemester,
//!     &semesters,
//!     &AggregateInput::default(),
//!     GradingScale::TenPoint,
//!     "",
//! )
//! .unwrap_err();
//! assert_eq!(err, ValidationError::out_of_range(0, "11"));
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::{FormResult, ValidationError};
use crate::form::{AggregateField, AggregateInput, InputMethod, SemesterList};
use crate::scale::GradingScale;

/// Lowest valid per-semester SGPA
pub const SGPA_MIN: Decimal = Decimal::ZERO;
/// Highest valid per-semester SGPA
pub const SGPA_MAX: Decimal = Decimal::TEN;

/// Parsed, range-checked input for the active method.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedInput {
    /// Non-empty SGPA values, in entry order
    PerSemester(Vec<Decimal>),
    /// Sum of SGPAs and the number of semesters it spans
    Aggregate { total: Decimal, semesters: Decimal },
}

/// Everything the calculator needs, already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm {
    pub input: ValidatedInput,
    pub scale: GradingScale,
    /// Present only when `scale` is Custom
    pub custom_scale: Option<Decimal>,
}

/// Largest scale a [`Decimal`] can carry
const MAX_SCALE: u32 = 28;

/// Parse user text as an exact decimal.
///
/// Leading and trailing whitespace is ignored. Plain (`"8.25"`) and scientific
/// (`"1e1"`) notation are accepted; exponents too small to represent are
/// rounded to 28 fractional digits. Digit separators (`"1_0"`) are rejected.
/// Returns `None` for empty text and for anything that is not a finite number
/// representable as a [`Decimal`].
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() || text.contains('_') {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
        .or_else(|| parse_tiny_scientific(text))
}

/// Scientific notation whose scale exceeds [`MAX_SCALE`], e.g. `"1e-30"`.
fn parse_tiny_scientific(text: &str) -> Option<Decimal> {
    let (mantissa, exponent) = text.split_once(|c: char| c == 'e' || c == 'E')?;
    let mantissa = Decimal::from_str(mantissa).ok()?;
    let exponent: i64 = exponent.parse().ok()?;
    if exponent >= 0 {
        return None;
    }

    let excess = i64::from(mantissa.scale()) - exponent - i64::from(MAX_SCALE);
    if excess <= 0 {
        return None;
    }

    let digits = mantissa.mantissa();
    let rounded = match u32::try_from(excess) {
        Ok(excess) if excess <= 38 => {
            let divisor = 10i128.pow(excess);
            let (quotient, remainder) = (digits / divisor, (digits % divisor).abs());
            // half away from zero
            if remainder >= divisor - remainder {
                quotient + digits.signum()
            } else {
                quotient
            }
        }
        _ => 0,
    };
    Decimal::try_from_i128_with_scale(rounded, MAX_SCALE).ok()
}

/// Check whether a form state can be calculated.
///
/// Pure: only reads its inputs. See the module docs for the rule order.
pub fn validate(
    method: InputMethod,
    semesters: &SemesterList,
    aggregate: &AggregateInput,
    scale: GradingScale,
    custom_scale: &str,
) -> FormResult<()> {
    parse_form(method, semesters, aggregate, scale, custom_scale).map(|_| ())
}

/// Validate and parse a form state in one pass.
pub fn parse_form(
    method: InputMethod,
    semesters: &SemesterList,
    aggregate: &AggregateInput,
    scale: GradingScale,
    custom_scale: &str,
) -> FormResult<ValidatedForm> {
    let input = match method {
        InputMethod::PerSemester => parse_semesters(semesters)?,
        InputMethod::Aggregate => parse_aggregate(aggregate)?,
    };

    let custom_scale = if scale.is_custom() {
        Some(parse_custom_scale(custom_scale)?)
    } else {
        None
    };

    Ok(ValidatedForm {
        input,
        scale,
        custom_scale,
    })
}

/// Per-semester rules: at least one non-empty entry, each in `[0, 10]`.
pub fn parse_semesters(semesters: &SemesterList) -> FormResult<ValidatedInput> {
    let filled: Vec<(usize, &str)> = semesters.filled().collect();
    if filled.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let mut values = Vec::with_capacity(filled.len());
    for (index, raw) in filled {
        match parse_decimal(raw) {
            Some(value) if (SGPA_MIN..=SGPA_MAX).contains(&value) => values.push(value),
            _ => return Err(ValidationError::out_of_range(index, raw)),
        }
    }

    Ok(ValidatedInput::PerSemester(values))
}

/// Aggregate rules: both fields present, numeric, total >= 0, count > 0.
pub fn parse_aggregate(aggregate: &AggregateInput) -> FormResult<ValidatedInput> {
    let fields = [
        (AggregateField::TotalSgpa, aggregate.total_sgpa.as_str()),
        (AggregateField::SemesterCount, aggregate.semester_count.as_str()),
    ];

    if let Some((field, _)) = fields.iter().find(|(_, raw)| raw.trim().is_empty()) {
        return Err(ValidationError::MissingField { field: *field });
    }

    let mut parsed = [Decimal::ZERO; 2];
    for (slot, (field, raw)) in parsed.iter_mut().zip(fields.iter()) {
        *slot = parse_decimal(raw).ok_or_else(|| ValidationError::not_a_number(*field, *raw))?;
    }
    let [total, semesters] = parsed;

    if total < Decimal::ZERO {
        return Err(ValidationError::invalid_range(
            AggregateField::TotalSgpa,
            aggregate.total_sgpa.as_str(),
        ));
    }
    if semesters <= Decimal::ZERO {
        return Err(ValidationError::invalid_range(
            AggregateField::SemesterCount,
            aggregate.semester_count.as_str(),
        ));
    }

    Ok(ValidatedInput::Aggregate { total, semesters })
}

/// Custom scale rule: a positive number.
pub fn parse_custom_scale(custom_scale: &str) -> FormResult<Decimal> {
    match parse_decimal(custom_scale) {
        Some(value) if value > Decimal::ZERO => Ok(value),
        _ => Err(ValidationError::invalid_custom_scale(custom_scale)),
    }
}
