//! # Form State
//!
//! [`CgpaForm`] is the single owner of everything the user has typed: the
//! active input method, the per-semester entries, the aggregate fields, the
//! grading scale and the last successful result. It is mutated only through
//! its operations; validation and calculation run as pure functions over
//! borrowed pieces of it.
//!
//! ## Structure
//!
//! ```text
//! CgpaForm
//! ├── method: InputMethod (PerSemester | Aggregate)
//! ├── semesters: SemesterList (>= 2 raw text entries)
//! ├── aggregate: AggregateInput (total SGPA, semester count)
//! ├── scale: GradingScale (4.0 | 10.0 | custom)
//! ├── custom_scale: String
//! └── result: Option<CalculationResult>
//! ```
//!
//! Switching methods keeps both methods' text. Any input change clears the
//! stored result, so a stored result always describes the current inputs.
//!
//! ## Example
//!
//! ```rust
//! use cgpa_core::form::{AggregateField, CgpaForm, InputMethod};
//! use cgpa_core::scale::GradingScale;
//!
//! let mut form = CgpaForm::new();
//! form.set_method(InputMethod::Aggregate);
//! form.set_aggregate_field(AggregateField::TotalSgpa, "27");
//! form.set_aggregate_field(AggregateField::SemesterCount, "3");
//! form.set_scale(GradingScale::FourPoint);
//!
//! let result = form.calculate().unwrap();
//! assert_eq!(result.cgpa.to_string(), "9.00");
//! assert_eq!(result.percentage.to_string(), "225.00");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::calculator::{self, CalculationResult};
use crate::errors::FormResult;
use crate::notify::{FormEvent, FormObserver};
use crate::scale::GradingScale;
use crate::validate;

/// Minimum number of per-semester entries; the first this-many are never removable
pub const MIN_SEMESTER_ENTRIES: usize = 2;

/// Which of the two input shapes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InputMethod {
    /// One SGPA per semester
    #[default]
    PerSemester,
    /// Sum of all SGPAs plus the number of semesters
    Aggregate,
}

impl InputMethod {
    pub const ALL: [InputMethod; 2] = [InputMethod::PerSemester, InputMethod::Aggregate];

    /// Tab label
    pub fn display_name(&self) -> &'static str {
        match self {
            InputMethod::PerSemester => "Method 1: Individual SGPAs",
            InputMethod::Aggregate => "Method 2: Total SGPA & Semesters",
        }
    }
}

impl fmt::Display for InputMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Field of [`AggregateInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregateField {
    TotalSgpa,
    SemesterCount,
}

impl AggregateField {
    pub fn display_name(&self) -> &'static str {
        match self {
            AggregateField::TotalSgpa => "Total SGPA",
            AggregateField::SemesterCount => "Number of Semesters",
        }
    }
}

impl fmt::Display for AggregateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Raw text for the aggregate method.
///
/// ## JSON Example
///
/// ```json
/// { "total_sgpa": "27", "semester_count": "3" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateInput {
    /// Sum of all semester SGPAs
    pub total_sgpa: String,
    /// Number of semesters the total spans
    pub semester_count: String,
}

impl AggregateInput {
    fn get_mut(&mut self, field: AggregateField) -> &mut String {
        match field {
            AggregateField::TotalSgpa => &mut self.total_sgpa,
            AggregateField::SemesterCount => &mut self.semester_count,
        }
    }

    fn clear(&mut self) {
        self.total_sgpa.clear();
        self.semester_count.clear();
    }
}

/// Per-semester SGPA entries, kept as raw text.
///
/// Never holds fewer than [`MIN_SEMESTER_ENTRIES`] entries. Deserializing a
/// shorter list fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SemesterList(Vec<String>);

impl SemesterList {
    /// Two empty entries
    pub fn new() -> Self {
        SemesterList(vec![String::new(); MIN_SEMESTER_ENTRIES])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true: the list holds at least [`MIN_SEMESTER_ENTRIES`] entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    /// Append an empty entry.
    pub fn add(&mut self) {
        self.0.push(String::new());
    }

    /// Whether the entry at `index` exists and may be removed.
    pub fn is_removable(&self, index: usize) -> bool {
        index >= MIN_SEMESTER_ENTRIES && index < self.0.len()
    }

    /// Remove the entry at `index`.
    ///
    /// Returns false (and leaves the list alone) for out-of-range indices
    /// and for the first [`MIN_SEMESTER_ENTRIES`] entries.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.is_removable(index) {
            return false;
        }
        self.0.remove(index);
        true
    }

    /// Replace the text of the entry at `index`. Returns false if out of range.
    pub fn update(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.0.get_mut(index) {
            Some(entry) => {
                *entry = text.into();
                true
            }
            None => false,
        }
    }

    /// Non-empty entries with their original indices, trimmed.
    pub fn filled(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, raw)| (i, raw.trim()))
            .filter(|(_, raw)| !raw.is_empty())
    }
}

impl Default for SemesterList {
    fn default() -> Self {
        SemesterList::new()
    }
}

impl TryFrom<Vec<String>> for SemesterList {
    type Error = String;

    fn try_from(entries: Vec<String>) -> Result<Self, Self::Error> {
        if entries.len() < MIN_SEMESTER_ENTRIES {
            return Err(format!(
                "expected at least {} semester entries, got {}",
                MIN_SEMESTER_ENTRIES,
                entries.len()
            ));
        }
        Ok(SemesterList(entries))
    }
}

impl From<SemesterList> for Vec<String> {
    fn from(list: SemesterList) -> Self {
        list.0
    }
}

/// The whole calculator form for one session.
///
/// ## JSON Example
///
/// Missing fields take their defaults, so a minimal request is enough:
///
/// ```json
/// {
///   "method": "PerSemester",
///   "semesters": ["8.5", "9.0"],
///   "scale": "10.0"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CgpaForm {
    method: InputMethod,
    semesters: SemesterList,
    aggregate: AggregateInput,
    scale: GradingScale,
    custom_scale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<CalculationResult>,
}

impl CgpaForm {
    /// Fresh form: per-semester method, two empty entries, 10.0 scale, no result.
    pub fn new() -> Self {
        CgpaForm {
            method: InputMethod::default(),
            semesters: SemesterList::new(),
            aggregate: AggregateInput::default(),
            scale: GradingScale::default(),
            custom_scale: String::new(),
            result: None,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn method(&self) -> InputMethod {
        self.method
    }

    pub fn semesters(&self) -> &SemesterList {
        &self.semesters
    }

    pub fn aggregate(&self) -> &AggregateInput {
        &self.aggregate
    }

    pub fn scale(&self) -> GradingScale {
        self.scale
    }

    pub fn custom_scale(&self) -> &str {
        &self.custom_scale
    }

    /// Last successful result, if it still matches the inputs
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    // ------------------------------------------------------------------
    // Edits
    // ------------------------------------------------------------------

    /// Append an empty semester entry.
    pub fn add_semester_entry(&mut self) {
        self.semesters.add();
        self.result = None;
        trace!(entries = self.semesters.len(), "added semester entry");
    }

    /// Remove a semester entry. Indices below [`MIN_SEMESTER_ENTRIES`] and
    /// out-of-range indices are ignored; returns whether an entry was removed.
    pub fn remove_semester_entry(&mut self, index: usize) -> bool {
        let removed = self.semesters.remove(index);
        if removed {
            self.result = None;
            trace!(index, entries = self.semesters.len(), "removed semester entry");
        }
        removed
    }

    /// Store raw text for a semester entry. Out-of-range indices are ignored.
    pub fn update_semester_entry(&mut self, index: usize, text: impl Into<String>) -> bool {
        let updated = self.semesters.update(index, text);
        if updated {
            self.result = None;
        }
        updated
    }

    /// Switch input method. The other method's text is kept.
    pub fn set_method(&mut self, method: InputMethod) {
        if self.method != method {
            debug!(?method, "switched input method");
            self.method = method;
            self.result = None;
        }
    }

    pub fn set_aggregate_field(&mut self, field: AggregateField, text: impl Into<String>) {
        *self.aggregate.get_mut(field) = text.into();
        self.result = None;
    }

    pub fn set_scale(&mut self, scale: GradingScale) {
        if self.scale != scale {
            debug!(scale = scale.key(), "switched grading scale");
            self.scale = scale;
            self.result = None;
        }
    }

    pub fn set_custom_scale(&mut self, text: impl Into<String>) {
        self.custom_scale = text.into();
        self.result = None;
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Check the current state without calculating.
    pub fn validate(&self) -> FormResult<()> {
        validate::validate(
            self.method,
            &self.semesters,
            &self.aggregate,
            self.scale,
            &self.custom_scale,
        )
    }

    /// Validate, then compute CGPA and percentage.
    ///
    /// On success the result is stored and returned. On failure the stored
    /// result is cleared and the validation error is returned.
    pub fn calculate(&mut self) -> FormResult<CalculationResult> {
        let outcome = validate::parse_form(
            self.method,
            &self.semesters,
            &self.aggregate,
            self.scale,
            &self.custom_scale,
        )
        .and_then(|parsed| calculator::calculate(&parsed));

        match outcome {
            Ok(result) => {
                debug!(
                    method = ?self.method,
                    scale = self.scale.key(),
                    cgpa = %result.cgpa,
                    percentage = %result.percentage,
                    "calculated CGPA"
                );
                self.result = Some(result.clone());
                Ok(result)
            }
            Err(err) => {
                self.result = None;
                Err(err)
            }
        }
    }

    /// Restore defaults, keeping the active input method.
    pub fn reset(&mut self) {
        self.semesters = SemesterList::new();
        self.aggregate.clear();
        self.scale = GradingScale::default();
        self.custom_scale.clear();
        self.result = None;
        debug!(method = ?self.method, "form reset");
    }

    /// [`calculate`](Self::calculate), then tell `observer` how it went.
    pub fn calculate_notify<O>(&mut self, observer: &mut O) -> FormResult<CalculationResult>
    where
        O: FormObserver + ?Sized,
    {
        let outcome = self.calculate();
        let event = match &outcome {
            Ok(result) => FormEvent::Calculated(result.clone()),
            Err(err) => FormEvent::CalculationFailed(err.clone()),
        };
        observer.notify(&event);
        outcome
    }

    /// [`reset`](Self::reset), then notify `observer`.
    pub fn reset_notify<O>(&mut self, observer: &mut O)
    where
        O: FormObserver + ?Sized,
    {
        self.reset();
        observer.notify(&FormEvent::Reset);
    }
}

impl Default for CgpaForm {
    fn default() -> Self {
        CgpaForm::new()
    }
}
