//! # cgpa_core - SGPA to CGPA Calculation Engine
//!
//! `cgpa_core` is the computational heart of the SGPA2CGPA calculator: it
//! turns semester grade point averages into a cumulative grade point average
//! and a percentage on a chosen grading scale. Front-ends (GUI, CLI) only
//! forward user actions to a [`CgpaForm`] and display what comes back.
//!
//! ## Design Philosophy
//!
//! - **One owner**: all input state lives in a single [`CgpaForm`]
//! - **Pure core**: validation and calculation are free functions over borrowed data
//! - **Exact decimals**: inputs parse to [`rust_decimal::Decimal`], no float drift
//! - **Rich Errors**: structured error types, not just strings
//! - **JSON-First**: every model type implements Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use cgpa_core::CgpaForm;
//!
//! let mut form = CgpaForm::new();
//! form.update_semester_entry(0, "8.5");
//! form.update_semester_entry(1, "9.0");
//!
//! let result = form.calculate().unwrap();
//! assert_eq!(result.cgpa.to_string(), "8.75");
//! assert_eq!(result.percentage.to_string(), "83.13");
//! ```
//!
//! ## Modules
//!
//! - [`form`] - Form state and the user-facing operations
//! - [`validate`] - Input validation and decimal parsing
//! - [`calculator`] - CGPA and percentage conversion
//! - [`scale`] - Grading scales
//! - [`notify`] - Events for the presentation layer
//! - [`errors`] - Structured error types

pub mod calculator;
pub mod errors;
pub mod form;
pub mod notify;
pub mod scale;
pub mod validate;

// Re-export commonly used types at crate root for convenience
pub use calculator::CalculationResult;
pub use errors::{FormResult, ValidationError};
pub use form::{AggregateField, AggregateInput, CgpaForm, InputMethod, SemesterList};
pub use notify::{FormEvent, FormObserver, NoopObserver};
pub use scale::GradingScale;
