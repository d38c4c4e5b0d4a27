//! Shared UI components reusable across input modules
//!
//! Contains:
//! - `fields` - Labeled text inputs

pub mod fields;
