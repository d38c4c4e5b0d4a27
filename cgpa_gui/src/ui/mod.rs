//! UI module for the SGPA2CGPA GUI
//!
//! The window is a single scrolling page, top to bottom:
//!
//! # Panel Structure
//! - `toolbar` - Settings menu, page header and footer text
//! - `input_panel` - Method tabs: dispatches to input_* child modules
//! - `input_scale` - Grading scale picker, custom scale, Calculate / Reset
//! - `results_panel` - CGPA and percentage once calculated
//! - `status_bar` - Latest notification (success or error)
//!
//! # Input Panel Children
//! - `input_semesters` - One SGPA field per semester, add/remove
//! - `input_aggregate` - Total SGPA and number of semesters
//!
//! # Shared Components
//! - `shared/fields` - Labeled text inputs

// Top-level panels
pub mod toolbar;
pub mod input_panel;
pub mod input_scale;
pub mod results_panel;
pub mod status_bar;

// Input panel children
pub mod input_aggregate;
pub mod input_semesters;

// Shared components
pub mod shared;
