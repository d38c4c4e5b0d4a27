//! # Notifications
//!
//! Outbound events for the presentation layer. The form never displays
//! anything itself; front-ends hand an observer to
//! [`CgpaForm::calculate_notify`](crate::form::CgpaForm::calculate_notify) and
//! [`CgpaForm::reset_notify`](crate::form::CgpaForm::reset_notify) and show
//! the event however they like (toast, status bar, stderr).
//!
//! Closures work as observers:
//!
//! ```rust
//! use cgpa_core::form::CgpaForm;
//! use cgpa_core::notify::FormEvent;
//!
//! let mut last_message = String::new();
//! let mut form = CgpaForm::new();
//! form.reset_notify(&mut |event: &FormEvent| last_message = event.message());
//! assert_eq!(last_message, "Calculator reset successfully!");
//! ```

use serde::{Deserialize, Serialize};

use crate::calculator::CalculationResult;
use crate::errors::ValidationError;

/// Something the user should be told about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload")]
pub enum FormEvent {
    /// Calculate succeeded
    Calculated(CalculationResult),
    /// Calculate was rejected
    CalculationFailed(ValidationError),
    /// The form was reset to defaults
    Reset,
}

impl FormEvent {
    /// Short text for a transient banner.
    pub fn message(&self) -> String {
        match self {
            FormEvent::Calculated(_) => "CGPA calculated successfully!".to_string(),
            FormEvent::CalculationFailed(err) => err.user_message().to_string(),
            FormEvent::Reset => "Calculator reset successfully!".to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormEvent::CalculationFailed(_))
    }
}

/// Receiver for [`FormEvent`]s.
pub trait FormObserver {
    fn notify(&mut self, event: &FormEvent);
}

impl<F> FormObserver for F
where
    F: FnMut(&FormEvent),
{
    fn notify(&mut self, event: &FormEvent) {
        self(event)
    }
}

/// Observer that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl FormObserver for NoopObserver {
    fn notify(&mut self, _event: &FormEvent) {}
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::*;
    use crate::form::CgpaForm;

    #[test]
    fn test_messages() {
        let result = CalculationResult {
            cgpa: Decimal::from_str("8.75").unwrap(),
            percentage: Decimal::from_str("83.13").unwrap(),
        };
        assert_eq!(
            FormEvent::Calculated(result).message(),
            "CGPA calculated successfully!"
        );
        assert_eq!(
            FormEvent::CalculationFailed(ValidationError::EmptyInput).message(),
            "Please enter at least one SGPA"
        );
        assert_eq!(FormEvent::Reset.message(), "Calculator reset successfully!");
    }

    #[test]
    fn test_is_error() {
        assert!(FormEvent::CalculationFailed(ValidationError::EmptyInput).is_error());
        assert!(!FormEvent::Reset.is_error());
    }

    #[test]
    fn test_noop_observer() {
        let mut form = CgpaForm::new();
        assert!(form.calculate_notify(&mut NoopObserver).is_err());
        form.reset_notify(&mut NoopObserver);
    }

    #[test]
    fn test_dyn_observer() {
        struct Counter(usize);
        impl FormObserver for Counter {
            fn notify(&mut self, _event: &FormEvent) {
                self.0 += 1;
            }
        }

        let mut counter = Counter(0);
        let observer: &mut dyn FormObserver = &mut counter;
        let mut form = CgpaForm::new();
        form.reset_notify(observer);
        form.reset_notify(observer);
        assert_eq!(counter.0, 2);
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_string(&FormEvent::Reset).unwrap();
        assert_eq!(json, r#"{"event":"Reset"}"#);
    }
}
