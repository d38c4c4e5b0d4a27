//! # Grading Scales
//!
//! The grading scale decides how a CGPA converts to a percentage. Scales are
//! identified on the wire by the keys of the scale selector: `"4.0"`, `"10.0"`
//! and `"custom"`.
//!
//! | Scale     | Percentage formula              |
//! |-----------|---------------------------------|
//! | 4.0       | `cgpa * 25`                     |
//! | 10.0      | `cgpa * 9.5`                    |
//! | Custom    | `cgpa / custom_scale * 100`     |
//! | (unknown) | `cgpa * 10`                     |

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Selector key for the 4-point scale
pub const FOUR_POINT_KEY: &str = "4.0";
/// Selector key for the 10-point scale
pub const TEN_POINT_KEY: &str = "10.0";
/// Selector key for a user-supplied scale
pub const CUSTOM_KEY: &str = "custom";

/// Grading scale used for the percentage conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GradingScale {
    /// 4.0 scale
    #[serde(rename = "4.0")]
    FourPoint,
    /// 10.0 scale (most common in India)
    #[default]
    #[serde(rename = "10.0")]
    TenPoint,
    /// User-supplied maximum GPA
    #[serde(rename = "custom")]
    Custom,
}

impl GradingScale {
    /// All scales, in selector order (for pick lists)
    pub const ALL: [GradingScale; 3] = [
        GradingScale::FourPoint,
        GradingScale::TenPoint,
        GradingScale::Custom,
    ];

    /// Selector key for this scale
    pub fn key(&self) -> &'static str {
        match self {
            GradingScale::FourPoint => FOUR_POINT_KEY,
            GradingScale::TenPoint => TEN_POINT_KEY,
            GradingScale::Custom => CUSTOM_KEY,
        }
    }

    /// Look up a scale by its selector key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            FOUR_POINT_KEY => Some(GradingScale::FourPoint),
            TEN_POINT_KEY => Some(GradingScale::TenPoint),
            CUSTOM_KEY => Some(GradingScale::Custom),
            _ => None,
        }
    }

    /// Label shown in the scale picker
    pub fn display_name(&self) -> &'static str {
        match self {
            GradingScale::FourPoint => "4.0 scale",
            GradingScale::TenPoint => "10.0 scale (most common in India)",
            GradingScale::Custom => "Custom scale",
        }
    }

    /// Maximum grade point for the fixed scales; `None` for Custom.
    pub fn max_points(&self) -> Option<Decimal> {
        match self {
            GradingScale::FourPoint => Some(Decimal::from(4)),
            GradingScale::TenPoint => Some(Decimal::TEN),
            GradingScale::Custom => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, GradingScale::Custom)
    }
}

impl fmt::Display for GradingScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for GradingScale {
    type Err = String;

    /// Accepts selector keys plus the short names `four`, `ten` and `custom`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "four" | "4" => Ok(GradingScale::FourPoint),
            "ten" | "10" => Ok(GradingScale::TenPoint),
            other => GradingScale::from_key(other)
                .ok_or_else(|| format!("Unknown grading scale: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ten_point() {
        assert_eq!(GradingScale::default(), GradingScale::TenPoint);
    }

    #[test]
    fn test_key_roundtrip() {
        for scale in GradingScale::ALL {
            assert_eq!(GradingScale::from_key(scale.key()), Some(scale));
        }
        assert_eq!(GradingScale::from_key("5.0"), None);
    }

    #[test]
    fn test_serializes_as_selector_key() {
        let json = serde_json::to_string(&GradingScale::FourPoint).unwrap();
        assert_eq!(json, "\"4.0\"");

        let scale: GradingScale = serde_json::from_str("\"custom\"").unwrap();
        assert_eq!(scale, GradingScale::Custom);
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("ten".parse::<GradingScale>(), Ok(GradingScale::TenPoint));
        assert_eq!("4.0".parse::<GradingScale>(), Ok(GradingScale::FourPoint));
        assert_eq!(" Custom ".parse::<GradingScale>(), Ok(GradingScale::Custom));
        assert!("seven".parse::<GradingScale>().is_err());
    }

    #[test]
    fn test_max_points() {
        assert_eq!(GradingScale::FourPoint.max_points(), Some(Decimal::from(4)));
        assert_eq!(GradingScale::Custom.max_points(), None);
    }
}
