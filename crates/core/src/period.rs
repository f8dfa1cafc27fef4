//! Progress horizons a transformation can be requested for.
//!
//! The set is closed: three identifiers are accepted on the wire and
//! anything else resolves to [`Period::DEFAULT`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Simulated elapsed time between the uploaded photo and the generated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "4months")]
    FourMonths,
    #[serde(rename = "6months")]
    SixMonths,
}

impl Period {
    /// Every supported period, in ascending order.
    pub const ALL: [Period; 3] = [Period::ThreeMonths, Period::FourMonths, Period::SixMonths];

    /// Period used when the caller omits the field or sends an unknown value.
    pub const DEFAULT: Period = Period::ThreeMonths;

    /// Wire identifier, e.g. `"3months"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ThreeMonths => "3months",
            Self::FourMonths => "4months",
            Self::SixMonths => "6months",
        }
    }

    pub fn months(self) -> u32 {
        match self {
            Self::ThreeMonths => 3,
            Self::FourMonths => 4,
            Self::SixMonths => 6,
        }
    }

    /// Human-readable label for period selectors.
    pub fn label(self) -> &'static str {
        match self {
            Self::ThreeMonths => "3 months later",
            Self::FourMonths => "4 months later",
            Self::SixMonths => "6 months later",
        }
    }

    /// Resolve an optional wire identifier, falling back to [`Period::DEFAULT`].
    ///
    /// Surrounding whitespace is ignored. Empty and unrecognized values
    /// never fail.
    pub fn resolve(id: Option<&str>) -> Period {
        id.and_then(|s| s.trim().parse().ok())
            .unwrap_or(Self::DEFAULT)
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown period '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_every_wire_identifier() {
        for period in Period::ALL {
            assert_eq!(period.as_str().parse::<Period>().unwrap(), period);
        }
    }

    #[test]
    fn unknown_identifier_is_a_validation_error() {
        assert_matches!("12months".parse::<Period>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn resolve_falls_back_to_default() {
        assert_eq!(Period::resolve(None), Period::ThreeMonths);
        assert_eq!(Period::resolve(Some("")), Period::ThreeMonths);
        assert_eq!(Period::resolve(Some("1year")), Period::ThreeMonths);
    }

    #[test]
    fn resolve_trims_whitespace() {
        assert_eq!(Period::resolve(Some(" 6months\n")), Period::SixMonths);
    }

    #[test]
    fn serde_uses_wire_identifiers() {
        let json = serde_json::to_string(&Period::FourMonths).unwrap();
        assert_eq!(json, r#""4months""#);

        let parsed: Period = serde_json::from_str(r#""6months""#).unwrap();
        assert_eq!(parsed, Period::SixMonths);
    }

    #[test]
    fn months_match_identifiers() {
        for period in Period::ALL {
            assert_eq!(period.as_str(), format!("{}months", period.months()));
        }
    }
}
