//! Task priority
//!
//! Binary urgency flag. Affects display order only: `high` tasks sort before
//! `normal` tasks in every listing.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Task priority, `normal` unless the cook says otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    High,
}

impl Priority {
    /// Parse untrusted request input.
    ///
    /// Only the exact strings `normal` and `high` are accepted; anything else
    /// is a validation error, never coerced.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            other => Err(ValidationError::InvalidValue {
                field: "priority",
                value: other.to_owned(),
            }),
        }
    }

    /// String form, matching the stored column values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_variants() {
        assert_eq!(Priority::parse("normal").unwrap(), Priority::Normal);
        assert_eq!(Priority::parse("high").unwrap(), Priority::High);
    }

    #[test]
    fn rejects_unknown_value() {
        let err = Priority::parse("urgent").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn rejects_case_variants() {
        assert!(Priority::parse("High").is_err());
        assert!(Priority::parse("NORMAL").is_err());
    }

    #[test]
    fn defaults_to_normal() {
        assert_eq!(Priority::default(), Priority::Normal);
    }

    #[test]
    fn round_trips_as_str() {
        for p in [Priority::Normal, Priority::High] {
            assert_eq!(Priority::parse(p.as_str()).unwrap(), p);
        }
    }
}
