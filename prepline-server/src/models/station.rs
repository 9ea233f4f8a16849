//! Station name validation

use super::ValidationError;

/// Maximum length for station names (column width).
const MAX_STATION_NAME_LEN: usize = 100;

/// Validated station name: trimmed, non-empty, fits the column.
///
/// Station names are free text ("Larder", "Hot"), so the only rules are
/// emptiness and length. Uniqueness is the database's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationName(String);

impl StationName {
    /// Create a station name from raw input, trimming surrounding whitespace.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "station name",
            });
        }

        if trimmed.len() > MAX_STATION_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "station name",
                max: MAX_STATION_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert_eq!(StationName::new("Larder").unwrap().as_str(), "Larder");
        assert_eq!(StationName::new("Hot").unwrap().as_str(), "Hot");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(StationName::new("  Grill  ").unwrap().as_str(), "Grill");
    }

    #[test]
    fn rejects_blank() {
        assert!(matches!(
            StationName::new("   ").unwrap_err(),
            ValidationError::Empty { .. }
        ));
        assert!(matches!(
            StationName::new("").unwrap_err(),
            ValidationError::Empty { .. }
        ));
    }

    #[test]
    fn max_length() {
        let name_100 = "a".repeat(100);
        assert!(StationName::new(&name_100).is_ok());

        let name_101 = "a".repeat(101);
        assert!(matches!(
            StationName::new(&name_101).unwrap_err(),
            ValidationError::TooLong { max: 100, .. }
        ));
    }
}
