//! Task input models
//!
//! Three shapes cross the repository boundary:
//! - `TaskDraft`: everything needed to create a task
//! - `TaskPatch`: a presence-aware partial update
//! - `TaskFilter`: optional AND-combined listing filters

use chrono::NaiveDate;
use serde::Deserialize;

use super::{Priority, ValidationError};

/// Maximum length for task titles (column width).
const MAX_TITLE_LEN: usize = 255;

/// Validated task title: trimmed, non-empty, fits the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTitle(String);

impl TaskTitle {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        if trimmed.len() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Input for task creation.
///
/// `station_id` existence is deliberately not pre-validated; the foreign key
/// enforces it at insert time. A missing `target_date` defaults to the day
/// after the injected "today" inside the repository.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub station_id: i32,
    pub title: TaskTitle,
    pub details: Option<String>,
    pub priority: Priority,
    pub target_date: Option<NaiveDate>,
    pub created_by: Option<String>,
}

/// Presence-aware partial update.
///
/// An absent field is skipped; a present field is applied even when it is
/// empty or false. `details` is double-optional so an explicit null clears
/// the column while an absent key leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub details: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub target_date: Option<NaiveDate>,
    pub is_done: Option<bool>,
}

impl TaskPatch {
    /// True when no field is present. An empty patch is a caller error.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.details.is_none()
            && self.priority.is_none()
            && self.target_date.is_none()
            && self.is_done.is_none()
    }
}

/// Optional listing filters, AND-combined. Any subset is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFilter {
    pub station_id: Option<i32>,
    pub target_date: Option<NaiveDate>,
    pub is_done: Option<bool>,
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        self.station_id.is_none() && self.target_date.is_none() && self.is_done.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_trims_and_accepts() {
        let title = TaskTitle::new("  Sear 10 steaks  ").unwrap();
        assert_eq!(title.as_str(), "Sear 10 steaks");
    }

    #[test]
    fn title_rejects_blank() {
        assert!(matches!(
            TaskTitle::new("   ").unwrap_err(),
            ValidationError::Empty { .. }
        ));
    }

    #[test]
    fn title_max_length() {
        assert!(TaskTitle::new(&"a".repeat(255)).is_ok());
        assert!(matches!(
            TaskTitle::new(&"a".repeat(256)).unwrap_err(),
            ValidationError::TooLong { max: 255, .. }
        ));
    }

    #[test]
    fn empty_patch_is_empty() {
        assert!(TaskPatch::default().is_empty());
    }

    #[test]
    fn patch_with_false_is_not_empty() {
        // false is an applied value, not an absent one
        let patch = TaskPatch {
            is_done: Some(false),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn patch_with_null_details_is_not_empty() {
        let patch = TaskPatch {
            details: Some(None),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn filter_subsets() {
        assert!(TaskFilter::default().is_empty());

        let filter = TaskFilter {
            is_done: Some(false),
            ..Default::default()
        };
        assert!(!filter.is_empty());
    }
}
