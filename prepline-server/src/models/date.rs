//! Calendar helpers for target-date defaulting
//!
//! The repository takes "today" as an explicit parameter so the defaulting
//! rule is deterministic under test; only the HTTP and CLI boundaries read
//! the wall clock, and they read it in UTC. No timezone parameter is
//! accepted anywhere.

use chrono::{NaiveDate, Utc};

/// The calendar day after `date`.
///
/// Saturates at `NaiveDate::MAX` rather than wrapping, which is unreachable
/// for any date a kitchen will ever plan for.
pub fn day_after(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(NaiveDate::MAX)
}

/// Today's date by the server's UTC wall clock.
pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}
