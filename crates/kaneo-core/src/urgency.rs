//! Due-date urgency classification at day granularity.

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt;

/// Number of days ahead (inclusive) that count as "due soon".
pub const DUE_SOON_DAYS: i64 = 3;

/// How pressing a due date is relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    Overdue,
    DueSoon,
    Upcoming,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueSoon => "due-soon",
            Self::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `due` against `now`.
///
/// Both instants are truncated to their calendar date in their own time
/// zone, so time of day never matters. Callers wanting local-calendar
/// semantics convert both to `Local` first.
pub fn classify_urgency<Tz: TimeZone>(due: &DateTime<Tz>, now: &DateTime<Tz>) -> Urgency {
    let days = (due.date_naive() - now.date_naive()).num_days();
    if days < 0 {
        Urgency::Overdue
    } else if days <= DUE_SOON_DAYS {
        Urgency::DueSoon
    } else {
        Urgency::Upcoming
    }
}
