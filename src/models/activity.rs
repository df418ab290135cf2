//! Time-tracking (apontamento) models.
//!
//! This module defines the [`ActivityEntry`] logged against a company, the
//! [`WorkDuration`] spent on it and the [`ActivityStats`] summarizing a list
//! of entries.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// A duration in whole minutes, written as `H:MM`.
///
/// # Example
///
/// ```
/// use cost_engine::models::WorkDuration;
///
/// let duration: WorkDuration = "1:05".parse().unwrap();
/// assert_eq!(duration.minutes(), 65);
/// assert_eq!(duration.to_string(), "1:05");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkDuration {
    minutes: u64,
}

impl WorkDuration {
    /// The empty duration, `0:00`.
    pub const ZERO: WorkDuration = WorkDuration { minutes: 0 };

    /// Creates a duration from a number of minutes.
    pub fn from_minutes(minutes: u64) -> Self {
        Self { minutes }
    }

    /// Returns the total number of minutes.
    pub fn minutes(&self) -> u64 {
        self.minutes
    }
}

impl FromStr for WorkDuration {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| EngineError::InvalidDuration {
            value: s.to_string(),
            message: message.to_string(),
        };

        let (hours, minutes) = s.trim().split_once(':').ok_or_else(|| invalid("expected H:MM"))?;
        let hours: u64 = hours.parse().map_err(|_| invalid("hours must be a number"))?;
        let minutes: u64 = minutes
            .parse()
            .map_err(|_| invalid("minutes must be a number"))?;

        if minutes >= 60 {
            return Err(invalid("minutes must be below 60"));
        }

        hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(minutes))
            .map(Self::from_minutes)
            .ok_or_else(|| invalid("hours out of range"))
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl Serialize for WorkDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WorkDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// A single time entry.
///
/// Field aliases accept the Portuguese names used by the time-tracking
/// spreadsheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Company the work was done for.
    #[serde(default, alias = "empresa")]
    pub company: String,
    /// Person who did the work.
    #[serde(alias = "responsavel")]
    pub assignee: String,
    /// Person who asked for the work.
    #[serde(default, alias = "solicitante")]
    pub requester: String,
    /// Short name of the activity.
    #[serde(default, alias = "atividade")]
    pub activity: String,
    /// Date as written on the sheet (e.g. "02/03/2026").
    #[serde(default, alias = "data")]
    pub date: String,
    /// Time spent.
    #[serde(alias = "tempo_gasto")]
    pub time_spent: WorkDuration,
    /// Free-form description.
    #[serde(default, alias = "descritivo")]
    pub description: String,
}

/// Summary of a list of time entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStats {
    /// Number of entries.
    pub entry_count: usize,
    /// Sum of the time spent.
    pub total_time: WorkDuration,
    /// Number of distinct assignees.
    pub unique_assignees: usize,
    /// Average minutes per entry, rounded half up; zero without entries.
    pub average_minutes: u64,
    /// `average_minutes` as `H:MM`.
    pub average_time: WorkDuration,
    /// Entries per company.
    pub by_company: BTreeMap<String, usize>,
}
