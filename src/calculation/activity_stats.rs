//! Time-tracking statistics.

use std::collections::{BTreeMap, HashSet};

use crate::models::{ActivityEntry, ActivityStats, WorkDuration};

/// Company name used for entries that do not name one.
pub const UNCATEGORIZED_COMPANY: &str = "Sem categoria";

/// Adds durations, carrying minutes into hours. Saturates at `u64::MAX` minutes.
///
/// # Examples
///
/// ```
/// use cost_engine::calculation::sum_durations;
/// use cost_engine::models::WorkDuration;
///
/// let total = sum_durations(&[
///     "0:45".parse::<WorkDuration>().unwrap(),
///     "0:30".parse::<WorkDuration>().unwrap(),
/// ]);
/// assert_eq!(total.to_string(), "1:15");
/// ```
pub fn sum_durations(durations: &[WorkDuration]) -> WorkDuration {
    WorkDuration::from_minutes(
        durations
            .iter()
            .fold(0u64, |total, d| total.saturating_add(d.minutes())),
    )
}

/// Summarizes a list of time entries.
///
/// The average is the total minutes over the entry count, rounded half up,
/// and zero when there are no entries.
pub fn activity_stats(entries: &[ActivityEntry]) -> ActivityStats {
    let durations: Vec<WorkDuration> = entries.iter().map(|e| e.time_spent).collect();
    let total_time = sum_durations(&durations);

    let unique_assignees = entries
        .iter()
        .map(|e| e.assignee.as_str())
        .collect::<HashSet<_>>()
        .len();

    let mut by_company = BTreeMap::new();
    for entry in entries {
        let company = match entry.company.trim() {
            "" => UNCATEGORIZED_COMPANY,
            name => name,
        };
        *by_company.entry(company.to_string()).or_insert(0) += 1;
    }

    let average_minutes = average_rounded(total_time.minutes(), entries.len() as u64);

    ActivityStats {
        entry_count: entries.len(),
        total_time,
        unique_assignees,
        average_minutes,
        average_time: WorkDuration::from_minutes(average_minutes),
        by_company,
    }
}

fn average_rounded(total: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    let (quotient, remainder) = (total / count, total % count);
    if remainder >= count - remainder {
        quotient + 1
    } else {
        quotient
    }
}
