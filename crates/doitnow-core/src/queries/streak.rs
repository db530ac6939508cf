//! Completion streaks
//!
//! A streak is a run of consecutive UTC days each with at least one
//! completed task.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

use crate::model::UserStat;

fn active_days(stats: &[UserStat]) -> BTreeSet<NaiveDate> {
    stats
        .iter()
        .filter(|s| s.has_completions())
        .map(|s| s.date)
        .collect()
}

/// Length of the streak still alive on `today`
///
/// A day without completions yet does not break the streak until it is over,
/// so when `today` has none the count starts from yesterday.
pub fn current_streak(stats: &[UserStat], today: NaiveDate) -> u32 {
    let days = active_days(stats);
    let mut cursor = if days.contains(&today) {
        Some(today)
    } else {
        today.pred_opt()
    };

    let mut streak = 0;
    while let Some(day) = cursor.filter(|d| days.contains(d)) {
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}

/// Longest run of consecutive active days anywhere in `stats`
pub fn longest_streak(stats: &[UserStat]) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for day in active_days(stats) {
        run = match previous {
            Some(prev) if day - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }
    longest
}
