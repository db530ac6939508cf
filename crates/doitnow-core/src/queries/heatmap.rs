//! 30-day completion heatmap

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

use crate::model::UserStat;

pub const DEFAULT_HEATMAP_DAYS: u32 = 30;

/// Longest window `heatmap` will build, about ten years
pub const MAX_HEATMAP_DAYS: u32 = 3650;

/// Cells per row in the rendered grid; a day-of-month label starts each row
pub const HEATMAP_ROW_LEN: usize = 7;

/// Completion intensity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Intensity {
    /// 0 completions
    None,
    /// 1-2
    Low,
    /// 3-5
    Medium,
    /// 6-8
    High,
    /// 9 or more
    Max,
}

impl Intensity {
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Intensity::None,
            1..=2 => Intensity::Low,
            3..=5 => Intensity::Medium,
            6..=8 => Intensity::High,
            _ => Intensity::Max,
        }
    }

    /// Fill color of the cell
    pub fn color(&self) -> &'static str {
        match self {
            Intensity::None => "#F9F9F9",
            Intensity::Low => "#FFE5D9",
            Intensity::Medium => "#FFCAB0",
            Intensity::High => "#FF9E66",
            Intensity::Max => "#FF6B00",
        }
    }

    /// Glyph used by text renderings, lightest to darkest
    pub fn glyph(&self) -> char {
        match self {
            Intensity::None => '·',
            Intensity::Low => '░',
            Intensity::Medium => '▒',
            Intensity::High => '▓',
            Intensity::Max => '█',
        }
    }
}

/// One day of the heatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    /// Tasks completed that day
    pub count: u32,
    /// Day of month
    pub day: u32,
    pub intensity: Intensity,
    /// True for the first cell of each row of seven
    pub show_label: bool,
}

/// One cell per day from `today - (days - 1)` through `today`, oldest first
///
/// Days without a stat row count as zero. `days` is capped at
/// `MAX_HEATMAP_DAYS`, and the window never starts before `NaiveDate::MIN`.
pub fn heatmap(stats: &[UserStat], today: NaiveDate, days: u32) -> Vec<HeatmapCell> {
    let days = days.min(MAX_HEATMAP_DAYS);
    if days == 0 {
        return Vec::new();
    }

    let mut by_date: HashMap<NaiveDate, u32> = HashMap::new();
    for stat in stats {
        *by_date.entry(stat.date).or_default() += stat.tasks_completed;
    }

    let first = today
        .checked_sub_signed(Duration::days(i64::from(days - 1)))
        .unwrap_or(NaiveDate::MIN);

    first
        .iter_days()
        .take_while(|date| *date <= today)
        .enumerate()
        .map(|(index, date)| {
            let count = by_date.get(&date).copied().unwrap_or(0);
            HeatmapCell {
                date,
                count,
                day: date.day(),
                intensity: Intensity::from_count(count),
                show_label: index % HEATMAP_ROW_LEN == 0,
            }
        })
        .collect()
}

/// Legend swatches from "less" to "more"
pub fn heatmap_legend() -> [Intensity; 5] {
    [0, 2, 5, 8, 10].map(Intensity::from_count)
}
