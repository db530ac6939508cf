//! Derived-state queries
//!
//! Pure functions over mirrored rows. None of them touch the database; the
//! caller passes "today" explicitly so results are reproducible.

pub mod heatmap;
pub mod streak;
pub mod summary;
pub mod today;

pub use heatmap::{
    heatmap, heatmap_legend, HeatmapCell, Intensity, DEFAULT_HEATMAP_DAYS, MAX_HEATMAP_DAYS,
};
pub use streak::{current_streak, longest_streak};
pub use summary::{
    category_task_counts, task_totals, weekly_summary, CategoryTaskCount, TaskTotals,
    WeeklySummary,
};
pub use today::{completed_tasks, date_subtitle, progress, today_tasks, Progress};
