//! Statistics views

use clap::{Args, Subcommand};
use doitnow_core::queries::{
    category_task_counts, current_streak, heatmap, heatmap_legend, longest_streak, task_totals,
    weekly_summary, CategoryTaskCount, HeatmapCell, TaskTotals, WeeklySummary,
    DEFAULT_HEATMAP_DAYS, MAX_HEATMAP_DAYS,
};
use doitnow_core::UserStat;
use doitnow_engine::AppState;
use serde::Serialize;

use crate::output::Output;

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: StatsCommand,
}

#[derive(Debug, Subcommand)]
pub enum StatsCommand {
    /// Totals, weekly counts and streaks
    Summary(WindowArgs),
    /// Daily completion heatmap
    Heatmap(WindowArgs),
}

#[derive(Debug, Args)]
pub struct WindowArgs {
    /// Number of days to look back
    #[arg(
        long,
        default_value_t = DEFAULT_HEATMAP_DAYS,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_HEATMAP_DAYS))
    )]
    pub days: u32,
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    totals: TaskTotals,
    this_week: WeeklySummary,
    current_streak: u32,
    longest_streak: u32,
    categories: Vec<CategoryTaskCount<'a>>,
}

pub fn execute(
    args: StatsArgs,
    state: &mut AppState,
    out: &Output,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        StatsCommand::Summary(window) => {
            state.fetch_user_stats(window.days)?;
            let history = state.user_stats_history()?;
            execute_summary(state, &history, out)
        }
        StatsCommand::Heatmap(window) => {
            state.fetch_user_stats(window.days)?;
            let cells = heatmap(state.store().user_stats(), state.today(), window.days);
            out.emit(&cells, || render_heatmap(&cells))
        }
    }
}

/// Figures read the full stat `history`, not just the fetched window
fn execute_summary(
    state: &AppState,
    history: &[UserStat],
    out: &Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = Summary {
        totals: task_totals(state.tasks()),
        this_week: weekly_summary(history, state.today()),
        current_streak: current_streak(history, state.today()),
        longest_streak: longest_streak(history),
        categories: category_task_counts(state.categories(), state.tasks()),
    };

    out.emit(&summary, || {
        let mut lines = vec![
            format!(
                "Tasks: {} total, {} completed, {} active",
                summary.totals.total, summary.totals.completed, summary.totals.active
            ),
            format!(
                "This week: {} completed, {} created",
                summary.this_week.completed, summary.this_week.created
            ),
            format!("Current streak: {}", days_label(summary.current_streak)),
            format!("Longest streak: {}", days_label(summary.longest_streak)),
        ];
        for entry in &summary.categories {
            lines.push(format!("  {}: {}", entry.category.name, entry.label()));
        }
        lines.join("\n")
    })
}

fn days_label(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

/// Rows of seven cells, oldest first, each row prefixed by its first day of month
fn render_heatmap(cells: &[HeatmapCell]) -> String {
    let mut lines = Vec::new();
    let mut row = String::new();
    for cell in cells {
        if cell.show_label {
            if !row.is_empty() {
                lines.push(row.trim_end().to_string());
            }
            row = format!("{:>2} ", cell.day);
        }
        row.push(cell.intensity.glyph());
        row.push(' ');
    }
    if !row.is_empty() {
        lines.push(row.trim_end().to_string());
    }

    let legend: String = heatmap_legend()
        .iter()
        .map(|i| i.glyph().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(format!("Less {} More", legend));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_render_heatmap_rows_of_seven() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let cells = heatmap(&[], today, 10);

        let rendered = render_heatmap(&cells);
        let lines: Vec<&str> = rendered.lines().collect();

        // 10 cells: a row of 7, a row of 3, then the legend
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" 9 "));
        assert_eq!(lines[0].chars().filter(|c| *c == '·').count(), 7);
        assert!(lines[1].starts_with("16 "));
        assert!(lines[2].starts_with("Less"));
    }

    #[test]
    fn test_days_label() {
        assert_eq!(days_label(1), "1 day");
        assert_eq!(days_label(0), "0 days");
    }
}
