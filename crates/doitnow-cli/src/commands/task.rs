//! Task commands

use clap::{Args, Subcommand, ValueEnum};
use doitnow_core::model::datetime::{parse_date, parse_timestamp};
use doitnow_core::queries::{completed_tasks, date_subtitle, progress, today_tasks};
use doitnow_core::{Category, ExError, Task, TaskPatch};
use doitnow_engine::AppState;

use crate::output::Output;

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommand,
}

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Add a task
    Add(AddArgs),
    /// List tasks
    List(ListArgs),
    /// Complete an open task or reopen a completed one
    Toggle(IdArgs),
    /// Change fields of a task
    Update(UpdateArgs),
    /// Delete a task
    Delete(IdArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    pub title: String,

    /// Category id
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Filter {
    /// Open tasks not past their due date
    Today,
    All,
    Completed,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t = Filter::All)]
    pub filter: Filter,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    /// Due date, YYYY-MM-DD
    #[arg(long, conflicts_with = "clear_due")]
    pub due: Option<String>,

    #[arg(long)]
    pub clear_due: bool,

    /// Reminder time, RFC 3339
    #[arg(long, conflicts_with = "clear_reminder")]
    pub reminder: Option<String>,

    #[arg(long)]
    pub clear_reminder: bool,

    /// Category id
    #[arg(long, conflicts_with = "clear_category")]
    pub category: Option<String>,

    #[arg(long)]
    pub clear_category: bool,

    /// List position
    #[arg(long)]
    pub order: Option<i64>,
}

pub fn execute(
    args: TaskArgs,
    state: &mut AppState,
    out: &Output,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        TaskCommand::Add(add) => {
            let task = state.add_task(&add.title, add.category)?;
            out.emit(&task, || format!("Added task {}: {}", task.id, task.title))
        }
        TaskCommand::List(list) => execute_list(list, state, out),
        TaskCommand::Toggle(toggle) => {
            let task = state.toggle_task(&toggle.id)?;
            out.emit(&task, || {
                let verb = if task.is_completed { "Completed" } else { "Reopened" };
                format!("{} task {}: {}", verb, task.id, task.title)
            })
        }
        TaskCommand::Update(update) => {
            let id = update.id.clone();
            let patch = build_patch(update)?;
            let task = state.update_task(&id, patch)?;
            out.emit(&task, || format!("Updated task {}", task.id))
        }
        TaskCommand::Delete(delete) => {
            state.delete_task(&delete.id)?;
            out.emit(&serde_json::json!({ "deleted": delete.id }), || {
                format!("Deleted task {}", delete.id)
            })
        }
    }
}

fn execute_list(
    args: ListArgs,
    state: &AppState,
    out: &Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let today = state.today();
    let all = state.tasks();
    let selected: Vec<&Task> = match args.filter {
        Filter::Today => today_tasks(all, today),
        Filter::All => all.iter().collect(),
        Filter::Completed => completed_tasks(all),
    };

    out.emit(&selected, || {
        let mut lines = Vec::new();
        if args.filter == Filter::Today {
            let p = progress(all);
            lines.push(format!(
                "{}  {}/{} done ({:.0}%)",
                date_subtitle(today),
                p.completed,
                p.total,
                p.percent
            ));
        }
        if selected.is_empty() {
            lines.push("No tasks".to_string());
        }
        for task in &selected {
            lines.push(render_task(task, state.categories()));
        }
        lines.join("\n")
    })
}

fn render_task(task: &Task, categories: &[Category]) -> String {
    let mark = if task.is_completed { "[x]" } else { "[ ]" };
    let mut line = format!("{} {}", mark, task.title);
    if let Some(due) = task.due_date {
        line.push_str(&format!("  due {}", due));
    }
    if let Some(category) = task
        .category_id
        .as_deref()
        .and_then(|id| categories.iter().find(|c| c.id == id))
    {
        line.push_str(&format!("  #{}", category.name));
    }
    line.push_str(&format!("  ({})", task.id));
    line
}

fn build_patch(args: UpdateArgs) -> Result<TaskPatch, ExError> {
    let mut patch = TaskPatch::default();
    if let Some(title) = args.title {
        patch = patch.title(title);
    }
    if args.clear_due {
        patch = patch.due_date(None);
    } else if let Some(due) = args.due.as_deref() {
        patch = patch.due_date(Some(parse_date(due)?));
    }
    if args.clear_reminder {
        patch = patch.reminder_time(None);
    } else if let Some(reminder) = args.reminder.as_deref() {
        patch = patch.reminder_time(Some(parse_timestamp(reminder)?));
    }
    if args.clear_category {
        patch = patch.category_id(None);
    } else if let Some(category) = args.category {
        patch = patch.category_id(Some(category));
    }
    if let Some(order) = args.order {
        patch = patch.order_index(order);
    }
    Ok(patch)
}
