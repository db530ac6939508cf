//! Category commands

use clap::{Args, Subcommand};
use doitnow_core::model::{CATEGORY_COLORS, CATEGORY_ICONS};
use doitnow_core::queries::category_task_counts;
use doitnow_core::CategoryPatch;
use doitnow_engine::AppState;

use crate::output::Output;

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    pub command: CategoryCommand,
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// Add a category
    Add(AddArgs),
    /// List categories with their task counts
    List,
    /// Change fields of a category
    Update(UpdateArgs),
    /// Delete a category; its tasks become uncategorised
    Delete(DeleteArgs),
    /// Show the icons and colors offered by the picker
    Presets,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    pub name: String,

    #[arg(long)]
    pub icon: Option<String>,

    /// `#RRGGBB`
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub icon: Option<String>,

    #[arg(long)]
    pub color: Option<String>,

    #[arg(long)]
    pub order: Option<i64>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
}

pub fn execute(
    args: CategoryArgs,
    state: &mut AppState,
    out: &Output,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        CategoryCommand::Add(add) => {
            let category =
                state.add_category(&add.name, add.icon.as_deref(), add.color.as_deref())?;
            out.emit(&category, || {
                format!("Added category {}: {}", category.id, category.name)
            })
        }
        CategoryCommand::List => {
            let counts = category_task_counts(state.categories(), state.tasks());
            out.emit(&counts, || {
                if counts.is_empty() {
                    return "No categories".to_string();
                }
                counts
                    .iter()
                    .map(|entry| {
                        format!(
                            "{}  {}  {}  {}  ({})",
                            entry.category.name,
                            entry.category.color,
                            entry.category.icon,
                            entry.label(),
                            entry.category.id
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        CategoryCommand::Update(update) => {
            let mut patch = CategoryPatch::default();
            if let Some(name) = update.name {
                patch = patch.name(name);
            }
            if let Some(icon) = update.icon {
                patch = patch.icon(icon);
            }
            if let Some(color) = update.color {
                patch = patch.color(color);
            }
            if let Some(order) = update.order {
                patch = patch.order_index(order);
            }
            let category = state.update_category(&update.id, patch)?;
            out.emit(&category, || format!("Updated category {}", category.id))
        }
        CategoryCommand::Delete(delete) => {
            state.delete_category(&delete.id)?;
            out.emit(&serde_json::json!({ "deleted": delete.id }), || {
                format!("Deleted category {}", delete.id)
            })
        }
        CategoryCommand::Presets => {
            let presets = serde_json::json!({
                "icons": CATEGORY_ICONS,
                "colors": CATEGORY_COLORS,
            });
            out.emit(&presets, || {
                format!(
                    "Icons:  {}\nColors: {}",
                    CATEGORY_ICONS.join(", "),
                    CATEGORY_COLORS.join(", ")
                )
            })
        }
    }
}
