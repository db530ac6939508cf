use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::Result;
use crate::model::Task;
use crate::rules::validate_title;

/// Build a new open task
///
/// Generates a UUID v7 id so ids sort by creation time.
///
/// # Arguments
/// * `title` - Title (trimmed; must not be empty)
/// * `category_id` - Optional owning category
/// * `order_index` - List position, normally the current task count
/// * `now` - Creation instant
///
/// # Errors
/// * `InvalidTitle` - If title is empty or whitespace-only
pub fn create_task(
    title: &str,
    category_id: Option<String>,
    order_index: i64,
    now: DateTime<Utc>,
) -> Result<Task> {
    let title = validate_title(title)?;
    let mut task = Task::new(Uuid::now_v7().to_string(), title, order_index, now);
    task.category_id = category_id;
    Ok(task)
}
