use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::Result;
use crate::model::category::{DEFAULT_CATEGORY_COLOR, DEFAULT_CATEGORY_ICON};
use crate::model::Category;
use crate::rules::{validate_category_name, validate_color, validate_icon};

/// Build a new category, falling back to the default icon and color
///
/// # Errors
/// * `InvalidCategoryName` - If name is empty or whitespace-only
/// * `InvalidIcon` / `InvalidColor` - If an explicit icon or color is malformed
pub fn create_category(
    name: &str,
    icon: Option<&str>,
    color: Option<&str>,
    order_index: i64,
    now: DateTime<Utc>,
) -> Result<Category> {
    let name = validate_category_name(name)?;
    let icon = validate_icon(icon.unwrap_or(DEFAULT_CATEGORY_ICON))?;
    let color = validate_color(color.unwrap_or(DEFAULT_CATEGORY_COLOR))?;
    Ok(Category::new(
        Uuid::now_v7().to_string(),
        name,
        icon,
        color,
        order_index,
        now,
    ))
}
