//! Validation of user-supplied fields
//!
//! Validators return the normalised value (trimmed text, upper-case hex) so
//! callers persist exactly what was checked.

use crate::errors::{DoItNowError, Result};
use crate::model::{CategoryPatch, TaskPatch};

/// Validate and trim a task title
///
/// # Errors
///
/// `InvalidTitle` if the title is empty or whitespace-only.
pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(DoItNowError::InvalidTitle {
            reason: "Title cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Validate and trim a category name
///
/// # Errors
///
/// `InvalidCategoryName` if the name is empty or whitespace-only.
pub fn validate_category_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DoItNowError::InvalidCategoryName {
            reason: "Name cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// # Errors
///
/// `InvalidIcon` if the icon name is empty or contains whitespace.
pub fn validate_icon(icon: &str) -> Result<String> {
    let trimmed = icon.trim();
    if trimmed.is_empty() {
        return Err(DoItNowError::InvalidIcon {
            reason: "Icon cannot be empty".to_string(),
        });
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(DoItNowError::InvalidIcon {
            reason: format!("Icon {:?} must not contain whitespace", trimmed),
        });
    }
    Ok(trimmed.to_string())
}

/// Validate a `#RRGGBB` color, normalising hex digits to upper case
///
/// # Errors
///
/// `InvalidColor` for any other shape.
pub fn validate_color(color: &str) -> Result<String> {
    let trimmed = color.trim();
    let valid = trimmed.len() == 7
        && trimmed.starts_with('#')
        && trimmed[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(DoItNowError::InvalidColor {
            color: color.to_string(),
        });
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// Validate the text fields of a task patch
///
/// # Errors
///
/// `InvalidTitle` when the patch carries an empty title.
pub fn validate_task_patch(patch: TaskPatch) -> Result<TaskPatch> {
    let title = patch.title.as_deref().map(validate_title).transpose()?;
    Ok(TaskPatch { title, ..patch })
}

/// Validate the fields of a category patch
///
/// # Errors
///
/// `InvalidCategoryName`, `InvalidIcon` or `InvalidColor` for the first bad field.
pub fn validate_category_patch(patch: CategoryPatch) -> Result<CategoryPatch> {
    Ok(CategoryPatch {
        name: patch
            .name
            .as_deref()
            .map(validate_category_name)
            .transpose()?,
        icon: patch.icon.as_deref().map(validate_icon).transpose()?,
        color: patch.color.as_deref().map(validate_color).transpose()?,
        order_index: patch.order_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed() {
        assert_eq!(validate_title("  Buy milk \n").unwrap(), "Buy milk");
    }

    #[test]
    fn test_color_shapes() {
        assert_eq!(validate_color("#ff6b00").unwrap(), "#FF6B00");
        assert!(validate_color("FF6B00").is_err());
        assert!(validate_color("#FF6B0").is_err());
        assert!(validate_color("#GG6B00").is_err());
    }

    #[test]
    fn test_icon_rejects_whitespace() {
        assert!(validate_icon("home outline").is_err());
        assert_eq!(validate_icon(" home-outline ").unwrap(), "home-outline");
    }
}
