//! Input validation rules

pub mod validation;

pub use validation::{
    validate_category_name, validate_category_patch, validate_color, validate_icon,
    validate_task_patch, validate_title,
};
