//! Domain models

pub mod category;
pub mod datetime;
pub mod settings;
pub mod task;
pub mod user_stat;

pub use category::{Category, CategoryPatch, CATEGORY_COLORS, CATEGORY_ICONS};
pub use settings::{SettingKey, Settings};
pub use task::{Task, TaskPatch};
pub use user_stat::UserStat;
