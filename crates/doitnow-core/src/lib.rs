//! DoItNow Core - domain kernel for the local task list
//!
//! This crate provides the pieces every other layer builds on:
//! - Task, Category, UserStat and Settings models with partial-update patches
//! - Validation rules for titles, names, icons and colors
//! - The in-memory `Store` mirror held by the state container
//! - Derived-state queries (today list, progress, streaks, heatmap)
//! - The error facility (`ExError`) and the structured logging facility
//! - A `Clock` seam so "now" and "today" can be fixed in tests

pub mod clock;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod rules;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{DoItNowError, ExError, ExErrorKind, Result};
pub use model::{Category, CategoryPatch, Settings, Task, TaskPatch, UserStat};
pub use ops::Store;
