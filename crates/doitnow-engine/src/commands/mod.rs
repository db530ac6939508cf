//! Command orchestration layer.
//!
//! Each public handler logs `start`/`end`/`end_error` around an `_impl`
//! function that does the work. Multi-statement writes run in one
//! transaction.

pub mod category;
pub mod settings;
pub mod stats;
pub mod task;
