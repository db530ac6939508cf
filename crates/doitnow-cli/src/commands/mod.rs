pub mod category;
pub mod settings;
pub mod stats;
pub mod task;
