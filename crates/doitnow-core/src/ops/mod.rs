pub mod category_ops;
pub mod store;
pub mod task_ops;

pub use store::Store;
