//! Repository layer: typed record accessors over the SQLite schema
//!
//! Every accessor takes `&Connection`; a `Transaction` derefs to one, so the
//! engine can group several accessors into a single transaction.

mod category_repo;
mod rows;
mod settings_repo;
mod stats_repo;
pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
