//! DoItNow Store - SQLite persistence layer
//!
//! Provides:
//! - Connection management (foreign keys, WAL)
//! - Embedded migrations with checksums
//! - `SqliteRepo`, typed record accessors for tasks, categories, daily
//!   stats and settings
//! - Hydration of the in-memory `Store` mirror from the database

pub mod db;
pub mod errors;
pub mod hydration;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteRepo;
