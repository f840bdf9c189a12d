//! Sift Store — append-only SQLite persistence for analysis records.

pub mod schema;
pub mod sqlite;
pub mod types;

pub use sqlite::SqliteStore;
pub use types::*;
