//! User storage boundary.
//!
//! `UserStore` is the seam between the data API and the relational store. The
//! SQLite adapter is used in production; the in-memory adapter backs tests and
//! local development.

pub mod in_memory;
pub mod sqlite;
pub mod r#trait;

pub use in_memory::InMemoryUserStore;
pub use r#trait::{UserStore, UserStoreError};
pub use sqlite::SqliteUserStore;
