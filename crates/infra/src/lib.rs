//! Infrastructure layer: user storage adapters and the envelope-based data API.

pub mod user_api;
pub mod user_store;

pub use user_api::{UserApi, UserApiError};
pub use user_store::{InMemoryUserStore, SqliteUserStore, UserStore, UserStoreError};
