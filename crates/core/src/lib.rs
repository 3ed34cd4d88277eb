//! `useradmin-core` — domain building blocks for the user administration tool.
//!
//! This crate contains **pure domain** types (no infrastructure concerns): the
//! `User` record, its identifier, and the request/response envelope used as the
//! in-process call convention between routing and data access.

pub mod envelope;
pub mod error;
pub mod id;
pub mod messages;
pub mod user;

pub use envelope::{ApiRequest, ApiResponse};
pub use error::DomainError;
pub use id::UserId;
pub use messages::{GetUsersRequest, GetUsersResponse, UserRequest, UserResponse};
pub use user::User;
