use axum::{
    routing::{get, post},
    Router,
};

pub mod system;
pub mod users;

/// Router for every page of the tool.
pub fn router() -> Router {
    Router::new()
        .route("/", get(users::list_users))
        .route("/users/", get(users::edit_user_form_without_id))
        .route("/users/:id", get(users::edit_user_form))
        .route("/users/:id/*rest", get(users::edit_user_form_with_suffix))
        .route("/user/edit", post(users::edit_user))
        .route("/health", get(system::health))
}
