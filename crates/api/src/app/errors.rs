//! Error pages and the error → HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use useradmin_core::DomainError;
use useradmin_infra::UserApiError;

use crate::app::render::{escape_html, page, RenderError};

pub fn user_api_error_to_response(err: UserApiError) -> Response {
    match err {
        UserApiError::NotFound(id) => html_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("no user with id '{id}'"),
        ),
        UserApiError::UpdateFailed(msg) => {
            tracing::warn!(error = %msg, "user update failed");
            html_error(StatusCode::BAD_REQUEST, "update_failed", "cannot update user")
        }
        UserApiError::Storage(msg) => {
            tracing::error!(error = %msg, "storage failure");
            html_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                "the user store is unavailable",
            )
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> Response {
    match err {
        DomainError::InvalidId(msg) => html_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

pub fn render_error_to_response(err: RenderError) -> Response {
    tracing::error!(error = %err, "page rendering failed");
    html_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "render_error",
        "the page could not be rendered",
    )
}

/// Minimal standalone error page; does not go through the `Renderer`, so it
/// still works when rendering is what failed.
pub fn html_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    let body = format!(
        "<h1>{} {}</h1>\n<p class=\"error\" data-code=\"{}\">{}</p>\n<p><a href=\"/\">Back to list</a></p>\n",
        status.as_u16(),
        escape_html(status.canonical_reason().unwrap_or("Error")),
        code,
        escape_html(&message.into()),
    );
    (status, Html(page("Error", &body))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use useradmin_core::UserId;

    #[test]
    fn not_found_maps_to_404() {
        let res = user_api_error_to_response(UserApiError::NotFound(UserId::new("x")));
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn update_failure_maps_to_400() {
        let res = user_api_error_to_response(UserApiError::UpdateFailed("locked".to_string()));
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failure_maps_to_500() {
        let res = user_api_error_to_response(UserApiError::Storage("gone".to_string()));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_id_maps_to_400() {
        let res = domain_error_to_response(DomainError::invalid_id("empty"));
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn render_failure_maps_to_500() {
        let res = render_error_to_response(RenderError::UnknownTemplate("x".to_string()));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
