use std::sync::Arc;

use axum::{
    extract::{Extension, Form, Path},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;

use useradmin_core::{ApiRequest, DomainError, UserId, UserRequest};

use crate::app::dto::{EditUserForm, EditView, ListView};
use crate::app::errors;
use crate::app::render::{RenderError, EDIT_TEMPLATE, LIST_TEMPLATE};
use crate::app::services::AppServices;

/// `GET /`: every user, ordered by username.
pub async fn list_users(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let users = match services.users.get_users(ApiRequest::default()).await {
        Ok(res) => res.into_msg().users,
        Err(e) => return errors::user_api_error_to_response(e),
    };

    render_page(&services, LIST_TEMPLATE, &ListView { users })
}

/// `GET /users/:id`: edit form for one user.
///
/// `id` is the percent-decoded path segment, used verbatim.
pub async fn edit_user_form(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    show_edit_form(&services, &id).await
}

/// `GET /users/:id/*rest`: same page; anything after the id is ignored.
pub async fn edit_user_form_with_suffix(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, _rest)): Path<(String, String)>,
) -> Response {
    show_edit_form(&services, &id).await
}

/// `GET /users/`: no id to edit.
pub async fn edit_user_form_without_id() -> Response {
    tracing::warn!("edit form requested without a user id");
    errors::domain_error_to_response(DomainError::invalid_id("a user id is required"))
}

async fn show_edit_form(services: &AppServices, raw_id: &str) -> Response {
    let id = match UserId::parse(raw_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("edit form requested with an empty user id");
            return errors::domain_error_to_response(e);
        }
    };

    let user = match services.users.get_user(ApiRequest::new(UserRequest::by_id(id))).await {
        Ok(res) => res.into_msg().user,
        Err(e) => return errors::user_api_error_to_response(e),
    };

    render_page(services, EDIT_TEMPLATE, &EditView { user, saved: false })
}

/// `POST /user/edit`: apply the submitted names and re-render the form.
pub async fn edit_user(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<EditUserForm>,
) -> Response {
    let user = match services
        .users
        .update_user(ApiRequest::new(form.into_request()))
        .await
    {
        Ok(res) => res.into_msg().user,
        Err(e) => return errors::user_api_error_to_response(e),
    };

    tracing::info!(user_id = %user.id, "user updated");
    render_page(&services, EDIT_TEMPLATE, &EditView { user, saved: true })
}

fn render_page<T: Serialize>(services: &AppServices, template: &str, view: &T) -> Response {
    let data = match serde_json::to_value(view) {
        Ok(v) => v,
        Err(e) => {
            return errors::render_error_to_response(RenderError::InvalidData {
                template: template.to_string(),
                message: e.to_string(),
            });
        }
    };

    match services.renderer.render(template, &data) {
        Ok(html) => Html(html).into_response(),
        Err(e) => errors::render_error_to_response(e),
    }
}
