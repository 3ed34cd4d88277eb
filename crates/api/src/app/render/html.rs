use std::fmt::Write as _;

use serde_json::Value as JsonValue;

use super::{
    decode, encode_path_segment, escape_html, page, RenderError, Renderer, EDIT_TEMPLATE,
    LIST_TEMPLATE,
};
use crate::app::dto::{EditView, ListView};

const TITLE: &str = "Users";

/// Built-in HTML renderer. All interpolated text is escaped.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    fn list(&self, view: &ListView) -> String {
        let mut body = String::new();
        body.push_str("<h1>Users</h1>\n");

        if view.users.is_empty() {
            body.push_str("<p class=\"empty\">No users.</p>\n");
            return page(TITLE, &body);
        }

        body.push_str(
            "<table>\n<thead><tr><th>Username</th><th>First name</th><th>Last name</th><th></th></tr></thead>\n<tbody>\n",
        );
        for user in &view.users {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td><a href=\"/users/{}\">Edit</a></td></tr>",
                escape_html(&user.username),
                escape_html(&user.first_name),
                escape_html(&user.last_name),
                encode_path_segment(user.id.as_str()),
            );
        }
        body.push_str("</tbody>\n</table>\n");

        page(TITLE, &body)
    }

    fn edit(&self, view: &EditView) -> String {
        let user = &view.user;
        let mut body = String::new();
        let _ = writeln!(body, "<h1>Edit {}</h1>", escape_html(&user.username));
        if view.saved {
            body.push_str("<p class=\"notice\">Saved.</p>\n");
        }
        let _ = write!(
            body,
            concat!(
                "<form method=\"post\" action=\"/user/edit\">\n",
                "<input type=\"hidden\" name=\"id\" value=\"{id}\">\n",
                "<label>Username <input type=\"text\" value=\"{username}\" readonly></label>\n",
                "<label>First name <input type=\"text\" name=\"firstname\" value=\"{first}\"></label>\n",
                "<label>Last name <input type=\"text\" name=\"lastname\" value=\"{last}\"></label>\n",
                "<button type=\"submit\">Save</button>\n",
                "</form>\n",
                "<p><a href=\"/\">Back to list</a></p>\n",
            ),
            id = escape_html(user.id.as_str()),
            username = escape_html(&user.username),
            first = escape_html(&user.first_name),
            last = escape_html(&user.last_name),
        );

        page(TITLE, &body)
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, template: &str, data: &JsonValue) -> Result<String, RenderError> {
        match template {
            LIST_TEMPLATE => Ok(self.list(&decode(template, data)?)),
            EDIT_TEMPLATE => Ok(self.edit(&decode(template, data)?)),
            other => Err(RenderError::UnknownTemplate(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use useradmin_core::User;

    fn render_json<T: serde::Serialize>(template: &str, view: &T) -> Result<String, RenderError> {
        HtmlRenderer::new().render(template, &serde_json::to_value(view).unwrap())
    }

    #[test]
    fn list_renders_users_in_given_order() {
        let html = render_json(
            LIST_TEMPLATE,
            &ListView {
                users: vec![
                    User::new("u1", "alice", "A", "B"),
                    User::new("u2", "bob", "C", "D"),
                ],
            },
        )
        .unwrap();

        let alice = html.find("alice").unwrap();
        let bob = html.find("bob").unwrap();
        assert!(alice < bob);
        assert!(html.contains("href=\"/users/u1\""));
    }

    #[test]
    fn list_links_percent_encode_ids() {
        let html = render_json(
            LIST_TEMPLATE,
            &ListView {
                users: vec![
                    User::new("q?x", "quinn", "Q", "X"),
                    User::new(" u1", "spacey", "S", "P"),
                ],
            },
        )
        .unwrap();

        assert!(html.contains("href=\"/users/q%3Fx\""));
        assert!(html.contains("href=\"/users/%20u1\""));
    }

    #[test]
    fn list_renders_empty_state() {
        let html = render_json(LIST_TEMPLATE, &ListView { users: vec![] }).unwrap();
        assert!(html.contains("No users."));
    }

    #[test]
    fn edit_prefills_form_and_escapes_values() {
        let html = render_json(
            EDIT_TEMPLATE,
            &EditView {
                user: User::new("u1", "alice", "<b>A</b>", "O'Brien"),
                saved: false,
            },
        )
        .unwrap();

        assert!(html.contains("name=\"id\" value=\"u1\""));
        assert!(html.contains("value=\"&lt;b&gt;A&lt;/b&gt;\""));
        assert!(html.contains("O&#39;Brien"));
        assert!(!html.contains("Saved."));
    }

    #[test]
    fn edit_confirms_save() {
        let html = render_json(
            EDIT_TEMPLATE,
            &EditView {
                user: User::new("u1", "alice", "A", "B"),
                saved: true,
            },
        )
        .unwrap();
        assert!(html.contains("Saved."));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let err = HtmlRenderer::new()
            .render("index", &serde_json::json!({}))
            .unwrap_err();
        assert_eq!(err, RenderError::UnknownTemplate("index".to_string()));
    }

    #[test]
    fn mismatched_data_is_an_error() {
        let err = HtmlRenderer::new()
            .render(EDIT_TEMPLATE, &serde_json::json!({ "user": null }))
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidData { .. }));
    }
}
