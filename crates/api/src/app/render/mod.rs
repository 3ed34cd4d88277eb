//! Page rendering.
//!
//! Handlers only know template keys and a JSON data object; `Renderer` turns
//! the pair into a response body. Two pages exist:
//!
//! - `list`: expects [`ListView`](crate::app::dto::ListView)
//! - `edit`: expects [`EditView`](crate::app::dto::EditView)
//!
//! [`TemplateDirRenderer`] loads them from `*.html` files at startup;
//! [`HtmlRenderer`] is the built-in fallback when no template directory is
//! configured.

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use thiserror::Error;

mod html;
mod templates;

pub use html::HtmlRenderer;
pub use templates::TemplateDirRenderer;

pub const LIST_TEMPLATE: &str = "list";
pub const EDIT_TEMPLATE: &str = "edit";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("invalid data for template {template}: {message}")]
    InvalidData { template: String, message: String },

    #[error("template {template} failed to render: {message}")]
    Template { template: String, message: String },

    #[error("cannot load templates from {path}: {message}")]
    Load { path: String, message: String },
}

/// Produces a response body from a template key and a data object.
pub trait Renderer: Send + Sync {
    fn render(&self, template: &str, data: &JsonValue) -> Result<String, RenderError>;
}

fn decode<T: DeserializeOwned>(template: &str, data: &JsonValue) -> Result<T, RenderError> {
    T::deserialize(data).map_err(|e| RenderError::InvalidData {
        template: template.to_string(),
        message: e.to_string(),
    })
}

/// Percent-encode `raw` for use as a single URL path segment.
///
/// Everything but unreserved characters is encoded, `/` included, so the
/// segment round-trips through `/users/:id` unchanged.
pub fn encode_path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Wrap `body` in the shared page skeleton.
pub(crate) fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segment_encoding_covers_reserved_characters() {
        assert_eq!(encode_path_segment("u1"), "u1");
        assert_eq!(encode_path_segment(" u1"), "%20u1");
        assert_eq!(encode_path_segment("q?x"), "q%3Fx");
        assert_eq!(encode_path_segment("a/b#c"), "a%2Fb%23c");
        assert_eq!(encode_path_segment("50%"), "50%25");
    }

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">O'Brien & co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;O&#39;Brien &amp; co&lt;/a&gt;"
        );
    }
}
