//! Renderer over a directory of page templates.
//!
//! Every `*.html` file in the directory is loaded once at startup and keyed by
//! its file stem (`list.html` answers to `list`). `list` and `edit` must both
//! be present. Output is always HTML-escaped; templates get one extra filter,
//! `path_segment`, for building `/users/{id}` links.

use std::path::Path;

use minijinja::{AutoEscape, Environment};
use serde_json::Value as JsonValue;

use super::{encode_path_segment, RenderError, Renderer, EDIT_TEMPLATE, LIST_TEMPLATE};

#[derive(Debug)]
pub struct TemplateDirRenderer {
    env: Environment<'static>,
}

impl TemplateDirRenderer {
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, RenderError> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|e| load_error(dir, e))?;

        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_filter("path_segment", |value: String| encode_path_segment(&value));

        let mut loaded = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| load_error(dir, e))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("html") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let source = std::fs::read_to_string(&path).map_err(|e| load_error(&path, e))?;
            env.add_template_owned(name.to_string(), source)
                .map_err(|e| load_error(&path, e))?;
            loaded.push(name.to_string());
        }

        for required in [LIST_TEMPLATE, EDIT_TEMPLATE] {
            if env.get_template(required).is_err() {
                return Err(RenderError::Load {
                    path: dir.display().to_string(),
                    message: format!("missing {required}.html"),
                });
            }
        }

        tracing::info!(dir = %dir.display(), templates = ?loaded, "page templates loaded");
        Ok(Self { env })
    }
}

impl Renderer for TemplateDirRenderer {
    fn render(&self, template: &str, data: &JsonValue) -> Result<String, RenderError> {
        let tmpl = self
            .env
            .get_template(template)
            .map_err(|_| RenderError::UnknownTemplate(template.to_string()))?;

        tmpl.render(data).map_err(|e| RenderError::Template {
            template: template.to_string(),
            message: e.to_string(),
        })
    }
}

fn load_error(path: &Path, err: impl std::fmt::Display) -> RenderError {
    RenderError::Load {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
