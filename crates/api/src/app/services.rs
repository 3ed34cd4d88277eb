//! Service wiring: the user API and the renderer, shared by every handler.

use std::sync::Arc;

use anyhow::Context;

use useradmin_infra::{SqliteUserStore, UserApi, UserStore};

use crate::app::render::{HtmlRenderer, Renderer, TemplateDirRenderer};
use crate::config::AppConfig;

/// User API over a type-erased store, so handlers don't care which backend
/// is wired in.
pub type DynUserApi = UserApi<Arc<dyn UserStore>>;

/// Process-wide services, injected into handlers via `Extension`.
#[derive(Clone)]
pub struct AppServices {
    pub users: DynUserApi,
    pub renderer: Arc<dyn Renderer>,
}

impl AppServices {
    pub fn new(store: Arc<dyn UserStore>, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            users: UserApi::new(store),
            renderer,
        }
    }

    /// Services backed by `store` with the built-in HTML renderer.
    pub fn with_store(store: Arc<dyn UserStore>) -> Self {
        Self::new(store, Arc::new(HtmlRenderer::new()))
    }
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices").finish_non_exhaustive()
    }
}

/// Connect the SQLite store and load the page renderer described by `config`.
pub async fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    let store = SqliteUserStore::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open database at {}", config.database_url))?;

    if config.ensure_schema {
        store
            .ensure_schema()
            .await
            .context("failed to create users table")?;
        tracing::info!("users table ensured");
    }

    let renderer: Arc<dyn Renderer> = match &config.template_dir {
        Some(dir) => Arc::new(
            TemplateDirRenderer::load(dir)
                .with_context(|| format!("failed to load templates from {}", dir.display()))?,
        ),
        None => {
            tracing::info!("TEMPLATE_DIR not set; using built-in pages");
            Arc::new(HtmlRenderer::new())
        }
    };

    Ok(AppServices::new(Arc::new(store), renderer))
}
