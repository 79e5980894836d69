//! Host router

use std::{path::Path, sync::Arc};

use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chronicle_core::{Config, SiteSettings};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Name the bundle files are emitted under in `<site_root>/pkg`.
pub const BUNDLE_NAME: &str = "chronicle";

/// Shared, immutable server state.
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Settings served to the browser.
    pub settings: Arc<SiteSettings>,

    /// Pre-rendered HTML shell.
    pub shell: Arc<str>,
}

impl ServerState {
    /// Build the state from the configuration.
    pub fn new(config: &Config) -> Self {
        let settings = config.site_settings();
        let shell = render_shell(&settings);
        Self {
            settings: Arc::new(settings),
            shell: shell.into(),
        }
    }
}

/// Create the host router.
pub fn create_router(config: &Config) -> Router {
    let pkg_dir = Path::new(&config.server.site_root).join("pkg");
    tracing::debug!(pkg_dir = %pkg_dir.display(), "Serving bundle");

    Router::new()
        .route("/site-config.json", get(site_config_handler))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback(shell_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(ServerState::new(config))
}

async fn site_config_handler(State(state): State<ServerState>) -> Json<SiteSettings> {
    Json(state.settings.as_ref().clone())
}

/// Every client-side route gets the same shell; the app routes in the
/// browser.
async fn shell_handler(method: Method, State(state): State<ServerState>) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    (
        [(header::CACHE_CONTROL, "no-cache")],
        Html(state.shell.to_string()),
    )
        .into_response()
}

/// HTML document that loads the bundle.
pub fn render_shell(settings: &SiteSettings) -> String {
    let title = html_escape(&settings.title);
    let tagline = html_escape(&settings.tagline);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    <meta name="description" content="{tagline}" />
    <link rel="stylesheet" href="/pkg/{BUNDLE_NAME}.css" />
    <link rel="modulepreload" href="/pkg/{BUNDLE_NAME}.js" />
  </head>
  <body>
    <script type="module">
      import init from '/pkg/{BUNDLE_NAME}.js';
      init({{ module_or_path: '/pkg/{BUNDLE_NAME}.wasm' }});
    </script>
  </body>
</html>
"#
    )
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
