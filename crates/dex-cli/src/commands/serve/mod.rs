//! Read-only dashboard server using axum + embedded static assets

mod api;

use anyhow::{Context, Result};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use rust_embed::Embed;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::cli::{GlobalArgs, ServeArgs};
use crate::commands::common::{load_config, open_loaded_store};

use api::AppState;

/// Embedded static assets from the `static/` directory
#[derive(Embed)]
#[folder = "static/"]
struct StaticAssets;

/// Execute the serve command
pub(crate) async fn execute(args: &ServeArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let store = open_loaded_store(&config)?;

    let host = args.host.clone().unwrap_or(config.serve.host);
    let port = args.port.unwrap_or(config.serve.port);
    let listener = bind(&host, port).await?;
    let app = router(Arc::new(AppState::new(store)));

    let url = format!("http://{host}:{port}");
    println!("Serving dashboard for {} at {url}", config.database.path);

    if !args.no_browser && open::that(&url).is_err() {
        eprintln!("Could not open browser automatically. Visit: {url}");
    }

    println!("Press Ctrl+C to stop.\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    Ok(())
}

/// Bind the listener. `host` may be an IP address or a resolvable name
/// such as `localhost`.
pub(crate) async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))
}

/// Build the dashboard router: JSON API plus static fallback.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/generations", get(api::get_generations))
        .route("/api/types", get(api::get_types))
        .route("/api/pokemon", get(api::get_pokemon))
        .route("/api/highlights", get(api::get_highlights))
        .route("/api/type-distribution", get(api::get_type_distribution))
        .route("/api/cache/clear", post(api::clear_cache))
        .fallback(get(static_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        log::warn!("Could not install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    println!("Shutting down.");
}

/// Fallback handler: serve embedded static assets
async fn static_handler(uri: axum::http::Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    match StaticAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path)
                .first_or_octet_stream()
                .to_string();
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, mime),
                    (header::CACHE_CONTROL, "no-cache".to_string()),
                ],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

#[cfg(test)]
#[path = "serve_test.rs"]
mod tests;
