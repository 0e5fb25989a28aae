//! HTTP routes for the vcd-web host
//!
//! Serves the rendered viewer page, the bare control-panel fragment for
//! client-side embedding, embedded static assets, and a health endpoint.

use std::time::Instant;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Response, StatusCode},
    response::Html,
    routing::get,
    Json, Router,
};

use crate::embedded;

// Shared state
#[derive(Clone)]
pub struct AppState {
    pub title: String,
    pub started: Instant,
}

/// Build the full application router
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/controls", get(serve_controls))
        .nest("/api", api_router())
        .route("/*path", get(serve_static))
        .with_state(state)
}

// REST routes nested under /api
fn api_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

// Handlers

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.started.elapsed().as_secs(),
    }))
}

/// Serve the rendered viewer page at root
async fn serve_index(State(state): State<AppState>) -> Html<String> {
    Html(vcd_web_ui::render_page(&state.title))
}

/// Serve the bare control-panel fragment
async fn serve_controls() -> Html<String> {
    Html(vcd_web_ui::render_controls())
}

/// Serve embedded static assets, falling back to the page shell for
/// unknown paths (same-origin routing stays inside the viewer)
async fn serve_static(
    Path(path): Path<String>,
    State(state): State<AppState>,
) -> Response<Body> {
    match embedded::get_asset(&path) {
        Some((data, mime)) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime)
            .header(header::CACHE_CONTROL, "public, max-age=3600")
            .body(Body::from(data))
            .unwrap(),
        None => {
            tracing::debug!(path = %path, "asset not found, serving page shell");
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
                .body(Body::from(vcd_web_ui::render_page(&state.title)))
                .unwrap()
        }
    }
}
