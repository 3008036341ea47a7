//! Web server for the campaign board.
//!
//! Serves the HTML page and a small read-only JSON API over the campaign
//! collection loaded at startup.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /` - HTML page (optional `?filter=` and `?search=`)
//! - `GET /api/campaigns` - Campaign list (optional `?filter=` and `?search=`)
//! - `GET /api/summary` - Totals and description blurb
//! - `GET /api/top` - Highest-pledged campaigns (optional `?n=`)
//! - `GET /static/{file}` - Embedded assets

pub mod static_files;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::{Board, View};
use crate::config::{Config, MAX_TOP_COUNT};
use crate::export::{generate_page_for, PageOptions};
use crate::models::Campaign;
use crate::services::{Filter, Summary};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web server.
#[derive(Clone)]
pub struct AppState {
    /// Board as loaded at startup; requests only read it
    board: Arc<Board>,
    /// Application configuration
    config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(board: Board, config: Config) -> Self {
        Self {
            board: Arc::new(board),
            config: Arc::new(config),
        }
    }

    /// Resolves filter and search parameters to a view over the shared board.
    fn view_for(&self, query: &ViewQuery) -> Result<View, (StatusCode, Json<ApiError>)> {
        let filter: Filter = query
            .filter
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(|e: anyhow::Error| {
                (StatusCode::BAD_REQUEST, Json(ApiError::new(e.to_string())))
            })?;

        Ok(self.board.view_for(filter, query.search.as_deref()))
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Filter/search query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    /// Funding filter: all, funded or unfunded.
    pub filter: Option<String>,
    /// Case-insensitive name search.
    pub search: Option<String>,
}

/// Top-N query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct TopQuery {
    /// Number of campaigns to return.
    pub n: Option<usize>,
}

/// Campaign list response.
#[derive(Debug, Serialize)]
pub struct CampaignListResponse {
    /// Description of the active view.
    pub view: String,
    /// Matching campaigns in collection order.
    pub campaigns: Vec<Campaign>,
    /// Number of matching campaigns.
    pub total: usize,
}

/// Summary response.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Totals over all campaigns.
    #[serde(flatten)]
    pub summary: Summary,
    /// Description paragraph.
    pub blurb: String,
}

/// Top campaigns response.
#[derive(Debug, Serialize)]
pub struct TopResponse {
    /// Highest-pledged campaigns, highest first.
    pub campaigns: Vec<Campaign>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health - Health check.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET / - Campaign page.
async fn index(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>, (StatusCode, Json<ApiError>)> {
    let view = state.view_for(&query)?;
    let html = generate_page_for(
        &state.board,
        &view,
        &PageOptions::served("/static/style.css"),
    )
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details("Failed to render page", format!("{e:#}"))),
        )
    })?;
    Ok(Html(html))
}

/// GET /api/campaigns - Filtered or searched campaign list.
async fn list_campaigns(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<CampaignListResponse>, (StatusCode, Json<ApiError>)> {
    let view = state.view_for(&query)?;
    let campaigns: Vec<Campaign> = state
        .board
        .visible_in(&view)
        .into_iter()
        .cloned()
        .collect();
    let total = campaigns.len();
    Ok(Json(CampaignListResponse {
        view: view.to_string(),
        campaigns,
        total,
    }))
}

/// GET /api/summary - Totals over the full collection.
async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let summary = state.board.summary();
    Json(SummaryResponse {
        summary,
        blurb: summary.blurb(),
    })
}

/// GET /api/top - Highest-pledged campaigns.
async fn get_top(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> Result<Json<TopResponse>, (StatusCode, Json<ApiError>)> {
    let n = query.n.unwrap_or(state.config.display.top_count);
    if n == 0 || n > MAX_TOP_COUNT {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(format!(
                "n must be between 1 and {MAX_TOP_COUNT}, got {n}"
            ))),
        ));
    }

    let campaigns = state.board.top(n).into_iter().cloned().collect();
    Ok(Json(TopResponse { campaigns }))
}

// ============================================================================
// Router
// ============================================================================

/// Creates the router with all routes.
pub fn create_router(state: AppState) -> Router {
    // The server is meant to run on localhost next to the user's browser.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(index))
        .route("/api/campaigns", get(list_campaigns))
        .route("/api/summary", get(get_summary))
        .route("/api/top", get(get_top))
        .route("/static/{file}", get(static_files::serve_static))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the web server.
pub async fn run_server(board: Board, config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(board, config);
    let app = create_router(state);

    info!("Starting fundboard web server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
