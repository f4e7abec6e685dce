use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::account::accountmanagementservice::AccountManagementService;
use crate::api::accountrouter::account_router;
use crate::api::holidayrouter::holiday_router;
use crate::api::viewmodels::HealthResponse;
use crate::engine::holidayengine::HolidayEngine;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<HolidayEngine>,
    pub accounts: Arc<AccountManagementService>
}

impl AppState {
    pub fn new(engine: Arc<HolidayEngine>, accounts: Arc<AccountManagementService>) -> AppState {
        AppState { engine, accounts }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .nest("/holidays", holiday_router())
        .nest("/users", account_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
