/**
 * Health Check Handler
 *
 * GET /health
 *
 * Always answers 200, even when the store is down; the store's state is
 * reported in the body so load balancers and dashboards can degrade
 * gracefully instead of treating the whole service as dead.
 */

use axum::{extract::State, response::Json};

use crate::handlers::types::HealthResponse;
use crate::identity::IdentityStore;
use crate::state::AppState;

/// Health check handler
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = if state.store.ping().await {
        "connected"
    } else {
        "unreachable"
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        store: store.to_string(),
    })
}
