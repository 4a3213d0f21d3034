/**
 * Router Configuration
 *
 * Assembles the Axum router. API routes are registered first so they take
 * precedence; static assets are served under `/static`, and everything
 * else falls through to `index.html` so the single-page client can handle
 * its own routing.
 */

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::{get_profile, health, login, register, update_profile};
use crate::state::AppState;

/// Create the application router
///
/// # Routes
///
/// - `POST /auth/login` - credential check, token issuance
/// - `POST /auth/register` - account creation
/// - `GET /auth/profile` - public projection by `?id=`
/// - `PUT /auth/profile` - name update (bearer token required)
/// - `GET /health` - liveness and store connectivity
/// - `/static/*` - static assets
/// - fallback - `index.html` (SPA catch-all)
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    let index = format!("{static_dir}/index.html");

    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/profile", get(get_profile).put(update_profile))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback_service(ServeFile::new(index))
        .with_state(state)
}
