/**
 * authbase Server Entry Point
 *
 * Boots the HTTP server: environment, tracing, database pool, router.
 */

use std::sync::Arc;

use authbase::auth::tokens::TokenKeys;
use authbase::config::{load_database, Config};
use authbase::identity::PgIdentityStore;
use authbase::routes::create_router;
use authbase::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::from_env();

    // Missing database is logged, not fatal; affected endpoints degrade
    let pool = load_database().await;
    let store = Arc::new(PgIdentityStore::new(pool));
    let keys = TokenKeys::from_secret(&config.jwt_secret);

    let state = AppState::new(store, keys);
    let app = create_router(state, &config.static_dir);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
