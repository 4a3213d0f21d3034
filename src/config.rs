/**
 * Server Configuration
 *
 * Configuration comes from environment variables (optionally via a `.env`
 * file), with development defaults where a missing value should not stop
 * the server.
 *
 * # Variables
 *
 * - `DATABASE_URL` - Postgres connection string; absent or unreachable
 *   disables store-backed features instead of aborting startup
 * - `JWT_SECRET` - token signing key; falls back to a fixed development
 *   key with a logged warning
 * - `SERVER_PORT` - listen port (default 3000)
 * - `STATIC_DIR` - directory holding the login/dashboard pages
 *   (default "public")
 */

use sqlx::PgPool;

use crate::auth::tokens::DEV_FALLBACK_SECRET;

/// Resolved server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub static_dir: String,
    pub jwt_secret: String,
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!(
                "JWT_SECRET not set, using the development fallback key; \
                 do not run production traffic with this key"
            );
            DEV_FALLBACK_SECRET.to_string()
        });

        Self {
            port,
            static_dir,
            jwt_secret,
        }
    }
}

/// Load and initialize the database connection pool
///
/// Reads `DATABASE_URL`, connects, and runs the bundled migrations.
/// Every failure is logged and yields `None`: the server starts anyway and
/// store-backed endpoints report the store as unavailable.
pub async fn load_database() -> Option<PgPool> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, store-backed features disabled");
            return None;
        }
    };

    tracing::info!("connecting to database");
    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("failed to create database connection pool: {:?}", e);
            tracing::warn!("store-backed features disabled");
            return None;
        }
    };

    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("database migrations completed"),
        Err(e) => {
            // Migrations may already have been applied out of band
            tracing::error!("failed to run database migrations: {:?}", e);
        }
    }

    Some(pool)
}
