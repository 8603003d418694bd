use std::{sync::Arc, time::Duration};

use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    cache::{CacheStore, MemoryCache, RedisCache},
    config::Config,
    error::{config::ConfigError, AppError},
    subscription::SubscriptionError,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions hold the login token for re-authentication. The cookie is httpOnly and
/// SameSite=Strict, and a session expires after the token lifetime without activity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
/// - `Err(AppError::ConfigErr)` - Token lifetime does not fit a session expiry
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let inactivity = time::Duration::try_from(config.jwt_ttl).map_err(|e| {
        ConfigError::InvalidEnvVar {
            name: "JWT_TTL_SECONDS".to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_http_only(true)
        .with_same_site(SameSite::Strict)
        .with_expiry(Expiry::OnInactivity(inactivity)))
}

/// Picks the cache backend: Redis when `REDIS_URL` is set, otherwise in-process.
pub async fn connect_to_cache(config: &Config) -> Result<Arc<dyn CacheStore>, AppError> {
    match config.redis_url {
        Some(ref url) => {
            let cache = RedisCache::connect(url).await?;
            tracing::info!("Using Redis cache");
            Ok(Arc::new(cache))
        }
        None => {
            tracing::info!("REDIS_URL not set, using in-process cache");
            Ok(Arc::new(MemoryCache::new()))
        }
    }
}

/// Builds the HTTP client used for the subscription service.
///
/// Redirects are disabled so a misconfigured endpoint cannot bounce requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(SubscriptionError::from)?;

    Ok(client)
}

/// CORS policy for the configured browser origins, with credentials allowed.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                name: "ALLOWED_ORIGINS".to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

/// Installs the fmt subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
