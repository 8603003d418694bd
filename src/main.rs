mod model;
mod server;

use std::{net::SocketAddr, sync::Arc};

use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::server::{
    config::Config,
    error::AppError,
    router, startup,
    service::auth::token::TokenService,
    state::AppState,
    storage::{FileStore, PUBLIC_PREFIX},
    subscription::SoapClient,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let cache = startup::connect_to_cache(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let soap = Arc::new(SoapClient::new(
        http_client,
        config.soap_url.clone(),
        config.soap_api_key.clone(),
    ));

    let files = FileStore::new(&config.upload_dir);
    files.init().await?;

    let state = AppState::new(
        db,
        TokenService::new(&config.jwt_secret, config.jwt_ttl),
        cache,
        soap.clone(),
        soap,
        files.clone(),
    );

    let app = router::router()
        .with_state(state)
        .nest_service(PUBLIC_PREFIX, ServeDir::new(files.root()))
        .layer(session)
        .layer(startup::cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
