mod config;
mod db;
mod routes;
mod services;
mod state;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let port = config.port;
    let supported: Vec<&str> = config.languages.supported().iter().map(identity::Language::as_str).collect();
    tracing::info!(
        default_language = %config.languages.default_language().as_str(),
        ?supported,
        "languages configured"
    );
    if config.dev_login_enabled {
        tracing::warn!("DEV_LOGIN_ENABLED is on; /api/dev/session accepts unauthenticated sign-in");
    }

    let pool = db::init_pool(&config.database_url, config.db_max_connections).await?;
    let state = state::AppState::new(pool, config);

    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "orgscope listening");
    axum::serve(listener, app).await?;
    Ok(())
}
