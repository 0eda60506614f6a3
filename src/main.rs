mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    let mailer = services::mailer::from_config(config.mail.as_ref());
    if config.mail.is_none() {
        tracing::warn!("mail not configured; contact messages will only be logged");
    }
    tracing::info!(mailer = mailer.name(), "contact service ready");

    let state = state::AppState::new(mailer);

    let app = routes::app(state, &config.site_assets_dir).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "folio listening");
    axum::serve(listener, app).await.expect("server failed");
}
