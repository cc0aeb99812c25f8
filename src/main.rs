use academy::{app, config::Config, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting course catalog");
    tracing::info!("Courses: {:?} + {:?}", config.courses_path, config.courses_dir);
    tracing::info!("Messages: {:?}", config.messages_path);

    if config.session_secret.is_none() {
        tracing::warn!("SESSION_SECRET not set; sessions will not survive a restart");
    }

    let addr = format!("0.0.0.0:{}", config.port);
    let state = AppState::new(config)?;

    if !state.oauth.is_configured() {
        tracing::warn!("Google OAuth keys not supplied (GOOGLE_CLIENT_ID / GOOGLE_CLIENT_SECRET); login is disabled");
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, app(state)).await?;

    Ok(())
}
