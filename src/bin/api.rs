use anyhow::{Context, Result};
use jaundice::{
    analysis::Analyzer,
    app_state::AppState,
    articles::router,
    charged_words::load_charged_words,
    config::{self, Config},
    fetcher::{Fetcher, build_client},
    load_lemmatizer,
    sanitizers::SanitizerRegistry,
};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    config::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(?config, "configuration loaded");

    let lemmatizer = load_lemmatizer(config.lemma_dictionary()).await?;
    let charged_words = load_charged_words(config.charged_words_directory(), lemmatizer.as_ref())
        .await
        .context("failed to load charged words")?;

    let analyzer = Analyzer::new(
        Fetcher::new(build_client()?),
        lemmatizer,
        Arc::new(SanitizerRegistry::with_defaults()),
        Arc::new(charged_words),
    )
    .with_fetch_timeout(config.fetch_timeout());

    let app = router(AppState::new(analyzer, config.url_limit()));
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr()))?;
    info!(addr = config.bind_addr(), "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
                return;
            }
            info!("Received shutdown signal, shutting down");
        })
        .await?;

    Ok(())
}
