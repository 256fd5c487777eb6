// Landmark Explorer: upload a landmark photo, have Google Gemini describe it
// for a chosen scenario, and read the description in one of 17 languages.

mod config;
mod describe;
mod discover;
mod error;
mod export;
mod history;
mod language;
mod render;
mod routes;
mod scenario;
mod session;
mod translate;
mod ui;
mod upload;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::describe::GeminiDescriber;
use crate::routes::AppState;
use crate::session::SessionStore;
use crate::translate::GoogleTranslator;

const REAP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "landmark_explorer=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("Failed to create HTTP client")?;

    let state = Arc::new(AppState {
        describer: Arc::new(GeminiDescriber::new(
            client.clone(),
            config.api_key.clone(),
            config.model.clone(),
            config.gemini_base.clone(),
        )),
        translator: Arc::new(GoogleTranslator::new(client, config.translate_base.clone())),
        sessions: SessionStore::new(config.session_ttl),
    });
    state.sessions.spawn_reaper(REAP_INTERVAL);

    let app = routes::router(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.addr))?;

    info!("🚀 Landmark Explorer running on http://{}", config.addr);
    info!("🗺️ Using model {}", config.model);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
