#![recursion_limit = "256"]

mod config;
mod llm;
mod rate_limit;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env();

    // Initialize the model client (non-fatal: /gemini/ answers 503 without it).
    let generator: Option<Arc<dyn llm::Generate>> = if config.assistant_disabled {
        tracing::warn!("assistant disabled by ASSISTANT_DISABLED");
        None
    } else {
        match llm::OllamaClient::new(&config.ollama) {
            Ok(client) => {
                tracing::info!(model = %config.ollama.model, url = %config.ollama.generate_url(), "model client initialized");
                Some(Arc::new(client) as Arc<dyn llm::Generate>)
            }
            Err(e) => {
                tracing::warn!(error = %e, "model client not configured, assistant disabled");
                None
            }
        }
    };

    let state = state::AppState::new(generator, rate_limit::RateLimiter::new());

    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "xrai listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
