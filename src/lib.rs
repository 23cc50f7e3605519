pub mod api;
pub mod assistant;
pub mod config;
pub mod db;
pub mod models;
pub mod triage;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::assistant::{AiClassifier, ChatAssistant, LlmClient, OllamaClient};
use crate::config::Config;
use crate::db::SqliteCaseStore;
use crate::triage::SymptomCatalogue;

/// Wire everything together and serve until interrupted.
pub async fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Acuity starting v{}", config::APP_VERSION);

    let cfg = Config::from_env().expect("Invalid configuration");

    let catalogue = match &cfg.catalogue_path {
        Some(path) => SymptomCatalogue::load(path).expect("Cannot load symptom catalogue"),
        None => SymptomCatalogue::bundled(),
    };
    tracing::info!(
        version = catalogue.version(),
        symptoms = catalogue.entries().len(),
        "symptom catalogue loaded"
    );

    if let Some(parent) = cfg.db_path.parent() {
        std::fs::create_dir_all(parent).expect("Cannot create data directory");
    }
    let store = SqliteCaseStore::new(&cfg.db_path).expect("Cannot open case database");

    let client: Arc<dyn LlmClient> =
        Arc::new(build_llm_client(cfg.ollama_url.clone(), cfg.llm_timeout_secs).await);

    // Probe the model in the background; scoring falls back on its own
    // when the model is missing, this only decides the startup log line.
    {
        let client = client.clone();
        let model = cfg.model.clone();
        tokio::task::spawn_blocking(move || match client.is_model_available(&model) {
            Ok(true) => tracing::info!(%model, "model available"),
            Ok(false) => tracing::warn!(%model, "model not pulled, assessments will fall back"),
            Err(e) => tracing::warn!(error = %e, "Ollama unreachable, assessments will fall back"),
        });
    }

    let ctx = api::ApiContext::new(
        Arc::new(catalogue),
        Arc::new(store),
        AiClassifier::new(client.clone(), cfg.model.clone()),
        ChatAssistant::new(client, cfg.model.clone()),
        cfg.scorer,
    );

    let mut server = api::start_server(ctx, cfg.addr)
        .await
        .expect("Cannot start API server");
    tracing::info!(addr = %server.addr, scorer = ?cfg.scorer, "Acuity ready");

    tokio::signal::ctrl_c()
        .await
        .expect("Cannot listen for shutdown signal");
    tracing::info!("Shutdown requested");
    server.shutdown();
}

/// Builds the Ollama client off the runtime. `reqwest::blocking::Client`
/// construction panics when it happens on an async worker thread.
async fn build_llm_client(url: String, timeout_secs: u64) -> OllamaClient {
    tokio::task::spawn_blocking(move || OllamaClient::new(&url, timeout_secs))
        .await
        .expect("Cannot construct Ollama client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn llm_client_builds_from_async_context() {
        // Constructed inline here, the blocking client would panic;
        // the builder must hop through the blocking pool.
        let client = build_llm_client("http://127.0.0.1:11434".to_string(), 1).await;
        let _shared: Arc<dyn LlmClient> = Arc::new(client);
    }
}
