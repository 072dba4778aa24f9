mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use config::ServerConfig;
use services::recognition::HttpRecognitionBackend;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "sketchboard failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|e| format!("configuration: {e}"))?;
    let catalog = services::catalog::load_catalog(&config.catalog_path).map_err(|e| format!("catalog: {e}"))?;
    let backend = HttpRecognitionBackend::new(&config).map_err(|e| format!("recognition backend: {e}"))?;
    tracing::info!(url = %config.recognition_url, "recognition backend configured");

    let state = state::AppState::new(catalog, Arc::new(backend));
    let app = routes::app(state, &config.assets_dir)?;

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| format!("bind port {port}: {e}"))?;

    tracing::info!(%port, "sketchboard listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server: {e}"))
}
