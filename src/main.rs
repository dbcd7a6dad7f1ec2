mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to read .env: {e}");
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "lapak host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), config::ConfigError> {
    let config = HostConfig::from_env()?;

    let client_api = client::net::api::api_base_url();
    match config.api_url.as_deref() {
        Some(url) if url.trim_end_matches('/') != client_api => {
            tracing::warn!(
                runtime = url,
                compiled = client_api,
                "LAPAK_API_URL differs from the URL compiled into the client; rebuild the client to apply it"
            );
        }
        _ => tracing::info!(api = client_api, "client API base"),
    }

    let options = leptos::prelude::get_configuration(None)
        .map_err(|e| config::ConfigError::Leptos(e.to_string()))?
        .leptos_options;
    let site_root = config.site_root_or(&options);

    let app = routes::app(options, site_root);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(|e| config::ConfigError::Bind { port: config.port, source: e })?;

    tracing::info!(port = config.port, "lapak listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| config::ConfigError::Serve(e.to_string()))
}
