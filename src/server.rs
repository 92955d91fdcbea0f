use std::sync::Arc;

use anyhow::Result;
use portfolio_contact::{ContactForm, RelayClient};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::routes::AppState;

pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting portfolio server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let relay = RelayClient::new(&config.relay.base_url, config.relay.access_key.to_owned())?;
    tracing::info!(endpoint = %relay.endpoint(), "Contact relay configured");

    let state = AppState {
        config,
        contact_form: ContactForm::new(Arc::new(relay)),
    };

    let app = crate::routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
