//! `bridgefee serve`

use bridge_api::AppState;
use bridge_core::AppConfig;

/// Run the HTTP API until Ctrl-C, with CLI flags overriding the config file
pub async fn run(
    mut config: AppConfig,
    http_addr: Option<String>,
    http_port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = http_addr {
        config.api.host = host;
    }
    if let Some(port) = http_port {
        config.api.port = port;
    }
    config.validate()?;

    tracing::info!(
        host = %config.api.host,
        port = config.api.port,
        fee_denominator = config.fees.fee_denominator,
        "Starting Bridgefee API"
    );

    bridge_api::start_server(AppState::with_config(config)).await?;
    Ok(())
}
