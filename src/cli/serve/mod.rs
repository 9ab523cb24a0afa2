//! Serve command - runs the form page and JSON API

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::create_router;
use crate::config::AppConfig;
use crate::infrastructure::{logging, observability};

/// Load the artifacts, then serve until the process is stopped.
/// An artifact that fails to load stops startup before the listener binds.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging)?;

    let state = crate::create_app_state(&config.artifacts)?;
    info!(
        soil_colors = state.recommender.soil_class_count(),
        crops = state.recommender.crop_class_count(),
        "Artifacts loaded"
    );

    let mut app = create_router(state, &config.artifacts.images_dir);

    if let Some(metrics) = observability::init_metrics(&config.metrics) {
        app = app.merge(observability::create_metrics_router(
            metrics,
            &config.metrics.path,
        ));
    }

    let addr = build_socket_addr(&config)?;
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_socket_addr() {
        let addr = build_socket_addr(&AppConfig::default()).unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_build_socket_addr_rejects_hostname() {
        let mut config = AppConfig::default();
        config.server.host = "localhost".to_string();

        assert!(build_socket_addr(&config).is_err());
    }
}
