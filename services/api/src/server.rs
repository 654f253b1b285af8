use crate::cli::ServeArgs;
use crate::infra::{AppState, AssessmentServices};
use crate::routes::with_assessment_routes;
use ai_assessment::config::{AppConfig, ServerConfig};
use ai_assessment::error::AppError;
use ai_assessment::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    apply_overrides(&mut config.server, args);

    telemetry::init(&config.telemetry)?;

    let services = AssessmentServices::load(&config.assessment)?;
    info!(
        compliance_catalog = services.compliance.catalog().version(),
        compliance_questions = services.compliance.catalog().len(),
        maturity_model = services.maturity.model().version(),
        "assessment catalogs loaded"
    );

    let (metric_layer, metric_handle) = PrometheusMetricLayer::pair();
    let ready = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: Arc::clone(&ready),
        metrics: Arc::new(metric_handle),
    };

    let app = with_assessment_routes(services)
        .layer(Extension(state))
        .layer(metric_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    ready.store(true, Ordering::Release);
    info!(?config.environment, %addr, "assessment service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(Arc::clone(&ready)))
        .await?;

    info!("assessment service stopped");
    Ok(())
}

fn apply_overrides(server: &mut ServerConfig, args: ServeArgs) {
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }
}

/// Resolves on ctrl-c after marking the service not ready.
async fn shutdown_signal(ready: Arc<AtomicBool>) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    ready.store(false, Ordering::Release);
    info!("shutdown requested");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_replace_configured_binding() {
        let mut server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };

        apply_overrides(
            &mut server,
            ServeArgs {
                host: Some("0.0.0.0".to_string()),
                port: None,
            },
        );

        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 3000);
    }
}
