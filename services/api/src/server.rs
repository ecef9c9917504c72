use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use rg16::assessment::AssessmentService;
use rg16::config::AppConfig;
use rg16::error::AppError;
use rg16::telemetry;
use tracing::{info, warn};

use crate::cli::ServeArgs;
use crate::infra::{AppState, ConfiguredStore};
use crate::routes::with_assessment_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.store_path.take() {
        config.store.path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = ConfiguredStore::from_path(config.store.path.clone());
    let store_label = store.describe();
    if config.paywall.bypass {
        warn!("paywall bypass enabled; every report module is unlocked");
    }
    let service = Arc::new(AssessmentService::new(
        Arc::new(store),
        config.paywall.bypass,
    ));

    let app = with_assessment_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, store = %store_label, "rg16 assessment api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
