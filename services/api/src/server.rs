use crate::cli::ServeArgs;
use crate::infra::{AppState, LoggingNotificationSink};
use crate::routes::with_booking_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use removals_core::bookings::{BookingService, InMemoryJobRepository};
use removals_core::business::BusinessDirectory;
use removals_core::config::AppConfig;
use removals_core::error::AppError;
use removals_core::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let directory = Arc::new(BusinessDirectory::standard());
    let repository = Arc::new(InMemoryJobRepository::default());
    let notifications = Arc::new(LoggingNotificationSink::from_config(&config.messaging));
    let booking_service = Arc::new(BookingService::new(directory, repository, notifications));

    let app = with_booking_routes(booking_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "removals booking service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
