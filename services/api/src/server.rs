use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionRepository};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use career_compass::config::AppConfig;
use career_compass::error::AppError;
use career_compass::telemetry;
use career_compass::workflows::assessment::AssessmentService;
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
    if let Some(catalog) = args.catalog.take() {
        config.assessment.catalog_path = Some(catalog);
    }

    telemetry::init(&config.telemetry)?;

    let engine = config.assessment.scoring_engine()?;
    info!(
        questions = engine.catalog().len(),
        custom_catalog = config.assessment.catalog_path.is_some(),
        "question catalog loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemorySessionRepository::default());
    let assessment_service = Arc::new(AssessmentService::new(repository, engine));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "career readiness service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
