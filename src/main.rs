use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stormsales_api::config::Config;
use stormsales_api::encoder::{check_column_alignment, FeatureEncoder};
use stormsales_api::handlers;
use stormsales_api::regressor::{LinearRegressor, Regressor};
use stormsales_api::scaler::StandardScaler;
use stormsales_api::schema::LeadSchema;

/// Build the CORS layer from configuration.
///
/// With an explicit allow-list the layer only accepts the configured
/// browser origins; without one the service stays permissive.
fn cors_layer(config: &Config) -> CorsLayer {
    match &config.cors_allowed_origins {
        Some(origins) => {
            let parsed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(parsed))
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::permissive(),
    }
}

/// Main entry point for the application.
///
/// This function initializes the application, including:
/// - Logging and tracing.
/// - Configuration loading.
/// - Scaler and model artifact loading.
/// - Schema/artifact alignment checks (fail fast on any divergence).
/// - HTTP routes and middleware (CORS, request size limit).
///
/// It then starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stormsales_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // The canonical feature schema the artifacts were fitted against
    let schema = Arc::new(LeadSchema::v1());
    tracing::info!(
        "Feature schema v1: {} columns ({} numeric)",
        schema.width(),
        schema.numeric_width()
    );

    // Load fitted artifacts once; both are immutable for the process lifetime
    let fitted_scaler = Arc::new(StandardScaler::load(&config.scaler_path)?);
    let model = Arc::new(LinearRegressor::load(&config.model_path)?);

    // Fail fast if either artifact disagrees with the schema layout;
    // scoring with misaligned columns would silently corrupt predictions.
    let encoder = FeatureEncoder::new(schema.clone(), fitted_scaler)
        .map_err(|e| anyhow::anyhow!("scaler artifact rejected: {}", e))?;
    check_column_alignment("model", schema.columns(), model.columns())
        .map_err(|e| anyhow::anyhow!("model artifact rejected: {}", e))?;
    tracing::info!("Artifacts aligned with schema v1");

    // Build application state
    let app_state = Arc::new(handlers::AppState {
        config: config.clone(),
        encoder,
        regressor: model as Arc<dyn Regressor>,
    });

    // Build the app. Scoring payloads are small; 1MB is generous.
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/v1/score", post(handlers::score_lead))
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(1024 * 1024)),
        )
        .layer(cors_layer(&config));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
