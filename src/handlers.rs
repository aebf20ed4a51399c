use crate::config::Config;
use crate::encoder::FeatureEncoder;
use crate::errors::AppError;
use crate::models::{RawLead, ScoreResponse};
use crate::regressor::Regressor;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
///
/// Everything here is read-only after startup, so handlers can run from
/// arbitrarily many concurrent callers without coordination.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Feature-alignment pipeline bound to the active schema and scaler.
    pub encoder: FeatureEncoder,
    /// Trained scoring model.
    pub regressor: Arc<dyn Regressor>,
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "stormsales-api",
            "version": "0.1.0"
        })),
    )
}

/// POST /api/v1/score
///
/// Scores one raw lead record: aligns it to the canonical feature vector
/// and runs the trained regressor.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `lead` - The raw lead record (all canonical fields except the label).
///
/// # Returns
///
/// * `Result<Json<ScoreResponse>, AppError>` - The predicted score, or
///   `MissingField`/`BadRequest` for caller faults.
pub async fn score_lead(
    State(state): State<Arc<AppState>>,
    Json(lead): Json<RawLead>,
) -> Result<Json<ScoreResponse>, AppError> {
    tracing::debug!("POST /api/v1/score - {} input fields", lead.0.len());

    let features = state.encoder.encode(&lead)?;
    let prediction = state.regressor.predict(&features);

    // The model output is unbounded; the score contract is [0,100].
    let lead_score = (prediction.round() as i64).clamp(0, 100);

    tracing::info!("Scored lead: {} (raw prediction {:.3})", lead_score, prediction);

    Ok(Json(ScoreResponse { lead_score }))
}
