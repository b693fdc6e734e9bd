use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use insurance_advisor::error::AppError;
use insurance_advisor::pricing::{format_charges, ModelSource, PricingError, RegistryStatus};
use insurance_advisor::risk::{
    ClientSubmission, PackRequest, RateGauge, ReimbursementTier, RiskAssessment,
};
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::{debug, info};

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) status: &'static str,
    pub(crate) models_loaded: bool,
    pub(crate) message: &'static str,
    pub(crate) models: RegistryStatus,
}

#[derive(Debug, Serialize)]
pub(crate) struct PredictResponse {
    pub(crate) success: bool,
    pub(crate) predicted_charges: String,
    pub(crate) predicted_amount: f64,
    pub(crate) pricing_source: ModelSource,
    pub(crate) risk_data: RiskAssessment,
    pub(crate) gauge: RateGauge,
}

#[derive(Debug, Serialize)]
pub(crate) struct PackResponse {
    pub(crate) success: bool,
    pub(crate) pack_data: PackData,
}

#[derive(Debug, Serialize)]
pub(crate) struct PackData {
    pub(crate) pack_name: String,
    pub(crate) client_type: String,
    pub(crate) profile_label: String,
    pub(crate) tier: ReimbursementTier,
    pub(crate) rate: u8,
    pub(crate) features: Vec<String>,
    pub(crate) description: String,
    pub(crate) label: String,
}

impl From<RiskAssessment> for PackData {
    fn from(assessment: RiskAssessment) -> Self {
        Self {
            pack_name: assessment.pack_name,
            client_type: assessment.client_type,
            profile_label: assessment.profile_label,
            tier: assessment.tier,
            rate: assessment.rate,
            features: assessment.features,
            description: assessment.description,
            label: assessment.label,
        }
    }
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/predict", post(predict_endpoint))
        .route("/pack", post(pack_endpoint))
        .with_state(state)
}

pub(crate) async fn healthcheck(State(state): State<AppState>) -> Json<HealthResponse> {
    let models = state.models.status();
    let message = if models.models_loaded {
        "Service actif"
    } else if state.models.can_price() {
        "Service actif - tarification simulée"
    } else {
        "Service actif - modèles indisponibles"
    };

    Json(HealthResponse {
        status: "ok",
        models_loaded: models.models_loaded,
        message,
        models,
    })
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn predict_endpoint(
    State(state): State<AppState>,
    payload: Result<Json<ClientSubmission>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    // Availability is reported before the payload is inspected.
    if !state.models.can_price() {
        return Err(PricingError::Unavailable("cost model not loaded".to_string()).into());
    }

    let Json(submission) = payload?;

    debug!(?submission, "prediction requested");
    let profile = submission.validate()?;
    let predicted_amount = state.models.estimate_charges(&profile)?;
    let risk_data = profile.assess();
    let gauge = risk_data.gauge();

    info!(
        tier = risk_data.tier.code(),
        score = risk_data.score,
        pack = %risk_data.pack_name,
        "prediction served"
    );

    Ok(Json(PredictResponse {
        success: true,
        predicted_charges: format_charges(predicted_amount),
        predicted_amount,
        pricing_source: state.models.source(),
        risk_data,
        gauge,
    }))
}

pub(crate) async fn pack_endpoint(
    payload: Result<Json<PackRequest>, JsonRejection>,
) -> Result<Json<PackResponse>, AppError> {
    let Json(request) = payload?;
    let assessment = request.assess()?;

    info!(
        tier = assessment.tier.code(),
        pack = %assessment.pack_name,
        "pack resolved"
    );

    Ok(Json(PackResponse {
        success: true,
        pack_data: assessment.into(),
    }))
}
