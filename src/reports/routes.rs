//! Report route handlers

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::requests::{CustomReportRequest, DailyReportParams};
use super::responses::{CustomReport, DailyReport};
use super::services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/relatorios/diario", get(daily))
        .route("/relatorios/customizado", post(custom))
}

/// Daily report handler (`?data=YYYY-MM-DD`)
async fn daily(
    State(state): State<AppState>,
    Query(params): Query<DailyReportParams>,
) -> Result<Json<DailyReport>> {
    let report =
        services::daily_report(&state.db, &state.cache, &state.config, params.data).await?;
    Ok(Json((*report).clone()))
}

/// Custom report handler
async fn custom(
    State(state): State<AppState>,
    Json(req): Json<CustomReportRequest>,
) -> Result<Json<CustomReport>> {
    let report = services::custom_report(&state.db, &state.cache, &state.config, &req).await?;
    Ok(Json((*report).clone()))
}
