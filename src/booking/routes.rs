//! Appointment route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::queries;
use crate::error::{AppError, Result};
use crate::routes::ApiResponse;
use crate::AppState;

use super::requests::{CreateAppointmentRequest, UpdateAppointmentRequest};
use super::responses::AppointmentCreated;
use super::services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/agendamentos", get(list).post(create))
        .route(
            "/agendamentos/:id",
            get(get_one).put(update).delete(delete_one),
        )
}

/// List appointments with joined customer, court, and unit names.
async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<crate::models::AppointmentListing>>>> {
    let appointments = queries::list_appointments(&state.db).await?;
    let message = format!("{} agendamentos encontrados", appointments.len());
    Ok(Json(ApiResponse::success(message, appointments)))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<crate::models::Appointment>> {
    let appointment = queries::get_appointment(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(appointment))
}

async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AppointmentCreated>>)> {
    let id = services::create_appointment(&state.db, &state.events, req).await?;
    let response = ApiResponse::success(
        "Agendamento criado com sucesso".to_string(),
        AppointmentCreated { id },
    );
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<UpdateAppointmentRequest>,
) -> Result<Json<ApiResponse<()>>> {
    services::update_appointment(&state.db, &state.events, id, patch).await?;
    let message = format!("Agendamento com ID {} atualizado com sucesso", id);
    Ok(Json(ApiResponse::message(message)))
}

async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    services::delete_appointment(&state.db, &state.events, id).await?;
    let message = format!("Agendamento com ID {} excluído com sucesso", id);
    Ok(Json(ApiResponse::message(message)))
}
