//! Unit route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use crate::db::queries;
use crate::error::{AppError, Result};
use crate::models::Unit;
use crate::AppState;

use super::{ApiResponse, CreatedId};

#[derive(Debug, Deserialize)]
pub struct UnitPayload {
    #[serde(default)]
    pub id: Option<i32>,
    pub nome: String,
    pub localizacao: String,
    pub telefone: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/unidades", get(list).post(create))
        .route("/unidades/:id", put(update).delete(delete_one))
}

async fn list(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Unit>>>> {
    let units = queries::list_units(&state.db).await?;
    let message = format!("{} unidades encontradas", units.len());
    Ok(Json(ApiResponse::success(message, units)))
}

async fn create(
    State(state): State<AppState>,
    Json(payload): Json<UnitPayload>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedId>>)> {
    let id = queries::create_unit(
        &state.db,
        payload.id,
        &payload.nome,
        &payload.localizacao,
        &payload.telefone,
    )
    .await?;
    let response = ApiResponse::success("Unidade criada com sucesso".to_string(), CreatedId { id });
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UnitPayload>,
) -> Result<Json<ApiResponse<()>>> {
    let rows = queries::update_unit(
        &state.db,
        id,
        &payload.nome,
        &payload.localizacao,
        &payload.telefone,
    )
    .await?;
    if rows == 0 {
        return Err(AppError::NotFound);
    }
    let message = format!("Unidade com ID {} atualizada com sucesso", id);
    Ok(Json(ApiResponse::message(message)))
}

async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    queries::delete_unit(&state.db, id).await?;
    let message = format!("Unidade com ID {} excluída com sucesso", id);
    Ok(Json(ApiResponse::message(message)))
}
