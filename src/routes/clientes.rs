//! Customer route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use crate::db::queries;
use crate::error::{AppError, Result};
use crate::models::Customer;
use crate::AppState;

use super::{ApiResponse, CreatedId};

#[derive(Debug, Deserialize)]
pub struct CustomerPayload {
    #[serde(default)]
    pub id: Option<i32>,
    pub nome: String,
    pub telefone: String,
    pub endereco: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clientes", get(list).post(create))
        .route("/clientes/:id", put(update).delete(delete_one))
}

async fn list(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Customer>>>> {
    let customers = queries::list_customers(&state.db).await?;
    let message = format!("{} clientes encontrados", customers.len());
    Ok(Json(ApiResponse::success(message, customers)))
}

async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CustomerPayload>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedId>>)> {
    let id = queries::create_customer(
        &state.db,
        payload.id,
        &payload.nome,
        &payload.telefone,
        &payload.endereco,
    )
    .await?;
    let response = ApiResponse::success("Cliente criado com sucesso".to_string(), CreatedId { id });
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CustomerPayload>,
) -> Result<Json<ApiResponse<()>>> {
    let rows = queries::update_customer(
        &state.db,
        id,
        &payload.nome,
        &payload.telefone,
        &payload.endereco,
    )
    .await?;
    if rows == 0 {
        return Err(AppError::NotFound);
    }
    let message = format!("Cliente com ID {} atualizado com sucesso", id);
    Ok(Json(ApiResponse::message(message)))
}

async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    queries::delete_customer(&state.db, id).await?;
    let message = format!("Cliente com ID {} excluído com sucesso", id);
    Ok(Json(ApiResponse::message(message)))
}
