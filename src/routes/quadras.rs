//! Court route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, put},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::db::queries;
use crate::error::{AppError, Result};
use crate::events::{BookingChanged, BookingEventKind};
use crate::models::CourtListing;
use crate::AppState;

use super::{ApiResponse, CreatedId};

#[derive(Debug, Deserialize)]
pub struct CourtPayload {
    #[serde(default)]
    pub id: Option<i32>,
    pub nome: String,
    pub localizacao: String,
    #[serde(rename = "idUnidade")]
    pub id_unidade: i32,
    pub precobase: Decimal,
    #[serde(rename = "estaDisponivel")]
    pub esta_disponivel: bool,
    pub tipo: String,
}

/// Returned by the availability toggle
#[derive(Debug, Serialize)]
pub struct AvailabilityState {
    #[serde(rename = "estaDisponivel")]
    pub esta_disponivel: bool,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quadras", get(list).post(create))
        .route("/quadras/:id", put(update).delete(delete_one))
        .route("/quadras/:id/disponibilidade", patch(toggle_availability))
}

async fn list(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<CourtListing>>>> {
    let courts = queries::list_courts(&state.db).await?;
    let message = format!("{} quadras encontradas", courts.len());
    Ok(Json(ApiResponse::success(message, courts)))
}

async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CourtPayload>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedId>>)> {
    let id = queries::create_court(
        &state.db,
        payload.id,
        &payload.nome,
        &payload.localizacao,
        payload.id_unidade,
        payload.precobase,
        payload.esta_disponivel,
        &payload.tipo,
    )
    .await?;
    notify_court_changed(&state, id);
    let response = ApiResponse::success("Quadra criada com sucesso".to_string(), CreatedId { id });
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CourtPayload>,
) -> Result<Json<ApiResponse<()>>> {
    let rows = queries::update_court(
        &state.db,
        id,
        &payload.nome,
        &payload.localizacao,
        payload.id_unidade,
        payload.precobase,
        payload.esta_disponivel,
        &payload.tipo,
    )
    .await?;
    if rows == 0 {
        return Err(AppError::NotFound);
    }
    notify_court_changed(&state, id);
    let message = format!("Quadra com ID {} atualizada com sucesso", id);
    Ok(Json(ApiResponse::message(message)))
}

/// Flip the court's availability state. The flag gates new bookings only;
/// existing appointments stay untouched.
async fn toggle_availability(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<AvailabilityState>>> {
    let court = queries::get_court(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let next = court.availability().toggle();
    queries::set_court_availability(&state.db, id, next.as_flag()).await?;
    notify_court_changed(&state, id);

    let message = format!("Estado da quadra {} alterado", id);
    Ok(Json(ApiResponse::success(
        message,
        AvailabilityState {
            esta_disponivel: next.as_flag(),
        },
    )))
}

async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    queries::delete_court(&state.db, id).await?;
    notify_court_changed(&state, id);
    let message = format!("Quadra com ID {} excluída com sucesso", id);
    Ok(Json(ApiResponse::message(message)))
}

/// Court writes change which courts count toward report capacity and maximum
/// revenue, so cached reports must be dropped just like on booking writes.
fn notify_court_changed(state: &AppState, id: i32) {
    let _ = state.events.send(BookingChanged {
        kind: BookingEventKind::CourtChanged,
        id,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::{cache::ReportCache, events};
    use rust_decimal_macros::dec;
    use sqlx::PgPool;
    use std::sync::Arc;

    fn app_state(db: PgPool) -> AppState {
        AppState {
            db,
            cache: ReportCache::new(),
            events: events::channel(),
            config: Arc::new(AppConfig {
                database_url: String::new(),
                bind_addr: "127.0.0.1:0".to_string(),
                opening_hour: 8,
                closing_hour: 22,
            }),
        }
    }

    async fn seed_unit(db: &PgPool) -> i32 {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO "beach-box"."Unidade" (nome, localizacao, telefone)
            VALUES ('Unidade Centro', 'Rua A, 1', '11 5555-0000')
            RETURNING id
            "#,
        )
        .fetch_one(db)
        .await
        .unwrap()
    }

    fn court_payload(unit_id: i32) -> CourtPayload {
        CourtPayload {
            id: None,
            nome: "Quadra 1".to_string(),
            localizacao: "Fundos".to_string(),
            id_unidade: unit_id,
            precobase: dec!(100),
            esta_disponivel: true,
            tipo: "areia".to_string(),
        }
    }

    #[sqlx::test]
    async fn court_writes_notify_the_report_invalidator(db: PgPool) {
        let state = app_state(db);
        let mut rx = state.events.subscribe();
        let unit_id = seed_unit(&state.db).await;

        let (_, Json(created)) = create(State(state.clone()), Json(court_payload(unit_id)))
            .await
            .unwrap();
        let court_id = created.data.unwrap().id;

        let event = rx.recv().await.unwrap();
        assert_eq!(event.kind, BookingEventKind::CourtChanged);
        assert_eq!(event.id, court_id);

        toggle_availability(State(state.clone()), Path(court_id))
            .await
            .unwrap();
        let event = rx.recv().await.unwrap();
        assert_eq!(event.kind, BookingEventKind::CourtChanged);
        assert_eq!(event.id, court_id);

        delete_one(State(state.clone()), Path(court_id))
            .await
            .unwrap();
        let event = rx.recv().await.unwrap();
        assert_eq!(event.kind, BookingEventKind::CourtChanged);
    }

    #[sqlx::test]
    async fn toggle_flips_the_availability_flag(db: PgPool) {
        let state = app_state(db);
        let unit_id = seed_unit(&state.db).await;

        let (_, Json(created)) = create(State(state.clone()), Json(court_payload(unit_id)))
            .await
            .unwrap();
        let court_id = created.data.unwrap().id;

        let Json(toggled) = toggle_availability(State(state.clone()), Path(court_id))
            .await
            .unwrap();
        assert!(!toggled.data.unwrap().esta_disponivel);

        let Json(toggled) = toggle_availability(State(state.clone()), Path(court_id))
            .await
            .unwrap();
        assert!(toggled.data.unwrap().esta_disponivel);
    }
}
