//! Database queries for the report engine.
//!
//! All reads are plain read-only queries; reports never hold locks and may
//! reflect ordinary read-committed skew.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use super::responses::{DailyAppointmentRow, RangeAppointmentRow};

/// Available court with its base price, for the maximum-revenue bound
#[derive(Debug, Clone, FromRow)]
pub struct AvailableCourt {
    pub quadra_id: i32,
    pub precobase: Decimal,
}

/// Appointments of a single day, joined to their court.
pub async fn appointments_for_day(
    pool: &PgPool,
    date: NaiveDate,
) -> Result<Vec<DailyAppointmentRow>, sqlx::Error> {
    sqlx::query_as::<_, DailyAppointmentRow>(
        r#"
        SELECT ag.id,
               ag."dataHoraAgendamento" AS data_hora_agendamento,
               ag.preco,
               q.nome AS quadra,
               q.id AS quadra_id
        FROM "beach-box"."Agendamento" ag
        JOIN "beach-box"."Quadra" q ON ag."idQuadra" = q.id
        WHERE ag."dataHoraAgendamento"::date = $1
        ORDER BY ag."dataHoraAgendamento", ag.id
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await
}

/// Appointments in an inclusive date range, joined to court, unit, and
/// customer, optionally restricted to sets of unit/court ids (NULL filter =
/// no restriction).
pub async fn appointments_in_range(
    pool: &PgPool,
    start: NaiveDate,
    end: NaiveDate,
    unit_ids: Option<&[i32]>,
    court_ids: Option<&[i32]>,
) -> Result<Vec<RangeAppointmentRow>, sqlx::Error> {
    sqlx::query_as::<_, RangeAppointmentRow>(
        r#"
        SELECT ag.id,
               ag."dataHoraAgendamento" AS data_hora_agendamento,
               ag.preco,
               q.nome AS quadra,
               q.id AS quadra_id,
               u.nome AS unidade,
               c.nome AS cliente,
               c.id AS cliente_id,
               q.precobase
        FROM "beach-box"."Agendamento" ag
        JOIN "beach-box"."Quadra" q ON ag."idQuadra" = q.id
        JOIN "beach-box"."Unidade" u ON q."idUnidade" = u.id
        JOIN "beach-box"."Cliente" c ON ag."idCliente" = c.id
        WHERE ag."dataHoraAgendamento"::date BETWEEN $1 AND $2
          AND ($3::int4[] IS NULL OR u.id = ANY($3))
          AND ($4::int4[] IS NULL OR q.id = ANY($4))
        ORDER BY ag."dataHoraAgendamento", ag.id
        "#,
    )
    .bind(start)
    .bind(end)
    .bind(unit_ids)
    .bind(court_ids)
    .fetch_all(pool)
    .await
}

/// Courts currently flagged available, with their base prices.
pub async fn available_courts(pool: &PgPool) -> Result<Vec<AvailableCourt>, sqlx::Error> {
    sqlx::query_as::<_, AvailableCourt>(
        r#"
        SELECT id AS quadra_id, precobase
        FROM "beach-box"."Quadra"
        WHERE "estaDisponivel" = TRUE
        "#,
    )
    .fetch_all(pool)
    .await
}
