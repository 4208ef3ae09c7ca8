//! Database queries for the booking arbiter.
//!
//! Every check-and-write sequence runs on one transaction so a failed
//! validation or insert rolls back without partial effects.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::Appointment;

/// Fetch the availability flag of a court. `None` when the court does not
/// exist.
pub async fn court_availability(
    tx: &mut Transaction<'_, Postgres>,
    court_id: i32,
) -> Result<Option<bool>, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT "estaDisponivel"
        FROM "beach-box"."Quadra"
        WHERE id = $1
        "#,
    )
    .bind(court_id)
    .fetch_optional(&mut **tx)
    .await
}

/// Count appointments occupying the given slot, optionally excluding one id
/// (so an appointment may keep its own slot on update).
pub async fn conflicting_slots(
    tx: &mut Transaction<'_, Postgres>,
    court_id: i32,
    at: NaiveDateTime,
    exclude_id: Option<i32>,
) -> Result<i64, sqlx::Error> {
    match exclude_id {
        Some(id) => {
            sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COUNT(*)
                FROM "beach-box"."Agendamento"
                WHERE "idQuadra" = $1
                  AND "dataHoraAgendamento" = $2
                  AND id != $3
                "#,
            )
            .bind(court_id)
            .bind(at)
            .bind(id)
            .fetch_one(&mut **tx)
            .await
        }
        None => {
            sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COUNT(*)
                FROM "beach-box"."Agendamento"
                WHERE "idQuadra" = $1
                  AND "dataHoraAgendamento" = $2
                "#,
            )
            .bind(court_id)
            .bind(at)
            .fetch_one(&mut **tx)
            .await
        }
    }
}

/// Insert an appointment, letting the sequence assign the id unless the
/// client supplied one. Returns the id of the new row.
pub async fn insert_appointment(
    tx: &mut Transaction<'_, Postgres>,
    id: Option<i32>,
    at: NaiveDateTime,
    preco: Decimal,
    court_id: i32,
    customer_id: i32,
) -> Result<i32, sqlx::Error> {
    match id {
        Some(id) => {
            sqlx::query_scalar::<_, i32>(
                r#"
                INSERT INTO "beach-box"."Agendamento"
                    (id, "dataHoraAgendamento", preco, "idQuadra", "idCliente")
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id
                "#,
            )
            .bind(id)
            .bind(at)
            .bind(preco)
            .bind(court_id)
            .bind(customer_id)
            .fetch_one(&mut **tx)
            .await
        }
        None => {
            sqlx::query_scalar::<_, i32>(
                r#"
                INSERT INTO "beach-box"."Agendamento"
                    ("dataHoraAgendamento", preco, "idQuadra", "idCliente")
                VALUES ($1, $2, $3, $4)
                RETURNING id
                "#,
            )
            .bind(at)
            .bind(preco)
            .bind(court_id)
            .bind(customer_id)
            .fetch_one(&mut **tx)
            .await
        }
    }
}

/// Fetch an appointment inside the update transaction.
pub async fn appointment_by_id(
    tx: &mut Transaction<'_, Postgres>,
    id: i32,
) -> Result<Option<Appointment>, sqlx::Error> {
    sqlx::query_as::<_, Appointment>(
        r#"
        SELECT id,
               "dataHoraAgendamento" AS data_hora_agendamento,
               preco,
               "idQuadra" AS id_quadra,
               "idCliente" AS id_cliente
        FROM "beach-box"."Agendamento"
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut **tx)
    .await
}

/// Overwrite an appointment with its validated effective values.
pub async fn update_appointment(
    tx: &mut Transaction<'_, Postgres>,
    appointment: &Appointment,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE "beach-box"."Agendamento"
        SET "dataHoraAgendamento" = $2,
            preco = $3,
            "idQuadra" = $4,
            "idCliente" = $5
        WHERE id = $1
        "#,
    )
    .bind(appointment.id)
    .bind(appointment.data_hora_agendamento)
    .bind(appointment.preco)
    .bind(appointment.id_quadra)
    .bind(appointment.id_cliente)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// Delete an appointment. Returns the number of rows removed; zero is a
/// legitimate outcome (delete is idempotent).
pub async fn delete_appointment(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM "beach-box"."Agendamento"
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
