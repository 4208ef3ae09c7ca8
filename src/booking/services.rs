//! Booking arbiter with database access.
//!
//! Every write runs both validation checks and the statement itself inside a
//! single transaction. The checks bound but do not close the race between
//! "slot is free" and "insert row"; the unique index on
//! `("idQuadra", "dataHoraAgendamento")` closes it, and a violation of that
//! index surfaces as the same `SlotTaken` error.

use chrono::NaiveDateTime;
use sqlx::PgPool;
use tokio::sync::broadcast;

use crate::error::AppError;
use crate::events::{BookingChanged, BookingEventKind};
use crate::models::Availability;

use super::queries;
use super::requests::{CreateAppointmentRequest, UpdateAppointmentRequest};

/// Booking validation error types
///
/// These are expected, user-correctable outcomes, distinct from
/// persistence-layer failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BookingError {
    #[error("court {court_id} is not available for booking")]
    CourtUnavailable { court_id: i32 },

    #[error("court {court_id} already has an appointment at {at}")]
    SlotTaken { court_id: i32, at: NaiveDateTime },
}

/// Decide whether a proposed slot may be written.
///
/// `availability` is the court's flag (`None` when the court does not exist)
/// and `conflicts` the number of other appointments already in the slot.
fn arbitrate(
    availability: Option<bool>,
    conflicts: i64,
    court_id: i32,
    at: NaiveDateTime,
) -> Result<(), BookingError> {
    let state = match availability {
        Some(flag) => Availability::from_flag(flag),
        None => return Err(BookingError::CourtUnavailable { court_id }),
    };
    if !state.accepts_bookings() {
        return Err(BookingError::CourtUnavailable { court_id });
    }
    if conflicts > 0 {
        return Err(BookingError::SlotTaken { court_id, at });
    }
    Ok(())
}

/// Unique index on `("idQuadra", "dataHoraAgendamento")`, see the migrations.
const SLOT_INDEX: &str = "uq_agendamento_slot";

/// Map a storage-layer violation of the slot index to `SlotTaken`.
///
/// Only that index means "slot occupied". Other unique violations (a
/// client-supplied duplicate id trips the primary key) are not slot
/// conflicts and pass through as database errors.
fn map_slot_violation(e: sqlx::Error, court_id: i32, at: NaiveDateTime) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() && db.constraint() == Some(SLOT_INDEX) {
            return BookingError::SlotTaken { court_id, at }.into();
        }
    }
    e.into()
}

/// Validate and create an appointment.
///
/// Returns the new appointment id, or a `BookingError` when the court is
/// unavailable or the slot is already taken. Nothing is persisted on failure.
pub async fn create_appointment(
    pool: &PgPool,
    events: &broadcast::Sender<BookingChanged>,
    req: CreateAppointmentRequest,
) -> Result<i32, AppError> {
    let mut tx = pool.begin().await?;

    let availability = queries::court_availability(&mut tx, req.id_quadra).await?;
    let conflicts =
        queries::conflicting_slots(&mut tx, req.id_quadra, req.data_hora_agendamento, None)
            .await?;
    arbitrate(availability, conflicts, req.id_quadra, req.data_hora_agendamento)?;

    let id = queries::insert_appointment(
        &mut tx,
        req.id,
        req.data_hora_agendamento,
        req.preco,
        req.id_quadra,
        req.id_cliente,
    )
    .await
    .map_err(|e| map_slot_violation(e, req.id_quadra, req.data_hora_agendamento))?;

    tx.commit().await?;
    tracing::info!("Appointment {} booked on court {}", id, req.id_quadra);

    let _ = events.send(BookingChanged {
        kind: BookingEventKind::Created,
        id,
    });
    Ok(id)
}

/// Validate and apply a partial update to an appointment.
///
/// The patch is overlaid onto the current row and the effective values are
/// validated with the same checks as creation, except the appointment may
/// keep its own slot.
pub async fn update_appointment(
    pool: &PgPool,
    events: &broadcast::Sender<BookingChanged>,
    id: i32,
    patch: UpdateAppointmentRequest,
) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let current = queries::appointment_by_id(&mut tx, id)
        .await?
        .ok_or(AppError::NotFound)?;
    let effective = patch.apply_to(&current);

    let availability = queries::court_availability(&mut tx, effective.id_quadra).await?;
    let conflicts = queries::conflicting_slots(
        &mut tx,
        effective.id_quadra,
        effective.data_hora_agendamento,
        Some(id),
    )
    .await?;
    arbitrate(
        availability,
        conflicts,
        effective.id_quadra,
        effective.data_hora_agendamento,
    )?;

    queries::update_appointment(&mut tx, &effective)
        .await
        .map_err(|e| {
            map_slot_violation(e, effective.id_quadra, effective.data_hora_agendamento)
        })?;

    tx.commit().await?;
    tracing::info!("Appointment {} updated", id);

    let _ = events.send(BookingChanged {
        kind: BookingEventKind::Updated,
        id,
    });
    Ok(())
}

/// Delete an appointment by id. Idempotent: deleting an id that does not
/// exist succeeds without emitting an event.
pub async fn delete_appointment(
    pool: &PgPool,
    events: &broadcast::Sender<BookingChanged>,
    id: i32,
) -> Result<(), AppError> {
    let removed = queries::delete_appointment(pool, id).await?;

    if removed > 0 {
        tracing::info!("Appointment {} cancelled", id);
        let _ = events.send(BookingChanged {
            kind: BookingEventKind::Cancelled,
            id,
        });
    }
    Ok(())
}
