//! Request DTOs for booking endpoints.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Appointment;

/// Request to book a court slot
#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    /// Optional client-supplied id; the database sequence assigns one
    /// when absent.
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(rename = "dataHoraAgendamento")]
    pub data_hora_agendamento: NaiveDateTime,
    pub preco: Decimal,
    #[serde(rename = "idQuadra")]
    pub id_quadra: i32,
    #[serde(rename = "idCliente")]
    pub id_cliente: i32,
}

/// Partial update of an existing appointment.
///
/// Only the supplied fields change; validation always runs against the
/// effective values (current row overlaid with this patch).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAppointmentRequest {
    #[serde(default, rename = "dataHoraAgendamento")]
    pub data_hora_agendamento: Option<NaiveDateTime>,
    #[serde(default)]
    pub preco: Option<Decimal>,
    #[serde(default, rename = "idQuadra")]
    pub id_quadra: Option<i32>,
    #[serde(default, rename = "idCliente")]
    pub id_cliente: Option<i32>,
}

impl UpdateAppointmentRequest {
    /// Overlay the patch onto the current row, yielding the effective values
    /// the arbiter validates and persists.
    pub fn apply_to(&self, current: &Appointment) -> Appointment {
        Appointment {
            id: current.id,
            data_hora_agendamento: self
                .data_hora_agendamento
                .unwrap_or(current.data_hora_agendamento),
            preco: self.preco.unwrap_or(current.preco),
            id_quadra: self.id_quadra.unwrap_or(current.id_quadra),
            id_cliente: self.id_cliente.unwrap_or(current.id_cliente),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data_hora_agendamento.is_none()
            && self.preco.is_none()
            && self.id_quadra.is_none()
            && self.id_cliente.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn current() -> Appointment {
        Appointment {
            id: 10,
            data_hora_agendamento: "2025-01-20T10:00:00".parse().unwrap(),
            preco: dec!(80),
            id_quadra: 5,
            id_cliente: 3,
        }
    }

    #[test]
    fn empty_patch_keeps_every_field() {
        let patch = UpdateAppointmentRequest::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply_to(&current()), current());
    }

    #[test]
    fn patch_overrides_only_supplied_fields() {
        let patch = UpdateAppointmentRequest {
            preco: Some(dec!(120)),
            id_cliente: Some(9),
            ..Default::default()
        };
        let effective = patch.apply_to(&current());
        assert_eq!(effective.preco, dec!(120));
        assert_eq!(effective.id_cliente, 9);
        // Untouched fields carry over
        assert_eq!(effective.id, 10);
        assert_eq!(effective.id_quadra, 5);
        assert_eq!(effective.data_hora_agendamento, current().data_hora_agendamento);
    }

    #[test]
    fn patch_never_changes_the_id() {
        let patch = UpdateAppointmentRequest {
            id_quadra: Some(99),
            ..Default::default()
        };
        assert_eq!(patch.apply_to(&current()).id, 10);
    }
}
