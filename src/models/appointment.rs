//! Appointment (`Agendamento`) model.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Appointment from `"beach-box"."Agendamento"`.
///
/// `(id_quadra, data_hora_agendamento)` is the booking slot; at most one
/// appointment may occupy a slot at any time. `preco` is the price agreed at
/// booking time and may differ from the court's base price.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Appointment {
    pub id: i32,
    #[serde(rename = "dataHoraAgendamento")]
    pub data_hora_agendamento: NaiveDateTime,
    pub preco: Decimal,
    #[serde(rename = "idQuadra")]
    pub id_quadra: i32,
    #[serde(rename = "idCliente")]
    pub id_cliente: i32,
}

/// Appointment row joined with customer, court, and unit names, as returned
/// by the listing endpoint. Joins are LEFT, so the names are optional.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AppointmentListing {
    pub id: i32,
    #[serde(rename = "dataHoraAgendamento")]
    pub data_hora_agendamento: NaiveDateTime,
    pub preco: Decimal,
    #[serde(rename = "idCliente")]
    pub id_cliente: i32,
    pub cliente: Option<String>,
    #[serde(rename = "idQuadra")]
    pub id_quadra: i32,
    pub quadra: Option<String>,
    #[serde(rename = "idUnidade")]
    pub id_unidade: Option<i32>,
    pub unidade: Option<String>,
}
