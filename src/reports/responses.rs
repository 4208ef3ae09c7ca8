//! Response DTOs for report endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use std::collections::BTreeMap;

/// Appointment detail row for the daily report (court joined)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyAppointmentRow {
    pub id: i32,
    #[serde(rename = "dataHoraAgendamento")]
    pub data_hora_agendamento: NaiveDateTime,
    pub preco: Decimal,
    pub quadra: String,
    pub quadra_id: i32,
}

/// Appointment detail row for the custom report (court, unit, and customer
/// joined)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RangeAppointmentRow {
    pub id: i32,
    #[serde(rename = "dataHoraAgendamento")]
    pub data_hora_agendamento: NaiveDateTime,
    pub preco: Decimal,
    pub quadra: String,
    pub quadra_id: i32,
    pub unidade: String,
    pub cliente: String,
    pub cliente_id: i32,
    pub precobase: Decimal,
}

/// Top-3 ranking entry by appointment count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRanking {
    pub id: i32,
    pub nome: String,
    pub total: i64,
}

/// Top-3 ranking entry by revenue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueRanking {
    pub id: i32,
    pub nome: String,
    pub total: Decimal,
}

/// Single-day capacity and revenue report
#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub total_appointments: i64,
    /// Free hour-slots left in the day across all available courts; each
    /// appointment counts as one consumed hour-slot.
    pub capacity_remaining: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub actual_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_revenue: Decimal,
    /// May be negative when achieved prices exceed base prices.
    #[serde(with = "rust_decimal::serde::str")]
    pub revenue_gap: Decimal,
    pub revenue_by_court: BTreeMap<String, Decimal>,
    pub appointments_by_hour: BTreeMap<u32, i64>,
    pub details: Vec<DailyAppointmentRow>,
}

/// Date-range capacity and revenue report with rankings
#[derive(Debug, Clone, Serialize)]
pub struct CustomReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_appointments: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub actual_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub revenue_gap: Decimal,
    pub revenue_by_day: BTreeMap<NaiveDate, Decimal>,
    pub appointments_by_hour: BTreeMap<u32, i64>,
    pub top_customers_by_count: Vec<CountRanking>,
    pub top_customers_by_revenue: Vec<RevenueRanking>,
    pub top_courts_by_count: Vec<CountRanking>,
    pub top_courts_by_revenue: Vec<RevenueRanking>,
    pub details: Vec<RangeAppointmentRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // Money is a string everywhere on the wire: the explicit `serde::str`
    // attributes and rust_decimal's default `Serialize` both emit the
    // decimal's string form.
    #[test]
    fn money_serializes_as_strings_throughout() {
        let report = DailyReport {
            date: "2025-01-20".parse().unwrap(),
            total_appointments: 1,
            capacity_remaining: 13,
            actual_revenue: dec!(80),
            max_revenue: dec!(1400),
            revenue_gap: dec!(1320),
            revenue_by_court: BTreeMap::from([("Quadra 1".to_string(), dec!(80))]),
            appointments_by_hour: BTreeMap::from([(10, 1)]),
            details: vec![DailyAppointmentRow {
                id: 1,
                data_hora_agendamento: "2025-01-20T10:00:00".parse().unwrap(),
                preco: dec!(80),
                quadra: "Quadra 1".to_string(),
                quadra_id: 1,
            }],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["actual_revenue"], "80");
        assert_eq!(json["max_revenue"], "1400");
        assert_eq!(json["revenue_by_court"]["Quadra 1"], "80");
        assert_eq!(json["details"][0]["preco"], "80");
    }

    #[test]
    fn ranking_totals_serialize_as_strings() {
        let entry = RevenueRanking {
            id: 2,
            nome: "Ana".to_string(),
            total: dec!(240),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["total"], "240");
    }
}
