//! Report assembly with database access and caching.
//!
//! Each report is computed from two reads (the appointment rows and the
//! available courts) plus the pure calculators, then cached until a booking
//! change invalidates it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use crate::cache::ReportCache;
use crate::config::AppConfig;
use crate::error::AppError;

use super::calculators;
use super::requests::CustomReportRequest;
use super::responses::{CustomReport, DailyReport};
use super::queries;

/// Generate (or fetch from cache) the daily report for a date.
///
/// An empty day is not an error: totals are zero and breakdowns empty.
pub async fn daily_report(
    pool: &PgPool,
    cache: &ReportCache,
    config: &AppConfig,
    date: NaiveDate,
) -> Result<Arc<DailyReport>, AppError> {
    let key = ReportCache::daily_key(date);
    if let Some(cached) = cache.daily.get(&key).await {
        tracing::debug!("Cache HIT for daily report: {}", date);
        return Ok(cached);
    }

    let rows = queries::appointments_for_day(pool, date).await?;
    let courts = queries::available_courts(pool).await?;

    let hours_per_day =
        calculators::operating_hours_per_day(config.opening_hour, config.closing_hour);
    let base_prices: Vec<Decimal> = courts.iter().map(|c| c.precobase).collect();

    let actual_revenue: Decimal = rows.iter().map(|r| r.preco).sum();
    let max_revenue = calculators::max_revenue(&base_prices, hours_per_day, 1);

    let report = Arc::new(DailyReport {
        date,
        total_appointments: rows.len() as i64,
        capacity_remaining: calculators::capacity_remaining(
            hours_per_day,
            courts.len(),
            rows.len(),
        ),
        actual_revenue,
        max_revenue,
        revenue_gap: calculators::revenue_gap(max_revenue, actual_revenue),
        revenue_by_court: calculators::revenue_by_court(
            rows.iter().map(|r| (r.quadra.as_str(), r.preco)),
        ),
        appointments_by_hour: calculators::appointments_by_hour(
            rows.iter().map(|r| r.data_hora_agendamento),
        ),
        details: rows,
    });

    cache.daily.insert(key, report.clone()).await;
    Ok(report)
}

/// Generate (or fetch from cache) the custom report for a date range with
/// optional unit/court filters.
pub async fn custom_report(
    pool: &PgPool,
    cache: &ReportCache,
    config: &AppConfig,
    req: &CustomReportRequest,
) -> Result<Arc<CustomReport>, AppError> {
    if req.data_inicio > req.data_fim {
        return Err(AppError::BadRequest(format!(
            "start date {} is after end date {}",
            req.data_inicio, req.data_fim
        )));
    }

    let unit_ids = req.unit_filter();
    let court_ids = req.court_filter();

    let key = ReportCache::custom_key(req.data_inicio, req.data_fim, unit_ids, court_ids);
    if let Some(cached) = cache.custom.get(&key).await {
        tracing::debug!("Cache HIT for custom report: {}", key);
        return Ok(cached);
    }

    let rows =
        queries::appointments_in_range(pool, req.data_inicio, req.data_fim, unit_ids, court_ids)
            .await?;
    let courts = queries::available_courts(pool).await?;

    let hours_per_day =
        calculators::operating_hours_per_day(config.opening_hour, config.closing_hour);
    let days = calculators::days_in_period(req.data_inicio, req.data_fim);
    let base_prices: Vec<Decimal> = courts.iter().map(|c| c.precobase).collect();

    let actual_revenue: Decimal = rows.iter().map(|r| r.preco).sum();
    let max_revenue = calculators::max_revenue(&base_prices, hours_per_day, days);

    let report = Arc::new(CustomReport {
        start_date: req.data_inicio,
        end_date: req.data_fim,
        total_appointments: rows.len() as i64,
        actual_revenue,
        max_revenue,
        revenue_gap: calculators::revenue_gap(max_revenue, actual_revenue),
        revenue_by_day: calculators::revenue_by_day(
            rows.iter().map(|r| (r.data_hora_agendamento, r.preco)),
        ),
        appointments_by_hour: calculators::appointments_by_hour(
            rows.iter().map(|r| r.data_hora_agendamento),
        ),
        top_customers_by_count: calculators::top_by_count(
            rows.iter().map(|r| (r.cliente_id, r.cliente.as_str())),
        ),
        top_customers_by_revenue: calculators::top_by_revenue(
            rows.iter().map(|r| (r.cliente_id, r.cliente.as_str(), r.preco)),
        ),
        top_courts_by_count: calculators::top_by_count(
            rows.iter().map(|r| (r.quadra_id, r.quadra.as_str())),
        ),
        top_courts_by_revenue: calculators::top_by_revenue(
            rows.iter().map(|r| (r.quadra_id, r.quadra.as_str(), r.preco)),
        ),
        details: rows,
    });

    cache.custom.insert(key, report.clone()).await;
    Ok(report)
}
