//! Beach Box court booking backend.
//!
//! JSON API over a Postgres schema: CRUD for customers, units, courts, and
//! appointments, booking arbitration (no double-booked slots, no bookings on
//! unavailable courts), and daily/custom capacity-and-revenue reports.

pub mod booking;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod events;
pub mod models;
pub mod reports;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tokio::sync::broadcast;

use cache::ReportCache;
use config::AppConfig;
use events::BookingChanged;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub cache: ReportCache,
    pub events: broadcast::Sender<BookingChanged>,
    pub config: Arc<AppConfig>,
}

/// Assemble the full API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(booking::router())
        .merge(reports::router())
        .merge(routes::clientes::router())
        .merge(routes::quadras::router())
        .merge(routes::unidades::router())
}
