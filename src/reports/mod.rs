//! Capacity and revenue reporting.
//!
//! Computes actual revenue, the idealized maximum (every available court
//! fully booked at base price for every operating hour), the resulting gap,
//! and breakdowns by time bucket, customer, and court. Reports are computed
//! views over current data; nothing is persisted.

pub mod calculators;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use responses::{CustomReport, DailyReport};
pub use routes::router;
