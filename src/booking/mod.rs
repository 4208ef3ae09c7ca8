//! Booking arbitration for appointments.
//!
//! Validates every appointment write against the court availability flag and
//! the uniqueness of the (court, timestamp) slot, inside one transaction.

pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use routes::router;
pub use services::BookingError;
