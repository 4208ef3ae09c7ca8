//! Database models
//!
//! Row structs map the `beach-box` schema via sqlx's FromRow derive; queries
//! alias the camelCase columns to the snake_case field names.

mod appointment;
mod court;
mod customer;
mod unit;

pub use appointment::{Appointment, AppointmentListing};
pub use court::{Availability, Court, CourtListing};
pub use customer::Customer;
pub use unit::Unit;
