//! Response DTOs for booking endpoints.

use serde::Serialize;

/// Returned after a successful booking
#[derive(Debug, Serialize)]
pub struct AppointmentCreated {
    pub id: i32,
}
