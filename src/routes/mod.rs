//! Route handlers for the plain CRUD entities.

pub mod clientes;
pub mod quadras;
pub mod unidades;

use serde::Serialize;

/// Standard response envelope for the CRUD endpoints
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: String, data: T) -> Self {
        Self {
            status: "success",
            message,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope with no payload.
    pub fn message(message: String) -> Self {
        Self {
            status: "success",
            message,
            data: None,
        }
    }
}

/// Payload of a freshly created row
#[derive(Debug, Serialize)]
pub struct CreatedId {
    pub id: i32,
}
