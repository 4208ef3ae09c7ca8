//! Customer (`Cliente`) model.

use serde::Serialize;
use sqlx::FromRow;

/// Customer from `"beach-box"."Cliente"`
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: i32,
    pub nome: String,
    pub telefone: String,
    pub endereco: String,
}
