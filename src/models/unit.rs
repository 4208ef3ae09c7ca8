//! Unit (`Unidade`) model.

use serde::Serialize;
use sqlx::FromRow;

/// Unit from `"beach-box"."Unidade"`
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Unit {
    pub id: i32,
    pub nome: String,
    pub localizacao: String,
    pub telefone: String,
}
