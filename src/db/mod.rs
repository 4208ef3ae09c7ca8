//! Database access for the plain CRUD entities.

pub mod queries;
