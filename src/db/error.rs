use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the data-access layer.
///
/// Handlers match on this to pick a status code: `NotFound` maps to 404,
/// `Conflict` to 409, anything else to 500.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        StoreError::NotFound { entity, id }
    }
}

/// True when `err` is a rejected unique key (duplicate name, duplicate
/// (work, user) view pair, ...). Callers use this to recover from
/// get-or-create races by re-reading the row that won.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
