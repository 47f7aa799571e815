use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failure of a repository operation.
///
/// Every repository method reports one of these kinds so callers can tell a rejected
/// record apart from a missing row, a store-side constraint, or a broken connection.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The record breaks a field rule. Raised before the store is touched.
    #[error("{0}")]
    Validation(String),

    /// The targeted row does not exist.
    ///
    /// # Fields
    /// - `entity` - Name of the record type that was looked up
    /// - `id` - Primary key that was not found
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// The store rejected the write because of a foreign key or unique constraint.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Any other store failure, including lost connectivity.
    #[error(transparent)]
    Transport(DbErr),
}

/// Classifies a store error.
///
/// Foreign key and unique violations reported by the driver become `ConstraintViolation`;
/// everything else is a `Transport` failure.
impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg))
            | Some(SqlErr::UniqueConstraintViolation(msg)) => Self::ConstraintViolation(msg),
            _ => Self::Transport(err),
        }
    }
}
