//! Store accessors for the `folders` and `notes` tables.
//!
//! Every method issues exactly one query. Absence is reported through
//! `Option`/affected counts, never through an error.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

pub mod folders;
pub mod notes;

pub use folders::FolderRepository;
pub use notes::{NewNote, NotePatch, NoteRepository};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(detail))
            | Some(SqlErr::UniqueConstraintViolation(detail)) => {
                StoreError::ConstraintViolation(detail)
            }
            _ => StoreError::Database(err),
        }
    }
}
