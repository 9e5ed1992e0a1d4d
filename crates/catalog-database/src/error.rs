//! Classification of sqlx failures into [`AppError`] kinds.
//!
//! ```text
//! UNIQUE / FOREIGN KEY violation   → Conflict (including RESTRICT, 1811)
//! CHECK / NOT NULL violation       → Validation
//! PoolTimedOut / PoolClosed / Io   → ServiceUnavailable
//! RowNotFound                      → NotFound
//! anything else                    → Database
//! ```

use sqlx::error::ErrorKind as SqlxErrorKind;

use catalog_core::error::{AppError, ErrorKind};

/// Extended result code SQLite uses when an `ON DELETE RESTRICT` foreign
/// key blocks a delete. sqlx does not classify it as a foreign key error.
const SQLITE_CONSTRAINT_TRIGGER: &str = "1811";

/// Map a sqlx error into an [`AppError`], prefixing the message with
/// `context` (e.g. `"Failed to update product"`).
///
/// Database-level messages keep the SQLite extended result code so the
/// storage-specific cause stays visible in logs and responses.
pub fn map_sqlx_error(context: &str, err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let code = db_err
                .code()
                .map(|c| format!(" (code {c})"))
                .unwrap_or_default();
            let message = format!("{context}: {}{code}", db_err.message());

            let kind = match db_err.kind() {
                SqlxErrorKind::UniqueViolation | SqlxErrorKind::ForeignKeyViolation => {
                    ErrorKind::Conflict
                }
                SqlxErrorKind::CheckViolation | SqlxErrorKind::NotNullViolation => {
                    ErrorKind::Validation
                }
                _ if db_err.code().as_deref() == Some(SQLITE_CONSTRAINT_TRIGGER) => {
                    ErrorKind::Conflict
                }
                _ => ErrorKind::Database,
            };
            AppError::with_source(kind, message, err)
        }
        sqlx::Error::RowNotFound => {
            AppError::with_source(ErrorKind::NotFound, format!("{context}: no rows"), err)
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            AppError::with_source(
                ErrorKind::ServiceUnavailable,
                format!("{context}: database unavailable ({err})"),
                err,
            )
        }
        _ => AppError::with_source(ErrorKind::Database, format!("{context}: {err}"), err),
    }
}
