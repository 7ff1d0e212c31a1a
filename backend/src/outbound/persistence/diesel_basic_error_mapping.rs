//! Translation of pool and Diesel failures into account repository errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::AccountRepositoryError;

use super::pool::PoolError;

/// Every pool failure means the database could not be reached.
pub(crate) fn map_pool_error(error: PoolError) -> AccountRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    AccountRepositoryError::connection(message)
}

/// Map Diesel failures onto connection or query errors.
///
/// Driver messages are logged at debug level and replaced with fixed text so
/// SQL fragments never reach API responses.
pub(crate) fn map_diesel_error(error: DieselError) -> AccountRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => AccountRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => AccountRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            AccountRepositoryError::connection("database connection error")
        }
        _ => AccountRepositoryError::query("database error"),
    }
}
