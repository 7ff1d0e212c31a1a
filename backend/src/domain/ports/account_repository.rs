//! Port for account persistence.
//!
//! Balance mutations go through [`AccountRepository::adjust_balance`] so each
//! adapter can apply them atomically: the Diesel adapter locks the row for
//! the duration of a transaction, the in-memory adapter holds its mutex.

use async_trait::async_trait;

use crate::domain::{Account, AccountId, AdjustmentRejected, BalanceAdjustment, NewAccount};

use super::define_port_error;

define_port_error! {
    /// Errors raised by account repository adapters.
    pub enum AccountRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "account repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "account repository query failed: {message}",
    }
}

/// Result of an atomic balance adjustment.
#[derive(Debug, Clone, PartialEq)]
pub enum BalanceAdjustmentOutcome {
    /// The adjustment was applied and persisted.
    Applied(Account),
    /// The account exists but the adjustment was refused; nothing changed.
    Rejected(AdjustmentRejected),
    /// No account exists with the requested id.
    Missing,
}

/// Port for storing, reading, and removing accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account and return it with its assigned id.
    async fn save(&self, account: &NewAccount) -> Result<Account, AccountRepositoryError>;

    /// Find an account by id.
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountRepositoryError>;

    /// List every account, ordered by ascending id.
    async fn find_all(&self) -> Result<Vec<Account>, AccountRepositoryError>;

    /// Remove an account. Returns `false` when no record matched.
    async fn delete_by_id(&self, id: AccountId) -> Result<bool, AccountRepositoryError>;

    /// Apply a balance adjustment to one account atomically.
    async fn adjust_balance(
        &self,
        id: AccountId,
        adjustment: BalanceAdjustment,
    ) -> Result<BalanceAdjustmentOutcome, AccountRepositoryError>;
}
