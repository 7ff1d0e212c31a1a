//! Driving port for account mutations.
//!
//! Inbound adapters call this port to open, fund, debit, and close accounts
//! without depending on repository details.

use async_trait::async_trait;

use crate::domain::{Account, AccountId, Error, NewAccount};

/// Driving port for account write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountsCommand: Send + Sync {
    /// Persist a new account and return it with its assigned id.
    ///
    /// The holder name and opening balance are stored as given, except that
    /// a NaN or infinite balance fails with
    /// [`crate::domain::ErrorCode::InvalidRequest`]. JSON cannot encode such
    /// values, so only in-process callers can hit this.
    async fn create_account(&self, account: NewAccount) -> Result<Account, Error>;

    /// Add `amount` to the balance of account `id`.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when the account
    /// does not exist and [`crate::domain::ErrorCode::InvalidRequest`] when
    /// the new balance would not be a finite number.
    async fn deposit(&self, id: AccountId, amount: f64) -> Result<Account, Error>;

    /// Subtract `amount` from the balance of account `id`.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when the account
    /// does not exist and [`crate::domain::ErrorCode::Conflict`] when the
    /// balance does not cover the amount.
    async fn withdraw(&self, id: AccountId, amount: f64) -> Result<Account, Error>;

    /// Remove account `id`.
    async fn delete_account(&self, id: AccountId) -> Result<(), Error>;
}
