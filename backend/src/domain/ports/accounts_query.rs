//! Driving port for account reads.

use async_trait::async_trait;

use crate::domain::{Account, AccountId, Error};

/// Driving port for account read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountsQuery: Send + Sync {
    /// Fetch one account, failing with `NotFound` when absent.
    async fn get_account_by_id(&self, id: AccountId) -> Result<Account, Error>;

    /// List all accounts in store order.
    async fn get_all_accounts(&self) -> Result<Vec<Account>, Error>;
}
