//! Account domain service.
//!
//! Implements the account driving ports on top of an [`AccountRepository`].
//! Balance changes are delegated to the repository as a single atomic
//! adjustment so concurrent deposits and withdrawals on one account never
//! lose an update.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    AccountRepository, AccountRepositoryError, AccountsCommand, AccountsQuery,
    BalanceAdjustmentOutcome,
};
use crate::domain::{
    Account, AccountId, AdjustmentRejected, BalanceAdjustment, Error, NewAccount,
};

/// Message used whenever an account lookup misses.
const ACCOUNT_NOT_FOUND: &str = "Account Does Not Exist";
/// Client-facing message for connection failures; the cause is only logged.
const ACCOUNT_STORE_UNAVAILABLE: &str = "Account store is temporarily unavailable";

fn map_repository_error(error: AccountRepositoryError) -> Error {
    match error {
        AccountRepositoryError::Connection { message } => {
            warn!(%message, "account repository connection failed");
            Error::service_unavailable(ACCOUNT_STORE_UNAVAILABLE)
        }
        AccountRepositoryError::Query { message } => {
            Error::internal(format!("account repository error: {message}"))
        }
    }
}

fn not_found(id: AccountId) -> Error {
    Error::not_found(ACCOUNT_NOT_FOUND).with_details(json!({ "id": id.get() }))
}

fn ensure_finite(field: &str, value: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_request(format!("{field} must be a finite number"))
            .with_details(json!({ "field": field })))
    }
}

/// Account service implementing [`AccountsCommand`] and [`AccountsQuery`].
#[derive(Clone)]
pub struct AccountService<R> {
    account_repo: Arc<R>,
}

impl<R> AccountService<R> {
    /// Create a new service backed by the account repository.
    pub fn new(account_repo: Arc<R>) -> Self {
        Self { account_repo }
    }
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    async fn adjust(&self, id: AccountId, adjustment: BalanceAdjustment) -> Result<Account, Error> {
        ensure_finite("amount", adjustment.amount())?;

        let outcome = self
            .account_repo
            .adjust_balance(id, adjustment)
            .await
            .map_err(map_repository_error)?;

        match outcome {
            BalanceAdjustmentOutcome::Applied(account) => {
                info!(
                    account_id = %id,
                    kind = adjustment.kind(),
                    amount = adjustment.amount(),
                    balance = account.balance(),
                    "balance adjusted"
                );
                Ok(account)
            }
            BalanceAdjustmentOutcome::Rejected(AdjustmentRejected::InsufficientBalance(
                shortfall,
            )) => {
                debug!(account_id = %id, %shortfall, "withdrawal rejected");
                Err(Error::conflict("Insufficient Balance.").with_details(json!({
                    "code": "insufficient_balance",
                    "balance": shortfall.balance,
                    "amount": shortfall.requested,
                })))
            }
            BalanceAdjustmentOutcome::Rejected(AdjustmentRejected::OutOfRange(overflow)) => {
                debug!(account_id = %id, %overflow, "adjustment rejected");
                Err(
                    Error::invalid_request("amount would take the balance out of range")
                        .with_details(json!({
                            "code": "balance_out_of_range",
                            "field": "amount",
                            "amount": overflow.amount,
                        })),
                )
            }
            BalanceAdjustmentOutcome::Missing => Err(not_found(id)),
        }
    }
}

#[async_trait]
impl<R> AccountsCommand for AccountService<R>
where
    R: AccountRepository,
{
    async fn create_account(&self, account: NewAccount) -> Result<Account, Error> {
        ensure_finite("balance", account.balance())?;

        let saved = self
            .account_repo
            .save(&account)
            .await
            .map_err(map_repository_error)?;
        info!(account_id = %saved.id(), "account created");
        Ok(saved)
    }

    async fn deposit(&self, id: AccountId, amount: f64) -> Result<Account, Error> {
        self.adjust(id, BalanceAdjustment::Deposit(amount)).await
    }

    async fn withdraw(&self, id: AccountId, amount: f64) -> Result<Account, Error> {
        self.adjust(id, BalanceAdjustment::Withdrawal(amount)).await
    }

    async fn delete_account(&self, id: AccountId) -> Result<(), Error> {
        let removed = self
            .account_repo
            .delete_by_id(id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(not_found(id));
        }
        info!(account_id = %id, "account deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> AccountsQuery for AccountService<R>
where
    R: AccountRepository,
{
    async fn get_account_by_id(&self, id: AccountId) -> Result<Account, Error> {
        debug!(account_id = %id, "loading account");
        self.account_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    async fn get_all_accounts(&self) -> Result<Vec<Account>, Error> {
        let accounts = self
            .account_repo
            .find_all()
            .await
            .map_err(map_repository_error)?;
        debug!(count = accounts.len(), "listed accounts");
        Ok(accounts)
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
