//! In-process account store.
//!
//! Used when no database URL is configured and by the HTTP integration
//! suite. A single async mutex guards the map and the id sequence, so every
//! operation, including read-modify-write balance adjustments, is atomic.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::ports::{AccountRepository, AccountRepositoryError, BalanceAdjustmentOutcome};
use crate::domain::{Account, AccountId, BalanceAdjustment, NewAccount};

#[derive(Debug)]
struct Store {
    accounts: BTreeMap<AccountId, Account>,
    last_id: i64,
}

impl Store {
    /// Advance the sequence. Ids are never handed out twice, even after a
    /// delete.
    fn next_id(&mut self) -> Result<AccountId, AccountRepositoryError> {
        let next = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| AccountRepositoryError::query("account id sequence exhausted"))?;
        let id = AccountId::new(next).map_err(|err| AccountRepositoryError::query(err.to_string()))?;
        self.last_id = next;
        Ok(id)
    }
}

/// Mutex-guarded, map-backed implementation of the account repository port.
#[derive(Debug)]
pub struct InMemoryAccountRepository {
    store: Mutex<Store>,
}

impl InMemoryAccountRepository {
    /// Create an empty store whose first assigned id is `1`.
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                accounts: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn save(&self, account: &NewAccount) -> Result<Account, AccountRepositoryError> {
        let mut store = self.store.lock().await;
        let id = store.next_id()?;
        let saved = account.clone().into_account(id);
        store.accounts.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountRepositoryError> {
        Ok(self.store.lock().await.accounts.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Account>, AccountRepositoryError> {
        Ok(self.store.lock().await.accounts.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: AccountId) -> Result<bool, AccountRepositoryError> {
        Ok(self.store.lock().await.accounts.remove(&id).is_some())
    }

    async fn adjust_balance(
        &self,
        id: AccountId,
        adjustment: BalanceAdjustment,
    ) -> Result<BalanceAdjustmentOutcome, AccountRepositoryError> {
        let mut store = self.store.lock().await;
        let Some(current) = store.accounts.get_mut(&id) else {
            return Ok(BalanceAdjustmentOutcome::Missing);
        };
        match current.apply(adjustment) {
            Ok(updated) => {
                *current = updated.clone();
                Ok(BalanceAdjustmentOutcome::Applied(updated))
            }
            Err(rejection) => Ok(BalanceAdjustmentOutcome::Rejected(rejection)),
        }
    }
}
