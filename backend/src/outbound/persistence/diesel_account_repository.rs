//! PostgreSQL-backed `AccountRepository` implementation using Diesel ORM.
//!
//! Balance adjustments lock the target row with `SELECT ... FOR UPDATE` and
//! write the new balance inside the same transaction, so concurrent requests
//! against one account are serialised by PostgreSQL.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{AccountRepository, AccountRepositoryError, BalanceAdjustmentOutcome};
use crate::domain::{Account, AccountId, AdjustmentRejected, BalanceAdjustment, NewAccount};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AccountRow, NewAccountRow};
use super::pool::DbPool;
use super::schema::accounts;

/// Diesel-backed implementation of the account repository port.
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a database row into a domain account.
fn row_to_account(row: AccountRow) -> Result<Account, AccountRepositoryError> {
    let id = AccountId::new(row.id).map_err(|err| AccountRepositoryError::query(err.to_string()))?;
    Ok(Account::new(id, row.account_holder_name, row.balance))
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn save(&self, account: &NewAccount) -> Result<Account, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewAccountRow {
            account_holder_name: account.holder_name(),
            balance: account.balance(),
        };

        let row = diesel::insert_into(accounts::table)
            .values(&new_row)
            .returning(AccountRow::as_returning())
            .get_result::<AccountRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_account(row)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = accounts::table
            .find(id.get())
            .select(AccountRow::as_select())
            .first::<AccountRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_account).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Account>, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AccountRow> = accounts::table
            .order(accounts::id.asc())
            .select(AccountRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_account).collect()
    }

    async fn delete_by_id(&self, id: AccountId) -> Result<bool, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(accounts::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }

    async fn adjust_balance(
        &self,
        id: AccountId,
        adjustment: BalanceAdjustment,
    ) -> Result<BalanceAdjustmentOutcome, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let outcome = conn
            .transaction::<_, DieselError, _>(|conn| {
                async move {
                    let locked = accounts::table
                        .find(id.get())
                        .select(AccountRow::as_select())
                        .for_update()
                        .first::<AccountRow>(conn)
                        .await
                        .optional()?;

                    let Some(row) = locked else {
                        return Ok(LockedAdjustment::Missing);
                    };

                    let current = Account::new(id, row.account_holder_name, row.balance);
                    let updated = match current.apply(adjustment) {
                        Ok(updated) => updated,
                        Err(rejection) => return Ok(LockedAdjustment::Rejected(rejection)),
                    };

                    let row = diesel::update(accounts::table.find(id.get()))
                        .set((
                            accounts::balance.eq(updated.balance()),
                            accounts::updated_at.eq(diesel::dsl::now),
                        ))
                        .returning(AccountRow::as_returning())
                        .get_result::<AccountRow>(conn)
                        .await?;

                    Ok(LockedAdjustment::Applied(row))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        match outcome {
            LockedAdjustment::Applied(row) => {
                row_to_account(row).map(BalanceAdjustmentOutcome::Applied)
            }
            LockedAdjustment::Rejected(rejection) => {
                Ok(BalanceAdjustmentOutcome::Rejected(rejection))
            }
            LockedAdjustment::Missing => Ok(BalanceAdjustmentOutcome::Missing),
        }
    }
}

/// Transaction result before the updated row is converted into a domain value.
enum LockedAdjustment {
    Applied(AccountRow),
    Rejected(AdjustmentRejected),
    Missing,
}
