//! Account aggregate and balance arithmetic.
//!
//! Balances are plain `f64` values. A withdrawal may not exceed the current
//! balance and no adjustment may leave the balance non-finite; otherwise
//! deposits are applied as given, including negative amounts.

use std::fmt;

/// Store-assigned account identifier.
///
/// Identifiers are positive and never reused once an account is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(i64);

/// Validation errors returned by [`AccountId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountIdValidationError {
    /// Zero or negative values are never assigned by the store.
    #[error("account id must be a positive integer, got {value}")]
    NotPositive { value: i64 },
}

impl AccountId {
    /// Validate and construct an identifier.
    ///
    /// # Examples
    /// ```
    /// use accounts_backend::domain::AccountId;
    ///
    /// assert!(AccountId::new(7).is_ok());
    /// assert!(AccountId::new(0).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, AccountIdValidationError> {
        if value <= 0 {
            return Err(AccountIdValidationError::NotPositive { value });
        }
        Ok(Self(value))
    }

    /// Raw integer value as stored in the database.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = AccountIdValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for i64 {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

/// Account data supplied by a caller before the store assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    holder_name: String,
    balance: f64,
}

impl NewAccount {
    /// Build an unsaved account. No validation is applied to either field.
    pub fn new(holder_name: impl Into<String>, balance: f64) -> Self {
        Self {
            holder_name: holder_name.into(),
            balance,
        }
    }

    /// Name of the account holder.
    pub fn holder_name(&self) -> &str {
        self.holder_name.as_str()
    }

    /// Opening balance.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Attach the store-assigned identifier.
    #[must_use]
    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            holder_name: self.holder_name,
            balance: self.balance,
        }
    }
}

/// A persisted bank account.
///
/// # Examples
/// ```
/// use accounts_backend::domain::{Account, AccountId, BalanceAdjustment};
///
/// let id = AccountId::new(1).expect("valid id");
/// let account = Account::new(id, "Alice", 100.0);
/// let updated = account
///     .apply(BalanceAdjustment::Deposit(50.0))
///     .expect("deposits always apply");
/// assert_eq!(updated.balance(), 150.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    balance: f64,
}

impl Account {
    /// Rehydrate an account from stored values.
    pub fn new(id: AccountId, holder_name: impl Into<String>, balance: f64) -> Self {
        Self {
            id,
            holder_name: holder_name.into(),
            balance,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Name of the account holder.
    pub fn holder_name(&self) -> &str {
        self.holder_name.as_str()
    }

    /// Current balance.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Return the account with `adjustment` applied to its balance.
    ///
    /// Withdrawals larger than the current balance, and adjustments whose
    /// result overflows `f64`, are rejected and leave the account untouched.
    pub fn apply(&self, adjustment: BalanceAdjustment) -> Result<Self, AdjustmentRejected> {
        let balance = match adjustment {
            BalanceAdjustment::Deposit(amount) => self.balance + amount,
            BalanceAdjustment::Withdrawal(amount) => {
                if self.balance < amount {
                    return Err(InsufficientBalance {
                        balance: self.balance,
                        requested: amount,
                    }
                    .into());
                }
                self.balance - amount
            }
        };
        if !balance.is_finite() {
            return Err(BalanceOutOfRange {
                balance: self.balance,
                amount: adjustment.amount(),
            }
            .into());
        }
        Ok(Self {
            balance,
            ..self.clone()
        })
    }
}

/// A single balance mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceAdjustment {
    /// Add the amount to the balance.
    Deposit(f64),
    /// Subtract the amount from the balance, if it is covered.
    Withdrawal(f64),
}

impl BalanceAdjustment {
    /// Amount carried by the adjustment.
    pub fn amount(self) -> f64 {
        match self {
            Self::Deposit(amount) | Self::Withdrawal(amount) => amount,
        }
    }

    /// Lower-case name used in log fields and messages.
    pub fn kind(self) -> &'static str {
        match self {
            Self::Deposit(_) => "deposit",
            Self::Withdrawal(_) => "withdrawal",
        }
    }
}

/// Raised when a withdrawal exceeds the available balance.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("insufficient balance: {balance} available, {requested} requested")]
pub struct InsufficientBalance {
    /// Balance at the time of the attempt.
    pub balance: f64,
    /// Amount the caller tried to withdraw.
    pub requested: f64,
}

/// Raised when an adjustment would leave the balance infinite or NaN.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("adjusting a balance of {balance} by {amount} leaves the representable range")]
pub struct BalanceOutOfRange {
    /// Balance at the time of the attempt.
    pub balance: f64,
    /// Amount carried by the rejected adjustment.
    pub amount: f64,
}

/// Reason [`Account::apply`] refused an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum AdjustmentRejected {
    /// The withdrawal is not covered by the balance.
    #[error(transparent)]
    InsufficientBalance(#[from] InsufficientBalance),
    /// The resulting balance would not be a finite number.
    #[error(transparent)]
    OutOfRange(#[from] BalanceOutOfRange),
}
