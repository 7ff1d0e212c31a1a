//! Domain primitives, services, and ports.
//!
//! Purpose: Define the account aggregate and the driving/driven ports used by
//! the HTTP and persistence adapters. Keep types immutable and document
//! invariants in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Account, NewAccount, AccountId: account aggregate and identity.
//! - AccountService: implementation of the account driving ports.
//! - TraceId: per-request correlation identifier.

pub mod account;
mod account_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::account::{
    Account, AccountId, AccountIdValidationError, AdjustmentRejected, BalanceAdjustment,
    BalanceOutOfRange, InsufficientBalance, NewAccount,
};
pub use self::account_service::AccountService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
