//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are backed by PostgreSQL through `diesel-async` with `bb8`
//! connection pooling. Diesel row structs (`models.rs`) and table
//! definitions (`schema.rs`) stay private to this module; only domain types
//! cross the port boundary.
//!
//! # Example
//!
//! ```no_run
//! use accounts_backend::outbound::persistence::{DbPool, DieselAccountRepository, PoolConfig};
//!
//! # async fn build() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/accounts")).await?;
//! let repo = DieselAccountRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_account_repository;
mod diesel_basic_error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_account_repository::DieselAccountRepository;
pub use migrations::{
    MIGRATIONS, MigrationError, run_pending_migrations, run_pending_migrations_async,
};
pub use pool::{DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, DbPool, PoolConfig, PoolError};
