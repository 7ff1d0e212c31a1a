//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: process-local store used when no database is configured
//!
//! Adapters translate between domain types and storage representations and
//! contain no business rules beyond applying a balance adjustment atomically.

pub mod memory;
pub mod persistence;
