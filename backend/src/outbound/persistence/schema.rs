//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Bank accounts.
    ///
    /// `id` is assigned by a `BIGSERIAL` sequence and never reused.
    accounts (id) {
        /// Primary key.
        id -> Int8,
        /// Name of the account holder.
        account_holder_name -> Varchar,
        /// Current balance.
        balance -> Float8,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last balance change.
        updated_at -> Timestamptz,
    }
}
