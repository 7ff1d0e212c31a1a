//! Internal Diesel row structs for the `accounts` table.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain accounts before returning.

use diesel::prelude::*;

use super::schema::accounts;

/// Row read from the accounts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AccountRow {
    pub id: i64,
    pub account_holder_name: String,
    pub balance: f64,
}

/// Insertable account; the sequence supplies `id`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub(crate) struct NewAccountRow<'a> {
    pub account_holder_name: &'a str,
    pub balance: f64,
}
