//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use super::schema::{costs, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub marital_status: String,
    pub total: f64,
}

/// Insertable struct for creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: i64,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub birthday: NaiveDate,
    pub marital_status: &'a str,
    pub total: f64,
}

/// Changeset applied when an upsert hits an existing user.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub birthday: NaiveDate,
    pub marital_status: &'a str,
    pub total: f64,
}

/// Row struct for reading from the costs table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = costs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CostRow {
    pub id: i64,
    pub user_id: i64,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub incurred_at: DateTime<Utc>,
}

/// Insertable struct for recording a cost; the id is assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = costs)]
pub(crate) struct NewCostRow<'a> {
    pub user_id: i64,
    pub description: &'a str,
    pub category: &'a str,
    pub amount: f64,
    pub incurred_at: DateTime<Utc>,
}
