//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Registered users with their denormalised cost total.
    users (id) {
        /// Caller-assigned numeric identifier.
        id -> Int8,
        first_name -> Text,
        last_name -> Text,
        birthday -> Date,
        marital_status -> Text,
        /// Running sum of the user's costs, refreshed after each insert.
        total -> Float8,
    }
}

diesel::table! {
    /// Recorded expenses.
    costs (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Owning user; not constrained by a foreign key.
        user_id -> Int8,
        description -> Text,
        /// One of `food`, `health`, `housing`, `sport`, `education`.
        category -> Text,
        amount -> Float8,
        incurred_at -> Timestamptz,
    }
}
