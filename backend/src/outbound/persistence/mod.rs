//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Rows (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module. Connections come from a shared `bb8` pool through
//! `diesel-async`.
//!
//! # Example
//!
//! ```ignore
//! use cost_manager::outbound::persistence::{DbPool, DieselCostRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/costs")).await?;
//! let costs = DieselCostRepository::new(pool);
//! ```

mod diesel_cost_repository;
mod diesel_error_mapping;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_cost_repository::DieselCostRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
