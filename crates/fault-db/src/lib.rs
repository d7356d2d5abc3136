//! # fault-db
//!
//! Database layer implementing the fault report repository trait with
//! PostgreSQL via SQLx. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - The repository implementation
//!
//! The table definition lives in `schema.sql` next to this crate's
//! manifest; schema migrations are intentionally out of scope.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::PgFaultReportRepository;
