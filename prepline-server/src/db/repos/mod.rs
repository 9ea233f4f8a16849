//! Repository implementations for database access
//!
//! One repository per resource. Each follows the same patterns:
//! - borrows the pool, constructed per call site
//! - parameterized queries only; dynamic clauses use numbered placeholders
//! - conflicts handled via ON CONFLICT where the operation is a seed path

pub mod stations;
pub mod tasks;

pub use stations::{Station, StationRepo};
pub use tasks::{Task, TaskRepo};

/// Database error type shared by the repositories.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// A partial update with no fields present. Caller error; storage is
    /// never touched.
    #[error("no fields to update")]
    EmptyUpdate,
}
