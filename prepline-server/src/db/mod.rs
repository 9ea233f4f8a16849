//! Database layer - connection pool, schema setup, and repositories
//!
//! # Design Principles
//!
//! - Connection pool with a small explicit cap - no `Arc<Mutex<Connection>>`
//! - List operations JOIN the station name - no N+1 queries
//! - Rely on DB constraints (UNIQUE, FK, CHECK) and handle conflicts -
//!   no check-then-insert
//! - Every mutation is a single row-level statement; nothing spans rows

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::connect;
pub use repos::{DbError, Station, StationRepo, Task, TaskRepo};
