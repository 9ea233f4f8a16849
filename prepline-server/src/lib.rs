//! prepline-server: HTTP API for the kitchen prep board
//!
//! Stations ("Larder", "Grill", ...) own dated prep tasks with a priority and
//! a completion flag. This crate provides:
//! - validated domain models (`models`)
//! - the PostgreSQL layer: pool, idempotent schema setup, repositories (`db`)
//! - the axum HTTP surface (`http`)

pub mod db;
pub mod http;
pub mod models;
