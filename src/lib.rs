pub mod auth;
pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Label rendered when a referenced record (category, table, waiter) cannot
/// be resolved.
pub const UNKNOWN_LABEL: &str = "Unknown";
