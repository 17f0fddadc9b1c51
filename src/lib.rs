//! Inventory admin API: products, users and expenses over Postgres, plus the
//! summary the dashboard renders.

pub mod config;
pub mod db;
pub mod routes;
pub mod types;
pub mod utils;
