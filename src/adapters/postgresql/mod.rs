//! PostgreSQL database integration
//!
//! Stores POS records in the `pos` table created by
//! `migrations/001_initial_schema.sql`.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::PostgreSQLAdapter;
pub use client::PostgreSQLClient;
pub use models::PostgreSQLPos;
