//! Storage abstraction layer
//!
//! A trait-based gateway for POS records, letting CampusCoffee run against
//! an in-memory store or PostgreSQL.

pub mod factory;
pub mod memory;
pub mod traits;

pub use factory::create_pos_data_service;
pub use memory::InMemoryPosStore;
pub use traits::PosDataService;
