//! OpenStreetMap adapter
//!
//! Retrieves nodes from the OpenStreetMap API and parses them into
//! [`OsmNode`](crate::domain::OsmNode) values.

pub mod client;
pub mod models;
pub mod parser;
pub mod traits;

pub use client::OsmApiClient;
pub use parser::parse_node;
pub use traits::OsmDataService;
