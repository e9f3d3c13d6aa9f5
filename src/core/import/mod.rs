//! OpenStreetMap import
//!
//! Turns an OSM node ID into a stored POS record.

pub mod converter;
pub mod service;

pub use converter::convert_osm_node_to_pos;
pub use service::PosService;
