//! Core business logic for CampusCoffee.
//!
//! - [`import`] - OSM node validation, mapping and the POS service

pub mod import;
