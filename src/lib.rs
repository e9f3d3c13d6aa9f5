// CampusCoffee - Campus point-of-sale backend with OpenStreetMap import
// Copyright (c) 2025 CampusCoffee Contributors
// Licensed under the MIT License

//! # CampusCoffee
//!
//! CampusCoffee keeps a catalogue of coffee points of sale (cafés, bakeries,
//! vending machines, cafeterias) on the Heidelberg university campuses, and
//! can create entries from OpenStreetMap nodes.
//!
//! ## Overview
//!
//! An import takes an OSM node ID and runs a strictly sequential pipeline:
//!
//! 1. **Fetch** the node from the OpenStreetMap API
//! 2. **Parse** the payload into an [`domain::OsmNode`]
//! 3. **Validate and map** it to a [`domain::Pos`] (category, campus, description)
//! 4. **Upsert** the record into the configured store
//!
//! The first failing stage ends the import; nothing is stored before stage 4.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (conversion and the POS service)
//! - [`adapters`] - External integrations (OpenStreetMap, in-memory store, PostgreSQL)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use campus_coffee::adapters::database::create_pos_data_service;
//! use campus_coffee::adapters::osm::OsmApiClient;
//! use campus_coffee::config::load_config;
//! use campus_coffee::core::import::PosService;
//! use campus_coffee::domain::NodeId;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("campus-coffee.toml")?;
//!
//!     let service = PosService::new(
//!         create_pos_data_service(&config).await?,
//!         Arc::new(OsmApiClient::new(&config.osm)?),
//!     );
//!
//!     let pos = service.import_from_osm_node(NodeId::new(5589879349)).await?;
//!     println!("Imported {} on campus {:?}", pos.name, pos.campus);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`domain::Result`], whose error type
//! [`domain::CampusCoffeeError`] distinguishes the three import outcomes a
//! caller can act on:
//!
//! - `ExternalNodeNotFound` - the node could not be obtained
//! - `MissingRequiredFields` - the node lacks tags a POS needs
//! - `DuplicateName` - a POS with that name already exists
//!
//! ## Logging
//!
//! CampusCoffee uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(node_id = 5589879349_i64, "Importing POS from OpenStreetMap node");
//! warn!(postal_code = 69126, "Postal code does not map to any known campus");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
