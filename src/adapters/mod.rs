//! External system integrations for CampusCoffee.
//!
//! - [`osm`] - OpenStreetMap API client and node parser
//! - [`database`] - POS storage abstraction (trait-based) and in-memory store
//! - [`postgresql`] - PostgreSQL implementation
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits
//! ([`osm::OsmDataService`], [`database::PosDataService`]) so the import
//! service can be tested with substitutes.
//!
//! ```rust,no_run
//! use campus_coffee::adapters::database::create_pos_data_service;
//! use campus_coffee::adapters::osm::{OsmApiClient, OsmDataService};
//! use campus_coffee::config::CampusCoffeeConfig;
//! use campus_coffee::domain::NodeId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CampusCoffeeConfig::default();
//! let osm = OsmApiClient::new(&config.osm)?;
//! let store = create_pos_data_service(&config).await?;
//!
//! let node = osm.fetch_node(NodeId::new(5589879349)).await?;
//! println!("{:?} / {} stored", node.name, store.get_all().await?.len());
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod osm;
pub mod postgresql;
