//! Configuration management for CampusCoffee.
//!
//! CampusCoffee reads a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CAMPUS_COFFEE_<SECTION>_<KEY>` environment overrides
//! - Default values for every optional setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use campus_coffee::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("campus-coffee.toml")?;
//! println!("OSM API: {}", config.osm.base_url);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! database_target = "postgresql"
//!
//! [application]
//! log_level = "info"
//!
//! [osm]
//! base_url = "https://api.openstreetmap.org/api/0.6"
//! user_agent = "CampusCoffee/0.0.1 (University Project)"
//! timeout_seconds = 30
//!
//! [postgresql]
//! connection_string = "${CAMPUS_COFFEE_PG_URL}"
//! max_connections = 10
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, CampusCoffeeConfig, DatabaseTarget, LoggingConfig, OsmConfig,
    PostgreSQLConfig,
};
pub use secret::{redact_credentials, secret_string, SecretString, SecretValue};
