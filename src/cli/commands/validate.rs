//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the CampusCoffee configuration file.

use crate::cli::{EXIT_CONFIG, EXIT_OK};
use crate::config::schema::DatabaseTarget;
use crate::config::{load_config, redact_credentials};
use clap::Args;
use secrecy::ExposeSecret;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(EXIT_CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  OSM API: {}", config.osm.base_url);
        println!("  OSM User-Agent: {}", config.osm.user_agent);
        println!("  OSM Timeout: {}s", config.osm.timeout_seconds);

        match config.database_target {
            DatabaseTarget::Memory => {
                println!("  Database Target: in-memory");
            }
            DatabaseTarget::PostgreSQL => {
                if let Some(ref pg_config) = config.postgresql {
                    println!("  Database Target: PostgreSQL");
                    println!(
                        "  PostgreSQL Connection: {}",
                        redact_credentials(pg_config.connection_string.expose_secret().as_ref())
                    );
                    println!("  Max Connections: {}", pg_config.max_connections);
                }
            }
        }

        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        }
        println!();

        Ok(EXIT_OK)
    }
}
