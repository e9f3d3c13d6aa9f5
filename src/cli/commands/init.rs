//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::cli::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "campus-coffee.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing CampusCoffee configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set database_target to 'memory' or 'postgresql'");
                println!("  3. For PostgreSQL, set CAMPUS_COFFEE_PG_URL in .env");
                println!("  4. Validate configuration: campus-coffee validate-config");
                println!("  5. Import a node: campus-coffee import 5589879349");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Starter configuration with every section and its defaults
    fn generate_config() -> String {
        r#"# CampusCoffee Configuration File

# Storage backend: memory | postgresql
# The in-memory store is empty on every start.
database_target = "memory"

[application]
# Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
log_level = "info"

[osm]
# OpenStreetMap API v0.6 base URL
base_url = "https://api.openstreetmap.org/api/0.6"

# Sent with every request, as required by the OSM usage policy
user_agent = "CampusCoffee/0.0.1 (University Project)"

# Request timeouts in seconds
timeout_seconds = 30
connect_timeout_seconds = 10

# Uncomment when database_target = "postgresql"
# [postgresql]
# connection_string = "${CAMPUS_COFFEE_PG_URL}"
# max_connections = 10
# connection_timeout_seconds = 30
# statement_timeout_seconds = 60

[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "logs"
local_rotation = "daily"  # daily | hourly
"#
        .to_string()
    }
}
