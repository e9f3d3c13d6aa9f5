//! Import command implementation
//!
//! Fetches one OpenStreetMap node, converts it and stores the resulting POS.

use super::print_pos;
use crate::adapters::database::create_pos_data_service;
use crate::adapters::osm::OsmApiClient;
use crate::cli::{exit_code_for, EXIT_CONFIG, EXIT_OK};
use crate::config::load_config;
use crate::core::import::PosService;
use crate::domain::NodeId;
use crate::log_error_with_context;
use clap::Args;
use std::sync::Arc;

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// OpenStreetMap node ID
    pub node_id: NodeId,

    /// Print the stored POS as JSON
    #[arg(long)]
    pub json: bool,
}

impl ImportArgs {
    /// Execute the import command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(node_id = %self.node_id, "Starting import command");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let osm = match OsmApiClient::new(&config.osm) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                println!("❌ Failed to create OpenStreetMap client");
                println!("   Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        let store = match create_pos_data_service(&config).await {
            Ok(store) => store,
            Err(e) => {
                println!("❌ Failed to open POS store");
                println!("   Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        let service = PosService::new(store, osm);

        println!("📥 Importing OpenStreetMap node {}", self.node_id);
        println!();

        match service.import_from_osm_node(self.node_id).await {
            Ok(pos) => {
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&pos)?);
                } else {
                    println!("✅ Imported POS");
                    print_pos(&pos);
                    println!();
                }
                Ok(EXIT_OK)
            }
            Err(e) => {
                log_error_with_context!(&e, "Import from OpenStreetMap failed");
                println!("❌ Import failed");
                println!("   Error: {e}");
                Ok(exit_code_for(&e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_config_is_config_error() {
        let args = ImportArgs {
            node_id: NodeId::new(1),
            json: false,
        };
        let code = args
            .execute("/nonexistent/campus-coffee.toml")
            .await
            .unwrap();
        assert_eq!(code, EXIT_CONFIG);
    }
}
