//! List command implementation

use super::print_pos;
use crate::adapters::database::create_pos_data_service;
use crate::cli::{exit_code_for, EXIT_CONFIG, EXIT_OK};
use crate::config::{load_config, DatabaseTarget};
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print records as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        if config.database_target == DatabaseTarget::Memory {
            tracing::warn!("Listing from the in-memory store, which starts empty on every run");
        }

        let store = match create_pos_data_service(&config).await {
            Ok(store) => store,
            Err(e) => {
                println!("❌ Failed to open POS store");
                println!("   Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        let records = match store.get_all().await {
            Ok(records) => records,
            Err(e) => {
                println!("❌ Failed to list POS");
                println!("   Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(EXIT_OK);
        }

        println!("☕ {} POS stored", records.len());
        println!();
        for pos in &records {
            print_pos(pos);
            println!();
        }

        Ok(EXIT_OK)
    }
}
