//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for CampusCoffee using clap.

pub mod commands;

use crate::domain::{CampusCoffeeError, ErrorCategory};
use clap::{Parser, Subcommand};

/// Exit code for a successful run
pub const EXIT_OK: i32 = 0;
/// Exit code for configuration problems
pub const EXIT_CONFIG: i32 = 2;
/// Exit code when a node or record does not exist
pub const EXIT_NOT_FOUND: i32 = 3;
/// Exit code when input cannot become a valid record
pub const EXIT_BAD_INPUT: i32 = 4;
/// Exit code for fatal errors
pub const EXIT_FATAL: i32 = 5;
/// Exit code when a record with the same name already exists
pub const EXIT_CONFLICT: i32 = 6;

/// CampusCoffee - campus point-of-sale backend with OpenStreetMap import
#[derive(Parser, Debug)]
#[command(name = "campus-coffee")]
#[command(version, about, long_about = None)]
#[command(author = "CampusCoffee Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "campus-coffee.toml",
        env = "CAMPUS_COFFEE_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CAMPUS_COFFEE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a POS from an OpenStreetMap node
    Import(commands::import::ImportArgs),

    /// List all stored POS
    List(commands::list::ListArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

/// Process exit code for a failed operation
pub fn exit_code_for(error: &CampusCoffeeError) -> i32 {
    if matches!(error, CampusCoffeeError::Configuration(_)) {
        return EXIT_CONFIG;
    }

    match error.category() {
        ErrorCategory::NotFound => EXIT_NOT_FOUND,
        ErrorCategory::BadInput => EXIT_BAD_INPUT,
        ErrorCategory::Conflict => EXIT_CONFLICT,
        ErrorCategory::Internal => EXIT_FATAL,
    }
}
