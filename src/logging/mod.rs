//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels, overridable through `RUST_LOG`
//! - JSON-formatted local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use campus_coffee::logging::init_logging;
//! use campus_coffee::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(node_id = 5589879349_i64, "Importing POS");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an OSM import
///
/// # Example
///
/// ```no_run
/// use campus_coffee::log_import_start;
/// use campus_coffee::domain::NodeId;
///
/// let node_id = NodeId::new(5589879349);
/// log_import_start!(node_id);
/// ```
#[macro_export]
macro_rules! log_import_start {
    ($node_id:expr) => {
        tracing::info!(node_id = %$node_id, "Importing POS from OpenStreetMap node");
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use campus_coffee::log_error_with_context;
/// use campus_coffee::domain::CampusCoffeeError;
///
/// let error = CampusCoffeeError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
