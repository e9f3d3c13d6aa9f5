//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{CampusCoffeeConfig, DatabaseTarget, PostgreSQLConfig};
use super::secret::secret_string;
use crate::domain::errors::CampusCoffeeError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CampusCoffeeConfig
/// 4. Applies environment variable overrides (CAMPUS_COFFEE_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use campus_coffee::config::loader::load_config;
///
/// let config = load_config("campus-coffee.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CampusCoffeeConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CampusCoffeeError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CampusCoffeeError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: CampusCoffeeConfig = toml::from_str(&contents)
        .map_err(|e| CampusCoffeeError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        CampusCoffeeError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched. Every unset variable is reported in a
/// single error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| CampusCoffeeError::Configuration(format!("Invalid pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&cap[0], &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(CampusCoffeeError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using the CAMPUS_COFFEE_* prefix
///
/// Environment variables follow the pattern: CAMPUS_COFFEE_<SECTION>_<KEY>
/// For example: CAMPUS_COFFEE_OSM_BASE_URL, CAMPUS_COFFEE_DATABASE_TARGET
fn apply_env_overrides(config: &mut CampusCoffeeConfig) -> Result<()> {
    if let Ok(val) = std::env::var("CAMPUS_COFFEE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // OSM overrides
    if let Ok(val) = std::env::var("CAMPUS_COFFEE_OSM_BASE_URL") {
        config.osm.base_url = val;
    }
    if let Ok(val) = std::env::var("CAMPUS_COFFEE_OSM_USER_AGENT") {
        config.osm.user_agent = val;
    }
    if let Ok(val) = std::env::var("CAMPUS_COFFEE_OSM_TIMEOUT_SECONDS") {
        config.osm.timeout_seconds =
            parse_override("CAMPUS_COFFEE_OSM_TIMEOUT_SECONDS", &val, "an integer")?;
    }

    // Database overrides
    if let Ok(val) = std::env::var("CAMPUS_COFFEE_DATABASE_TARGET") {
        config.database_target = match val.to_lowercase().as_str() {
            "memory" => DatabaseTarget::Memory,
            "postgresql" => DatabaseTarget::PostgreSQL,
            other => {
                return Err(CampusCoffeeError::Configuration(format!(
                    "Invalid CAMPUS_COFFEE_DATABASE_TARGET '{other}'. Must be one of: memory, postgresql"
                )))
            }
        };
    }
    if let Ok(val) = std::env::var("CAMPUS_COFFEE_POSTGRESQL_CONNECTION_STRING") {
        match config.postgresql {
            Some(ref mut pg_config) => pg_config.connection_string = secret_string(val),
            None => {
                config.postgresql = Some(PostgreSQLConfig {
                    connection_string: secret_string(val),
                    max_connections: 10,
                    connection_timeout_seconds: 30,
                    statement_timeout_seconds: 60,
                })
            }
        }
    }
    if let Some(ref mut pg_config) = config.postgresql {
        if let Ok(val) = std::env::var("CAMPUS_COFFEE_POSTGRESQL_MAX_CONNECTIONS") {
            pg_config.max_connections =
                parse_override("CAMPUS_COFFEE_POSTGRESQL_MAX_CONNECTIONS", &val, "an integer")?;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CAMPUS_COFFEE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled =
            parse_override("CAMPUS_COFFEE_LOGGING_LOCAL_ENABLED", &val, "true or false")?;
    }
    if let Ok(val) = std::env::var("CAMPUS_COFFEE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

fn parse_override<T: std::str::FromStr>(name: &str, val: &str, expected: &str) -> Result<T> {
    val.trim().parse().map_err(|_| {
        CampusCoffeeError::Configuration(format!("{name} must be {expected}, got '{val}'"))
    })
}
