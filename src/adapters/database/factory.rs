//! POS store factory
//!
//! Creates the storage backend selected by `database_target`.

use crate::adapters::database::memory::InMemoryPosStore;
use crate::adapters::database::traits::PosDataService;
use crate::adapters::postgresql::adapter::PostgreSQLAdapter;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::config::schema::{CampusCoffeeConfig, DatabaseTarget};
use crate::domain::{CampusCoffeeError, Result};
use std::sync::Arc;

/// Create a POS store based on the configuration
///
/// For PostgreSQL the connection is tested and the schema is created if it
/// does not exist yet.
///
/// # Errors
///
/// Returns a configuration error if `database_target = "postgresql"` has no
/// `[postgresql]` section, or a database error if the server is unreachable.
pub async fn create_pos_data_service(
    config: &CampusCoffeeConfig,
) -> Result<Arc<dyn PosDataService + Send + Sync>> {
    match config.database_target {
        DatabaseTarget::Memory => {
            tracing::info!("Creating in-memory POS store");
            Ok(Arc::new(InMemoryPosStore::new()) as Arc<dyn PosDataService + Send + Sync>)
        }
        DatabaseTarget::PostgreSQL => {
            let pg_config = config.postgresql.as_ref().ok_or_else(|| {
                CampusCoffeeError::Configuration(
                    "database_target is 'postgresql' but [postgresql] section is missing"
                        .to_string(),
                )
            })?;

            tracing::info!("Creating PostgreSQL POS store");
            let client = PostgreSQLClient::new(pg_config.clone())?;
            client.test_connection().await?;
            client.ensure_schema().await?;

            Ok(Arc::new(PostgreSQLAdapter::new(client)) as Arc<dyn PosDataService + Send + Sync>)
        }
    }
}
