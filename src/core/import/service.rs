//! POS service
//!
//! Business operations on POS records, including the OpenStreetMap import
//! pipeline: fetch, convert, upsert.

use super::converter::convert_osm_node_to_pos;
use crate::adapters::database::PosDataService;
use crate::adapters::osm::OsmDataService;
use crate::domain::{NodeId, Pos, PosId, Result};
use crate::log_import_start;
use std::sync::Arc;

/// Service coordinating the POS store and the OSM data source
///
/// # Example
///
/// ```no_run
/// use campus_coffee::adapters::database::InMemoryPosStore;
/// use campus_coffee::adapters::osm::OsmApiClient;
/// use campus_coffee::config::OsmConfig;
/// use campus_coffee::core::import::PosService;
/// use campus_coffee::domain::NodeId;
/// use std::sync::Arc;
///
/// # async fn example() -> campus_coffee::domain::Result<()> {
/// let service = PosService::new(
///     Arc::new(InMemoryPosStore::new()),
///     Arc::new(OsmApiClient::new(&OsmConfig::default())?),
/// );
///
/// let pos = service.import_from_osm_node(NodeId::new(5589879349)).await?;
/// println!("Imported {} ({})", pos.name, pos.pos_type);
/// # Ok(())
/// # }
/// ```
pub struct PosService {
    pos_data: Arc<dyn PosDataService + Send + Sync>,
    osm_data: Arc<dyn OsmDataService + Send + Sync>,
}

impl PosService {
    pub fn new(
        pos_data: Arc<dyn PosDataService + Send + Sync>,
        osm_data: Arc<dyn OsmDataService + Send + Sync>,
    ) -> Self {
        Self { pos_data, osm_data }
    }

    /// Remove all POS records
    pub async fn clear(&self) -> Result<()> {
        tracing::warn!("Clearing all POS data");
        self.pos_data.clear().await
    }

    /// All POS records, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Pos>> {
        tracing::debug!("Retrieving all POS");
        self.pos_data.get_all().await
    }

    /// A single POS record
    ///
    /// # Errors
    ///
    /// Returns `PosNotFound` if no record has this ID.
    pub async fn get_by_id(&self, id: PosId) -> Result<Pos> {
        tracing::debug!(pos_id = %id, "Retrieving POS");
        self.pos_data.get_by_id(id).await
    }

    /// Create a POS (no ID) or update an existing one (ID set)
    ///
    /// # Errors
    ///
    /// - `PosNotFound` if an ID is given that does not exist
    /// - `DuplicateName` if the name is taken by another record
    pub async fn upsert(&self, pos: Pos) -> Result<Pos> {
        match pos.id {
            None => tracing::info!(name = %pos.name, "Creating new POS"),
            Some(id) => {
                tracing::info!(pos_id = %id, "Updating POS");
                self.pos_data.get_by_id(id).await?;
            }
        }

        let name = pos.name.clone();
        match self.pos_data.upsert(pos).await {
            Ok(stored) => {
                if let Some(id) = stored.id {
                    tracing::info!(pos_id = %id, "Successfully upserted POS");
                }
                Ok(stored)
            }
            Err(e) => {
                tracing::error!(name = %name, error = %e, "Error upserting POS");
                Err(e)
            }
        }
    }

    /// Import a POS from an OpenStreetMap node
    ///
    /// Performs exactly one fetch and at most one upsert. Nothing is stored
    /// unless the node converts into a complete POS.
    ///
    /// # Errors
    ///
    /// - `ExternalNodeNotFound` if the node cannot be fetched
    /// - `MissingRequiredFields` if the node lacks required tags
    /// - `DuplicateName` if a POS with the same name already exists
    pub async fn import_from_osm_node(&self, node_id: NodeId) -> Result<Pos> {
        log_import_start!(node_id);

        let node = self.osm_data.fetch_node(node_id).await?;
        let pos = convert_osm_node_to_pos(&node)?;
        let stored = self.upsert(pos).await?;

        tracing::info!(
            node_id = %node_id,
            name = %stored.name,
            "Successfully imported POS from OSM node"
        );

        Ok(stored)
    }
}
