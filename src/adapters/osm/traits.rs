//! OpenStreetMap data service trait
//!
//! The import service depends on this trait rather than on the HTTP client,
//! so tests can substitute a canned node source.

use crate::domain::{NodeId, OsmNode, Result};
use async_trait::async_trait;

/// Source of OpenStreetMap nodes
#[async_trait]
pub trait OsmDataService: Send + Sync {
    /// Fetch a single node by ID
    ///
    /// Performs exactly one upstream lookup. No retries, no caching.
    ///
    /// # Errors
    ///
    /// Returns `ExternalNodeNotFound` when the node does not exist upstream
    /// and also when the lookup fails for any other reason (transport,
    /// timeout, unparseable payload).
    async fn fetch_node(&self, node_id: NodeId) -> Result<OsmNode>;
}
