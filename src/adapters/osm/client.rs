//! OpenStreetMap API client
//!
//! Fetches a single node from the public OSM API v0.6 over HTTPS.

use super::parser::parse_node;
use super::traits::OsmDataService;
use crate::config::OsmConfig;
use crate::domain::{CampusCoffeeError, NodeId, OsmNode, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Duration;

/// Why a node lookup did not yield a payload
enum FetchFailure {
    /// Upstream says the node does not exist (404) or was deleted (410)
    Absent(StatusCode),
    /// Any other non-success status
    Status(StatusCode),
    /// Connection, TLS, timeout or body read failure
    Transport(reqwest::Error),
}

/// HTTP client for the OpenStreetMap API
///
/// Requests the JSON representation of a node, `GET {base_url}/node/{id}.json`.
///
/// # Example
///
/// ```no_run
/// use campus_coffee::adapters::osm::{OsmApiClient, OsmDataService};
/// use campus_coffee::config::OsmConfig;
/// use campus_coffee::domain::NodeId;
///
/// # async fn example() -> campus_coffee::domain::Result<()> {
/// let client = OsmApiClient::new(&OsmConfig::default())?;
/// let node = client.fetch_node(NodeId::new(5589879349)).await?;
/// println!("{:?}", node.name);
/// # Ok(())
/// # }
/// ```
pub struct OsmApiClient {
    base_url: String,
    client: Client,
}

impl OsmApiClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &OsmConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| {
                CampusCoffeeError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn node_url(&self, node_id: NodeId) -> String {
        format!("{}/node/{}.json", self.base_url, node_id)
    }

    async fn download(&self, node_id: NodeId) -> std::result::Result<Vec<u8>, FetchFailure> {
        let url = self.node_url(node_id);
        tracing::debug!(url = %url, "Requesting OSM node");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchFailure::Transport)?;

        let status = response.status();
        match status {
            s if s.is_success() => {}
            StatusCode::NOT_FOUND | StatusCode::GONE => return Err(FetchFailure::Absent(status)),
            _ => return Err(FetchFailure::Status(status)),
        }

        let body = response.bytes().await.map_err(FetchFailure::Transport)?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl OsmDataService for OsmApiClient {
    async fn fetch_node(&self, node_id: NodeId) -> Result<OsmNode> {
        tracing::info!(node_id = %node_id, "Fetching OSM node from OpenStreetMap API");

        let payload = match self.download(node_id).await {
            Ok(payload) => payload,
            Err(FetchFailure::Absent(status)) => {
                tracing::warn!(
                    node_id = %node_id,
                    status = status.as_u16(),
                    "OSM node not found"
                );
                return Err(CampusCoffeeError::ExternalNodeNotFound(node_id));
            }
            Err(FetchFailure::Status(status)) => {
                tracing::error!(
                    node_id = %node_id,
                    status = status.as_u16(),
                    "OSM API returned an unexpected status"
                );
                return Err(CampusCoffeeError::ExternalNodeNotFound(node_id));
            }
            Err(FetchFailure::Transport(e)) => {
                tracing::error!(
                    node_id = %node_id,
                    timeout = e.is_timeout(),
                    error = %e,
                    "Error fetching OSM node"
                );
                return Err(CampusCoffeeError::ExternalNodeNotFound(node_id));
            }
        };

        let node = parse_node(node_id, &payload).map_err(|e| {
            tracing::error!(node_id = %node_id, "OSM API response could not be parsed");
            e
        })?;

        tracing::info!(
            node_id = %node_id,
            name = node.name.as_deref().unwrap_or("<unnamed>"),
            "Successfully fetched OSM node"
        );

        Ok(node)
    }
}
