//! OpenStreetMap node domain model
//!
//! An `OsmNode` is the structured form of a single node fetched from the
//! OpenStreetMap API, before it is validated and turned into a [`Pos`].
//!
//! [`Pos`]: super::pos::Pos

use super::ids::NodeId;
use serde::{Deserialize, Serialize};

/// An OpenStreetMap node with the tags relevant for a point of sale
///
/// Every attribute except `node_id` may be absent. Absence is a valid state
/// here; only the converter decides whether the node is complete enough.
///
/// # Examples
///
/// ```
/// use campus_coffee::domain::{NodeId, OsmNode};
///
/// let node = OsmNode {
///     name: Some("Rada Coffee & Rösterei".to_string()),
///     amenity: Some("cafe".to_string()),
///     ..OsmNode::new(NodeId::new(5589879349))
/// };
/// assert!(node.street.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmNode {
    /// The OpenStreetMap node ID
    pub node_id: NodeId,

    /// Latitude (WGS84)
    pub latitude: Option<f64>,

    /// Longitude (WGS84)
    pub longitude: Option<f64>,

    /// `name` tag
    pub name: Option<String>,

    /// `amenity` tag (raw category, e.g. "cafe", "vending_machine")
    pub amenity: Option<String>,

    /// `addr:street` tag
    pub street: Option<String>,

    /// `addr:housenumber` tag
    pub house_number: Option<String>,

    /// `addr:postcode` tag
    pub postal_code: Option<String>,

    /// `addr:city` tag
    pub city: Option<String>,

    /// `website` tag
    pub website: Option<String>,

    /// `phone` tag
    pub phone: Option<String>,

    /// `opening_hours` tag
    pub opening_hours: Option<String>,
}

impl OsmNode {
    /// Creates a node with no coordinates and no tags
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id,
            latitude: None,
            longitude: None,
            name: None,
            amenity: None,
            street: None,
            house_number: None,
            postal_code: None,
            city: None,
            website: None,
            phone: None,
            opening_hours: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_empty() {
        let node = OsmNode::new(NodeId::new(1));
        assert_eq!(node.node_id, NodeId::new(1));
        assert!(node.latitude.is_none());
        assert!(node.name.is_none());
        assert!(node.opening_hours.is_none());
    }
}
