//! OpenStreetMap payload parser
//!
//! Turns the raw body of a node lookup into an [`OsmNode`], independent of
//! how the bytes were obtained.

use super::models::OsmApiResponse;
use crate::domain::{CampusCoffeeError, NodeId, OsmNode, Result};

pub const TAG_NAME: &str = "name";
pub const TAG_AMENITY: &str = "amenity";
pub const TAG_STREET: &str = "addr:street";
pub const TAG_HOUSE_NUMBER: &str = "addr:housenumber";
pub const TAG_POSTCODE: &str = "addr:postcode";
pub const TAG_CITY: &str = "addr:city";
pub const TAG_WEBSITE: &str = "website";
pub const TAG_PHONE: &str = "phone";
pub const TAG_OPENING_HOURS: &str = "opening_hours";

/// Parse an OSM API node payload
///
/// The first element of type `node` is used. Coordinates that are missing or
/// not numeric come back as `None`. Only the known tags are extracted, by
/// exact key; everything else is ignored.
///
/// # Errors
///
/// Returns `ExternalNodeNotFound` if the payload is not valid JSON of the
/// expected shape or contains no node element.
pub fn parse_node(node_id: NodeId, payload: &[u8]) -> Result<OsmNode> {
    let response: OsmApiResponse = serde_json::from_slice(payload).map_err(|e| {
        tracing::debug!(node_id = %node_id, error = %e, "OSM payload is not a valid node document");
        CampusCoffeeError::ExternalNodeNotFound(node_id)
    })?;

    let element = response
        .elements
        .into_iter()
        .find(|element| element.is_node())
        .ok_or(CampusCoffeeError::ExternalNodeNotFound(node_id))?;

    let latitude = element.latitude();
    let longitude = element.longitude();
    let mut tags = element.into_tags();

    tracing::debug!(
        node_id = %node_id,
        tag_count = tags.len(),
        "Extracted tags from OSM node"
    );

    Ok(OsmNode {
        node_id,
        latitude,
        longitude,
        name: tags.remove(TAG_NAME),
        amenity: tags.remove(TAG_AMENITY),
        street: tags.remove(TAG_STREET),
        house_number: tags.remove(TAG_HOUSE_NUMBER),
        postal_code: tags.remove(TAG_POSTCODE),
        city: tags.remove(TAG_CITY),
        website: tags.remove(TAG_WEBSITE),
        phone: tags.remove(TAG_PHONE),
        opening_hours: tags.remove(TAG_OPENING_HOURS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADA_PAYLOAD: &str = r#"{
        "version": "0.6",
        "generator": "openstreetmap-cgimap",
        "elements": [
            {
                "type": "node",
                "id": 5589879349,
                "lat": 49.4122362,
                "lon": 8.7077883,
                "timestamp": "2024-05-12T10:11:12Z",
                "tags": {
                    "addr:city": "Heidelberg",
                    "addr:housenumber": "21",
                    "addr:postcode": "69117",
                    "addr:street": "Untere Straße",
                    "amenity": "cafe",
                    "name": "Rada Coffee & Rösterei",
                    "opening_hours": "Mo-Fr 08:00-18:00",
                    "website": "https://rada-roesterei.com/",
                    "phone": "+49 6221 1234",
                    "cuisine": "coffee_shop",
                    "wheelchair": "yes"
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_full_node() {
        let node = parse_node(NodeId::new(5589879349), RADA_PAYLOAD.as_bytes()).unwrap();

        assert_eq!(node.node_id, NodeId::new(5589879349));
        assert_eq!(node.latitude, Some(49.4122362));
        assert_eq!(node.longitude, Some(8.7077883));
        assert_eq!(node.name.as_deref(), Some("Rada Coffee & Rösterei"));
        assert_eq!(node.amenity.as_deref(), Some("cafe"));
        assert_eq!(node.street.as_deref(), Some("Untere Straße"));
        assert_eq!(node.house_number.as_deref(), Some("21"));
        assert_eq!(node.postal_code.as_deref(), Some("69117"));
        assert_eq!(node.city.as_deref(), Some("Heidelberg"));
        assert_eq!(node.website.as_deref(), Some("https://rada-roesterei.com/"));
        assert_eq!(node.phone.as_deref(), Some("+49 6221 1234"));
        assert_eq!(node.opening_hours.as_deref(), Some("Mo-Fr 08:00-18:00"));
    }

    #[test]
    fn test_parse_node_without_tags_or_coordinates() {
        let payload = br#"{"elements":[{"type":"node","id":7}]}"#;
        let node = parse_node(NodeId::new(7), payload).unwrap();
        assert_eq!(node, OsmNode::new(NodeId::new(7)));
    }

    #[test]
    fn test_parse_non_numeric_coordinates_become_absent() {
        let payload = br#"{"elements":[{"type":"node","lat":"somewhere","lon":"8.5","tags":{}}]}"#;
        let node = parse_node(NodeId::new(3), payload).unwrap();
        assert!(node.latitude.is_none());
        assert_eq!(node.longitude, Some(8.5));
    }

    #[test]
    fn test_parse_ignores_unknown_tags_and_keys_match_exactly() {
        let payload =
            br#"{"elements":[{"type":"node","tags":{"Name":"upper","name:de":"localized","brand":"x"}}]}"#;
        let node = parse_node(NodeId::new(4), payload).unwrap();
        assert!(node.name.is_none());
    }

    #[test]
    fn test_parse_tolerates_null_tags() {
        let payload = br#"{"elements":[{"type":"node","lat":1.0,"lon":2.0,"tags":null}]}"#;
        let node = parse_node(NodeId::new(1), payload).unwrap();
        assert_eq!(node.latitude, Some(1.0));
        assert!(node.name.is_none());
    }

    #[test]
    fn test_parse_skips_non_string_tags() {
        let payload = r#"{"elements":[{"type":"node","tags":{
            "name":"Marstall Café","amenity":"cafe","capacity":120,"building:levels":[1,2]
        }}]}"#.as_bytes();
        let node = parse_node(NodeId::new(2), payload).unwrap();
        assert_eq!(node.name.as_deref(), Some("Marstall Café"));
        assert_eq!(node.amenity.as_deref(), Some("cafe"));
    }

    #[test]
    fn test_parse_ignores_element_id_shape() {
        let payload =
            br#"{"elements":[{"type":"node","id":99999999999999999999999,"tags":{"name":"Big"}}]}"#;
        let node = parse_node(NodeId::new(3), payload).unwrap();
        assert_eq!(node.node_id, NodeId::new(3));
        assert_eq!(node.name.as_deref(), Some("Big"));
    }

    #[test]
    fn test_parse_uses_first_node_element() {
        let payload = br#"{"elements":[
            {"type":"way","id":1,"tags":{"name":"Way"}},
            {"type":"node","id":2,"tags":{"name":"First node"}},
            {"type":"node","id":3,"tags":{"name":"Second node"}}
        ]}"#;
        let node = parse_node(NodeId::new(2), payload).unwrap();
        assert_eq!(node.name.as_deref(), Some("First node"));
    }

    #[test]
    fn test_parse_without_node_element_is_not_found() {
        let payload = br#"{"elements":[]}"#;
        let result = parse_node(NodeId::new(9), payload);
        assert!(matches!(
            result,
            Err(CampusCoffeeError::ExternalNodeNotFound(id)) if id == NodeId::new(9)
        ));
    }

    #[test]
    fn test_parse_garbage_is_not_found() {
        let result = parse_node(NodeId::new(10), b"<osm><node id=\"10\"/></osm>");
        assert!(matches!(result, Err(CampusCoffeeError::ExternalNodeNotFound(_))));
    }
}
