//! OSM node to POS conversion
//!
//! Validates that a fetched [`OsmNode`] carries every attribute a POS needs,
//! then maps its raw tags onto the POS model: amenity to [`PosType`], postal
//! code to [`CampusType`], and a synthesized description.

use crate::adapters::osm::parser::{
    TAG_AMENITY, TAG_CITY, TAG_HOUSE_NUMBER, TAG_NAME, TAG_POSTCODE, TAG_STREET,
};
use crate::domain::{CampusCoffeeError, CampusType, NodeId, OsmNode, Pos, PosType, Result};

/// Marker appended to the missing-field list when the postal code is not a number
pub const INVALID_POSTCODE: &str = "addr:postcode (invalid format)";

/// Raw amenity values with a dedicated category (matched case-insensitively)
const AMENITY_TYPES: &[(&str, PosType)] = &[
    ("cafe", PosType::Cafe),
    ("bakery", PosType::Bakery),
    ("vending_machine", PosType::VendingMachine),
    ("cafeteria", PosType::Cafeteria),
    ("restaurant", PosType::Cafeteria),
    ("fast_food", PosType::Cafeteria),
];

/// Heidelberg postal codes that belong to a campus
const CAMPUS_POSTAL_CODES: &[(i32, CampusType)] = &[
    (69115, CampusType::Bergheim),
    (69117, CampusType::Altstadt),
    (69120, CampusType::Inf),
];

/// Convert an OSM node into a POS ready for persistence
///
/// Every required attribute is checked before anything is mapped, and all
/// problems are reported together.
///
/// # Errors
///
/// Returns `MissingRequiredFields` listing, in order, each of `name`,
/// `amenity`, `addr:street`, `addr:housenumber`, `addr:postcode`, `addr:city`
/// that is absent or blank, plus `addr:postcode (invalid format)` when a
/// postal code is present but not an integer.
///
/// # Example
///
/// ```
/// use campus_coffee::core::import::convert_osm_node_to_pos;
/// use campus_coffee::domain::{CampusType, NodeId, OsmNode, PosType};
///
/// let node = OsmNode {
///     name: Some("Test Café".to_string()),
///     amenity: Some("cafe".to_string()),
///     street: Some("Teststrasse".to_string()),
///     house_number: Some("1".to_string()),
///     postal_code: Some("69117".to_string()),
///     city: Some("Heidelberg".to_string()),
///     ..OsmNode::new(NodeId::new(1))
/// };
///
/// let pos = convert_osm_node_to_pos(&node).unwrap();
/// assert_eq!(pos.pos_type, PosType::Cafe);
/// assert_eq!(pos.campus, Some(CampusType::Altstadt));
/// ```
pub fn convert_osm_node_to_pos(node: &OsmNode) -> Result<Pos> {
    let required = [
        (TAG_NAME, &node.name),
        (TAG_AMENITY, &node.amenity),
        (TAG_STREET, &node.street),
        (TAG_HOUSE_NUMBER, &node.house_number),
        (TAG_POSTCODE, &node.postal_code),
        (TAG_CITY, &node.city),
    ];

    let mut missing: Vec<String> = required
        .iter()
        .filter(|(_, value)| non_blank(value).is_none())
        .map(|(tag, _)| (*tag).to_string())
        .collect();

    let postal_code = match non_blank(&node.postal_code) {
        Some(raw) => {
            let parsed = parse_postal_code(raw);
            if parsed.is_none() {
                missing.push(INVALID_POSTCODE.to_string());
            }
            parsed
        }
        None => None,
    };

    let (name, amenity, street, house_number, postal_code, city) = match (
        non_blank(&node.name),
        non_blank(&node.amenity),
        non_blank(&node.street),
        non_blank(&node.house_number),
        postal_code,
        non_blank(&node.city),
    ) {
        (Some(n), Some(a), Some(s), Some(h), Some(p), Some(c)) if missing.is_empty() => {
            (n, a, s, h, p, c)
        }
        _ => {
            tracing::warn!(
                node_id = %node.node_id,
                fields = ?missing,
                "OSM node is missing required fields"
            );
            return Err(CampusCoffeeError::MissingRequiredFields {
                node_id: node.node_id,
                fields: missing,
            });
        }
    };

    let pos_type = map_amenity_to_pos_type(amenity);
    let campus = map_postal_code_to_campus(postal_code);
    let description = build_description(node);

    tracing::debug!(
        node_id = %node.node_id,
        name = %name,
        pos_type = %pos_type,
        campus = ?campus,
        "Converting OSM node to POS"
    );

    Pos::builder()
        .name(name)
        .description(description)
        .pos_type(pos_type)
        .campus(campus)
        .street(street)
        .house_number(house_number)
        .postal_code(postal_code)
        .city(city)
        .build()
        .map_err(CampusCoffeeError::Validation)
}

/// Map a raw amenity value to a POS category
///
/// Unknown values fall back to [`PosType::Cafe`].
pub fn map_amenity_to_pos_type(amenity: &str) -> PosType {
    let lowered = amenity.to_lowercase();
    match AMENITY_TYPES.iter().find(|(raw, _)| *raw == lowered) {
        Some((_, pos_type)) => *pos_type,
        None => {
            tracing::warn!(amenity = %amenity, "Unknown amenity type, defaulting to CAFE");
            PosType::Cafe
        }
    }
}

/// Map a postal code to the campus it belongs to, if any
pub fn map_postal_code_to_campus(postal_code: i32) -> Option<CampusType> {
    let campus = CAMPUS_POSTAL_CODES
        .iter()
        .find(|(code, _)| *code == postal_code)
        .map(|(_, campus)| *campus);

    if campus.is_none() {
        tracing::warn!(
            postal_code,
            "Postal code does not map to any known campus, leaving campus unset"
        );
    }
    campus
}

/// Build the human-readable summary of a node
///
/// Joins the capitalized amenity, `Hours: <opening_hours>` and the website
/// with `" - "`, skipping absent or blank parts.
pub fn build_description(node: &OsmNode) -> String {
    let mut parts = Vec::with_capacity(3);

    if let Some(amenity) = node.amenity.as_deref().filter(|a| !a.is_empty()) {
        parts.push(capitalize_first(amenity));
    }
    if let Some(hours) = non_blank(&node.opening_hours) {
        parts.push(format!("Hours: {hours}"));
    }
    if let Some(website) = non_blank(&node.website) {
        parts.push(website.to_string());
    }

    if parts.is_empty() {
        fallback_description(node.node_id)
    } else {
        parts.join(" - ")
    }
}

fn fallback_description(node_id: NodeId) -> String {
    format!("Imported from OpenStreetMap (node {node_id})")
}

fn parse_postal_code(raw: &str) -> Option<i32> {
    match raw.trim().parse::<i32>() {
        Ok(code) => Some(code),
        Err(_) => {
            tracing::warn!(postal_code = %raw, "Invalid postal code format");
            None
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn complete_node() -> OsmNode {
        OsmNode {
            name: Some("Test Café".to_string()),
            amenity: Some("cafe".to_string()),
            street: Some("Teststrasse".to_string()),
            house_number: Some("1".to_string()),
            postal_code: Some("69117".to_string()),
            city: Some("Heidelberg".to_string()),
            ..OsmNode::new(NodeId::new(123))
        }
    }

    fn missing_fields(result: Result<Pos>) -> Vec<String> {
        match result {
            Err(CampusCoffeeError::MissingRequiredFields { fields, .. }) => fields,
            other => panic!("expected MissingRequiredFields, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_node_round_trip() {
        let pos = convert_osm_node_to_pos(&complete_node()).unwrap();

        assert!(pos.id.is_none());
        assert_eq!(pos.name, "Test Café");
        assert_eq!(pos.pos_type, PosType::Cafe);
        assert_eq!(pos.campus, Some(CampusType::Altstadt));
        assert_eq!(pos.street, "Teststrasse");
        assert_eq!(pos.house_number, "1");
        assert_eq!(pos.postal_code, 69117);
        assert_eq!(pos.city, "Heidelberg");
        assert_eq!(pos.description, "Cafe");
    }

    #[test_case("cafe", PosType::Cafe ; "cafe")]
    #[test_case("CAFE", PosType::Cafe ; "cafe uppercase")]
    #[test_case("bakery", PosType::Bakery ; "bakery")]
    #[test_case("Vending_Machine", PosType::VendingMachine ; "vending machine mixed case")]
    #[test_case("cafeteria", PosType::Cafeteria ; "cafeteria")]
    #[test_case("restaurant", PosType::Cafeteria ; "restaurant")]
    #[test_case("fast_food", PosType::Cafeteria ; "fast food")]
    #[test_case("pub", PosType::Cafe ; "unknown falls back to cafe")]
    #[test_case("ice_cream", PosType::Cafe ; "ice cream falls back to cafe")]
    fn test_map_amenity(raw: &str, expected: PosType) {
        assert_eq!(map_amenity_to_pos_type(raw), expected);
    }

    #[test_case(69115, Some(CampusType::Bergheim) ; "bergheim")]
    #[test_case(69117, Some(CampusType::Altstadt) ; "altstadt")]
    #[test_case(69120, Some(CampusType::Inf) ; "neuenheimer feld")]
    #[test_case(69118, None ; "ziegelhausen")]
    #[test_case(10115, None ; "berlin")]
    fn test_map_postal_code(code: i32, expected: Option<CampusType>) {
        assert_eq!(map_postal_code_to_campus(code), expected);
    }

    #[test]
    fn test_unmapped_postal_code_is_not_an_error() {
        let node = OsmNode {
            postal_code: Some("69126".to_string()),
            ..complete_node()
        };
        let pos = convert_osm_node_to_pos(&node).unwrap();
        assert!(pos.campus.is_none());
        assert_eq!(pos.postal_code, 69126);
    }

    #[test]
    fn test_postal_code_is_trimmed() {
        let node = OsmNode {
            postal_code: Some(" 69120 ".to_string()),
            ..complete_node()
        };
        let pos = convert_osm_node_to_pos(&node).unwrap();
        assert_eq!(pos.campus, Some(CampusType::Inf));
    }

    #[test]
    fn test_all_fields_missing_in_order() {
        let node = OsmNode::new(NodeId::new(5));
        let fields = missing_fields(convert_osm_node_to_pos(&node));
        assert_eq!(
            fields,
            vec![
                "name",
                "amenity",
                "addr:street",
                "addr:housenumber",
                "addr:postcode",
                "addr:city"
            ]
        );
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let node = OsmNode {
            name: Some("   ".to_string()),
            city: Some(String::new()),
            ..complete_node()
        };
        let result = convert_osm_node_to_pos(&node);
        assert!(matches!(
            &result,
            Err(CampusCoffeeError::MissingRequiredFields { node_id, .. }) if *node_id == NodeId::new(123)
        ));
        assert_eq!(missing_fields(result), vec!["name", "addr:city"]);
    }

    #[test]
    fn test_invalid_postal_code() {
        let node = OsmNode {
            postal_code: Some("abc".to_string()),
            ..complete_node()
        };
        let fields = missing_fields(convert_osm_node_to_pos(&node));
        assert_eq!(fields, vec![INVALID_POSTCODE]);
    }

    #[test]
    fn test_invalid_postal_code_collected_with_missing_fields() {
        let node = OsmNode {
            street: None,
            postal_code: Some("D-69117".to_string()),
            ..complete_node()
        };
        let fields = missing_fields(convert_osm_node_to_pos(&node));
        assert_eq!(fields, vec!["addr:street", INVALID_POSTCODE]);
    }

    #[test]
    fn test_error_message_lists_fields() {
        let node = OsmNode {
            name: None,
            amenity: None,
            ..complete_node()
        };
        let err = convert_osm_node_to_pos(&node).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The OpenStreetMap node with ID 123 is missing required fields: name, amenity"
        );
    }

    #[test]
    fn test_description_with_hours_and_website() {
        let node = OsmNode {
            amenity: Some("vending_machine".to_string()),
            opening_hours: Some("24/7".to_string()),
            website: Some("https://example.org".to_string()),
            ..complete_node()
        };
        assert_eq!(
            build_description(&node),
            "Vending_machine - Hours: 24/7 - https://example.org"
        );
    }

    #[test]
    fn test_description_skips_blank_parts() {
        let node = OsmNode {
            opening_hours: Some("  ".to_string()),
            website: Some("https://cafe.example".to_string()),
            ..complete_node()
        };
        assert_eq!(build_description(&node), "Cafe - https://cafe.example");
    }

    #[test]
    fn test_description_fallback() {
        let node = OsmNode::new(NodeId::new(42));
        assert_eq!(
            build_description(&node),
            "Imported from OpenStreetMap (node 42)"
        );
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("bakery"), "Bakery");
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first(""), "");
    }
}
