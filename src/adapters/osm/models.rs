//! OpenStreetMap API wire models
//!
//! Shapes of the JSON document returned by `GET /api/0.6/node/{id}.json`:
//!
//! ```json
//! {
//!   "version": "0.6",
//!   "elements": [
//!     {
//!       "type": "node",
//!       "id": 5589879349,
//!       "lat": 49.4122362,
//!       "lon": 8.7077883,
//!       "tags": { "amenity": "cafe", "name": "Rada Coffee & Rösterei" }
//!     }
//!   ]
//! }
//! ```

use serde::Deserialize;
use std::collections::HashMap;

/// Top-level API response
#[derive(Debug, Deserialize)]
pub struct OsmApiResponse {
    #[serde(default)]
    pub elements: Vec<OsmElement>,
}

/// A single element (node, way or relation)
#[derive(Debug, Deserialize)]
pub struct OsmElement {
    #[serde(rename = "type")]
    pub element_type: String,

    /// Kept as raw JSON so a malformed coordinate degrades to "absent"
    /// instead of failing the whole document
    #[serde(default)]
    pub lat: Option<serde_json::Value>,

    #[serde(default)]
    pub lon: Option<serde_json::Value>,

    /// Tag map; for a repeated key the last occurrence wins. A null map or
    /// non-string values are tolerated here and dropped by [`Self::into_tags`].
    #[serde(default)]
    pub tags: Option<HashMap<String, serde_json::Value>>,
}

impl OsmElement {
    pub fn is_node(&self) -> bool {
        self.element_type == "node"
    }

    pub fn latitude(&self) -> Option<f64> {
        self.lat.as_ref().and_then(coordinate)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.lon.as_ref().and_then(coordinate)
    }

    /// Consumes the element, keeping only string-valued tags
    pub fn into_tags(self) -> HashMap<String, String> {
        self.tags
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, value)| match value {
                serde_json::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect()
    }
}

/// Reads a coordinate from a JSON number or numeric string
fn coordinate(value: &serde_json::Value) -> Option<f64> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}
