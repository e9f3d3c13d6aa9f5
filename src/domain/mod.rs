//! Domain models and types for CampusCoffee.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`NodeId`], [`PosId`])
//! - **Domain models** ([`OsmNode`], [`Pos`], [`PosType`], [`CampusType`])
//! - **Error types** ([`CampusCoffeeError`], [`ErrorCategory`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, CampusCoffeeError>`]:
//!
//! ```rust
//! use campus_coffee::domain::{CampusCoffeeError, NodeId, Result};
//!
//! fn example(node_id: NodeId) -> Result<()> {
//!     Err(CampusCoffeeError::ExternalNodeNotFound(node_id))
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod osm_node;
pub mod pos;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{CampusCoffeeError, ErrorCategory};
pub use ids::{NodeId, PosId};
pub use osm_node::OsmNode;
pub use pos::{CampusType, Pos, PosBuilder, PosType};
pub use result::Result;
