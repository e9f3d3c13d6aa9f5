//! Storage abstraction for POS records
//!
//! Every backend (in-memory, PostgreSQL) implements [`PosDataService`]; the
//! service layer only ever sees the trait object.

use crate::domain::{Pos, PosId, Result};
use async_trait::async_trait;

/// Persistence gateway for POS records
#[async_trait]
pub trait PosDataService: Send + Sync {
    /// Remove every stored record
    ///
    /// # Errors
    ///
    /// Returns a database error if the backend cannot be reached.
    async fn clear(&self) -> Result<()>;

    /// All stored records, ordered by ID
    async fn get_all(&self) -> Result<Vec<Pos>>;

    /// Fetch a single record
    ///
    /// # Errors
    ///
    /// Returns `PosNotFound` if no record with this ID exists.
    async fn get_by_id(&self, id: PosId) -> Result<Pos>;

    /// Create or update a record
    ///
    /// A record without an ID is created and receives a fresh ID together
    /// with `created_at`/`updated_at`. A record with an ID replaces the stored
    /// record of that ID and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// - `DuplicateName` if another record already uses the same name
    /// - `PosNotFound` if an ID is given but no such record exists
    async fn upsert(&self, pos: Pos) -> Result<Pos>;
}
