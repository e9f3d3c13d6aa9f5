//! In-memory POS store
//!
//! Used for local runs and tests. Records live only as long as the process.

use super::traits::PosDataService;
use crate::domain::{CampusCoffeeError, Pos, PosId, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Default)]
struct StoreState {
    records: BTreeMap<PosId, Pos>,
    last_id: i64,
}

impl StoreState {
    fn name_taken(&self, name: &str, except: Option<PosId>) -> bool {
        self.records
            .values()
            .any(|pos| pos.name == name && pos.id != except)
    }
}

/// Mutex-guarded map of POS records keyed by ID
///
/// Name uniqueness is checked under the same lock that inserts, so two
/// concurrent creates with one name cannot both succeed.
#[derive(Default)]
pub struct InMemoryPosStore {
    state: Mutex<StoreState>,
}

impl InMemoryPosStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.state.lock().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl PosDataService for InMemoryPosStore {
    async fn clear(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        let removed = state.records.len();
        state.records.clear();
        tracing::debug!(removed, "Cleared in-memory POS store");
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Pos>> {
        let state = self.state.lock().await;
        Ok(state.records.values().cloned().collect())
    }

    async fn get_by_id(&self, id: PosId) -> Result<Pos> {
        let state = self.state.lock().await;
        state
            .records
            .get(&id)
            .cloned()
            .ok_or(CampusCoffeeError::PosNotFound(id))
    }

    async fn upsert(&self, mut pos: Pos) -> Result<Pos> {
        let mut state = self.state.lock().await;

        if state.name_taken(&pos.name, pos.id) {
            return Err(CampusCoffeeError::DuplicateName(pos.name));
        }

        let now = Utc::now();
        let id = match pos.id {
            Some(id) => {
                let existing = state
                    .records
                    .get(&id)
                    .ok_or(CampusCoffeeError::PosNotFound(id))?;
                pos.created_at = existing.created_at;
                id
            }
            None => {
                state.last_id += 1;
                let id = PosId::new(state.last_id);
                pos.id = Some(id);
                pos.created_at = Some(now);
                id
            }
        };
        pos.updated_at = Some(now);

        tracing::debug!(pos_id = %id, name = %pos.name, "Stored POS in memory");
        state.records.insert(id, pos.clone());
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CampusType, PosType};
    use std::sync::Arc;

    fn sample(name: &str) -> Pos {
        Pos::builder()
            .name(name)
            .description("Cafe")
            .pos_type(PosType::Cafe)
            .campus(Some(CampusType::Altstadt))
            .street("Teststrasse")
            .house_number("1")
            .postal_code(69117)
            .city("Heidelberg")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let store = InMemoryPosStore::new();
        let first = store.upsert(sample("One")).await.unwrap();
        let second = store.upsert(sample("Two")).await.unwrap();

        assert_eq!(first.id, Some(PosId::new(1)));
        assert_eq!(second.id, Some(PosId::new(2)));
        assert!(first.created_at.is_some());
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let store = InMemoryPosStore::new();
        store.upsert(sample("Test Café")).await.unwrap();

        let result = store.upsert(sample("Test Café")).await;
        assert!(matches!(
            result,
            Err(CampusCoffeeError::DuplicateName(ref name)) if name == "Test Café"
        ));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_keeps_created_at_and_allows_same_name() {
        let store = InMemoryPosStore::new();
        let created = store.upsert(sample("Keep")).await.unwrap();

        let mut changed = created.clone();
        changed.description = "Cafe - Hours: Mo-Fr 08:00-18:00".to_string();
        let updated = store.upsert(changed).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_to_taken_name_rejected() {
        let store = InMemoryPosStore::new();
        store.upsert(sample("A")).await.unwrap();
        let mut b = store.upsert(sample("B")).await.unwrap();

        b.name = "A".to_string();
        assert!(matches!(
            store.upsert(b).await,
            Err(CampusCoffeeError::DuplicateName(_))
        ));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = InMemoryPosStore::new();
        let mut pos = sample("Ghost");
        pos.id = Some(PosId::new(99));

        assert!(matches!(
            store.upsert(pos).await,
            Err(CampusCoffeeError::PosNotFound(id)) if id == PosId::new(99)
        ));
    }

    #[tokio::test]
    async fn test_get_all_ordered_and_clear() {
        let store = InMemoryPosStore::new();
        for name in ["C", "A", "B"] {
            store.upsert(sample(name)).await.unwrap();
        }

        let names: Vec<String> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);

        store.clear().await.unwrap();
        assert!(store.is_empty().await);
        assert!(matches!(
            store.get_by_id(PosId::new(1)).await,
            Err(CampusCoffeeError::PosNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_clear() {
        let store = InMemoryPosStore::new();
        store.upsert(sample("First")).await.unwrap();
        store.clear().await.unwrap();

        let next = store.upsert(sample("First")).await.unwrap();
        assert_eq!(next.id, Some(PosId::new(2)));
    }

    #[tokio::test]
    async fn test_concurrent_creates_with_same_name() {
        let store = Arc::new(InMemoryPosStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.upsert(sample("Race")).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(store.len().await, 1);
    }
}
