use std::sync::Arc;

use tokio::sync::RwLock;

use crate::database::seed;
use crate::models::{Activity, ActivityCatalog};

/// Shared handle to the in-memory activity catalog.
///
/// Cloning is cheap and every clone sees the same catalog, so handlers take it
/// by value through axum state the same way they would take a connection pool.
/// One lock guards the whole catalog: reads clone a snapshot, mutations hold
/// the write guard across their check and their update.
#[derive(Debug, Clone)]
pub struct RosterStore {
    catalog: Arc<RwLock<ActivityCatalog>>,
}

impl RosterStore {
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::default_catalog())
    }

    pub async fn snapshot(&self) -> ActivityCatalog {
        self.catalog.read().await.clone()
    }

    pub async fn activity_count(&self) -> usize {
        self.catalog.read().await.len()
    }

    /// Runs `f` against the named activity while holding the write lock.
    /// Returns `None` without calling `f` when no such activity exists.
    pub async fn with_activity_mut<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Activity) -> T,
    ) -> Option<T> {
        let mut catalog = self.catalog.write().await;
        catalog.get_mut(name).map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_the_same_catalog() {
        let store = RosterStore::seeded();
        let other = store.clone();

        other
            .with_activity_mut("Art Club", |a| a.participants.push("new@mergington.edu".into()))
            .await
            .unwrap();

        let snapshot = store.snapshot().await;
        assert!(snapshot["Art Club"].is_enrolled("new@mergington.edu"));
    }

    #[tokio::test]
    async fn unknown_activity_skips_the_closure() {
        let store = RosterStore::seeded();
        let mut called = false;
        let result = store
            .with_activity_mut("Underwater Basket Weaving", |_| called = true)
            .await;
        assert!(result.is_none());
        assert!(!called);
    }

    #[tokio::test]
    async fn snapshot_is_detached_from_the_store() {
        let store = RosterStore::seeded();
        let mut snapshot = store.snapshot().await;
        snapshot["Chess Club"].participants.clear();

        assert!(!store.snapshot().await["Chess Club"].participants.is_empty());
        assert_eq!(store.activity_count().await, 9);
    }
}
