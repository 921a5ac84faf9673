//! Registry service: the in-memory store plus its data file

use crate::storage::JsonFileStore;
use tokio::sync::RwLock;
use tombamento_types::{
    BatchSummary, Detalhe, HealthReport, Status, StatsReport, Store, Tombamento, Upsert,
    timestamp_now,
};
use tracing::{debug, error, info};

/// Owns the store. Every mutation holds the write lock until the data file
/// has been rewritten, so mutations apply and persist in arrival order.
pub struct Registry {
    store: RwLock<Store>,
    storage: JsonFileStore,
}

impl Registry {
    /// Start from whatever the data file holds. A missing, unreadable or
    /// unparseable file leaves the store empty.
    pub async fn open(storage: JsonFileStore) -> Self {
        let store = match storage.load().await {
            Ok(Some(store)) => {
                info!(
                    "Data loaded from {}: {} tombamentos, {} detalhes",
                    storage.path().display(),
                    store.tombamentos.len(),
                    store.detalhes.len()
                );
                store
            }
            Ok(None) => {
                info!(
                    "No data file at {}, starting empty",
                    storage.path().display()
                );
                Store::default()
            }
            Err(e) => {
                error!("Failed to load data, starting empty: {}", e);
                Store::default()
            }
        };

        Self::with_store(store, storage)
    }

    pub fn with_store(store: Store, storage: JsonFileStore) -> Self {
        Self {
            store: RwLock::new(store),
            storage,
        }
    }

    pub async fn snapshot(&self) -> Store {
        self.store.read().await.clone()
    }

    pub async fn health(&self) -> HealthReport {
        let store = self.store.read().await;
        HealthReport::ok(store.tombamentos.len(), store.detalhes.len())
    }

    pub async fn stats(&self) -> StatsReport {
        let store = self.store.read().await;
        StatsReport {
            total_tombamentos: store.tombamentos.len(),
            total_detalhes: store.detalhes.len(),
            status_distribution: store.status_distribution(),
            timestamp: timestamp_now(),
        }
    }

    pub async fn list_tombamentos(&self) -> Vec<Tombamento> {
        let store = self.store.read().await;
        debug!("Sending {} tombamentos", store.tombamentos.len());
        store.tombamentos.clone()
    }

    pub async fn tombamento(&self, code: &str) -> Option<Tombamento> {
        self.store.read().await.tombamento(code).cloned()
    }

    pub async fn upsert_tombamento(&self, tombamento: Tombamento) -> Tombamento {
        let mut store = self.store.write().await;
        match store.upsert_tombamento(tombamento.clone()) {
            Upsert::Created => info!("Tombamento created: {}", tombamento.code),
            Upsert::Updated => info!("Tombamento updated: {}", tombamento.code),
        }
        self.save(&store).await;
        tombamento
    }

    pub async fn update_status(&self, code: &str, status: Status) -> Option<Tombamento> {
        let mut store = self.store.write().await;
        let updated = store.update_status(code, status).cloned()?;
        info!("Tombamento {} updated, status: {}", code, status);
        self.save(&store).await;
        Some(updated)
    }

    pub async fn remove_tombamento(&self, code: &str) -> bool {
        let mut store = self.store.write().await;
        if !store.remove_tombamento(code) {
            return false;
        }
        info!("Tombamento {} removed", code);
        self.save(&store).await;
        true
    }

    pub async fn clear_tombamentos(&self) -> usize {
        let mut store = self.store.write().await;
        let count = store.clear_tombamentos();
        info!("{} tombamentos removed", count);
        self.save(&store).await;
        count
    }

    pub async fn list_detalhes(&self) -> Vec<Detalhe> {
        let store = self.store.read().await;
        debug!("Sending {} detalhes", store.detalhes.len());
        store.detalhes.clone()
    }

    pub async fn detalhe(&self, code: &str) -> Option<Detalhe> {
        self.store.read().await.detalhe(code).cloned()
    }

    pub async fn upsert_detalhe(&self, detalhe: Detalhe) -> Detalhe {
        let mut store = self.store.write().await;
        match store.upsert_detalhe(detalhe.clone()) {
            Upsert::Created => info!("Detalhe created: {}", detalhe.code),
            Upsert::Updated => info!("Detalhe updated: {}", detalhe.code),
        }
        self.save(&store).await;
        detalhe
    }

    pub async fn upsert_detalhes(&self, batch: Vec<Detalhe>) -> BatchSummary {
        let mut store = self.store.write().await;
        let summary = store.upsert_detalhes(batch);
        info!(
            "Batch: {} created, {} updated",
            summary.created, summary.updated
        );
        self.save(&store).await;
        summary
    }

    /// Write the current store to disk (used on shutdown).
    pub async fn persist(&self) {
        let store = self.store.read().await;
        self.save(&store).await;
    }

    /// Save failures are logged only; memory stays ahead of disk.
    async fn save(&self, store: &Store) {
        match self.storage.save(store).await {
            Ok(()) => debug!("Data saved to {}", self.storage.path().display()),
            Err(e) => error!("Failed to save data: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn open_in(dir: &tempfile::TempDir) -> Registry {
        Registry::open(JsonFileStore::new(dir.path().join("data.json"))).await
    }

    #[tokio::test]
    async fn test_open_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.json"), "not json").unwrap();

        let registry = open_in(&dir).await;
        assert_eq!(registry.snapshot().await, Store::default());
    }

    #[tokio::test]
    async fn test_mutations_reach_disk() {
        let dir = tempfile::tempdir().unwrap();
        let registry = open_in(&dir).await;

        registry.upsert_tombamento(Tombamento::new("A1", 2)).await;
        registry.upsert_detalhe(Detalhe::new("A1")).await;

        let reopened = open_in(&dir).await;
        assert_eq!(reopened.snapshot().await, registry.snapshot().await);
        assert_eq!(reopened.tombamento("A1").await, Some(Tombamento::new("A1", 2)));
    }

    #[tokio::test]
    async fn test_failed_lookup_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let registry = open_in(&dir).await;

        assert!(!registry.remove_tombamento("nope").await);
        assert!(registry.update_status("nope", 1).await.is_none());
        assert!(!dir.path().join("data.json").exists());
    }

    #[tokio::test]
    async fn test_save_failure_keeps_memory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStore::new(dir.path().join("gone").join("data.json"));
        let registry = Registry::open(storage).await;

        let saved = registry.upsert_tombamento(Tombamento::new("A1", 1)).await;
        assert_eq!(saved, Tombamento::new("A1", 1));
        assert_eq!(registry.list_tombamentos().await.len(), 1);
    }

    #[tokio::test]
    async fn test_persist_writes_current_store() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStore::new(dir.path().join("data.json"));

        let mut store = Store::new();
        store.upsert_tombamento(Tombamento::new("A1", 4));
        store.upsert_detalhe(Detalhe::new("A1"));
        let registry = Registry::with_store(store.clone(), storage.clone());
        assert!(storage.load().await.unwrap().is_none());

        registry.persist().await;
        assert_eq!(storage.load().await.unwrap(), Some(store));
    }

    #[tokio::test]
    async fn test_stats() {
        let dir = tempfile::tempdir().unwrap();
        let registry = open_in(&dir).await;
        for (code, status) in [("A", 1), ("B", 1), ("C", 3)] {
            registry.upsert_tombamento(Tombamento::new(code, status)).await;
        }

        let stats = registry.stats().await;
        assert_eq!(stats.total_tombamentos, 3);
        assert_eq!(stats.status_distribution.get(&1), Some(&2));
        assert_eq!(stats.status_distribution.get(&3), Some(&1));
    }
}
