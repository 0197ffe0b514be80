//! Persistence adapter over the two durable entries.
//!
//! The registry and the active context are stored independently. Absence,
//! unreadable storage, and malformed content all degrade to defaults here;
//! a parse failure never reaches the caller.

use levermap_core::{ContextId, ContextRegistry, ProblemId};
use tracing::{debug, warn};

use crate::{Result, StateStore};

/// Key holding the serialized status registry.
pub const REGISTRY_KEY: &str = "all_statuses";

/// Key holding the bare id of the last explicitly selected problem.
/// The general sentinel is represented by absence of this entry.
pub const ACTIVE_CONTEXT_KEY: &str = "selected_problem";

/// Maps the domain state onto a [`StateStore`].
pub struct PersistenceAdapter<S> {
    store: S,
}

impl<S: StateStore> PersistenceAdapter<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load both entries. Infallible: anything unreadable or malformed is
    /// treated the same as a first run.
    pub async fn load(&self) -> (ContextRegistry, Option<ProblemId>) {
        let registry = match self.store.get(REGISTRY_KEY).await {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(registry) => registry,
                Err(error) => {
                    warn!(%error, "discarding malformed status registry");
                    ContextRegistry::new()
                }
            },
            Ok(None) => ContextRegistry::new(),
            Err(error) => {
                warn!(%error, "status registry unreadable, starting empty");
                ContextRegistry::new()
            }
        };

        let active = match self.store.get(ACTIVE_CONTEXT_KEY).await {
            Ok(Some(id)) => match id.parse::<ProblemId>() {
                Ok(problem) => Some(problem),
                Err(error) => {
                    warn!(%error, "discarding malformed active context");
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                warn!(%error, "active context unreadable");
                None
            }
        };

        debug!(contexts = registry.len(), active = ?active, "hydrated persisted state");
        (registry, active)
    }

    /// Persist the whole registry. An all-default (empty) registry has
    /// nothing worth writing and is skipped.
    pub async fn save_registry(&mut self, registry: &ContextRegistry) -> Result<()> {
        if registry.is_empty() {
            return Ok(());
        }
        let blob = serde_json::to_string(registry)?;
        self.store.set(REGISTRY_KEY, &blob).await
    }

    /// Persist the active context: the bare problem id, or removal of the
    /// entry when the general context is active.
    pub async fn save_active_context(&mut self, active: ContextId) -> Result<()> {
        match active.problem() {
            Some(problem) => self.store.set(ACTIVE_CONTEXT_KEY, problem.as_str()).await,
            None => self.store.remove(ACTIVE_CONTEXT_KEY).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use levermap_core::{ModuleId, ModuleStatus};

    #[tokio::test]
    async fn first_run_loads_defaults() {
        let adapter = PersistenceAdapter::new(MemoryStore::new());
        let (registry, active) = adapter.load().await;
        assert!(registry.is_empty());
        assert_eq!(active, None);
    }

    #[tokio::test]
    async fn registry_round_trips() {
        let store = MemoryStore::new();
        let mut adapter = PersistenceAdapter::new(store.clone());

        let mut registry = ContextRegistry::new();
        registry.set_status(
            ContextId::Problem(ProblemId::RoiDropped),
            ModuleId::ProblemFraming,
            ModuleStatus::Mastered,
        );
        adapter.save_registry(&registry).await.unwrap();

        let (loaded, _) = PersistenceAdapter::new(store).load().await;
        assert_eq!(loaded, registry);
    }

    #[tokio::test]
    async fn empty_registry_is_never_written() {
        let store = MemoryStore::new();
        let mut adapter = PersistenceAdapter::new(store.clone());

        adapter.save_registry(&ContextRegistry::new()).await.unwrap();
        assert_eq!(store.get(REGISTRY_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn malformed_registry_degrades_to_empty() {
        let mut store = MemoryStore::new();
        store.set(REGISTRY_KEY, "{not json").await.unwrap();
        store.set(ACTIVE_CONTEXT_KEY, "made_up_problem").await.unwrap();

        let (registry, active) = PersistenceAdapter::new(store).load().await;
        assert!(registry.is_empty());
        assert_eq!(active, None);
    }

    #[tokio::test]
    async fn foreign_registry_shape_degrades_to_empty() {
        let mut store = MemoryStore::new();
        // Valid JSON, wrong shape entirely.
        store.set(REGISTRY_KEY, "[1,2,3]").await.unwrap();

        let (registry, _) = PersistenceAdapter::new(store).load().await;
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn active_context_round_trips_and_clears() {
        let store = MemoryStore::new();
        let mut adapter = PersistenceAdapter::new(store.clone());

        adapter
            .save_active_context(ContextId::Problem(ProblemId::CacHigh))
            .await
            .unwrap();
        assert_eq!(store.get(ACTIVE_CONTEXT_KEY).await.unwrap().as_deref(), Some("cac_high"));
        let (_, active) = adapter.load().await;
        assert_eq!(active, Some(ProblemId::CacHigh));

        adapter.save_active_context(ContextId::General).await.unwrap();
        assert_eq!(store.get(ACTIVE_CONTEXT_KEY).await.unwrap(), None);
        let (_, active) = adapter.load().await;
        assert_eq!(active, None);
    }
}
