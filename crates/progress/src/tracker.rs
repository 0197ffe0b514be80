//! The per-context status store.

use levermap_core::{ContextId, ContextRegistry, ModuleId, ModuleStatus, StatusMap};
use levermap_storage::{PersistenceAdapter, StateStore};
use tracing::warn;

/// Single source of truth for module statuses across contexts.
///
/// Owns the registry and the active context id. Every mutation writes back
/// through the persistence adapter as a best effort: if the write fails,
/// the in-memory state stays authoritative for the rest of the session and
/// the failure is logged, not surfaced.
pub struct ContextStore<S: StateStore> {
    adapter: PersistenceAdapter<S>,
    registry: ContextRegistry,
    active: ContextId,
}

impl<S: StateStore> ContextStore<S> {
    /// Build a store from persisted state.
    ///
    /// Never fails: a first run, unreadable storage, or corrupted content
    /// all start from an empty registry and the general context.
    pub async fn hydrate(store: S) -> Self {
        let adapter = PersistenceAdapter::new(store);
        let (registry, active) = adapter.load().await;
        Self {
            adapter,
            registry,
            active: active.map(ContextId::Problem).unwrap_or(ContextId::General),
        }
    }

    /// The status map for a context: the stored one, or the all-default
    /// map for contexts never written. Never fails.
    pub fn status_map(&self, context: ContextId) -> StatusMap {
        self.registry.status_map(context)
    }

    /// The status map for the active context.
    pub fn active_status_map(&self) -> StatusMap {
        self.status_map(self.active)
    }

    /// Update one module's status under one context and return the new map
    /// for that context.
    ///
    /// The registry entry is replaced wholesale (current map, one entry
    /// changed), so sibling modules and other contexts are untouched. The
    /// whole registry is then persisted.
    pub async fn set_status(
        &mut self,
        context: ContextId,
        module: ModuleId,
        status: ModuleStatus,
    ) -> StatusMap {
        let updated = self.registry.set_status(context, module, status);
        if let Err(error) = self.adapter.save_registry(&self.registry).await {
            warn!(%error, %context, "failed to persist status registry, in-memory state kept");
        }
        updated
    }

    /// Select the active context and persist the selection.
    /// [`ContextId::General`] means no problem is selected.
    pub async fn select_context(&mut self, context: ContextId) {
        self.active = context;
        if let Err(error) = self.adapter.save_active_context(context).await {
            warn!(%error, %context, "failed to persist context selection");
        }
    }

    /// The currently active context; general when nothing was selected.
    pub fn active_context(&self) -> ContextId {
        self.active
    }

    /// Read-only view of the registry.
    pub fn registry(&self) -> &ContextRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_progress;
    use levermap_core::ProblemId;
    use levermap_storage::{MemoryStore, ACTIVE_CONTEXT_KEY};

    #[tokio::test]
    async fn fresh_store_defaults_to_general_and_empty() {
        let store = ContextStore::hydrate(MemoryStore::new()).await;
        assert_eq!(store.active_context(), ContextId::General);
        assert!(store.registry().is_empty());
        assert!(store.active_status_map().is_all_default());
    }

    #[tokio::test]
    async fn set_status_updates_only_the_target_module() {
        let mut store = ContextStore::hydrate(MemoryStore::new()).await;
        let context = ContextId::Problem(ProblemId::CvrDropped);

        let before = store.status_map(context);
        let after = store
            .set_status(context, ModuleId::PathSelector, ModuleStatus::Mastered)
            .await;

        assert_eq!(after.get(ModuleId::PathSelector), ModuleStatus::Mastered);
        for module in ModuleId::ALL {
            if module != ModuleId::PathSelector {
                assert_eq!(after.get(module), before.get(module));
            }
        }
    }

    #[tokio::test]
    async fn switching_contexts_never_discards_sibling_progress() {
        let mut store = ContextStore::hydrate(MemoryStore::new()).await;
        let roi = ContextId::Problem(ProblemId::RoiDropped);
        let cac = ContextId::Problem(ProblemId::CacHigh);

        store.select_context(roi).await;
        store.set_status(roi, ModuleId::ProblemFraming, ModuleStatus::Mastered).await;
        store.set_status(roi, ModuleId::MetricMap, ModuleStatus::NeedsReview).await;

        store.select_context(cac).await;
        assert!(store.active_status_map().is_all_default());

        store.select_context(roi).await;
        let map = store.active_status_map();
        assert_eq!(map.get(ModuleId::ProblemFraming), ModuleStatus::Mastered);
        assert_eq!(map.get(ModuleId::MetricMap), ModuleStatus::NeedsReview);

        let expected = 100.0 * 2.0 / 6.0;
        assert!((compute_progress(&map) - expected).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn general_journey_can_reach_full_progress() {
        let mut store = ContextStore::hydrate(MemoryStore::new()).await;
        for module in ModuleId::ALL {
            store.set_status(ContextId::General, module, ModuleStatus::Mastered).await;
        }
        assert_eq!(compute_progress(&store.status_map(ContextId::General)), 100.0);
    }

    #[tokio::test]
    async fn restart_reproduces_registry_and_selection() {
        let backing = MemoryStore::new();
        {
            let mut store = ContextStore::hydrate(backing.clone()).await;
            store.select_context(ContextId::Problem(ProblemId::RetentionLow)).await;
            store
                .set_status(
                    ContextId::Problem(ProblemId::RetentionLow),
                    ModuleId::AnalysisLibrary,
                    ModuleStatus::NeedsReview,
                )
                .await;
        }

        let reloaded = ContextStore::hydrate(backing).await;
        assert_eq!(
            reloaded.active_context(),
            ContextId::Problem(ProblemId::RetentionLow)
        );
        assert_eq!(
            reloaded
                .status_map(ContextId::Problem(ProblemId::RetentionLow))
                .get(ModuleId::AnalysisLibrary),
            ModuleStatus::NeedsReview
        );
    }

    #[tokio::test]
    async fn selecting_general_clears_the_persisted_selection() {
        let backing = MemoryStore::new();
        let mut store = ContextStore::hydrate(backing.clone()).await;

        store.select_context(ContextId::Problem(ProblemId::AovLow)).await;
        assert!(backing.get(ACTIVE_CONTEXT_KEY).await.unwrap().is_some());

        store.select_context(ContextId::General).await;
        assert_eq!(backing.get(ACTIVE_CONTEXT_KEY).await.unwrap(), None);

        let reloaded = ContextStore::hydrate(backing).await;
        assert_eq!(reloaded.active_context(), ContextId::General);
    }

    #[tokio::test]
    async fn corrupted_storage_still_hydrates() {
        let mut backing = MemoryStore::new();
        backing
            .set(levermap_storage::REGISTRY_KEY, "{\"general\": 42}")
            .await
            .unwrap();

        let store = ContextStore::hydrate(backing).await;
        assert!(store.registry().is_empty());
        assert_eq!(store.active_context(), ContextId::General);
    }
}
