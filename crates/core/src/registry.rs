//! The per-context status registry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{ContextId, ModuleId, ModuleStatus, StatusMap};

/// A mapping from every known context to its status map.
///
/// Entries are created lazily on first write and never deleted; looking up
/// a context that was never written yields the default map rather than an
/// error. Persisted as a whole on every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextRegistry {
    contexts: BTreeMap<ContextId, StatusMap>,
}

impl ContextRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The status map for a context, synthesizing the all-default map for
    /// contexts that were never written. Never fails.
    pub fn status_map(&self, context: ContextId) -> StatusMap {
        self.contexts.get(&context).copied().unwrap_or_default()
    }

    /// Update one module's status under one context and return the new map.
    ///
    /// Implemented as a full merge: the current map is read (or synthesized),
    /// exactly one entry is replaced, and the whole map is written back, so
    /// sibling modules and other contexts are never dropped.
    pub fn set_status(
        &mut self,
        context: ContextId,
        module: ModuleId,
        status: ModuleStatus,
    ) -> StatusMap {
        let updated = self.status_map(context).with_status(module, status);
        self.contexts.insert(context, updated);
        updated
    }

    /// Whether any context has been written yet.
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Number of contexts written so far.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Iterate the written contexts with their maps.
    pub fn iter(&self) -> impl Iterator<Item = (ContextId, &StatusMap)> + '_ {
        self.contexts.iter().map(|(ctx, map)| (*ctx, map))
    }
}
