//! Total per-module status maps.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::{ModuleId, ModuleStatus};

/// A total mapping from every module to exactly one status.
///
/// Backed by a fixed array, so it can never be partial: a module that was
/// never explicitly set reads as [`ModuleStatus::ToLearn`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusMap([ModuleStatus; ModuleId::COUNT]);

impl StatusMap {
    /// A fresh map with every module at the default status.
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of a single module.
    pub fn get(&self, module: ModuleId) -> ModuleStatus {
        self.0[module.index()]
    }

    /// Set the status of a single module in place.
    pub fn set(&mut self, module: ModuleId, status: ModuleStatus) {
        self.0[module.index()] = status;
    }

    /// A copy of this map with exactly one module updated.
    pub fn with_status(mut self, module: ModuleId, status: ModuleStatus) -> Self {
        self.set(module, status);
        self
    }

    /// Iterate all modules with their statuses, in learning order.
    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, ModuleStatus)> + '_ {
        ModuleId::ALL.into_iter().map(|id| (id, self.get(id)))
    }

    /// Whether every module is still at the default status.
    pub fn is_all_default(&self) -> bool {
        self.0.iter().all(|s| *s == ModuleStatus::ToLearn)
    }
}

// Wire format: an object keyed by stringified module ids, one entry per
// module. Partial objects deserialize with defaults filled in; unknown
// module keys are an error so corrupted blobs are detected, not absorbed.
impl Serialize for StatusMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ModuleId::COUNT))?;
        for (module, status) in self.iter() {
            map.serialize_entry(&module, &status)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StatusMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = StatusMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from module ids to statuses")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = StatusMap::default();
                while let Some((module, status)) = access.next_entry::<ModuleId, ModuleStatus>()? {
                    map.set(module, status);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_map_reads_to_learn_everywhere() {
        let map = StatusMap::new();
        for module in ModuleId::ALL {
            assert_eq!(map.get(module), ModuleStatus::ToLearn);
        }
        assert!(map.is_all_default());
    }

    #[test]
    fn setting_one_module_leaves_siblings_untouched() {
        let before = StatusMap::new().with_status(ModuleId::MetricMap, ModuleStatus::Mastered);
        let after = before.with_status(ModuleId::PathSelector, ModuleStatus::NeedsReview);

        assert_eq!(after.get(ModuleId::PathSelector), ModuleStatus::NeedsReview);
        for module in ModuleId::ALL {
            if module != ModuleId::PathSelector {
                assert_eq!(after.get(module), before.get(module));
            }
        }
    }

    #[test]
    fn serializes_with_stringified_module_keys() {
        let map = StatusMap::new()
            .with_status(ModuleId::ProblemFraming, ModuleStatus::Mastered)
            .with_status(ModuleId::MetricMap, ModuleStatus::NeedsReview);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            "{\"0\":\"mastered\",\"1\":\"needs-review\",\"2\":\"to-learn\",\
             \"3\":\"to-learn\",\"4\":\"to-learn\",\"5\":\"to-learn\"}"
        );

        let back: StatusMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn partial_objects_fill_in_defaults() {
        let map: StatusMap = serde_json::from_str("{\"3\":\"mastered\"}").unwrap();
        assert_eq!(map.get(ModuleId::AnalysisLibrary), ModuleStatus::Mastered);
        assert_eq!(map.get(ModuleId::ProblemFraming), ModuleStatus::ToLearn);
    }

    #[test]
    fn unknown_module_keys_are_rejected() {
        assert!(serde_json::from_str::<StatusMap>("{\"9\":\"mastered\"}").is_err());
        assert!(serde_json::from_str::<StatusMap>("{\"0\":\"finished\"}").is_err());
    }
}
