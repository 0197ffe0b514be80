//! Module identity and per-module learning status.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// One of the six fixed stages of the learning sequence.
///
/// The numeric discriminants define the learning order and are the
/// identifiers used in persisted data, so they are fixed for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ModuleId {
    /// Module 0: translate vague stress into a testable business question.
    ProblemFraming = 0,
    /// Module 1: map the mathematical relationships between metrics.
    MetricMap = 1,
    /// Module 2: choose the thinking scaffold for the problem at hand.
    PathSelector = 2,
    /// Module 3: technical execution against real data.
    AnalysisLibrary = 3,
    /// Module 4: turn the analysis into repeatable tooling.
    ToolTranslation = 4,
    /// Module 5: communicate findings and trigger a business action.
    DecisionImpact = 5,
}

impl ModuleId {
    /// All modules, in learning order.
    pub const ALL: [ModuleId; 6] = [
        ModuleId::ProblemFraming,
        ModuleId::MetricMap,
        ModuleId::PathSelector,
        ModuleId::AnalysisLibrary,
        ModuleId::ToolTranslation,
        ModuleId::DecisionImpact,
    ];

    /// Number of modules in the sequence.
    pub const COUNT: usize = Self::ALL.len();

    /// Position in the learning sequence (0-5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a module by sequence position.
    pub fn from_index(index: usize) -> Option<ModuleId> {
        Self::ALL.get(index).copied()
    }

    /// The module that follows this one, or `None` at the end of the journey.
    pub fn next(self) -> Option<ModuleId> {
        Self::from_index(self.index() + 1)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl FromStr for ModuleId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .ok()
            .and_then(ModuleId::from_index)
            .ok_or_else(|| ParseError::Module(s.to_string()))
    }
}

// Persisted data keys modules by their stringified index ("0".."5").
impl Serialize for ModuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ModuleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = ModuleId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a module id between \"0\" and \"5\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(IdVisitor)
    }
}

/// A module's per-context learning state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleStatus {
    /// Not yet started. The default for every module in a fresh context.
    #[default]
    ToLearn,
    /// Visited, but flagged for another pass.
    NeedsReview,
    /// Learned.
    Mastered,
}

impl ModuleStatus {
    /// Canonical string form, as persisted.
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleStatus::ToLearn => "to-learn",
            ModuleStatus::NeedsReview => "needs-review",
            ModuleStatus::Mastered => "mastered",
        }
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to-learn" => Ok(ModuleStatus::ToLearn),
            "needs-review" => Ok(ModuleStatus::NeedsReview),
            "mastered" => Ok(ModuleStatus::Mastered),
            other => Err(ParseError::Status(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_order_is_the_learning_sequence() {
        for (index, id) in ModuleId::ALL.iter().enumerate() {
            assert_eq!(id.index(), index);
            assert_eq!(ModuleId::from_index(index), Some(*id));
        }
        assert_eq!(ModuleId::COUNT, 6);
        assert_eq!(ModuleId::from_index(6), None);
    }

    #[test]
    fn next_walks_forward_and_stops() {
        assert_eq!(ModuleId::ProblemFraming.next(), Some(ModuleId::MetricMap));
        assert_eq!(ModuleId::ToolTranslation.next(), Some(ModuleId::DecisionImpact));
        assert_eq!(ModuleId::DecisionImpact.next(), None);
    }

    #[test]
    fn module_id_round_trips_through_strings() {
        for id in ModuleId::ALL {
            assert_eq!(id.to_string().parse::<ModuleId>().unwrap(), id);
        }
        assert!("6".parse::<ModuleId>().is_err());
        assert!("first".parse::<ModuleId>().is_err());
    }

    #[test]
    fn status_uses_kebab_case_wire_form() {
        assert_eq!(
            serde_json::to_string(&ModuleStatus::NeedsReview).unwrap(),
            "\"needs-review\""
        );
        assert_eq!(
            serde_json::from_str::<ModuleStatus>("\"to-learn\"").unwrap(),
            ModuleStatus::ToLearn
        );
        assert_eq!("mastered".parse::<ModuleStatus>().unwrap(), ModuleStatus::Mastered);
        assert!("done".parse::<ModuleStatus>().is_err());
    }

    #[test]
    fn default_status_is_to_learn() {
        assert_eq!(ModuleStatus::default(), ModuleStatus::ToLearn);
    }
}
