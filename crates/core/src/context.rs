//! Context identities: business problems and the general sentinel.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// One of the fixed business-problem scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProblemId {
    /// Return on ad spend is suddenly below target.
    RoiDropped,
    /// Conversion rate is down despite steady traffic.
    CvrDropped,
    /// Acquisition cost is exceeding first-purchase margin.
    CacHigh,
    /// Basket sizes are shrinking.
    AovLow,
    /// One-and-done customers are becoming the norm.
    RetentionLow,
    /// A major sale ended with unclear incremental profit.
    PromoUnclear,
}

impl ProblemId {
    /// All problem scenarios.
    pub const ALL: [ProblemId; 6] = [
        ProblemId::RoiDropped,
        ProblemId::CvrDropped,
        ProblemId::CacHigh,
        ProblemId::AovLow,
        ProblemId::RetentionLow,
        ProblemId::PromoUnclear,
    ];

    /// Canonical string form, as persisted and shown on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            ProblemId::RoiDropped => "roi_dropped",
            ProblemId::CvrDropped => "cvr_dropped",
            ProblemId::CacHigh => "cac_high",
            ProblemId::AovLow => "aov_low",
            ProblemId::RetentionLow => "retention_low",
            ProblemId::PromoUnclear => "promo_unclear",
        }
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProblemId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProblemId::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseError::Context(s.to_string()))
    }
}

/// An independent progress-tracking scope.
///
/// Exactly one context is active at any time: either a selected business
/// problem, or [`ContextId::General`] when none is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContextId {
    /// No problem selected; generic theory content applies.
    General,
    /// A specific business-problem scenario.
    Problem(ProblemId),
}

/// String form of the general sentinel.
const GENERAL: &str = "general";

impl ContextId {
    /// Canonical string form.
    pub fn as_str(self) -> &'static str {
        match self {
            ContextId::General => GENERAL,
            ContextId::Problem(p) => p.as_str(),
        }
    }

    /// The problem behind this context, if one is selected.
    pub fn problem(self) -> Option<ProblemId> {
        match self {
            ContextId::General => None,
            ContextId::Problem(p) => Some(p),
        }
    }
}

impl From<ProblemId> for ContextId {
    fn from(problem: ProblemId) -> Self {
        ContextId::Problem(problem)
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContextId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == GENERAL {
            Ok(ContextId::General)
        } else {
            s.parse::<ProblemId>().map(ContextId::Problem)
        }
    }
}

impl Serialize for ContextId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContextId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = ContextId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a context id (\"general\" or a known problem id)")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(IdVisitor)
    }
}
