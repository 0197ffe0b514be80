//! Completion metric derived from a status map.

use levermap_core::{ModuleId, ModuleStatus, StatusMap};
use serde::Serialize;

/// Completion percentage for a status map, in `[0, 100]`.
///
/// Defined as the share of modules whose status is anything other than
/// `to-learn`. A module under review counts as progressed: engagement is
/// what the metric rewards, not just mastery.
pub fn compute_progress(map: &StatusMap) -> f32 {
    let engaged = map.iter().filter(|(_, s)| *s != ModuleStatus::ToLearn).count();
    (engaged as f32 / ModuleId::COUNT as f32) * 100.0
}

/// Per-status breakdown of a context's journey.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    /// Modules fully learned.
    pub mastered: usize,
    /// Modules flagged for another pass.
    pub needs_review: usize,
    /// Modules not yet started.
    pub to_learn: usize,
    /// Completion percentage, consistent with [`compute_progress`].
    pub percentage: f32,
}

/// Count statuses and derive the completion percentage.
pub fn snapshot(map: &StatusMap) -> ProgressSnapshot {
    let mut mastered = 0;
    let mut needs_review = 0;
    let mut to_learn = 0;
    for (_, status) in map.iter() {
        match status {
            ModuleStatus::Mastered => mastered += 1,
            ModuleStatus::NeedsReview => needs_review += 1,
            ModuleStatus::ToLearn => to_learn += 1,
        }
    }

    ProgressSnapshot {
        mastered,
        needs_review,
        to_learn,
        percentage: compute_progress(map),
    }
}
