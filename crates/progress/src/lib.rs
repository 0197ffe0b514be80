//! Progress tracking.
//!
//! The per-context status store and the completion calculator derived
//! from it.

#![warn(missing_docs)]

pub mod completion;
pub mod tracker;

pub use completion::{compute_progress, snapshot, ProgressSnapshot};
pub use tracker::ContextStore;
