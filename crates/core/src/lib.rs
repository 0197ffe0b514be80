//! LeverMap core data models.
//!
//! This crate defines the fundamental data structures that power the
//! learning-map progress tracker: module and problem identities, per-module
//! learning statuses, and the per-context status registry.

#![warn(missing_docs)]

// Closed identity sets
mod context;
mod module;

// Status tracking
mod registry;
mod status_map;

// Errors
mod error;

// Re-exports
pub use context::{ContextId, ProblemId};
pub use error::ParseError;
pub use module::{ModuleId, ModuleStatus};
pub use registry::ContextRegistry;
pub use status_map::StatusMap;
