//! Durable storage for LeverMap state.
//!
//! This crate provides a trait-based string-keyed store with a JSON-file
//! reference implementation, plus the persistence adapter that maps the
//! two durable entries (status registry, active context) onto it.

#![warn(missing_docs)]

pub mod adapter;
pub mod json_store;
pub mod memory;
pub mod trait_;

pub use adapter::{PersistenceAdapter, ACTIVE_CONTEXT_KEY, REGISTRY_KEY};
pub use json_store::JsonFileStore;
pub use memory::MemoryStore;
pub use trait_::{Result, StateStore, StorageError};
