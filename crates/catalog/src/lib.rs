//! Static content catalogs for the learning map.
//!
//! Everything in this crate is fixed, read-only data: the six analytical
//! modules, the six business-problem scenarios with their per-module
//! blueprints, the case-study walkthroughs, and the metric glossary.
//! Nothing here is loaded or mutated at runtime.

mod cases;
mod glossary;
mod modules;
mod problems;
mod validate;

pub use cases::{case, cases, CaseStudy};
pub use glossary::{define, glossary};
pub use modules::{module, modules, ModuleDefinition, ModuleIcon};
pub use problems::{problem, problems, Blueprint, ProblemDefinition, ProblemIcon};
pub use validate::{validate, CatalogError};
