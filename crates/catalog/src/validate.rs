//! Catalog integrity checks.

use levermap_core::{ModuleId, ProblemId};

use crate::{modules, problems};

/// A structural defect in the static catalogs.
///
/// These are authoring errors, not runtime conditions: the catalogs are
/// compiled in, so any variant here means the content tables were edited
/// incorrectly. [`validate`] is run by the test suite to keep that gate
/// closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A problem's blueprint table skips a module.
    #[error("problem `{problem}` has no blueprint for module {module}")]
    MissingBlueprint {
        /// The problem with the gap.
        problem: ProblemId,
        /// The uncovered module.
        module: ModuleId,
    },

    /// A problem's blueprint table lists a module twice.
    #[error("problem `{problem}` has more than one blueprint for module {module}")]
    DuplicateBlueprint {
        /// The problem with the duplicate.
        problem: ProblemId,
        /// The doubly-covered module.
        module: ModuleId,
    },

    /// The module table is not in learning order.
    #[error("module table entry {position} holds module {found}")]
    MisplacedModule {
        /// Index into the module table.
        position: usize,
        /// The module actually found there.
        found: ModuleId,
    },

    /// The problem table is not in canonical order.
    #[error("problem table entry {position} holds problem `{found}`")]
    MisplacedProblem {
        /// Index into the problem table.
        position: usize,
        /// The problem actually found there.
        found: ProblemId,
    },
}

/// Check every catalog invariant: tables in canonical order, and exactly
/// one blueprint per (problem, module) pair.
pub fn validate() -> Result<(), CatalogError> {
    for (position, def) in modules().iter().enumerate() {
        if def.id.index() != position {
            return Err(CatalogError::MisplacedModule { position, found: def.id });
        }
    }

    for (position, def) in problems().iter().enumerate() {
        if ProblemId::ALL[position] != def.id {
            return Err(CatalogError::MisplacedProblem { position, found: def.id });
        }

        for module in ModuleId::ALL {
            match def.blueprints.iter().filter(|(id, _)| *id == module).count() {
                0 => return Err(CatalogError::MissingBlueprint { problem: def.id, module }),
                1 => {}
                _ => return Err(CatalogError::DuplicateBlueprint { problem: def.id, module }),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalogs_are_well_formed() {
        assert_eq!(validate(), Ok(()));
    }
}
