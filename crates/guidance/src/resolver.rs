//! Resolves (active context, module) pairs to the guidance to display.

use levermap_catalog::{
    module, problem, Blueprint, CatalogError, ModuleDefinition, ProblemDefinition,
};
use levermap_core::{ContextId, ModuleId};

/// What a module's detail view should show.
#[derive(Debug, Clone, Copy)]
pub enum ResolvedGuidance {
    /// The module's fixed theory content; shown when no problem is selected.
    Generic(&'static ModuleDefinition),

    /// The active problem's tailored blueprint for the module.
    Tailored {
        /// The problem providing the blueprint.
        problem: &'static ProblemDefinition,
        /// The guidance override itself.
        blueprint: &'static Blueprint,
    },
}

impl ResolvedGuidance {
    /// Whether this is problem-tailored guidance.
    pub fn is_tailored(&self) -> bool {
        matches!(self, ResolvedGuidance::Tailored { .. })
    }
}

/// Resolve the guidance for a module under the active context.
///
/// With the general context this is the module's theory content and cannot
/// fail. With a problem selected it is that problem's blueprint; a problem
/// without a blueprint for the module is a catalog defect and is reported
/// as such rather than papered over with generic content.
pub fn resolve(active: ContextId, target: ModuleId) -> Result<ResolvedGuidance, CatalogError> {
    match active {
        ContextId::General => Ok(ResolvedGuidance::Generic(module(target))),
        ContextId::Problem(id) => {
            let definition = problem(id);
            definition
                .blueprint(target)
                .map(|blueprint| ResolvedGuidance::Tailored { problem: definition, blueprint })
                .ok_or(CatalogError::MissingBlueprint { problem: id, module: target })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use levermap_core::ProblemId;

    #[test]
    fn general_context_always_resolves_theory() {
        for target in ModuleId::ALL {
            match resolve(ContextId::General, target) {
                Ok(ResolvedGuidance::Generic(def)) => assert_eq!(def.id, target),
                other => panic!("expected generic guidance, got {other:?}"),
            }
        }
    }

    #[test]
    fn every_problem_resolves_tailored_for_every_module() {
        for id in ProblemId::ALL {
            for target in ModuleId::ALL {
                let resolved = resolve(ContextId::Problem(id), target).unwrap();
                match resolved {
                    ResolvedGuidance::Tailored { problem, blueprint } => {
                        assert_eq!(problem.id, id);
                        assert!(!blueprint.title.is_empty());
                        assert!(!blueprint.advice.is_empty());
                        assert!(!blueprint.action.is_empty());
                    }
                    ResolvedGuidance::Generic(_) => {
                        panic!("{id} resolved generic content for module {target}")
                    }
                }
            }
        }
    }

    #[test]
    fn tailored_guidance_matches_the_catalog_entry() {
        let resolved =
            resolve(ContextId::Problem(ProblemId::RoiDropped), ModuleId::ProblemFraming).unwrap();
        match resolved {
            ResolvedGuidance::Tailored { blueprint, .. } => {
                assert_eq!(blueprint.title, "Framing the Drop");
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }
}
