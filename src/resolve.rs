//! Resolution of a requirement to concrete resources.
//!
//! The lock engine resolves a requirement at acquisition time, against the
//! pool as it is then. Resolution yields the candidate resources in a stable
//! order and how many of them must be reserved. Nothing is locked here.
//!
//! # Algorithm
//! - By name: the named resources, in the order written.
//! - By label: pool resources carrying the label, in pool order.
//! - By script: pool resources the evaluator accepts, in pool order.
//!
//! The count comes from the stored cardinality alone; the pool is read at
//! most once per call.

use tracing::{debug, warn};

use crate::error::{ResolveError, ScriptError};
use crate::models::{Cardinality, RequiredResources, Resource, SecureScript, Selection};
use crate::pool::ResourcePool;

/// Evaluates label scripts against resources.
///
/// Implemented by the embedding scripting engine; the script text is opaque
/// to this crate.
pub trait ScriptEvaluator: Send + Sync {
    /// Whether `resource` belongs to the set `script` describes.
    fn matches(&self, script: &SecureScript, resource: &Resource) -> Result<bool, ScriptError>;
}

impl<F> ScriptEvaluator for F
where
    F: Fn(&SecureScript, &Resource) -> Result<bool, ScriptError> + Send + Sync,
{
    fn matches(&self, script: &SecureScript, resource: &Resource) -> Result<bool, ScriptError> {
        self(script, resource)
    }
}

/// A requirement resolved against a pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Resource names that satisfy the selection.
    pub candidates: Vec<String>,
    /// How many candidates must be reserved.
    pub required: usize,
    /// Variable that receives the reserved names, if configured.
    pub variable: Option<String>,
}

impl Resolution {
    /// Whether every candidate must be reserved.
    pub fn takes_all(&self) -> bool {
        self.required == self.candidates.len()
    }
}

/// Resolves `requirement` against the current pool.
pub fn resolve<P, E>(
    requirement: &RequiredResources,
    pool: &P,
    evaluator: &E,
) -> Result<Resolution, ResolveError>
where
    P: ResourcePool + ?Sized,
    E: ScriptEvaluator + ?Sized,
{
    let cardinality = requirement.cardinality()?;

    let candidates = match requirement.selection() {
        Selection::Unset => return Err(ResolveError::NoSelection),
        Selection::Conflicting(fields) => return Err(ResolveError::Conflicting(fields)),
        Selection::ByName(names) => {
            let resources = pool.resources();
            let unknown: Vec<String> = names
                .iter()
                .filter(|name| !resources.iter().any(|r| &r.name == *name))
                .cloned()
                .collect();
            if !unknown.is_empty() {
                return Err(ResolveError::UnknownResources(unknown));
            }
            names
        }
        Selection::ByLabel(label) => pool
            .resources()
            .into_iter()
            .filter(|r| r.has_label(&label))
            .map(|r| r.name)
            .collect(),
        Selection::ByScript(script) => pool
            .resources()
            .into_iter()
            .filter(|r| match evaluator.matches(&script, r) {
                Ok(matched) => matched,
                Err(e) => {
                    warn!(error = %e, "label script failed, treating resource as unmatched");
                    false
                }
            })
            .map(|r| r.name)
            .collect(),
    };

    let required = match cardinality {
        Cardinality::All => candidates.len(),
        Cardinality::Exactly(n) => n as usize,
    };
    if required > candidates.len() {
        return Err(ResolveError::Insufficient {
            requested: required,
            available: candidates.len(),
        });
    }

    debug!(
        candidates = candidates.len(),
        required, "resolved resource requirement"
    );
    Ok(Resolution {
        candidates,
        required,
        variable: requirement.resource_names_var().map(str::to_string),
    })
}
