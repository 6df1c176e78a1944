//! Autocompletion for the requirement editor.
//!
//! Candidates come back in pool order, unsorted. A blank prefix yields no
//! candidates.

use tracing::debug;

use crate::models::requirement::non_blank;
use crate::pool::ResourcePool;

/// Labels in the pool starting with `prefix`.
pub fn suggest_labels<P>(pool: &P, prefix: Option<&str>) -> Vec<String>
where
    P: ResourcePool + ?Sized,
{
    let Some(prefix) = non_blank(prefix) else {
        return Vec::new();
    };
    let candidates: Vec<String> = pool
        .labels()
        .into_iter()
        .filter(|label| label.starts_with(prefix))
        .collect();
    debug!(prefix, count = candidates.len(), "label suggestions");
    candidates
}

/// Resource names in the pool starting with `prefix`.
pub fn suggest_resource_names<P>(pool: &P, prefix: Option<&str>) -> Vec<String>
where
    P: ResourcePool + ?Sized,
{
    let Some(prefix) = non_blank(prefix) else {
        return Vec::new();
    };
    let candidates: Vec<String> = pool
        .resources()
        .into_iter()
        .map(|r| r.name)
        .filter(|name| name.starts_with(prefix))
        .collect();
    debug!(prefix, count = candidates.len(), "resource name suggestions");
    candidates
}
