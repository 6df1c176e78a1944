//! Read-only access to the resource pool.
//!
//! The pool itself (inventory, locking, queueing) lives elsewhere. This
//! crate only reads it, one call at a time, and never caches what it sees:
//! the pool may change between any two calls.
//!
//! # Usage
//!
//! ```
//! use lockable_requirements::models::Resource;
//! use lockable_requirements::pool::{PoolSnapshot, ResourcePool};
//!
//! let pool = PoolSnapshot::new()
//!     .with_resource(Resource::new("db-1").with_label("db"))
//!     .with_resource(Resource::new("db-2").with_label("db"));
//!
//! assert!(pool.resource_exists("db-1"));
//! assert_eq!(pool.labels(), vec!["db".to_string()]);
//! ```

use crate::models::Resource;

/// Point-in-time view of the resource pool.
///
/// Only [`resources`](ResourcePool::resources) is required; the label
/// queries are derived from it unless the pool can answer them directly.
/// A pool that cannot be read should return an empty list: callers treat
/// that as "nothing found" and do not retry.
pub trait ResourcePool: Send + Sync {
    /// All known resources, in pool order.
    fn resources(&self) -> Vec<Resource>;

    /// Union of all resource labels, first-seen order, no duplicates.
    fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for resource in self.resources() {
            for label in resource.labels {
                if !labels.contains(&label) {
                    labels.push(label);
                }
            }
        }
        labels
    }

    /// Whether any resource carries `label`.
    fn is_valid_label(&self, label: &str) -> bool {
        self.resources().iter().any(|r| r.has_label(label))
    }

    /// Whether a resource named `name` exists (case-sensitive).
    fn resource_exists(&self, name: &str) -> bool {
        self.resource(name).is_some()
    }

    /// Looks up a resource by name.
    fn resource(&self, name: &str) -> Option<Resource> {
        self.resources().into_iter().find(|r| r.name == name)
    }
}

/// An in-memory pool snapshot.
#[derive(Debug, Clone, Default)]
pub struct PoolSnapshot {
    resources: Vec<Resource>,
}

impl PoolSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot from existing resources.
    pub fn from_resources(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    /// Adds a resource.
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// Number of resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourcePool for PoolSnapshot {
    fn resources(&self) -> Vec<Resource> {
        self.resources.clone()
    }

    fn resource(&self, name: &str) -> Option<Resource> {
        self.resources.iter().find(|r| r.name == name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pool() -> PoolSnapshot {
        PoolSnapshot::from_resources(vec![
            Resource::new("A").with_labels("linux x86"),
            Resource::new("B").with_labels("windows x86"),
            Resource::new("C"),
        ])
    }

    #[test]
    fn test_labels_union_in_pool_order() {
        assert_eq!(sample_pool().labels(), vec!["linux", "x86", "windows"]);
    }

    #[test]
    fn test_label_validity() {
        let pool = sample_pool();
        assert!(pool.is_valid_label("x86"));
        assert!(!pool.is_valid_label("X86"));
        assert!(!pool.is_valid_label(""));
    }

    #[test]
    fn test_resource_lookup() {
        let pool = sample_pool();
        assert!(pool.resource_exists("C"));
        assert!(!pool.resource_exists("c"));
        assert_eq!(pool.resource("B").map(|r| r.labels.len()), Some(2));
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_empty_pool() {
        let pool = PoolSnapshot::new();
        assert!(pool.is_empty());
        assert!(pool.labels().is_empty());
        assert!(!pool.resource_exists("A"));
    }
}
