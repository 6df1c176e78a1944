//! Lockable resource model.
//!
//! A resource is a uniquely named, lockable entity in a shared pool
//! (a device, a license seat, a test environment). Resources may carry
//! labels, which allow a job to request "any N resources tagged X"
//! instead of naming them one by one.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named resource in the pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource name (case-sensitive).
    pub name: String,
    /// Labels attached to this resource, in declaration order.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Free-form properties, exposed to label scripts.
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

impl Resource {
    /// Creates an unlabeled resource.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
            properties: HashMap::new(),
        }
    }

    /// Adds a label. Duplicates are ignored.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        if !self.labels.contains(&label) {
            self.labels.push(label);
        }
        self
    }

    /// Adds every whitespace-separated label in `labels`.
    pub fn with_labels(self, labels: &str) -> Self {
        labels
            .split_whitespace()
            .fold(self, |r, label| r.with_label(label))
    }

    /// Adds a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Whether this resource carries the given label (exact match).
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_builder() {
        let r = Resource::new("printer-1")
            .with_label("printer")
            .with_label("floor2")
            .with_property("ip", "10.0.0.7");

        assert_eq!(r.name, "printer-1");
        assert_eq!(r.labels, vec!["printer", "floor2"]);
        assert!(r.has_label("printer"));
        assert!(!r.has_label("Printer"));
        assert_eq!(r.properties.get("ip"), Some(&"10.0.0.7".to_string()));
    }

    #[test]
    fn test_duplicate_labels_ignored() {
        let r = Resource::new("A").with_labels("x  y\tx");
        assert_eq!(r.labels, vec!["x", "y"]);
    }

    #[test]
    fn test_deserialize_defaults() {
        let r: Resource = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert_eq!(r, Resource::new("A"));
    }
}
