//! Per-job resource requirement.
//!
//! A requirement is stored as five raw fields exactly as the user (or an
//! older version of the configuration) wrote them. Nothing is validated at
//! construction: an invalid requirement must still load so the editor can
//! show it and explain what is wrong.
//!
//! # Selection Modes
//!
//! | Mode | Stored as | Meaning |
//! |------|-----------|---------|
//! | By name | `resourceNames` | these exact resources |
//! | By label | `labelName` | resources carrying the label |
//! | By script | `script` | resources the script accepts |
//!
//! [`RequiredResources::selection`] folds the raw fields into a
//! [`Selection`], which also represents the unset and conflicting cases.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SecureScript;
use crate::error::RequirementError;
use crate::migration;

/// The resources a job must reserve before it runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredRequirement")]
pub struct RequiredResources {
    resource_names: Option<String>,
    resource_names_var: Option<String>,
    resource_number: Option<String>,
    label_name: Option<String>,
    script: Option<SecureScript>,
}

/// Raw stored layout, before legacy migration.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRequirement {
    resource_names: Option<String>,
    resource_names_var: Option<String>,
    resource_number: Option<String>,
    label_name: Option<String>,
    script: Option<SecureScript>,
}

impl From<StoredRequirement> for RequiredResources {
    fn from(stored: StoredRequirement) -> Self {
        migration::migrate_if_legacy(RequiredResources {
            resource_names: stored.resource_names,
            resource_names_var: stored.resource_names_var,
            resource_number: stored.resource_number,
            label_name: stored.label_name,
            script: stored.script,
        })
    }
}

/// A requirement form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Whitespace-separated resource names.
    ResourceNames,
    /// Environment variable receiving the reserved names.
    ResourceNamesVar,
    /// Requested count.
    ResourceNumber,
    /// Static label.
    LabelName,
    /// Label script.
    Script,
}

impl Field {
    /// The stored/form key of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ResourceNames => "resourceNames",
            Field::ResourceNamesVar => "resourceNamesVar",
            Field::ResourceNumber => "resourceNumber",
            Field::LabelName => "labelName",
            Field::Script => "script",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a requirement picks its resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Explicit resource names, in the order written.
    ByName(Vec<String>),
    /// Every resource carrying this label.
    ByLabel(String),
    /// Every resource the script accepts.
    ByScript(SecureScript),
    /// Nothing selected.
    Unset,
    /// More than one mode populated. Kept so stored configurations that
    /// predate validation can still be loaded and fixed.
    Conflicting(Vec<Field>),
}

/// How many of the selected resources must be reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Every selected resource.
    All,
    /// Exactly this many.
    Exactly(u32),
}

impl RequiredResources {
    /// Creates a requirement from raw field values, stored as given.
    pub fn new(
        resource_names: Option<String>,
        resource_names_var: Option<String>,
        resource_number: Option<String>,
        label_name: Option<String>,
        script: Option<SecureScript>,
    ) -> Self {
        Self {
            resource_names,
            resource_names_var,
            resource_number,
            label_name,
            script,
        }
    }

    /// Creates a requirement without a label script.
    pub fn without_script(
        resource_names: Option<String>,
        resource_names_var: Option<String>,
        resource_number: Option<String>,
        label_name: Option<String>,
    ) -> Self {
        Self::new(
            resource_names,
            resource_names_var,
            resource_number,
            label_name,
            None,
        )
    }

    /// Requirement for explicit resource names.
    pub fn by_names(names: impl Into<String>) -> Self {
        Self::without_script(Some(names.into()), None, None, None)
    }

    /// Requirement for a static label.
    pub fn by_label(label: impl Into<String>) -> Self {
        Self::without_script(None, None, None, Some(label.into()))
    }

    /// Requirement for a label script.
    pub fn by_script(script: SecureScript) -> Self {
        Self::new(None, None, None, None, Some(script))
    }

    /// Returns a copy with the requested count set.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.resource_number = Some(number.into());
        self
    }

    /// Returns a copy with the names variable set.
    pub fn with_names_var(mut self, var: impl Into<String>) -> Self {
        self.resource_names_var = Some(var.into());
        self
    }

    /// Parsed resource names, in order, duplicates kept.
    ///
    /// Empty when the raw field is absent or blank.
    pub fn resources(&self) -> Vec<String> {
        split_names(self.resource_names.as_deref())
    }

    /// Raw resource names.
    pub fn resource_names(&self) -> Option<&str> {
        self.resource_names.as_deref()
    }

    /// Raw names-variable identifier.
    pub fn resource_names_var(&self) -> Option<&str> {
        self.resource_names_var.as_deref()
    }

    /// Raw requested count.
    pub fn resource_number(&self) -> Option<&str> {
        self.resource_number.as_deref()
    }

    /// Raw label.
    pub fn label_name(&self) -> Option<&str> {
        self.label_name.as_deref()
    }

    /// Label script, if any.
    pub fn script(&self) -> Option<&SecureScript> {
        self.script.as_ref()
    }

    /// Folds the raw fields into a single selection mode.
    pub fn selection(&self) -> Selection {
        let names = self.resources();
        let label = non_blank(self.label_name.as_deref());
        let script = self.script.as_ref().filter(|s| !s.is_blank());

        match (names.is_empty(), label, script) {
            (true, None, None) => Selection::Unset,
            (false, None, None) => Selection::ByName(names),
            (true, Some(label), None) => Selection::ByLabel(label.to_string()),
            (true, None, Some(script)) => Selection::ByScript(script.clone()),
            (names_empty, label, script) => {
                let mut populated = Vec::new();
                if !names_empty {
                    populated.push(Field::ResourceNames);
                }
                if label.is_some() {
                    populated.push(Field::LabelName);
                }
                if script.is_some() {
                    populated.push(Field::Script);
                }
                Selection::Conflicting(populated)
            }
        }
    }

    /// Parses the requested count.
    ///
    /// Blank and `0` both mean every selected resource.
    pub fn cardinality(&self) -> Result<Cardinality, RequirementError> {
        parse_cardinality(self.resource_number.as_deref())
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        Option<String>,
        Option<String>,
        Option<String>,
        Option<String>,
        Option<SecureScript>,
    ) {
        (
            self.resource_names,
            self.resource_names_var,
            self.resource_number,
            self.label_name,
            self.script,
        )
    }
}

/// Trims `value`, mapping blank input to `None`.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Splits on runs of whitespace; blank input yields no names.
pub(crate) fn split_names(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| v.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

pub(crate) fn parse_cardinality(value: Option<&str>) -> Result<Cardinality, RequirementError> {
    let Some(number) = non_blank(value) else {
        return Ok(Cardinality::All);
    };
    // same range as a signed 32-bit count; negatives are rejected
    match number.parse::<i32>().map(u32::try_from) {
        Ok(Ok(0)) => Ok(Cardinality::All),
        Ok(Ok(n)) => Ok(Cardinality::Exactly(n)),
        _ => Err(RequirementError::CardinalityParse(number.to_string())),
    }
}
