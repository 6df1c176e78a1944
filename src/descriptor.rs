//! Job-property descriptor.
//!
//! Describes the requirement as a configurable job property: its display
//! name, which job kinds accept it, and how a submitted configuration form
//! is bound into a [`RequiredResources`].
//!
//! The form arrives as a JSON object. The requirement's fields sit under
//! [`FORM_KEY`]; when that section is missing the job has no requirement.

use serde_json::Value;
use tracing::debug;

use crate::error::FormError;
use crate::models::{Field, RequiredResources, SecureScript};

/// Name shown in the job configuration page.
pub const DISPLAY_NAME: &str = "Required Lockable Resources";

/// Form section holding the requirement fields.
pub const FORM_KEY: &str = "required-lockable-resources";

/// Kind of job a property may be attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobKind {
    /// Classic project (freestyle, matrix, ...).
    Project,
    /// Pipeline job; locks are taken from the pipeline script instead.
    Pipeline,
    /// Domain-specific kind.
    Custom(String),
}

/// Whether jobs of `kind` can carry a resource requirement.
pub fn is_applicable(kind: &JobKind) -> bool {
    matches!(kind, JobKind::Project)
}

/// Binds a submitted job form into a requirement.
///
/// Returns `Ok(None)` when the form has no requirement section. A submitted
/// script is keyed to `job` for approval.
pub fn from_form(form: &Value, job: &str) -> Result<Option<RequiredResources>, FormError> {
    let Some(section) = form.get(FORM_KEY) else {
        debug!(job, "no resource requirement in form");
        return Ok(None);
    };
    if !section.is_object() {
        return Err(FormError::NotAnObject(FORM_KEY.to_string()));
    }

    let script = match section.get(Field::Script.as_str()) {
        None | Some(Value::Null) => None,
        Some(value) => {
            let script: SecureScript = serde_json::from_value(value.clone())?;
            Some(script.configuring_with_key_item(job))
        }
    };

    Ok(Some(RequiredResources::new(
        string_field(section, Field::ResourceNames)?,
        string_field(section, Field::ResourceNamesVar)?,
        string_field(section, Field::ResourceNumber)?,
        string_field(section, Field::LabelName)?,
        script,
    )))
}

fn string_field(section: &Value, field: Field) -> Result<Option<String>, FormError> {
    match section.get(field.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(FormError::NotAString {
            field: field.as_str(),
            found: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_applicability() {
        assert!(is_applicable(&JobKind::Project));
        assert!(!is_applicable(&JobKind::Pipeline));
        assert!(!is_applicable(&JobKind::Custom("folder".into())));
    }

    #[test]
    fn test_form_without_section() {
        let form = json!({"description": "nightly"});
        assert!(from_form(&form, "nightly").unwrap().is_none());
    }

    #[test]
    fn test_form_binds_raw_values() {
        let form = json!({
            "required-lockable-resources": {
                "resourceNames": " A  B ",
                "resourceNamesVar": "LOCKED",
                "resourceNumber": "1",
                "labelName": ""
            }
        });
        let req = from_form(&form, "nightly").unwrap().unwrap();

        assert_eq!(req.resource_names(), Some(" A  B "));
        assert_eq!(req.resource_names_var(), Some("LOCKED"));
        assert_eq!(req.resource_number(), Some("1"));
        assert_eq!(req.label_name(), Some(""));
        assert!(req.script().is_none());
        assert_eq!(req.resources(), vec!["A", "B"]);
    }

    #[test]
    fn test_form_keys_script_to_job() {
        let form = json!({
            "required-lockable-resources": {
                "script": {"script": "zone == 'eu'", "sandbox": true}
            }
        });
        let req = from_form(&form, "deploy-eu").unwrap().unwrap();
        let script = req.script().unwrap();

        assert_eq!(script.body, "zone == 'eu'");
        assert!(script.sandbox);
        assert_eq!(script.approval.key_item.as_deref(), Some("deploy-eu"));
    }

    #[test]
    fn test_form_rejects_bad_shapes() {
        let form = json!({ "required-lockable-resources": "A B" });
        assert!(matches!(from_form(&form, "j"), Err(FormError::NotAnObject(_))));

        let form = json!({ "required-lockable-resources": {"resourceNumber": 3} });
        let err = from_form(&form, "j").unwrap_err();
        assert!(matches!(err, FormError::NotAString { field: "resourceNumber", .. }));

        let form = json!({ "required-lockable-resources": {"script": {"sandbox": true}} });
        assert!(matches!(from_form(&form, "j"), Err(FormError::Script(_))));
    }
}
