//! Legacy scripted-label migration.
//!
//! Older configurations stored a label script as an ordinary label
//! prefixed with [`SCRIPT_LABEL_MARKER`]. On load such a requirement is
//! rewritten into the scripted form: the label is cleared and the text after
//! the marker becomes the script body. Scripts recovered this way were
//! approved when first stored, so they carry the administrative approval
//! context.
//!
//! Migration runs at the deserialization boundary of
//! [`RequiredResources`]; calling it again is a no-op because a migrated
//! requirement always has a script.

use tracing::info;

use crate::models::{ApprovalContext, RequiredResources, SecureScript};

/// Prefix that marked a label as an embedded script.
pub const SCRIPT_LABEL_MARKER: &str = "groovy:";

/// Whether `requirement` still uses the marker-prefixed label encoding.
pub fn is_legacy_label(requirement: &RequiredResources) -> bool {
    requirement.script().is_none()
        && requirement
            .label_name()
            .is_some_and(|label| label.starts_with(SCRIPT_LABEL_MARKER))
}

/// Upgrades a legacy-encoded requirement; anything else is returned as is.
pub fn migrate_if_legacy(requirement: RequiredResources) -> RequiredResources {
    if !is_legacy_label(&requirement) {
        return requirement;
    }

    let (names, names_var, number, label, _) = requirement.into_parts();
    let body = label
        .as_deref()
        .and_then(|l| l.strip_prefix(SCRIPT_LABEL_MARKER))
        .unwrap_or_default()
        .to_string();
    info!(
        body_len = body.len(),
        "migrating marker-prefixed label to label script"
    );

    let script = SecureScript::new(body, false).configuring(ApprovalContext::administrative());
    RequiredResources::new(names, names_var, number, None, Some(script))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy(label: &str) -> RequiredResources {
        RequiredResources::without_script(
            None,
            Some("VAR".into()),
            Some("2".into()),
            Some(label.into()),
        )
    }

    #[test]
    fn test_migrates_marker_label() {
        let migrated = migrate_if_legacy(legacy("groovy:resourceName.startsWith('db')"));

        assert_eq!(migrated.label_name(), None);
        let script = migrated.script().unwrap();
        assert_eq!(script.body, "resourceName.startsWith('db')");
        assert!(!script.sandbox);
        assert!(script.approval.is_administrative());
        assert_eq!(migrated.resource_names_var(), Some("VAR"));
        assert_eq!(migrated.resource_number(), Some("2"));
    }

    #[test]
    fn test_marker_only_gives_empty_body() {
        let migrated = migrate_if_legacy(legacy("groovy:"));
        assert_eq!(migrated.script().map(|s| s.body.as_str()), Some(""));
        assert_eq!(migrated.label_name(), None);
    }

    #[test]
    fn test_plain_label_unchanged() {
        let req = legacy("linux");
        assert_eq!(migrate_if_legacy(req.clone()), req);

        // marker must be a prefix
        let req = legacy(" groovy:true");
        assert_eq!(migrate_if_legacy(req.clone()), req);
    }

    #[test]
    fn test_existing_script_wins() {
        let req = RequiredResources::new(
            None,
            None,
            None,
            Some("groovy:true".into()),
            Some(SecureScript::new("false", true)),
        );
        assert!(!is_legacy_label(&req));
        assert_eq!(migrate_if_legacy(req.clone()), req);
    }

    #[test]
    fn test_idempotent() {
        for req in [
            legacy("groovy:true"),
            legacy("groovy:groovy:nested"),
            legacy("linux"),
            RequiredResources::by_names("A B"),
            RequiredResources::default(),
        ] {
            let once = migrate_if_legacy(req);
            let twice = migrate_if_legacy(once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_migrates_on_deserialize() {
        let req: RequiredResources = serde_json::from_str(
            r#"{"resourceNames":null,"resourceNamesVar":"V",
                "resourceNumber":"1","labelName":"groovy:true"}"#,
        )
        .unwrap();

        assert!(!is_legacy_label(&req));
        assert_eq!(req.label_name(), None);
        assert_eq!(req.script().unwrap().body, "true");
    }

    #[test]
    fn test_migrated_form_survives_reload() {
        let req: RequiredResources =
            serde_json::from_str(r#"{"labelName":"groovy:true"}"#).unwrap();
        let stored = serde_json::to_string(&req).unwrap();
        let reloaded: RequiredResources = serde_json::from_str(&stored).unwrap();
        assert_eq!(reloaded, req);
    }
}
