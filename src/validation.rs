//! Field-level validation of resource requirements.
//!
//! Each check looks at one form field (plus the sibling fields it depends
//! on) against a live pool snapshot, so the editor can report problems
//! inline as the user types. Checks:
//! - Resource names exist in the pool
//! - Label, label script, and resource names are mutually exclusive
//! - Label is carried by at least one resource
//! - Requested count parses and fits what the selection can yield
//!
//! A failed check never prevents a requirement from being stored or
//! loaded; resources come and go, and the job must stay editable.

use tracing::debug;

use crate::error::RequirementError;
use crate::models::requirement::{non_blank, parse_cardinality, split_names};
use crate::models::{Cardinality, RequiredResources};
use crate::pool::ResourcePool;

/// Result of checking a single field.
pub type FieldResult = Result<(), RequirementError>;

/// Result of checking a whole requirement.
pub type ValidationResult = Result<(), Vec<RequirementError>>;

/// Checks that every listed resource exists.
///
/// Blank input is valid. On failure, every unknown name is reported in
/// the order written.
pub fn check_resource_names<P>(value: Option<&str>, pool: &P) -> FieldResult
where
    P: ResourcePool + ?Sized,
{
    let names = split_names(value);
    if names.is_empty() {
        return Ok(());
    }

    let known = pool.resources();
    let unknown: Vec<String> = names
        .into_iter()
        .filter(|name| !known.iter().any(|r| &r.name == name))
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        debug!(?unknown, "resource names not in pool");
        Err(RequirementError::UnknownResources(unknown))
    }
}

/// Checks the label field.
///
/// A blank label is valid. A label next to resource names or a label
/// script is rejected before the pool is consulted.
pub fn check_label_name<P>(
    value: Option<&str>,
    resource_names: Option<&str>,
    script: Option<&str>,
    pool: &P,
) -> FieldResult
where
    P: ResourcePool + ?Sized,
{
    let Some(label) = non_blank(value) else {
        return Ok(());
    };
    if non_blank(resource_names).is_some() || non_blank(script).is_some() {
        return Err(RequirementError::MutuallyExclusive);
    }
    if pool.is_valid_label(label) {
        Ok(())
    } else {
        debug!(label, "label not in pool");
        Err(RequirementError::UnknownLabel(label.to_string()))
    }
}

/// Checks the requested count.
///
/// Blank and `0` mean "all" and are always valid. Otherwise the value must
/// parse, and in names mode must not exceed the number of names. Label and
/// script selections have no static bound: their size is only known once
/// resolved against the pool at lock time. With no selection at all the
/// bound is zero.
pub fn check_resource_number(
    value: Option<&str>,
    resource_names: Option<&str>,
    label_name: Option<&str>,
    script: Option<&str>,
) -> FieldResult {
    let requested = match parse_cardinality(value)? {
        Cardinality::All => return Ok(()),
        Cardinality::Exactly(n) => n,
    };

    let names = split_names(resource_names);
    let available = if !names.is_empty() {
        Some(names.len())
    } else if non_blank(label_name).is_some() || non_blank(script).is_some() {
        None
    } else {
        Some(0)
    };

    match available {
        Some(available) if requested as usize > available => {
            debug!(requested, available, "requested count exceeds selection");
            Err(RequirementError::CardinalityRange {
                requested,
                available,
            })
        }
        _ => Ok(()),
    }
}

/// Validates every field of a requirement.
///
/// # Returns
/// `Ok(())` if all fields pass, `Err(errors)` with one entry per failing
/// field, in form order (names, label, count).
pub fn validate_requirement<P>(requirement: &RequiredResources, pool: &P) -> ValidationResult
where
    P: ResourcePool + ?Sized,
{
    let names = requirement.resource_names();
    let label = requirement.label_name();
    let script = requirement
        .script()
        .filter(|s| !s.is_blank())
        .map(|s| s.body.as_str());

    let errors: Vec<RequirementError> = [
        check_resource_names(names, pool),
        check_label_name(label, names, script, pool),
        check_resource_number(requirement.resource_number(), names, label, script),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
