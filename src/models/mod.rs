//! Requirement domain models.
//!
//! Provides the value types a job's resource requirement is built from.
//! The pool's own bookkeeping (locks, queues, owners) is not modelled here.
//!
//! # Domain Mappings
//!
//! | Type | Meaning |
//! |------|---------|
//! | Resource | A named, lockable pool entry with labels |
//! | SecureScript | Label script plus sandbox/approval metadata |
//! | RequiredResources | What a job must reserve before it runs |
//! | Selection | Which of names, label, or script picks the resources |

pub(crate) mod requirement;
mod resource;
mod script;

pub use requirement::{Cardinality, Field, RequiredResources, Selection};
pub use resource::Resource;
pub use script::{ApprovalContext, SecureScript};
