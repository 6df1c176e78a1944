//! Resource requirements for lockable-resource pools.
//!
//! A job declares which shared resources it needs before it may run:
//! explicit names, any resources carrying a label, or the resources a
//! sandboxed label script accepts, together with how many to reserve.
//! This crate models that declaration, validates it against a pool
//! snapshot, upgrades legacy stored forms, and resolves it to concrete
//! resources. Acquiring and releasing locks is left to the pool.
//!
//! # Modules
//!
//! - **`models`**: `Resource`, `SecureScript`, `RequiredResources`, `Selection`
//! - **`pool`**: read-only `ResourcePool` accessor and an in-memory snapshot
//! - **`migration`**: rewrite of marker-prefixed labels into label scripts
//! - **`validation`**: per-field checks with user-facing messages
//! - **`lookup`**: autocompletion of labels and resource names
//! - **`resolve`**: candidate set and count for the lock engine
//! - **`descriptor`**: job-property metadata and form binding
//!
//! # Usage
//!
//! ```
//! use lockable_requirements::models::{RequiredResources, Resource};
//! use lockable_requirements::pool::PoolSnapshot;
//! use lockable_requirements::validation::validate_requirement;
//!
//! let pool = PoolSnapshot::new()
//!     .with_resource(Resource::new("A"))
//!     .with_resource(Resource::new("B"));
//!
//! let ok = RequiredResources::by_names("A B").with_number("2");
//! assert!(validate_requirement(&ok, &pool).is_ok());
//!
//! let too_many = RequiredResources::by_names("A B").with_number("3");
//! let errors = validate_requirement(&too_many, &pool).unwrap_err();
//! assert_eq!(
//!     errors[0].to_string(),
//!     "Given amount 3 is greater than amount of resources: 2."
//! );
//! ```

pub mod descriptor;
pub mod error;
pub mod lookup;
pub mod migration;
pub mod models;
pub mod pool;
pub mod resolve;
pub mod validation;

pub use error::{FormError, RequirementError, ResolveError, ScriptError};
