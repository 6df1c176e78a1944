//! Sandboxed label scripts.
//!
//! A label script is an expression evaluated once per pool resource; it
//! answers whether that resource belongs to the requested set. This crate
//! stores and moves scripts around but never interprets them: evaluation
//! belongs to an external engine (see [`crate::resolve::ScriptEvaluator`]).

use serde::{Deserialize, Serialize};

/// Who vouched for a script, and on behalf of which item.
///
/// An empty context is administrative: the script is trusted without a
/// per-user approval record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalContext {
    /// User who submitted the script.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Item (job) the approval is keyed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_item: Option<String>,
}

impl ApprovalContext {
    /// The administrative context (no user, no key item).
    pub fn administrative() -> Self {
        Self::default()
    }

    /// Sets the submitting user.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Keys the approval to an item.
    pub fn with_key_item(mut self, item: impl Into<String>) -> Self {
        self.key_item = Some(item.into());
        self
    }

    /// Whether this is the administrative context.
    pub fn is_administrative(&self) -> bool {
        self.user.is_none() && self.key_item.is_none()
    }
}

/// A script body plus its sandbox and approval metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecureScript {
    /// Script source text.
    #[serde(rename = "script")]
    pub body: String,
    /// Whether the script runs inside the sandbox.
    #[serde(default)]
    pub sandbox: bool,
    /// Approval metadata.
    #[serde(default)]
    pub approval: ApprovalContext,
}

impl SecureScript {
    /// Creates a script with an administrative approval context.
    pub fn new(body: impl Into<String>, sandbox: bool) -> Self {
        Self {
            body: body.into(),
            sandbox,
            approval: ApprovalContext::administrative(),
        }
    }

    /// Returns this script bound to the given approval context.
    pub fn configuring(mut self, approval: ApprovalContext) -> Self {
        self.approval = approval;
        self
    }

    /// Returns this script with its approval keyed to `item`.
    ///
    /// Any submitting user already recorded is kept.
    pub fn configuring_with_key_item(mut self, item: impl Into<String>) -> Self {
        self.approval.key_item = Some(item.into());
        self
    }

    /// Whether the body is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }
}
