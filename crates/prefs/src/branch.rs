//! Namespace configuration for fully-qualified preference names.
//!
//! Responsibilities:
//! - Build `"<root>.<namespace>.<key>"` paths for the host store.
//! - Read an optional namespace override from the environment.
//!
//! Invariants:
//! - Path building is pure and total once a branch is constructed.
//! - A namespace is a single non-empty path segment (no separator, no whitespace).
//! - Empty or whitespace-only environment values are treated as unset.

use crate::constants::{
    DEFAULT_APP_NAMESPACE, DEFAULT_PREF_ROOT, NAMESPACE_ENV_VAR, PREF_PATH_SEPARATOR,
};
use crate::error::PrefError;
use crate::registry::NoteroPref;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// The host store branch that holds the application's preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefBranch {
    prefix: String,
}

impl PrefBranch {
    /// Create a branch under the default root for `namespace`.
    pub fn new(namespace: &str) -> Result<Self, PrefError> {
        validate_namespace(namespace)?;
        Ok(Self {
            prefix: branch_prefix(namespace),
        })
    }

    /// Create the default branch, honoring `NOTERO_PREF_NAMESPACE` when set.
    pub fn from_env() -> Result<Self, PrefError> {
        match env_var_or_none(NAMESPACE_ENV_VAR) {
            Some(namespace) => {
                tracing::debug!(%namespace, "Using preference namespace from environment");
                Self::new(&namespace)
            }
            None => Ok(Self::default()),
        }
    }

    /// Fully-qualified store path for `pref`.
    pub fn full_name(&self, pref: NoteroPref) -> String {
        format!("{}{}", self.prefix, pref.as_str())
    }

    /// The branch prefix, including its trailing separator.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for PrefBranch {
    fn default() -> Self {
        Self {
            prefix: branch_prefix(DEFAULT_APP_NAMESPACE),
        }
    }
}

fn branch_prefix(namespace: &str) -> String {
    format!("{DEFAULT_PREF_ROOT}{PREF_PATH_SEPARATOR}{namespace}{PREF_PATH_SEPARATOR}")
}

fn validate_namespace(namespace: &str) -> Result<(), PrefError> {
    let message = if namespace.is_empty() {
        "must not be empty"
    } else if namespace.contains(PREF_PATH_SEPARATOR) {
        "must not contain '.'"
    } else if namespace.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else {
        return Ok(());
    };

    Err(PrefError::InvalidNamespace {
        namespace: namespace.to_string(),
        message: message.to_string(),
    })
}
