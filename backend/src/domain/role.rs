//! Role value records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named role granted to a user.
///
/// Roles are immutable value records: equality, ordering, and hashing follow
/// the canonical name, so users can hold them in ordered sets. Canonical
/// records come from the role lookup port; signup payloads carry requested
/// names that are resolved before storage.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    name: String,
}

impl Role {
    /// Create a role with the given canonical name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Canonical role name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
