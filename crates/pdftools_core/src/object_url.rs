use std::fmt;

use serde::{Deserialize, Serialize};

/// Revocable handle to bytes held by the object store.
///
/// The core never dereferences these; it only tracks who owns each one and
/// emits [`crate::Effect::Release`] when ownership ends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub const SCHEME: &'static str = "blob:pdftools/";

    /// Builds the canonical reference for the `id`-th object.
    pub fn from_id(id: u64) -> Self {
        Self(format!("{}{id}", Self::SCHEME))
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
