//! String resource tables
//!
//! A [`ResourceTable`] is the in-process [`MessageResolver`]: a map from
//! resource id to localized text, typically loaded from a JSON document per
//! locale:
//!
//! ```json
//! { "42": "Field is required", "43": "Too short" }
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::MessageResolver;

/// Errors from loading a resource table.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// The resource file could not be read.
    #[error("failed to read resource file {}: {source}", path.display())]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not an object of id → string.
    #[error("invalid resource document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Localized strings keyed by resource id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceTable {
    strings: HashMap<i32, String>,
}

impl ResourceTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a string.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, id: i32, text: impl Into<String>) -> Self {
        self.insert(id, text);
        self
    }

    /// Adds or replaces a string, returning the previous one.
    pub fn insert(&mut self, id: i32, text: impl Into<String>) -> Option<String> {
        self.strings.insert(id, text.into())
    }

    /// Looks up a string.
    #[must_use]
    pub fn get(&self, id: i32) -> Option<&str> {
        self.strings.get(&id).map(String::as_str)
    }

    /// Number of strings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Parses a JSON object mapping ids to strings.
    pub fn from_json_str(json: &str) -> Result<Self, ResourceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a JSON resource file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), strings = table.len(), "loaded resource table");
        Ok(table)
    }

    /// Copies every string from `other`, replacing existing ids.
    ///
    /// Lets a locale table be layered over a fallback table.
    pub fn merge(&mut self, other: Self) {
        self.strings.extend(other.strings);
    }
}

impl MessageResolver for ResourceTable {
    fn resolve(&self, id: i32) -> Option<Cow<'_, str>> {
        self.get(id).map(Cow::Borrowed)
    }
}

impl FromIterator<(i32, String)> for ResourceTable {
    fn from_iter<T: IntoIterator<Item = (i32, String)>>(iter: T) -> Self {
        Self {
            strings: iter.into_iter().collect(),
        }
    }
}
