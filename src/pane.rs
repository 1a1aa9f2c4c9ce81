//! Pane identifiers
//!
//! A pane is a display surface on the server, addressed by an opaque string.
//! The client never tracks panes; it only generates fresh ids and hands them
//! back so callers can update the same pane later.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix of client-generated pane ids
pub const PANE_ID_PREFIX: &str = "pane_";

/// Opaque identifier of a display pane
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaneId(String);

impl PaneId {
    /// Generate a fresh id of the form `pane_<uuid-v4>`
    ///
    /// # Examples
    ///
    /// ```
    /// use display_client::pane::PaneId;
    ///
    /// let a = PaneId::generate();
    /// let b = PaneId::generate();
    /// assert!(a.as_str().starts_with("pane_"));
    /// assert_ne!(a, b);
    /// ```
    pub fn generate() -> Self {
        PaneId(format!("{}{}", PANE_ID_PREFIX, Uuid::new_v4()))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id, returning the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PaneId {
    fn from(id: String) -> Self {
        PaneId(id)
    }
}

impl From<&str> for PaneId {
    fn from(id: &str) -> Self {
        PaneId(id.to_string())
    }
}

impl AsRef<str> for PaneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Use the caller's pane id, or generate one if it is missing or empty
pub(crate) fn resolve(win: Option<&PaneId>) -> PaneId {
    win.filter(|win| !win.as_str().is_empty())
        .cloned()
        .unwrap_or_else(PaneId::generate)
}
