//! Physical-station identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical identity of a physical station.
///
/// A physical station served by several lines appears in the line-expanded
/// graph as several nodes, all sharing one `StationKey`. The key is produced
/// upstream by the synonym-based name normalizer and is stable across
/// spelling variants, so two keys compare equal exactly when they denote the
/// same physical station.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationKey;
///
/// let a = StationKey::new("chatelet");
/// let b = StationKey::new("chatelet");
/// assert_eq!(a, b);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationKey(String);

impl StationKey {
    /// Create a station key from an already-canonicalized name.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationKey({})", self.0)
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
