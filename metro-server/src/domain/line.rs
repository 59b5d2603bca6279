//! Line labels and their canonical form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw line label as stored in the source data, e.g. `"RER C 2"`.
///
/// Branch segments of one logical line carry distinct raw labels
/// (`"RER C 1"`, `"RER C 2"`). The raw label is what rides and line-change
/// penalties compare against; loop detection uses [`CanonicalLine`] instead.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineLabel(String);

impl LineLabel {
    /// Create a line label from the raw source string.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the raw label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reduce this label to its canonical loop-detection identity.
    pub fn canonical(&self) -> CanonicalLine {
        CanonicalLine::normalize(&self.0)
    }
}

impl fmt::Debug for LineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineLabel({})", self.0)
    }
}

impl fmt::Display for LineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The canonical identity of a line, used only for loop detection.
///
/// Canonicalization uppercases the label and, for RER and METRO lines,
/// discards everything after the line letter or number, so the branch
/// segments `"rer c 1"` and `"RER C 2"` both canonicalize to `"RER C"`.
/// Labels of other networks are uppercased whole. This is never used for
/// display.
///
/// # Examples
///
/// ```
/// use metro_server::domain::CanonicalLine;
///
/// assert_eq!(CanonicalLine::normalize("rer c 2").as_str(), "RER C");
/// assert_eq!(CanonicalLine::normalize("Metro 7 bis").as_str(), "METRO 7");
/// assert_eq!(CanonicalLine::normalize("Tram T3a").as_str(), "TRAM T3A");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalLine(String);

impl CanonicalLine {
    /// Canonicalize a raw line label.
    ///
    /// Total: any input (including the empty string) yields a canonical
    /// label.
    pub fn normalize(raw: &str) -> Self {
        let upper = raw.to_uppercase();
        let mut tokens = upper.split_whitespace();
        if let (Some(first), Some(second)) = (tokens.next(), tokens.next()) {
            if first == "RER" || first == "METRO" {
                return Self(format!("{first} {second}"));
            }
        }
        Self(upper)
    }

    /// Returns the canonical label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CanonicalLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CanonicalLine({})", self.0)
    }
}

impl fmt::Display for CanonicalLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Canonicalization never panics and never produces lowercase.
        #[test]
        fn total_and_uppercase(s in "[ -~]*") {
            let canonical = CanonicalLine::normalize(&s);
            prop_assert!(!canonical.as_str().chars().any(|c| c.is_lowercase()));
        }

        /// Canonicalizing an already-canonical label is a fixed point.
        #[test]
        fn idempotent(s in "[a-zA-Z0-9 ]{0,20}") {
            let once = CanonicalLine::normalize(&s);
            let twice = CanonicalLine::normalize(once.as_str());
            prop_assert_eq!(once, twice);
        }

        /// RER/METRO labels with a branch suffix lose exactly the suffix.
        #[test]
        fn branch_suffix_dropped(line in "[A-E]", branch in 1u8..9) {
            let raw = format!("RER {line} {branch}");
            let normalized = CanonicalLine::normalize(&raw);
            prop_assert_eq!(normalized.as_str(), format!("RER {line}"));
        }
    }
}
