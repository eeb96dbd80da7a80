//! Element keys with shared, immutable text
//!
//! This module provides the [`Key`] type. Every element of a collection is
//! identified by a key, and `before`/`after` directives name their anchor
//! by key.

use std::{borrow::Borrow, fmt, sync::Arc};

/// Key identifying one element of a collection.
///
/// A key owns its text behind an [`Arc`], so cloning a key never copies the
/// string and two keys with the same text are equal wherever they came from.
///
/// # Examples
///
/// ```
/// use placement_core::key::Key;
///
/// let header = Key::new("header");
/// let footer: Key = "footer".into();
///
/// assert_ne!(header, footer);
/// assert_eq!(header, "header");
/// assert_eq!(footer.to_string(), "footer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(Arc<str>);

impl Key {
    /// Creates a `Key` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the key
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the text of this key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

// Lets maps keyed by `Key` be queried with a plain `&str`.
impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    /// Creates a `Key` from a string slice
    ///
    /// This is a convenience implementation that calls `Key::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl PartialEq<str> for Key {
    /// Allows direct comparison with string slices: `key == "string"`
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
