//! Keyed collections of positioned elements.
//!
//! [`CollectionBuilder`] accumulates elements one key at a time. Building it
//! parses every position string and yields an immutable [`Collection`],
//! which can be sorted any number of times.

use indexmap::IndexMap;
use log::{debug, info};

use placement_core::{directive::PositionDirective, key::Key};
use placement_parser::ParsedDirective;

use crate::{
    error::{InvalidDirective, PlacementError, UnresolvedReference},
    sorter::{self, Unplaced},
};

#[derive(Debug, Clone)]
struct Pending<V> {
    value: V,
    position: Option<String>,
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    position: Option<String>,
    parsed: ParsedDirective,
}

/// Builder for a [`Collection`].
///
/// Keys keep the order in which they were first inserted. Inserting an
/// existing key again replaces its value and position string but not its
/// place in that order.
///
/// # Examples
///
/// ```
/// use placement::CollectionBuilder;
///
/// let mut builder = CollectionBuilder::new();
/// builder
///     .insert_positioned("footer", 3, "end")
///     .insert("body", 2)
///     .insert_positioned("header", 1, "before body");
///
/// let collection = builder.build().expect("all positions are valid");
/// let order = collection.sort().expect("all anchors exist");
///
/// assert_eq!(order, ["header", "body", "footer"]);
/// ```
#[derive(Debug, Clone)]
pub struct CollectionBuilder<V> {
    entries: IndexMap<Key, Pending<V>>,
}

impl<V> Default for CollectionBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CollectionBuilder<V> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert an element without a position string.
    ///
    /// The element sorts as if its position were `0`.
    pub fn insert(&mut self, key: impl Into<Key>, value: V) -> &mut Self {
        self.entries.insert(
            key.into(),
            Pending {
                value,
                position: None,
            },
        );
        self
    }

    /// Insert an element with a raw position string.
    ///
    /// The string is only parsed by [`build`](Self::build).
    pub fn insert_positioned(
        &mut self,
        key: impl Into<Key>,
        value: V,
        position: impl Into<String>,
    ) -> &mut Self {
        self.entries.insert(
            key.into(),
            Pending {
                value,
                position: Some(position.into()),
            },
        );
        self
    }

    /// Returns the number of elements inserted so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse every position string and freeze the collection.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidDirectiveSyntax`] listing every
    /// element whose position string is malformed, in insertion order.
    pub fn build(self) -> Result<Collection<V>, PlacementError> {
        let mut entries = IndexMap::with_capacity(self.entries.len());
        let mut invalid = Vec::new();

        for (key, pending) in self.entries {
            match placement_parser::parse(pending.position.as_deref()) {
                Ok(parsed) => {
                    entries.insert(
                        key,
                        Entry {
                            value: pending.value,
                            position: pending.position,
                            parsed,
                        },
                    );
                }
                Err(error) => {
                    let raw = pending.position.unwrap_or_default();
                    invalid.push(InvalidDirective::new(key, raw, error));
                }
            }
        }

        if !invalid.is_empty() {
            debug!(invalid = invalid.len(); "Rejected position directives");
            return Err(PlacementError::InvalidDirectiveSyntax { invalid });
        }

        Ok(Collection { entries })
    }
}

/// An immutable set of elements with parsed position directives.
#[derive(Debug, Clone)]
pub struct Collection<V> {
    entries: IndexMap<Key, Entry<V>>,
}

impl<V> Collection<V> {
    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection has no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Returns the parsed directive of the element under `key`.
    pub fn directive(&self, key: &str) -> Option<&PositionDirective> {
        self.entries.get(key).map(|entry| entry.parsed.directive())
    }

    /// Keys in resolved order.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::UnresolvedPositionReference`] if some
    /// `before`/`after` anchor is missing or only part of a cycle.
    pub fn sort(&self) -> Result<Vec<Key>, PlacementError> {
        let order = self.order()?;
        Ok(order
            .into_iter()
            .filter_map(|index| self.entries.get_index(index).map(|(key, _)| key.clone()))
            .collect())
    }

    /// Consume the collection, returning its values keyed in resolved order.
    ///
    /// # Errors
    ///
    /// Fails the same way as [`sort`](Self::sort).
    pub fn into_sorted(self) -> Result<IndexMap<Key, V>, PlacementError> {
        let order = self.order()?;
        let mut slots: Vec<Option<(Key, V)>> = self
            .entries
            .into_iter()
            .map(|(key, entry)| Some((key, entry.value)))
            .collect();

        Ok(order
            .into_iter()
            .filter_map(|index| slots.get_mut(index).and_then(Option::take))
            .collect())
    }

    fn order(&self) -> Result<Vec<usize>, PlacementError> {
        info!(elements = self.entries.len(); "Resolving element positions");

        let elements: Vec<(&Key, &PositionDirective)> = self
            .entries
            .iter()
            .map(|(key, entry)| (key, entry.parsed.directive()))
            .collect();

        sorter::sort(&elements).map_err(|Unplaced(indices)| {
            let unresolved = indices
                .into_iter()
                .filter_map(|index| self.entries.get_index(index))
                .filter_map(|(key, entry)| {
                    let target = entry.parsed.target()?;
                    Some(UnresolvedReference::new(
                        key.clone(),
                        target.clone(),
                        entry.position.clone().unwrap_or_default(),
                        entry.parsed.target_span(),
                    ))
                })
                .collect();
            PlacementError::UnresolvedPositionReference { unresolved }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reinsert_keeps_first_index() {
        let mut builder = CollectionBuilder::new();
        builder
            .insert("a", 1)
            .insert("b", 2)
            .insert_positioned("a", 3, "end");

        assert_eq!(builder.len(), 2);

        let collection = builder.build().expect("valid positions");
        assert_eq!(collection.get("a"), Some(&3));
        assert_eq!(
            collection.directive("a"),
            Some(&PositionDirective::End { priority: 0 })
        );
        assert_eq!(collection.sort().expect("sortable"), ["b", "a"]);
    }

    #[test]
    fn test_reinsert_without_position_clears_it() {
        let mut builder = CollectionBuilder::new();
        builder.insert_positioned("a", (), "start").insert("a", ());

        let collection = builder.build().expect("valid positions");
        assert_eq!(
            collection.directive("a"),
            Some(&PositionDirective::Middle { rank: 0 })
        );
    }

    #[test]
    fn test_build_collects_all_invalid_directives() {
        let mut builder = CollectionBuilder::new();
        builder
            .insert_positioned("one", (), "sideways")
            .insert_positioned("two", (), "start")
            .insert_positioned("three", (), "before");

        match builder.build() {
            Err(PlacementError::InvalidDirectiveSyntax { invalid }) => {
                let keys: Vec<_> = invalid.iter().map(|d| d.key().to_string()).collect();
                assert_eq!(keys, ["one", "three"]);
                assert_eq!(invalid[0].raw(), "sideways");
                assert_eq!(invalid[1].raw(), "before");
            }
            other => panic!("expected invalid directives, got {other:?}"),
        }
    }

    #[test]
    fn test_unresolved_keeps_raw_and_span() {
        let mut builder = CollectionBuilder::new();
        builder
            .insert("first", ())
            .insert_positioned("second", (), "after   unknown 3");

        let collection = builder.build().expect("valid positions");
        match collection.sort() {
            Err(PlacementError::UnresolvedPositionReference { unresolved }) => {
                assert_eq!(unresolved.len(), 1);
                assert_eq!(unresolved[0].key(), "second");
                assert_eq!(unresolved[0].target(), "unknown");
                assert_eq!(unresolved[0].raw(), "after   unknown 3");
                let span = unresolved[0].target_span().expect("anchor span");
                assert_eq!(span.start(), 8);
                assert_eq!(span.end(), 15);
            }
            other => panic!("expected unresolved reference, got {other:?}"),
        }
    }

    #[test]
    fn test_into_sorted_moves_values() {
        let mut builder = CollectionBuilder::new();
        builder
            .insert_positioned("second", "b".to_string(), "end")
            .insert("first", "a".to_string());

        let sorted = builder
            .build()
            .and_then(Collection::into_sorted)
            .expect("sortable");

        let pairs: Vec<_> = sorted
            .iter()
            .map(|(key, value)| (key.to_string(), value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [("first".to_string(), "a"), ("second".to_string(), "b")]
        );
    }
}
