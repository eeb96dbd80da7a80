//! Placement - ordering named elements by declarative position directives.
//!
//! Every element of a collection carries an optional position string:
//!
//! - `start [priority]` pins it to the front, higher priorities first.
//! - `end [priority]` pins it to the back, higher priorities last.
//! - A bare integer ranks it among the unpinned elements.
//! - `before <key> [priority]` and `after <key> [priority]` place it next to
//!   another element, higher priorities closer to the anchor.
//!
//! Elements without a position string behave like rank `0`. Ties always
//! fall back to the order in which elements were inserted.
//!
//! Sorting never touches element values; it only decides the order in
//! which the caller visits them.

mod collection;
mod error;
mod sorter;

pub use placement_core::{directive, key};
pub use placement_parser::{ParsedDirective, Span, error as diagnostic, parse};

pub use collection::{Collection, CollectionBuilder};
pub use error::{InvalidDirective, PlacementError, UnresolvedReference};

use log::debug;

use key::Key;

/// Sort keys by their raw position strings.
///
/// This is a shortcut for building a [`Collection`] without values. Input
/// order is the insertion order used to break ties.
///
/// # Errors
///
/// Returns [`PlacementError::InvalidDirectiveSyntax`] if any position string
/// is malformed, or [`PlacementError::UnresolvedPositionReference`] if some
/// anchor cannot be found.
///
/// # Examples
///
/// ```
/// use placement::sort_positions;
///
/// let order = sort_positions([
///     ("second", Some("end")),
///     ("first", None),
///     ("zeroth", Some("before first")),
/// ])
/// .expect("positions resolve");
///
/// assert_eq!(order, ["zeroth", "first", "second"]);
/// ```
pub fn sort_positions<'a, I>(positions: I) -> Result<Vec<Key>, PlacementError>
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut builder = CollectionBuilder::new();
    for (key, position) in positions {
        match position {
            Some(position) => builder.insert_positioned(key, (), position),
            None => builder.insert(key, ()),
        };
    }

    debug!(elements = builder.len(); "Sorting raw positions");
    builder.build()?.sort()
}
