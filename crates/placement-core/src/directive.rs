//! Position directives.
//!
//! A [`PositionDirective`] is the structured form of the position string an
//! author attaches to an element. Directives fall into two groups:
//!
//! - **Direct** directives ([`Start`](PositionDirective::Start),
//!   [`Middle`](PositionDirective::Middle), [`End`](PositionDirective::End))
//!   place an element without looking at any other element.
//! - **Anchored** directives ([`Before`](PositionDirective::Before),
//!   [`After`](PositionDirective::After)) place an element next to the
//!   element named by their target key, so they can only be resolved once
//!   that element has been placed.

use std::fmt;

use crate::key::Key;

/// The parsed intent of a position string.
///
/// The [`Display`](fmt::Display) implementation renders the canonical
/// directive string, omitting a zero priority:
///
/// ```
/// use placement_core::{directive::PositionDirective, key::Key};
///
/// let pinned = PositionDirective::Start { priority: 10 };
/// assert_eq!(pinned.to_string(), "start 10");
///
/// let anchored = PositionDirective::After { target: Key::new("title"), priority: 0 };
/// assert_eq!(anchored.to_string(), "after title");
///
/// assert_eq!(PositionDirective::default().to_string(), "0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PositionDirective {
    /// Pinned to the front. Higher priority sorts closer to the front.
    Start { priority: i64 },

    /// Pinned to the back. Higher priority sorts closer to the back.
    End { priority: i64 },

    /// Unpinned, ordered by ascending rank.
    Middle { rank: i64 },

    /// Immediately before `target`. Higher priority sorts closer to it.
    Before { target: Key, priority: i64 },

    /// Immediately after `target`. Higher priority sorts closer to it.
    After { target: Key, priority: i64 },
}

impl PositionDirective {
    /// Returns the anchor key of a `before`/`after` directive.
    pub fn target(&self) -> Option<&Key> {
        match self {
            Self::Before { target, .. } | Self::After { target, .. } => Some(target),
            Self::Start { .. } | Self::End { .. } | Self::Middle { .. } => None,
        }
    }
}

/// An element without a position string is an unranked middle element.
impl Default for PositionDirective {
    fn default() -> Self {
        Self::Middle { rank: 0 }
    }
}

impl fmt::Display for PositionDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let priority = match self {
            Self::Middle { rank } => return write!(f, "{rank}"),
            Self::Start { priority } => {
                write!(f, "start")?;
                priority
            }
            Self::End { priority } => {
                write!(f, "end")?;
                priority
            }
            Self::Before { target, priority } => {
                write!(f, "before {target}")?;
                priority
            }
            Self::After { target, priority } => {
                write!(f, "after {target}")?;
                priority
            }
        };

        if *priority != 0 {
            write!(f, " {priority}")?;
        }
        Ok(())
    }
}
