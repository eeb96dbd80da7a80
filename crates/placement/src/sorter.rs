//! Positional sorting of parsed directives.
//!
//! Elements are addressed by their insertion index throughout. Sorting runs
//! in two phases:
//!
//! 1. Pinned and ranked elements are bucketed and concatenated into a base
//!    sequence (`start` elements, then numeric ranks, then `end` elements).
//! 2. `before`/`after` elements are spliced next to their anchors in
//!    repeated passes until every element is placed or a pass places none.

use std::{cmp::Reverse, collections::HashMap};

use indexmap::IndexMap;
use log::{debug, trace};

use placement_core::{directive::PositionDirective, key::Key};

/// Elements that could not be anchored, by insertion index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Unplaced(pub(crate) Vec<usize>);

/// Which side of its anchor a deferred element goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Before,
    After,
}

/// An element waiting for its anchor to be placed.
#[derive(Debug, Clone, Copy)]
struct Deferred {
    index: usize,
    /// Insertion index of the anchor, `None` if no element has that key.
    anchor: Option<usize>,
    priority: i64,
    side: Side,
}

/// Order elements by their directives.
///
/// `elements[i]` is the element with insertion index `i`; keys must be
/// unique. Returns insertion indices in resolved order.
pub(crate) fn sort(elements: &[(&Key, &PositionDirective)]) -> Result<Vec<usize>, Unplaced> {
    debug!(elements = elements.len(); "Sorting elements");

    let index_of: HashMap<&Key, usize> = elements
        .iter()
        .enumerate()
        .map(|(index, (key, _))| (*key, index))
        .collect();

    let mut start = Vec::new();
    let mut middle = Vec::new();
    let mut end = Vec::new();
    let mut pending = Vec::new();

    for (index, (_, directive)) in elements.iter().enumerate() {
        match directive {
            PositionDirective::Start { priority } => start.push((Reverse(*priority), index)),
            PositionDirective::Middle { rank } => middle.push((*rank, index)),
            PositionDirective::End { priority } => end.push((*priority, index)),
            PositionDirective::Before { target, priority } => pending.push(Deferred {
                index,
                anchor: index_of.get(target).copied(),
                priority: *priority,
                side: Side::Before,
            }),
            PositionDirective::After { target, priority } => pending.push(Deferred {
                index,
                anchor: index_of.get(target).copied(),
                priority: *priority,
                side: Side::After,
            }),
        }
    }

    // Insertion indices are unique, so plain sorts are already stable.
    start.sort_unstable();
    middle.sort_unstable();
    end.sort_unstable();

    let mut sequence: Vec<usize> = start
        .into_iter()
        .map(|(_, index)| index)
        .chain(middle.into_iter().map(|(_, index)| index))
        .chain(end.into_iter().map(|(_, index)| index))
        .collect();

    trace!(
        base = sequence.len(),
        deferred = pending.len();
        "Built base sequence"
    );

    resolve_deferred(elements.len(), &mut sequence, pending)?;

    Ok(sequence)
}

/// Splice deferred elements into `sequence` until none are left.
///
/// Each pass bounds its work to the elements whose anchor was already in the
/// sequence when the pass began, so chains resolve one link per pass. A pass
/// that splices nothing ends resolution with every remaining element.
fn resolve_deferred(
    len: usize,
    sequence: &mut Vec<usize>,
    mut pending: Vec<Deferred>,
) -> Result<(), Unplaced> {
    let mut placed = vec![false; len];
    for &index in sequence.iter() {
        placed[index] = true;
    }

    let mut pass = 0;
    while !pending.is_empty() {
        pass += 1;

        let (resolvable, mut waiting): (Vec<Deferred>, Vec<Deferred>) = pending
            .into_iter()
            .partition(|deferred| deferred.anchor.is_some_and(|anchor| placed[anchor]));

        // Pending is kept in insertion order, so groups come out ordered by
        // their first member.
        let mut groups: IndexMap<usize, Vec<Deferred>> = IndexMap::new();
        for deferred in resolvable {
            if let Some(anchor) = deferred.anchor {
                groups.entry(anchor).or_default().push(deferred);
            }
        }

        let spliced_before = sequence.len();
        for (anchor, mut group) in groups {
            group.sort_unstable_by_key(|deferred| (deferred.priority, deferred.index));

            let position = sequence.iter().position(|&index| index == anchor);
            debug_assert!(position.is_some(), "placed anchor {anchor} is not in the sequence");
            let Some(mut at) = position else {
                waiting.extend(group);
                continue;
            };

            // Each insertion lands next to the anchor, so earlier members of
            // the group end up further from it.
            for deferred in group {
                let slot = match deferred.side {
                    Side::Before => at,
                    Side::After => at + 1,
                };
                sequence.insert(slot, deferred.index);
                placed[deferred.index] = true;
                if deferred.side == Side::Before {
                    at += 1;
                }
            }
        }

        waiting.sort_unstable_by_key(|deferred| deferred.index);

        if sequence.len() == spliced_before {
            debug!(pass, unresolved = waiting.len(); "Position references cannot be resolved");
            return Err(Unplaced(waiting.iter().map(|d| d.index).collect()));
        }

        trace!(pass, placed = sequence.len(), waiting = waiting.len(); "Finished resolution pass");
        pending = waiting;
    }

    Ok(())
}
