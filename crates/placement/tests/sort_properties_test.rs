//! Property tests for positional sorting

use std::collections::HashSet;

use placement::{CollectionBuilder, directive::PositionDirective, key::Key};
use proptest::prelude::*;

/// Position strings that always resolve, given keys `k0..kN`.
///
/// Anchors only point at lower-numbered keys, and `k0` is never anchored,
/// so every chain ends in the base sequence.
fn arb_position(index: usize) -> BoxedStrategy<Option<String>> {
    let plain = prop_oneof![
        Just(None),
        (-3i64..3).prop_map(|p| Some(format!("start {p}"))),
        (-3i64..3).prop_map(|p| Some(format!("end {p}"))),
        (-3i64..3).prop_map(|r| Some(r.to_string())),
    ];

    if index == 0 {
        return plain.boxed();
    }

    let anchored = (0..index, prop::bool::ANY, -3i64..3).prop_map(|(target, before, p)| {
        let side = if before { "before" } else { "after" };
        Some(format!("{side} k{target} {p}"))
    });
    prop_oneof![plain, anchored].boxed()
}

fn arb_positions() -> impl Strategy<Value = Vec<Option<String>>> {
    (0usize..24).prop_flat_map(|len| (0..len).map(arb_position).collect::<Vec<_>>())
}

fn build(positions: &[Option<String>]) -> CollectionBuilder<usize> {
    let mut builder = CollectionBuilder::new();
    for (index, position) in positions.iter().enumerate() {
        let key = format!("k{index}");
        match position {
            Some(position) => builder.insert_positioned(key.as_str(), index, position.as_str()),
            None => builder.insert(key.as_str(), index),
        };
    }
    builder
}

fn sorted(positions: &[Option<String>]) -> Vec<Key> {
    build(positions)
        .build()
        .expect("generated positions are valid")
        .sort()
        .expect("generated anchors resolve")
}

proptest! {
    #[test]
    fn output_is_a_permutation(positions in arb_positions()) {
        let order = sorted(&positions);

        let unique: HashSet<&str> = order.iter().map(Key::as_str).collect();
        prop_assert_eq!(order.len(), positions.len());
        prop_assert_eq!(unique.len(), positions.len());
        for index in 0..positions.len() {
            let key = format!("k{index}");
            prop_assert!(unique.contains(key.as_str()), "missing {}", key);
        }
    }

    #[test]
    fn sorting_is_deterministic(positions in arb_positions()) {
        prop_assert_eq!(sorted(&positions), sorted(&positions));
    }

    #[test]
    fn pinned_priorities_are_ordered(positions in arb_positions()) {
        let collection = build(&positions).build().expect("generated positions are valid");
        let order = collection.sort().expect("generated anchors resolve");

        let pinned: Vec<&PositionDirective> = order
            .iter()
            .filter_map(|key| collection.directive(key.as_str()))
            .filter(|d| matches!(d, PositionDirective::Start { .. } | PositionDirective::End { .. }))
            .collect();

        for pair in pinned.windows(2) {
            match (pair[0], pair[1]) {
                (PositionDirective::Start { priority: a }, PositionDirective::Start { priority: b }) => {
                    prop_assert!(a >= b);
                }
                (PositionDirective::End { priority: a }, PositionDirective::End { priority: b }) => {
                    prop_assert!(a <= b);
                }
                (PositionDirective::End { .. }, PositionDirective::Start { .. }) => {
                    prop_assert!(false, "`end` element sorted before a `start` element");
                }
                _ => {}
            }
        }
    }

    #[test]
    fn anchored_elements_sit_on_the_right_side(positions in arb_positions()) {
        let collection = build(&positions).build().expect("generated positions are valid");
        let order = collection.sort().expect("generated anchors resolve");
        let place = |key: &Key| order.iter().position(|k| k == key);

        for key in &order {
            match collection.directive(key.as_str()) {
                Some(PositionDirective::Before { target, .. }) => {
                    prop_assert!(place(key) < place(target));
                }
                Some(PositionDirective::After { target, .. }) => {
                    prop_assert!(place(key) > place(target));
                }
                _ => {}
            }
        }
    }
}

#[test]
fn test_lone_anchor_is_adjacent() {
    let mut builder = CollectionBuilder::new();
    builder
        .insert("a", ())
        .insert("b", ())
        .insert("c", ())
        .insert_positioned("x", (), "after a")
        .insert_positioned("y", (), "before c");

    let order = builder
        .build()
        .expect("valid positions")
        .sort()
        .expect("sortable");

    assert_eq!(order, ["a", "x", "b", "y", "c"]);
}
