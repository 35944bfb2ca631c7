// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for the dock tree.
//!
//! Random sequences of inserts, removals, drops and spacing changes are run
//! against a [`DockPanel`] and a plain set of expected widgets. After every
//! step:
//!
//! 1. Split containers reachable from the root have at least two children,
//!    one weight per child, and children point back at them.
//! 2. Tab containers reachable from the root are non-empty and their
//!    selection is in range.
//! 3. The docked widgets are exactly the expected set, each docked once.
//! 4. Failed edits leave the tree unchanged.
//! 5. Laid-out children stay inside their parent's rectangle.

use std::collections::HashSet;

use kurbo::{Point, Rect};
use proptest::prelude::*;
use understory_dock::{
    DEFAULT_CONTENT_KIND, DockError, DockPanel, DragPayload, DropAction, DropActions,
    InsertLocation, NodeId,
};

const BOUNDS: Rect = Rect::new(0.0, 0.0, 640.0, 480.0);
const EPSILON: f64 = 1e-6;

const LOCATIONS: [InsertLocation; 6] = [
    InsertLocation::SplitTop,
    InsertLocation::SplitLeft,
    InsertLocation::SplitRight,
    InsertLocation::SplitBottom,
    InsertLocation::TabBefore,
    InsertLocation::TabAfter,
];

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Insert {
        location: usize,
        widget: u32,
        reference: Option<u32>,
    },
    Remove(u32),
    Drop {
        x: f64,
        y: f64,
        widget: u32,
    },
    Spacing(f64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..LOCATIONS.len(), 0_u32..24, proptest::option::of(0_u32..24)).prop_map(
            |(location, widget, reference)| Op::Insert {
                location,
                widget,
                reference,
            }
        ),
        2 => (0_u32..24).prop_map(Op::Remove),
        3 => (0.0..640.0, 0.0..480.0, 0_u32..24)
            .prop_map(|(x, y, widget)| Op::Drop { x, y, widget }),
        1 => (-5.0..20.0).prop_map(Op::Spacing),
    ]
}

// ── Checks ──────────────────────────────────────────────────────────────

fn inside(inner: Rect, outer: Rect) -> bool {
    inner.x0 >= outer.x0 - EPSILON
        && inner.y0 >= outer.y0 - EPSILON
        && inner.x1 <= outer.x1 + EPSILON
        && inner.y1 <= outer.y1 + EPSILON
}

fn check_invariants(panel: &DockPanel<u32>, expected: &HashSet<u32>) -> Result<(), TestCaseError> {
    let tree = panel.tree();
    let mut seen = HashSet::new();
    if let Some(root) = tree.root() {
        prop_assert_eq!(tree.parent_of(root), None, "root has no parent");
        let mut stack: Vec<NodeId> = vec![root];
        while let Some(id) = stack.pop() {
            prop_assert!(tree.is_alive(id), "reachable node {:?} is stale", id);
            let rect = tree.rect_of(id).unwrap();
            if tree.is_branch(id) {
                let children = tree.children_of(id);
                prop_assert!(children.len() >= 2, "split {:?} has {} children", id, children.len());
                prop_assert_eq!(children.len(), tree.sizes_of(id).len());
                for &w in tree.sizes_of(id) {
                    prop_assert!(w.is_finite() && w >= 0.0, "bad weight {}", w);
                }
                for &child in children {
                    prop_assert_eq!(tree.parent_of(child), Some(id));
                    prop_assert!(
                        inside(tree.rect_of(child).unwrap(), rect),
                        "child {:?} escapes its parent",
                        child
                    );
                    stack.push(child);
                }
            } else {
                let tabs = tree.tabs(id);
                prop_assert!(!tabs.is_empty(), "empty tab container {:?}", id);
                let current = tree.current_tab(id);
                prop_assert!(current.is_some_and(|w| tabs.contains(&w)));
                for &w in tabs {
                    prop_assert!(seen.insert(w), "widget {} docked twice", w);
                    prop_assert_eq!(tree.leaf_of(w), Some(id));
                }
            }
        }
    }
    prop_assert_eq!(&seen, expected);
    prop_assert_eq!(tree.widget_count(), expected.len());
    for &w in expected {
        prop_assert!(panel.contains(w), "expected widget {} is not contained", w);
    }
    Ok(())
}

fn apply(panel: &mut DockPanel<u32>, expected: &mut HashSet<u32>, op: &Op) -> Result<(), TestCaseError> {
    match *op {
        Op::Insert {
            location,
            widget,
            reference,
        } => {
            let before = panel.tree().widgets();
            let result = panel.insert_widget(LOCATIONS[location], widget, reference);
            let error = if reference == Some(widget) {
                Some(DockError::WidgetIsReference)
            } else if expected.contains(&widget) {
                Some(DockError::AlreadyDocked)
            } else if reference.is_some_and(|r| !expected.contains(&r)) {
                Some(DockError::ReferenceNotFound)
            } else {
                None
            };
            match error {
                Some(error) => {
                    prop_assert_eq!(result, Err(error));
                    prop_assert_eq!(panel.tree().widgets(), before);
                }
                None => {
                    prop_assert_eq!(result, Ok(()));
                    expected.insert(widget);
                }
            }
        }
        Op::Remove(widget) => {
            let removed = panel.remove_widget(widget);
            prop_assert_eq!(removed, expected.remove(&widget));
        }
        Op::Drop { x, y, widget } => {
            let point = Point::new(x, y);
            let target = panel.find_target(point);
            let mut payload = DragPayload::new(DropActions::MOVE);
            payload.set_factory(DEFAULT_CONTENT_KIND, move || Some(widget));
            panel.drag_enter(&payload);
            panel.drag_over(point, DropAction::Move, &payload);
            let response = panel.drag_drop(point, DropAction::Move, &mut payload);
            prop_assert!(response.consumed);
            prop_assert!(!panel.overlay().is_visible(), "overlay left visible after drop");
            if target.is_some() {
                prop_assert_eq!(response.drop_action, DropAction::Move);
                expected.insert(widget);
            } else {
                prop_assert_eq!(response.drop_action, DropAction::None);
            }
        }
        Op::Spacing(spacing) => {
            panel.set_spacing(spacing);
            let floored = if spacing > 0.0 { spacing.floor() } else { 0.0 };
            prop_assert_eq!(f64::from(panel.spacing()), floored);
        }
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// Structural invariants hold after every operation
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn invariants_hold_for_random_sequences(ops in proptest::collection::vec(op_strategy(), 1..64)) {
        let mut panel: DockPanel<u32> = DockPanel::new();
        panel.layout(BOUNDS);
        let mut expected = HashSet::new();
        for op in &ops {
            apply(&mut panel, &mut expected, op)?;
            check_invariants(&panel, &expected)?;
        }
    }

    #[test]
    fn removing_everything_empties_the_tree(ops in proptest::collection::vec(op_strategy(), 1..48)) {
        let mut panel: DockPanel<u32> = DockPanel::new();
        panel.layout(BOUNDS);
        let mut expected = HashSet::new();
        for op in &ops {
            apply(&mut panel, &mut expected, op)?;
        }
        for widget in panel.tree().widgets() {
            prop_assert!(panel.remove_widget(widget));
        }
        prop_assert_eq!(panel.tree().root(), None);
        prop_assert_eq!(panel.tree().widget_count(), 0);
    }

    #[test]
    fn leaf_rects_tile_without_overlap(ops in proptest::collection::vec(op_strategy(), 1..48)) {
        let mut panel: DockPanel<u32> = DockPanel::new();
        panel.layout(BOUNDS);
        let mut expected = HashSet::new();
        for op in &ops {
            apply(&mut panel, &mut expected, op)?;
        }
        let rects: Vec<Rect> = panel
            .tree()
            .leaves()
            .into_iter()
            .map(|leaf| panel.tree().rect_of(leaf).unwrap())
            .collect();
        for (i, a) in rects.iter().enumerate() {
            prop_assert!(inside(*a, panel.content_rect()));
            for b in &rects[i + 1..] {
                let overlap = a.intersect(*b);
                prop_assert!(
                    overlap.width() <= EPSILON || overlap.height() <= EPSILON,
                    "{:?} overlaps {:?}",
                    a,
                    b
                );
            }
        }
    }
}
