// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the dock demos.

use std::fmt::{Debug, Write};
use std::hash::Hash;

use understory_dock::{DockNode, DockTree, NodeId, Orientation};

/// Render a dock tree as an indented outline, one node per line.
///
/// Split containers show their orientation and weights, tab containers their
/// widgets with the selected one starred, and every node its laid-out rectangle.
pub fn describe<W: Copy + Eq + Hash + Debug>(tree: &DockTree<W>) -> String {
    let mut out = String::new();
    match tree.root() {
        Some(root) => describe_node(tree, root, 0, &mut out),
        None => out.push_str("(empty)\n"),
    }
    out
}

fn describe_node<W: Copy + Eq + Hash + Debug>(
    tree: &DockTree<W>,
    id: NodeId,
    depth: usize,
    out: &mut String,
) {
    let indent = "  ".repeat(depth);
    let rect = tree.rect_of(id).unwrap_or_default();
    match tree.node(id) {
        Some(DockNode::Split {
            orientation,
            children,
            sizes,
            ..
        }) => {
            let axis = match orientation {
                Orientation::Horizontal => "row",
                Orientation::Vertical => "column",
            };
            let _ = writeln!(
                out,
                "{indent}{axis} {sizes:?} @ ({:.0}, {:.0}) {:.0}x{:.0}",
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height()
            );
            for &child in children {
                describe_node(tree, child, depth + 1, out);
            }
        }
        Some(DockNode::Tabs { widgets, current }) => {
            let tabs: Vec<String> = widgets
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    if Some(i) == current {
                        format!("*{w:?}")
                    } else {
                        format!("{w:?}")
                    }
                })
                .collect();
            let _ = writeln!(
                out,
                "{indent}tabs [{}] @ ({:.0}, {:.0}) {:.0}x{:.0}",
                tabs.join(", "),
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height()
            );
        }
        None => {
            let _ = writeln!(out, "{indent}(stale {id:?})");
        }
    }
}
