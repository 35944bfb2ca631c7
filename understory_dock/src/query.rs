// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containment and traversal queries.

use alloc::vec::Vec;
use core::hash::Hash;

use kurbo::Point;
use smallvec::SmallVec;

use crate::tree::DockTree;
use crate::types::NodeId;

impl<W: Copy + Eq + Hash> DockTree<W> {
    /// Returns true if `widget` sits in a tab container that is reachable from
    /// the root through split containers.
    pub fn contains(&self, widget: W) -> bool {
        self.leaf_of(widget)
            .is_some_and(|leaf| self.is_leaf(leaf) && self.is_reachable(leaf))
    }

    /// Returns true if the parent chain of `id` ends at the root.
    pub fn is_reachable(&self, id: NodeId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        let mut current = id;
        loop {
            if self.root() == Some(current) {
                return true;
            }
            match self.parent_of(current) {
                Some(parent) if self.is_branch(parent) => current = parent,
                _ => return false,
            }
        }
    }

    /// Tab containers reachable from the root, in depth-first order.
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let Some(root) = self.root() else {
            return out;
        };
        let mut stack: SmallVec<[NodeId; 16]> = SmallVec::new();
        stack.push(root);
        while let Some(id) = stack.pop() {
            if self.is_leaf(id) {
                out.push(id);
            } else {
                stack.extend(self.children_of(id).iter().rev().copied());
            }
        }
        out
    }

    /// Every docked widget, leaf by leaf in depth-first order, then tab order.
    pub fn widgets(&self) -> Vec<W> {
        self.leaves()
            .into_iter()
            .flat_map(|leaf| self.tabs(leaf).iter().copied())
            .collect()
    }

    /// The first tab container (depth-first) whose laid-out rectangle contains `point`.
    ///
    /// Uses the rectangles from the last [`DockTree::layout`].
    pub fn leaf_at(&self, point: Point) -> Option<NodeId> {
        self.leaves()
            .into_iter()
            .find(|&leaf| self.rect_of(leaf).is_some_and(|r| r.contains(point)))
    }
}
