// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion engine: high-level insert, remove and drop operations.
//!
//! These operations keep the tree tidy. After any of them returns, no split
//! container reachable from the root is empty or has a single child, and a
//! split container never has a child of the same orientation that it could
//! absorb after a removal.

use alloc::vec::Vec;
use core::hash::Hash;

use tracing::debug;

use crate::error::DockError;
use crate::tree::DockTree;
use crate::types::{DockZone, DropTarget, InsertLocation, NodeId, Orientation};

/// Weight given to a leaf docked along a root edge without a reference.
const ROOT_EDGE_WEIGHT: f64 = 0.5;

impl<W: Copy + Eq + Hash> DockTree<W> {
    /// Insert `widget` at `location`, relative to `reference` if given.
    ///
    /// Without a reference, the split locations dock the widget along the
    /// matching edge of the whole tree, and the tab locations add it to the
    /// first tab container in depth-first order (creating the root container
    /// for an empty tree).
    ///
    /// Every precondition is checked before the tree is touched:
    /// - `widget == reference` fails with [`DockError::WidgetIsReference`];
    /// - a widget that is already docked fails with [`DockError::AlreadyDocked`];
    /// - a reference that is not [contained](DockTree::contains) fails with
    ///   [`DockError::ReferenceNotFound`].
    pub fn insert_widget(
        &mut self,
        location: InsertLocation,
        widget: W,
        reference: Option<W>,
    ) -> Result<(), DockError> {
        self.check_insert(widget, reference)?;
        match location.split() {
            Some((orientation, after)) => self.insert_split(orientation, after, widget, reference),
            None => self.insert_tab_near(location == InsertLocation::TabBefore, widget, reference),
        }
        debug!(?location, has_reference = reference.is_some(), "docked widget");
        Ok(())
    }

    /// Shorthand for [`InsertLocation::TabAfter`].
    pub fn add_widget(&mut self, widget: W, reference: Option<W>) -> Result<(), DockError> {
        self.insert_widget(InsertLocation::TabAfter, widget, reference)
    }

    /// Undock `widget`. Returns false if it was not placed in this tree.
    ///
    /// An emptied tab container is removed along with its weight. A split
    /// container left with one child is replaced by that child in the same
    /// slot, and a child split that now shares its parent's orientation is
    /// merged into the parent with its weights rescaled to the slot weight.
    pub fn remove_widget(&mut self, widget: W) -> bool {
        let Some(leaf) = self.detach_widget(widget) else {
            return false;
        };
        if self.tab_count(leaf) == 0 {
            self.prune(leaf);
        }
        debug!(?leaf, "undocked widget");
        true
    }

    /// Apply a drop of `widget` on `target`.
    ///
    /// Root zones dock the widget along that edge of the tree; panel edges
    /// split the target container; the panel center adds a tab to it. A widget
    /// that is already docked is moved. Returns `Ok(false)` for drops that
    /// would leave the widget where it is.
    pub fn drop_widget(&mut self, target: DropTarget, widget: W) -> Result<bool, DockError> {
        let location = target.zone.location();
        if target.zone.is_root() {
            self.remove_widget(widget);
            self.insert_widget(location, widget, None)?;
            return Ok(true);
        }

        let leaf = target.leaf.ok_or(DockError::StaleNode)?;
        self.check_leaf(leaf)?;
        if target.zone == DockZone::PanelCenter && self.leaf_of(widget) == Some(leaf) {
            return Ok(false);
        }
        let reference = match self.tabs(leaf) {
            [only] if *only == widget => return Ok(false),
            [.., prev, last] if *last == widget => Some(*prev),
            [.., last] => Some(*last),
            [] => None,
        };

        match reference {
            Some(reference) => {
                if !self.contains(reference) {
                    return Err(DockError::ReferenceNotFound);
                }
                self.remove_widget(widget);
                self.insert_widget(location, widget, Some(reference))?;
            }
            None => {
                if !self.is_reachable(leaf) {
                    return Err(DockError::Detached);
                }
                self.remove_widget(widget);
                // Undocking only frees the emptied source container, never this one.
                let index = self.tab_count(leaf);
                self.attach_widget(leaf, index, widget);
            }
        }
        debug!(zone = ?target.zone, "dropped widget");
        Ok(true)
    }

    /// Make the root a split container of `orientation` and return it.
    ///
    /// An empty tree gets an empty split root. A leaf root, or a split root of
    /// the other orientation with two or more children, is wrapped in a new
    /// split root where it keeps weight 1. A split root with at most one child
    /// is reoriented in place.
    pub(crate) fn ensure_split_root(&mut self, orientation: Orientation) -> NodeId {
        let Some(root) = self.root() else {
            let branch = self.create_branch(orientation);
            self.replace_root(Some(branch));
            return branch;
        };
        if self.is_branch(root) {
            let split = self.split_mut(root);
            if split.orientation == orientation {
                return root;
            }
            if split.children.len() <= 1 {
                split.orientation = orientation;
                return root;
            }
        }
        let branch = self.create_branch(orientation);
        self.link_child(branch, 0, root, 1.0);
        self.replace_root(Some(branch));
        branch
    }

    fn check_insert(&self, widget: W, reference: Option<W>) -> Result<(), DockError> {
        if reference == Some(widget) {
            return Err(DockError::WidgetIsReference);
        }
        if self.leaf_of(widget).is_some() {
            return Err(DockError::AlreadyDocked);
        }
        if let Some(reference) = reference {
            if !self.contains(reference) {
                return Err(DockError::ReferenceNotFound);
            }
        }
        Ok(())
    }

    fn insert_split(&mut self, orientation: Orientation, after: bool, widget: W, reference: Option<W>) {
        let leaf = self.create_leaf();
        self.attach_widget(leaf, 0, widget);
        if self.root().is_none() {
            self.replace_root(Some(leaf));
            return;
        }

        let Some(anchor) = reference.and_then(|r| self.leaf_of(r)) else {
            let root = self.ensure_split_root(orientation);
            let index = if after { self.children_of(root).len() } else { 0 };
            self.link_child(root, index, leaf, ROOT_EDGE_WEIGHT);
            return;
        };

        let Some(parent) = self.parent_of(anchor) else {
            // The anchor is the root container.
            let root = self.ensure_split_root(orientation);
            self.link_child(root, usize::from(after), leaf, 1.0);
            return;
        };

        let index = self.index_of_child(parent, anchor).unwrap_or_default();
        let split = self.split_mut(parent);
        if split.orientation == orientation {
            let half = split.sizes[index] / 2.0;
            split.sizes[index] = half;
            self.link_child(parent, index + usize::from(after), leaf, half);
        } else if split.children.len() == 1 {
            split.orientation = orientation;
            split.sizes[index] = 1.0;
            self.link_child(parent, index + usize::from(after), leaf, 1.0);
        } else {
            let inner = self.create_branch(orientation);
            self.replace_child_at(parent, index, inner);
            self.link_child(inner, 0, anchor, 1.0);
            self.link_child(inner, usize::from(after), leaf, 1.0);
        }
    }

    fn insert_tab_near(&mut self, before: bool, widget: W, reference: Option<W>) {
        let anchor = reference.and_then(|r| {
            let leaf = self.leaf_of(r)?;
            Some((leaf, self.tab_index(leaf, r)?))
        });
        if let Some((leaf, index)) = anchor {
            self.attach_widget(leaf, index + usize::from(!before), widget);
            return;
        }

        let leaf = match (self.root(), self.leaves().first().copied()) {
            (_, Some(leaf)) => leaf,
            (None, None) => {
                let leaf = self.create_leaf();
                self.replace_root(Some(leaf));
                leaf
            }
            (Some(root), None) => {
                // A split root holding no tab containers.
                let leaf = self.create_leaf();
                let count = self.children_of(root).len();
                self.link_child(root, count, leaf, 1.0);
                leaf
            }
        };
        let index = if before { 0 } else { self.tab_count(leaf) };
        self.attach_widget(leaf, index, widget);
    }

    /// Remove an emptied node from its parent, collapsing what that leaves behind.
    fn prune(&mut self, node: NodeId) {
        match self.parent_of(node) {
            Some(parent) => {
                self.unlink_child(parent, node);
                self.free_subtree(node);
                self.collapse(parent);
            }
            None if self.root() == Some(node) => {
                self.replace_root(None);
                self.free_subtree(node);
            }
            None => {}
        }
    }

    fn collapse(&mut self, branch: NodeId) {
        let children = self.children_of(branch);
        match children.len() {
            0 => self.prune(branch),
            1 => match self.parent_of(branch) {
                Some(grand) => {
                    let only = children[0];
                    let index = self.index_of_child(grand, branch).unwrap_or_default();
                    self.unlink_child(branch, only);
                    self.replace_child_at(grand, index, only);
                    self.free_subtree(branch);
                    self.absorb(grand, only);
                }
                None if self.root() == Some(branch) => {
                    let only = children[0];
                    self.unlink_child(branch, only);
                    self.replace_root(Some(only));
                    self.free_subtree(branch);
                }
                None => {}
            },
            _ => {}
        }
    }

    /// Merge `child` into `parent` if both are splits of the same orientation.
    fn absorb(&mut self, parent: NodeId, child: NodeId) {
        if !self.is_branch(child) || self.orientation_of(child) != self.orientation_of(parent) {
            return;
        }
        let Some(index) = self.index_of_child(parent, child) else {
            return;
        };
        let split = self.split_mut(child);
        let children = core::mem::take(&mut split.children);
        let sizes = core::mem::take(&mut split.sizes);
        let slot_weight = self.unlink_child(parent, child).unwrap_or(1.0);
        self.free_subtree(child);

        let total: f64 = sizes.iter().sum();
        let count = children.len() as f64;
        let scaled: Vec<f64> = sizes
            .iter()
            .map(|w| {
                if total > 0.0 {
                    w / total * slot_weight
                } else {
                    slot_weight / count
                }
            })
            .collect();
        for (offset, (grandchild, weight)) in children.into_iter().zip(scaled).enumerate() {
            self.link_child(parent, index + offset, grandchild, weight);
        }
        debug!(?parent, "merged split into parent of the same orientation");
    }
}
