// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: node arena, structural primitives, layout.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::error::DockError;
use crate::types::{NodeId, Orientation};

/// The split/tab tree of a dock panel.
///
/// Nodes live in an arena and are addressed by generational [`NodeId`]s. A
/// node is either a tab container (leaf, an ordered stack of widgets) or a
/// split container (branch, oriented children with parallel relative size
/// weights). Each node keeps a non-owning back-reference to its parent.
///
/// Widgets are opaque keys owned by the caller; the tree only records where
/// each one is placed. Removing a node never drops a widget.
///
/// The structural primitives on this type ([`DockTree::insert_child_at`],
/// [`DockTree::remove_child`], [`DockTree::set_sizes`], …) keep the
/// `sizes.len() == children.len()` invariant but do not rebalance or collapse
/// anything. The high-level operations ([`DockTree::insert_widget`],
/// [`DockTree::remove_widget`], [`DockTree::drop_widget`]) additionally never
/// leave an empty or single-child split container behind.
///
/// ## Example
///
/// ```rust
/// use understory_dock::{DockTree, InsertLocation, Orientation};
///
/// let mut tree = DockTree::new();
/// tree.add_widget("editor", None).unwrap();
/// tree.insert_widget(InsertLocation::SplitRight, "outline", Some("editor")).unwrap();
///
/// let root = tree.root().unwrap();
/// assert_eq!(tree.orientation_of(root), Some(Orientation::Horizontal));
/// assert_eq!(tree.sizes_of(root), &[1.0, 1.0]);
/// ```
pub struct DockTree<W> {
    /// slots
    nodes: Vec<Option<Node<W>>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    root: Option<NodeId>,
    /// widget -> tab container holding it
    placements: HashMap<W, NodeId>,
    spacing: u32,
}

impl<W> core::fmt::Debug for DockTree<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("DockTree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("root", &self.root)
            .field("widgets", &self.placements.len())
            .field("spacing", &self.spacing)
            .finish_non_exhaustive()
    }
}

impl<W> Default for DockTree<W> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: None,
            placements: HashMap::new(),
            spacing: 0,
        }
    }
}

/// Borrowed view of a single node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DockNode<'a, W> {
    /// A tab container.
    Tabs {
        /// Widgets in tab order.
        widgets: &'a [W],
        /// Index of the selected tab, if any.
        current: Option<usize>,
    },
    /// A split container.
    Split {
        /// Layout direction of the children.
        orientation: Orientation,
        /// Children in layout order.
        children: &'a [NodeId],
        /// Relative weights, parallel to `children`.
        sizes: &'a [f64],
        /// Gap between adjacent children, in pixels.
        spacing: u32,
    },
}

#[derive(Clone, Debug)]
struct Node<W> {
    generation: u32,
    parent: Option<NodeId>,
    rect: Rect,
    kind: NodeKind<W>,
}

#[derive(Clone, Debug)]
enum NodeKind<W> {
    Tabs(TabStack<W>),
    Split(SplitNode),
}

#[derive(Clone, Debug)]
struct TabStack<W> {
    widgets: Vec<W>,
    current: Option<usize>,
}

#[derive(Clone, Debug)]
pub(crate) struct SplitNode {
    pub(crate) orientation: Orientation,
    pub(crate) children: Vec<NodeId>,
    pub(crate) sizes: Vec<f64>,
    spacing: u32,
}

impl<W> Node<W> {
    fn new(generation: u32, kind: NodeKind<W>) -> Self {
        Self {
            generation,
            parent: None,
            rect: Rect::ZERO,
            kind,
        }
    }
}

impl SplitNode {
    /// Divide `rect` among the children along the split axis.
    ///
    /// The extent left after subtracting the gaps is shared in proportion to
    /// the weights; if every weight is zero the children get equal shares.
    /// Gaps shrink when the extent cannot hold them.
    fn child_rects(&self, rect: Rect) -> Vec<Rect> {
        let count = self.children.len();
        if count == 0 {
            return Vec::new();
        }
        let (start, extent) = match self.orientation {
            Orientation::Horizontal => (rect.x0, rect.width().max(0.0)),
            Orientation::Vertical => (rect.y0, rect.height().max(0.0)),
        };
        let gaps = (count - 1) as f64;
        let spacing = if count > 1 {
            f64::from(self.spacing).min(extent / gaps)
        } else {
            0.0
        };
        let available = (extent - spacing * gaps).max(0.0);
        let total: f64 = self.sizes.iter().sum();
        let mut pos = start;
        self.sizes
            .iter()
            .map(|&weight| {
                let share = if total > 0.0 {
                    available * weight / total
                } else {
                    available / count as f64
                };
                let child = match self.orientation {
                    Orientation::Horizontal => Rect::new(pos, rect.y0, pos + share, rect.y1),
                    Orientation::Vertical => Rect::new(rect.x0, pos, rect.x1, pos + share),
                };
                pos += share + spacing;
                child
            })
            .collect()
    }
}

fn valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}

impl<W: Copy + Eq + Hash> DockTree<W> {
    /// Create an empty tree (no root) with zero spacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with the given spacing between split children.
    ///
    /// See [`DockTree::set_spacing`] for how the value is normalized.
    pub fn with_spacing(spacing: f64) -> Self {
        let mut tree = Self::default();
        tree.set_spacing(spacing);
        tree
    }

    fn alloc(&mut self, kind: NodeKind<W>) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, kind));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, kind)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        NodeId::new(idx, generation)
    }

    /// Create a new, empty, detached tab container.
    pub fn create_leaf(&mut self) -> NodeId {
        self.alloc(NodeKind::Tabs(TabStack {
            widgets: Vec::new(),
            current: None,
        }))
    }

    /// Create a new, empty, detached split container.
    ///
    /// The container picks up the tree's current spacing.
    pub fn create_branch(&mut self, orientation: Orientation) -> NodeId {
        let spacing = self.spacing;
        self.alloc(NodeKind::Split(SplitNode {
            orientation,
            children: Vec::new(),
            sizes: Vec::new(),
            spacing,
        }))
    }

    /// Remove a node and its whole subtree from the arena.
    ///
    /// The node is unlinked from its parent first (its weight goes with it) and
    /// the root is cleared if it was the root. Widgets held by removed tab
    /// containers are no longer placed. Parents are not collapsed; use
    /// [`DockTree::remove_widget`] for a removal that keeps the tree tidy.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.slot(id).parent {
            self.unlink_child(parent, id);
        }
        if self.root == Some(id) {
            self.root = None;
        }
        self.free_subtree(id);
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is live if its slot is occupied and the generation matches.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Install a detached node as the root and return the previous root.
    ///
    /// The previous root stays alive but detached. Passing `None` empties the
    /// tree without freeing the old root.
    pub fn set_root(&mut self, node: Option<NodeId>) -> Result<Option<NodeId>, DockError> {
        if let Some(id) = node {
            let n = self.slot_opt(id).ok_or(DockError::StaleNode)?;
            if self.root == Some(id) {
                return Ok(self.root);
            }
            if n.parent.is_some() {
                return Err(DockError::AlreadyAttached);
            }
        }
        Ok(core::mem::replace(&mut self.root, node))
    }

    /// Borrowed view of a live node.
    pub fn node(&self, id: NodeId) -> Option<DockNode<'_, W>> {
        let node = self.slot_opt(id)?;
        Some(match &node.kind {
            NodeKind::Tabs(stack) => DockNode::Tabs {
                widgets: &stack.widgets,
                current: stack.current,
            },
            NodeKind::Split(split) => DockNode::Split {
                orientation: split.orientation,
                children: &split.children,
                sizes: &split.sizes,
                spacing: split.spacing,
            },
        })
    }

    /// Returns true if `id` is a live tab container.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        matches!(
            self.slot_opt(id).map(|n| &n.kind),
            Some(NodeKind::Tabs(_))
        )
    }

    /// Returns true if `id` is a live split container.
    pub fn is_branch(&self, id: NodeId) -> bool {
        matches!(
            self.slot_opt(id).map(|n| &n.kind),
            Some(NodeKind::Split(_))
        )
    }

    /// Returns the parent of a node if live, or `None` for roots, detached nodes or stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.slot_opt(id).and_then(|n| n.parent)
    }

    /// Children of a split container; empty for tab containers and stale ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        match self.slot_opt(id).map(|n| &n.kind) {
            Some(NodeKind::Split(split)) => &split.children,
            _ => &[],
        }
    }

    /// Size weights of a split container; empty for tab containers and stale ids.
    pub fn sizes_of(&self, id: NodeId) -> &[f64] {
        match self.slot_opt(id).map(|n| &n.kind) {
            Some(NodeKind::Split(split)) => &split.sizes,
            _ => &[],
        }
    }

    /// Orientation of a split container.
    pub fn orientation_of(&self, id: NodeId) -> Option<Orientation> {
        match self.slot_opt(id).map(|n| &n.kind) {
            Some(NodeKind::Split(split)) => Some(split.orientation),
            _ => None,
        }
    }

    /// Position of `child` within a split container.
    pub fn index_of_child(&self, branch: NodeId, child: NodeId) -> Option<usize> {
        self.children_of(branch).iter().position(|c| *c == child)
    }

    /// Rectangle assigned to a node by the last [`DockTree::layout`].
    pub fn rect_of(&self, id: NodeId) -> Option<Rect> {
        self.slot_opt(id).map(|n| n.rect)
    }

    /// Widgets of a tab container in tab order; empty for split containers and stale ids.
    pub fn tabs(&self, leaf: NodeId) -> &[W] {
        match self.slot_opt(leaf).map(|n| &n.kind) {
            Some(NodeKind::Tabs(stack)) => &stack.widgets,
            _ => &[],
        }
    }

    /// Number of widgets in a tab container.
    pub fn tab_count(&self, leaf: NodeId) -> usize {
        self.tabs(leaf).len()
    }

    /// Index of `widget` within a tab container.
    pub fn tab_index(&self, leaf: NodeId, widget: W) -> Option<usize> {
        self.tabs(leaf).iter().position(|w| *w == widget)
    }

    /// The selected widget of a tab container.
    pub fn current_tab(&self, leaf: NodeId) -> Option<W> {
        match self.slot_opt(leaf).map(|n| &n.kind) {
            Some(NodeKind::Tabs(stack)) => stack.current.map(|i| stack.widgets[i]),
            _ => None,
        }
    }

    /// Select `widget` in its tab container.
    pub fn set_current_tab(&mut self, leaf: NodeId, widget: W) -> Result<(), DockError> {
        self.check_leaf(leaf)?;
        let index = self.tab_index(leaf, widget).ok_or(DockError::NotATab)?;
        self.tabs_mut(leaf).current = Some(index);
        Ok(())
    }

    /// The tab container a widget is placed in, whether or not that container
    /// is reachable from the root.
    pub fn leaf_of(&self, widget: W) -> Option<NodeId> {
        self.placements.get(&widget).copied()
    }

    /// Number of widgets placed in this tree's tab containers.
    pub fn widget_count(&self) -> usize {
        self.placements.len()
    }

    /// Insert a widget into a tab container at `index` (clamped to the tab
    /// count) and select it. Returns the index it landed at.
    pub fn insert_tab(&mut self, leaf: NodeId, index: usize, widget: W) -> Result<usize, DockError> {
        self.check_leaf(leaf)?;
        if self.placements.contains_key(&widget) {
            return Err(DockError::AlreadyDocked);
        }
        Ok(self.attach_widget(leaf, index, widget))
    }

    /// Take a widget out of its tab container without collapsing anything.
    ///
    /// Returns the container it was removed from. An emptied container stays
    /// in place.
    pub fn remove_tab(&mut self, widget: W) -> Option<NodeId> {
        self.detach_widget(widget)
    }

    /// Change the orientation of a split container in place.
    pub fn set_orientation(&mut self, branch: NodeId, orientation: Orientation) -> Result<(), DockError> {
        self.check_branch(branch)?;
        self.split_mut(branch).orientation = orientation;
        Ok(())
    }

    /// Attach a detached node as a child of a split container.
    ///
    /// `index` is clamped to the child count. `weight` is stored in the
    /// parallel sizes array at the same position.
    pub fn insert_child_at(
        &mut self,
        branch: NodeId,
        index: usize,
        child: NodeId,
        weight: f64,
    ) -> Result<(), DockError> {
        self.check_branch(branch)?;
        let node = self.slot_opt(child).ok_or(DockError::StaleNode)?;
        if node.parent.is_some() || self.root == Some(child) {
            return Err(DockError::AlreadyAttached);
        }
        if self.is_ancestor(child, branch) {
            return Err(DockError::Cycle);
        }
        if !valid_weight(weight) {
            return Err(DockError::InvalidWeight);
        }
        self.link_child(branch, index, child, weight);
        Ok(())
    }

    /// Detach `child` from a split container and return the weight it held.
    ///
    /// The child stays alive; the container is not collapsed.
    pub fn remove_child(&mut self, branch: NodeId, child: NodeId) -> Result<f64, DockError> {
        self.check_branch(branch)?;
        self.unlink_child(branch, child).ok_or(DockError::NotAChild)
    }

    /// Replace the whole sizes array of a split container.
    ///
    /// The array must have one finite, non-negative weight per child. No
    /// rebalancing happens here.
    pub fn set_sizes(&mut self, branch: NodeId, sizes: &[f64]) -> Result<(), DockError> {
        self.check_branch(branch)?;
        let split = self.split_mut(branch);
        if sizes.len() != split.children.len() {
            return Err(DockError::SizeCountMismatch {
                expected: split.children.len(),
                found: sizes.len(),
            });
        }
        if !sizes.iter().copied().all(valid_weight) {
            return Err(DockError::InvalidWeight);
        }
        split.sizes.clear();
        split.sizes.extend_from_slice(sizes);
        Ok(())
    }

    /// Gap between adjacent children of every split container, in pixels.
    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    /// Set the gap between adjacent split children.
    ///
    /// Fractional values are floored and negative or NaN values become zero.
    /// A change is propagated to every split container in the arena.
    pub fn set_spacing(&mut self, spacing: f64) {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Spacing is a whole number of pixels; the cast floors and saturates."
        )]
        let spacing = if spacing > 0.0 { spacing as u32 } else { 0 };
        if spacing == self.spacing {
            return;
        }
        self.spacing = spacing;
        for node in self.nodes.iter_mut().flatten() {
            if let NodeKind::Split(split) = &mut node.kind {
                split.spacing = spacing;
            }
        }
    }

    /// Assign a rectangle to every node reachable from the root.
    ///
    /// The root receives `rect`; each split container divides its own
    /// rectangle along its axis, minus the gaps, in proportion to its weights.
    pub fn layout(&mut self, rect: Rect) {
        let Some(root) = self.root else {
            return;
        };
        let mut stack: SmallVec<[(NodeId, Rect); 16]> = SmallVec::new();
        stack.push((root, rect));
        while let Some((id, rect)) = stack.pop() {
            let node = self.slot_mut(id);
            node.rect = rect;
            if let NodeKind::Split(split) = &node.kind {
                let rects = split.child_rects(rect);
                for (&child, child_rect) in split.children.iter().zip(rects).rev() {
                    stack.push((child, child_rect));
                }
            }
        }
    }

    // --- internals ---

    /// Access a node; panics if `id` is stale.
    fn slot(&self, id: NodeId) -> &Node<W> {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    /// Access a node mutably; panics if `id` is stale.
    fn slot_mut(&mut self, id: NodeId) -> &mut Node<W> {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn slot_opt(&self, id: NodeId) -> Option<&Node<W>> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    pub(crate) fn check_leaf(&self, id: NodeId) -> Result<(), DockError> {
        match self.slot_opt(id).map(|n| &n.kind) {
            Some(NodeKind::Tabs(_)) => Ok(()),
            Some(NodeKind::Split(_)) => Err(DockError::NotALeaf),
            None => Err(DockError::StaleNode),
        }
    }

    fn check_branch(&self, id: NodeId) -> Result<(), DockError> {
        match self.slot_opt(id).map(|n| &n.kind) {
            Some(NodeKind::Split(_)) => Ok(()),
            Some(NodeKind::Tabs(_)) => Err(DockError::NotABranch),
            None => Err(DockError::StaleNode),
        }
    }

    /// Returns true if `ancestor` is `node` or lies on its parent chain.
    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent_of(id);
        }
        false
    }

    fn tabs_mut(&mut self, leaf: NodeId) -> &mut TabStack<W> {
        match &mut self.slot_mut(leaf).kind {
            NodeKind::Tabs(stack) => stack,
            NodeKind::Split(_) => unreachable!("expected a tab container"),
        }
    }

    pub(crate) fn split_mut(&mut self, branch: NodeId) -> &mut SplitNode {
        match &mut self.slot_mut(branch).kind {
            NodeKind::Split(split) => split,
            NodeKind::Tabs(_) => unreachable!("expected a split container"),
        }
    }

    /// Install `root` without any checks; the old root is left as is.
    pub(crate) fn replace_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    /// Insert `widget` into `leaf` at `index` (clamped), select it, and record its placement.
    pub(crate) fn attach_widget(&mut self, leaf: NodeId, index: usize, widget: W) -> usize {
        let stack = self.tabs_mut(leaf);
        let index = index.min(stack.widgets.len());
        stack.widgets.insert(index, widget);
        stack.current = Some(index);
        self.placements.insert(widget, leaf);
        index
    }

    /// Take `widget` out of its tab container and fix up the selection.
    pub(crate) fn detach_widget(&mut self, widget: W) -> Option<NodeId> {
        let leaf = self.placements.remove(&widget)?;
        let stack = self.tabs_mut(leaf);
        if let Some(index) = stack.widgets.iter().position(|w| *w == widget) {
            stack.widgets.remove(index);
            stack.current = match stack.current {
                _ if stack.widgets.is_empty() => None,
                Some(current) if current > index => Some(current - 1),
                Some(current) => Some(current.min(stack.widgets.len() - 1)),
                None => None,
            };
        }
        Some(leaf)
    }

    pub(crate) fn link_child(&mut self, branch: NodeId, index: usize, child: NodeId, weight: f64) {
        let split = self.split_mut(branch);
        let index = index.min(split.children.len());
        split.children.insert(index, child);
        split.sizes.insert(index, weight);
        self.slot_mut(child).parent = Some(branch);
    }

    pub(crate) fn unlink_child(&mut self, branch: NodeId, child: NodeId) -> Option<f64> {
        let split = self.split_mut(branch);
        let index = split.children.iter().position(|c| *c == child)?;
        split.children.remove(index);
        let weight = split.sizes.remove(index);
        self.slot_mut(child).parent = None;
        Some(weight)
    }

    /// Put `new` into the child slot at `index`, keeping the slot's weight.
    ///
    /// The previous occupant becomes detached.
    pub(crate) fn replace_child_at(&mut self, branch: NodeId, index: usize, new: NodeId) {
        let old = core::mem::replace(&mut self.split_mut(branch).children[index], new);
        self.slot_mut(old).parent = None;
        self.slot_mut(new).parent = Some(branch);
    }

    /// Free `id` and everything below it. The caller unlinks `id` first.
    pub(crate) fn free_subtree(&mut self, id: NodeId) {
        let mut stack: SmallVec<[NodeId; 8]> = SmallVec::new();
        stack.push(id);
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes[id.idx()].take() else {
                continue;
            };
            match node.kind {
                NodeKind::Tabs(tabs) => {
                    for widget in tabs.widgets {
                        self.placements.remove(&widget);
                    }
                }
                NodeKind::Split(split) => stack.extend(split.children),
            }
            self.free_list.push(id.idx());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch_with_leaves(tree: &mut DockTree<u32>, orientation: Orientation) -> (NodeId, NodeId, NodeId) {
        let branch = tree.create_branch(orientation);
        let a = tree.create_leaf();
        let b = tree.create_leaf();
        tree.insert_child_at(branch, 0, a, 1.0).unwrap();
        tree.insert_child_at(branch, 1, b, 1.0).unwrap();
        (branch, a, b)
    }

    #[test]
    fn children_and_sizes_stay_parallel() {
        let mut tree: DockTree<u32> = DockTree::new();
        let (branch, a, b) = branch_with_leaves(&mut tree, Orientation::Horizontal);
        let c = tree.create_leaf();
        tree.insert_child_at(branch, 1, c, 0.5).unwrap();
        assert_eq!(tree.children_of(branch), &[a, c, b]);
        assert_eq!(tree.sizes_of(branch), &[1.0, 0.5, 1.0]);
        assert_eq!(tree.parent_of(c), Some(branch));

        let weight = tree.remove_child(branch, c).unwrap();
        assert_eq!(weight, 0.5);
        assert_eq!(tree.children_of(branch), &[a, b]);
        assert_eq!(tree.sizes_of(branch), &[1.0, 1.0]);
        assert_eq!(tree.parent_of(c), None);
        assert!(tree.is_alive(c), "removed children stay alive");
    }

    #[test]
    fn insert_child_rejects_bad_input() {
        let mut tree: DockTree<u32> = DockTree::new();
        let (branch, a, _b) = branch_with_leaves(&mut tree, Orientation::Horizontal);
        let other = tree.create_branch(Orientation::Vertical);

        assert_eq!(
            tree.insert_child_at(other, 0, a, 1.0),
            Err(DockError::AlreadyAttached)
        );
        assert_eq!(
            tree.insert_child_at(a, 0, other, 1.0),
            Err(DockError::NotABranch)
        );
        assert_eq!(
            tree.insert_child_at(branch, 0, other, -1.0),
            Err(DockError::InvalidWeight)
        );
        assert_eq!(
            tree.insert_child_at(branch, 0, other, f64::NAN),
            Err(DockError::InvalidWeight)
        );

        tree.insert_child_at(branch, 2, other, 1.0).unwrap();
        assert_eq!(
            tree.insert_child_at(other, 0, branch, 1.0),
            Err(DockError::Cycle)
        );
        assert_eq!(
            tree.insert_child_at(branch, 0, branch, 1.0),
            Err(DockError::Cycle)
        );
    }

    #[test]
    fn set_sizes_checks_length_and_weights() {
        let mut tree: DockTree<u32> = DockTree::new();
        let (branch, ..) = branch_with_leaves(&mut tree, Orientation::Vertical);
        assert_eq!(
            tree.set_sizes(branch, &[1.0]),
            Err(DockError::SizeCountMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            tree.set_sizes(branch, &[1.0, f64::INFINITY]),
            Err(DockError::InvalidWeight)
        );
        tree.set_sizes(branch, &[3.0, 0.0]).unwrap();
        assert_eq!(tree.sizes_of(branch), &[3.0, 0.0]);
    }

    #[test]
    fn remove_frees_subtree_and_placements() {
        let mut tree: DockTree<u32> = DockTree::new();
        let (branch, a, b) = branch_with_leaves(&mut tree, Orientation::Horizontal);
        tree.set_root(Some(branch)).unwrap();
        tree.insert_tab(a, 0, 1).unwrap();
        tree.insert_tab(b, 0, 2).unwrap();
        assert_eq!(tree.widget_count(), 2);

        tree.remove(branch);
        assert!(!tree.is_alive(branch));
        assert!(!tree.is_alive(a));
        assert!(!tree.is_alive(b));
        assert_eq!(tree.root(), None);
        assert_eq!(tree.leaf_of(1), None);
        assert_eq!(tree.widget_count(), 0);

        // Slots are reused with a bumped generation.
        let fresh = tree.create_leaf();
        assert!(tree.is_alive(fresh));
        assert!(!tree.is_alive(a) && !tree.is_alive(b));
        assert_eq!(tree.node(a), None, "stale ids must not resolve");
    }

    #[test]
    fn tabs_track_selection() {
        let mut tree: DockTree<u32> = DockTree::new();
        let leaf = tree.create_leaf();
        assert_eq!(tree.insert_tab(leaf, 0, 10), Ok(0));
        assert_eq!(tree.insert_tab(leaf, 9, 30), Ok(1));
        assert_eq!(tree.insert_tab(leaf, 1, 20), Ok(1));
        assert_eq!(tree.tabs(leaf), &[10, 20, 30]);
        assert_eq!(tree.current_tab(leaf), Some(20));
        assert_eq!(tree.insert_tab(leaf, 0, 20), Err(DockError::AlreadyDocked));

        tree.set_current_tab(leaf, 30).unwrap();
        assert_eq!(tree.remove_tab(10), Some(leaf));
        assert_eq!(tree.current_tab(leaf), Some(30));
        assert_eq!(tree.remove_tab(30), Some(leaf));
        assert_eq!(tree.current_tab(leaf), Some(20));
        assert_eq!(tree.remove_tab(20), Some(leaf));
        assert_eq!(tree.current_tab(leaf), None);
        assert!(tree.is_alive(leaf), "empty tab containers are not removed");
        assert_eq!(tree.set_current_tab(leaf, 20), Err(DockError::NotATab));
    }

    #[test]
    fn spacing_is_floored_and_propagated() {
        let mut tree: DockTree<u32> = DockTree::with_spacing(2.9);
        assert_eq!(tree.spacing(), 2);
        let (branch, ..) = branch_with_leaves(&mut tree, Orientation::Horizontal);
        tree.set_spacing(7.5);
        assert!(matches!(
            tree.node(branch),
            Some(DockNode::Split { spacing: 7, .. })
        ));
        tree.set_spacing(-3.0);
        assert_eq!(tree.spacing(), 0);
        assert!(matches!(
            tree.node(branch),
            Some(DockNode::Split { spacing: 0, .. })
        ));
    }

    #[test]
    fn layout_shares_extent_by_weight() {
        let mut tree: DockTree<u32> = DockTree::with_spacing(10.0);
        let (branch, a, b) = branch_with_leaves(&mut tree, Orientation::Horizontal);
        tree.set_sizes(branch, &[3.0, 1.0]).unwrap();
        tree.set_root(Some(branch)).unwrap();
        tree.layout(Rect::new(0.0, 0.0, 410.0, 100.0));

        assert_eq!(tree.rect_of(branch), Some(Rect::new(0.0, 0.0, 410.0, 100.0)));
        assert_eq!(tree.rect_of(a), Some(Rect::new(0.0, 0.0, 300.0, 100.0)));
        assert_eq!(tree.rect_of(b), Some(Rect::new(310.0, 0.0, 410.0, 100.0)));
    }

    #[test]
    fn gaps_shrink_to_fit() {
        let mut tree: DockTree<u32> = DockTree::with_spacing(20.0);
        let (branch, a, b) = branch_with_leaves(&mut tree, Orientation::Horizontal);
        tree.set_root(Some(branch)).unwrap();
        tree.layout(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(tree.rect_of(a), Some(Rect::new(0.0, 0.0, 0.0, 10.0)));
        assert_eq!(tree.rect_of(b), Some(Rect::new(10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn layout_nested_and_zero_weights() {
        let mut tree: DockTree<u32> = DockTree::new();
        let (outer, a, _) = branch_with_leaves(&mut tree, Orientation::Vertical);
        let inner = tree.create_branch(Orientation::Horizontal);
        let c = tree.create_leaf();
        let d = tree.create_leaf();
        tree.insert_child_at(inner, 0, c, 0.0).unwrap();
        tree.insert_child_at(inner, 1, d, 0.0).unwrap();
        tree.insert_child_at(outer, 2, inner, 2.0).unwrap();
        tree.set_root(Some(outer)).unwrap();
        tree.layout(Rect::new(0.0, 0.0, 100.0, 400.0));

        assert_eq!(tree.rect_of(a), Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert_eq!(tree.rect_of(inner), Some(Rect::new(0.0, 200.0, 100.0, 400.0)));
        assert_eq!(tree.rect_of(c), Some(Rect::new(0.0, 200.0, 50.0, 400.0)));
        assert_eq!(tree.rect_of(d), Some(Rect::new(50.0, 200.0, 100.0, 400.0)));
    }

    #[test]
    fn set_root_requires_detached_node() {
        let mut tree: DockTree<u32> = DockTree::new();
        let (branch, a, _) = branch_with_leaves(&mut tree, Orientation::Horizontal);
        assert_eq!(tree.set_root(Some(a)), Err(DockError::AlreadyAttached));
        assert_eq!(tree.set_root(Some(branch)), Ok(None));
        assert_eq!(tree.set_root(Some(branch)), Ok(Some(branch)));
        let leaf = tree.create_leaf();
        assert_eq!(tree.set_root(Some(leaf)), Ok(Some(branch)));
        assert!(tree.is_alive(branch));
        tree.remove(branch);
        assert_eq!(tree.set_root(Some(branch)), Err(DockError::StaleNode));
    }
}
