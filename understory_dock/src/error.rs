// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Usage errors raised by tree mutations.

/// Errors returned by structural edits.
///
/// Every operation checks its preconditions before touching the tree, so an
/// error always means nothing was changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DockError {
    /// The widget and the reference widget are the same.
    #[error("a widget cannot be inserted relative to itself")]
    WidgetIsReference,
    /// The widget already sits in a tab container of this tree.
    #[error("the widget is already docked; remove it before inserting it again")]
    AlreadyDocked,
    /// The reference widget is not contained in this tree.
    #[error("the reference widget is not contained in this dock tree")]
    ReferenceNotFound,
    /// The node identifier is stale or was never issued by this tree.
    #[error("stale node identifier")]
    StaleNode,
    /// The node is a tab container where a split container was required.
    #[error("node is not a split container")]
    NotABranch,
    /// The node is a split container where a tab container was required.
    #[error("node is not a tab container")]
    NotALeaf,
    /// The node is alive but not reachable from the root.
    #[error("node is not part of the docked tree")]
    Detached,
    /// The node already has a parent or is installed as the root.
    #[error("node is already attached to the tree")]
    AlreadyAttached,
    /// The node is not a child of the given split container.
    #[error("node is not a child of the split container")]
    NotAChild,
    /// The widget is not a tab of the given tab container.
    #[error("widget is not a tab of the tab container")]
    NotATab,
    /// Attaching the node would make it its own ancestor.
    #[error("attaching the node would create a cycle")]
    Cycle,
    /// A sizes array does not match the number of children.
    #[error("expected {expected} sizes, got {found}")]
    SizeCountMismatch {
        /// Number of children of the split container.
        expected: usize,
        /// Number of sizes supplied.
        found: usize,
    },
    /// A size weight is negative or not finite.
    #[error("size weights must be finite and non-negative")]
    InvalidWeight,
}
