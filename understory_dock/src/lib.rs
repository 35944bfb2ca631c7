// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dock --heading-base-level=0

//! Understory Dock: a docking layout model with split/tab trees and drag-and-drop insertion.
//!
//! A dock panel arranges caller-owned widgets in a tree of two node kinds:
//!
//! - Tab containers (leaves) hold an ordered stack of widgets, one of which is selected.
//! - Split containers (branches) lay their children out horizontally or vertically,
//!   sharing the available extent in proportion to per-child weights, with a fixed
//!   gap between neighbours.
//!
//! Widgets are opaque `Copy + Eq + Hash` keys. The crate never renders anything: it
//! lays out rectangles, classifies pointer positions into drop zones, and reports
//! overlay feedback through the [`DockOverlay`] trait.
//!
//! ## Inserting widgets
//!
//! [`DockTree::insert_widget`] places a widget at an [`InsertLocation`] relative to a
//! reference widget already in the tree, or along an edge of the whole tree when no
//! reference is given:
//!
//! ```
//! use understory_dock::{DockTree, InsertLocation, Orientation};
//!
//! let mut tree = DockTree::new();
//! tree.add_widget('a', None).unwrap();
//! tree.insert_widget(InsertLocation::SplitRight, 'b', Some('a')).unwrap();
//! tree.insert_widget(InsertLocation::SplitBottom, 'c', Some('b')).unwrap();
//! tree.insert_widget(InsertLocation::TabBefore, 'd', Some('c')).unwrap();
//!
//! // Horizontal[ [a], Vertical[ [b], [d, c] ] ]
//! assert_eq!(tree.widgets(), vec!['a', 'b', 'd', 'c']);
//! let root = tree.root().unwrap();
//! assert_eq!(tree.orientation_of(root), Some(Orientation::Horizontal));
//!
//! // Removing a widget collapses what it leaves behind.
//! tree.remove_widget('b');
//! tree.remove_widget('a');
//! let root = tree.root().unwrap();
//! assert!(tree.is_leaf(root));
//! assert_eq!(tree.tabs(root), &['d', 'c']);
//! ```
//!
//! ## Drop zones
//!
//! While a drag is over the panel, [`DockPanel::find_target`] maps the pointer to one
//! of ten [`DockZone`]s: a band along each edge of the panel, or one of five regions of
//! the tab container under the pointer. The drag transitions on [`DockPanel`]
//! (`drag_enter`, `drag_over`, `drag_leave`, `drag_drop`) drive the overlay and apply
//! the drop through [`DockTree::drop_widget`].
//!
//! ## API overview
//!
//! - [`DockTree`]: node arena, structural primitives, layout, and the insertion engine.
//! - [`DockPanel`]: a tree plus bounds, [`DockOptions`], overlay, and drag session.
//! - [`NodeId`]: generational handle of a node.
//! - [`root_zone`] / [`panel_zone`] / [`overlay_geometry`]: pure zone geometry.
//! - [`DragPayload`], [`DropAction`], [`DropActions`], [`DragResponse`]: drag plumbing.
//! - [`DockError`]: usage errors from structural edits.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in dependencies.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod drag;
mod error;
mod insert;
mod overlay;
mod panel;
mod query;
mod tree;
mod types;
mod zone;

pub use drag::{
    DEFAULT_CONTENT_KIND, DragPayload, DragResponse, DragSessionState, DropAction, DropActions,
};
pub use error::DockError;
pub use overlay::{DockOverlay, OverlayState};
pub use panel::{DockOptions, DockPanel};
pub use tree::{DockNode, DockTree};
pub use types::{DockZone, DropTarget, InsertLocation, NodeId, Orientation};
pub use zone::{EDGE_SIZE, OverlayGeometry, overlay_geometry, overlay_rect, panel_zone, root_zone};
