// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dock panel: a tree plus its geometry, options and drop feedback.

use alloc::string::String;
use core::hash::Hash;

use kurbo::{Insets, Point, Rect};
use tracing::trace;

use crate::drag::{DEFAULT_CONTENT_KIND, DragSessionState};
use crate::error::DockError;
use crate::overlay::{DockOverlay, OverlayState};
use crate::tree::DockTree;
use crate::types::{DockZone, DropTarget, InsertLocation};
use crate::zone::{EDGE_SIZE, OverlayGeometry, overlay_geometry, panel_zone, root_zone};

/// Panel configuration.
///
/// ```
/// use kurbo::Insets;
/// use understory_dock::DockOptions;
///
/// let options = DockOptions::default()
///     .with_spacing(6.0)
///     .with_padding(Insets::uniform(8.0));
/// assert_eq!(options.spacing, 6.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DockOptions {
    /// Thickness of the root edge bands.
    pub edge_size: f64,
    /// Gap between split children; floored and clamped at zero when applied.
    pub spacing: f64,
    /// Space between the border and the docked content.
    pub padding: Insets,
    /// Border widths of the panel box.
    pub border: Insets,
    /// Content kind a drag payload must advertise to be accepted.
    pub accepted_kind: String,
}

impl Default for DockOptions {
    fn default() -> Self {
        Self {
            edge_size: EDGE_SIZE,
            spacing: 4.0,
            padding: Insets::ZERO,
            border: Insets::ZERO,
            accepted_kind: String::from(DEFAULT_CONTENT_KIND),
        }
    }
}

impl DockOptions {
    /// Set the root edge band thickness.
    pub fn with_edge_size(mut self, edge_size: f64) -> Self {
        self.edge_size = edge_size;
        self
    }

    /// Set the gap between split children.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the padding inside the border.
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Set the border widths.
    pub fn with_border(mut self, border: Insets) -> Self {
        self.border = border;
        self
    }

    /// Set the accepted drag content kind.
    pub fn with_accepted_kind(mut self, kind: impl Into<String>) -> Self {
        self.accepted_kind = kind.into();
        self
    }
}

/// A docking area.
///
/// Owns the [`DockTree`], the panel's bounds, and the drop overlay. Every
/// structural edit made through the panel re-lays out the tree so that zone
/// hit testing always sees current rectangles.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_dock::{DockPanel, DockZone, InsertLocation};
///
/// let mut panel = DockPanel::new();
/// panel.layout(Rect::new(0.0, 0.0, 400.0, 300.0));
/// panel.add_widget(1_u32, None).unwrap();
/// panel.insert_widget(InsertLocation::SplitRight, 2, Some(1)).unwrap();
///
/// let target = panel.find_target(Point::new(300.0, 150.0)).unwrap();
/// assert_eq!(target.zone, DockZone::PanelCenter);
/// assert_eq!(target.leaf, panel.tree().leaf_of(2));
/// ```
#[derive(Debug)]
pub struct DockPanel<W, O = OverlayState> {
    tree: DockTree<W>,
    options: DockOptions,
    bounds: Rect,
    pub(crate) overlay: O,
    pub(crate) session: DragSessionState,
}

impl<W: Copy + Eq + Hash> DockPanel<W> {
    /// An empty panel with default options.
    pub fn new() -> Self {
        Self::with_options(DockOptions::default())
    }

    /// An empty panel with the given options.
    pub fn with_options(options: DockOptions) -> Self {
        Self::with_overlay(options, OverlayState::new())
    }
}

impl<W: Copy + Eq + Hash> Default for DockPanel<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Copy + Eq + Hash, O: DockOverlay> DockPanel<W, O> {
    /// An empty panel reporting drop feedback to `overlay`.
    pub fn with_overlay(options: DockOptions, overlay: O) -> Self {
        let tree = DockTree::with_spacing(options.spacing);
        Self {
            tree,
            options,
            bounds: Rect::ZERO,
            overlay,
            session: DragSessionState::Idle,
        }
    }

    /// The split/tab tree.
    pub fn tree(&self) -> &DockTree<W> {
        &self.tree
    }

    /// Mutable access to the tree.
    ///
    /// Call [`DockPanel::relayout`] after editing it directly.
    pub fn tree_mut(&mut self) -> &mut DockTree<W> {
        &mut self.tree
    }

    /// The panel options.
    pub fn options(&self) -> &DockOptions {
        &self.options
    }

    /// The overlay receiving drop feedback.
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// Mutable access to the overlay.
    pub fn overlay_mut(&mut self) -> &mut O {
        &mut self.overlay
    }

    /// The drag session state.
    pub fn session_state(&self) -> DragSessionState {
        self.session
    }

    /// Gap between split children, in whole pixels.
    pub fn spacing(&self) -> u32 {
        self.tree.spacing()
    }

    /// Change the gap between split children and re-lay out.
    pub fn set_spacing(&mut self, spacing: f64) {
        self.options.spacing = spacing;
        self.tree.set_spacing(spacing);
        self.relayout();
    }

    /// The panel's border box as of the last [`DockPanel::layout`].
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The area inside the border and padding, where the tree is laid out.
    pub fn content_rect(&self) -> Rect {
        self.bounds - self.options.border - self.options.padding
    }

    /// Set the panel's border box and lay the tree out inside it.
    pub fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.relayout();
    }

    /// Lay the tree out again inside the current bounds.
    pub fn relayout(&mut self) {
        let content = self.content_rect();
        self.tree.layout(content);
    }

    /// Insert a widget; see [`DockTree::insert_widget`].
    pub fn insert_widget(
        &mut self,
        location: InsertLocation,
        widget: W,
        reference: Option<W>,
    ) -> Result<(), DockError> {
        self.tree.insert_widget(location, widget, reference)?;
        self.relayout();
        Ok(())
    }

    /// Add a widget as a tab; see [`DockTree::add_widget`].
    pub fn add_widget(&mut self, widget: W, reference: Option<W>) -> Result<(), DockError> {
        self.insert_widget(InsertLocation::TabAfter, widget, reference)
    }

    /// Undock a widget; see [`DockTree::remove_widget`].
    pub fn remove_widget(&mut self, widget: W) -> bool {
        let removed = self.tree.remove_widget(widget);
        if removed {
            self.relayout();
        }
        removed
    }

    /// Returns true if `widget` is docked in this panel.
    pub fn contains(&self, widget: W) -> bool {
        self.tree.contains(widget)
    }

    /// Classify `point` as a drop target.
    ///
    /// Returns `None` outside the panel's bounds, or inside the content when no
    /// tab container is under the point. An empty panel is a single
    /// [`DockZone::RootCenter`] target. Otherwise the root edge bands of the
    /// content rectangle take precedence over the tab containers below them.
    pub fn find_target(&self, point: Point) -> Option<DropTarget> {
        if !self.bounds.contains(point) {
            return None;
        }
        let target = if self.tree.root().is_none() {
            DropTarget {
                zone: DockZone::RootCenter,
                leaf: None,
            }
        } else if let Some(zone) = root_zone(self.content_rect(), point, self.options.edge_size) {
            DropTarget { zone, leaf: None }
        } else {
            let leaf = self.tree.leaf_at(point)?;
            let rect = self.tree.rect_of(leaf)?;
            DropTarget {
                zone: panel_zone(rect, point),
                leaf: Some(leaf),
            }
        };
        trace!(?point, zone = ?target.zone, "classified drop target");
        Some(target)
    }

    /// Where the overlay goes for `target`.
    pub fn overlay_geometry(&self, target: DropTarget) -> OverlayGeometry {
        let area = target
            .leaf
            .and_then(|leaf| self.tree.rect_of(leaf))
            .unwrap_or_else(|| self.content_rect());
        overlay_geometry(target.zone, area, self.bounds, self.options.border)
    }
}
