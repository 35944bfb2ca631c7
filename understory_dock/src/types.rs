// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the dock tree: node identifiers, orientations, locations, and zones.

/// Identifier for a node in the dock tree (generational).
///
/// Identifiers of nodes that were collapsed away become stale; every query on
/// [`DockTree`](crate::DockTree) treats a stale identifier as absent.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Direction in which a split container lays out its children.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children are placed left to right.
    #[default]
    Horizontal,
    /// Children are placed top to bottom.
    Vertical,
}

/// Symbolic location used by [`DockTree::insert_widget`](crate::DockTree::insert_widget).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InsertLocation {
    /// Split above the reference (or along the top edge of the root).
    SplitTop,
    /// Split left of the reference (or along the left edge of the root).
    SplitLeft,
    /// Split right of the reference (or along the right edge of the root).
    SplitRight,
    /// Split below the reference (or along the bottom edge of the root).
    SplitBottom,
    /// Insert as a tab before the reference widget.
    TabBefore,
    /// Insert as a tab after the reference widget.
    TabAfter,
}

impl InsertLocation {
    /// The split orientation and whether the new leaf trails the anchor.
    ///
    /// Returns `None` for the tab locations.
    pub const fn split(self) -> Option<(Orientation, bool)> {
        match self {
            Self::SplitTop => Some((Orientation::Vertical, false)),
            Self::SplitLeft => Some((Orientation::Horizontal, false)),
            Self::SplitRight => Some((Orientation::Horizontal, true)),
            Self::SplitBottom => Some((Orientation::Vertical, true)),
            Self::TabBefore | Self::TabAfter => None,
        }
    }
}

/// One of the ten discrete docking targets derived from pointer geometry.
///
/// Root zones address the edges of the whole panel; panel zones address one
/// tab container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DockZone {
    /// Top edge of the panel.
    RootTop,
    /// Left edge of the panel.
    RootLeft,
    /// Right edge of the panel.
    RootRight,
    /// Bottom edge of the panel.
    RootBottom,
    /// The whole panel; only reported while the panel is empty.
    RootCenter,
    /// Top half of a tab container.
    PanelTop,
    /// Left half of a tab container.
    PanelLeft,
    /// Right half of a tab container.
    PanelRight,
    /// Bottom half of a tab container.
    PanelBottom,
    /// The tab stack of a tab container.
    PanelCenter,
}

impl DockZone {
    /// Every zone, root zones first.
    pub const ALL: [Self; 10] = [
        Self::RootTop,
        Self::RootLeft,
        Self::RootRight,
        Self::RootBottom,
        Self::RootCenter,
        Self::PanelTop,
        Self::PanelLeft,
        Self::PanelRight,
        Self::PanelBottom,
        Self::PanelCenter,
    ];

    /// Returns true for the five root zones.
    pub const fn is_root(self) -> bool {
        matches!(
            self,
            Self::RootTop | Self::RootLeft | Self::RootRight | Self::RootBottom | Self::RootCenter
        )
    }

    /// The modifier identifier the overlay applies while showing this zone.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::RootTop => "dock-mod-root-top",
            Self::RootLeft => "dock-mod-root-left",
            Self::RootRight => "dock-mod-root-right",
            Self::RootBottom => "dock-mod-root-bottom",
            Self::RootCenter => "dock-mod-root-center",
            Self::PanelTop => "dock-mod-panel-top",
            Self::PanelLeft => "dock-mod-panel-left",
            Self::PanelRight => "dock-mod-panel-right",
            Self::PanelBottom => "dock-mod-panel-bottom",
            Self::PanelCenter => "dock-mod-panel-center",
        }
    }

    /// The insertion a drop on this zone performs.
    ///
    /// Root zones never carry a reference widget, so they map to a split
    /// location directly (the root center docks to the left by convention).
    /// Panel zones map to the split or tab location applied relative to a
    /// widget in the target container.
    pub const fn location(self) -> InsertLocation {
        match self {
            Self::RootTop | Self::PanelTop => InsertLocation::SplitTop,
            Self::RootLeft | Self::RootCenter | Self::PanelLeft => InsertLocation::SplitLeft,
            Self::RootRight | Self::PanelRight => InsertLocation::SplitRight,
            Self::RootBottom | Self::PanelBottom => InsertLocation::SplitBottom,
            Self::PanelCenter => InsertLocation::TabAfter,
        }
    }
}

/// A classified drop target: the zone plus the tab container it refers to.
///
/// `leaf` is `None` for root zones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DropTarget {
    /// The zone under the pointer.
    pub zone: DockZone,
    /// The tab container the zone belongs to, for panel zones.
    pub leaf: Option<NodeId>,
}
