// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-and-drop coordination.
//!
//! A drag session runs through four host-driven transitions on
//! [`DockPanel`]:
//!
//! - [`DockPanel::drag_enter`] admits payloads that advertise the accepted
//!   content kind and starts a session.
//! - [`DockPanel::drag_over`] classifies the pointer, shows or hides the
//!   overlay, and answers with the drop action the panel would perform.
//! - [`DockPanel::drag_leave`] ends the session unless the pointer only moved
//!   onto a descendant of the panel.
//! - [`DockPanel::drag_drop`] materializes the widget from the payload's
//!   factory and applies the drop to the tree.
//!
//! Every transition returns a [`DragResponse`]; a rejected drop is reported
//! with [`DropAction::None`], never as an error.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_dock::{DockPanel, DragPayload, DropAction, DropActions};
//!
//! let mut panel: DockPanel<u32> = DockPanel::new();
//! panel.layout(Rect::new(0.0, 0.0, 400.0, 300.0));
//!
//! let mut payload = DragPayload::new(DropActions::MOVE);
//! payload.set_factory(understory_dock::DEFAULT_CONTENT_KIND, || Some(7));
//!
//! assert!(panel.drag_enter(&payload).consumed);
//! let over = panel.drag_over(Point::new(200.0, 150.0), DropAction::Move, &payload);
//! assert_eq!(over.drop_action, DropAction::Move);
//!
//! let dropped = panel.drag_drop(Point::new(200.0, 150.0), DropAction::Move, &mut payload);
//! assert_eq!(dropped.drop_action, DropAction::Move);
//! assert!(panel.contains(7));
//! ```

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use kurbo::Point;
use tracing::{trace, warn};

use crate::overlay::DockOverlay;
use crate::panel::DockPanel;
use crate::types::DropTarget;

/// Content kind advertised by drags that carry a dockable widget.
pub const DEFAULT_CONTENT_KIND: &str = "application/x-dock-widget";

bitflags::bitflags! {
    /// Set of drop actions a drag source supports.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DropActions: u8 {
        /// The data is copied.
        const COPY = 0b0000_0001;
        /// The data is moved.
        const MOVE = 0b0000_0010;
        /// The data is linked.
        const LINK = 0b0000_0100;
    }
}

impl Default for DropActions {
    fn default() -> Self {
        Self::MOVE
    }
}

/// A single proposed or accepted drop action.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DropAction {
    /// No action; the drag is rejected or cancelled.
    #[default]
    None,
    /// Copy.
    Copy,
    /// Move.
    Move,
    /// Link.
    Link,
}

impl DropAction {
    /// The flag for this action, or the empty set for [`DropAction::None`].
    pub const fn flag(self) -> DropActions {
        match self {
            Self::None => DropActions::empty(),
            Self::Copy => DropActions::COPY,
            Self::Move => DropActions::MOVE,
            Self::Link => DropActions::LINK,
        }
    }
}

/// State of the current drag session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragSessionState {
    /// No accepted drag over the panel.
    #[default]
    Idle,
    /// An accepted drag is over a valid target.
    Active,
    /// An accepted drag is over an invalid target or proposes an unusable action.
    Rejected,
}

/// Answer to a drag transition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DragResponse {
    /// Whether the panel handled the event.
    pub consumed: bool,
    /// The action the panel performs (or would perform) for this drag.
    pub drop_action: DropAction,
}

impl DragResponse {
    const IGNORED: Self = Self {
        consumed: false,
        drop_action: DropAction::None,
    };
    const REJECTED: Self = Self {
        consumed: true,
        drop_action: DropAction::None,
    };

    const fn accepted(action: DropAction) -> Self {
        Self {
            consumed: true,
            drop_action: action,
        }
    }
}

enum PayloadEntry<W> {
    Data(Vec<u8>),
    Factory(Box<dyn FnMut() -> Option<W>>),
}

/// Data carried by a drag, keyed by content kind.
///
/// An entry is either opaque bytes or a factory producing the widget to dock.
/// Only factories can be materialized by a drop.
pub struct DragPayload<W> {
    entries: BTreeMap<String, PayloadEntry<W>>,
    supported_actions: DropActions,
}

impl<W> core::fmt::Debug for DragPayload<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DragPayload")
            .field("kinds", &self.entries.keys().collect::<Vec<_>>())
            .field("supported_actions", &self.supported_actions)
            .finish()
    }
}

impl<W> DragPayload<W> {
    /// An empty payload supporting `supported_actions`.
    pub fn new(supported_actions: DropActions) -> Self {
        Self {
            entries: BTreeMap::new(),
            supported_actions,
        }
    }

    /// Actions the drag source allows.
    pub fn supported_actions(&self) -> DropActions {
        self.supported_actions
    }

    /// Returns true if `action` is a real action the source allows.
    pub fn supports(&self, action: DropAction) -> bool {
        action != DropAction::None && self.supported_actions.contains(action.flag())
    }

    /// Register a factory for `kind`, replacing any previous entry.
    pub fn set_factory(
        &mut self,
        kind: impl Into<String>,
        factory: impl FnMut() -> Option<W> + 'static,
    ) {
        self.entries
            .insert(kind.into(), PayloadEntry::Factory(Box::new(factory)));
    }

    /// Register opaque data for `kind`, replacing any previous entry.
    pub fn set_data(&mut self, kind: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.entries
            .insert(kind.into(), PayloadEntry::Data(data.into()));
    }

    /// Returns true if the payload has an entry of `kind`.
    pub fn has_kind(&self, kind: &str) -> bool {
        self.entries.contains_key(kind)
    }

    /// The opaque data registered for `kind`, if that entry is data.
    pub fn data(&self, kind: &str) -> Option<&[u8]> {
        match self.entries.get(kind)? {
            PayloadEntry::Data(data) => Some(data),
            PayloadEntry::Factory(_) => None,
        }
    }

    /// Invoke the factory registered for `kind`.
    ///
    /// Returns `None` if there is no such entry, the entry is data, or the
    /// factory produced nothing.
    pub fn materialize(&mut self, kind: &str) -> Option<W> {
        match self.entries.get_mut(kind)? {
            PayloadEntry::Factory(factory) => factory(),
            PayloadEntry::Data(_) => None,
        }
    }
}

impl<W: Copy + Eq + Hash, O: DockOverlay> DockPanel<W, O> {
    /// A drag entered the panel.
    ///
    /// Payloads without the accepted content kind are ignored and leave the
    /// session and overlay untouched.
    pub fn drag_enter(&mut self, payload: &DragPayload<W>) -> DragResponse {
        if !payload.has_kind(&self.options().accepted_kind) {
            trace!("drag without accepted content kind ignored");
            return DragResponse::IGNORED;
        }
        self.session = DragSessionState::Active;
        DragResponse::accepted(DropAction::None)
    }

    /// The drag left the panel.
    ///
    /// `related_inside` is true when the pointer moved onto a descendant of the
    /// panel, in which case the session continues.
    pub fn drag_leave(&mut self, related_inside: bool) -> DragResponse {
        if !related_inside {
            self.overlay.hide();
            self.session = DragSessionState::Idle;
        }
        DragResponse::accepted(DropAction::None)
    }

    /// The drag moved over the panel.
    ///
    /// Ignored unless a session is running. Shows the overlay for a valid
    /// target and echoes `proposed`; otherwise hides it and rejects.
    pub fn drag_over(
        &mut self,
        point: Point,
        proposed: DropAction,
        payload: &DragPayload<W>,
    ) -> DragResponse {
        if self.session == DragSessionState::Idle {
            return DragResponse::IGNORED;
        }
        let target = match self.usable_target(point, proposed, payload) {
            Some(target) => target,
            None => {
                self.overlay.hide();
                self.session = DragSessionState::Rejected;
                return DragResponse::REJECTED;
            }
        };
        let geometry = self.overlay_geometry(target);
        trace!(zone = ?target.zone, ?proposed, "drag over");
        self.overlay.show(target.zone, geometry);
        self.session = DragSessionState::Active;
        DragResponse::accepted(proposed)
    }

    /// The drag was released over the panel.
    ///
    /// Always hides the overlay and ends the session. The widget comes from
    /// the payload's factory for the accepted content kind; a missing factory,
    /// a factory returning `None`, an unusable action or target, or an edit the
    /// tree refuses all reject the drop.
    pub fn drag_drop(
        &mut self,
        point: Point,
        proposed: DropAction,
        payload: &mut DragPayload<W>,
    ) -> DragResponse {
        self.overlay.hide();
        self.session = DragSessionState::Idle;

        let Some(target) = self.usable_target(point, proposed, payload) else {
            return DragResponse::REJECTED;
        };
        let kind = self.options().accepted_kind.clone();
        let Some(widget) = payload.materialize(&kind) else {
            trace!("drag payload produced no widget");
            return DragResponse::REJECTED;
        };
        match self.tree_mut().drop_widget(target, widget) {
            Ok(_) => {
                self.relayout();
                DragResponse::accepted(proposed)
            }
            Err(err) => {
                warn!(%err, zone = ?target.zone, "drop rejected");
                DragResponse::REJECTED
            }
        }
    }

    fn usable_target(
        &self,
        point: Point,
        proposed: DropAction,
        payload: &DragPayload<W>,
    ) -> Option<DropTarget> {
        if !payload.supports(proposed) {
            return None;
        }
        self.find_target(point)
    }
}
