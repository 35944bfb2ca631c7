// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop feedback overlay.
//!
//! The panel never draws anything itself. It reports the zone under the
//! pointer, and where the overlay should go, to a [`DockOverlay`]
//! implementation supplied by the host. [`OverlayState`] is a plain recording
//! implementation that hosts can read back when painting.

use crate::types::DockZone;
use crate::zone::OverlayGeometry;

/// Receiver for drop feedback.
pub trait DockOverlay {
    /// Show the overlay for `zone` at `geometry`, replacing whatever was shown before.
    fn show(&mut self, zone: DockZone, geometry: OverlayGeometry);

    /// Hide the overlay. Hiding an already hidden overlay is a no-op.
    fn hide(&mut self);
}

/// Retained overlay state.
///
/// At most one zone modifier is applied at a time: showing a new zone removes
/// the previous modifier first, and hiding removes it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OverlayState {
    zone: Option<DockZone>,
    geometry: Option<OverlayGeometry>,
}

impl OverlayState {
    /// A hidden overlay.
    pub const fn new() -> Self {
        Self {
            zone: None,
            geometry: None,
        }
    }

    /// Whether the overlay is currently shown.
    pub const fn is_visible(&self) -> bool {
        self.zone.is_some()
    }

    /// The zone currently shown.
    pub const fn zone(&self) -> Option<DockZone> {
        self.zone
    }

    /// The modifier class currently applied, see [`DockZone::class_name`].
    pub fn modifier(&self) -> Option<&'static str> {
        self.zone.map(DockZone::class_name)
    }

    /// Placement of the visible overlay.
    pub const fn geometry(&self) -> Option<OverlayGeometry> {
        self.geometry
    }
}

impl DockOverlay for OverlayState {
    fn show(&mut self, zone: DockZone, geometry: OverlayGeometry) {
        self.zone = Some(zone);
        self.geometry = Some(geometry);
    }

    fn hide(&mut self) {
        self.zone = None;
        self.geometry = None;
    }
}
