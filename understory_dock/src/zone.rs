// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zone classification for drop feedback.
//!
//! Two independent classifiers map a pointer position to a [`DockZone`]:
//!
//! - [`root_zone`] tests a thin band along each edge of the panel's content
//!   rectangle. Corners are split along their diagonal, so a point close to
//!   the top-left corner resolves to whichever edge it is nearer.
//! - [`panel_zone`] divides a tab container into a 3×3 grid. The corner cells
//!   are split diagonally between their two edges; the center cell and the
//!   middle of each long edge map to the center or that edge.
//!
//! [`overlay_geometry`] turns a zone into the rectangle the drop overlay
//! should cover.

use kurbo::{Insets, Point, Rect};

use crate::types::DockZone;

/// Default thickness of the root edge bands, in pixels.
pub const EDGE_SIZE: f64 = 30.0;

/// Classify `point` against the edge bands of `rect`.
///
/// Returns `None` when the point is farther than `edge_size` from every edge.
/// Never returns [`DockZone::RootCenter`].
pub fn root_zone(rect: Rect, point: Point, edge_size: f64) -> Option<DockZone> {
    let Point { x, y } = point;
    if x < rect.x0 + edge_size {
        let dx = x - rect.x0;
        return Some(if y - rect.y0 < dx {
            DockZone::RootTop
        } else if rect.y1 - y < dx {
            DockZone::RootBottom
        } else {
            DockZone::RootLeft
        });
    }
    if x > rect.x1 - edge_size {
        let dx = rect.x1 - x;
        return Some(if y - rect.y0 < dx {
            DockZone::RootTop
        } else if rect.y1 - y < dx {
            DockZone::RootBottom
        } else {
            DockZone::RootRight
        });
    }
    if y < rect.y0 + edge_size {
        return Some(DockZone::RootTop);
    }
    if y > rect.y1 - edge_size {
        return Some(DockZone::RootBottom);
    }
    None
}

/// Classify `point` within a tab container's rectangle.
///
/// Always yields a panel zone; a degenerate rectangle yields
/// [`DockZone::PanelCenter`].
pub fn panel_zone(rect: Rect, point: Point) -> DockZone {
    let (w, h) = (rect.width(), rect.height());
    if !(w > 0.0 && h > 0.0) {
        return DockZone::PanelCenter;
    }
    let fx = (point.x - rect.x0) / w;
    let fy = (point.y - rect.y0) / h;
    const THIRD: f64 = 1.0 / 3.0;
    const TWO_THIRDS: f64 = 2.0 / 3.0;

    if fx < THIRD {
        if fy < fx {
            DockZone::PanelTop
        } else if 1.0 - fy < fx {
            DockZone::PanelBottom
        } else {
            DockZone::PanelLeft
        }
    } else if fx < TWO_THIRDS {
        if fy < THIRD {
            DockZone::PanelTop
        } else if fy >= TWO_THIRDS {
            DockZone::PanelBottom
        } else {
            DockZone::PanelCenter
        }
    } else if fy < 1.0 - fx {
        DockZone::PanelTop
    } else if fy > fx {
        DockZone::PanelBottom
    } else {
        DockZone::PanelRight
    }
}

/// The area the overlay covers for `zone` over `area`.
///
/// `area` is the panel's content rectangle for root zones and the target tab
/// container's rectangle for panel zones. Edge zones cover the matching half;
/// the center zones cover all of it.
pub fn overlay_rect(zone: DockZone, area: Rect) -> Rect {
    let mid_x = (area.x0 + area.x1) * 0.5;
    let mid_y = (area.y0 + area.y1) * 0.5;
    match zone {
        DockZone::RootTop | DockZone::PanelTop => Rect::new(area.x0, area.y0, area.x1, mid_y),
        DockZone::RootLeft | DockZone::PanelLeft => Rect::new(area.x0, area.y0, mid_x, area.y1),
        DockZone::RootRight | DockZone::PanelRight => Rect::new(mid_x, area.y0, area.x1, area.y1),
        DockZone::RootBottom | DockZone::PanelBottom => {
            Rect::new(area.x0, mid_y, area.x1, area.y1)
        }
        DockZone::RootCenter | DockZone::PanelCenter => area,
    }
}

/// Where the drop overlay goes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayGeometry {
    /// The overlay rectangle in panel coordinates.
    pub rect: Rect,
    /// The same rectangle as distances from each side of the panel's bounds
    /// minus its border.
    pub offsets: Insets,
}

/// Compute the overlay placement for `zone`.
///
/// `bounds` is the panel's border box and `border` its border widths; the
/// offsets are measured from the inside of the border.
pub fn overlay_geometry(zone: DockZone, area: Rect, bounds: Rect, border: Insets) -> OverlayGeometry {
    let rect = overlay_rect(zone, area);
    let inner = bounds - border;
    OverlayGeometry {
        rect,
        offsets: Insets::new(
            rect.x0 - inner.x0,
            rect.y0 - inner.y0,
            inner.x1 - rect.x1,
            inner.y1 - rect.y1,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: Rect = Rect::new(0.0, 0.0, 300.0, 200.0);

    #[test]
    fn root_edges_and_interior() {
        let zone = |x, y| root_zone(PANEL, Point::new(x, y), EDGE_SIZE);
        assert_eq!(zone(10.0, 100.0), Some(DockZone::RootLeft));
        assert_eq!(zone(290.0, 100.0), Some(DockZone::RootRight));
        assert_eq!(zone(150.0, 10.0), Some(DockZone::RootTop));
        assert_eq!(zone(150.0, 190.0), Some(DockZone::RootBottom));
        assert_eq!(zone(150.0, 100.0), None);
        // Band boundaries are exclusive.
        assert_eq!(zone(30.0, 100.0), None);
        assert_eq!(zone(270.0, 100.0), None);
    }

    #[test]
    fn root_corners_split_diagonally() {
        let zone = |x, y| root_zone(PANEL, Point::new(x, y), EDGE_SIZE);
        assert_eq!(zone(20.0, 5.0), Some(DockZone::RootTop));
        assert_eq!(zone(5.0, 20.0), Some(DockZone::RootLeft));
        assert_eq!(zone(20.0, 195.0), Some(DockZone::RootBottom));
        assert_eq!(zone(295.0, 20.0), Some(DockZone::RootRight));
        assert_eq!(zone(280.0, 5.0), Some(DockZone::RootTop));
        assert_eq!(zone(280.0, 195.0), Some(DockZone::RootBottom));
    }

    #[test]
    fn root_zone_respects_edge_size() {
        let p = Point::new(40.0, 100.0);
        assert_eq!(root_zone(PANEL, p, EDGE_SIZE), None);
        assert_eq!(root_zone(PANEL, p, 50.0), Some(DockZone::RootLeft));
    }

    #[test]
    fn panel_grid() {
        let r = Rect::new(0.0, 0.0, 90.0, 90.0);
        let zone = |x, y| panel_zone(r, Point::new(x, y));
        assert_eq!(zone(45.0, 45.0), DockZone::PanelCenter);
        assert_eq!(zone(45.0, 10.0), DockZone::PanelTop);
        assert_eq!(zone(45.0, 80.0), DockZone::PanelBottom);
        assert_eq!(zone(10.0, 45.0), DockZone::PanelLeft);
        assert_eq!(zone(80.0, 45.0), DockZone::PanelRight);
        // Corner cells split along the diagonal.
        assert_eq!(zone(20.0, 10.0), DockZone::PanelTop);
        assert_eq!(zone(10.0, 20.0), DockZone::PanelLeft);
        assert_eq!(zone(20.0, 85.0), DockZone::PanelBottom);
        assert_eq!(zone(85.0, 20.0), DockZone::PanelRight);
        assert_eq!(zone(70.0, 10.0), DockZone::PanelTop);
        assert_eq!(zone(75.0, 85.0), DockZone::PanelBottom);
    }

    #[test]
    fn degenerate_panel_is_center() {
        let r = Rect::new(10.0, 10.0, 10.0, 50.0);
        assert_eq!(panel_zone(r, Point::new(10.0, 20.0)), DockZone::PanelCenter);
    }

    #[test]
    fn overlay_halves_and_offsets() {
        let bounds = Rect::new(0.0, 0.0, 320.0, 220.0);
        let border = Insets::uniform(10.0);
        let content = Rect::new(10.0, 10.0, 310.0, 210.0);

        let g = overlay_geometry(DockZone::RootRight, content, bounds, border);
        assert_eq!(g.rect, Rect::new(160.0, 10.0, 310.0, 210.0));
        assert_eq!(g.offsets, Insets::new(150.0, 0.0, 0.0, 0.0));

        let leaf = Rect::new(10.0, 110.0, 110.0, 210.0);
        let g = overlay_geometry(DockZone::PanelTop, leaf, bounds, border);
        assert_eq!(g.rect, Rect::new(10.0, 110.0, 110.0, 160.0));
        assert_eq!(g.offsets, Insets::new(0.0, 100.0, 200.0, 50.0));

        let g = overlay_geometry(DockZone::RootCenter, content, bounds, border);
        assert_eq!(g.rect, content);
        assert_eq!(g.offsets, Insets::ZERO);
    }
}
