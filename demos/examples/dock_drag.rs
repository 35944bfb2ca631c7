// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a small dock layout, then drag widgets around it.
//!
//! This example shows how to:
//! - lay out a panel and insert widgets relative to each other,
//! - drive a drag session (`drag_enter` / `drag_over` / `drag_drop`) from pointer events,
//! - read back the overlay the panel would draw while dragging.
//!
//! Run:
//! - `cargo run -p understory_demos --example dock_drag`
//! - `RUST_LOG=understory_dock=trace cargo run -p understory_demos --example dock_drag`

use kurbo::{Insets, Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_demos::describe;
use understory_dock::{
    DEFAULT_CONTENT_KIND, DockOptions, DockPanel, DragPayload, DropAction, DropActions,
    InsertLocation,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Tool {
    Editor,
    Files,
    Outline,
    Terminal,
    Search,
}

fn payload(tool: Tool) -> DragPayload<Tool> {
    let mut payload = DragPayload::new(DropActions::MOVE);
    payload.set_factory(DEFAULT_CONTENT_KIND, move || Some(tool));
    payload
}

/// Simulate a pointer drag that hovers over `path` and drops at its last point.
fn drag(panel: &mut DockPanel<Tool>, tool: Tool, path: &[Point]) {
    let mut payload = payload(tool);
    panel.drag_enter(&payload);
    for &point in path {
        let response = panel.drag_over(point, DropAction::Move, &payload);
        println!(
            "  over ({:>3.0}, {:>3.0}) -> {:?}, overlay {:?}",
            point.x,
            point.y,
            response.drop_action,
            panel.overlay().modifier()
        );
    }
    let Some(&last) = path.last() else {
        panel.drag_leave(false);
        return;
    };
    let response = panel.drag_drop(last, DropAction::Move, &mut payload);
    println!("  drop -> {:?}", response.drop_action);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = DockOptions::default()
        .with_spacing(4.0)
        .with_padding(Insets::uniform(8.0));
    let mut panel = DockPanel::with_options(options);
    panel.layout(Rect::new(0.0, 0.0, 800.0, 600.0));

    panel.add_widget(Tool::Editor, None).unwrap();
    panel
        .insert_widget(InsertLocation::SplitLeft, Tool::Files, Some(Tool::Editor))
        .unwrap();
    panel
        .insert_widget(InsertLocation::TabAfter, Tool::Outline, Some(Tool::Files))
        .unwrap();
    panel
        .insert_widget(InsertLocation::SplitBottom, Tool::Terminal, None)
        .unwrap();
    println!("initial layout:\n{}", describe(panel.tree()));

    // Bring a new tool in along the right edge of the whole panel.
    println!("drag Search to the right edge:");
    drag(
        &mut panel,
        Tool::Search,
        &[Point::new(600.0, 200.0), Point::new(780.0, 300.0)],
    );
    println!("{}", describe(panel.tree()));

    // Move Outline out of its tab stack and split it under the editor.
    let editor = panel.tree().leaf_of(Tool::Editor).unwrap();
    let editor_rect = panel.tree().rect_of(editor).unwrap();
    let below = Point::new(editor_rect.center().x, editor_rect.y1 - 10.0);
    println!("drag Outline below the editor:");
    drag(&mut panel, Tool::Outline, &[editor_rect.center(), below]);
    println!("{}", describe(panel.tree()));

    // Removing widgets collapses the splits they leave behind.
    panel.remove_widget(Tool::Terminal);
    panel.remove_widget(Tool::Search);
    println!("after closing Terminal and Search:\n{}", describe(panel.tree()));
}
