//! Integration tests for the editor command API.
//!
//! Exercises history, layout, grouping and categories through `Editor` only.

use seatmap_editor_lib::fixtures::{group_of, seat_at, stage_at, text_at};
use seatmap_editor_lib::layout::{bounds, snap_to_grid, union_bounds, Alignment, DistributeAxis};
use seatmap_editor_lib::state::{EditorSettings, SelectMode};
use seatmap_editor_lib::templates::Tool;
use seatmap_editor_lib::{Editor, EditorError};
use shared::{CategoryPatch, EntityPatch, GeometryPatch, SeatCategory};

fn ids(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn x_of(e: &Editor, id: &str) -> f64 {
    e.scene().get(id).unwrap().geometry.x
}

#[test]
fn test_snapshot_roundtrip_is_byte_stable() {
    let mut e = Editor::new();
    e.add_entity(seat_at("s1", 10.0, 20.0)).unwrap();
    e.add_entity(stage_at("st", 100.0, 0.0)).unwrap();
    e.add_entity(text_at("t", 5.5, 7.25, "Balcony")).unwrap();
    e.add_entity(group_of("g", vec![seat_at("c1", 0.0, 0.0), seat_at("c2", 30.0, 0.0)]))
        .unwrap();
    e.place(Tool::Door, 300.0, 300.0).unwrap();
    e.place(Tool::Wall, 0.0, 400.0).unwrap();

    let snapshot = e.snapshot();
    let mut other = Editor::new();
    other.load_snapshot(&snapshot).unwrap();
    assert_eq!(other.snapshot(), snapshot);
}

#[test]
fn test_undo_redo_symmetry() {
    let mut e = Editor::new();
    let baseline = e.snapshot();

    e.add_entity(seat_at("a", 0.0, 0.0)).unwrap();
    e.update_entity("a", &EntityPatch::geometry(GeometryPatch::position(40.0, 0.0)))
        .unwrap();
    e.add_entity(stage_at("s", 0.0, 100.0)).unwrap();
    let last = e.snapshot();

    for _ in 0..3 {
        assert!(e.undo().unwrap());
    }
    assert_eq!(e.snapshot(), baseline);
    assert!(!e.undo().unwrap());

    for _ in 0..3 {
        assert!(e.redo().unwrap());
    }
    assert_eq!(e.snapshot(), last);
    assert!(!e.redo().unwrap());
}

#[test]
fn test_new_edit_truncates_redo_branch() {
    let mut e = Editor::new();
    e.add_entity(seat_at("a", 0.0, 0.0)).unwrap();
    e.add_entity(seat_at("b", 0.0, 0.0)).unwrap();
    e.undo().unwrap();
    e.add_entity(seat_at("c", 0.0, 0.0)).unwrap();

    assert_eq!(e.history().len(), 3);
    assert!(!e.can_redo());
    assert!(e.scene().contains("c"));
    assert!(!e.scene().contains("b"));
}

#[test]
fn test_undo_drops_vanished_ids_from_selection() {
    let mut e = Editor::new();
    e.add_entity(seat_at("a", 0.0, 0.0)).unwrap();
    assert!(e.selection().is_selected("a"));
    e.undo().unwrap();
    assert_eq!(e.selection().count(), 0);
}

#[test]
fn test_align_left_to_anchor() {
    let mut e = Editor::new();
    e.add_entity(seat_at("a", 50.0, 0.0)).unwrap();
    e.add_entity(seat_at("b", 120.0, 40.0)).unwrap();
    e.add_entity(seat_at("c", 30.0, 80.0)).unwrap();
    e.select(&ids(&["a", "b", "c"]), SelectMode::Replace);

    e.align(Alignment::Left).unwrap();
    for id in ["a", "b", "c"] {
        assert_eq!(x_of(&e, id), 50.0);
    }
}

#[test]
fn test_distribute_keeps_endpoints() {
    let mut e = Editor::new();
    e.add_entity(seat_at("a", 0.0, 0.0)).unwrap();
    e.add_entity(seat_at("b", 10.0, 0.0)).unwrap();
    e.add_entity(seat_at("c", 100.0, 0.0)).unwrap();
    e.select(&ids(&["c", "a", "b"]), SelectMode::Replace);

    e.distribute(DistributeAxis::Horizontal).unwrap();
    assert_eq!(x_of(&e, "a"), 0.0);
    assert_eq!(x_of(&e, "b"), 50.0);
    assert_eq!(x_of(&e, "c"), 100.0);
}

#[test]
fn test_grouping_roundtrip() {
    let mut e = Editor::new();
    e.add_entity(seat_at("a", 10.0, 10.0)).unwrap();
    e.add_entity(seat_at("b", 50.0, 10.0)).unwrap();
    e.select(&ids(&["a", "b"]), SelectMode::Replace);

    let group = e.group().unwrap();
    let g = e.scene().get(&group).unwrap();
    assert_eq!((g.geometry.x, g.geometry.y), (10.0, 10.0));
    assert_eq!(g.payload.group().unwrap().child_local_offsets(), vec![(0.0, 0.0), (40.0, 0.0)]);

    e.ungroup(&group).unwrap();
    let a = &e.scene().get("a").unwrap().geometry;
    let b = &e.scene().get("b").unwrap().geometry;
    assert_eq!((a.x, a.y), (10.0, 10.0));
    assert_eq!((b.x, b.y), (50.0, 10.0));
}

#[test]
fn test_moving_group_moves_children() {
    let mut settings = EditorSettings::default();
    settings.grid.snap = false;
    let mut e = Editor::with_settings(settings);
    e.add_entity(seat_at("a", 10.0, 10.0)).unwrap();
    e.add_entity(seat_at("b", 50.0, 10.0)).unwrap();
    e.select(&ids(&["a", "b"]), SelectMode::Replace);
    let group = e.group().unwrap();

    e.begin_gesture().unwrap();
    e.gesture_move(100.0, 0.0).unwrap();
    e.end_gesture();

    e.ungroup(&group).unwrap();
    assert_eq!(x_of(&e, "a"), 110.0);
    assert_eq!(x_of(&e, "b"), 150.0);
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
}

#[test]
fn test_ungroup_rotated_group_keeps_canvas_bounds() {
    let mut e = Editor::new();
    e.add_entity(seat_at("a", 10.0, 10.0)).unwrap();
    e.add_entity(seat_at("b", 50.0, 10.0)).unwrap();
    e.select(&ids(&["a", "b"]), SelectMode::Replace);
    let group = e.group().unwrap();
    assert!(e.rotate_selected(90.0).unwrap());
    let before = bounds(&e.scene().get(&group).unwrap().geometry);

    e.ungroup(&group).unwrap();
    let a = &e.scene().get("a").unwrap().geometry;
    let b = &e.scene().get("b").unwrap().geometry;
    assert_eq!(a.rotation, 90.0);
    assert_eq!(b.rotation, 90.0);
    assert_close(b.x, 10.0);
    assert_close(b.y, 50.0);

    let after = union_bounds([a, b]).unwrap();
    assert_close(after.x0, before.x0);
    assert_close(after.y0, before.y0);
    assert_close(after.x1, before.x1);
    assert_close(after.y1, before.y1);
    assert_close(bounds(b).x0, -14.0);
}

#[test]
fn test_ungroup_scaled_group_folds_scale_into_children() {
    let mut e = Editor::new();
    e.add_entity(seat_at("a", 10.0, 10.0)).unwrap();
    e.add_entity(seat_at("b", 50.0, 10.0)).unwrap();
    e.select(&ids(&["a", "b"]), SelectMode::Replace);
    let group = e.group().unwrap();
    let scale = GeometryPatch {
        scale_x: Some(2.0),
        scale_y: Some(2.0),
        ..Default::default()
    };
    e.update_entity(&group, &EntityPatch::geometry(scale)).unwrap();
    let before = bounds(&e.scene().get(&group).unwrap().geometry);

    e.ungroup(&group).unwrap();
    let b = &e.scene().get("b").unwrap().geometry;
    assert_eq!((b.x, b.y), (90.0, 10.0));
    assert_eq!((b.scale_x, b.scale_y), (2.0, 2.0));

    let a = &e.scene().get("a").unwrap().geometry;
    assert_eq!(union_bounds([a, b]).unwrap(), before);
}

#[test]
fn test_nested_grouping_through_history() {
    let mut e = Editor::new();
    e.add_entity(seat_at("a", 10.0, 10.0)).unwrap();
    e.add_entity(seat_at("b", 50.0, 10.0)).unwrap();
    e.add_entity(stage_at("s", 200.0, 300.0)).unwrap();
    let flat = e.snapshot();

    e.select(&ids(&["a", "b"]), SelectMode::Replace);
    let inner = e.group_as_row("A").unwrap();
    e.select(&ids(&[inner.as_str(), "s"]), SelectMode::Replace);
    let outer = e.group().unwrap();
    let nested = e.snapshot();
    assert_eq!(e.scene().len(), 1);
    assert!(e.scene().find_nested("a").is_some());

    e.undo().unwrap();
    assert_eq!(e.scene().len(), 2);
    assert!(e.scene().contains(&inner));
    e.undo().unwrap();
    assert_eq!(e.snapshot(), flat);

    e.redo().unwrap();
    e.redo().unwrap();
    assert_eq!(e.snapshot(), nested);

    e.ungroup(&outer).unwrap();
    e.ungroup(&inner).unwrap();
    assert_eq!(e.snapshot(), flat);
    e.undo().unwrap();
    e.undo().unwrap();
    assert_eq!(e.snapshot(), nested);
}

#[test]
fn test_added_group_with_taken_child_ids_survives_reload_and_redo() {
    let mut e = Editor::new();
    e.add_entity(seat_at("a", 0.0, 0.0)).unwrap();
    e.add_entity(group_of("g", vec![seat_at("a", 0.0, 0.0), seat_at("b", 30.0, 0.0)]))
        .unwrap();
    let snapshot = e.snapshot();

    let mut other = Editor::new();
    other.load_snapshot(&snapshot).unwrap();
    assert_eq!(other.snapshot(), snapshot);

    assert!(e.undo().unwrap());
    assert!(e.redo().unwrap());
    assert!(!e.can_redo());
    assert_eq!(e.snapshot(), snapshot);
}

#[test]
fn test_snap_rounds_half_up() {
    assert_eq!(snap_to_grid(53.0, 20.0), 60.0);
    assert_eq!(snap_to_grid(47.0, 20.0), 40.0);
    assert_eq!(snap_to_grid(50.0, 20.0), 60.0);
    assert_eq!(snap_to_grid(47.0, 0.0), 47.0);
}

#[test]
fn test_category_color_cascades_to_every_seat() {
    let mut e = Editor::new();
    e.add_entity(seat_at("a", 0.0, 0.0)).unwrap();
    e.add_entity(group_of("g", vec![seat_at("b", 0.0, 0.0)])).unwrap();

    e.update_category(
        "vip",
        &CategoryPatch {
            color_hex: Some("#123456".into()),
            ..Default::default()
        },
    )
    .unwrap();

    let a = e.scene().get("a").unwrap();
    let b = e.scene().find_nested("b").unwrap();
    assert_eq!(e.effective_fill(a), "#123456");
    assert_eq!(e.effective_fill(b), "#123456");
}

#[test]
fn test_category_delete_guard_and_cascade() {
    let mut e = Editor::new();
    e.add_entity(seat_at("a", 0.0, 0.0)).unwrap();

    assert_eq!(e.delete_category("vip").unwrap(), 1);
    assert_eq!(e.categories().len(), 2);
    assert_eq!(e.scene().get("a").unwrap().seat().unwrap().category_id, "class-a");

    e.delete_category("class-a").unwrap();
    let err = e.delete_category("class-b").unwrap_err();
    assert!(matches!(err, EditorError::LastCategory(_)));
    assert_eq!(e.categories().len(), 1);

    e.add_category(SeatCategory::new("balcony", "Balcony", "#00ff00", 12.0))
        .unwrap();
    assert_eq!(e.categories().len(), 2);
}

#[test]
fn test_drag_gesture_commits_once() {
    let mut e = Editor::new();
    e.add_entity(seat_at("a", 0.0, 0.0)).unwrap();
    let len = e.history().len();

    e.begin_gesture().unwrap();
    for step in 1..=25 {
        e.gesture_move(step as f64 * 4.0, 0.0).unwrap();
    }
    e.end_gesture();

    assert_eq!(e.history().len(), len + 1);
    assert_eq!(x_of(&e, "a"), 100.0);
    e.undo().unwrap();
    assert_eq!(x_of(&e, "a"), 0.0);
}

#[test]
fn test_cancel_restores_pre_gesture_geometry() {
    let mut e = Editor::new();
    e.add_entity(seat_at("a", 0.0, 0.0)).unwrap();
    let len = e.history().len();

    e.begin_gesture().unwrap();
    e.gesture_move(60.0, 60.0).unwrap();
    assert_eq!(x_of(&e, "a"), 60.0);
    e.cancel();

    assert_eq!(x_of(&e, "a"), 0.0);
    assert_eq!(e.history().len(), len);
    assert_eq!(e.selection().count(), 0);
    assert_eq!(e.tool(), Tool::Select);
}

#[test]
fn test_stats_follow_prices() {
    let mut e = Editor::new();
    for i in 0..4 {
        e.place(Tool::Seat, i as f64 * 40.0, 0.0).unwrap();
    }
    e.place(Tool::Stage, 0.0, 200.0).unwrap();

    let stats = e.stats();
    assert_eq!(stats.seats.total, 4);
    assert_eq!(stats.seats.available, 4);
    assert_eq!(stats.total_revenue, 140.0);
    assert_eq!(stats.counts["stage"], 1);
}
