//! Tests for the editor surface and its manager

use pretty_assertions::assert_eq;

use super::grid::CellKind;
use super::manager::{Populated, SurfaceManager};

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

fn created(rows: usize, cols: usize) -> SurfaceManager {
    let mut manager = SurfaceManager::new();
    manager.create_surface(rows, cols);
    manager
}

#[test]
fn test_create_surface_layout() {
    let manager = created(3, 2);
    let model = manager.derive_model();
    assert_eq!(
        model.rows(),
        grid(&[&["Header 1", "Header 2"], &["", ""], &["", ""]]).as_slice()
    );

    let surface = manager.surface().unwrap();
    let header = surface.cell(surface.cell_id(0, 0).unwrap()).unwrap();
    let body = surface.cell(surface.cell_id(1, 1).unwrap()).unwrap();
    assert_eq!(header.kind, CellKind::Header);
    assert_eq!(body.kind, CellKind::Body);
    assert!(header.editable && body.editable);
}

#[test]
fn test_create_surface_clamps() {
    let model = created(0, 0).derive_model();
    assert_eq!((model.row_count(), model.col_count()), (2, 1));

    let model = created(1000, 1000).derive_model();
    assert_eq!((model.row_count(), model.col_count()), (51, 20));

    let model = created(1, 5).derive_model();
    assert_eq!((model.row_count(), model.col_count()), (2, 5));
}

#[test]
fn test_create_surface_replaces_existing() {
    let mut manager = created(5, 5);
    manager.set_cell_text(1, 1, "old");
    manager.create_surface(2, 2);
    let model = manager.derive_model();
    assert_eq!(model.row_count(), 2);
    assert_eq!(model.cell(1, 1), "");
}

#[test]
fn test_operations_without_surface_are_noops() {
    let mut manager = SurfaceManager::new();
    assert!(!manager.add_row());
    assert!(!manager.add_column());
    assert!(!manager.delete_row());
    assert!(!manager.delete_column());
    assert!(!manager.set_cell_text(0, 0, "x"));
    assert!(!manager.has_surface());
    assert!(manager.derive_model().is_empty());
}

#[test]
fn test_add_row() {
    let mut manager = created(2, 3);
    manager.set_cell_text(1, 0, "keep");
    assert!(manager.add_row());
    let model = manager.derive_model();
    assert_eq!(model.row_count(), 3);
    assert_eq!(model.rows()[2], vec!["", "", ""]);
    assert_eq!(model.cell(1, 0), "keep");
}

#[test]
fn test_add_column_labels_header() {
    let mut manager = created(3, 2);
    assert!(manager.add_column());
    assert!(manager.add_column());
    let model = manager.derive_model();
    assert_eq!(model.col_count(), 4);
    assert_eq!(model.header(), grid(&[&["Header 1", "Header 2", "Header 3", "Header 4"]])[0]);
    assert!(model.body().iter().all(|row| row.len() == 4 && row[3].is_empty()));
}

#[test]
fn test_add_column_counts_from_current_width() {
    // A renamed header does not affect the numbering of the next label
    let mut manager = created(2, 2);
    manager.set_cell_text(0, 1, "Price");
    manager.add_column();
    assert_eq!(manager.derive_model().cell(0, 2), "Header 3");
}

#[test]
fn test_delete_row_removes_last_body_row() {
    let mut manager = created(4, 1);
    manager.set_cell_text(1, 0, "first");
    manager.set_cell_text(3, 0, "last");
    assert!(manager.delete_row());
    let model = manager.derive_model();
    assert_eq!(model.row_count(), 3);
    assert_eq!(model.cell(1, 0), "first");
    assert!(!model.rows().iter().any(|r| r[0] == "last"));
}

#[test]
fn test_delete_row_floor_is_idempotent() {
    let mut manager = created(3, 2);
    assert!(manager.delete_row());
    for _ in 0..5 {
        assert!(!manager.delete_row());
    }
    assert_eq!(manager.derive_model().row_count(), 2);
}

#[test]
fn test_delete_column_removes_last_cell_everywhere() {
    let mut manager = created(3, 3);
    manager.set_cell_text(1, 2, "gone");
    assert!(manager.delete_column());
    let model = manager.derive_model();
    assert_eq!(model.col_count(), 2);
    assert!(model.is_rectangular());
    assert_eq!(model.header(), grid(&[&["Header 1", "Header 2"]])[0]);
}

#[test]
fn test_delete_column_floor_is_idempotent() {
    let mut manager = created(3, 2);
    assert!(manager.delete_column());
    for _ in 0..5 {
        assert!(!manager.delete_column());
    }
    assert_eq!(manager.derive_model().col_count(), 1);
}

#[test]
fn test_arena_reuses_released_cells() {
    let mut manager = created(3, 3);
    manager.delete_column();
    manager.delete_row();
    manager.add_row();
    manager.add_column();
    let surface = manager.surface().unwrap();
    assert_eq!(surface.cell_count(), 9);
    assert_eq!(surface.row_count(), 3);
    assert_eq!(surface.col_count(), 3);
}

#[test]
fn test_populate_from_data() {
    let data = grid(&[&["Name", "Qty"], &["apple", "3"], &["pear", ""]]);
    let mut manager = SurfaceManager::new();
    let populated = manager.populate_from_data(&data);
    assert_eq!(populated, Some(Populated::default()));
    assert_eq!(manager.derive_model().rows(), data.as_slice());
}

#[test]
fn test_populate_from_empty_data_is_noop() {
    let mut manager = created(3, 3);
    manager.set_cell_text(1, 1, "kept");
    assert_eq!(manager.populate_from_data(&[]), None);
    assert_eq!(manager.derive_model().cell(1, 1), "kept");
}

#[test]
fn test_populate_single_row_gains_empty_body_row() {
    let mut manager = SurfaceManager::new();
    manager.populate_from_data(&grid(&[&["only", "header"]]));
    let model = manager.derive_model();
    assert_eq!(model.rows(), grid(&[&["only", "header"], &["", ""]]).as_slice());
}

#[test]
fn test_populate_clamps_oversized_data() {
    let data: Vec<Vec<String>> = (0..60)
        .map(|r| (0..25).map(|c| format!("{}-{}", r, c)).collect())
        .collect();
    let mut manager = SurfaceManager::new();
    let populated = manager.populate_from_data(&data).unwrap();
    assert_eq!(populated.dropped_rows, 9);
    assert_eq!(populated.dropped_cols, 5);

    let model = manager.derive_model();
    assert_eq!((model.row_count(), model.col_count()), (51, 20));
    assert_eq!(model.cell(50, 19), "50-19");
}

#[test]
fn test_model_trims_but_surface_keeps_raw_text() {
    let mut manager = created(2, 1);
    manager.set_cell_text(1, 0, "  padded  ");
    assert_eq!(manager.cell_text(1, 0), Some("  padded  "));
    assert_eq!(manager.derive_model().cell(1, 0), "padded");
}

#[test]
fn test_set_cell_text_out_of_range() {
    let mut manager = created(2, 2);
    assert!(!manager.set_cell_text(5, 0, "x"));
    assert!(!manager.set_cell_text(0, 5, "x"));
}

#[test]
fn test_tab_navigation() {
    let manager = created(2, 2);
    // 4 cells in row-major order
    assert_eq!(manager.next_cell(0, false), Some(1));
    assert_eq!(manager.next_cell(1, false), Some(2));
    assert_eq!(manager.next_cell(3, false), Some(3));
    assert_eq!(manager.next_cell(0, true), Some(0));
    assert_eq!(manager.next_cell(2, true), Some(1));
    assert_eq!(manager.next_cell(4, false), None);
    assert_eq!(SurfaceManager::new().next_cell(0, false), None);
}
