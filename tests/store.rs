//! Validates the in-memory grid stores: bounds tracking, world mapping, and
//! total out-of-window reads

use tilequery::query::all_tiles;
use tilequery::spatial::{Cell, WorldPoint};
use tilequery::store::{DenseGrid, GridStore, SparseGrid};

#[test]
fn test_sparse_bounds_hug_the_populated_region() {
    let mut grid: SparseGrid<u32, char> = SparseGrid::new();
    grid.set_tile(Cell::new(-2, 1), 0);
    grid.set_tile(Cell::new(4, 3), 1);

    assert_eq!(grid.bounds_min(), Cell::new(-2, 1));
    // Exclusive maximum, one past the populated corner
    assert_eq!(grid.bounds_max(), Cell::new(5, 4));
}

#[test]
fn test_sparse_bounds_saturate_at_the_coordinate_limit() {
    let mut grid: SparseGrid<u32, char> = SparseGrid::new();
    grid.set_tile(Cell::new(i32::MAX, 0), 0);
    grid.set_tile(Cell::new(3, i32::MAX), 1);

    // One past i32::MAX is not representable; the exclusive corner clamps
    // instead of wrapping below bounds_min
    let max = grid.bounds_max();
    assert_eq!(max, Cell::new(i32::MAX, i32::MAX));
    assert!(max.x >= grid.bounds_min().x);
    assert!(max.y >= grid.bounds_min().y);

    // Point lookups are unaffected by the clamped bound
    assert!(grid.tile_at(Cell::new(i32::MAX, 0)).is_some());
    assert!(grid.tile_at(Cell::new(3, i32::MAX)).is_some());
}

#[test]
fn test_sparse_empty_grid_reports_degenerate_bounds() {
    let grid: SparseGrid<u32, char> = SparseGrid::new();
    assert_eq!(grid.bounds_min(), grid.bounds_max());
}

#[test]
fn test_sparse_clear_cell_shrinks_bounds() {
    let mut grid: SparseGrid<u32, char> = SparseGrid::new();
    grid.set_tile(Cell::new(0, 0), 0);
    grid.set_tile(Cell::new(10, 10), 1);

    grid.clear_cell(Cell::new(10, 10));

    assert_eq!(grid.bounds_max(), Cell::new(1, 1));
    assert_eq!(grid.len(), 1);
    assert!(grid.tile_at(Cell::new(10, 10)).is_none());
}

#[test]
fn test_sparse_tile_and_visual_are_independent() {
    let mut grid: SparseGrid<u32, char> = SparseGrid::new();
    grid.set_tile(Cell::new(0, 0), 5);
    grid.set_visual(Cell::new(0, 0), '@');

    assert_eq!(grid.tile_at(Cell::new(0, 0)), Some(5));
    assert_eq!(grid.visual_at(Cell::new(0, 0)), Some('@'));
    assert!(grid.visual_at(Cell::new(0, 1)).is_none());
}

#[test]
fn test_world_mapping_round_trip() {
    let grid: SparseGrid<u32, char> =
        SparseGrid::with_world_mapping(WorldPoint::new(-4.0, 2.0), 2.0);

    let cell = Cell::new(3, -1);
    let center = grid.cell_to_world_center(cell);
    assert_eq!(grid.world_to_cell(center), cell);

    // Center of cell (0,0) sits half a cell past the origin
    let origin_center = grid.cell_to_world_center(Cell::new(0, 0));
    assert!((origin_center.x - -3.0).abs() < f32::EPSILON);
    assert!((origin_center.y - 3.0).abs() < f32::EPSILON);
}

#[test]
fn test_world_to_cell_floors_negative_coordinates() {
    let grid: SparseGrid<u32, char> = SparseGrid::new();
    assert_eq!(grid.world_to_cell(WorldPoint::new(-0.5, -0.5)), Cell::new(-1, -1));
    assert_eq!(grid.world_to_cell(WorldPoint::new(0.5, 0.5)), Cell::new(0, 0));
}

#[test]
fn test_dense_bounds_are_the_window_regardless_of_population() {
    let grid: DenseGrid<u32, char> = DenseGrid::new(Cell::new(-1, -1), 4, 3);

    assert_eq!(grid.bounds_min(), Cell::new(-1, -1));
    assert_eq!(grid.bounds_max(), Cell::new(3, 2));
    assert_eq!(all_tiles(&grid).count(), 0);
}

#[test]
fn test_dense_out_of_window_reads_are_unpopulated() {
    let mut grid: DenseGrid<u32, char> = DenseGrid::new(Cell::new(0, 0), 2, 2);
    assert!(grid.set_tile(Cell::new(1, 1), 9));

    assert!(grid.tile_at(Cell::new(2, 0)).is_none());
    assert!(grid.tile_at(Cell::new(-1, 0)).is_none());
    assert_eq!(grid.tile_at(Cell::new(1, 1)), Some(9));
}

#[test]
fn test_dense_out_of_window_writes_are_rejected() {
    let mut grid: DenseGrid<u32, char> = DenseGrid::new(Cell::new(0, 0), 2, 2);

    assert!(!grid.set_tile(Cell::new(5, 0), 1));
    assert!(!grid.set_visual(Cell::new(0, -1), 'x'));
    assert_eq!(all_tiles(&grid).count(), 0);
}

#[test]
fn test_dense_clear_cell_removes_both_layers() {
    let mut grid: DenseGrid<u32, char> = DenseGrid::new(Cell::new(0, 0), 2, 2);
    grid.set_tile(Cell::new(0, 0), 1);
    grid.set_visual(Cell::new(0, 0), '#');

    grid.clear_cell(Cell::new(0, 0));

    assert!(grid.tile_at(Cell::new(0, 0)).is_none());
    assert!(grid.visual_at(Cell::new(0, 0)).is_none());
}

#[test]
fn test_queries_behave_identically_over_both_stores() {
    let cells = [(0, 0), (1, 2), (3, 1)];

    let mut sparse: SparseGrid<u32, char> = SparseGrid::new();
    let mut dense: DenseGrid<u32, char> = DenseGrid::new(Cell::new(0, 0), 4, 4);
    for (id, &(x, y)) in cells.iter().enumerate() {
        sparse.set_tile(Cell::new(x, y), id as u32);
        dense.set_tile(Cell::new(x, y), id as u32);
    }

    let from_sparse: Vec<(i32, i32)> = all_tiles(&sparse).map(|s| (s.x, s.y)).collect();
    let from_dense: Vec<(i32, i32)> = all_tiles(&dense).map(|s| (s.x, s.y)).collect();

    assert_eq!(from_sparse, from_dense);
}
