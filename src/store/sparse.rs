//! Hash-backed grid with tracked bounds
//!
//! Suited to unbounded or mostly-empty maps: storage is proportional to the
//! populated cell count, and coordinates may be any `i32`. The populated
//! bounding box is maintained incrementally on insert and recomputed on
//! removal.

use std::collections::HashMap;

use crate::spatial::cell::Cell;
use crate::spatial::point::WorldPoint;
use crate::store::GridStore;

/// Per-cell storage slot
#[derive(Debug, Clone)]
struct Slot<T, V> {
    tile: Option<T>,
    visual: Option<V>,
}

/// Sparse in-memory tile map keyed by cell coordinates
///
/// Implements [`GridStore`] with bounds that hug the populated region. The
/// world mapping places cell `(0, 0)` with its minimum corner at the world
/// origin, scaled by a configurable cell size.
#[derive(Debug, Clone)]
pub struct SparseGrid<T, V> {
    cells: HashMap<(i32, i32), Slot<T, V>>,
    /// Inclusive min and max corners of populated cells, if any
    extents: Option<(Cell, Cell)>,
    origin: WorldPoint,
    cell_size: f32,
}

impl<T: Clone, V: Clone> SparseGrid<T, V> {
    /// Create an empty grid with 1-unit cells at the world origin
    pub fn new() -> Self {
        Self::with_world_mapping(WorldPoint::new(0.0, 0.0), 1.0)
    }

    /// Create an empty grid with an explicit world origin and cell size
    pub fn with_world_mapping(origin: WorldPoint, cell_size: f32) -> Self {
        Self {
            cells: HashMap::new(),
            extents: None,
            origin,
            cell_size,
        }
    }

    /// Place a tile, overwriting any previous tile at the cell
    pub fn set_tile(&mut self, cell: Cell, tile: T) {
        self.slot_mut(cell).tile = Some(tile);
        self.grow_extents(cell);
    }

    /// Place a visual, overwriting any previous visual at the cell
    pub fn set_visual(&mut self, cell: Cell, visual: V) {
        self.slot_mut(cell).visual = Some(visual);
        self.grow_extents(cell);
    }

    /// Remove both tile and visual at a cell
    ///
    /// Shrinks the tracked bounds when the removed cell was on the boundary.
    pub fn clear_cell(&mut self, cell: Cell) {
        if self.cells.remove(&(cell.x, cell.y)).is_some() {
            self.recompute_extents();
        }
    }

    /// Number of populated cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is populated
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn slot_mut(&mut self, cell: Cell) -> &mut Slot<T, V> {
        self.cells.entry((cell.x, cell.y)).or_insert_with(|| Slot {
            tile: None,
            visual: None,
        })
    }

    fn grow_extents(&mut self, cell: Cell) {
        let planar = Cell::new(cell.x, cell.y);
        self.extents = Some(match self.extents {
            None => (planar, planar),
            Some((min, max)) => (
                Cell::new(min.x.min(planar.x), min.y.min(planar.y)),
                Cell::new(max.x.max(planar.x), max.y.max(planar.y)),
            ),
        });
    }

    fn recompute_extents(&mut self) {
        let mut extents: Option<(Cell, Cell)> = None;
        for &(x, y) in self.cells.keys() {
            extents = Some(match extents {
                None => (Cell::new(x, y), Cell::new(x, y)),
                Some((min, max)) => (
                    Cell::new(min.x.min(x), min.y.min(y)),
                    Cell::new(max.x.max(x), max.y.max(y)),
                ),
            });
        }
        self.extents = extents;
    }
}

impl<T: Clone, V: Clone> Default for SparseGrid<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, V: Clone> GridStore for SparseGrid<T, V> {
    type Tile = T;
    type Visual = V;

    fn tile_at(&self, cell: Cell) -> Option<T> {
        self.cells
            .get(&(cell.x, cell.y))
            .and_then(|slot| slot.tile.clone())
    }

    fn visual_at(&self, cell: Cell) -> Option<V> {
        self.cells
            .get(&(cell.x, cell.y))
            .and_then(|slot| slot.visual.clone())
    }

    fn bounds_min(&self) -> Cell {
        self.extents.map_or(Cell::new(0, 0), |(min, _)| min)
    }

    fn bounds_max(&self) -> Cell {
        // Exclusive on both axes, one past the populated maximum. Saturates
        // at the coordinate limit, where no exclusive bound is representable.
        self.extents.map_or(Cell::new(0, 0), |(_, max)| {
            Cell::new(max.x.saturating_add(1), max.y.saturating_add(1))
        })
    }

    fn cell_to_world_center(&self, cell: Cell) -> WorldPoint {
        WorldPoint::new(
            (cell.x as f32 + 0.5).mul_add(self.cell_size, self.origin.x),
            (cell.y as f32 + 0.5).mul_add(self.cell_size, self.origin.y),
        )
    }

    fn world_to_cell(&self, point: WorldPoint) -> Cell {
        Cell::new(
            ((point.x - self.origin.x) / self.cell_size).floor() as i32,
            ((point.y - self.origin.y) / self.cell_size).floor() as i32,
        )
    }
}
