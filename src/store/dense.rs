//! Array-backed grid over a fixed window
//!
//! Backs cell storage with a contiguous `Array2`, trading the sparse grid's
//! unbounded coordinates for cache-friendly scans over a fixed window. The
//! window's minimum corner may be negative; an offset maps cell coordinates
//! to array indices. Reads outside the window report unpopulated, keeping
//! every query total; writes outside the window are rejected.

use ndarray::Array2;

use crate::spatial::cell::Cell;
use crate::spatial::point::WorldPoint;
use crate::store::GridStore;

/// Per-cell storage slot
#[derive(Debug, Clone)]
struct Slot<T, V> {
    tile: Option<T>,
    visual: Option<V>,
}

/// Dense in-memory tile map over a fixed coordinate window
///
/// Implements [`GridStore`] with bounds equal to the window regardless of
/// which cells are populated. World mapping matches [`SparseGrid`]: cell
/// `(0, 0)` has its minimum corner at the world origin.
///
/// [`SparseGrid`]: crate::store::SparseGrid
#[derive(Debug, Clone)]
pub struct DenseGrid<T, V> {
    slots: Array2<Slot<T, V>>,
    /// Inclusive minimum corner of the window
    min: Cell,
    origin: WorldPoint,
    cell_size: f32,
}

impl<T: Clone, V: Clone> DenseGrid<T, V> {
    /// Create an empty grid over `[min, min + (width, height))`
    pub fn new(min: Cell, width: usize, height: usize) -> Self {
        Self::with_world_mapping(min, width, height, WorldPoint::new(0.0, 0.0), 1.0)
    }

    /// Create an empty grid with an explicit world origin and cell size
    pub fn with_world_mapping(
        min: Cell,
        width: usize,
        height: usize,
        origin: WorldPoint,
        cell_size: f32,
    ) -> Self {
        Self {
            slots: Array2::from_elem((width, height), Slot {
                tile: None,
                visual: None,
            }),
            min: Cell::new(min.x, min.y),
            origin,
            cell_size,
        }
    }

    /// Place a tile, returning whether the cell was inside the window
    pub fn set_tile(&mut self, cell: Cell, tile: T) -> bool {
        match self.index_of(cell) {
            Some(index) => match self.slots.get_mut(index) {
                Some(slot) => {
                    slot.tile = Some(tile);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Place a visual, returning whether the cell was inside the window
    pub fn set_visual(&mut self, cell: Cell, visual: V) -> bool {
        match self.index_of(cell) {
            Some(index) => match self.slots.get_mut(index) {
                Some(slot) => {
                    slot.visual = Some(visual);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Remove both tile and visual at a cell
    pub fn clear_cell(&mut self, cell: Cell) {
        if let Some(index) = self.index_of(cell) {
            if let Some(slot) = self.slots.get_mut(index) {
                slot.tile = None;
                slot.visual = None;
            }
        }
    }

    /// Map a cell to array indices, `None` outside the window
    fn index_of(&self, cell: Cell) -> Option<(usize, usize)> {
        let (width, height) = self.slots.dim();
        let col = cell.x.checked_sub(self.min.x)?;
        let row = cell.y.checked_sub(self.min.y)?;

        if col < 0 || row < 0 {
            return None;
        }

        let (col, row) = (col as usize, row as usize);
        if col >= width || row >= height {
            return None;
        }

        Some((col, row))
    }

    fn slot_at(&self, cell: Cell) -> Option<&Slot<T, V>> {
        self.index_of(cell).and_then(|index| self.slots.get(index))
    }
}

impl<T: Clone, V: Clone> GridStore for DenseGrid<T, V> {
    type Tile = T;
    type Visual = V;

    fn tile_at(&self, cell: Cell) -> Option<T> {
        self.slot_at(cell).and_then(|slot| slot.tile.clone())
    }

    fn visual_at(&self, cell: Cell) -> Option<V> {
        self.slot_at(cell).and_then(|slot| slot.visual.clone())
    }

    fn bounds_min(&self) -> Cell {
        self.min
    }

    fn bounds_max(&self) -> Cell {
        let (width, height) = self.slots.dim();
        Cell::new(self.min.x + width as i32, self.min.y + height as i32)
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
