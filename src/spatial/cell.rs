//! Integer cell coordinates and the neighbor direction tables
//!
//! Cells are unrestricted integer coordinates; nothing here bounds them to a
//! particular grid. The `z` component is carried through arithmetic untouched
//! so callers on layered maps keep their layer, but no query interprets it.

use std::fmt;
use std::ops::Add;

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Column coordinate
    pub x: i32,
    /// Row coordinate
    pub y: i32,
    /// Layer coordinate, passed through unchanged by every query
    pub z: i32,
}

impl Cell {
    /// Create a cell on layer zero
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }

    /// Create a cell on an explicit layer
    pub const fn with_layer(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Shift by a planar offset, keeping the layer
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z,
        }
    }
}

impl Add for Cell {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Orthogonal neighbor offsets in fixed order: right, left, up, down
pub static ORTHOGONAL_DIRECTIONS: [Cell; 4] = [
    Cell::new(1, 0),
    Cell::new(-1, 0),
    Cell::new(0, 1),
    Cell::new(0, -1),
];

/// Diagonal neighbor offsets in fixed order: top-right, top-left,
/// bottom-right, bottom-left
pub static DIAGONAL_DIRECTIONS: [Cell; 4] = [
    Cell::new(1, 1),
    Cell::new(-1, 1),
    Cell::new(1, -1),
    Cell::new(-1, -1),
];

/// Iterate neighbor offsets in table order
///
/// Yields the 4 orthogonal offsets, followed by the 4 diagonal offsets unless
/// `orthogonal_only` is set. Neighbor queries report results in exactly this
/// order, not sorted spatially.
pub fn directions(orthogonal_only: bool) -> impl Iterator<Item = Cell> {
    let diagonals: &[Cell] = if orthogonal_only {
        &[]
    } else {
        &DIAGONAL_DIRECTIONS
    };
    ORTHOGONAL_DIRECTIONS.iter().chain(diagonals.iter()).copied()
}
