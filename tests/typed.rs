//! Validates capability-tag checks against tiles that advertise tag sets

use tilequery::query::tile_has_tag;
use tilequery::spatial::{Cell, TagSet, Tagged, TileTag};
use tilequery::store::SparseGrid;

const WALKABLE: TileTag = TileTag(1);
const HAZARD: TileTag = TileTag(2);
const WATER: TileTag = TileTag(3);
const TAG_VOCABULARY: usize = 4;

#[derive(Debug, Clone)]
struct TerrainTile {
    tags: TagSet,
}

impl TerrainTile {
    fn new(tags: &[TileTag]) -> Self {
        Self {
            tags: TagSet::from_tags(tags, TAG_VOCABULARY),
        }
    }
}

impl Tagged for TerrainTile {
    fn tags(&self) -> &TagSet {
        &self.tags
    }
}

#[test]
fn test_tag_check_matches_membership() {
    let mut grid: SparseGrid<TerrainTile, char> = SparseGrid::new();
    grid.set_tile(Cell::new(0, 0), TerrainTile::new(&[WALKABLE]));
    grid.set_tile(Cell::new(1, 0), TerrainTile::new(&[HAZARD, WATER]));

    assert!(tile_has_tag(&grid, Cell::new(0, 0), WALKABLE));
    assert!(!tile_has_tag(&grid, Cell::new(0, 0), HAZARD));

    assert!(tile_has_tag(&grid, Cell::new(1, 0), WATER));
    assert!(tile_has_tag(&grid, Cell::new(1, 0), HAZARD));
    assert!(!tile_has_tag(&grid, Cell::new(1, 0), WALKABLE));
}

#[test]
fn test_absent_tile_reports_false_not_an_error() {
    let grid: SparseGrid<TerrainTile, char> = SparseGrid::new();
    assert!(!tile_has_tag(&grid, Cell::new(7, 7), WALKABLE));
}

#[test]
fn test_visual_only_cell_reports_false() {
    let mut grid: SparseGrid<TerrainTile, char> = SparseGrid::new();
    grid.set_visual(Cell::new(0, 0), '~');

    assert!(!tile_has_tag(&grid, Cell::new(0, 0), WALKABLE));
}

#[test]
fn test_tile_with_empty_tag_set_matches_nothing() {
    let mut grid: SparseGrid<TerrainTile, char> = SparseGrid::new();
    grid.set_tile(Cell::new(0, 0), TerrainTile::new(&[]));

    assert!(!tile_has_tag(&grid, Cell::new(0, 0), WALKABLE));
    assert!(!tile_has_tag(&grid, Cell::new(0, 0), TileTag(0)));
}
