//! Block grid storage and terrain generation
//!
//! The world is a fixed-size grid of block types stored as a flat arena
//! indexed by `row * columns + col`. All access is bounds-checked at the
//! public surface: reads outside the grid return `None`, writes outside
//! it are ignored.

/// One cell's worth of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Air,
    Grass,
    Dirt,
    Stone,
}

impl Block {
    /// Display name for the help panel.
    pub fn name(&self) -> &'static str {
        match self {
            Block::Air => "Air",
            Block::Grass => "Grass",
            Block::Dirt => "Dirt",
            Block::Stone => "Stone",
        }
    }
}

pub struct World {
    columns: i32,
    rows: i32,
    blocks: Vec<Block>,
}

impl World {
    /// Create a world with the standard ground band: a stone floor row,
    /// dirt above it, grass on top, together filling the bottom third of
    /// the grid.
    pub fn new(columns: i32, rows: i32) -> Self {
        let mut world = Self::empty(columns, rows);
        let ground_height = rows / 3;
        for col in 0..columns {
            for row in (rows - ground_height)..rows {
                let block = if row == rows - 1 {
                    Block::Stone
                } else if row >= rows - ground_height + 2 {
                    Block::Dirt
                } else {
                    Block::Grass
                };
                world.set(col, row, block);
            }
        }
        world
    }

    /// Create an all-air world.
    pub fn empty(columns: i32, rows: i32) -> Self {
        Self {
            columns,
            rows,
            blocks: vec![Block::Air; (columns * rows) as usize],
        }
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// True when (col, row) lies inside the grid.
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.columns && row >= 0 && row < self.rows
    }

    // Callers must check in_bounds first.
    fn index(&self, col: i32, row: i32) -> usize {
        (row * self.columns + col) as usize
    }

    /// Read a block. Out-of-bounds coordinates return `None`.
    pub fn get(&self, col: i32, row: i32) -> Option<Block> {
        if !self.in_bounds(col, row) {
            return None;
        }
        Some(self.blocks[self.index(col, row)])
    }

    /// Write a block. Out-of-bounds coordinates are ignored.
    pub fn set(&mut self, col: i32, row: i32, block: Block) {
        if self.in_bounds(col, row) {
            let idx = self.index(col, row);
            self.blocks[idx] = block;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_reads_are_none() {
        let world = World::new(20, 15);
        assert_eq!(world.get(-1, 0), None);
        assert_eq!(world.get(0, -1), None);
        assert_eq!(world.get(20, 0), None);
        assert_eq!(world.get(0, 15), None);
        assert!(world.get(0, 0).is_some());
        assert!(world.get(19, 14).is_some());
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut world = World::empty(4, 4);
        world.set(-1, 2, Block::Stone);
        world.set(2, -1, Block::Stone);
        world.set(4, 2, Block::Stone);
        world.set(2, 4, Block::Stone);
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(world.get(col, row), Some(Block::Air));
            }
        }
    }

    #[test]
    fn test_set_then_get() {
        let mut world = World::empty(4, 4);
        world.set(1, 2, Block::Dirt);
        assert_eq!(world.get(1, 2), Some(Block::Dirt));
        world.set(1, 2, Block::Air);
        assert_eq!(world.get(1, 2), Some(Block::Air));
    }

    #[test]
    fn test_ground_band_layout() {
        // 20x15 is the size the game runs at: rows 0-9 sky, 10-11 grass,
        // 12-13 dirt, 14 stone.
        let world = World::new(20, 15);
        for col in 0..20 {
            for row in 0..10 {
                assert_eq!(world.get(col, row), Some(Block::Air));
            }
            assert_eq!(world.get(col, 10), Some(Block::Grass));
            assert_eq!(world.get(col, 11), Some(Block::Grass));
            assert_eq!(world.get(col, 12), Some(Block::Dirt));
            assert_eq!(world.get(col, 13), Some(Block::Dirt));
            assert_eq!(world.get(col, 14), Some(Block::Stone));
        }
    }

    #[test]
    fn test_tiny_world_generation_does_not_panic() {
        let world = World::new(2, 2);
        assert_eq!(world.get(0, 0), Some(Block::Air));
        assert_eq!(world.get(1, 1), Some(Block::Air)); // rows / 3 == 0, no ground
    }
}
