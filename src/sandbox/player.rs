//! Grid player: discrete movement with visual smoothing
//!
//! The player occupies exactly one cell, and that logical cell is the only
//! thing movement rules ever look at. A separate pixel position trails the
//! cell with an exponential ease so the square glides instead of teleporting;
//! it is purely cosmetic and never feeds back into the rules.

use super::world::{Block, World};
use super::TILE_SIZE;

/// Directional key states sampled once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveKeys {
    /// Collapse key states into a per-axis step. Opposite keys cancel.
    pub fn delta(&self) -> (i32, i32) {
        let dx = self.right as i32 - self.left as i32;
        let dy = self.down as i32 - self.up as i32;
        (dx, dy)
    }
}

pub struct Player {
    /// Logical grid cell.
    pub col: i32,
    pub row: i32,
    /// Rendered position in pixels, trailing the logical cell.
    pub pixel_x: f32,
    pub pixel_y: f32,
    move_x: i32,
    move_y: i32,
    lerp_speed: f32,
}

impl Player {
    /// Spawn standing on the surface of `col`: scan from the top for the
    /// first non-air block and take the cell above it. A column with no
    /// blocks leaves the player parked at the top row.
    pub fn spawn(world: &World, col: i32, lerp_speed: f32) -> Self {
        let mut row = 0;
        for scan in 0..world.rows() {
            if world.get(col, scan) != Some(Block::Air) {
                row = scan - 1;
                break;
            }
        }
        Self {
            col,
            row,
            pixel_x: col as f32 * TILE_SIZE,
            pixel_y: row as f32 * TILE_SIZE,
            move_x: 0,
            move_y: 0,
            lerp_speed,
        }
    }

    /// Record this frame's movement intent. Overwrites the previous frame.
    pub fn handle_input(&mut self, keys: MoveKeys) {
        let (dx, dy) = keys.delta();
        self.move_x = dx;
        self.move_y = dy;
    }

    /// Attempt the pending step, then advance the pixel position toward
    /// the (possibly new) cell.
    pub fn update(&mut self, dt: f32, world: &World) {
        if self.move_x != 0 || self.move_y != 0 {
            let target_col = self.col + self.move_x;
            let target_row = self.row + self.move_y;
            if world.in_bounds(target_col, target_row)
                && self.step_allowed(world, target_col, target_row)
            {
                self.col = target_col;
                self.row = target_row;
            }
        }

        let target_x = self.col as f32 * TILE_SIZE;
        let target_y = self.row as f32 * TILE_SIZE;
        let t = (self.lerp_speed * dt).min(1.0);
        self.pixel_x += (target_x - self.pixel_x) * t;
        self.pixel_y += (target_y - self.pixel_y) * t;
    }

    /// True when the player's cell is (col, row).
    pub fn occupies(&self, col: i32, row: i32) -> bool {
        self.col == col && self.row == row
    }

    /// A step is allowed into an air cell that has support under it, sits on
    /// the bottom row, or stays on the player's current row. The last clause
    /// means a sideways step onto thin air succeeds and the player hovers
    /// there; nothing ever pulls the player down afterwards.
    fn step_allowed(&self, world: &World, col: i32, row: i32) -> bool {
        if world.get(col, row) != Some(Block::Air) {
            return false;
        }
        // A cell below the grid counts as support.
        let supported = !matches!(world.get(col, row + 1), Some(Block::Air));
        supported || row == world.rows() - 1 || row == self.row
    }
}

// ============================================================================
// Tests
// ============================================================================
