//! Tile-placement sandbox
//!
//! A single-screen block world: walk the red square around with the arrow
//! keys or WASD, pick a block type with 1-3, place it with the left mouse
//! button and dig with the right. The grid is fixed at 20x15 cells of 40px
//! and the bottom of the screen carries a help panel.

mod player;
mod world;

pub use player::{MoveKeys, Player};
pub use world::{Block, World};

use crate::config;
use macroquad::prelude::*;
use serde::{Deserialize, Serialize};

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;

const TILE_SIZE_PX: i32 = 40;
pub const TILE_SIZE: f32 = TILE_SIZE_PX as f32;
pub const GRID_COLUMNS: i32 = SCREEN_WIDTH / TILE_SIZE_PX;
pub const GRID_ROWS: i32 = SCREEN_HEIGHT / TILE_SIZE_PX;

const UI_PANEL_HEIGHT: f32 = 60.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// How quickly the drawn square catches up to its cell, per second.
    pub lerp_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self { lerp_speed: 12.0 }
    }
}

struct Game {
    world: World,
    player: Player,
    selected: Block,
}

impl Game {
    fn new(tuning: &Tuning) -> Self {
        let world = World::new(GRID_COLUMNS, GRID_ROWS);
        let player = Player::spawn(&world, GRID_COLUMNS / 2, tuning.lerp_speed);
        Self {
            world,
            player,
            selected: Block::Grass,
        }
    }

    /// Place the selected block: only into air, never into the player's cell.
    fn place(&mut self, col: i32, row: i32) {
        if self.world.get(col, row) == Some(Block::Air) && !self.player.occupies(col, row) {
            self.world.set(col, row, self.selected);
        }
    }

    /// Dig a cell out: only solids, never the player's cell.
    fn remove(&mut self, col: i32, row: i32) {
        match self.world.get(col, row) {
            Some(block) if block != Block::Air && !self.player.occupies(col, row) => {
                self.world.set(col, row, Block::Air);
            }
            _ => {}
        }
    }
}

pub fn window_conf() -> Conf {
    Conf {
        window_title: format!("Block Yard v{}", crate::VERSION),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

pub async fn run() {
    println!("=== BLOCK YARD v{} ===", crate::VERSION);
    let tuning: Tuning = config::load_or_warn("sandbox.ron");
    let mut game = Game::new(&tuning);

    loop {
        let dt = get_frame_time();

        // palette
        if is_key_pressed(KeyCode::Key1) {
            game.selected = Block::Grass;
        }
        if is_key_pressed(KeyCode::Key2) {
            game.selected = Block::Dirt;
        }
        if is_key_pressed(KeyCode::Key3) {
            game.selected = Block::Stone;
        }

        // pointer; floor keeps off-window coordinates out of cell 0
        let (mouse_x, mouse_y) = mouse_position();
        let hover_col = (mouse_x / TILE_SIZE).floor() as i32;
        let hover_row = (mouse_y / TILE_SIZE).floor() as i32;
        if is_mouse_button_pressed(MouseButton::Left) {
            game.place(hover_col, hover_row);
        }
        if is_mouse_button_pressed(MouseButton::Right) {
            game.remove(hover_col, hover_row);
        }

        // movement, one cell per frame while held
        let keys = MoveKeys {
            left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            up: is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
        };
        game.player.handle_input(keys);
        game.player.update(dt, &game.world);

        clear_background(COLOR_SKY);
        draw_world(&game.world);
        draw_player(&game.player);
        draw_ui(game.selected);
        draw_highlight(&game.world, hover_col, hover_row);

        next_frame().await;
    }
}

// ============================================================================
// Drawing
// ============================================================================

const COLOR_SKY: Color = Color::new(0.53, 0.81, 0.92, 1.0); // 135, 206, 235
const COLOR_GRASS: Color = Color::new(0.31, 0.78, 0.47, 1.0); // 80, 200, 120
const COLOR_DIRT: Color = Color::new(0.53, 0.38, 0.26, 1.0); // 134, 96, 67
const COLOR_STONE: Color = Color::new(0.49, 0.49, 0.49, 1.0); // 125, 125, 125
const COLOR_BORDER: Color = Color::new(0.2, 0.2, 0.2, 1.0); // 50, 50, 50
const COLOR_PLAYER: Color = Color::new(1.0, 0.2, 0.2, 1.0); // 255, 50, 50
const COLOR_SHADOW: Color = Color::new(0.0, 0.0, 0.0, 0.39); // 0, 0, 0, 100
const COLOR_UI_BG: Color = Color::new(0.12, 0.12, 0.12, 0.71); // 30, 30, 30, 180
const COLOR_TEXT: Color = Color::new(0.86, 0.86, 0.86, 1.0); // 220, 220, 220
const COLOR_HIGHLIGHT: Color = Color::new(1.0, 1.0, 0.0, 1.0);

fn block_color(block: Block) -> Option<Color> {
    match block {
        Block::Air => None,
        Block::Grass => Some(COLOR_GRASS),
        Block::Dirt => Some(COLOR_DIRT),
        Block::Stone => Some(COLOR_STONE),
    }
}

fn draw_world(world: &World) {
    for row in 0..world.rows() {
        for col in 0..world.columns() {
            let color = world.get(col, row).and_then(block_color);
            if let Some(color) = color {
                let x = col as f32 * TILE_SIZE;
                let y = row as f32 * TILE_SIZE;
                draw_rectangle(x, y, TILE_SIZE, TILE_SIZE, color);
                draw_rectangle_lines(x, y, TILE_SIZE, TILE_SIZE, 1.0, COLOR_BORDER);
            }
        }
    }
}

fn draw_player(player: &Player) {
    draw_rectangle(player.pixel_x, player.pixel_y, TILE_SIZE, TILE_SIZE, COLOR_PLAYER);
    // shadow band at the feet
    draw_rectangle(
        player.pixel_x + 5.0,
        player.pixel_y + TILE_SIZE - 8.0,
        TILE_SIZE - 10.0,
        5.0,
        COLOR_SHADOW,
    );
}

fn draw_ui(selected: Block) {
    let panel_y = SCREEN_HEIGHT as f32 - UI_PANEL_HEIGHT;
    draw_rectangle(
        0.0,
        panel_y,
        SCREEN_WIDTH as f32,
        UI_PANEL_HEIGHT,
        COLOR_UI_BG,
    );
    draw_text(
        "Arrow keys or WASD to move. Left-click to place block. Right-click to remove block.",
        10.0,
        panel_y + 20.0,
        20.0,
        COLOR_TEXT,
    );
    draw_text(
        &format!(
            "Selected block: {} (press keys 1-3 to change)",
            selected.name()
        ),
        10.0,
        panel_y + 45.0,
        20.0,
        COLOR_TEXT,
    );
}

/// Yellow outline under the pointer. Drawn last so it stays visible over
/// the help panel.
fn draw_highlight(world: &World, col: i32, row: i32) {
    if world.in_bounds(col, row) {
        draw_rectangle_lines(
            col as f32 * TILE_SIZE,
            row as f32 * TILE_SIZE,
            TILE_SIZE,
            TILE_SIZE,
            3.0,
            COLOR_HIGHLIGHT,
        );
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(&Tuning::default())
    }

    #[test]
    fn test_new_game_selects_grass() {
        assert_eq!(game().selected, Block::Grass);
    }

    #[test]
    fn test_place_only_into_air() {
        let mut game = game();
        game.selected = Block::Stone;
        game.place(0, 0);
        assert_eq!(game.world.get(0, 0), Some(Block::Stone));

        // bottom row is already stone; placing grass there changes nothing
        game.selected = Block::Grass;
        game.place(0, 14);
        assert_eq!(game.world.get(0, 14), Some(Block::Stone));
    }

    #[test]
    fn test_place_into_player_cell_is_refused() {
        let mut game = game();
        let (col, row) = (game.player.col, game.player.row);
        game.place(col, row);
        assert_eq!(game.world.get(col, row), Some(Block::Air));
    }

    #[test]
    fn test_remove_only_solids() {
        let mut game = game();
        game.remove(0, 0); // air
        assert_eq!(game.world.get(0, 0), Some(Block::Air));
        game.remove(0, 14); // stone
        assert_eq!(game.world.get(0, 14), Some(Block::Air));
    }

    #[test]
    fn test_remove_under_player_is_allowed() {
        // digging out the support leaves the player hovering
        let mut game = game();
        let (col, row) = (game.player.col, game.player.row);
        game.remove(col, row + 1);
        assert_eq!(game.world.get(col, row + 1), Some(Block::Air));
        assert_eq!((game.player.col, game.player.row), (col, row));
    }

    #[test]
    fn test_place_then_remove_round_trips() {
        let mut game = game();
        game.place(5, 5);
        assert_eq!(game.world.get(5, 5), Some(Block::Grass));
        game.remove(5, 5);
        assert_eq!(game.world.get(5, 5), Some(Block::Air));
    }

    #[test]
    fn test_clicks_off_grid_are_ignored() {
        let mut game = game();
        game.place(-1, -1);
        game.place(GRID_COLUMNS, 0);
        game.remove(0, GRID_ROWS);
        game.remove(-5, 3);
        assert_eq!(game.world.get(0, 0), Some(Block::Air));
    }
}
