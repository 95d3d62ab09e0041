//! Lane dodger
//!
//! Three lanes of oncoming traffic and one blue car. Each arrow-key press
//! hops the player exactly one lane; the run ends on the first collision.

use crate::config;
use crate::geom::Rect;
use macroquad::prelude::*;
use serde::{Deserialize, Serialize};

pub const SCREEN_WIDTH: i32 = 480;
pub const SCREEN_HEIGHT: i32 = 640;

const LANE_COUNT: i32 = 3;
const LANE_WIDTH: f32 = (SCREEN_WIDTH / LANE_COUNT) as f32;

const CAR_WIDTH: f32 = 60.0;
const CAR_HEIGHT: f32 = 120.0;
const WHEEL_WIDTH: f32 = 15.0;
const WHEEL_HEIGHT: f32 = 30.0;

/// Fixed player car center y, in the lower part of the road.
const PLAYER_Y: f32 = SCREEN_HEIGHT as f32 - CAR_HEIGHT - 10.0;
/// Traffic spawns fully off-screen above the road.
const ENEMY_SPAWN_Y: f32 = -CAR_HEIGHT;
/// Traffic is culled a little after it leaves the bottom edge.
const CULL_MARGIN: f32 = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Oncoming traffic speed in pixels per second.
    pub enemy_speed: f32,
    /// Seconds between traffic spawns.
    pub spawn_interval: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            enemy_speed: 300.0,
            spawn_interval: 1.5,
        }
    }
}

fn lane_center_x(lane: i32) -> f32 {
    LANE_WIDTH * lane as f32 + LANE_WIDTH / 2.0
}

/// A car pinned to a lane, positioned by its center. Used for the player
/// and for traffic alike.
struct Car {
    lane: i32,
    x: f32,
    y: f32,
    color: Color,
}

impl Car {
    fn new(lane: i32, y: f32, color: Color) -> Self {
        Self {
            lane,
            x: lane_center_x(lane),
            y,
            color,
        }
    }

    fn body(&self) -> Rect {
        Rect::from_center(self.x, self.y, CAR_WIDTH, CAR_HEIGHT)
    }

    fn move_left(&mut self) {
        if self.lane > 0 {
            self.lane -= 1;
            self.x = lane_center_x(self.lane);
        }
    }

    fn move_right(&mut self) {
        if self.lane < LANE_COUNT - 1 {
            self.lane += 1;
            self.x = lane_center_x(self.lane);
        }
    }

    fn draw(&self) {
        let body = self.body();
        draw_rectangle(body.x, body.y, body.w, body.h, self.color);
        let wheel = |x: f32, y: f32| draw_rectangle(x, y, WHEEL_WIDTH, WHEEL_HEIGHT, BLACK);
        wheel(body.x, body.y + 10.0);
        wheel(body.right() - WHEEL_WIDTH, body.y + 10.0);
        wheel(body.x, body.bottom() - 10.0 - WHEEL_HEIGHT);
        wheel(body.right() - WHEEL_WIDTH, body.bottom() - 10.0 - WHEEL_HEIGHT);
    }
}

struct Game {
    player: Car,
    enemies: Vec<Car>,
    spawn_timer: f32,
    tuning: Tuning,
}

impl Game {
    fn new(tuning: Tuning) -> Self {
        Self {
            player: Car::new(1, PLAYER_Y, COLOR_PLAYER),
            enemies: Vec::new(),
            spawn_timer: 0.0,
            tuning,
        }
    }

    /// Advance traffic by one frame. Returns true when the player got hit.
    fn update(&mut self, dt: f32) -> bool {
        self.spawn_timer += dt;
        if self.spawn_timer > self.tuning.spawn_interval {
            self.spawn_timer = 0.0;
            let lane = macroquad::rand::gen_range(0, LANE_COUNT);
            self.enemies.push(Car::new(lane, ENEMY_SPAWN_Y, COLOR_ENEMY));
        }

        for enemy in &mut self.enemies {
            enemy.y += self.tuning.enemy_speed * dt;
        }
        self.enemies
            .retain(|enemy| enemy.y <= SCREEN_HEIGHT as f32 + CULL_MARGIN);

        let player_body = self.player.body();
        self.enemies
            .iter()
            .any(|enemy| enemy.body().overlaps(&player_body))
    }
}

pub fn window_conf() -> Conf {
    Conf {
        window_title: format!("Lane Dodge v{}", crate::VERSION),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

pub async fn run() {
    println!("=== LANE DODGE v{} ===", crate::VERSION);
    macroquad::rand::srand(miniquad::date::now() as u64);
    let tuning: Tuning = config::load_or_warn("dodge.ron");
    let mut game = Game::new(tuning);

    loop {
        let dt = get_frame_time();

        if is_key_pressed(KeyCode::Left) {
            game.player.move_left();
        }
        if is_key_pressed(KeyCode::Right) {
            game.player.move_right();
        }

        if game.update(dt) {
            println!("Collision! Game over.");
            break;
        }

        draw_road();
        game.player.draw();
        for enemy in &game.enemies {
            enemy.draw();
        }

        next_frame().await;
    }
}

// ============================================================================
// Drawing
// ============================================================================

const COLOR_ROAD: Color = Color::new(0.2, 0.2, 0.2, 1.0); // 50, 50, 50
const COLOR_PLAYER: Color = Color::new(0.0, 0.0, 1.0, 1.0);
const COLOR_ENEMY: Color = Color::new(1.0, 0.0, 0.0, 1.0);

fn draw_road() {
    clear_background(COLOR_ROAD);
    for i in 1..LANE_COUNT {
        let x = LANE_WIDTH * i as f32;
        draw_line(x, 0.0, x, SCREEN_HEIGHT as f32, 5.0, WHITE);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_hops_clamp_at_the_edges() {
        let mut car = Car::new(1, PLAYER_Y, COLOR_PLAYER);
        car.move_left();
        assert_eq!(car.lane, 0);
        assert_eq!(car.x, lane_center_x(0));
        car.move_left();
        assert_eq!(car.lane, 0); // already leftmost

        car.move_right();
        car.move_right();
        assert_eq!(car.lane, 2);
        assert_eq!(car.x, lane_center_x(2));
        car.move_right();
        assert_eq!(car.lane, 2); // already rightmost
    }

    #[test]
    fn test_spawn_after_interval() {
        let mut game = Game::new(Tuning::default());
        assert!(!game.update(1.0));
        assert!(game.enemies.is_empty());
        assert!(!game.update(0.6)); // crosses the 1.5s mark
        assert_eq!(game.enemies.len(), 1);
        assert_eq!(game.spawn_timer, 0.0);
        assert_eq!(game.enemies[0].y, ENEMY_SPAWN_Y + 300.0 * 0.6);
    }

    #[test]
    fn test_traffic_moves_down_and_gets_culled() {
        let mut game = Game::new(Tuning::default());
        game.enemies.push(Car::new(0, 100.0, COLOR_ENEMY));
        game.update(0.1);
        assert_eq!(game.enemies[0].y, 130.0);

        game.enemies[0].y = SCREEN_HEIGHT as f32 + 99.0;
        game.update(0.1);
        assert!(game.enemies.is_empty());
    }

    #[test]
    fn test_collision_in_same_lane() {
        let mut game = Game::new(Tuning::default());
        game.enemies.push(Car::new(1, PLAYER_Y - 50.0, COLOR_ENEMY));
        assert!(game.update(0.001));
    }

    #[test]
    fn test_no_collision_across_lanes() {
        let mut game = Game::new(Tuning::default());
        game.enemies.push(Car::new(0, PLAYER_Y, COLOR_ENEMY));
        assert!(!game.update(0.001));
    }

    #[test]
    fn test_bumper_to_bumper_contact_is_not_a_hit() {
        let mut game = Game::new(Tuning::default());
        // enemy bottom exactly on the player's top edge
        let enemy_y = PLAYER_Y - CAR_HEIGHT;
        game.enemies.push(Car::new(1, enemy_y, COLOR_ENEMY));
        let player_body = game.player.body();
        let enemy_body = game.enemies[0].body();
        assert_eq!(enemy_body.bottom(), player_body.y);
        assert!(!enemy_body.overlaps(&player_body));
    }
}
