//! Single-screen platformer
//!
//! Run and jump across four platforms, grab the three coins, stay away from
//! the patrolling enemy. Touching the enemy teleports the player back to the
//! start and clears the score; there is no way to lose beyond that.

use crate::config;
use crate::geom::Rect;
use macroquad::prelude::*;
use serde::{Deserialize, Serialize};

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 450;

const PLAYER_WIDTH: f32 = 32.0;
const PLAYER_HEIGHT: f32 = 48.0;
const PLAYER_SPAWN: (f32, f32) = (100.0, 300.0);

const ENEMY_SIZE: f32 = 32.0;
const COIN_RADIUS: f32 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration in pixels per second squared.
    pub gravity: f32,
    /// Horizontal run speed in pixels per second.
    pub run_speed: f32,
    /// Upward velocity granted by a jump, in pixels per second.
    pub jump_impulse: f32,
    /// Terminal fall speed in pixels per second.
    pub max_fall_speed: f32,
    /// Enemy patrol speed in pixels per second.
    pub enemy_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 2160.0,
            run_speed: 300.0,
            jump_impulse: 840.0,
            max_fall_speed: 900.0,
            enemy_speed: 120.0,
        }
    }
}

/// Held and pressed keys sampled once per frame.
#[derive(Debug, Clone, Copy, Default)]
struct InputFrame {
    left: bool,
    right: bool,
    jump_pressed: bool,
}

impl InputFrame {
    fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            jump_pressed: is_key_pressed(KeyCode::Space)
                || is_key_pressed(KeyCode::W)
                || is_key_pressed(KeyCode::Up),
        }
    }
}

struct Player {
    rect: Rect,
    vel_y: f32,
    on_ground: bool,
    score: u32,
}

impl Player {
    fn new() -> Self {
        Self {
            rect: Rect::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1, PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            on_ground: false,
            score: 0,
        }
    }

    fn update(&mut self, input: InputFrame, dt: f32, platforms: &[Rect], tuning: &Tuning) {
        if input.jump_pressed && self.on_ground {
            self.vel_y = -tuning.jump_impulse;
        }

        let mut dx = 0.0;
        if input.left {
            dx = -tuning.run_speed;
        }
        if input.right {
            dx = tuning.run_speed;
        }

        self.vel_y += tuning.gravity * dt;
        if self.vel_y > tuning.max_fall_speed {
            self.vel_y = tuning.max_fall_speed;
        }

        // one axis at a time, so pushback is unambiguous
        self.rect.x += dx * dt;
        self.collide(dx, 0.0, platforms);

        self.rect.y += self.vel_y * dt;
        self.on_ground = false;
        self.collide(0.0, self.vel_y, platforms);
    }

    fn collide(&mut self, dx: f32, dy: f32, platforms: &[Rect]) {
        for platform in platforms {
            if self.rect.overlaps(platform) {
                if dy > 0.0 {
                    self.rect.y = platform.y - self.rect.h;
                    self.vel_y = 0.0;
                    self.on_ground = true;
                } else if dy < 0.0 {
                    self.rect.y = platform.bottom();
                    self.vel_y = 0.0;
                }
                if dx > 0.0 {
                    self.rect.x = platform.x - self.rect.w;
                } else if dx < 0.0 {
                    self.rect.x = platform.right();
                }
            }
        }
    }
}

struct Enemy {
    rect: Rect,
    start_x: f32,
    patrol_width: f32,
    /// Signed speed in pixels per second; flips at the patrol edges.
    speed: f32,
}

impl Enemy {
    fn new(x: f32, y: f32, patrol_width: f32, speed: f32) -> Self {
        Self {
            rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            start_x: x,
            patrol_width,
            speed,
        }
    }

    fn update(&mut self, dt: f32) {
        self.rect.x += self.speed * dt;
        if self.rect.x > self.start_x + self.patrol_width {
            self.speed = -self.speed;
        }
        if self.rect.x < self.start_x {
            self.speed = -self.speed;
        }
    }
}

struct Coin {
    x: f32,
    y: f32,
}

impl Coin {
    fn rect(&self) -> Rect {
        Rect::from_center(self.x, self.y, COIN_RADIUS * 2.0, COIN_RADIUS * 2.0)
    }
}

struct Game {
    player: Player,
    platforms: Vec<Rect>,
    enemy: Enemy,
    coins: Vec<Coin>,
    tuning: Tuning,
}

impl Game {
    fn new(tuning: Tuning) -> Self {
        let ground = Rect::new(
            0.0,
            SCREEN_HEIGHT as f32 - 40.0,
            SCREEN_WIDTH as f32,
            40.0,
        );
        let platforms = vec![
            ground,
            Rect::new(200.0, 320.0, 120.0, 20.0),
            Rect::new(400.0, 250.0, 100.0, 20.0),
            Rect::new(600.0, 180.0, 150.0, 20.0),
        ];
        let coins = vec![
            Coin { x: 220.0, y: 290.0 },
            Coin { x: 430.0, y: 220.0 },
            Coin { x: 650.0, y: 150.0 },
        ];
        let enemy = Enemy::new(
            500.0,
            SCREEN_HEIGHT as f32 - 72.0,
            100.0,
            tuning.enemy_speed,
        );
        Self {
            player: Player::new(),
            platforms,
            enemy,
            coins,
            tuning,
        }
    }

    fn update(&mut self, input: InputFrame, dt: f32) {
        self.player.update(input, dt, &self.platforms, &self.tuning);
        self.enemy.update(dt);

        let player_rect = self.player.rect;
        let before = self.coins.len();
        self.coins.retain(|coin| !coin.rect().overlaps(&player_rect));
        self.player.score += (before - self.coins.len()) as u32;

        if self.player.rect.overlaps(&self.enemy.rect) {
            // back to the start; vertical velocity carries over
            self.player.rect.x = PLAYER_SPAWN.0;
            self.player.rect.y = PLAYER_SPAWN.1;
            self.player.score = 0;
        }
    }
}

pub fn window_conf() -> Conf {
    Conf {
        window_title: format!("Coin Hop v{}", crate::VERSION),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

pub async fn run() {
    println!("=== COIN HOP v{} ===", crate::VERSION);
    let tuning: Tuning = config::load_or_warn("platformer.ron");
    let mut game = Game::new(tuning);

    loop {
        let dt = get_frame_time();
        game.update(InputFrame::poll(), dt);
        draw(&game);
        next_frame().await;
    }
}

// ============================================================================
// Drawing
// ============================================================================

const COLOR_BG: Color = Color::new(0.36, 0.58, 0.99, 1.0); // 92, 148, 252
const COLOR_PLATFORM: Color = Color::new(0.59, 0.29, 0.0, 1.0); // 150, 75, 0
const COLOR_PLAYER: Color = Color::new(0.9, 0.0, 0.07, 1.0); // 230, 0, 18
const COLOR_ENEMY: Color = Color::new(0.0, 0.0, 0.0, 1.0);
const COLOR_COIN: Color = Color::new(1.0, 0.84, 0.0, 1.0); // 255, 215, 0
const COLOR_SHADOW: Color = Color::new(0.2, 0.2, 0.2, 1.0); // 50, 50, 50

fn draw(game: &Game) {
    clear_background(COLOR_BG);

    for platform in &game.platforms {
        draw_rectangle(platform.x, platform.y, platform.w, platform.h, COLOR_PLATFORM);
    }

    for coin in &game.coins {
        draw_circle(coin.x, coin.y, COIN_RADIUS, COLOR_COIN);
    }

    draw_shadow(&game.enemy.rect);
    let enemy = game.enemy.rect;
    draw_rectangle(enemy.x, enemy.y, enemy.w, enemy.h, COLOR_ENEMY);

    draw_shadow(&game.player.rect);
    let player = game.player.rect;
    draw_rectangle(player.x, player.y, player.w, player.h, COLOR_PLAYER);

    draw_text(&format!("Score: {}", game.player.score), 10.0, 28.0, 24.0, WHITE);
}

/// Flat shadow band at a sprite's feet.
fn draw_shadow(rect: &Rect) {
    draw_rectangle(
        rect.x + 6.0,
        rect.bottom() - 10.0,
        rect.w - 12.0,
        8.0,
        COLOR_SHADOW,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn idle() -> InputFrame {
        InputFrame::default()
    }

    fn settle(game: &mut Game, frames: u32) {
        for _ in 0..frames {
            game.update(idle(), DT);
        }
    }

    #[test]
    fn test_player_falls_and_lands_on_the_ground() {
        let mut game = Game::new(Tuning::default());
        settle(&mut game, 120);
        let ground_top = SCREEN_HEIGHT as f32 - 40.0;
        assert_eq!(game.player.rect.bottom(), ground_top);
        assert!(game.player.on_ground);
        assert_eq!(game.player.vel_y, 0.0);
    }

    #[test]
    fn test_jump_needs_ground_under_the_feet() {
        let mut game = Game::new(Tuning::default());

        // mid-air jump press does nothing
        game.update(
            InputFrame {
                jump_pressed: true,
                ..Default::default()
            },
            DT,
        );
        assert!(game.player.vel_y > -800.0);

        settle(&mut game, 120);
        game.update(
            InputFrame {
                jump_pressed: true,
                ..Default::default()
            },
            DT,
        );
        assert!(game.player.vel_y < 0.0);
        assert!(!game.player.on_ground);
    }

    #[test]
    fn test_running_right_moves_the_player() {
        let mut game = Game::new(Tuning::default());
        settle(&mut game, 120);
        let x0 = game.player.rect.x;
        game.update(
            InputFrame {
                right: true,
                ..Default::default()
            },
            DT,
        );
        assert!((game.player.rect.x - (x0 + 300.0 * DT)).abs() < 0.001);
    }

    #[test]
    fn test_side_collision_pushes_back() {
        let platform = Rect::new(200.0, 320.0, 120.0, 20.0);
        let mut player = Player::new();
        // overlapping the platform's left side by 2px after a rightward step
        player.rect = Rect::new(
            platform.x - PLAYER_WIDTH + 2.0,
            300.0,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
        );
        player.collide(300.0, 0.0, &[platform]);
        assert_eq!(player.rect.right(), platform.x);

        // and from the right side, walking left
        player.rect.x = platform.right() - 2.0;
        player.collide(-300.0, 0.0, &[platform]);
        assert_eq!(player.rect.x, platform.right());
    }

    #[test]
    fn test_head_bump_stops_upward_motion() {
        let platform = Rect::new(0.0, 100.0, 200.0, 20.0);
        let mut player = Player::new();
        player.rect = Rect::new(50.0, 118.0, PLAYER_WIDTH, PLAYER_HEIGHT);
        player.vel_y = -300.0;
        player.collide(0.0, -300.0, &[platform]);
        assert_eq!(player.rect.y, platform.bottom());
        assert_eq!(player.vel_y, 0.0);
    }

    #[test]
    fn test_coin_collection_scores() {
        let mut game = Game::new(Tuning::default());
        game.player.rect.x = 220.0 - PLAYER_WIDTH / 2.0;
        game.player.rect.y = 290.0 - PLAYER_HEIGHT / 2.0;
        game.update(idle(), 0.0001);
        assert_eq!(game.player.score, 1);
        assert_eq!(game.coins.len(), 2);
    }

    #[test]
    fn test_enemy_contact_resets_player_and_score() {
        let mut game = Game::new(Tuning::default());
        game.player.score = 2;
        game.player.rect.x = game.enemy.rect.x;
        game.player.rect.y = game.enemy.rect.y;
        game.update(idle(), 0.0001);
        assert_eq!(game.player.rect.x, PLAYER_SPAWN.0);
        assert_eq!(game.player.rect.y, PLAYER_SPAWN.1);
        assert_eq!(game.player.score, 0);
    }

    #[test]
    fn test_enemy_patrols_between_its_bounds() {
        let mut enemy = Enemy::new(500.0, 378.0, 100.0, 120.0);
        let mut turned_back = false;
        // four seconds of frames; it must stay inside the patrol strip
        for _ in 0..240 {
            enemy.update(DT);
            assert!(enemy.rect.x >= 500.0 - 120.0 * DT - 0.001);
            assert!(enemy.rect.x <= 600.0 + 120.0 * DT + 0.001);
            if enemy.speed < 0.0 {
                turned_back = true;
            }
        }
        assert!(turned_back);
    }
}
