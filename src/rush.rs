//! Scrolling runner with a boss fight
//!
//! Momentum movement across a 5000px runway: collect rings, dodge the
//! patrol enemies, then stomp the boss three times at the far end. The
//! camera keeps the player horizontally centered the whole way. Running
//! out of lives ends the program; winning just leaves the banner up.

use crate::config;
use crate::geom::Rect;
use macroquad::prelude::*;
use serde::{Deserialize, Serialize};

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;

const PLAYER_SIZE: f32 = 40.0;
const PLAYER_SPAWN: (f32, f32) = (100.0, 500.0);

const RING_SIZE: f32 = 20.0;
const RING_COUNT: usize = 20;

const ENEMY_SIZE: f32 = 40.0;
/// Patrol enemies reverse direction on this wall-clock cadence.
const ENEMY_FLIP_PERIOD: f32 = 0.5;

const BOSS_MAX_HEALTH: i32 = 3;
const BOSS_FLIP_PERIOD: f32 = 1.0;
/// Crossing this x starts the boss fight, permanently.
const BOSS_TRIGGER_X: f32 = 2300.0;

const FIREBALL_SIZE: f32 = 15.0;
/// Fireballs vanish once they are this far behind the player.
const FIREBALL_CULL_DISTANCE: f32 = 500.0;

/// Falling past this y costs a life.
const DEATH_LINE_Y: f32 = 1000.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ground acceleration in pixels per second squared.
    pub acceleration: f32,
    /// Slowdown with no key held, in pixels per second squared.
    pub friction: f32,
    /// Horizontal speed cap in pixels per second.
    pub max_speed: f32,
    /// Upward velocity from a jump or a boss bounce, in pixels per second.
    pub jump_impulse: f32,
    /// Downward acceleration in pixels per second squared.
    pub gravity: f32,
    /// Patrol enemy speed in pixels per second.
    pub enemy_speed: f32,
    /// Boss patrol speed in pixels per second.
    pub boss_speed: f32,
    /// Fireball travel speed in pixels per second.
    pub fireball_speed: f32,
    /// Seconds between fireballs once the fight is on.
    pub fireball_interval: f32,
    pub starting_lives: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            acceleration: 1800.0,
            friction: 1080.0,
            max_speed: 480.0,
            jump_impulse: 720.0,
            gravity: 2160.0,
            enemy_speed: 120.0,
            boss_speed: 120.0,
            fireball_speed: 360.0,
            fireball_interval: 1.5,
            starting_lives: 3,
        }
    }
}

/// Held keys sampled once per frame. Jumping here is a held check, not an
/// edge: keeping space down bounces the player off the ground repeatedly.
#[derive(Debug, Clone, Copy, Default)]
struct InputFrame {
    left: bool,
    right: bool,
    jump: bool,
}

impl InputFrame {
    fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            jump: is_key_down(KeyCode::Space),
        }
    }
}

struct Player {
    rect: Rect,
    vel_x: f32,
    vel_y: f32,
    on_ground: bool,
}

struct Boss {
    rect: Rect,
    alive: bool,
    health: i32,
    patrol_clock: f32,
    fire_clock: f32,
}

struct Game {
    player: Player,
    platforms: Vec<Rect>,
    rings: Vec<Rect>,
    enemies: Vec<Rect>,
    enemy_clock: f32,
    boss: Boss,
    fireballs: Vec<Rect>,
    lives: i32,
    score: u32,
    fight_started: bool,
    win: bool,
    camera_x: f32,
    tuning: Tuning,
}

impl Game {
    fn new(tuning: Tuning) -> Self {
        // 25 ground segments, then the climb toward the boss arena
        let mut platforms: Vec<Rect> = (0..25)
            .map(|i| Rect::new(i as f32 * 200.0, 550.0, 200.0, 50.0))
            .collect();
        platforms.extend([
            Rect::new(1200.0, 450.0, 100.0, 20.0),
            Rect::new(1500.0, 350.0, 100.0, 20.0),
            Rect::new(1900.0, 300.0, 100.0, 20.0),
            Rect::new(2200.0, 250.0, 100.0, 20.0),
        ]);

        let rings = (0..RING_COUNT)
            .map(|_| {
                Rect::new(
                    macroquad::rand::gen_range(300, 2001) as f32,
                    macroquad::rand::gen_range(200, 501) as f32,
                    RING_SIZE,
                    RING_SIZE,
                )
            })
            .collect();

        let enemies = (0..3)
            .map(|i| Rect::new(800.0 + i as f32 * 400.0, 520.0, ENEMY_SIZE, ENEMY_SIZE))
            .collect();

        let lives = tuning.starting_lives;
        Self {
            player: Player {
                rect: Rect::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1, PLAYER_SIZE, PLAYER_SIZE),
                vel_x: 0.0,
                vel_y: 0.0,
                on_ground: false,
            },
            platforms,
            rings,
            enemies,
            enemy_clock: 0.0,
            boss: Boss {
                rect: Rect::new(2400.0, 450.0, 80.0, 80.0),
                alive: true,
                health: BOSS_MAX_HEALTH,
                patrol_clock: 0.0,
                fire_clock: 0.0,
            },
            fireballs: Vec::new(),
            lives,
            score: 0,
            fight_started: false,
            win: false,
            camera_x: 0.0,
            tuning,
        }
    }

    fn reset_player(&mut self) {
        self.player.rect.x = PLAYER_SPAWN.0;
        self.player.rect.y = PLAYER_SPAWN.1;
        self.player.vel_x = 0.0;
        self.player.vel_y = 0.0;
    }

    fn update(&mut self, input: InputFrame, dt: f32) {
        let t = self.tuning.clone();

        // momentum: accelerate under a key, otherwise bleed speed off
        // toward zero without overshooting it
        if input.right {
            self.player.vel_x += t.acceleration * dt;
        } else if input.left {
            self.player.vel_x -= t.acceleration * dt;
        } else if self.player.vel_x > 0.0 {
            self.player.vel_x = (self.player.vel_x - t.friction * dt).max(0.0);
        } else if self.player.vel_x < 0.0 {
            self.player.vel_x = (self.player.vel_x + t.friction * dt).min(0.0);
        }
        self.player.vel_x = self.player.vel_x.clamp(-t.max_speed, t.max_speed);

        if input.jump && self.player.on_ground {
            self.player.vel_y = -t.jump_impulse;
        }

        self.player.vel_y += t.gravity * dt;
        self.player.rect.x += self.player.vel_x * dt;
        self.player.rect.y += self.player.vel_y * dt;
        self.player.on_ground = false;

        // landings only; sides and undersides of platforms never push back
        for plat in &self.platforms {
            if self.player.rect.overlaps(plat)
                && self.player.vel_y > 0.0
                && self.player.rect.bottom() <= plat.bottom()
            {
                self.player.rect.y = plat.y - self.player.rect.h;
                self.player.vel_y = 0.0;
                self.player.on_ground = true;
            }
        }

        self.camera_x = self.player.rect.x - SCREEN_WIDTH as f32 / 2.0;

        // rings
        let player_rect = self.player.rect;
        let before = self.rings.len();
        self.rings.retain(|ring| !ring.overlaps(&player_rect));
        self.score += (before - self.rings.len()) as u32;

        // patrols share one square-wave clock
        self.enemy_clock += dt;
        let phase = (self.enemy_clock / ENEMY_FLIP_PERIOD) as i64;
        let dir = if phase % 2 == 0 { 1.0 } else { -1.0 };
        for enemy in &mut self.enemies {
            enemy.x += dir * t.enemy_speed * dt;
        }
        if self
            .enemies
            .iter()
            .any(|enemy| enemy.overlaps(&self.player.rect))
        {
            self.lives -= 1;
            self.reset_player();
        }

        if self.player.rect.y > DEATH_LINE_Y {
            self.lives -= 1;
            self.reset_player();
        }

        if self.player.rect.x >= BOSS_TRIGGER_X {
            self.fight_started = true;
        }

        if self.fight_started && self.boss.alive {
            self.boss.patrol_clock += dt;
            let phase = (self.boss.patrol_clock / BOSS_FLIP_PERIOD) as i64;
            let dir = if phase % 2 == 0 { 1.0 } else { -1.0 };
            self.boss.rect.x += dir * t.boss_speed * dt;

            self.boss.fire_clock += dt;
            if self.boss.fire_clock >= t.fireball_interval {
                self.boss.fire_clock -= t.fireball_interval;
                self.fireballs.push(Rect::new(
                    self.boss.rect.center_x(),
                    self.boss.rect.center_y(),
                    FIREBALL_SIZE,
                    FIREBALL_SIZE,
                ));
            }

            let mut i = 0;
            while i < self.fireballs.len() {
                self.fireballs[i].x -= t.fireball_speed * dt;
                if self.fireballs[i].overlaps(&self.player.rect) {
                    self.fireballs.remove(i);
                    self.lives -= 1;
                    self.reset_player();
                } else if self.fireballs[i].x < self.player.rect.x - FIREBALL_CULL_DISTANCE {
                    self.fireballs.remove(i);
                } else {
                    i += 1;
                }
            }

            // stomp: any contact while falling hurts the boss and bounces
            // the player back up
            if self.player.rect.overlaps(&self.boss.rect) && self.player.vel_y > 0.0 {
                self.player.vel_y = -t.jump_impulse;
                self.boss.health -= 1;
                if self.boss.health <= 0 {
                    self.boss.alive = false;
                    self.win = true;
                }
            }
        }
    }
}

pub fn window_conf() -> Conf {
    Conf {
        window_title: format!("Ring Rush v{}", crate::VERSION),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

pub async fn run() {
    println!("=== RING RUSH v{} ===", crate::VERSION);
    macroquad::rand::srand(miniquad::date::now() as u64);
    let tuning: Tuning = config::load_or_warn("rush.ron");
    let mut game = Game::new(tuning);

    loop {
        let dt = get_frame_time();
        game.update(InputFrame::poll(), dt);
        draw(&game);

        if game.lives <= 0 {
            // hold the GAME OVER frame for a moment, then quit
            let end = get_time() + 2.0;
            while get_time() < end {
                draw(&game);
                next_frame().await;
            }
            println!("Game over.");
            break;
        }

        next_frame().await;
    }
}

// ============================================================================
// Drawing
// ============================================================================

const COLOR_PLAYER: Color = Color::new(0.2, 0.39, 1.0, 1.0); // 50, 100, 255
const COLOR_PLATFORM: Color = Color::new(0.0, 0.78, 0.0, 1.0); // 0, 200, 0
const COLOR_RING: Color = Color::new(1.0, 1.0, 0.0, 1.0);
const COLOR_ENEMY: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const COLOR_FIREBALL: Color = Color::new(0.63, 0.0, 0.78, 1.0); // 160, 0, 200

fn draw(game: &Game) {
    clear_background(WHITE);
    let cam = game.camera_x;

    for plat in &game.platforms {
        draw_rectangle(plat.x - cam, plat.y, plat.w, plat.h, COLOR_PLATFORM);
    }

    for ring in &game.rings {
        draw_circle(
            ring.x - cam + RING_SIZE / 2.0,
            ring.y + RING_SIZE / 2.0,
            RING_SIZE / 2.0,
            COLOR_RING,
        );
    }

    for enemy in &game.enemies {
        draw_rectangle(enemy.x - cam, enemy.y, enemy.w, enemy.h, COLOR_ENEMY);
    }

    for fireball in &game.fireballs {
        // circle sits on the hitbox corner, slightly ahead of it
        draw_circle(fireball.x - cam, fireball.y, 8.0, COLOR_FIREBALL);
    }

    let p = &game.player.rect;
    draw_rectangle(p.x - cam, p.y, p.w, p.h, COLOR_PLAYER);

    if game.boss.alive && game.fight_started {
        let b = &game.boss.rect;
        draw_rectangle(b.x - cam, b.y, b.w, b.h, BLACK);
        // health bar shrinks in thirds
        draw_rectangle(
            b.x - cam,
            b.y - 20.0,
            b.w * game.boss.health as f32 / BOSS_MAX_HEALTH as f32,
            10.0,
            COLOR_ENEMY,
        );
    }

    draw_text(&format!("Rings: {}", game.score), 10.0, 32.0, 30.0, BLACK);
    draw_text(&format!("Lives: {}", game.lives), 10.0, 62.0, 30.0, BLACK);

    let center_x = SCREEN_WIDTH as f32 / 2.0;
    let center_y = SCREEN_HEIGHT as f32 / 2.0;
    if game.win {
        draw_text("YOU WIN!", center_x - 60.0, center_y + 22.0, 30.0, COLOR_PLAYER);
    }
    if game.lives <= 0 {
        draw_text("GAME OVER", center_x - 80.0, center_y + 22.0, 30.0, COLOR_ENEMY);
    }
}

// ============================================================================
// Tests
// ============================================================================
