//! QUADCADE: four tiny arcade games, one crate
//!
//! Each game is a self-contained module that owns its entire loop: input,
//! physics, and drawing. The binaries under src/bin/ are thin wrappers that
//! hand control to a game's `run()`. The only code shared between games is
//! the rectangle-overlap helper (`geom`) and the tuning override loader
//! (`config`) - there is deliberately no engine layer here.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod geom;

pub mod dodge;
pub mod platformer;
pub mod rush;
pub mod sandbox;
