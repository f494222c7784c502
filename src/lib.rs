//! Egg Catcher: a chicken paces a perch dropping eggs (and the odd poop)
//! that the player catches in a basket before the clock runs out.
//!
//! Core modules:
//! - `entities`: pure data for the session (chicken, basket, objects, scores)
//! - `pool`: fixed-capacity slot pool for falling objects
//! - `compute`: per-tick simulation and the menu/play/pause/game-over machine
//! - `clock`: measured frame delta to simulation `dt_ms`
//! - `highscore`: single-integer high score file
//! - `config`: runtime file locations

pub mod clock;
pub mod compute;
pub mod config;
pub mod entities;
pub mod highscore;
pub mod pool;

/// Game tuning constants. Distances are playfield pixels (origin bottom-left,
/// y grows upward), speeds are pixels per second, times are milliseconds.
pub mod consts {
    /// Default playfield size.
    pub const WIN_W: f32 = 600.0;
    pub const WIN_H: f32 = 700.0;

    pub const FPS: u32 = 60;
    /// Nominal tick length. Integer division on purpose: 16 ms.
    pub const TICK_MS: u32 = 1000 / FPS;
    /// Measured deltas above this are replaced by `TICK_MS`.
    pub const MAX_FRAME_DELTA_MS: u32 = 1000;

    /// Length of one session.
    pub const TIME_LIMIT_SECS: u32 = 60;

    // Basket
    pub const BASKET_Y: f32 = 40.0;
    pub const BASKET_HALF_WIDTH: f32 = 40.0;
    pub const BASKET_HEIGHT: f32 = 20.0;
    /// Extra reach on each side of the basket when testing a catch.
    pub const BASKET_CATCH_MARGIN: f32 = 6.0;
    /// How far above `BASKET_Y` an object still counts as inside the rim.
    pub const BASKET_RIM: f32 = 8.0;
    /// Basket centre never gets closer than this to either edge.
    pub const BASKET_EDGE_MARGIN: f32 = 20.0;
    /// Distance moved per keyboard step.
    pub const BASKET_STEP: f32 = 20.0;

    // Chicken
    pub const CHICKEN_Y: f32 = 620.0;
    pub const CHICKEN_BASE_SPEED: f32 = 80.0;
    pub const CHICKEN_LEFT_BOUND: f32 = 40.0;
    /// Right bound is `width - CHICKEN_RIGHT_INSET`.
    pub const CHICKEN_RIGHT_INSET: f32 = 60.0;

    // Spawning
    pub const MAX_OBJS: usize = 40;
    pub const SPAWN_INTERVAL_MS: u32 = 900;
    pub const SPAWN_INTERVAL_15_MS: u32 = 730;
    pub const SPAWN_INTERVAL_30_MS: u32 = 550;
    /// Horizontal jitter (±) around the chicken when dropping an object.
    pub const SPAWN_JITTER: i32 = 18;
    /// Objects appear this far below the chicken.
    pub const SPAWN_DROP: f32 = 18.0;
    /// Objects below this y have left the playfield.
    pub const OFFSCREEN_Y: f32 = -20.0;

    // Difficulty
    pub const SPEED_INCREASE_FACTOR: f32 = 1.25;
    /// Elapsed play time at which each speed stage is reached.
    pub const SPEED_MILESTONES_MS: [u32; 3] = [15_000, 30_000, 45_000];
}
