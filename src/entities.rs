//! All game entity types — pure data, no simulation logic.

use crate::consts::*;
use crate::pool::ObjectPool;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Menu,
    Playing,
    Paused,
    GameOver,
}

// ── Falling objects ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    EggNormal,
    EggBlue,
    EggGold,
    Poop,
}

/// Per-kind lookup entry: everything the simulation and renderer need to
/// know about a kind lives in one row of `KIND_TABLE`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KindTraits {
    /// RGB fill colour.
    pub color: (u8, u8, u8),
    /// Points added when caught (negative for poop).
    pub score_delta: i32,
    /// Base fall speed before the global multiplier, px/s.
    pub base_speed: f32,
}

static KIND_TABLE: [(ObjectKind, KindTraits); 4] = [
    (
        ObjectKind::EggNormal,
        KindTraits { color: (255, 255, 230), score_delta: 1, base_speed: 90.0 },
    ),
    (
        ObjectKind::EggBlue,
        KindTraits { color: (77, 153, 255), score_delta: 5, base_speed: 100.0 },
    ),
    (
        ObjectKind::EggGold,
        KindTraits { color: (255, 217, 38), score_delta: 10, base_speed: 110.0 },
    ),
    (
        ObjectKind::Poop,
        KindTraits { color: (64, 38, 13), score_delta: -10, base_speed: 130.0 },
    ),
];

impl ObjectKind {
    pub const ALL: [ObjectKind; 4] = [
        ObjectKind::EggNormal,
        ObjectKind::EggBlue,
        ObjectKind::EggGold,
        ObjectKind::Poop,
    ];

    pub fn traits(self) -> &'static KindTraits {
        // Table rows are in declaration order.
        &KIND_TABLE[self as usize].1
    }

    pub fn score_delta(self) -> i32 {
        self.traits().score_delta
    }

    pub fn base_speed(self) -> f32 {
        self.traits().base_speed
    }

    pub fn color(self) -> (u8, u8, u8) {
        self.traits().color
    }
}

/// One pool slot. `active == false` means the slot is free.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallingObject {
    pub active: bool,
    pub x: f32,
    pub y: f32,
    /// Object-local fall speed (px/s), scaled by the global multiplier.
    pub vertical_speed: f32,
    pub kind: ObjectKind,
}

impl FallingObject {
    /// A freshly dropped, active object of `kind` at `(x, y)`.
    pub fn new(kind: ObjectKind, x: f32, y: f32) -> Self {
        FallingObject {
            active: true,
            x,
            y,
            vertical_speed: kind.base_speed(),
            kind,
        }
    }

    pub const fn empty() -> Self {
        FallingObject {
            active: false,
            x: 0.0,
            y: 0.0,
            vertical_speed: 0.0,
            kind: ObjectKind::EggNormal,
        }
    }
}

impl Default for FallingObject {
    fn default() -> Self {
        Self::empty()
    }
}

// ── Actors ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basket {
    pub x: f32,
    pub half_width: f32,
}

impl Basket {
    pub fn centred(width: f32) -> Self {
        Basket {
            x: width * 0.5,
            half_width: BASKET_HALF_WIDTH,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chicken {
    pub x: f32,
    pub y: f32,
    /// Signed horizontal speed, px/s. Positive walks right.
    pub velocity: f32,
}

impl Chicken {
    pub fn centred(width: f32) -> Self {
        Chicken {
            x: width * 0.5,
            y: CHICKEN_Y,
            velocity: CHICKEN_BASE_SPEED,
        }
    }
}

// ── Session bookkeeping ───────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyState {
    pub elapsed_play_ms: u32,
    /// 0 before the first milestone, 3 after the last.
    pub speed_stage: u8,
    pub global_speed_multiplier: f32,
    /// Magnitude of the chicken's walking speed.
    pub chicken_speed: f32,
}

impl Default for DifficultyState {
    fn default() -> Self {
        DifficultyState {
            elapsed_play_ms: 0,
            speed_stage: 0,
            global_speed_multiplier: 1.0,
            chicken_speed: CHICKEN_BASE_SPEED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreState {
    /// May go negative.
    pub points: i32,
    pub high_score: i32,
    pub time_remaining_secs: u32,
}

/// Playfield size in pixels. Chicken and basket bounds derive from the width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Playfield { width: WIN_W, height: WIN_H }
    }
}

impl Playfield {
    pub fn chicken_left_bound(&self) -> f32 {
        CHICKEN_LEFT_BOUND
    }

    /// Never left of the left bound, even on a very narrow playfield.
    pub fn chicken_right_bound(&self) -> f32 {
        (self.width - CHICKEN_RIGHT_INSET).max(CHICKEN_LEFT_BOUND)
    }

    pub fn basket_min_x(&self) -> f32 {
        BASKET_EDGE_MARGIN
    }

    pub fn basket_max_x(&self) -> f32 {
        (self.width - BASKET_EDGE_MARGIN).max(BASKET_EDGE_MARGIN)
    }
}

// ── Master session state ──────────────────────────────────────────────────────

/// Everything the game loop owns. Cloneable so the pure update functions
/// can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub status: GameStatus,
    pub playfield: Playfield,
    pub chicken: Chicken,
    pub basket: Basket,
    pub objects: ObjectPool,
    pub difficulty: DifficultyState,
    pub score: ScoreState,
    /// Milliseconds since the last spawn.
    pub spawn_accumulator_ms: u32,
    /// Milliseconds towards the next countdown second.
    pub countdown_accumulator_ms: u32,
    /// Set once a quit action has been handled; the host should persist
    /// and exit.
    pub quit_requested: bool,
}

// ── Input actions ─────────────────────────────────────────────────────────────

/// Discrete actions the input adapter produces. Whether an action does
/// anything depends on the current `GameStatus`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Start,
    PauseResume,
    Quit,
    MoveBasketLeft,
    MoveBasketRight,
    /// Pointer x in playfield pixels.
    SetBasketPosition(f32),
    ToMenu,
    Restart,
}
