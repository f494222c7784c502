//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `SessionState` (and, where needed, an RNG handle) and returns a brand-new
//! `SessionState`. Side effects are limited to the injected RNG and logging.

use rand::Rng;

use crate::consts::*;
use crate::entities::{
    Action, Basket, Chicken, DifficultyState, FallingObject, GameStatus, ObjectKind, Playfield,
    ScoreState, SessionState,
};
use crate::pool::ObjectPool;

// ── Difficulty tables ────────────────────────────────────────────────────────

/// Delay between automatic spawns for the current score.
pub fn effective_spawn_interval(points: i32) -> u32 {
    if points >= 30 {
        SPAWN_INTERVAL_30_MS
    } else if points >= 15 {
        SPAWN_INTERVAL_15_MS
    } else {
        SPAWN_INTERVAL_MS
    }
}

/// Map a uniform draw `r` in `1..=100` to an object kind. Buckets are
/// checked in order, first match wins.
pub fn roll_kind(r: u32) -> ObjectKind {
    if r <= 6 {
        ObjectKind::EggGold
    } else if r <= 20 {
        ObjectKind::EggBlue
    } else if r <= 30 {
        ObjectKind::Poop
    } else {
        ObjectKind::EggNormal
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the process-start state: sitting in the menu, session values at
/// their defaults, `high_score` as loaded from disk.
pub fn init_state(high_score: i32, width: f32, height: f32) -> SessionState {
    let playfield = Playfield { width, height };
    SessionState {
        status: GameStatus::Menu,
        playfield,
        chicken: Chicken::centred(width),
        basket: Basket::centred(width),
        objects: ObjectPool::new(),
        difficulty: DifficultyState::default(),
        score: ScoreState {
            points: 0,
            high_score,
            time_remaining_secs: TIME_LIMIT_SECS,
        },
        spawn_accumulator_ms: 0,
        countdown_accumulator_ms: 0,
        quit_requested: false,
    }
}

/// Put every per-session value back to its starting point. The high score,
/// playfield and status are left alone.
pub fn reset_game(state: &SessionState) -> SessionState {
    let width = state.playfield.width;
    SessionState {
        chicken: Chicken::centred(width),
        basket: Basket::centred(width),
        objects: ObjectPool::new(),
        difficulty: DifficultyState::default(),
        score: ScoreState {
            points: 0,
            time_remaining_secs: TIME_LIMIT_SECS,
            ..state.score
        },
        spawn_accumulator_ms: 0,
        countdown_accumulator_ms: 0,
        ..state.clone()
    }
}

/// Fold the current points into the high score if they beat it.
pub fn commit_high_score(score: &ScoreState) -> ScoreState {
    if score.points > score.high_score {
        log::info!("New high score: {} (was {})", score.points, score.high_score);
        ScoreState {
            high_score: score.points,
            ..*score
        }
    } else {
        *score
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

fn clamp_basket(x: f32, playfield: &Playfield) -> f32 {
    x.clamp(playfield.basket_min_x(), playfield.basket_max_x())
}

pub fn move_basket_left(state: &SessionState) -> SessionState {
    set_basket_position(state, state.basket.x - BASKET_STEP)
}

pub fn move_basket_right(state: &SessionState) -> SessionState {
    set_basket_position(state, state.basket.x + BASKET_STEP)
}

/// Pointer passthrough: only the x coordinate matters.
pub fn set_basket_position(state: &SessionState, x: f32) -> SessionState {
    SessionState {
        basket: Basket {
            x: clamp_basket(x, &state.playfield),
            ..state.basket
        },
        ..state.clone()
    }
}

/// Apply the window size. Bounds follow the new width; the basket and
/// chicken are pulled back inside but nothing is rescaled.
pub fn set_playfield_bounds(state: &SessionState, width: f32, height: f32) -> SessionState {
    let playfield = Playfield { width, height };
    SessionState {
        playfield,
        basket: Basket {
            x: clamp_basket(state.basket.x, &playfield),
            ..state.basket
        },
        chicken: step_chicken(&state.chicken, &playfield, 0.0),
        ..state.clone()
    }
}

/// Route one input action through the state machine. Actions that make no
/// sense in the current status are ignored.
pub fn handle_action(state: &SessionState, action: Action) -> SessionState {
    use Action::*;
    use GameStatus::*;

    match (state.status, action) {
        (_, Quit) => SessionState {
            score: commit_high_score(&state.score),
            quit_requested: true,
            ..state.clone()
        },
        (Menu, Start) | (GameOver, Start) | (GameOver, Restart) => {
            log::info!("Session started");
            SessionState {
                status: Playing,
                ..reset_game(state)
            }
        }
        (Playing, PauseResume) => SessionState {
            status: Paused,
            ..state.clone()
        },
        (Paused, PauseResume) => SessionState {
            status: Playing,
            ..state.clone()
        },
        (Paused, ToMenu) | (GameOver, ToMenu) => SessionState {
            status: Menu,
            ..state.clone()
        },
        (Playing, MoveBasketLeft) => move_basket_left(state),
        (Playing, MoveBasketRight) => move_basket_right(state),
        (Playing, SetBasketPosition(x)) => set_basket_position(state, x),
        _ => state.clone(),
    }
}

// ── Per-tick pieces ──────────────────────────────────────────────────────────

/// Walk the chicken for `dt` seconds. Crossing a bound clamps to it and
/// forces the velocity to point back inside.
pub fn step_chicken(chicken: &Chicken, playfield: &Playfield, dt: f32) -> Chicken {
    let left = playfield.chicken_left_bound();
    let right = playfield.chicken_right_bound();

    let mut x = chicken.x + chicken.velocity * dt;
    let mut velocity = chicken.velocity;
    if x < left {
        x = left;
        velocity = velocity.abs();
    }
    if x > right {
        x = right;
        velocity = -velocity.abs();
    }
    Chicken { x, velocity, ..*chicken }
}

/// Add `dt_ms` of play time and fire at most one pending milestone.
/// Returns the new state and whether a stage was reached this tick.
pub fn advance_difficulty(difficulty: &DifficultyState, dt_ms: u32) -> (DifficultyState, bool) {
    let elapsed_play_ms = difficulty.elapsed_play_ms.saturating_add(dt_ms);
    let stage = difficulty.speed_stage;

    // One stage per tick, even if several milestones were skipped over.
    let due = SPEED_MILESTONES_MS
        .get(stage as usize)
        .is_some_and(|&at| elapsed_play_ms >= at);

    let next = if due {
        log::debug!("Speed stage {} reached at {} ms", stage + 1, elapsed_play_ms);
        DifficultyState {
            elapsed_play_ms,
            speed_stage: stage + 1,
            global_speed_multiplier: difficulty.global_speed_multiplier * SPEED_INCREASE_FACTOR,
            chicken_speed: difficulty.chicken_speed * SPEED_INCREASE_FACTOR,
        }
    } else {
        DifficultyState {
            elapsed_play_ms,
            ..*difficulty
        }
    };
    (next, due)
}

/// True when `obj` sits inside the basket's catch box.
pub fn is_caught(basket: &Basket, obj: &FallingObject) -> bool {
    let top = BASKET_Y + BASKET_RIM;
    let bottom = BASKET_Y - BASKET_HEIGHT;
    let left = basket.x - basket.half_width - BASKET_CATCH_MARGIN;
    let right = basket.x + basket.half_width + BASKET_CATCH_MARGIN;
    (bottom..=top).contains(&obj.y) && (left..=right).contains(&obj.x)
}

/// Drop one object just below the chicken into the first free slot.
/// Returns the slot used, or `None` when the pool is full.
pub fn spawn_from_chicken(
    objects: &mut ObjectPool,
    chicken: &Chicken,
    rng: &mut impl Rng,
) -> Option<usize> {
    let slot = objects.spawn(|| {
        let x = chicken.x + rng.gen_range(-SPAWN_JITTER..=SPAWN_JITTER) as f32;
        let y = chicken.y - SPAWN_DROP;
        let kind = roll_kind(rng.gen_range(1..=100));
        FallingObject::new(kind, x, y)
    });
    if slot.is_none() {
        log::debug!("Object pool full, spawn dropped");
    }
    slot
}

/// Move every active object down by one tick, then resolve catches and
/// objects that left the playfield. Returns the total score change.
fn advance_objects(
    objects: &mut ObjectPool,
    basket: &Basket,
    dt: f32,
    multiplier: f32,
) -> i32 {
    let mut delta = 0;
    let active: Vec<usize> = objects.active_indices().collect();
    for slot in active {
        let Some(obj) = objects.get_mut(slot) else { continue };
        obj.y -= obj.vertical_speed * dt * multiplier;

        // Caught and off-screen are exclusive; catch wins.
        if is_caught(basket, obj) {
            delta += obj.kind.score_delta();
            obj.active = false;
        } else if obj.y < OFFSCREEN_Y {
            obj.active = false;
        }
    }
    delta
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by `dt_ms` milliseconds. Only does anything while
/// playing. All randomness comes through `rng` so callers control
/// determinism (tests use a seeded RNG).
pub fn tick(state: &SessionState, dt_ms: u32, rng: &mut impl Rng) -> SessionState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    let dt = dt_ms as f32 / 1000.0;

    // ── 1. Difficulty milestones ─────────────────────────────────────────────
    let (difficulty, stage_up) = advance_difficulty(&state.difficulty, dt_ms);
    let mut chicken = state.chicken;
    if stage_up {
        chicken.velocity *= SPEED_INCREASE_FACTOR;
    }

    // ── 2. Chicken walk ──────────────────────────────────────────────────────
    let chicken = step_chicken(&chicken, &state.playfield, dt);

    // ── 3. Spawning ──────────────────────────────────────────────────────────
    let mut objects = state.objects.clone();
    let mut spawn_accumulator_ms = state.spawn_accumulator_ms + dt_ms;
    if spawn_accumulator_ms >= effective_spawn_interval(state.score.points) {
        spawn_accumulator_ms = 0;
        spawn_from_chicken(&mut objects, &chicken, rng);
    }

    // ── 4. Falling objects, catches and misses ───────────────────────────────
    let gained = advance_objects(
        &mut objects,
        &state.basket,
        dt,
        difficulty.global_speed_multiplier,
    );
    let mut score = ScoreState {
        points: state.score.points + gained,
        ..state.score
    };

    // ── 5. Countdown ─────────────────────────────────────────────────────────
    let mut status = state.status;
    let mut countdown_accumulator_ms = state.countdown_accumulator_ms + dt_ms;
    if countdown_accumulator_ms >= 1000 {
        countdown_accumulator_ms -= 1000;
        score.time_remaining_secs = score.time_remaining_secs.saturating_sub(1);
        if score.time_remaining_secs == 0 {
            log::info!("Game over with {} points", score.points);
            score = commit_high_score(&score);
            status = GameStatus::GameOver;
        }
    }

    SessionState {
        status,
        chicken,
        objects,
        difficulty,
        score,
        spawn_accumulator_ms,
        countdown_accumulator_ms,
        ..state.clone()
    }
}
