/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// value.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{GameState, Input, Obstacle};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state of a fresh life: bird centred and at rest, no pipes.
pub fn init_state(config: &GameConfig) -> GameState {
    GameState {
        bird_y: config.playfield_height / 2.0,
        bird_velocity: 0.0,
        obstacles: Vec::new(),
        score: 0,
        is_over: false,
    }
}

/// A new obstacle at the right edge with its gap centred somewhere in
/// `[gap_margin, playfield_height - gap_margin]`.
pub fn spawn_obstacle(config: &GameConfig, rng: &mut impl Rng) -> Obstacle {
    let low = config.gap_margin;
    let high = config.playfield_height - config.gap_margin;
    let center = if high > low {
        rng.gen_range(low..=high)
    } else {
        low
    };
    let half = config.gap_height / 2.0;
    Obstacle {
        x: config.playfield_width,
        gap_top: center - half,
        gap_bottom: center + half,
        scored: false,
    }
}

// ── Stages of a tick ─────────────────────────────────────────────────────────

/// A jump replaces the current velocity rather than adding to it.
pub fn apply_jump(state: &GameState, config: &GameConfig) -> GameState {
    GameState {
        bird_velocity: config.jump_impulse,
        ..state.clone()
    }
}

/// Semi-implicit Euler: velocity first, then position with the new velocity.
pub fn integrate_bird(state: &GameState, config: &GameConfig) -> GameState {
    let bird_velocity = state.bird_velocity + config.gravity;
    GameState {
        bird_y: state.bird_y + bird_velocity,
        bird_velocity,
        ..state.clone()
    }
}

/// Append at most one obstacle: when none exist, or when the newest one has
/// moved further than `spawn_interval` from the right edge.
pub fn maybe_spawn(
    obstacles: &[Obstacle],
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Vec<Obstacle> {
    let due = match obstacles.last() {
        None => true,
        Some(newest) => newest.x < config.playfield_width - config.spawn_interval,
    };
    let mut obstacles = obstacles.to_vec();
    if due {
        let obstacle = spawn_obstacle(config, rng);
        log::trace!(
            "spawned obstacle with gap {:.1}..{:.1}",
            obstacle.gap_top,
            obstacle.gap_bottom
        );
        obstacles.push(obstacle);
    }
    obstacles
}

/// Scroll every obstacle left by `pipe_speed` and award a point for each one
/// whose trailing edge is now behind the bird.  Returns the moved obstacles
/// and the number of points earned.
pub fn advance_obstacles(obstacles: &[Obstacle], config: &GameConfig) -> (Vec<Obstacle>, u32) {
    let mut gained = 0;
    let moved = obstacles
        .iter()
        .map(|o| {
            let x = o.x - config.pipe_speed;
            let passed = !o.scored && x + config.obstacle_width < config.bird_x;
            if passed {
                gained += 1;
            }
            Obstacle {
                x,
                scored: o.scored || passed,
                ..o.clone()
            }
        })
        .collect();
    (moved, gained)
}

/// Drop obstacles that have fully left the playfield on the left.
pub fn despawn_obstacles(obstacles: Vec<Obstacle>, config: &GameConfig) -> Vec<Obstacle> {
    obstacles
        .into_iter()
        .filter(|o| o.trailing_edge(config.obstacle_width) > 0.0)
        .collect()
}

// ── Collision ────────────────────────────────────────────────────────────────

/// True when the bird touches the floor/ceiling or a pipe wall.
pub fn check_collision(state: &GameState, config: &GameConfig) -> bool {
    let r = config.bird_radius;
    let top = state.bird_y - r;
    let bottom = state.bird_y + r;

    if top <= 0.0 || bottom >= config.playfield_height {
        return true;
    }

    let left = config.bird_x - r;
    let right = config.bird_x + r;
    state.obstacles.iter().any(|o| {
        let overlaps = right > o.x && left < o.trailing_edge(config.obstacle_width);
        overlaps && (top < o.gap_top || bottom > o.gap_bottom)
    })
}

// ── Per-tick step (nearly pure — RNG is injected) ────────────────────────────

/// Advance the simulation by one tick.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
pub fn step(
    state: &GameState,
    input: Input,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> GameState {
    // ── 1. Reset wins over everything, even a finished game ──────────────────
    if input == Input::Reset {
        log::info!("reset after scoring {}", state.score);
        return init_state(config);
    }

    // ── 2. Game over freezes the world until a reset ─────────────────────────
    if state.is_over {
        return state.clone();
    }

    // ── 3. Jump + 4. physics ─────────────────────────────────────────────────
    let state = if input == Input::Jump {
        apply_jump(state, config)
    } else {
        state.clone()
    };
    let state = integrate_bird(&state, config);

    // ── 5. Spawn, 6. scroll & score, 7. despawn ──────────────────────────────
    let obstacles = maybe_spawn(&state.obstacles, config, rng);
    let (obstacles, gained) = advance_obstacles(&obstacles, config);
    let obstacles = despawn_obstacles(obstacles, config);

    let next = GameState {
        obstacles,
        score: state.score + gained,
        ..state
    };

    // ── 8. Collision ends the life ───────────────────────────────────────────
    if check_collision(&next, config) {
        log::info!("game over with score {}", next.score);
        return GameState {
            is_over: true,
            ..next
        };
    }
    next
}
