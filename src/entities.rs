/// All game entity types — pure data, no logic.

/// What the player asked for during one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Input {
    #[default]
    None,
    /// Override the bird's velocity with the jump impulse.
    Jump,
    /// Throw the current life away and start over.
    Reset,
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// A pipe pair with a passable gap between its two walls.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    /// Leading (left) edge.
    pub x: f32,
    /// Top boundary of the gap; the upper wall spans `0..gap_top`.
    pub gap_top: f32,
    /// Bottom boundary of the gap; the lower wall spans `gap_bottom..height`.
    pub gap_bottom: f32,
    /// Set once the bird has cleared the trailing edge and the point was awarded.
    pub scored: bool,
}

impl Obstacle {
    /// Right edge of the obstacle for a given width.
    pub fn trailing_edge(&self, width: f32) -> f32 {
        self.x + width
    }

    pub fn gap_center(&self) -> f32 {
        (self.gap_top + self.gap_bottom) / 2.0
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Vertical position of the bird's centre (y grows downward).
    pub bird_y: f32,
    /// Vertical speed in units per tick (positive = falling).
    pub bird_velocity: f32,
    /// Active obstacles in spawn order, which is also left-to-right order.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Frozen until the next reset once set.
    pub is_over: bool,
}
