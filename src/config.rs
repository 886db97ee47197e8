/// Tunable constants of the simulation.
///
/// Every field has a default matching the classic 400×600 arcade layout, and
/// a TOML file may override any subset of them.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

// ── Defaults ──────────────────────────────────────────────────────────────────

pub const PLAYFIELD_WIDTH: f32 = 400.0;
pub const PLAYFIELD_HEIGHT: f32 = 600.0;
pub const BIRD_X: f32 = 50.0;
pub const BIRD_RADIUS: f32 = 15.0;
/// Velocity gained per tick while falling.
pub const GRAVITY: f32 = 0.3;
/// Velocity set (not added) by a jump; negative is upward.
pub const JUMP_IMPULSE: f32 = -8.0;
pub const OBSTACLE_WIDTH: f32 = 60.0;
pub const GAP_HEIGHT: f32 = 200.0;
/// Closest the gap centre may come to the top or bottom edge.
pub const GAP_MARGIN: f32 = 100.0;
pub const PIPE_SPEED: f32 = 3.0;
/// Horizontal distance between consecutive spawns.
pub const SPAWN_INTERVAL: f32 = 200.0;
pub const TICK_RATE_HZ: u32 = 60;

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub bird_x: f32,
    pub bird_radius: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub gap_margin: f32,
    pub pipe_speed: f32,
    pub spawn_interval: f32,
    pub tick_rate_hz: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            bird_x: BIRD_X,
            bird_radius: BIRD_RADIUS,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            gap_margin: GAP_MARGIN,
            pipe_speed: PIPE_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Reject values that would make the game unplayable or the spawn range empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reals = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("bird_x", self.bird_x),
            ("bird_radius", self.bird_radius),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("gap_margin", self.gap_margin),
            ("pipe_speed", self.pipe_speed),
            ("spawn_interval", self.spawn_interval),
        ];
        if let Some((name, _)) = reals.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be a finite number")));
        }

        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("bird_radius", self.bird_radius),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("pipe_speed", self.pipe_speed),
        ];
        if let Some((name, v)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(invalid(format!("{name} must be positive, got {v}")));
        }
        if self.tick_rate_hz == 0 {
            return Err(invalid("tick_rate_hz must be positive".to_string()));
        }

        if self.gap_height >= self.playfield_height {
            return Err(invalid(format!(
                "gap_height {} must be smaller than playfield_height {}",
                self.gap_height, self.playfield_height
            )));
        }
        if self.gap_margin < 0.0 || 2.0 * self.gap_margin > self.playfield_height {
            return Err(invalid(format!(
                "gap_margin {} leaves no room for a gap in a playfield {} tall",
                self.gap_margin, self.playfield_height
            )));
        }
        if self.bird_x < 0.0 || self.bird_x > self.playfield_width {
            return Err(invalid(format!(
                "bird_x {} lies outside the playfield (0..={})",
                self.bird_x, self.playfield_width
            )));
        }
        Ok(())
    }

    /// Wall-clock length of one tick.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::Invalid(msg)
}
