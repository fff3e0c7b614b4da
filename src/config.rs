//! Session configuration.
//!
//! Every tunable the simulation reads lives here so tests can build tiny,
//! deterministic worlds and the binary can apply a few environment overrides.

use std::time::Duration;

use crate::collision::CollisionMode;
use crate::entities::HUD_ROWS;
use crate::error::ConfigError;

pub const ENV_SEED: &str = "GRID_SHOOTER_SEED";
pub const ENV_COLLISION: &str = "GRID_SHOOTER_COLLISION";
pub const ENV_LIVES: &str = "GRID_SHOOTER_LIVES";

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Frame buffer rows.
    pub height: u16,
    /// Frame buffer columns.
    pub width: u16,
    /// Initial value of the `lives_left` counter.
    pub starting_lives: i64,
    /// Frames per second the driver aims for.
    pub frame_rate: u32,
    /// Columns the player moves per tick while a direction key is held.
    pub player_step: i32,
    /// Frames an enemy idles between moves.
    pub enemy_fire_interval: u32,
    /// An eligible enemy fires with probability `1 / enemy_fire_odds`.
    pub enemy_fire_odds: u32,
    /// Projectiles further than this many cells outside the buffer are removed.
    /// `None` keeps them forever.
    pub offscreen_margin: Option<i32>,
    pub collision: CollisionMode,
    /// Fixed seed for enemy fire; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: 40,
            width: 80,
            starting_lives: 3,
            frame_rate: 24,
            player_step: 2,
            enemy_fire_interval: 10,
            enemy_fire_odds: 20,
            offscreen_margin: Some(1),
            collision: CollisionMode::Edge,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Defaults with any `GRID_SHOOTER_*` overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = GameConfig::default();

        if let Ok(raw) = std::env::var(ENV_SEED) {
            let seed = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_SEED,
                value: raw.clone(),
            })?;
            config.rng_seed = Some(seed);
        }
        if let Ok(raw) = std::env::var(ENV_COLLISION) {
            config.collision = raw.parse()?;
        }
        if let Ok(raw) = std::env::var(ENV_LIVES) {
            config.starting_lives = raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|lives| *lives >= 0)
                .ok_or_else(|| ConfigError::InvalidEnv {
                    var: ENV_LIVES,
                    value: raw.clone(),
                })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.width == 0 {
            return Err(ConfigError::EmptyBuffer {
                height: self.height,
                width: self.width,
            });
        }
        if self.height < HUD_ROWS as u16 {
            return Err(ConfigError::BufferTooShort {
                height: self.height,
                needed: HUD_ROWS as u16,
            });
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::Zero("frame_rate"));
        }
        if self.enemy_fire_interval == 0 {
            return Err(ConfigError::Zero("enemy_fire_interval"));
        }
        if self.enemy_fire_odds == 0 {
            return Err(ConfigError::Zero("enemy_fire_odds"));
        }
        Ok(())
    }

    /// Wall-clock budget of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    /// True while `(row, col)` lies inside the buffer grown by the
    /// off-buffer margin. Always true when no margin is configured.
    pub fn within_margin(&self, row: i32, col: i32) -> bool {
        match self.offscreen_margin {
            None => true,
            Some(margin) => {
                row >= -margin
                    && row < self.height as i32 + margin
                    && col >= -margin
                    && col < self.width as i32 + margin
            }
        }
    }
}
