use thiserror::Error;

/// Errors raised while building a [`crate::config::GameConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("frame buffer must be at least 1x1, got {height}x{width}")]
    EmptyBuffer { height: u16, width: u16 },

    #[error("frame buffer height {height} cannot fit the {needed}-row scoreboard")]
    BufferTooShort { height: u16, needed: u16 },

    #[error("{0} must be non-zero")]
    Zero(&'static str),

    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("unknown collision mode {0:?} (expected \"edge\" or \"aabb\")")]
    UnknownCollisionMode(String),
}
