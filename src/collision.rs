//! Hit detection between axis-aligned boxes.

use std::str::FromStr;

use crate::entities::{BoundingBox, Position};
use crate::error::ConfigError;

/// An entity's placement as seen by the collision test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hitbox {
    pub origin: Position,
    pub size: BoundingBox,
}

impl Hitbox {
    pub fn new(origin: Position, size: BoundingBox) -> Self {
        Hitbox { origin, size }
    }
}

/// Which predicate the world uses when projectiles look for targets.
///
/// For a 1x1 hunter against a target at least 2 cells wide and tall the two
/// modes hit the same cells. They differ only for thinner targets or for a
/// target sitting entirely inside the hunter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionMode {
    /// [`overlaps`]: one-sided, exclusive edge test.
    #[default]
    Edge,
    /// [`overlaps_aabb`]: ordinary box intersection.
    Aabb,
}

impl CollisionMode {
    pub fn test(self, a: &Hitbox, b: &Hitbox) -> bool {
        match self {
            CollisionMode::Edge => overlaps(a, b),
            CollisionMode::Aabb => overlaps_aabb(a, b),
        }
    }
}

impl FromStr for CollisionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "edge" => Ok(CollisionMode::Edge),
            "aabb" => Ok(CollisionMode::Aabb),
            _ => Err(ConfigError::UnknownCollisionMode(s.to_string())),
        }
    }
}

/// `n` lies strictly between the two bounds, in either order.
pub fn strictly_between(n: i32, lo: i32, hi: i32) -> bool {
    (lo < n && n < hi) || (hi < n && n < lo)
}

/// True when `a`'s near or far edge falls strictly inside `b`'s span on
/// both axes.
///
/// Only `a`'s edges are checked, so a small `b` sitting entirely inside `a`
/// does not register, and boxes that merely touch never do.
pub fn overlaps(a: &Hitbox, b: &Hitbox) -> bool {
    let axis = |a0: i32, a_len: i32, b0: i32, b_len: i32| {
        strictly_between(a0, b0, b0 + b_len) || strictly_between(a0 + a_len, b0, b0 + b_len)
    };

    axis(a.origin.col, a.size.width, b.origin.col, b.size.width)
        && axis(a.origin.row, a.size.height, b.origin.row, b.size.height)
}

/// Symmetric intersection of the half-open boxes. Empty boxes never hit.
pub fn overlaps_aabb(a: &Hitbox, b: &Hitbox) -> bool {
    if a.size.is_empty() || b.size.is_empty() {
        return false;
    }
    a.origin.col < b.origin.col + b.size.width
        && b.origin.col < a.origin.col + a.size.width
        && a.origin.row < b.origin.row + b.size.height
        && b.origin.row < a.origin.row + a.size.height
}
