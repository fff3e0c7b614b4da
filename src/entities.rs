//! Game entity types: positions, sprites and the closed set of variants.
//!
//! Behaviour over time lives in [`crate::compute`]; this module only answers
//! the static questions (what do you look like, where are you, what are you).

use crate::collision::Hitbox;
use crate::globals::Globals;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Cell coordinates. Rows grow downward, columns grow rightward. Either may
/// be negative or past the buffer edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }
}

/// Size in cells, used only for collision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundingBox {
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub const fn new(width: i32, height: i32) -> Self {
        BoundingBox { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Rows of characters. Rows may have different lengths; nothing pads them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sprite {
    rows: Vec<Vec<char>>,
}

impl Sprite {
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        Sprite {
            rows: lines.iter().map(|l| l.as_ref().chars().collect()).collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    /// Length of the first row.
    pub fn width(&self) -> i32 {
        self.rows.first().map_or(0, |r| r.len() as i32)
    }

    pub fn bound(&self) -> BoundingBox {
        BoundingBox::new(self.width(), self.height())
    }

    /// Row `i` as a string, mostly for assertions.
    pub fn line(&self, i: usize) -> Option<String> {
        self.rows.get(i).map(|r| r.iter().collect())
    }
}

pub const PLAYER_SPRITE: [&str; 3] = ["  ^  ", " |o| ", "/ | \\"];
pub const ENEMY_SPRITE: [&str; 3] = [" ^ ^ ", "(000)", "/! !\\"];
pub const PLAYER_PROJECTILE_SPRITE: [&str; 1] = ["|"];
pub const ENEMY_PROJECTILE_SPRITE: [&str; 1] = ["$"];

/// Projectiles occupy a single cell.
pub const PROJECTILE_BOUND: BoundingBox = BoundingBox::new(1, 1);

/// Rows taken by the scoreboard at the bottom of the buffer.
pub const HUD_ROWS: i32 = 4;

const fn sprite_width(lines: &[&str]) -> i32 {
    lines[0].len() as i32
}

const fn sprite_height(lines: &[&str]) -> i32 {
    lines.len() as i32
}

// ── Variants ──────────────────────────────────────────────────────────────────

/// Coarse classification used by projectiles when picking targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Hud,
    Player,
    Enemy,
    Projectile,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub pos: Position,
    /// Horizontal step, always +1 or -1.
    pub velocity: i32,
    /// Frames since the last move.
    pub counter: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerProjectile {
    pub pos: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnemyProjectile {
    pub pos: Position,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hud {
    pub pos: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    Player(Player),
    Enemy(Enemy),
    PlayerProjectile(PlayerProjectile),
    EnemyProjectile(EnemyProjectile),
    Hud(Hud),
}

/// Read-only session state an entity may consult when drawing itself.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    pub globals: &'a Globals,
    pub width: u16,
}

// ── Constructors ──────────────────────────────────────────────────────────────

impl Entity {
    pub fn player(row: i32, col: i32) -> Self {
        Entity::Player(Player {
            pos: Position::new(row, col),
        })
    }

    pub fn enemy(row: i32, col: i32) -> Self {
        Entity::Enemy(Enemy {
            pos: Position::new(row, col),
            velocity: 1,
            counter: 0,
        })
    }

    pub fn player_projectile(row: i32, col: i32) -> Self {
        Entity::PlayerProjectile(PlayerProjectile {
            pos: Position::new(row, col),
        })
    }

    pub fn enemy_projectile(row: i32, col: i32) -> Self {
        Entity::EnemyProjectile(EnemyProjectile {
            pos: Position::new(row, col),
        })
    }

    pub fn hud() -> Self {
        Entity::Hud(Hud::default())
    }
}

// ── Static queries ────────────────────────────────────────────────────────────

impl Entity {
    pub fn classify(&self) -> EntityKind {
        match self {
            Entity::Player(_) => EntityKind::Player,
            Entity::Enemy(_) => EntityKind::Enemy,
            Entity::PlayerProjectile(_) | Entity::EnemyProjectile(_) => EntityKind::Projectile,
            Entity::Hud(_) => EntityKind::Hud,
        }
    }

    pub fn locate(&self) -> Position {
        match self {
            Entity::Player(p) => p.pos,
            Entity::Enemy(e) => e.pos,
            Entity::PlayerProjectile(p) => p.pos,
            Entity::EnemyProjectile(p) => p.pos,
            Entity::Hud(h) => h.pos,
        }
    }

    /// Collision size. Projectiles are a single cell; the scoreboard has none.
    pub fn bound(&self) -> BoundingBox {
        match self {
            Entity::Player(_) => {
                BoundingBox::new(sprite_width(&PLAYER_SPRITE), sprite_height(&PLAYER_SPRITE))
            }
            Entity::Enemy(_) => {
                BoundingBox::new(sprite_width(&ENEMY_SPRITE), sprite_height(&ENEMY_SPRITE))
            }
            Entity::PlayerProjectile(_) | Entity::EnemyProjectile(_) => PROJECTILE_BOUND,
            Entity::Hud(_) => BoundingBox::new(0, 0),
        }
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.locate(), self.bound())
    }

    /// Where to draw and what.
    pub fn render(&self, scene: &Scene<'_>) -> (Position, Sprite) {
        let sprite = match self {
            Entity::Player(_) => Sprite::from_lines(&PLAYER_SPRITE),
            Entity::Enemy(_) => Sprite::from_lines(&ENEMY_SPRITE),
            Entity::PlayerProjectile(_) => Sprite::from_lines(&PLAYER_PROJECTILE_SPRITE),
            Entity::EnemyProjectile(_) => Sprite::from_lines(&ENEMY_PROJECTILE_SPRITE),
            Entity::Hud(_) => scoreboard(scene),
        };
        (self.locate(), sprite)
    }

    pub fn is_projectile(&self) -> bool {
        self.classify() == EntityKind::Projectile
    }
}

/// Four-row banner: a border of `#`, the score, the lives left, a border.
pub fn scoreboard(scene: &Scene<'_>) -> Sprite {
    let border = "#".repeat(scene.width as usize);
    Sprite::from_lines(&[
        border.clone(),
        format!("# Score: {}", scene.globals.score()),
        format!("# Lives Remaining: {}", scene.globals.lives_left()),
        border,
    ])
}
