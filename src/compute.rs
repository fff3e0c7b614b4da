//! Per-frame behaviour of every entity variant.
//!
//! `advance` mutates only the entity itself. Anything that touches the rest
//! of the world is handed back to the caller: new entities go through
//! [`TickContext::spawn`], and a projectile's search for a target comes back
//! as a [`Hunt`] for the world to resolve against its registry.

use rand::rngs::StdRng;
use rand::Rng;

use crate::collision::Hitbox;
use crate::config::GameConfig;
use crate::entities::{
    Enemy, EnemyProjectile, Entity, EntityKind, Hud, Player, PlayerProjectile, ENEMY_SPRITE,
    HUD_ROWS, PROJECTILE_BOUND,
};
use crate::input::{KeyInput, LogicalKey};

/// What a projectile asks the world to do this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hunt {
    pub hunter: Hitbox,
    pub prey: EntityKind,
    pub on_hit: HitOutcome,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    /// Remove the target and add one to `score`.
    Score,
    /// Remove the target; if a life is left, spend it and put the target back.
    TakeLife,
}

/// Everything an entity may read or produce while advancing.
pub struct TickContext<'a> {
    pub input: &'a dyn KeyInput,
    pub rng: &'a mut StdRng,
    pub config: &'a GameConfig,
    spawned: Vec<Entity>,
}

impl<'a> TickContext<'a> {
    pub fn new(input: &'a dyn KeyInput, rng: &'a mut StdRng, config: &'a GameConfig) -> Self {
        TickContext {
            input,
            rng,
            config,
            spawned: Vec::new(),
        }
    }

    /// Queue `entity` to be appended to the registry.
    pub fn spawn(&mut self, entity: Entity) {
        self.spawned.push(entity);
    }

    pub fn take_spawned(&mut self) -> Vec<Entity> {
        std::mem::take(&mut self.spawned)
    }
}

impl Entity {
    /// Run one frame of this entity's state machine.
    pub fn advance(&mut self, ctx: &mut TickContext<'_>) -> Option<Hunt> {
        match self {
            Entity::Player(p) => {
                advance_player(p, ctx);
                None
            }
            Entity::Enemy(e) => {
                advance_enemy(e, ctx);
                None
            }
            Entity::PlayerProjectile(p) => Some(advance_player_projectile(p)),
            Entity::EnemyProjectile(p) => Some(advance_enemy_projectile(p)),
            Entity::Hud(h) => {
                advance_hud(h, ctx);
                None
            }
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

fn advance_player(player: &mut Player, ctx: &mut TickContext<'_>) {
    let step = ctx.config.player_step;
    if ctx.input.is_key_pressed(LogicalKey::Right) {
        player.pos.col += step;
    }
    if ctx.input.is_key_pressed(LogicalKey::Left) {
        player.pos.col -= step;
    }
    // No cooldown: one shot per frame while fire is held.
    if ctx.input.is_key_pressed(LogicalKey::Fire) {
        ctx.spawn(Entity::player_projectile(
            player.pos.row - 1,
            player.pos.col + 2,
        ));
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

fn advance_enemy(enemy: &mut Enemy, ctx: &mut TickContext<'_>) {
    enemy.counter += 1;
    if enemy.counter < ctx.config.enemy_fire_interval {
        return;
    }

    let width = ENEMY_SPRITE[0].len() as i32;
    let height = ENEMY_SPRITE.len() as i32;

    if ctx.rng.gen_ratio(1, ctx.config.enemy_fire_odds) {
        ctx.spawn(Entity::enemy_projectile(
            enemy.pos.row + height + 1,
            enemy.pos.col + width / 2,
        ));
    }

    enemy.pos.col += enemy.velocity;
    enemy.counter = 0;

    if enemy.pos.col >= ctx.config.width as i32 - width {
        enemy.velocity = -1;
        enemy.pos.row += height + 1;
    }
    if enemy.pos.col <= 0 {
        enemy.velocity = 1;
        enemy.pos.row += height + 1;
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

fn advance_player_projectile(p: &mut PlayerProjectile) -> Hunt {
    p.pos.row -= 1;
    Hunt {
        hunter: Hitbox::new(p.pos, PROJECTILE_BOUND),
        prey: EntityKind::Enemy,
        on_hit: HitOutcome::Score,
    }
}

fn advance_enemy_projectile(p: &mut EnemyProjectile) -> Hunt {
    p.pos.row += 1;
    Hunt {
        hunter: Hitbox::new(p.pos, PROJECTILE_BOUND),
        prey: EntityKind::Player,
        on_hit: HitOutcome::TakeLife,
    }
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

fn advance_hud(hud: &mut Hud, ctx: &mut TickContext<'_>) {
    hud.pos.row = ctx.config.height as i32 - HUD_ROWS;
}
