//! The entity registry and the per-frame tick → draw cycle.
//!
//! Entities are stored behind generational [`EntityId`] handles; a separate
//! ordered list of handles carries registration order, which is also the
//! order entities are advanced and drawn in.
//!
//! A tick walks a snapshot of that order. Spawns, removals and respawns made
//! while walking are queued and applied after the pass, in the order they
//! happened, so no handle or index shifts under the loop. An entity removed
//! earlier in the pass is not advanced and cannot be hit again.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use slotmap::{new_key_type, SlotMap};

use crate::compute::{HitOutcome, Hunt, TickContext};
use crate::config::GameConfig;
use crate::entities::{Entity, EntityKind, Scene};
use crate::error::ConfigError;
use crate::frame_buffer::FrameBuffer;
use crate::globals::{Globals, SCORE};
use crate::input::{HeldKeys, KeyInput};

new_key_type! {
    /// Stable handle to an entity in a [`World`].
    pub struct EntityId;
}

/// Horizontal spacing of the opening enemy row.
const FORMATION_SPACING: i32 = 7;
const FORMATION_SIZE: i32 = 10;

enum Command {
    Spawn(Entity),
    Despawn(EntityId),
    /// Move an existing entity to the end of the order.
    Requeue(EntityId),
}

/// Side buffer filled during a tick.
#[derive(Default)]
struct Pending {
    commands: Vec<Command>,
    doomed: HashSet<EntityId>,
}

impl Pending {
    fn despawn(&mut self, id: EntityId) {
        if self.doomed.insert(id) {
            self.commands.push(Command::Despawn(id));
        }
    }
}

pub struct World<I = HeldKeys> {
    config: GameConfig,
    entities: SlotMap<EntityId, Entity>,
    order: Vec<EntityId>,
    frame_buffer: FrameBuffer,
    globals: Globals,
    input: I,
    rng: StdRng,
    frame: u64,
}

impl<I: KeyInput> World<I> {
    /// An empty world: no entities, `score = 0`, `lives_left` from the config.
    pub fn new(config: GameConfig, input: I) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(World {
            frame_buffer: FrameBuffer::new(config.height, config.width),
            globals: Globals::new(config.starting_lives),
            entities: SlotMap::with_key(),
            order: Vec::new(),
            input,
            rng,
            frame: 0,
            config,
        })
    }

    /// A world populated with the opening layout: the player near the
    /// bottom, the scoreboard and a row of enemies along the top.
    ///
    /// The row holds ten distinct enemies. Earlier layouts stacked three
    /// extra enemies on columns 0, 7 and 14; those duplicates are left out.
    pub fn new_game(config: GameConfig, input: I) -> Result<Self, ConfigError> {
        let mut world = World::new(config, input)?;
        let (height, width) = (world.config.height as i32, world.config.width as i32);

        world.add_entity(Entity::player(height - 7, width / 2));
        world.add_entity(Entity::hud());
        for i in 0..FORMATION_SIZE {
            world.add_entity(Entity::enemy(0, i * FORMATION_SPACING));
        }

        log::info!(
            "new game: {}x{} buffer, {} entities, {} lives",
            height,
            width,
            world.len(),
            world.lives_left()
        );
        Ok(world)
    }

    // ── Frame cycle ──────────────────────────────────────────────────────────

    /// Advance every entity once, in registration order.
    pub fn tick(&mut self, delta: f32) {
        self.frame += 1;
        log::trace!(
            "tick: delta={} frame={} entities={}",
            delta,
            self.frame,
            self.order.len()
        );

        let mut pending = Pending::default();
        let snapshot = self.order.clone();

        for id in snapshot {
            if pending.doomed.contains(&id) {
                continue;
            }
            let Some(entity) = self.entities.get_mut(id) else {
                continue;
            };

            let mut ctx = TickContext::new(&self.input, &mut self.rng, &self.config);
            let hunt = entity.advance(&mut ctx);
            let spawned = ctx.take_spawned();
            let pos = entity.locate();
            let escaped = entity.is_projectile() && !self.config.within_margin(pos.row, pos.col);

            pending.commands.extend(spawned.into_iter().map(Command::Spawn));
            if let Some(hunt) = hunt {
                self.resolve_hunt(&hunt, &mut pending);
            }
            if escaped {
                log::debug!("projectile left the buffer at {:?}", pos);
                pending.despawn(id);
            }
        }

        self.apply(pending.commands);
    }

    /// Compose every entity's sprite into the frame buffer and return the
    /// frame as text.
    pub fn draw(&mut self) -> String {
        self.frame_buffer.clear();
        let scene = Scene {
            globals: &self.globals,
            width: self.config.width,
        };
        for id in &self.order {
            if let Some(entity) = self.entities.get(*id) {
                let (origin, sprite) = entity.render(&scene);
                self.frame_buffer.composite(origin, &sprite);
            }
        }
        self.frame_buffer.render()
    }

    fn resolve_hunt(&mut self, hunt: &Hunt, pending: &mut Pending) {
        let Some(target) = self.find_prey(hunt, &pending.doomed) else {
            return;
        };

        match hunt.on_hit {
            HitOutcome::Score => {
                pending.despawn(target);
                let score = self.globals.add(SCORE, 1);
                log::debug!("enemy destroyed, score={}", score);
            }
            HitOutcome::TakeLife => {
                if self.globals.take_life() {
                    log::debug!("player hit, {} lives left", self.globals.lives_left());
                    pending.commands.push(Command::Requeue(target));
                } else {
                    log::info!("player hit with no lives left, game over");
                    pending.despawn(target);
                }
            }
        }
    }

    /// First live entity of the hunted kind, in registry order, that the
    /// hunter collides with.
    fn find_prey(&self, hunt: &Hunt, doomed: &HashSet<EntityId>) -> Option<EntityId> {
        self.order
            .iter()
            .copied()
            .filter(|id| !doomed.contains(id))
            .find(|&id| {
                self.entities.get(id).is_some_and(|e| {
                    e.classify() == hunt.prey && self.config.collision.test(&hunt.hunter, &e.hitbox())
                })
            })
    }

    fn apply(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::Spawn(entity) => {
                    log::debug!("spawn {:?} at {:?}", entity.classify(), entity.locate());
                    self.add_entity(entity);
                }
                Command::Despawn(id) => {
                    self.remove_entity(id);
                }
                Command::Requeue(id) => {
                    if let Some(index) = self.index_of(id) {
                        let id = self.order.remove(index);
                        self.order.push(id);
                    }
                }
            }
        }
    }

    // ── Registry ─────────────────────────────────────────────────────────────

    /// Append `entity`; it is advanced and drawn after everything already
    /// registered.
    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        let id = self.entities.insert(entity);
        self.order.push(id);
        id
    }

    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        let entity = self.entities.remove(id)?;
        self.order.retain(|&other| other != id);
        Some(entity)
    }

    /// Remove the entity at `index` in registration order.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Entity> {
        let id = self.order.remove(index);
        self.entities.remove(id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn index_of(&self, id: EntityId) -> Option<usize> {
        self.order.iter().position(|&other| other == id)
    }

    /// Handle of the entity at `index` in registration order.
    pub fn id_at(&self, index: usize) -> Option<EntityId> {
        self.order.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.entities.get(id).map(|e| (id, e)))
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.iter().filter(|(_, e)| e.classify() == kind).count()
    }

    /// The session has no player left.
    pub fn is_game_over(&self) -> bool {
        self.count(EntityKind::Player) == 0
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn globals(&self) -> &Globals {
        &self.globals
    }

    pub fn globals_mut(&mut self) -> &mut Globals {
        &mut self.globals
    }

    pub fn score(&self) -> i64 {
        self.globals.score()
    }

    pub fn lives_left(&self) -> i64 {
        self.globals.lives_left()
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Ticks run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
