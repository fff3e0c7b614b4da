use grid_shooter::compute::*;
use grid_shooter::config::GameConfig;
use grid_shooter::entities::*;
use grid_shooter::input::{HeldKeys, LogicalKey};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Advance `entity` once with `keys` held; returns the hunt and any spawns.
fn step(
    entity: &mut Entity,
    keys: &HeldKeys,
    config: &GameConfig,
    rng: &mut StdRng,
) -> (Option<Hunt>, Vec<Entity>) {
    let mut ctx = TickContext::new(keys, rng, config);
    let hunt = entity.advance(&mut ctx);
    (hunt, ctx.take_spawned())
}

fn enemy_at(row: i32, col: i32, velocity: i32, counter: u32) -> Entity {
    Entity::Enemy(Enemy {
        pos: Position::new(row, col),
        velocity,
        counter,
    })
}

/// Config under which every eligible enemy tick fires.
fn always_fire() -> GameConfig {
    GameConfig {
        enemy_fire_odds: 1,
        ..GameConfig::default()
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_idle_without_keys() {
    let mut player = Entity::player(30, 40);
    let (hunt, spawned) = step(&mut player, &HeldKeys::new(), &GameConfig::default(), &mut seeded_rng());
    assert_eq!(player.locate(), Position::new(30, 40));
    assert!(hunt.is_none());
    assert!(spawned.is_empty());
}

#[test]
fn player_moves_two_columns() {
    let config = GameConfig::default();
    let mut rng = seeded_rng();
    let mut player = Entity::player(30, 40);

    step(&mut player, &HeldKeys::with(&[LogicalKey::Right]), &config, &mut rng);
    assert_eq!(player.locate().col, 42);

    step(&mut player, &HeldKeys::with(&[LogicalKey::Left]), &config, &mut rng);
    step(&mut player, &HeldKeys::with(&[LogicalKey::Left]), &config, &mut rng);
    assert_eq!(player.locate().col, 38);
}

#[test]
fn player_is_not_clamped_at_edges() {
    let mut player = Entity::player(30, 0);
    step(&mut player, &HeldKeys::with(&[LogicalKey::Left]), &GameConfig::default(), &mut seeded_rng());
    assert_eq!(player.locate().col, -2);
}

#[test]
fn player_fire_spawns_projectile_above() {
    let mut player = Entity::player(30, 40);
    let (_, spawned) = step(
        &mut player,
        &HeldKeys::with(&[LogicalKey::Fire]),
        &GameConfig::default(),
        &mut seeded_rng(),
    );
    assert_eq!(spawned, vec![Entity::player_projectile(29, 42)]);
}

#[test]
fn player_fires_after_moving() {
    let mut player = Entity::player(30, 40);
    let (_, spawned) = step(
        &mut player,
        &HeldKeys::with(&[LogicalKey::Right, LogicalKey::Fire]),
        &GameConfig::default(),
        &mut seeded_rng(),
    );
    assert_eq!(spawned[0].locate(), Position::new(29, 44));
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[test]
fn enemy_waits_for_interval() {
    let config = always_fire();
    let mut rng = seeded_rng();
    let mut enemy = enemy_at(0, 10, 1, 0);

    for _ in 0..9 {
        let (_, spawned) = step(&mut enemy, &HeldKeys::new(), &config, &mut rng);
        assert!(spawned.is_empty());
    }
    assert_eq!(enemy.locate(), Position::new(0, 10));

    step(&mut enemy, &HeldKeys::new(), &config, &mut rng);
    assert_eq!(enemy.locate(), Position::new(0, 11));
    match &enemy {
        Entity::Enemy(e) => assert_eq!(e.counter, 0),
        other => panic!("expected enemy, got {:?}", other),
    }
}

#[test]
fn enemy_fires_beneath_itself() {
    let mut enemy = enemy_at(2, 10, 1, 9);
    let (_, spawned) = step(&mut enemy, &HeldKeys::new(), &always_fire(), &mut seeded_rng());
    // Fired from the pre-move position: row + 3 + 1, col + 5 / 2.
    assert_eq!(spawned, vec![Entity::enemy_projectile(6, 12)]);
}

#[test]
fn enemy_fire_rate_is_roughly_one_in_twenty() {
    let config = GameConfig {
        enemy_fire_interval: 1,
        ..GameConfig::default()
    };
    let mut rng = seeded_rng();
    let mut shots = 0;
    for _ in 0..2000 {
        let mut enemy = enemy_at(0, 20, 1, 0);
        let (_, spawned) = step(&mut enemy, &HeldKeys::new(), &config, &mut rng);
        shots += spawned.len();
    }
    // Expect ~100.
    assert!((50..200).contains(&shots), "shots = {}", shots);
}

#[test]
fn enemy_bounces_off_left_edge() {
    let mut enemy = enemy_at(0, 0, -1, 9);
    step(&mut enemy, &HeldKeys::new(), &GameConfig::default(), &mut seeded_rng());
    match &enemy {
        Entity::Enemy(e) => {
            assert_eq!(e.velocity, 1);
            assert_eq!(e.pos.row, 4); // sprite height 3 + 1
        }
        other => panic!("expected enemy, got {:?}", other),
    }
}

#[test]
fn enemy_bounces_off_right_edge() {
    // 80 wide, 5-wide sprite: turning point is column 75.
    let mut enemy = enemy_at(4, 74, 1, 9);
    step(&mut enemy, &HeldKeys::new(), &GameConfig::default(), &mut seeded_rng());
    match &enemy {
        Entity::Enemy(e) => {
            assert_eq!(e.pos, Position::new(8, 75));
            assert_eq!(e.velocity, -1);
        }
        other => panic!("expected enemy, got {:?}", other),
    }
}

#[test]
fn enemy_keeps_direction_mid_row() {
    let mut enemy = enemy_at(0, 30, -1, 9);
    step(&mut enemy, &HeldKeys::new(), &GameConfig::default(), &mut seeded_rng());
    match &enemy {
        Entity::Enemy(e) => {
            assert_eq!(e.pos, Position::new(0, 29));
            assert_eq!(e.velocity, -1);
        }
        other => panic!("expected enemy, got {:?}", other),
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[test]
fn player_projectile_moves_up_and_hunts_enemies() {
    let mut shot = Entity::player_projectile(10, 10);
    let (hunt, _) = step(&mut shot, &HeldKeys::new(), &GameConfig::default(), &mut seeded_rng());
    assert_eq!(shot.locate(), Position::new(9, 10));

    let hunt = hunt.expect("projectiles always hunt");
    assert_eq!(hunt.prey, EntityKind::Enemy);
    assert_eq!(hunt.on_hit, HitOutcome::Score);
    assert_eq!(hunt.hunter.origin, Position::new(9, 10));
    assert_eq!(hunt.hunter.size, BoundingBox::new(1, 1));
}

#[test]
fn enemy_projectile_moves_down_and_hunts_player() {
    let mut shot = Entity::enemy_projectile(10, 10);
    let (hunt, _) = step(&mut shot, &HeldKeys::new(), &GameConfig::default(), &mut seeded_rng());
    assert_eq!(shot.locate(), Position::new(11, 10));

    let hunt = hunt.expect("projectiles always hunt");
    assert_eq!(hunt.prey, EntityKind::Player);
    assert_eq!(hunt.on_hit, HitOutcome::TakeLife);
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

#[test]
fn hud_moves_to_bottom() {
    let config = GameConfig {
        height: 25,
        ..GameConfig::default()
    };
    let mut hud = Entity::hud();
    let (hunt, _) = step(&mut hud, &HeldKeys::new(), &config, &mut seeded_rng());
    assert!(hunt.is_none());
    assert_eq!(hud.locate(), Position::new(21, 0));
}
