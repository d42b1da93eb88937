//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! [`GameWorld`] (and, where needed, an RNG handle) and returns a brand-new
//! world. Side effects are limited to the injected RNG; sound and visual
//! effects come back to the caller as [`GameEvent`] intents.

use rand::Rng;

use crate::config::{Config, ConfigError};
use crate::entities::{
    Boss, Enemy, EnemyKind, GameEvent, GamePhase, GameWorld, InputState, Player, PlayerPose,
    PowerUp, PowerUpKind, Rect, Timers,
};

// ── Kind tables ──────────────────────────────────────────────────────────────

/// Speed scale per food kind, multiplied into the difficulty curve.
fn kind_scale(kind: EnemyKind) -> f32 {
    match kind {
        EnemyKind::Batata => 1.0,
        EnemyKind::Coxinha => 1.3,
        EnemyKind::Pizza => 1.5,
        EnemyKind::Refri => 1.2,
    }
}

/// Sprite footprint per food kind, world px.
fn kind_size(kind: EnemyKind) -> (f32, f32) {
    match kind {
        EnemyKind::Batata => (70.0, 70.0),
        EnemyKind::Coxinha => (60.0, 70.0),
        EnemyKind::Pizza => (85.0, 70.0),
        EnemyKind::Refri => (45.0, 70.0),
    }
}

/// Kilograms shed per drink kind.
fn powerup_relief(kind: PowerUpKind) -> f32 {
    match kind {
        PowerUpKind::Agua => 10.0,
        PowerUpKind::Suco => 15.0,
    }
}

// ── Hitboxes ─────────────────────────────────────────────────────────────────

/// Player collision box: the sprite inset by the shrink ratio, centred
/// horizontally with the whole inset taken off the top (feet stay exact).
pub fn player_hitbox(player: &Player, cfg: &Config) -> Rect {
    let ws = player.rect.w * cfg.player.hitbox_shrink;
    let hs = player.rect.h * cfg.player.hitbox_shrink;
    Rect::new(
        player.rect.x + ws / 2.0,
        player.rect.y + hs,
        player.rect.w - ws,
        player.rect.h - hs,
    )
}

/// Enemy collision box: inset horizontally, anchored to the sprite bottom.
pub fn enemy_hitbox(enemy: &Enemy, cfg: &Config) -> Rect {
    let ws = enemy.rect.w * cfg.enemy.hitbox_shrink;
    let h = enemy.rect.h * (1.0 - cfg.enemy.hitbox_shrink);
    Rect::new(
        enemy.rect.x + ws / 2.0,
        enemy.rect.bottom() - h,
        enemy.rect.w - ws,
        h,
    )
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the world in the menu phase. The only place configuration can be
/// rejected; after this, the simulation never fails.
pub fn init_world(config: Config) -> Result<GameWorld, ConfigError> {
    config.validate()?;
    let mut world = fresh_run(&config);
    world.phase = GamePhase::Menu;
    Ok(world)
}

/// A brand-new run: fresh player, empty collections, base difficulty.
fn fresh_run(config: &Config) -> GameWorld {
    let ground = config.screen.ground_y();
    GameWorld {
        phase: GamePhase::Playing,
        player: Player {
            rect: Rect::from_midbottom(
                config.screen.width / 4.0,
                ground,
                config.player.width,
                config.player.height,
            ),
            vy: 0.0,
            on_ground: true,
            weight: config.weight.start,
            dist_px: 0.0,
            freeze_ms: 0.0,
            slow_ms: 0.0,
            pose: PlayerPose::Idle,
        },
        enemies: Vec::new(),
        powerups: Vec::new(),
        boss: None,
        timers: Timers::default(),
        spawn_interval_ms: config.enemy.spawn_interval_ms,
        difficulty: 1.0,
        world_speed: config.world.speed,
        next_boss_px: config.boss.spawn_dist,
        next_boost_px: config.boost.dist,
        config: config.clone(),
    }
}

/// Begin a run. From `Playing` this is a no-op.
pub fn start_game(world: &GameWorld) -> GameWorld {
    match world.phase {
        GamePhase::Playing => world.clone(),
        GamePhase::Menu | GamePhase::GameOver => fresh_run(&world.config),
    }
}

/// Full reset after a game over: identical to a fresh start.
pub fn restart_game(world: &GameWorld) -> GameWorld {
    start_game(world)
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick of `dt_ms` elapsed milliseconds.
///
/// Outside the `Playing` phase this returns the world unchanged. Step
/// order matters and is fixed: boost ratchet, spawners, boss re-speed,
/// kinematics (player first), collisions (enemies, power-ups, boss),
/// game-over check.
pub fn tick(
    world: &GameWorld,
    dt_ms: f32,
    input: &InputState,
    rng: &mut impl Rng,
) -> (GameWorld, Vec<GameEvent>) {
    if world.phase != GamePhase::Playing {
        return (world.clone(), Vec::new());
    }

    let mut w = world.clone();
    let cfg = world.config.clone();
    let mut events = Vec::new();

    // World scroll this tick, px.
    let wp = w.world_speed * dt_ms / 1000.0;

    // ── 1. Distance-driven boost ratchet ─────────────────────────────────────
    if w.player.dist_px >= w.next_boost_px {
        w.spawn_interval_ms =
            (w.spawn_interval_ms * cfg.boost.spawn_mult).max(cfg.enemy.min_interval_ms);
        w.difficulty += cfg.boost.diff_add;
        w.next_boost_px += cfg.boost.dist;
    }

    // ── 2. Spawn timers ──────────────────────────────────────────────────────
    w.timers.enemy_ms += dt_ms;
    w.timers.power_ms += dt_ms;
    if w.timers.enemy_ms >= w.spawn_interval_ms {
        w.timers.enemy_ms = 0.0;
        let kind = EnemyKind::ALL[rng.gen_range(0..EnemyKind::ALL.len())];
        w.enemies.push(spawn_enemy(kind, w.difficulty, &cfg));
    }
    if w.timers.power_ms >= cfg.powerup.interval_ms {
        w.timers.power_ms = 0.0;
        if rng.gen_bool(cfg.powerup.chance) {
            let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
            let drop = rng.gen_range(0..=cfg.powerup.drop_height) as f32;
            w.powerups.push(spawn_powerup(kind, drop, &cfg));
        }
    }
    // Boss: one per threshold crossing, and a live boss blocks the next.
    if w.player.dist_px >= w.next_boss_px && w.boss.is_none() {
        w.boss = Some(spawn_boss(&cfg));
        w.next_boss_px += cfg.boss.spawn_dist;
    }

    // ── 3. Boss speed follows distance, even mid-fight ───────────────────────
    if let Some(boss) = w.boss.as_mut() {
        let level = (w.player.dist_px / cfg.boss.level_px).floor();
        let mag =
            (cfg.boss.speed_base + level * cfg.boss.speed_inc_per_level).min(cfg.boss.speed_cap);
        boss.vx = if boss.vx >= 0.0 { mag } else { -mag };
    }

    // ── 4. Kinematics: player first, then the collections ────────────────────
    step_player(&mut w.player, dt_ms, wp, input, &cfg, &mut events);
    for enemy in w.enemies.iter_mut() {
        enemy.rect.x -= enemy.speed + wp;
    }
    w.enemies.retain(|e| e.rect.right() >= 0.0);
    for powerup in w.powerups.iter_mut() {
        powerup.rect.x -= powerup.speed + wp;
    }
    w.powerups.retain(|p| p.rect.right() >= 0.0);
    if let Some(boss) = w.boss.as_mut() {
        step_boss(boss, wp, &cfg);
    }

    // ── 5. Collisions: enemies, then power-ups, then boss ────────────────────
    let pbox = player_hitbox(&w.player, &cfg);

    let mut kept = Vec::with_capacity(w.enemies.len());
    for enemy in w.enemies.drain(..) {
        if pbox.overlaps(&enemy_hitbox(&enemy, &cfg)) {
            w.player.weight = (w.player.weight + cfg.weight.gain_enemy).min(cfg.weight.max);
            match enemy.kind {
                EnemyKind::Refri => w.player.freeze_ms = cfg.player.freeze_ms,
                EnemyKind::Coxinha => w.player.slow_ms = cfg.enemy.slow_ms,
                _ => {}
            }
            events.push(GameEvent::AteEnemy(enemy.kind));
        } else {
            kept.push(enemy);
        }
    }
    w.enemies = kept;

    let mut kept = Vec::with_capacity(w.powerups.len());
    for powerup in w.powerups.drain(..) {
        if pbox.overlaps(&powerup.rect) {
            w.player.weight =
                (w.player.weight - powerup_relief(powerup.kind)).max(cfg.weight.min);
            events.push(GameEvent::DrankPowerUp(powerup.kind));
        } else {
            kept.push(powerup);
        }
    }
    w.powerups = kept;

    if let Some(mut boss) = w.boss.take() {
        if pbox.overlaps(&boss.rect) {
            // Falling onto the boss top counts as a stomp; anything else hurts.
            let stomp = w.player.vy > 0.0
                && pbox.bottom() <= boss.rect.top() + cfg.boss.stomp_tolerance;
            if stomp {
                boss.hp = boss.hp.saturating_sub(1);
                w.player.vy = cfg.player.base_jump * cfg.boss.stomp_bounce;
                events.push(GameEvent::BossStomped);
                if boss.hp == 0 {
                    w.world_speed = cfg.world.post_boss_speed;
                    events.push(GameEvent::BossDefeated);
                } else {
                    w.boss = Some(boss);
                }
            } else {
                w.player.weight =
                    (w.player.weight * cfg.weight.boss_hit_factor).min(cfg.weight.max);
                events.push(GameEvent::BossContact);
                w.boss = Some(boss);
            }
        } else {
            w.boss = Some(boss);
        }
    }

    // ── 6. Game over: checked once, after every mutation for this tick ───────
    if w.player.weight >= cfg.weight.max {
        w.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver);
    }

    (w, events)
}

// ── Kinematics helpers ───────────────────────────────────────────────────────

fn step_player(
    player: &mut Player,
    dt_ms: f32,
    wp: f32,
    input: &InputState,
    cfg: &Config,
    events: &mut Vec<GameEvent>,
) {
    if player.freeze_ms > 0.0 {
        player.freeze_ms = (player.freeze_ms - dt_ms).max(0.0);
    }
    if player.slow_ms > 0.0 {
        player.slow_ms = (player.slow_ms - dt_ms).max(0.0);
    }

    let frozen = player.freeze_ms > 0.0;
    let slowed = player.slow_ms > 0.0;
    let speed = cfg.player.speed * if slowed { cfg.enemy.slow_factor } else { 1.0 };

    let mut dx = 0.0;
    if !frozen {
        if input.left {
            dx -= speed;
        }
        if input.right {
            dx += speed;
        }
    }
    if dx != 0.0 {
        player.rect.x = (player.rect.x + dx).clamp(0.0, cfg.screen.width - player.rect.w);
        player.weight = (player.weight - dx.abs() * cfg.weight.loss_per_dx).max(cfg.weight.min);
    }
    // Running with the world burns weight too.
    player.weight = (player.weight - wp * cfg.weight.loss_per_run_px).max(cfg.weight.min);

    if !frozen && input.jump && player.on_ground {
        // The heavier the player, the weaker the impulse.
        let t = (player.weight - cfg.weight.min) / (cfg.weight.max - cfg.weight.min);
        player.vy = cfg.player.base_jump + cfg.player.jump_penalty * t;
        player.on_ground = false;
        events.push(GameEvent::Jumped);
    }

    player.vy += cfg.gravity;
    player.rect.y += player.vy;
    let ground = cfg.screen.ground_y();
    if player.rect.bottom() >= ground {
        player.rect.y = ground - player.rect.h;
        player.vy = 0.0;
        player.on_ground = true;
    }

    player.pose = if !player.on_ground {
        PlayerPose::Jump
    } else if dx != 0.0 {
        PlayerPose::Run
    } else {
        PlayerPose::Idle
    };

    player.dist_px += wp;
}

fn step_boss(boss: &mut Boss, wp: f32, cfg: &Config) {
    boss.rect.x += boss.vx - wp;
    if boss.rect.left() <= 0.0 {
        boss.rect.x = 0.0;
        boss.vx = boss.vx.abs();
    } else if boss.rect.right() >= cfg.screen.width {
        boss.rect.x = cfg.screen.width - boss.rect.w;
        boss.vx = -boss.vx.abs();
    }
}

// ── Spawning helpers ─────────────────────────────────────────────────────────

fn spawn_enemy(kind: EnemyKind, difficulty: f32, cfg: &Config) -> Enemy {
    let (w, h) = kind_size(kind);
    let speed = (cfg.enemy.speed_base * kind_scale(kind) * difficulty).min(cfg.enemy.speed_cap);
    Enemy {
        kind,
        rect: Rect::from_midbottom(cfg.screen.width + w, cfg.screen.ground_y(), w, h),
        speed,
    }
}

fn spawn_powerup(kind: PowerUpKind, drop: f32, cfg: &Config) -> PowerUp {
    PowerUp {
        kind,
        rect: Rect::from_midbottom(
            cfg.screen.width + 30.0,
            cfg.screen.ground_y() - drop,
            cfg.powerup.width,
            cfg.powerup.height,
        ),
        speed: cfg.enemy.speed_base * cfg.powerup.speed_factor,
    }
}

fn spawn_boss(cfg: &Config) -> Boss {
    Boss {
        rect: Rect::from_midbottom(
            cfg.screen.width + 100.0,
            cfg.screen.ground_y(),
            cfg.boss.width,
            cfg.boss.height,
        ),
        vx: cfg.boss.speed_base,
        hp: cfg.boss.hp,
    }
}
