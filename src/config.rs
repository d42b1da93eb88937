//! All game tuning in one place.
//!
//! Every value a designer might want to touch lives in [`Config`];
//! `Config::default()` is the shipped game. Validation runs once at
//! startup and is the only fallible step in the whole crate: after
//! `validate()` passes, the simulation never errors, it saturates.

use thiserror::Error;

// ── Validation ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("weight bounds are inverted: min {min} is not below max {max}")]
    WeightBounds { min: f32, max: f32 },
    #[error("starting weight {start} is outside [{min}, {max}]")]
    StartWeight { start: f32, min: f32, max: f32 },
    #[error("spawn interval floor {floor_ms} ms exceeds the base interval {base_ms} ms")]
    SpawnFloor { floor_ms: f32, base_ms: f32 },
    #[error("screen needs positive dimensions and a ground line inside them")]
    Screen,
    #[error("power-up spawn chance {0} is not a probability")]
    PowerUpChance(f64),
    #[error("boss speed cap {cap} is below the base speed {base}")]
    BossSpeedCap { cap: f32, base: f32 },
    #[error("world scroll speeds must be positive")]
    WorldSpeed,
}

// ── Sections ──────────────────────────────────────────────────────────────────

/// World-space viewport. The simulation works in pixels; the renderer
/// maps these to whatever cells it has.
#[derive(Clone, Debug)]
pub struct ScreenCfg {
    pub width: f32,
    pub height: f32,
    /// Height of the ground strip at the bottom of the screen.
    pub ground_margin: f32,
}

impl ScreenCfg {
    /// Y of the ground line entities stand on.
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_margin
    }
}

#[derive(Clone, Debug)]
pub struct PlayerCfg {
    pub width: f32,
    pub height: f32,
    /// Horizontal input speed, px per tick.
    pub speed: f32,
    /// Jump impulse at minimum weight, px per tick (negative = up).
    pub base_jump: f32,
    /// Added to the impulse as weight approaches max (weaker jump).
    pub jump_penalty: f32,
    /// Fraction of the sprite trimmed off the hitbox.
    pub hitbox_shrink: f32,
    pub freeze_ms: f32,
}

#[derive(Clone, Debug)]
pub struct EnemyCfg {
    /// Base horizontal speed before kind scale and difficulty, px per tick.
    pub speed_base: f32,
    pub speed_cap: f32,
    pub hitbox_shrink: f32,
    pub spawn_interval_ms: f32,
    pub min_interval_ms: f32,
    pub slow_ms: f32,
    /// Player speed multiplier while slowed.
    pub slow_factor: f32,
}

#[derive(Clone, Debug)]
pub struct PowerUpCfg {
    pub width: f32,
    pub height: f32,
    pub interval_ms: f32,
    /// Probability that a firing of the timer actually spawns one.
    pub chance: f64,
    /// Power-ups drift at speed_base times this factor.
    pub speed_factor: f32,
    /// Spawn height is ground minus a random 0..=drop_height px.
    pub drop_height: i32,
}

#[derive(Clone, Debug)]
pub struct BossCfg {
    pub width: f32,
    pub height: f32,
    pub hp: u32,
    pub speed_base: f32,
    pub speed_cap: f32,
    /// Magnitude gained per full `level_px` of player distance.
    pub speed_inc_per_level: f32,
    pub level_px: f32,
    /// Distance between boss spawns.
    pub spawn_dist: f32,
    /// Stomps count when the player's hitbox bottom is within this many
    /// px above the boss top.
    pub stomp_tolerance: f32,
    /// Player vy after a successful stomp, as a fraction of base_jump.
    pub stomp_bounce: f32,
}

#[derive(Clone, Debug)]
pub struct WorldCfg {
    /// Scroll speed, px per second.
    pub speed: f32,
    /// Scroll speed after the first boss goes down, for the rest of the run.
    pub post_boss_speed: f32,
}

#[derive(Clone, Debug)]
pub struct WeightCfg {
    pub start: f32,
    pub min: f32,
    pub max: f32,
    /// Lost per px of input-driven movement.
    pub loss_per_dx: f32,
    /// Lost per px of world scroll.
    pub loss_per_run_px: f32,
    /// Gained per enemy eaten.
    pub gain_enemy: f32,
    /// Multiplier applied on boss side/bottom contact.
    pub boss_hit_factor: f32,
}

#[derive(Clone, Debug)]
pub struct BoostCfg {
    /// Distance between difficulty boosts.
    pub dist: f32,
    pub spawn_mult: f32,
    pub diff_add: f32,
}

// ── Master config ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Config {
    pub screen: ScreenCfg,
    /// Gravity, px per tick squared.
    pub gravity: f32,
    pub player: PlayerCfg,
    pub enemy: EnemyCfg,
    pub powerup: PowerUpCfg,
    pub boss: BossCfg,
    pub world: WorldCfg,
    pub weight: WeightCfg,
    pub boost: BoostCfg,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            screen: ScreenCfg {
                width: 960.0,
                height: 540.0,
                ground_margin: 100.0,
            },
            gravity: 0.6,
            player: PlayerCfg {
                width: 48.0,
                height: 96.0,
                speed: 6.0,
                base_jump: -12.0,
                jump_penalty: 6.0,
                hitbox_shrink: 0.3,
                freeze_ms: 2000.0,
            },
            enemy: EnemyCfg {
                speed_base: 3.0,
                speed_cap: 12.0,
                hitbox_shrink: 0.4,
                spawn_interval_ms: 1500.0,
                min_interval_ms: 300.0,
                slow_ms: 2000.0,
                slow_factor: 0.1,
            },
            powerup: PowerUpCfg {
                width: 80.0,
                height: 80.0,
                interval_ms: 6000.0,
                chance: 0.4,
                speed_factor: 0.8,
                drop_height: 120,
            },
            boss: BossCfg {
                width: 100.0,
                height: 100.0,
                hp: 3,
                speed_base: 5.0,
                speed_cap: 15.0,
                speed_inc_per_level: 1.0,
                level_px: 10_000.0,
                spawn_dist: 20_000.0,
                stomp_tolerance: 10.0,
                stomp_bounce: 0.8,
            },
            world: WorldCfg {
                speed: 200.0,
                post_boss_speed: 260.0,
            },
            weight: WeightCfg {
                start: 115.0,
                min: 70.0,
                max: 160.0,
                loss_per_dx: 0.02,
                loss_per_run_px: 0.005,
                gain_enemy: 10.0,
                boss_hit_factor: 1.33,
            },
            boost: BoostCfg {
                dist: 20_000.0,
                spawn_mult: 0.95,
                diff_add: 0.05,
            },
        }
    }
}

impl Config {
    /// Reject inconsistent tuning before the first tick. Everything the
    /// simulation clamps at runtime assumes these hold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let wt = &self.weight;
        if wt.min >= wt.max {
            return Err(ConfigError::WeightBounds {
                min: wt.min,
                max: wt.max,
            });
        }
        if wt.start < wt.min || wt.start > wt.max {
            return Err(ConfigError::StartWeight {
                start: wt.start,
                min: wt.min,
                max: wt.max,
            });
        }
        if self.enemy.min_interval_ms > self.enemy.spawn_interval_ms {
            return Err(ConfigError::SpawnFloor {
                floor_ms: self.enemy.min_interval_ms,
                base_ms: self.enemy.spawn_interval_ms,
            });
        }
        if self.screen.width <= 0.0
            || self.screen.height <= 0.0
            || self.screen.ground_margin >= self.screen.height
        {
            return Err(ConfigError::Screen);
        }
        if !(0.0..=1.0).contains(&self.powerup.chance) {
            return Err(ConfigError::PowerUpChance(self.powerup.chance));
        }
        if self.boss.speed_cap < self.boss.speed_base {
            return Err(ConfigError::BossSpeedCap {
                cap: self.boss.speed_cap,
                base: self.boss.speed_base,
            });
        }
        if self.world.speed <= 0.0 || self.world.post_boss_speed <= 0.0 {
            return Err(ConfigError::WorldSpeed);
        }
        Ok(())
    }
}
