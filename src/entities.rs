//! All game entity types: pure data, no logic.

use crate::config::Config;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in world pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect { x, y, w, h }
    }

    /// Rect of the given size whose bottom-centre sits at (cx, bottom).
    pub fn from_midbottom(cx: f32, bottom: f32, w: f32, h: f32) -> Rect {
        Rect {
            x: cx - w / 2.0,
            y: bottom - h,
            w,
            h,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// True if the two rects share interior area. Rects that merely touch
    /// along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

// ── Kinds ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Batata,
    /// Sets the slow timer when eaten.
    Coxinha,
    Pizza,
    /// Sets the freeze timer when eaten.
    Refri,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::Batata,
        EnemyKind::Coxinha,
        EnemyKind::Pizza,
        EnemyKind::Refri,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    Agua,
    Suco,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 2] = [PowerUpKind::Agua, PowerUpKind::Suco];
}

/// Discrete animation state, compared by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerPose {
    Idle,
    Run,
    Jump,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    Playing,
    GameOver,
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Effect intents emitted by the simulation. The core never touches a
/// sound or rendering handle; the presentation layer decides what each
/// of these becomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    AteEnemy(EnemyKind),
    DrankPowerUp(PowerUpKind),
    BossStomped,
    BossDefeated,
    /// Side or bottom contact with the boss (the bad kind).
    BossContact,
    GameOver,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Held-key snapshot consumed once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity, px per tick. Positive is downward.
    pub vy: f32,
    pub on_ground: bool,
    pub weight: f32,
    /// Cumulative world scroll travelled, px.
    pub dist_px: f32,
    pub freeze_ms: f32,
    pub slow_ms: f32,
    pub pose: PlayerPose,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub rect: Rect,
    /// Own leftward speed, px per tick, before world scroll is added.
    pub speed: f32,
}

#[derive(Clone, Debug)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub rect: Rect,
    pub speed: f32,
}

#[derive(Clone, Debug)]
pub struct Boss {
    pub rect: Rect,
    /// Signed horizontal velocity, px per tick. Sign flips at screen edges.
    pub vx: f32,
    pub hp: u32,
}

/// Spawn timer accumulators, ms.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timers {
    pub enemy_ms: f32,
    pub power_ms: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so pure update functions can return
/// a new copy without mutating the original; the renderer reads it as-is.
#[derive(Clone, Debug)]
pub struct GameWorld {
    pub config: Config,
    pub phase: GamePhase,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
    /// At most one boss is ever alive.
    pub boss: Option<Boss>,
    pub timers: Timers,
    /// Current enemy spawn interval, ms. Only ever shrinks during a run.
    pub spawn_interval_ms: f32,
    /// Enemy speed multiplier. Only ever grows during a run.
    pub difficulty: f32,
    /// Current world scroll speed, px per second.
    pub world_speed: f32,
    /// Distance at which the next boss spawns.
    pub next_boss_px: f32,
    /// Distance at which the next difficulty boost fires.
    pub next_boost_px: f32,
}
