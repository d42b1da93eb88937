//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game world. No game logic is performed; this module only translates
//! world pixels into terminal cells and state into styled glyphs.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use fat_runner::config::Config;
use fat_runner::entities::{
    Boss, Enemy, EnemyKind, GamePhase, GameWorld, PlayerPose, PowerUp, PowerUpKind,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_GROUND: Color = Color::DarkGrey;
const C_STRIPE: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_PLAYER_FROZEN: Color = Color::Cyan;
const C_BATATA: Color = Color::Yellow;
const C_COXINHA: Color = Color::DarkYellow;
const C_PIZZA: Color = Color::Red;
const C_REFRI: Color = Color::Cyan;
const C_AGUA: Color = Color::Blue;
const C_SUCO: Color = Color::Magenta;
const C_BOSS: Color = Color::Red;
const C_HUD: Color = Color::White;
const C_NOTICE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── World-to-cell mapping ─────────────────────────────────────────────────────

/// Maps world pixels onto the terminal grid. Row 0 is the HUD and the
/// last row is the hint line; the world squeezes into what is left.
struct Viewport {
    cols: u16,
    rows: u16,
    sx: f32,
    sy: f32,
}

impl Viewport {
    fn new(cols: u16, rows: u16, cfg: &Config) -> Viewport {
        Viewport {
            cols,
            rows,
            sx: cols as f32 / cfg.screen.width,
            sy: rows as f32 / cfg.screen.height,
        }
    }

    fn cell(&self, x: f32, y: f32) -> (u16, u16) {
        let col = (x * self.sx).round().clamp(0.0, self.cols.saturating_sub(1) as f32);
        let row = (y * self.sy).round().clamp(1.0, self.rows.saturating_sub(1) as f32);
        (col as u16, row as u16)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for whatever phase the world is in.
pub fn render<W: Write>(
    out: &mut W,
    world: &GameWorld,
    best_dist: u32,
    notice: Option<&str>,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(cols, rows, &world.config);

    match world.phase {
        GamePhase::Menu => draw_menu(out, &view, best_dist)?,
        GamePhase::Playing => draw_play(out, world, &view, notice)?,
        GamePhase::GameOver => {
            draw_play(out, world, &view, notice)?;
            draw_game_over(out, world, &view, best_dist)?;
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Play field ────────────────────────────────────────────────────────────────

fn draw_play<W: Write>(
    out: &mut W,
    world: &GameWorld,
    view: &Viewport,
    notice: Option<&str>,
) -> std::io::Result<()> {
    draw_ground(out, world, view)?;
    for enemy in &world.enemies {
        draw_enemy(out, enemy, view)?;
    }
    for powerup in &world.powerups {
        draw_powerup(out, powerup, view)?;
    }
    if let Some(boss) = &world.boss {
        draw_boss(out, boss, view)?;
    }
    draw_player(out, world, view)?;
    draw_hud(out, world, view)?;
    draw_hint(out, view, notice)?;
    Ok(())
}

fn draw_ground<W: Write>(
    out: &mut W,
    world: &GameWorld,
    view: &Viewport,
) -> std::io::Result<()> {
    let (_, ground_row) = view.cell(0.0, world.config.screen.ground_y());
    out.queue(cursor::MoveTo(0, ground_row))?;
    out.queue(style::SetForegroundColor(C_GROUND))?;
    out.queue(Print("▄".repeat(view.cols as usize)))?;

    // Road stripes scroll with the world so motion reads on a still screen.
    let period = 12.0;
    let offset = (world.player.dist_px * view.sx) % period;
    out.queue(style::SetForegroundColor(C_STRIPE))?;
    let mut col = -offset + period;
    while col < view.cols as f32 {
        if col >= 0.0 {
            out.queue(cursor::MoveTo(col as u16, ground_row))?;
            out.queue(Print("▬"))?;
        }
        col += period;
    }
    Ok(())
}

fn draw_player<W: Write>(
    out: &mut W,
    world: &GameWorld,
    view: &Viewport,
) -> std::io::Result<()> {
    let p = &world.player;
    let (col, row) = view.cell(p.rect.center_x(), p.rect.bottom());
    let color = if p.freeze_ms > 0.0 { C_PLAYER_FROZEN } else { C_PLAYER };
    out.queue(style::SetForegroundColor(color))?;

    // Two-row sprite; legs change with the pose.
    let legs = match p.pose {
        PlayerPose::Idle => "║",
        PlayerPose::Run => "Λ",
        PlayerPose::Jump => "┘",
    };
    out.queue(cursor::MoveTo(col, row.saturating_sub(2)))?;
    out.queue(Print("☻"))?;
    out.queue(cursor::MoveTo(col, row.saturating_sub(1)))?;
    out.queue(Print(legs))?;
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, view: &Viewport) -> std::io::Result<()> {
    let (col, row) = view.cell(enemy.rect.center_x(), enemy.rect.bottom());
    let (glyph, color) = match enemy.kind {
        EnemyKind::Batata => ("┆┆", C_BATATA),
        EnemyKind::Coxinha => ("◢◣", C_COXINHA),
        EnemyKind::Pizza => ("◭▲", C_PIZZA),
        EnemyKind::Refri => ("[]", C_REFRI),
    };
    out.queue(cursor::MoveTo(col.saturating_sub(1), row.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_powerup<W: Write>(out: &mut W, powerup: &PowerUp, view: &Viewport) -> std::io::Result<()> {
    let (col, row) = view.cell(powerup.rect.center_x(), powerup.rect.bottom());
    let (glyph, color) = match powerup.kind {
        PowerUpKind::Agua => ("○", C_AGUA),
        PowerUpKind::Suco => ("◙", C_SUCO),
    };
    out.queue(cursor::MoveTo(col, row.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_boss<W: Write>(out: &mut W, boss: &Boss, view: &Viewport) -> std::io::Result<()> {
    let (col, row) = view.cell(boss.rect.center_x(), boss.rect.bottom());
    let lx = col.saturating_sub(1);
    out.queue(style::SetForegroundColor(C_BOSS))?;
    out.queue(cursor::MoveTo(lx, row.saturating_sub(3)))?;
    out.queue(Print("♥".repeat(boss.hp as usize)))?;
    out.queue(cursor::MoveTo(lx, row.saturating_sub(2)))?;
    out.queue(Print("▛█▜"))?;
    out.queue(cursor::MoveTo(lx, row.saturating_sub(1)))?;
    out.queue(Print("▙█▟"))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, world: &GameWorld, view: &Viewport) -> std::io::Result<()> {
    let wt = &world.config.weight;
    let pct = ((world.player.weight - wt.min) / (wt.max - wt.min)).clamp(0.0, 1.0);

    // Weight bar, coloured by how close the player is to bursting.
    const BAR: usize = 20;
    let fill = (BAR as f32 * pct).round() as usize;
    let bar_color = if pct < 0.6 {
        Color::Green
    } else if pct < 0.9 {
        Color::Yellow
    } else {
        Color::Red
    };
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(bar_color))?;
    out.queue(Print(format!(
        "[{}{}]",
        "█".repeat(fill),
        "░".repeat(BAR - fill)
    )))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(" Peso: {:.1} kg", world.player.weight)))?;

    // Freeze banner, centre
    if world.player.freeze_ms > 0.0 {
        let banner = "CONGELADO!";
        let col = (view.cols / 2).saturating_sub(banner.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, 0))?;
        out.queue(style::SetForegroundColor(C_PLAYER_FROZEN))?;
        out.queue(Print(banner))?;
    }

    // Distance, right
    let dist = format!("Distância: {} px", world.player.dist_px as u32);
    let col = view.cols.saturating_sub(dist.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(col, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(&dist))?;
    Ok(())
}

// ── Hint / notice line (last row) ─────────────────────────────────────────────

fn draw_hint<W: Write>(
    out: &mut W,
    view: &Viewport,
    notice: Option<&str>,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Mover   ESPAÇO : Pular   Q : Sair"))?;

    if let Some(msg) = notice {
        let col = view.cols.saturating_sub(msg.chars().count() as u16 + 1);
        out.queue(cursor::MoveTo(col, view.rows.saturating_sub(1)))?;
        out.queue(style::SetForegroundColor(C_NOTICE))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn draw_menu<W: Write>(out: &mut W, view: &Viewport, best_dist: u32) -> std::io::Result<()> {
    let cx = view.cols / 2;
    let cy = view.rows / 2;

    let title = "★  FAT  RUNNER  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    if best_dist > 0 {
        let best = format!("Melhor distância: {} px", best_dist);
        out.queue(cursor::MoveTo(
            cx.saturating_sub(best.chars().count() as u16 / 2),
            cy.saturating_sub(4),
        ))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(&best))?;
    }

    let legend: &[(&str, Color, &str)] = &[
        ("┆┆", C_BATATA, " batata  — engorda"),
        ("◢◣", C_COXINHA, " coxinha — engorda e deixa lento"),
        ("◭▲", C_PIZZA, " pizza   — engorda"),
        ("[]", C_REFRI, " refri   — engorda e congela"),
        ("○", C_AGUA, "  água    — emagrece 10 kg"),
        ("◙", C_SUCO, "  suco    — emagrece 15 kg"),
    ];
    for (i, (sym, color, desc)) in legend.iter().enumerate() {
        out.queue(cursor::MoveTo(cx.saturating_sub(16), cy.saturating_sub(2) + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*sym))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(*desc))?;
    }

    let hint = "ENTER : Jogar   Q : Sair";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(hint.chars().count() as u16 / 2),
        cy + 6,
    ))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    world: &GameWorld,
    view: &Viewport,
    best_dist: u32,
) -> std::io::Result<()> {
    let dist = world.player.dist_px as u32;
    let dist_line = format!("Distância: {:>6} px", dist);
    let best = best_dist.max(dist);
    let best_line = if dist >= best_dist && dist > 0 {
        format!("★ NOVO RECORDE: {:>6} px ★", best)
    } else {
        format!("Melhor: {:>6} px", best)
    };

    let lines: &[&str] = &[
        "╔════════════════════╗",
        "║     GAME  OVER     ║",
        "╚════════════════════╝",
    ];
    let cx = view.cols / 2;
    let total_rows = lines.len() as u16 + 3;
    let start_row = (view.rows / 2).saturating_sub(total_rows / 2);

    out.queue(style::SetForegroundColor(Color::Red))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }

    let dist_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(dist_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, dist_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&dist_line))?;

    let best_color = if dist >= best_dist && dist > 0 {
        Color::Yellow
    } else {
        Color::DarkGrey
    };
    let col = cx.saturating_sub(best_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, dist_row + 1))?;
    out.queue(style::SetForegroundColor(best_color))?;
    out.queue(Print(&best_line))?;

    let hint = "R : Jogar de novo   Q : Sair";
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, dist_row + 2))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;
    Ok(())
}
