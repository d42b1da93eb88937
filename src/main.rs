mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use fat_runner::compute::{init_world, restart_game, start_game, tick};
use fat_runner::config::Config;
use fat_runner::entities::{EnemyKind, GameEvent, GamePhase, GameWorld, InputState, PowerUpKind};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms) is
/// always refreshed before expiry once repeats start flowing.
const HOLD_WINDOW: u64 = 8;

/// How many frames an effect notice stays on the hint line.
const NOTICE_FRAMES: u32 = 50;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Best-distance persistence ─────────────────────────────────────────────────

fn best_dist_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".fat_runner_best")
}

fn load_best_dist() -> u32 {
    std::fs::read_to_string(best_dist_path())
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

fn save_best_dist(dist: u32) {
    let _ = std::fs::write(best_dist_path(), dist.to_string());
}

// ── Effect intents → hint-line notices ────────────────────────────────────────

/// The terminal stand-in for sound effects: each core intent becomes a
/// short flash on the hint line (or nothing).
fn notice_for(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::Jumped => None, // every jump would be noise
        GameEvent::AteEnemy(kind) => {
            let name = match kind {
                EnemyKind::Batata => "batata",
                EnemyKind::Coxinha => "coxinha",
                EnemyKind::Pizza => "pizza",
                EnemyKind::Refri => "refri",
            };
            Some(format!("comeu {}! +10 kg", name))
        }
        GameEvent::DrankPowerUp(kind) => Some(match kind {
            PowerUpKind::Agua => "bebeu água! -10 kg".to_string(),
            PowerUpKind::Suco => "bebeu suco! -15 kg".to_string(),
        }),
        GameEvent::BossStomped => Some("acertou o chefe!".to_string()),
        GameEvent::BossDefeated => Some("chefe derrotado! o mundo acelera".to_string()),
        GameEvent::BossContact => Some("atropelado pelo chefe!".to_string()),
        GameEvent::GameOver => Some("PESO MÁXIMO!".to_string()),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One loop for all three phases.  Menu and game-over are passive render
/// states: the world only advances while it is `Playing`, and the phase
/// transitions ride on one-shot key presses.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key; each frame the keys still "fresh"
/// (within `HOLD_WINDOW`) are folded into the tick's `InputState`.  This
/// lets Space + A/D be held at the same time with no interference, on both
/// keyboard-enhancement terminals (real release events) and classic ones
/// (keys expire after a few frames of repeat silence).
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    world0: GameWorld,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut world = world0;
    let mut best_dist = load_best_dist();

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut notice: Option<(String, u32)> = None;
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let dt_ms = (frame_start - last).as_secs_f32() * 1000.0;
        last = frame_start;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code.clone(), frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c')
                            if modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            return Ok(());
                        }
                        KeyCode::Enter if world.phase == GamePhase::Menu => {
                            world = start_game(&world);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter
                            if world.phase == GamePhase::GameOver =>
                        {
                            world = restart_game(&world);
                            notice = None;
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code.clone(), frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Advance the simulation ─────────────────────────────────────────────
        if world.phase == GamePhase::Playing {
            let input = InputState {
                left: is_held(&key_frame, &KeyCode::Left, frame)
                    || is_held(&key_frame, &KeyCode::Char('a'), frame)
                    || is_held(&key_frame, &KeyCode::Char('A'), frame),
                right: is_held(&key_frame, &KeyCode::Right, frame)
                    || is_held(&key_frame, &KeyCode::Char('d'), frame)
                    || is_held(&key_frame, &KeyCode::Char('D'), frame),
                jump: is_held(&key_frame, &KeyCode::Char(' '), frame)
                    || is_held(&key_frame, &KeyCode::Up, frame)
                    || is_held(&key_frame, &KeyCode::Char('w'), frame)
                    || is_held(&key_frame, &KeyCode::Char('W'), frame),
            };

            let (next, events) = tick(&world, dt_ms, &input, &mut rng);
            world = next;

            for ev in &events {
                if *ev == GameEvent::GameOver {
                    let dist = world.player.dist_px as u32;
                    if dist > best_dist {
                        best_dist = dist;
                        save_best_dist(best_dist);
                    }
                }
                if let Some(text) = notice_for(ev) {
                    notice = Some((text, NOTICE_FRAMES));
                }
            }
        }

        // Let the current notice fade out
        if let Some((_, frames_left)) = notice.as_mut() {
            *frames_left = frames_left.saturating_sub(1);
        }
        if matches!(notice, Some((_, 0))) {
            notice = None;
        }

        display::render(
            out,
            &world,
            best_dist,
            notice.as_ref().map(|(text, _)| text.as_str()),
        )?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    // Reject bad tuning before touching the terminal.
    let world0 = match init_world(Config::default()) {
        Ok(world) => world,
        Err(err) => {
            eprintln!("fat_runner: invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = run(&mut out, &rx, world0);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
