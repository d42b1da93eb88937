use fat_runner::compute::{init_world, start_game};
use fat_runner::config::Config;
use fat_runner::entities::*;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq: equality comparisons must work
    assert_eq!(EnemyKind::Batata, EnemyKind::Batata);
    assert_ne!(EnemyKind::Batata, EnemyKind::Refri);
    assert_eq!(PowerUpKind::Agua, PowerUpKind::Agua);
    assert_ne!(PowerUpKind::Agua, PowerUpKind::Suco);
    assert_eq!(GamePhase::Menu, GamePhase::Menu);
    assert_ne!(GamePhase::Playing, GamePhase::GameOver);
    assert_eq!(PlayerPose::Run, PlayerPose::Run);
    assert_ne!(PlayerPose::Idle, PlayerPose::Jump);
    assert_eq!(
        GameEvent::AteEnemy(EnemyKind::Pizza),
        GameEvent::AteEnemy(EnemyKind::Pizza)
    );
    assert_ne!(
        GameEvent::AteEnemy(EnemyKind::Pizza),
        GameEvent::AteEnemy(EnemyKind::Batata)
    );

    // Clone must produce an equal value
    let kind = EnemyKind::Coxinha;
    assert_eq!(kind.clone(), EnemyKind::Coxinha);
}

#[test]
fn kind_tables_cover_every_variant() {
    assert_eq!(EnemyKind::ALL.len(), 4);
    assert_eq!(PowerUpKind::ALL.len(), 2);
}

// ── Rect geometry ─────────────────────────────────────────────────────────────

#[test]
fn rect_from_midbottom_places_feet() {
    let r = Rect::from_midbottom(100.0, 440.0, 40.0, 80.0);
    assert_eq!(r.left(), 80.0);
    assert_eq!(r.right(), 120.0);
    assert_eq!(r.top(), 360.0);
    assert_eq!(r.bottom(), 440.0);
    assert_eq!(r.center_x(), 100.0);
}

#[test]
fn rect_overlap_requires_shared_area() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));

    let apart = Rect::new(30.0, 0.0, 10.0, 10.0);
    assert!(!a.overlaps(&apart));
}

#[test]
fn rect_edge_contact_is_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let touching_right = Rect::new(10.0, 0.0, 10.0, 10.0);
    let touching_below = Rect::new(0.0, 10.0, 10.0, 10.0);
    assert!(!a.overlaps(&touching_right));
    assert!(!a.overlaps(&touching_below));
}

// ── Cloning the world ─────────────────────────────────────────────────────────

#[test]
fn game_world_clone_is_independent() {
    let original = start_game(&init_world(Config::default()).unwrap());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.rect.x = 999.0;
    cloned.player.weight = 159.0;
    cloned.difficulty = 3.0;
    cloned.enemies.push(Enemy {
        kind: EnemyKind::Batata,
        rect: Rect::new(500.0, 370.0, 70.0, 70.0),
        speed: 3.0,
    });
    cloned.boss = Some(Boss {
        rect: Rect::new(700.0, 340.0, 100.0, 100.0),
        vx: 5.0,
        hp: 3,
    });

    assert_eq!(original.player.weight, 115.0);
    assert_eq!(original.difficulty, 1.0);
    assert!(original.enemies.is_empty());
    assert!(original.boss.is_none());
}
