use fat_runner::config::{Config, ConfigError};

#[test]
fn default_config_validates() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn rejects_inverted_weight_bounds() {
    let mut cfg = Config::default();
    cfg.weight.min = 200.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::WeightBounds { .. })
    ));
}

#[test]
fn rejects_start_weight_outside_bounds() {
    let mut cfg = Config::default();
    cfg.weight.start = 10.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::StartWeight { .. })
    ));
}

#[test]
fn rejects_spawn_floor_above_base_interval() {
    let mut cfg = Config::default();
    cfg.enemy.min_interval_ms = 2000.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::SpawnFloor { .. })));
}

#[test]
fn rejects_degenerate_screen() {
    let mut cfg = Config::default();
    cfg.screen.ground_margin = 600.0; // ground line below the screen
    assert!(matches!(cfg.validate(), Err(ConfigError::Screen)));
}

#[test]
fn rejects_impossible_powerup_chance() {
    let mut cfg = Config::default();
    cfg.powerup.chance = 1.5;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::PowerUpChance(_))
    ));
}

#[test]
fn rejects_boss_cap_below_base_speed() {
    let mut cfg = Config::default();
    cfg.boss.speed_cap = 2.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::BossSpeedCap { .. })
    ));
}

#[test]
fn rejects_non_positive_world_speed() {
    let mut cfg = Config::default();
    cfg.world.post_boss_speed = 0.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::WorldSpeed)));
}

#[test]
fn config_errors_read_like_sentences() {
    let mut cfg = Config::default();
    cfg.weight.min = 200.0;
    let msg = cfg.validate().unwrap_err().to_string();
    assert!(msg.contains("200"));
    assert!(msg.contains("160"));
}
