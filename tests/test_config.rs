use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use meditating_ninja::config::*;
use meditating_ninja::entities::*;
use meditating_ninja::question::Operation;

#[test]
fn difficulty_tables() {
    let easy = DifficultyConfig::for_difficulty(Difficulty::Easy);
    assert_eq!(easy.spawn_interval, Duration::from_millis(5000));
    assert_eq!(easy.score_per_kill, 5);
    assert_eq!(easy.operations, &[Operation::Multiply]);

    let hard = DifficultyConfig::for_difficulty(Difficulty::Hard);
    assert_eq!(hard.spawn_interval, Duration::from_millis(1500));
    assert_eq!(hard.score_per_kill, 10);
    assert_eq!(hard.left_operand, 0..=12);
    assert_eq!(hard.right_operand, 1..=12);
    assert_eq!(hard.operations.len(), 4);
}

#[test]
fn enemies_spawn_outside_the_ninja_on_both_sides() {
    let layout = Layout::default();
    let left = layout.enemy_spawn(Side::Left);
    let right = layout.enemy_spawn(Side::Right);
    assert!(left.center_x() < layout.ninja.x);
    assert!(right.center_x() > layout.ninja.right());
    assert_eq!(left.y, right.y);
}

#[test]
fn session_config_defaults_to_a_two_second_pause() {
    let config = SessionConfig::new(Difficulty::Easy);
    assert_eq!(config.game_over_pause, Duration::from_secs(2));
    assert_eq!(config.tuning, DifficultyConfig::for_difficulty(Difficulty::Easy));
    let quick = config.with_game_over_pause(Duration::ZERO);
    assert!(quick.game_over_pause.is_zero());
}

// ── Runtime settings ──────────────────────────────────────────────────────────

fn runtime(vars: &[(&str, &str)]) -> RuntimeConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    RuntimeConfig::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn runtime_defaults_when_nothing_is_set() {
    let config = runtime(&[("HOME", "/home/kenji")]);
    assert_eq!(
        config.leaderboard_path,
        PathBuf::from("/home/kenji/.meditating_ninja_scores")
    );
    assert_eq!(config.log_path, std::env::temp_dir().join("meditating_ninja.log"));
    assert_eq!(config.game_over_pause, DEFAULT_GAME_OVER_PAUSE);
    assert_eq!(config.frames_per_second, 60);
    assert_eq!(config.frame_duration(), Duration::from_secs(1) / 60);
}

#[test]
fn runtime_reads_every_variable() {
    let config = runtime(&[
        ("MEDITATING_NINJA_SCORES", "/tmp/scores"),
        ("MEDITATING_NINJA_LOG", "/tmp/ninja.log"),
        ("MEDITATING_NINJA_PAUSE_MS", "0"),
        ("MEDITATING_NINJA_FPS", "30"),
    ]);
    assert_eq!(config.leaderboard_path, PathBuf::from("/tmp/scores"));
    assert_eq!(config.log_path, PathBuf::from("/tmp/ninja.log"));
    assert!(config.game_over_pause.is_zero());
    assert_eq!(config.frames_per_second, 30);
}

#[test]
fn scores_fall_back_to_the_working_directory_without_home() {
    assert_eq!(
        leaderboard_path(None, None),
        PathBuf::from("./.meditating_ninja_scores")
    );
}

#[test]
fn unparsable_pause_keeps_the_default() {
    assert_eq!(game_over_pause(None), Duration::from_millis(2000));
    assert_eq!(game_over_pause(Some("soon".into())), Duration::from_millis(2000));
    assert_eq!(game_over_pause(Some("-5".into())), Duration::from_millis(2000));
    assert_eq!(game_over_pause(Some(" 250 ".into())), Duration::from_millis(250));
}

#[test]
fn zero_or_garbage_frame_rate_keeps_sixty() {
    assert_eq!(frames_per_second(None), 60);
    assert_eq!(frames_per_second(Some("0".into())), 60);
    assert_eq!(frames_per_second(Some("fast".into())), 60);
    assert_eq!(frames_per_second(Some("120".into())), 120);
}

#[test]
fn frame_duration_survives_a_zero_rate() {
    let mut config = runtime(&[]);
    config.frames_per_second = 0;
    assert_eq!(config.frame_duration(), Duration::from_secs(1));
}
