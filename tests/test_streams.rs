use std::time::{Duration, Instant};

use meditating_ninja::config::Layout;
use meditating_ninja::entities::*;
use meditating_ninja::streams::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

// ── ProjectileStream ──────────────────────────────────────────────────────────

#[test]
fn shurikens_launch_from_direction_specific_points() {
    let layout = Layout::default();
    let mut stream = ProjectileStream::new();
    stream.spawn(Direction::Right, &layout);
    stream.spawn(Direction::Left, &layout);

    let p: Vec<_> = stream.iter().collect();
    assert_eq!(p[0].sprite.bounds, Bounds::new(335, 321, 30, 30));
    assert_eq!(p[0].direction(), Direction::Right);
    assert_eq!(p[1].sprite.bounds, Bounds::new(235, 321, 30, 30));
    assert_eq!(p[1].direction(), Direction::Left);
}

#[test]
fn shurikens_advance_by_their_speed() {
    let layout = Layout::default();
    let mut stream = ProjectileStream::new();
    stream.spawn(Direction::Right, &layout);
    stream.spawn(Direction::Left, &layout);
    stream.advance_all();

    let xs: Vec<i32> = stream.iter().map(|p| p.sprite.bounds.x).collect();
    assert_eq!(xs, vec![343, 227]);
    assert!(stream.iter().all(|p| p.sprite.bounds.y == 321));
}

#[test]
fn ids_are_unique_and_removal_is_by_id() {
    let layout = Layout::default();
    let mut stream = ProjectileStream::new();
    let a = stream.spawn(Direction::Right, &layout);
    let b = stream.spawn(Direction::Right, &layout);
    let c = stream.spawn(Direction::Left, &layout);
    assert!(a != b && b != c && a != c);

    stream.remove(&[b]);
    let left: Vec<SpriteId> = stream.iter().map(|p| p.id()).collect();
    assert_eq!(left, vec![a, c]);

    // Ids are never reused after a removal.
    let d = stream.spawn(Direction::Left, &layout);
    assert!(d != b);
    assert_eq!(stream.len(), 3);
}

// ── EnemyStream ───────────────────────────────────────────────────────────────

#[test]
fn left_enemy_moves_right_each_frame() {
    let layout = Layout::default();
    let mut stream = EnemyStream::new();
    stream.spawn(Side::Left, &layout);
    let mut last = stream.as_slice()[0].sprite.bounds.x;
    assert_eq!(last, -132);
    for _ in 0..5 {
        stream.advance_all();
        let x = stream.as_slice()[0].sprite.bounds.x;
        assert_eq!(x, last + 3);
        last = x;
    }
}

#[test]
fn right_enemy_moves_left_each_frame() {
    let layout = Layout::default();
    let mut stream = EnemyStream::new();
    stream.spawn(Side::Right, &layout);
    let mut last = stream.as_slice()[0].sprite.bounds.x;
    assert_eq!(last, 650);
    for _ in 0..5 {
        stream.advance_all();
        let x = stream.as_slice()[0].sprite.bounds.x;
        assert_eq!(x, last - 3);
        last = x;
    }
    assert_eq!(stream.as_slice()[0].sprite.bounds.y, 301);
}

#[test]
fn random_spawns_use_both_sides() {
    let layout = Layout::default();
    let mut rng = StdRng::seed_from_u64(42);
    let mut stream = EnemyStream::new();
    for _ in 0..100 {
        let (id, side) = stream.spawn_random(&layout, &mut rng);
        let enemy = stream.iter().find(|e| e.id() == id).unwrap();
        assert_eq!(enemy.side, side);
        assert_eq!(enemy.sprite.bounds, layout.enemy_spawn(side));
    }
    assert!(stream.iter().any(|e| e.side == Side::Left));
    assert!(stream.iter().any(|e| e.side == Side::Right));
}

// ── SpawnTimer ────────────────────────────────────────────────────────────────

#[test]
fn timer_fires_after_one_interval() {
    let t0 = Instant::now();
    let mut timer = SpawnTimer::new(Duration::from_millis(1500), t0);
    assert!(!timer.poll(t0));
    assert!(!timer.poll(t0 + Duration::from_millis(1499)));
    assert!(timer.poll(t0 + Duration::from_millis(1500)));
    assert!(!timer.poll(t0 + Duration::from_millis(1500)));
    assert!(timer.poll(t0 + Duration::from_millis(3000)));
}

#[test]
fn timer_fires_at_most_once_per_poll_after_a_stall() {
    let t0 = Instant::now();
    let mut timer = SpawnTimer::new(Duration::from_millis(1500), t0);
    let late = t0 + Duration::from_secs(10);
    assert!(timer.poll(late));
    assert!(!timer.poll(late));
    assert_eq!(timer.interval(), Duration::from_millis(1500));
}
