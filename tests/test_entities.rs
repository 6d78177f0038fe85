use meditating_ninja::entities::*;

#[test]
fn direction_signs() {
    assert_eq!(Direction::Left.sign(), -1);
    assert_eq!(Direction::Right.sign(), 1);
}

#[test]
fn enemies_walk_toward_the_centre() {
    assert_eq!(Side::Left.heading(), Direction::Right);
    assert_eq!(Side::Right.heading(), Direction::Left);
}

#[test]
fn center_x_halves_width_with_integer_division() {
    assert_eq!(Bounds::new(10, 0, 30, 30).center_x(), 25);
    assert_eq!(Bounds::new(-132, 301, 83, 99).center_x(), -132 + 41);
    assert_eq!(Bounds::new(245, 281, 110, 119).right(), 355);
}

#[test]
fn advance_only_moves_along_x() {
    let mut sprite = MobileSprite {
        id: SpriteId(0),
        bounds: Bounds::new(100, 321, 30, 30),
        speed: 8,
        heading: Direction::Left,
    };
    sprite.advance();
    sprite.advance();
    assert_eq!(sprite.bounds.x, 84);
    assert_eq!(sprite.bounds.y, 321);
    assert_eq!(sprite.bounds.width, 30);
    assert_eq!(sprite.bounds.height, 30);
}

#[test]
fn runaway_shuriken_stops_at_the_edge_of_i32() {
    let mut sprite = MobileSprite {
        id: SpriteId(1),
        bounds: Bounds::new(i32::MAX - 4, 321, 30, 30),
        speed: 8,
        heading: Direction::Right,
    };
    sprite.advance();
    assert_eq!(sprite.bounds.x, i32::MAX);
    assert_eq!(sprite.bounds.center_x(), i32::MAX);
    assert_eq!(sprite.bounds.right(), i32::MAX);
}
