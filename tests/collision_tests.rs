//! Collision contract tests: reflection, tie-breaking, spin, and face snaps.

use tui_pong::core::collision::check;
use tui_pong::core::{Ball, Paddle, Wall};
use tui_pong::types::Rgb;

fn ball(x: f64, y: f64, vx: f64, vy: f64) -> Ball {
    Ball::new(x, y, 10.0, Rgb::new(255, 255, 255), vx, vy)
}

fn paddle() -> Paddle {
    Paddle::new(20, 50, 10, 100, 5)
}

#[test]
fn marginal_left_wall_graze_flips_vx_only() {
    // A thin wall overlapping just the left sliver of the ball's box.
    let mut b = ball(100.0, 100.0, 3.0, 3.0);
    let walls = [Wall::new(85, 95, 10, 10)];

    check(&mut b, &walls, &[]);

    assert_eq!(b.vx, -3.0);
    assert_eq!(b.vy, 3.0);
    assert_eq!((b.x, b.y), (100.0, 100.0));
}

#[test]
fn wall_collision_flips_exactly_one_component() {
    let cases = [
        // (wall, expect_vx_flip)
        (Wall::new(85, 95, 10, 10), true),   // left side
        (Wall::new(105, 95, 10, 10), true),  // right side
        (Wall::new(95, 85, 10, 10), false),  // above
        (Wall::new(95, 105, 10, 10), false), // below
    ];

    for (wall, horizontal) in cases {
        let mut b = ball(100.0, 100.0, 3.0, 3.0);
        check(&mut b, &[wall], &[]);

        if horizontal {
            assert_eq!((b.vx, b.vy), (-3.0, 3.0), "wall {wall:?}");
        } else {
            assert_eq!((b.vx, b.vy), (3.0, -3.0), "wall {wall:?}");
        }
    }
}

#[test]
fn exactly_touching_edges_do_not_collide() {
    // Ball box spans y in [90, 110]; the wall's top edge is exactly 110.
    let mut b = ball(100.0, 100.0, 3.0, 3.0);
    let walls = [Wall::new(95, 110, 10, 10)];

    check(&mut b, &walls, &[]);

    assert_eq!((b.vx, b.vy), (3.0, 3.0));
}

#[test]
fn equal_left_and_top_penetration_resolves_horizontally() {
    // Ball corner 5px deep on both axes of the obstacle's corner.
    let mut b = ball(100.0, 100.0, 3.0, 3.0);
    let walls = [Wall::new(105, 105, 50, 50)];

    check(&mut b, &walls, &[]);

    assert_eq!(b.vx, -3.0, "horizontal branch must win the tie");
    assert_eq!(b.vy, 3.0);
}

#[test]
fn paddle_right_face_hit_snaps_flush_and_flips_vx() {
    // Ball moving left into the paddle's right edge; right penetration (12)
    // is strictly the smallest.
    let mut b = ball(28.0, 100.0, -3.0, 3.0);

    check(&mut b, &[], &[paddle()]);

    assert_eq!(b.vx, 3.0);
    assert_eq!(b.x, 40.0, "ball must sit flush on the right face");
    assert_eq!(b.vy, 3.0, "dead-center hit adds no spin");
}

#[test]
fn paddle_left_right_penetration_tie_snaps_to_left_face() {
    // Ball centered over the paddle's x extent: left and right penetration
    // are both 15, and the left check runs first.
    let mut b = ball(25.0, 100.0, -3.0, 0.0);

    check(&mut b, &[], &[paddle()]);

    assert_eq!(b.vx, 3.0);
    assert_eq!(b.x, 10.0, "ties between faces resolve to the left face");
}

#[test]
fn paddle_top_face_hit_snaps_above() {
    // Ball descending onto the paddle's top edge: top penetration (12) is
    // strictly smaller than the 15px on each horizontal face.
    let mut b = ball(25.0, 52.0, 0.0, 3.0);

    check(&mut b, &[], &[paddle()]);

    assert_eq!(b.vy, -3.0);
    assert_eq!(b.y, 40.0, "paddle.y - radius");
    assert_eq!(b.vx, 0.0);
}

#[test]
fn paddle_bottom_face_hit_snaps_below() {
    let mut b = ball(25.0, 148.0, 0.0, -3.0);

    check(&mut b, &[], &[paddle()]);

    assert_eq!(b.vy, 3.0);
    assert_eq!(b.y, 160.0, "paddle.y + height + radius");
}

#[test]
fn spin_is_proportional_to_offset_from_paddle_center() {
    // Paddle center y is 100. A hit 20px above center subtracts 20 * 0.05.
    let mut above = ball(28.0, 80.0, -3.0, 3.0);
    check(&mut above, &[], &[paddle()]);
    assert_eq!(above.vx, 3.0);
    assert_eq!(above.vy, 2.0, "vy + (-20 * 0.05)");

    let mut below = ball(28.0, 120.0, -3.0, 3.0);
    check(&mut below, &[], &[paddle()]);
    assert_eq!(below.vy, 4.0, "vy + (20 * 0.05)");
}

#[test]
fn vertical_paddle_hits_apply_no_spin() {
    let mut b = ball(25.0, 52.0, 2.0, 3.0);

    check(&mut b, &[], &[paddle()]);

    assert_eq!(b.vx, 2.0, "horizontal velocity untouched on vertical hits");
    assert_eq!(b.vy, -3.0);
}

#[test]
fn only_the_first_overlap_is_resolved() {
    // Wall and paddle both overlap; the wall pass runs first and the
    // function returns, so no spin or snap happens.
    let mut b = ball(28.0, 100.0, -3.0, 3.0);
    let walls = [Wall::new(20, 50, 10, 100)];

    check(&mut b, &walls, &[paddle()]);

    assert_eq!(b.vx, 3.0);
    assert_eq!(b.vy, 3.0, "no spin from the co-located paddle");
    assert_eq!(b.x, 28.0, "no snap from the co-located paddle");
}
