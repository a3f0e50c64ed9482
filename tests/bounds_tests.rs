use drape::{BoundsConstraint, Particle, Vec2};
use drape::solver;

fn viewport_bounds(friction: f32) -> BoundsConstraint<f32> {
    BoundsConstraint::viewport(Vec2::new(100.0, 100.0), 5.0, friction)
}

#[test]
fn left_wall_resets_to_margin() {
    let mut particles = [Particle::new(Vec2::new(-5.0f32, 50.0))];
    solver::clamp(&mut particles, &viewport_bounds(0.2));
    assert_eq!(particles[0].pos.x, 5.0);
    assert_eq!(particles[0].pos.y, 50.0);
}

#[test]
fn right_and_top_walls() {
    let mut particles = [Particle::new(Vec2::new(140.0f32, -20.0))];
    solver::clamp(&mut particles, &viewport_bounds(0.2));
    assert_eq!(particles[0].pos, Vec2::new(95.0, 5.0));
}

#[test]
fn walls_do_not_touch_prev_pos() {
    let mut p = Particle::new(Vec2::new(-5.0f32, -5.0));
    p.prev_pos = Vec2::new(-1.0, -1.0);
    let mut particles = [p];
    solver::clamp(&mut particles, &viewport_bounds(0.2));
    assert_eq!(particles[0].prev_pos, Vec2::new(-1.0, -1.0));
}

#[test]
fn floor_friction_bleeds_horizontal_speed() {
    let mut p = Particle::new(Vec2::new(50.0f32, 97.0));
    p.prev_pos = Vec2::new(48.0, 97.0);
    let mut particles = [p];

    solver::clamp(&mut particles, &viewport_bounds(0.2));

    // depth 2, slide 2, friction 0.2 -> x -= 0.8
    assert!((particles[0].pos.x - 49.2).abs() < 1e-5, "x = {}", particles[0].pos.x);
    assert_eq!(particles[0].pos.y, 95.0);
    let speed = particles[0].pos.x - particles[0].prev_pos.x;
    assert!(speed < 2.0, "horizontal speed should drop, got {}", speed);
}

#[test]
fn floor_friction_scales_with_depth_and_coefficient() {
    let slide_after = |depth: f32, friction: f32| {
        let mut p = Particle::new(Vec2::new(50.0f32, 95.0 + depth));
        p.prev_pos = Vec2::new(49.0, 95.0);
        let mut particles = [p];
        solver::clamp(&mut particles, &viewport_bounds(friction));
        particles[0].pos.x - particles[0].prev_pos.x
    };

    assert_eq!(slide_after(1.0, 0.0), 1.0, "no friction, no loss");
    assert!(slide_after(2.0, 0.2) < slide_after(1.0, 0.2));
    assert!(slide_after(1.0, 0.4) < slide_after(1.0, 0.2));
}

#[test]
fn resting_exactly_on_floor_loses_nothing() {
    let mut p = Particle::new(Vec2::new(50.0f32, 95.0));
    p.prev_pos = Vec2::new(47.0, 95.0);
    let mut particles = [p];
    solver::clamp(&mut particles, &viewport_bounds(0.2));
    assert_eq!(particles[0].pos, Vec2::new(50.0, 95.0));
}

#[test]
fn pinned_particles_are_clamped_too() {
    let mut particles = [Particle::pinned(Vec2::new(-30.0f32, 50.0))];
    solver::clamp(&mut particles, &viewport_bounds(0.2));
    assert_eq!(particles[0].pos.x, 5.0);
}

#[test]
fn corner_triggers_both_axes() {
    let mut p = Particle::new(Vec2::new(120.0f32, 110.0));
    p.prev_pos = Vec2::new(120.0, 100.0);
    let mut particles = [p];
    solver::clamp(&mut particles, &viewport_bounds(0.2));
    // x is clamped first, so the floor sees slide = 95 - 120.
    let expected_x = 95.0 - 15.0 * (95.0 - 120.0) * 0.2;
    assert!((particles[0].pos.x - expected_x).abs() < 1e-3);
    assert_eq!(particles[0].pos.y, 95.0);
}
