use drape::{Particle, Vec2};
use drape::solver;

#[test]
fn pinned_particle_is_bit_identical() {
    let mut p: Particle<f32> = Particle::pinned(Vec2::new(3.7, 9.1));
    p.prev_pos = Vec2::new(1.3, 2.9);
    let before = p.pos;

    p.integrate(Vec2::new(1.0, 1.0));

    assert_eq!(p.pos.x.to_bits(), before.x.to_bits());
    assert_eq!(p.pos.y.to_bits(), before.y.to_bits());
    assert_eq!(p.prev_pos, before, "pinned particles still refresh prev_pos");
}

#[test]
fn at_rest_without_gravity_stays_put() {
    let mut p: Particle<f32> = Particle::new(Vec2::new(12.5, -4.25));
    for _ in 0..100 {
        p.integrate(Vec2::zero());
    }
    assert_eq!(p.pos, Vec2::new(12.5, -4.25));
    assert_eq!(p.prev_pos, p.pos);
}

#[test]
fn free_fall_speeds_up() {
    let mut p: Particle<f32> = Particle::new(Vec2::new(0.0, 0.0));
    let g = Vec2::new(0.0, 0.1);

    let mut last_speed = 0.0;
    for _ in 0..30 {
        p.integrate(g);
        let speed = p.velocity().y;
        assert!(speed > last_speed, "speed {} should exceed {}", speed, last_speed);
        last_speed = speed;
    }
    assert!(p.pos.y > 0.0);
    assert_eq!(p.pos.x, 0.0);
}

#[test]
fn prev_pos_is_position_before_step() {
    let mut p: Particle<f32> = Particle::new(Vec2::new(4.0, 4.0));
    p.prev_pos = Vec2::new(3.0, 5.0);
    p.integrate(Vec2::new(0.5, 0.0));

    assert_eq!(p.prev_pos, Vec2::new(4.0, 4.0));
    // x: 4 + 0.5 = 4.5, then + (4.5 - 3) = 6.0; y: 4 + (4 - 5) = 3.0
    assert_eq!(p.pos, Vec2::new(6.0, 3.0));
}

#[test]
fn integrate_skips_only_pinned() {
    let mut particles = [
        Particle::pinned(Vec2::new(0.0f32, 0.0)),
        Particle::new(Vec2::new(10.0f32, 0.0)),
    ];
    solver::integrate(&mut particles, Vec2::new(0.0, 1.0));
    assert_eq!(particles[0].pos, Vec2::new(0.0, 0.0));
    assert_eq!(particles[1].pos, Vec2::new(10.0, 2.0));
}

#[test]
fn unpinning_does_not_release_stored_velocity() {
    let mut p: Particle<f32> = Particle::new(Vec2::new(0.0, 0.0));
    p.prev_pos = Vec2::new(-5.0, 0.0);
    p.pin();
    p.integrate(Vec2::zero());
    p.unpin(0.3);
    p.integrate(Vec2::zero());
    assert_eq!(p.pos, Vec2::new(0.0, 0.0));
}
