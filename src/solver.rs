//! Iterative constraint solver for the cloth's Verlet particles.
//!
//! A frame is `integrate` once, then `iterations` rounds of `relax`
//! followed by `clamp`. Each relaxation is a single Gauss-Seidel sweep in
//! constraint order; repeating it approximates a full solve, and more
//! rounds give stiffer cloth.

use crate::float::Float;
use crate::vec::Vec2;
use crate::particle::Particle;
use crate::constraint::{BoundsConstraint, DistanceConstraint};
use crate::observer::StepObserver;
use rand::Rng;

/// Advance every particle by gravity and inertia.
pub fn integrate<F: Float>(particles: &mut [Particle<F>], gravity: Vec2<F>) {
    for p in particles.iter_mut() {
        p.integrate(gravity);
    }
}

/// One relaxation sweep over all constraints. Returns how many applied a correction.
pub fn relax<F: Float, R: Rng + ?Sized>(
    constraints: &[DistanceConstraint<F>],
    particles: &mut [Particle<F>],
    rng: &mut R,
) -> usize {
    let mut corrected = 0;
    for c in constraints.iter() {
        if c.solve(particles, rng) {
            corrected += 1;
        }
    }
    corrected
}

/// Clamp every particle into `bounds`.
pub fn clamp<F: Float>(particles: &mut [Particle<F>], bounds: &BoundsConstraint<F>) {
    bounds.solve(particles);
}

/// Run `iterations` rounds of relax-then-clamp.
pub fn solve<F: Float, R: Rng + ?Sized, O: StepObserver>(
    particles: &mut [Particle<F>],
    constraints: &[DistanceConstraint<F>],
    bounds: &BoundsConstraint<F>,
    iterations: usize,
    rng: &mut R,
    observer: &mut O,
) {
    for i in 0..iterations {
        relax(constraints, particles, rng);
        clamp(particles, bounds);
        observer.on_constraint_iteration(i);
    }
}
