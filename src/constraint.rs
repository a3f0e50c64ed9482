//! Distance constraints between particles and the viewport bounds clamp.

use crate::float::Float;
use crate::vec::Vec2;
use crate::particle::Particle;
use rand::Rng;

/// Upper bound of the random nudge applied to coincident endpoints.
const COINCIDENT_NUDGE: f32 = 0.1;

/// A distance constraint between particles `a` (p1) and `b` (p2).
///
/// One-sided constraints (`pushing == false`) behave like rope: they pull
/// stretched endpoints together and ignore slack. Two-sided constraints also
/// push compressed endpoints apart.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    rest_length: F,
    rest_length_sq: F,
    pushing: bool,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F, pushing: bool) -> Self {
        DistanceConstraint {
            a,
            b,
            rest_length,
            rest_length_sq: rest_length * rest_length,
            pushing,
        }
    }

    /// Rope constraint: resists stretching only.
    pub fn rope(a: usize, b: usize, rest_length: F) -> Self {
        Self::new(a, b, rest_length, false)
    }

    /// Rod constraint: resists stretching and compression.
    pub fn rod(a: usize, b: usize, rest_length: F) -> Self {
        Self::new(a, b, rest_length, true)
    }

    pub fn rest_length(&self) -> F { self.rest_length }
    pub fn rest_length_sq(&self) -> F { self.rest_length_sq }
    pub fn is_pushing(&self) -> bool { self.pushing }

    /// One relaxation of this constraint.
    ///
    /// The correction is split by inverse mass, so pinned endpoints never
    /// move. Returns `false` when the constraint was skipped.
    pub fn solve<R: Rng + ?Sized>(&self, particles: &mut [Particle<F>], rng: &mut R) -> bool {
        if self.a >= particles.len() || self.b >= particles.len() {
            return false;
        }

        let mut delta = particles[self.a].pos - particles[self.b].pos;
        if delta.x == F::zero() && delta.y == F::zero() {
            delta.x = delta.x + F::from_f32(rng.gen::<f32>() * COINCIDENT_NUDGE);
            delta.y = delta.y + F::from_f32(rng.gen::<f32>() * COINCIDENT_NUDGE);
        }

        let dist_sq = delta.length_sq();
        if dist_sq == F::zero() {
            return false;
        }
        if !self.pushing && dist_sq < self.rest_length_sq {
            return false;
        }

        let a_inv = particles[self.a].inv_mass;
        let b_inv = particles[self.b].inv_mass;
        let percent = (dist_sq - self.rest_length_sq) * (a_inv + b_inv) / dist_sq;
        let correction = delta.scale(percent);

        particles[self.a].pos -= correction.scale(a_inv);
        particles[self.b].pos += correction.scale(b_inv);
        true
    }
}

/// Keeps particles inside the viewport, inset by `margin`.
///
/// Walls are hard position resets. The floor also bleeds horizontal motion
/// in proportion to how deep the particle went below it.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundsConstraint<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
    pub friction: F,
}

impl<F: Float> BoundsConstraint<F> {
    /// Bounds for a `viewport`-sized area with `margin` kept clear on every side.
    pub fn viewport(viewport: Vec2<F>, margin: F, friction: F) -> Self {
        BoundsConstraint {
            min: Vec2::new(margin, margin),
            max: Vec2::new(viewport.x - margin, viewport.y - margin),
            friction,
        }
    }

    pub fn solve(&self, particles: &mut [Particle<F>]) {
        for p in particles.iter_mut() {
            self.clamp(p);
        }
    }

    pub fn clamp(&self, p: &mut Particle<F>) {
        if p.pos.x < self.min.x {
            p.pos.x = self.min.x;
        } else if p.pos.x >= self.max.x {
            p.pos.x = self.max.x;
        }

        if p.pos.y < self.min.y {
            p.pos.y = self.min.y;
        } else if p.pos.y >= self.max.y {
            let depth = p.pos.y - self.max.y;
            let slide = p.pos.x - p.prev_pos.x;
            p.pos.x = p.pos.x - depth * slide * self.friction;
            p.pos.y = self.max.y;
        }
    }
}
