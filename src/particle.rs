//! Verlet particles with implicit velocity.

use crate::float::Float;
use crate::vec::Vec2;

/// Inverse mass given to every movable cloth particle.
pub const DEFAULT_INV_MASS: f32 = 0.3;

/// A point mass. Velocity is implied by `pos - prev_pos`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    /// Position immediately before the most recent integration step.
    pub prev_pos: Vec2<F>,
    /// 0 pins the particle; larger values move more under corrections.
    pub inv_mass: F,
}

impl<F: Float> Particle<F> {
    /// A movable particle at rest with the default inverse mass.
    pub fn new(pos: Vec2<F>) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            inv_mass: F::from_f32(DEFAULT_INV_MASS),
        }
    }

    pub fn with_inv_mass(pos: Vec2<F>, inv_mass: F) -> Self {
        Particle { pos, prev_pos: pos, inv_mass }
    }

    pub fn pinned(pos: Vec2<F>) -> Self {
        Particle { pos, prev_pos: pos, inv_mass: F::zero() }
    }

    pub fn is_pinned(&self) -> bool {
        self.inv_mass == F::zero()
    }

    pub fn pin(&mut self) {
        self.inv_mass = F::zero();
        self.prev_pos = self.pos;
    }

    pub fn unpin(&mut self, inv_mass: F) {
        self.inv_mass = inv_mass;
    }

    /// One Verlet step.
    ///
    /// Gravity is added first and the inertia term is taken from the
    /// already-accelerated position, so a free particle starting at rest
    /// moves `2 * gravity` in its first step. `prev_pos` always receives the
    /// position from before the step, pinned or not.
    pub fn integrate(&mut self, gravity: Vec2<F>) {
        let old = self.pos;
        if self.inv_mass > F::zero() {
            self.pos += gravity;
            let inertia = self.pos - self.prev_pos;
            self.pos += inertia;
        }
        self.prev_pos = old;
    }

    /// Displacement over the last step.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }
}
