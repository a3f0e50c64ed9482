//! Cloth mesh: a row-major grid of particles tied by rope constraints.

use crate::float::Float;
use crate::vec::Vec2;
use crate::particle::{Particle, DEFAULT_INV_MASS};
use crate::constraint::DistanceConstraint;
use crate::error::ConfigError;
use alloc::vec::Vec as AllocVec;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Shape and anchoring of a cloth mesh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshConfig<F> {
    /// Particles per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Horizontal distance between neighbouring particles at build time.
    pub spacing: F,
    /// Rest length of every structural constraint.
    pub rest_length: F,
    /// Every `attach_stride`-th particle of the top row is pinned.
    pub attach_stride: usize,
    /// y coordinate of the top row.
    pub top_offset: F,
    /// Half-width of the random horizontal offset given to each `prev_pos`.
    pub jitter: F,
    /// Inverse mass of the movable particles.
    pub inv_mass: F,
}

impl<F: Float> MeshConfig<F> {
    pub fn new(width: usize, height: usize) -> Self {
        MeshConfig { width, height, ..Self::default() }
    }

    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_rest_length(mut self, rest_length: F) -> Self {
        self.rest_length = rest_length;
        self
    }

    pub fn with_attach_stride(mut self, attach_stride: usize) -> Self {
        self.attach_stride = attach_stride;
        self
    }

    pub fn with_top_offset(mut self, top_offset: F) -> Self {
        self.top_offset = top_offset;
        self
    }

    pub fn with_jitter(mut self, jitter: F) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_inv_mass(mut self, inv_mass: F) -> Self {
        self.inv_mass = inv_mass;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyMesh { width: self.width, height: self.height });
        }
        if self.attach_stride == 0 {
            return Err(ConfigError::ZeroAttachStride);
        }
        if !self.spacing.is_finite() || self.spacing <= F::zero() {
            return Err(ConfigError::NonPositiveSpacing);
        }
        if !self.rest_length.is_finite() || self.rest_length <= F::zero() {
            return Err(ConfigError::NonPositiveRestLength);
        }
        if !self.inv_mass.is_finite() || self.inv_mass < F::zero() {
            return Err(ConfigError::NegativeInverseMass);
        }
        Ok(())
    }

    /// Number of pinned particles a mesh built from this config will have.
    pub fn pinned_count(&self) -> usize {
        if self.attach_stride == 0 {
            return 0;
        }
        self.width.div_ceil(self.attach_stride)
    }

    /// Number of structural constraints: `(W-1)*H + W*(H-1)`.
    pub fn constraint_count(&self) -> usize {
        self.width.saturating_sub(1) * self.height + self.width * self.height.saturating_sub(1)
    }
}

impl<F: Float> Default for MeshConfig<F> {
    fn default() -> Self {
        MeshConfig {
            width: 25,
            height: 20,
            spacing: F::from_f32(16.0),
            rest_length: F::from_f32(20.0),
            attach_stride: 1,
            top_offset: F::from_f32(50.0),
            jitter: F::from_f32(2.5),
            inv_mass: F::from_f32(DEFAULT_INV_MASS),
        }
    }
}

/// Particle and constraint storage for one cloth.
///
/// Particle at (col, row) has index `row * width + col`. Constraints refer
/// to particles by index, so rebuilding is a clear-and-repopulate.
#[derive(Clone, Debug)]
pub struct ClothMesh<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<DistanceConstraint<F>>,
    width: usize,
    height: usize,
}

impl<F: Float> ClothMesh<F> {
    pub fn empty() -> Self {
        ClothMesh {
            particles: AllocVec::new(),
            constraints: AllocVec::new(),
            width: 0,
            height: 0,
        }
    }

    /// Build a mesh centred horizontally in a viewport `viewport_width` wide.
    pub fn build<R: Rng + ?Sized>(
        config: &MeshConfig<F>,
        viewport_width: F,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let mut mesh = Self::empty();
        mesh.rebuild(config, viewport_width, rng)?;
        Ok(mesh)
    }

    /// Replace the whole mesh. On error the current mesh is kept.
    ///
    /// Rows are filled left to right, top to bottom; each particle links to
    /// its left and upper neighbours, which already exist at lower indices.
    /// Rows start one unit apart, so the cloth begins bunched up and drops
    /// open under gravity.
    pub fn rebuild<R: Rng + ?Sized>(
        &mut self,
        config: &MeshConfig<F>,
        viewport_width: F,
        rng: &mut R,
    ) -> Result<(), ConfigError> {
        config.validate()?;

        let (w, h) = (config.width, config.height);
        let span = F::from_f32(w as f32) * config.spacing;
        let x_margin = (viewport_width - span) * F::half();
        let jitter_span = config.jitter + config.jitter;

        self.particles.clear();
        self.constraints.clear();
        self.particles.reserve(w * h);
        self.constraints.reserve(config.constraint_count());

        for y in 0..h {
            for x in 0..w {
                let pos = Vec2::new(
                    F::from_f32(x as f32) * config.spacing + x_margin,
                    F::from_f32(y as f32) + config.top_offset,
                );
                let mut p = Particle::with_inv_mass(pos, config.inv_mass);
                p.prev_pos.x = p.prev_pos.x + F::from_f32(rng.gen::<f32>()) * jitter_span - config.jitter;

                let idx = x + y * w;
                if x > 0 {
                    self.constraints.push(DistanceConstraint::rope(idx - 1, idx, config.rest_length));
                }
                if y > 0 {
                    self.constraints.push(DistanceConstraint::rope(idx - w, idx, config.rest_length));
                } else if x % config.attach_stride == 0 {
                    p.inv_mass = F::zero();
                }

                self.particles.push(p);
            }
        }

        self.width = w;
        self.height = h;
        Ok(())
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.width + col
    }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        self.particles[self.index(col, row)].pos
    }

    pub fn particle(&self, index: usize) -> &Particle<F> {
        &self.particles[index]
    }

    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<F> {
        &mut self.particles[index]
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle<F>] {
        &mut self.particles
    }

    pub fn constraints(&self) -> &[DistanceConstraint<F>] {
        &self.constraints
    }

    /// Split borrow for the solver: particles mutably, constraints shared.
    pub fn parts_mut(&mut self) -> (&mut [Particle<F>], &[DistanceConstraint<F>]) {
        (&mut self.particles, &self.constraints)
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// Endpoint positions of every constraint, for drawing.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.constraints
            .iter()
            .map(move |c| (self.particles[c.a].pos, self.particles[c.b].pos))
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }

    pub fn pinned_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_pinned()).count()
    }
}
