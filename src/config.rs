//! Configuration for the simulation world.

use crate::float::Float;
use crate::vec::Vec2;
use crate::error::ConfigError;
use crate::spatial::{grid_dimensions, MAX_GRID_CELLS};
use serde::{Deserialize, Serialize};

/// Simulation settings that can change while the cloth is live.
///
/// # Builder Pattern
/// ```
/// use drape::config::SimConfig;
/// use drape::vec::Vec2;
///
/// let config: SimConfig<f32> = SimConfig::new()
///     .with_viewport(Vec2::new(1280.0, 720.0))
///     .with_gravity(Vec2::new(0.05, 0.1))
///     .with_iterations(8)
///     .with_friction(0.2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig<F> {
    /// Per-step gravity displacement. Default: (0, 0.1), y points down.
    pub gravity: Vec2<F>,
    /// Relax-and-clamp rounds per frame. Default: 4.
    pub iterations: usize,
    /// Viewport width and height. Default: 800 x 600.
    pub viewport: Vec2<F>,
    /// Clearance kept between particles and every viewport edge. Default: 5.
    pub margin: F,
    /// Floor friction coefficient. Default: 0.2.
    pub friction: F,
    /// Spatial grid cell size. Default: 40.
    pub cell_size: F,
    /// Squared distance under which a particle can be picked. Default: 150.
    pub pick_radius_sq: F,
    /// Seed for the mesh jitter and coincident-endpoint nudges.
    pub seed: u64,
}

impl<F: Float> SimConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimConfig {
            gravity: Vec2::new(F::zero(), F::from_f32(0.1)),
            iterations: 4,
            viewport: Vec2::new(F::from_f32(800.0), F::from_f32(600.0)),
            margin: F::from_f32(5.0),
            friction: F::from_f32(0.2),
            cell_size: F::from_f32(40.0),
            pick_radius_sq: F::from_f32(150.0),
            seed: 0x5eed,
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the number of relax-and-clamp rounds (at least 1).
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    pub fn with_viewport(mut self, viewport: Vec2<F>) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_margin(mut self, margin: F) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_cell_size(mut self, cell_size: F) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_pick_radius_sq(mut self, pick_radius_sq: F) -> Self {
        self.pick_radius_sq = pick_radius_sq;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_viewport(self.viewport)?;
        if !self.cell_size.is_finite() || self.cell_size <= F::zero() {
            return Err(ConfigError::NonPositiveCellSize);
        }
        let two = F::one() + F::one();
        if !self.margin.is_finite()
            || self.margin < F::zero()
            || self.margin * two > self.viewport.x
            || self.margin * two > self.viewport.y
        {
            return Err(ConfigError::InvalidMargin);
        }
        if !self.pick_radius_sq.is_finite() || self.pick_radius_sq <= F::zero() {
            return Err(ConfigError::NonPositivePickRadius);
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if grid_dimensions(self.viewport, self.cell_size).is_none() {
            return Err(ConfigError::GridTooLarge { max: MAX_GRID_CELLS });
        }
        Ok(())
    }
}

impl<F: Float> Default for SimConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_viewport<F: Float>(viewport: Vec2<F>) -> Result<(), ConfigError> {
    if !viewport.is_finite() || viewport.x <= F::zero() || viewport.y <= F::zero() {
        return Err(ConfigError::InvalidViewport);
    }
    Ok(())
}
