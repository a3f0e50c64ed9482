//! Configuration errors.
//!
//! The physics itself has no failure path; these cover settings that would
//! make a mesh or grid impossible to build.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("mesh must have at least one particle, got {width}x{height}")]
    EmptyMesh { width: usize, height: usize },

    #[error("attach stride must be at least 1")]
    ZeroAttachStride,

    #[error("particle spacing must be positive and finite")]
    NonPositiveSpacing,

    #[error("constraint rest length must be positive and finite")]
    NonPositiveRestLength,

    #[error("inverse mass must be non-negative and finite")]
    NegativeInverseMass,

    #[error("viewport must have positive, finite width and height")]
    InvalidViewport,

    #[error("spatial grid cell size must be positive and finite")]
    NonPositiveCellSize,

    #[error("boundary margin must be non-negative and fit inside the viewport")]
    InvalidMargin,

    #[error("pick radius must be positive and finite")]
    NonPositivePickRadius,

    #[error("at least one relax-and-clamp iteration is required")]
    ZeroIterations,

    #[error("spatial grid would need more than {max} cells")]
    GridTooLarge { max: usize },
}
