//! Interactive Verlet cloth for games and toys.
//!
//! `drape` simulates a rectangular mesh of point masses tied together by
//! rope constraints, hanging from pinned anchors on its top row. Each frame
//! integrates the particles under gravity, relaxes the constraints a fixed
//! number of times while clamping everything into the viewport, rebuilds a
//! bucket grid for picking, and lets a pointer drag one particle around.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Constraint relaxation**: One-sided (rope) and two-sided (rod) distance constraints
//! - **Viewport bounds**: Hard walls and a floor with friction
//! - **Spatial grid**: Per-frame bucket grid for particle picking
//! - **Dragging**: Grab a particle under the pointer and move it directly
//! - **Observable**: Monitor frames via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use drape::{SimulationWorld, SimConfig, MeshConfig, NoOpStepObserver, Vec2};
//!
//! let config = SimConfig::new().with_viewport(Vec2::new(800.0f32, 600.0));
//! let mut world = SimulationWorld::new(config, MeshConfig::default()).unwrap();
//! for _ in 0..60 {
//!     world.frame(&mut NoOpStepObserver);
//! }
//! assert_eq!(world.telemetry().particles, 25 * 20);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod solver;
pub mod spatial;
pub mod mesh;
pub mod drag;
pub mod world;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use constraint::{DistanceConstraint, BoundsConstraint};
pub use spatial::SpatialGrid;
pub use mesh::{ClothMesh, MeshConfig};
pub use drag::{DragController, DragState, Tool};
pub use world::{SimulationWorld, Telemetry};
pub use config::SimConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::ConfigError;
