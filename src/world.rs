//! The simulation world: one cloth, its spatial index and the drag gesture.

use core::fmt;

use crate::float::Float;
use crate::vec::Vec2;
use crate::particle::Particle;
use crate::constraint::BoundsConstraint;
use crate::mesh::{ClothMesh, MeshConfig};
use crate::spatial::SpatialGrid;
use crate::drag::{DragController, Tool};
use crate::config::SimConfig;
use crate::observer::StepObserver;
use crate::error::ConfigError;
use crate::solver;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Read-only counters for a debug overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Telemetry<F> {
    pub particles: usize,
    pub constraints: usize,
    pub gravity: Vec2<F>,
    pub dragging: bool,
}

impl<F: Float> fmt::Display for Telemetry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "particles: {} | constraints: {}", self.particles, self.constraints)?;
        writeln!(f, "gravity: {}, {}", self.gravity.x, self.gravity.y)?;
        write!(f, "dragging: {}", self.dragging)
    }
}

/// Owns all simulation state and runs it one frame at a time.
///
/// A frame integrates every particle, runs the configured number of
/// relax-and-clamp rounds, rebuilds the spatial grid and finally applies
/// the drag override. Pausing only decides whether [`frame`](Self::frame)
/// steps; it never touches the state.
pub struct SimulationWorld<F: Float> {
    config: SimConfig<F>,
    mesh_config: MeshConfig<F>,
    mesh: ClothMesh<F>,
    grid: SpatialGrid<F>,
    drag: DragController,
    tool: Tool,
    pointer: Vec2<F>,
    paused: bool,
    rng: SmallRng,
}

impl<F: Float> SimulationWorld<F> {
    pub fn new(config: SimConfig<F>, mesh_config: MeshConfig<F>) -> Result<Self, ConfigError> {
        config.validate()?;
        mesh_config.validate()?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mesh = ClothMesh::build(&mesh_config, config.viewport.x, &mut rng)?;
        let mut world = SimulationWorld {
            grid: SpatialGrid::new(config.cell_size),
            config,
            mesh_config,
            mesh,
            drag: DragController::new(),
            tool: Tool::default(),
            pointer: Vec2::zero(),
            paused: false,
            rng,
        };
        world.settle();
        log::debug!(
            "cloth world created: {} particles, {} constraints",
            world.mesh.particle_count(),
            world.mesh.constraint_count()
        );
        Ok(world)
    }

    /// Clamp the fresh mesh into the viewport and index it.
    fn settle(&mut self) {
        let bounds = self.bounds();
        solver::clamp(self.mesh.particles_mut(), &bounds);
        self.grid.rebuild(self.config.viewport, self.mesh.particles());
    }

    fn bounds(&self) -> BoundsConstraint<F> {
        BoundsConstraint::viewport(self.config.viewport, self.config.margin, self.config.friction)
    }

    /// Run one full frame.
    pub fn step<O: StepObserver>(&mut self, observer: &mut O) {
        let bounds = self.bounds();

        solver::integrate(self.mesh.particles_mut(), self.config.gravity);
        observer.on_integrate();

        let (particles, constraints) = self.mesh.parts_mut();
        solver::solve(
            particles,
            constraints,
            &bounds,
            self.config.iterations,
            &mut self.rng,
            observer,
        );

        let indexed = self.grid.rebuild(self.config.viewport, self.mesh.particles());
        observer.on_grid_rebuilt(indexed);

        if let Some(index) = self.drag.apply(
            self.pointer,
            &self.grid,
            self.mesh.particles_mut(),
            self.config.pick_radius_sq,
        ) {
            log::trace!("drag picked particle {}", index);
            observer.on_drag_pick(index);
        }

        observer.on_step_complete();
    }

    /// Step unless paused. Returns whether a step ran.
    pub fn frame<O: StepObserver>(&mut self, observer: &mut O) -> bool {
        if self.paused {
            return false;
        }
        self.step(observer);
        true
    }

    /// Run exactly one step, paused or not.
    pub fn advance<O: StepObserver>(&mut self, observer: &mut O) {
        self.step(observer);
    }

    pub fn pause(&mut self) {
        if !self.paused {
            log::debug!("simulation paused");
        }
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if self.paused {
            log::debug!("simulation resumed");
        }
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Discard the mesh and build a fresh one from the current configs.
    ///
    /// Gravity and the other live settings survive. An active drag gesture
    /// keeps going but has to pick a new particle. While paused, one step
    /// runs so the new mesh is visible.
    pub fn reset(&mut self) {
        let rebuilt = self.mesh.rebuild(&self.mesh_config, self.config.viewport.x, &mut self.rng);
        if let Err(err) = rebuilt {
            // Configs are validated before they are stored.
            log::warn!("cloth reset skipped: {}", err);
            return;
        }
        self.drag.release_particle();
        self.settle();
        log::debug!(
            "cloth reset: {}x{} mesh, {} constraints",
            self.mesh.width(),
            self.mesh.height(),
            self.mesh.constraint_count()
        );
        if self.paused {
            self.step(&mut crate::observer::NoOpStepObserver);
        }
    }

    /// Store a new mesh shape and rebuild with it.
    pub fn apply_mesh_config(&mut self, mesh_config: MeshConfig<F>) -> Result<(), ConfigError> {
        if let Err(err) = mesh_config.validate() {
            log::warn!("rejected mesh config: {}", err);
            return Err(err);
        }
        self.mesh_config = mesh_config;
        self.reset();
        Ok(())
    }

    /// Replace the live settings. The mesh is kept; the grid is re-indexed
    /// with the new viewport and cell size. A changed seed restarts the RNG,
    /// so the next reset builds the mesh that seed gives a fresh world.
    pub fn apply_config(&mut self, config: SimConfig<F>) -> Result<(), ConfigError> {
        if let Err(err) = config.validate() {
            log::warn!("rejected simulation config: {}", err);
            return Err(err);
        }
        if config.seed != self.config.seed {
            log::debug!("reseeding simulation rng with {:#x}", config.seed);
            self.rng = SmallRng::seed_from_u64(config.seed);
        }
        self.grid = SpatialGrid::new(config.cell_size);
        self.config = config;
        self.grid.rebuild(self.config.viewport, self.mesh.particles());
        log::debug!("simulation config applied: {} iterations", self.config.iterations);
        Ok(())
    }

    pub fn set_gravity(&mut self, gravity: Vec2<F>) {
        log::trace!("gravity set to ({}, {})", gravity.x, gravity.y);
        self.config.gravity = gravity;
    }

    pub fn set_gravity_x(&mut self, x: F) {
        self.set_gravity(Vec2::new(x, self.config.gravity.y));
    }

    pub fn set_gravity_y(&mut self, y: F) {
        self.set_gravity(Vec2::new(self.config.gravity.x, y));
    }

    /// Follow a viewport resize. Particles are not moved; the grid is rebuilt.
    pub fn resize(&mut self, viewport: Vec2<F>) -> Result<(), ConfigError> {
        let resized = SimConfig { viewport, ..self.config.clone() };
        if let Err(err) = resized.validate() {
            log::warn!("rejected viewport resize: {}", err);
            return Err(err);
        }
        self.config = resized;
        self.grid.rebuild(self.config.viewport, self.mesh.particles());
        Ok(())
    }

    pub fn set_pointer(&mut self, pointer: Vec2<F>) {
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> Vec2<F> {
        self.pointer
    }

    pub fn pointer_in_viewport(&self) -> bool {
        let p = self.pointer;
        p.x >= F::zero() && p.x < self.config.viewport.x && p.y >= F::zero() && p.y < self.config.viewport.y
    }

    /// Start a drag gesture at the current pointer. Ignored outside the
    /// viewport or when the active tool does not drag.
    pub fn begin_drag(&mut self) -> bool {
        if !self.pointer_in_viewport() {
            return false;
        }
        self.drag.begin(self.tool)
    }

    pub fn end_drag(&mut self) {
        if let Some(index) = self.drag.held() {
            log::trace!("drag released particle {}", index);
        }
        self.drag.end();
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Grid lookup against the last rebuild.
    pub fn particle_at(&self, point: Vec2<F>) -> Option<usize> {
        self.grid.particle_near(point, self.config.pick_radius_sq, self.mesh.particles())
    }

    pub fn telemetry(&self) -> Telemetry<F> {
        Telemetry {
            particles: self.mesh.particle_count(),
            constraints: self.mesh.constraint_count(),
            gravity: self.config.gravity,
            dragging: self.drag.is_dragging(),
        }
    }

    pub fn particles(&self) -> &[Particle<F>] {
        self.mesh.particles()
    }

    pub fn segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.mesh.segments()
    }

    pub fn mesh(&self) -> &ClothMesh<F> { &self.mesh }
    pub fn grid(&self) -> &SpatialGrid<F> { &self.grid }
    pub fn drag(&self) -> &DragController { &self.drag }
    pub fn config(&self) -> &SimConfig<F> { &self.config }
    pub fn mesh_config(&self) -> &MeshConfig<F> { &self.mesh_config }
}
