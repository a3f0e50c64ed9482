//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation frames.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after all particles have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each relax-and-clamp round.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called after the spatial grid was rebuilt with `indexed` particles.
    fn on_grid_rebuilt(&mut self, _indexed: usize) {}

    /// Called when a drag gesture latches onto particle `index`.
    fn on_drag_pick(&mut self, _index: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
