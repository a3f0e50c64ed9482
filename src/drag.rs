//! Pointer drag gesture: pick a particle once, then pin it to the pointer.

use crate::float::Float;
use crate::vec::Vec2;
use crate::particle::Particle;
use crate::spatial::SpatialGrid;
use serde::{Deserialize, Serialize};

/// Pointer tools. Only dragging is implemented.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Drag,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// A gesture is active. `held` stays `None` until a particle is found
    /// under the pointer, then sticks for the rest of the gesture.
    Dragging { held: Option<usize> },
}

#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        DragController { state: DragState::Idle }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn held(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { held } => held,
            DragState::Idle => None,
        }
    }

    /// Start a gesture. Returns `false` when `tool` does not drag or a
    /// gesture is already running.
    pub fn begin(&mut self, tool: Tool) -> bool {
        match (tool, self.state) {
            (Tool::Drag, DragState::Idle) => {
                self.state = DragState::Dragging { held: None };
                true
            }
            _ => false,
        }
    }

    pub fn end(&mut self) {
        self.state = DragState::Idle;
    }

    /// Forget the held particle but keep the gesture going.
    pub fn release_particle(&mut self) {
        if let DragState::Dragging { held } = &mut self.state {
            *held = None;
        }
    }

    /// Per-frame drag update, run after the grid rebuild.
    ///
    /// With a particle held, its position is overwritten with `pointer`
    /// regardless of its mass; `prev_pos` is left alone so the particle
    /// keeps the pointer's motion when released. Without one, the grid is
    /// queried and a hit is remembered; it starts following the pointer on
    /// the next frame. Returns the index picked this frame, if any.
    pub fn apply<F: Float>(
        &mut self,
        pointer: Vec2<F>,
        grid: &SpatialGrid<F>,
        particles: &mut [Particle<F>],
        radius_sq: F,
    ) -> Option<usize> {
        let DragState::Dragging { held } = &mut self.state else {
            return None;
        };
        match *held {
            Some(i) => {
                match particles.get_mut(i) {
                    Some(p) => p.pos = pointer,
                    None => *held = None,
                }
                None
            }
            None => {
                let picked = grid.particle_near(pointer, radius_sq, particles);
                *held = picked;
                picked
            }
        }
    }
}
