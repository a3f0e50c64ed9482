use drape::{MeshConfig, NoOpStepObserver, SimConfig, SimulationWorld, Vec2};
use wasm_bindgen::prelude::*;

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    world: SimulationWorld<f32>,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<ClothDemo, JsValue> {
        let config = SimConfig::new().with_viewport(Vec2::new(width, height));
        let world = SimulationWorld::new(config, MeshConfig::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(ClothDemo { world })
    }

    /// Runs one frame unless paused. The simulation is frame-based, so no dt.
    pub fn update(&mut self) -> bool {
        self.world.frame(&mut NoOpStepObserver)
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.world.set_pointer(Vec2::new(x, y));
    }

    pub fn begin_drag(&mut self) -> bool {
        self.world.begin_drag()
    }

    pub fn end_drag(&mut self) {
        self.world.end_drag();
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.world.toggle_pause()
    }

    pub fn reset(&mut self) {
        self.world.reset();
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.world.set_gravity(Vec2::new(x, y));
    }

    pub fn set_mesh(
        &mut self,
        width: usize,
        height: usize,
        spacing: f32,
        rest_length: f32,
        attach_stride: usize,
    ) -> Result<(), JsValue> {
        let mesh = MeshConfig::new(width, height)
            .with_spacing(spacing)
            .with_rest_length(rest_length)
            .with_attach_stride(attach_stride);
        self.world
            .apply_mesh_config(mesh)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.world
            .resize(Vec2::new(width, height))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Returns flat [x0, y0, x1, y1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        let particles = self.world.particles();
        let mut out = Vec::with_capacity(particles.len() * 2);
        for p in particles {
            out.push(p.pos.x);
            out.push(p.pos.y);
        }
        out
    }

    /// Returns flat [ax, ay, bx, by, ...], one quadruple per constraint
    pub fn segments(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.world.mesh().constraint_count() * 4);
        for (a, b) in self.world.segments() {
            out.extend_from_slice(&[a.x, a.y, b.x, b.y]);
        }
        out
    }

    pub fn telemetry(&self) -> String {
        self.world.telemetry().to_string()
    }

    pub fn particle_count(&self) -> usize {
        self.world.mesh().particle_count()
    }
}
