//! Handles into the excluded rendering layer.
//!
//! The simulation never interprets these; it only passes them back through
//! `DrawTarget::draw` once per visible body per frame.

use glam::Mat4;

/// Opaque handle to a mesh owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u32);

/// Opaque handle to a material owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u32);

/// Sink for per-frame draw calls, implemented by the rendering host
pub trait DrawTarget {
    fn draw(&mut self, shape: ShapeId, pose: Mat4, material: MaterialId);
}

/// Draw sink that records calls, for tests and headless runs
#[derive(Debug, Default)]
pub struct RecordingDrawTarget {
    pub calls: Vec<(ShapeId, Mat4, MaterialId)>,
}

impl RecordingDrawTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawTarget for RecordingDrawTarget {
    fn draw(&mut self, shape: ShapeId, pose: Mat4, material: MaterialId) {
        self.calls.push((shape, pose, material));
    }
}
