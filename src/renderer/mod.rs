//! Rendering module
//!
//! Draws the simulation onto anything that implements [`Surface`]: the browser
//! 2D canvas on the web build, a command recorder everywhere else.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod scene;

pub use recording::{DrawCommand, RecordingSurface};
pub use scene::render;

/// Primitive drawing calls the game needs. Colours are CSS colour strings.
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
}
