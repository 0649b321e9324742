//! Renderer capability and the per-frame draw order
//!
//! The core only hands out world-space geometry and a world-space camera.
//! Mapping to screen coordinates belongs to the `Renderer` implementation.

use crate::simulation::scenario::Frame;
use crate::simulation::states::{Camera, Color, Drawable, Line};

/// Drawing backend consumed by the simulation
pub trait Renderer {
    /// Start a new frame
    fn clear(&mut self);
    fn draw_body(&mut self, camera: &Camera, body: &dyn Drawable, color: Color);
    fn draw_lines(&mut self, camera: &Camera, lines: &[Line], color: Color);
}

/// Colors and scaling for the overlays
#[derive(Debug, Clone)]
pub struct RenderStyle {
    pub vector_scale: f64, // length multiplier for the debug vectors
    pub vector_color: Color,
    pub trajectory_color: Color,
    pub show_vectors: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            vector_scale: 10.0,
            vector_color: Color::rgb(255, 0, 0),
            trajectory_color: Color::rgb(145, 250, 112),
            show_vectors: true,
        }
    }
}

/// Velocity and acceleration vectors of the first planet, scaled for display
pub fn debug_vectors(frame: &Frame<'_>, scale: f64) -> Option<[Line; 2]> {
    let p = frame.state.planets.first()?;
    let origin = p.pos();
    Some([
        Line::new(origin, origin + p.vel * scale),
        Line::new(origin, origin + p.acc * scale),
    ])
}

/// Draw one frame: attractor, planets, debug vectors, then the path preview
pub fn render_frame<R: Renderer + ?Sized>(renderer: &mut R, frame: &Frame<'_>, style: &RenderStyle) {
    let state = frame.state;
    let camera = &state.camera;

    renderer.clear();
    renderer.draw_body(camera, &state.attractor, state.attractor.color);
    for planet in &state.planets {
        renderer.draw_body(camera, planet, planet.body.color);
    }

    if style.show_vectors {
        if let Some(vectors) = debug_vectors(frame, style.vector_scale) {
            renderer.draw_lines(camera, &vectors, style.vector_color);
        }
    }

    // the preview comes from the authoritative state, so it uses its camera
    renderer.draw_lines(frame.trajectory_camera, frame.trajectory, style.trajectory_color);
}
