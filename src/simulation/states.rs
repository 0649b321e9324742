//! Core state types for the two-body simulation.
//!
//! Defines the scene snapshot and its parts:
//! - `Body`   a circle (attractor, or the geometric part of a planet)
//! - `Planet` a body plus velocity and last computed acceleration
//! - `Camera` the world-space view window
//! - `SimulationState` camera + attractor + planets
//!
//! Every type here is a plain value. Cloning a `SimulationState` therefore
//! yields a graph that shares nothing with its source, and `copy_from`
//! overwrites a state in place without reallocating the planet list.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// RGBA color, channels in 0..=255 and alpha in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(255, 255, 255)
    }
}

/// What a renderer needs to draw a circle
pub trait Drawable {
    fn position(&self) -> NVec2;
    fn radius(&self) -> f64;
    fn color(&self) -> Color;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: NVec2, // position
    pub radius: f64, // visual radius
    pub color: Color, // owned, never shared between bodies
}

impl Body {
    pub fn new(pos: NVec2, radius: f64, color: Color) -> Self {
        Self { pos, radius, color }
    }
}

impl Drawable for Body {
    fn position(&self) -> NVec2 {
        self.pos
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn color(&self) -> Color {
        self.color
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    pub body: Body, // geometry and color
    pub vel: NVec2, // velocity
    pub acc: NVec2, // last computed acceleration, telemetry only
}

impl Planet {
    pub fn new(pos: NVec2, vel: NVec2, radius: f64, color: Color) -> Self {
        Self {
            body: Body::new(pos, radius, color),
            vel,
            acc: NVec2::zeros(),
        }
    }

    pub fn pos(&self) -> NVec2 {
        self.body.pos
    }
}

impl Drawable for Planet {
    fn position(&self) -> NVec2 {
        self.body.pos
    }

    fn radius(&self) -> f64 {
        self.body.radius
    }

    fn color(&self) -> Color {
        self.body.color
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pos: NVec2, // center of the view in world units
    pub view_height: f64, // visible world height
    pub aspect_ratio: f64, // width / height
}

impl Camera {
    pub fn new(pos: NVec2, view_height: f64, aspect_ratio: f64) -> Self {
        Self { pos, view_height, aspect_ratio }
    }

    /// Visible world width, derived from height and aspect ratio
    pub fn view_width(&self) -> f64 {
        self.view_height * self.aspect_ratio
    }
}

/// World-space line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: NVec2,
    pub to: NVec2,
}

impl Line {
    pub fn new(from: NVec2, to: NVec2) -> Self {
        Self { from, to }
    }
}

/// Snapshot of the whole scene
///
/// The planet count must stay the same across the buffers a scheduler keeps
/// in lock-step; `copy_from` and `blend_from` assume it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub camera: Camera,
    pub attractor: Body,
    pub planets: Vec<Planet>,
}

impl SimulationState {
    pub fn new(camera: Camera, attractor: Body, planets: Vec<Planet>) -> Self {
        Self { camera, attractor, planets }
    }

    /// Overwrite `self` with `other` in place, reusing the planet buffer
    pub fn copy_from(&mut self, other: &SimulationState) {
        debug_assert_eq!(self.planets.len(), other.planets.len(), "buffered states out of lock-step");
        self.camera = other.camera;
        self.attractor = other.attractor;
        self.planets.clone_from(&other.planets);
    }

    /// Write the linear blend of `prev` and `curr` at factor `t` into `self`
    ///
    /// Camera position, view height and every body position are blended.
    /// Radius, color, aspect ratio, velocity and acceleration come from `prev`.
    pub fn blend_from(&mut self, prev: &SimulationState, curr: &SimulationState, t: f64) {
        debug_assert_eq!(prev.planets.len(), curr.planets.len(), "buffered states out of lock-step");
        self.copy_from(prev);

        self.camera.pos = lerp(prev.camera.pos, curr.camera.pos, t);
        self.camera.view_height = prev.camera.view_height * (1.0 - t) + curr.camera.view_height * t;
        self.attractor.pos = lerp(prev.attractor.pos, curr.attractor.pos, t);

        for (out, (p, c)) in self.planets.iter_mut().zip(prev.planets.iter().zip(curr.planets.iter())) {
            out.body.pos = lerp(p.body.pos, c.body.pos, t);
        }
    }
}

fn lerp(a: NVec2, b: NVec2, t: f64) -> NVec2 {
    a * (1.0 - t) + b * t
}
