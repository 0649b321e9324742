pub mod render;
pub mod orbit_vis2d;
