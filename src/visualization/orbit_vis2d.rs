use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::simulation::elements::SliderValues;
use crate::simulation::scenario::Simulation;
use crate::simulation::scheduler::UserInput;
use crate::simulation::states::{Camera as WorldCamera, Color as BodyColor, Drawable, Line};
use crate::visualization::render::{render_frame, RenderStyle, Renderer};

pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 720.0;

const AXIS_STEP: f64 = 0.5;
const ECCENTRICITY_STEP: f64 = 0.05;
const ANGLE_STEP_DEG: f64 = 5.0;

#[derive(Resource, Deref)]
struct ViewerStyle(RenderStyle);

pub fn run_2d(simulation: Simulation) {
    info!("run_2d: starting Bevy 2D viewer with {} planets", simulation.scheduler.current().planets.len());

    App::new()
        .insert_resource(simulation)
        .insert_resource(ViewerStyle(RenderStyle::default()))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "orbitsim".into(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_camera_system)
        .add_systems(Update, (keyboard_input_system, frame_system).chain())
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

/// Space toggles, Q/A W/S E/D R/F nudge the four elements of the first planet
fn keyboard_input_system(keys: Res<ButtonInput<KeyCode>>, mut sim: ResMut<Simulation>) {
    if keys.just_pressed(KeyCode::Space) {
        // toggling cannot fail
        let _ = sim.apply_input(UserInput::ToggleRunning);
    }

    let edits: [(KeyCode, fn(&mut SliderValues)); 8] = [
        (KeyCode::KeyQ, |s| s.semi_major_axis += AXIS_STEP),
        (KeyCode::KeyA, |s| s.semi_major_axis -= AXIS_STEP),
        (KeyCode::KeyW, |s| s.eccentricity += ECCENTRICITY_STEP),
        (KeyCode::KeyS, |s| s.eccentricity -= ECCENTRICITY_STEP),
        (KeyCode::KeyE, |s| s.argument_of_periapsis_deg += ANGLE_STEP_DEG),
        (KeyCode::KeyD, |s| s.argument_of_periapsis_deg -= ANGLE_STEP_DEG),
        (KeyCode::KeyR, |s| s.true_anomaly_deg = (s.true_anomaly_deg + ANGLE_STEP_DEG).rem_euclid(360.0)),
        (KeyCode::KeyF, |s| s.true_anomaly_deg = (s.true_anomaly_deg - ANGLE_STEP_DEG).rem_euclid(360.0)),
    ];

    for (key, edit) in edits {
        if keys.just_pressed(key) && sim.edit_elements(0, edit).is_ok() {
            if let Some(el) = sim.elements(0) {
                let v = el.to_slider_values();
                info!(
                    "a = {:.2}, e = {:.2}, periapsis = {:.0} deg, true anomaly = {:.0} deg",
                    v.semi_major_axis, v.eccentricity, v.argument_of_periapsis_deg, v.true_anomaly_deg
                );
            }
        }
    }
}

fn frame_system(
    time: Res<Time>,
    style: Res<ViewerStyle>,
    mut sim: ResMut<Simulation>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let screen = Vec2::new(window.width(), window.height());

    match sim.advance(time.delta_seconds_f64()) {
        Ok(frame) => {
            let mut renderer = GizmoRenderer { gizmos: &mut gizmos, screen };
            render_frame(&mut renderer, &frame, &style);
        }
        Err(e) => error!("simulation halted: {e}"),
    }
}

/// Immediate-mode renderer on top of Bevy gizmos
///
/// World coordinates are mapped so the camera view fills the window; the
/// Bevy 2D camera puts the origin at the window center with y up.
struct GizmoRenderer<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    screen: Vec2,
}

impl GizmoRenderer<'_, '_, '_> {
    fn to_screen(&self, camera: &WorldCamera, x: f64, y: f64) -> Vec2 {
        Vec2::new(
            ((x - camera.pos.x) / camera.view_width()) as f32 * self.screen.x,
            ((y - camera.pos.y) / camera.view_height) as f32 * self.screen.y,
        )
    }
}

fn to_bevy_color(c: BodyColor) -> Color {
    Color::srgba(c.r as f32 / 255.0, c.g as f32 / 255.0, c.b as f32 / 255.0, c.a)
}

impl Renderer for GizmoRenderer<'_, '_, '_> {
    fn clear(&mut self) {
        // gizmos only live for one frame and ClearColor wipes the background
    }

    fn draw_body(&mut self, camera: &WorldCamera, body: &dyn Drawable, color: BodyColor) {
        let p = body.position();
        let center = self.to_screen(camera, p.x, p.y);
        let radius = (body.radius() / camera.view_height) as f32 * self.screen.y;
        self.gizmos.circle_2d(center, radius, to_bevy_color(color));
    }

    fn draw_lines(&mut self, camera: &WorldCamera, lines: &[Line], color: BodyColor) {
        let color = to_bevy_color(color);
        for line in lines {
            let from = self.to_screen(camera, line.from.x, line.from.y);
            let to = self.to_screen(camera, line.to.x, line.to.y);
            self.gizmos.line_2d(from, to, color);
        }
    }
}
