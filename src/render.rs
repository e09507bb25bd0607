use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants;
use crate::surface::{RetainedSurface, Stroke};

/// Startup: validate the tuning constants, then set up the 2D view over a
/// black sky.
pub fn setup(mut commands: Commands) {
    constants::sanity();
    commands.spawn(Camera2d);
    info!("🎆 fireworks ready, launching every {} ticks", constants::AUTO_LAUNCH_INTERVAL);
}

/// Replay every retained stroke through gizmos. Runs after the scene tick
/// so the frame shows the strokes the tick just recorded, on top of the
/// faded remains of earlier frames.
pub fn replay_surface(
    window: Query<&Window, With<PrimaryWindow>>,
    surface: Res<RetainedSurface>,
    mut gizmos: Gizmos,
) {
    let Ok(window) = window.single() else { return };
    let bounds = Vec2::new(window.width(), window.height());

    for stroke in surface.strokes() {
        match *stroke {
            Stroke::Line { from, to, color } => {
                gizmos.line_2d(to_world(from, bounds), to_world(to, bounds), color);
            }
            Stroke::Circle { center, radius, color } => {
                gizmos.circle_2d(
                    Isometry2d::from_translation(to_world(center, bounds)),
                    radius,
                    color,
                );
            }
        }
    }
}

/// Surface coordinates (top-left origin, +y down) to world coordinates
/// (window-centered, +y up).
fn to_world(p: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(p.x - bounds.x / 2.0, bounds.y / 2.0 - p.y)
}
