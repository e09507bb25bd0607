use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Last-known pointer state, overwritten every frame. Only the latest
/// position matters to the simulation, so events coalesce naturally.
#[derive(Resource, Default, Clone, Copy)]
pub struct PointerState {
    /// Cursor position in surface coordinates (top-left origin, +y down).
    pub pos: Vec2,
    /// Left button currently held.
    pub held: bool,
}

/// Poll the cursor and button state into [`PointerState`]. Window cursor
/// coordinates are already top-left-origin, matching surface coordinates.
pub fn capture_pointer(
    window: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut pointer: ResMut<PointerState>,
) {
    let Ok(window) = window.single() else { return };
    if let Some(cursor) = window.cursor_position() {
        pointer.pos = cursor;
    }
    pointer.held = mouse.pressed(MouseButton::Left);
}
