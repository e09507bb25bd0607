use bevy::prelude::*;

mod constants;
mod firework;
mod input;
mod math_utils;
mod particle;
mod render;
mod scene;
mod surface;
mod trail;

use input::PointerState;
use scene::Scene;
use surface::RetainedSurface;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "fireworks".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .init_resource::<Scene>()
        .init_resource::<PointerState>()
        .init_resource::<RetainedSurface>()
        .add_systems(Startup, render::setup)
        .add_systems(
            Update,
            (
                input::capture_pointer,
                scene::advance_scene,
                render::replay_surface,
            )
                .chain(),
        )
        .run();
}
