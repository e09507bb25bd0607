use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::Rng;

use crate::constants::*;
use crate::firework::{Firework, FireworkStep};
use crate::input::PointerState;
use crate::math_utils::{random_range, wrap_hue};
use crate::particle::{Particle, ParticleStep};
use crate::surface::{RetainedSurface, Surface};

/// All live simulation state, advanced exactly one tick per frame. Single
/// owner of the firework and particle collections; nothing outside the
/// scene retains references to entities.
#[derive(Resource)]
pub struct Scene {
    pub fireworks: Vec<Firework>,
    pub particles: Vec<Particle>,
    /// Scene-wide hue, cycled a little every tick so successive launches
    /// drift through the spectrum.
    pub hue: f32,
    pub total_launches: u64,
    auto_tick: u32,
    pointer_tick: u32,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            fireworks: Vec::new(),
            particles: Vec::new(),
            hue: 120.0,
            total_launches: 0,
            auto_tick: 0,
            pointer_tick: 0,
        }
    }
}

impl Scene {
    /// One frame: fade the surface, draw-then-update every entity (retiring
    /// the finished ones), cycle the hue, then evaluate the two launch
    /// gates. `bounds` is the surface size in surface coordinates.
    pub fn tick(
        &mut self,
        bounds: Vec2,
        pointer: &PointerState,
        rng: &mut impl Rng,
        surface: &mut dyn Surface,
    ) {
        surface.fade(TRAIL_FADE_ALPHA);

        // Reverse iteration so in-place removal never shifts an unvisited
        // index.
        for i in (0..self.fireworks.len()).rev() {
            self.fireworks[i].draw(surface, self.hue);
            if self.fireworks[i].update() == FireworkStep::Arrived {
                let firework = self.fireworks.remove(i);
                // Burst at the declared target, not the last drawn
                // position: arrival overshoot must never show.
                self.spawn_burst(firework.target, rng);
                debug!(
                    "burst at {:?}, {} particles live",
                    firework.target,
                    self.particles.len()
                );
            }
        }

        for i in (0..self.particles.len()).rev() {
            self.particles[i].draw(surface);
            if self.particles[i].update() == ParticleStep::Expired {
                self.particles.remove(i);
            }
        }

        self.hue = wrap_hue(self.hue + HUE_STEP);

        // Scheduled launches pause while the pointer is held, but the
        // counter keeps running so one follows promptly after release.
        self.auto_tick += 1;
        if self.auto_tick >= AUTO_LAUNCH_INTERVAL && !pointer.held {
            let target = Vec2::new(
                random_range(rng, 0.0, bounds.x),
                random_range(rng, 0.0, bounds.y / 2.0),
            );
            self.launch(bounds, target, rng);
            self.auto_tick = 0;
        }

        self.pointer_tick += 1;
        if self.pointer_tick >= POINTER_LAUNCH_INTERVAL && pointer.held {
            self.launch(bounds, pointer.pos, rng);
            self.pointer_tick = 0;
        }
    }

    /// Launch a rocket from bottom-center toward `target`.
    pub fn launch(&mut self, bounds: Vec2, target: Vec2, rng: &mut impl Rng) {
        let origin = Vec2::new(bounds.x / 2.0, bounds.y);
        self.fireworks
            .push(Firework::new(origin, target, FIREWORK_BASE_SPEED, rng));
        self.total_launches += 1;
        debug!("launch #{} toward {:?}", self.total_launches, target);
    }

    /// The particle batch created the instant a firework arrives.
    pub fn spawn_burst(&mut self, pos: Vec2, rng: &mut impl Rng) {
        for _ in 0..PARTICLE_COUNT {
            self.particles.push(Particle::new(pos, self.hue, rng));
        }
    }
}

/// Per-frame driver: the Bevy frame callback that advances the scene by one
/// tick against the retained surface.
pub fn advance_scene(
    window: Query<&Window, With<PrimaryWindow>>,
    pointer: Res<PointerState>,
    mut scene: ResMut<Scene>,
    mut surface: ResMut<RetainedSurface>,
) {
    let Ok(window) = window.single() else { return };
    let bounds = Vec2::new(window.width(), window.height());
    let mut rng = rand::thread_rng();
    scene.tick(bounds, &pointer, &mut rng, &mut *surface);
}
