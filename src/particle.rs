use bevy::prelude::*;
use rand::Rng;

use crate::constants::*;
use crate::math_utils::{random_range, wrap_hue};
use crate::surface::Surface;
use crate::trail::Trail;

/// Outcome of advancing a particle by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleStep {
    Continue,
    /// Fully faded; the scene drops it.
    Expired,
}

/// One burst fragment: flies out on a random bearing, slowed by friction,
/// pulled down by gravity, fading by a fixed per-tick decay. Decay is
/// strictly positive, so every particle expires in a bounded number of
/// ticks.
pub struct Particle {
    pub pos: Vec2,
    /// Ballistic bearing, fixed at creation.
    pub angle: f32,
    pub speed: f32,
    pub hue: f32,
    /// HSL lightness, percent.
    pub brightness: f32,
    pub opacity: f32,
    /// Opacity lost per tick.
    pub decay: f32,
    pub trail: Trail,
}

impl Particle {
    /// Spawn at the explosion site. Speed, decay, brightness and hue are
    /// drawn independently per particle, which is what gives one burst its
    /// internal variety.
    pub fn new(pos: Vec2, global_hue: f32, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            angle: random_range(rng, 0.0, std::f32::consts::TAU),
            speed: random_range(rng, PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX),
            hue: wrap_hue(random_range(
                rng,
                global_hue - PARTICLE_HUE_VARIANCE,
                global_hue + PARTICLE_HUE_VARIANCE,
            )),
            brightness: random_range(rng, PARTICLE_BRIGHTNESS_MIN, PARTICLE_BRIGHTNESS_MAX),
            opacity: PARTICLE_INITIAL_OPACITY,
            decay: random_range(rng, PARTICLE_DECAY_MIN, PARTICLE_DECAY_MAX),
            trail: Trail::filled(pos, PARTICLE_TRAIL_LENGTH),
        }
    }

    pub fn update(&mut self) -> ParticleStep {
        self.trail.shift(self.pos);
        self.speed *= PARTICLE_FRICTION;
        self.pos.x += self.angle.cos() * self.speed;
        self.pos.y += self.angle.sin() * self.speed + PARTICLE_GRAVITY;
        self.opacity -= self.decay;
        if self.opacity <= self.decay {
            ParticleStep::Expired
        } else {
            ParticleStep::Continue
        }
    }

    /// One streak from the far end of the trail to the current position.
    /// Hue and brightness are fixed at creation; only alpha follows the
    /// fade-out. Pure read of current state.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let color = Hsla::new(self.hue, 1.0, self.brightness / 100.0, self.opacity);
        surface.stroke_line(self.trail.oldest(), self.pos, color);
    }
}
