use bevy::prelude::*;
use rand::Rng;

use crate::constants::*;
use crate::math_utils::random_range;
use crate::surface::Surface;
use crate::trail::Trail;

/// Outcome of advancing a firework by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireworkStep {
    Continue,
    /// Reached its target; the scene retires it and spawns the burst there.
    Arrived,
}

/// A rocket in flight from origin to target along a fixed bearing, gaining
/// speed every tick. Arrival is decided by straight-line distance, not
/// elapsed time, so the rocket always reaches its declared target.
pub struct Firework {
    pub pos: Vec2,
    pub origin: Vec2,
    pub target: Vec2,
    /// Launch bearing, fixed at creation.
    pub angle: f32,
    pub speed: f32,
    pub distance_to_target: f32,
    pub distance_traveled: f32,
    /// HSL lightness, percent.
    pub brightness: f32,
    /// Current radius of the pulsing ring at the target.
    pub target_radius: f32,
    pub trail: Trail,
}

impl Firework {
    pub fn new(origin: Vec2, target: Vec2, speed: f32, rng: &mut impl Rng) -> Self {
        let delta = target - origin;
        Self {
            pos: origin,
            origin,
            target,
            angle: delta.y.atan2(delta.x),
            speed,
            distance_to_target: origin.distance(target),
            distance_traveled: 0.0,
            brightness: random_range(rng, FIREWORK_BRIGHTNESS_MIN, FIREWORK_BRIGHTNESS_MAX),
            target_radius: TARGET_RADIUS_INITIAL,
            trail: Trail::filled(origin, FIREWORK_TRAIL_LENGTH),
        }
    }

    /// Advance one tick. The arrival check runs on the prospective next
    /// position, which is never committed: the overshooting point stays off
    /// screen and the caller centers the burst on the exact target rather
    /// than wherever the rocket was last drawn.
    pub fn update(&mut self) -> FireworkStep {
        self.trail.shift(self.pos);

        if self.target_radius < TARGET_RADIUS_MAX {
            self.target_radius += TARGET_RADIUS_STEP;
        } else {
            self.target_radius = TARGET_RADIUS_INITIAL;
        }

        self.speed *= FIREWORK_ACCELERATION;
        let next = self.pos + Vec2::from_angle(self.angle) * self.speed;
        self.distance_traveled = self.origin.distance(next);

        if self.distance_traveled >= self.distance_to_target {
            FireworkStep::Arrived
        } else {
            self.pos = next;
            FireworkStep::Continue
        }
    }

    /// One streak from the far end of the trail to the current position,
    /// colored by the scene-wide hue, plus the target ring when enabled.
    /// Pure read of current state.
    pub fn draw(&self, surface: &mut dyn Surface, global_hue: f32) {
        let color = Hsla::new(global_hue, 1.0, self.brightness / 100.0, 1.0);
        surface.stroke_line(self.trail.oldest(), self.pos, color);
        if TARGET_INDICATOR_ENABLED {
            surface.stroke_circle(self.target, self.target_radius, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RetainedSurface, Stroke};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn traveled_distance_strictly_increases_until_arrival() {
        let mut rng = test_rng();
        // 500 units straight up (in surface coordinates: toward smaller y).
        let mut fw = Firework::new(
            Vec2::new(400.0, 600.0),
            Vec2::new(400.0, 100.0),
            5.0,
            &mut rng,
        );
        assert_eq!(fw.distance_to_target, 500.0);

        let mut previous = fw.distance_traveled;
        let mut ticks = 0;
        loop {
            ticks += 1;
            let step = fw.update();
            assert!(fw.distance_traveled > previous, "stalled at tick {ticks}");
            previous = fw.distance_traveled;
            match step {
                FireworkStep::Continue => {
                    assert!(fw.distance_traveled < 500.0);
                    assert!(ticks < 200, "never arrived");
                }
                FireworkStep::Arrived => break,
            }
        }
        // First tick at/over the launch distance ends the flight.
        assert!(fw.distance_traveled >= 500.0);
        // Compounding from speed 5 at 1.05 covers 500 units in ~36 ticks.
        assert!((30..=45).contains(&ticks), "arrived after {ticks} ticks");
    }

    #[test]
    fn overshooting_position_is_never_committed() {
        let mut rng = test_rng();
        let target = Vec2::new(100.0, 100.0);
        let mut fw = Firework::new(Vec2::new(100.0, 160.0), target, 5.0, &mut rng);
        while fw.update() == FireworkStep::Continue {}
        // The on-screen position stays short of the target; the burst is
        // spawned at the declared target by the scene, not at `pos`.
        assert!(fw.pos.distance(fw.origin) < fw.distance_to_target);
    }

    #[test]
    fn bearing_points_from_origin_to_target() {
        let mut rng = test_rng();
        let mut fw = Firework::new(Vec2::new(0.0, 0.0), Vec2::new(300.0, 400.0), 2.0, &mut rng);
        for _ in 0..10 {
            if fw.update() == FireworkStep::Arrived {
                break;
            }
        }
        // Positions stay on the origin→target ray.
        let along = (fw.pos - fw.origin).normalize();
        let bearing = (fw.target - fw.origin).normalize();
        assert!(along.distance(bearing) < 1e-4);
    }

    #[test]
    fn target_ring_pulses_and_resets() {
        let mut rng = test_rng();
        let mut fw = Firework::new(Vec2::ZERO, Vec2::new(0.0, -10_000.0), 2.0, &mut rng);
        let mut seen_reset = false;
        let mut previous = fw.target_radius;
        for _ in 0..60 {
            fw.update();
            assert!(fw.target_radius <= TARGET_RADIUS_MAX + TARGET_RADIUS_STEP);
            if fw.target_radius < previous {
                assert_eq!(fw.target_radius, TARGET_RADIUS_INITIAL);
                seen_reset = true;
            }
            previous = fw.target_radius;
        }
        assert!(seen_reset, "ring never wrapped around");
    }

    #[test]
    fn draw_is_idempotent_within_a_tick() {
        let mut rng = test_rng();
        let mut fw = Firework::new(Vec2::new(10.0, 90.0), Vec2::new(50.0, 20.0), 2.0, &mut rng);
        fw.update();

        let mut first = RetainedSurface::default();
        let mut second = RetainedSurface::default();
        fw.draw(&mut first, 200.0);
        fw.draw(&mut second, 200.0);
        assert_eq!(first.strokes(), second.strokes());

        // Streak plus target ring.
        assert_eq!(first.strokes().len(), 2);
        assert!(matches!(first.strokes()[0], Stroke::Line { .. }));
        assert!(matches!(
            first.strokes()[1],
            Stroke::Circle { center, .. } if center == Vec2::new(50.0, 20.0)
        ));
    }
}
