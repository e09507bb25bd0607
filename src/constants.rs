// Firework (rocket) settings
pub const FIREWORK_BASE_SPEED: f32 = 2.0;
pub const FIREWORK_ACCELERATION: f32 = 1.05; // speed multiplier per tick, must be > 1
pub const FIREWORK_TRAIL_LENGTH: usize = 3;  // positions kept for the streak
pub const FIREWORK_BRIGHTNESS_MIN: f32 = 50.0; // HSL lightness, percent
pub const FIREWORK_BRIGHTNESS_MAX: f32 = 70.0;

// Pulsing ring drawn around the rocket's destination
pub const TARGET_INDICATOR_ENABLED: bool = true;
pub const TARGET_RADIUS_INITIAL: f32 = 1.0;
pub const TARGET_RADIUS_MAX: f32 = 8.0;
pub const TARGET_RADIUS_STEP: f32 = 0.3;

// Particle (burst fragment) settings
pub const PARTICLE_COUNT: usize = 30;        // fragments per explosion
pub const PARTICLE_TRAIL_LENGTH: usize = 5;
pub const PARTICLE_FRICTION: f32 = 0.95;     // speed multiplier per tick, in (0, 1)
pub const PARTICLE_GRAVITY: f32 = 1.0;       // +y is downward in surface coordinates
pub const PARTICLE_SPEED_MIN: f32 = 1.0;
pub const PARTICLE_SPEED_MAX: f32 = 10.0;
pub const PARTICLE_DECAY_MIN: f32 = 0.015;   // opacity lost per tick, must be > 0
pub const PARTICLE_DECAY_MAX: f32 = 0.03;
pub const PARTICLE_INITIAL_OPACITY: f32 = 1.0;
pub const PARTICLE_BRIGHTNESS_MIN: f32 = 50.0;
pub const PARTICLE_BRIGHTNESS_MAX: f32 = 80.0;
pub const PARTICLE_HUE_VARIANCE: f32 = 50.0; // +/- band around the global hue at spawn

// Scene settings
pub const HUE_STEP: f32 = 0.5;               // global hue advance per tick
pub const TRAIL_FADE_ALPHA: f32 = 0.5;       // per-tick dimming of retained strokes
pub const AUTO_LAUNCH_INTERVAL: u32 = 80;    // ticks between scheduled launches
pub const POINTER_LAUNCH_INTERVAL: u32 = 5;  // ticks between launches while the button is held

/// Check the tuning preconditions that keep every entity's lifetime bounded:
/// strictly positive opacity decay, friction below 1, acceleration above 1,
/// non-empty trails. A violation is a build misconfiguration, so it fails
/// loudly at startup instead of becoming a runtime error path.
pub fn sanity() {
    assert!(FIREWORK_ACCELERATION > 1.0, "rockets must gain speed to arrive");
    assert!(FIREWORK_BASE_SPEED > 0.0);
    assert!(
        PARTICLE_FRICTION > 0.0 && PARTICLE_FRICTION < 1.0,
        "friction outside (0,1) breaks speed decay"
    );
    assert!(
        PARTICLE_DECAY_MIN > 0.0 && PARTICLE_DECAY_MAX >= PARTICLE_DECAY_MIN,
        "zero decay would make particles immortal"
    );
    assert!(PARTICLE_INITIAL_OPACITY > 0.0);
    assert!(PARTICLE_SPEED_MAX >= PARTICLE_SPEED_MIN);
    assert!(FIREWORK_BRIGHTNESS_MAX >= FIREWORK_BRIGHTNESS_MIN);
    assert!(PARTICLE_BRIGHTNESS_MAX >= PARTICLE_BRIGHTNESS_MIN);
    assert!(FIREWORK_TRAIL_LENGTH >= 1 && PARTICLE_TRAIL_LENGTH >= 1);
    assert!(AUTO_LAUNCH_INTERVAL >= 1 && POINTER_LAUNCH_INTERVAL >= 1);
    assert!(TRAIL_FADE_ALPHA > 0.0 && TRAIL_FADE_ALPHA <= 1.0);
}
