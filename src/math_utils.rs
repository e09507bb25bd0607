use rand::Rng;

/// Uniform draw over the closed interval [lo, hi].
pub fn random_range(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    rng.gen_range(lo..=hi)
}

/// Fold an arbitrary hue into [0, 360).
pub fn wrap_hue(hue: f32) -> f32 {
    hue.rem_euclid(360.0)
}
