use glam::{vec2, Vec2};

// ---------------------------------------------------------------------------
// Value noise — CPU mirror of the shader's routine
// ---------------------------------------------------------------------------
//
// This is the classic fract-sin hash plus Hermite-blended corner noise that
// drives the row shift. The WGSL in decay-gpu computes the identical
// expressions; the constants and the blend are the visual signature of the
// effect, so neither side may drift from the other.

const HASH_K: Vec2 = Vec2::new(12.9898, 78.233);
#[allow(clippy::excessive_precision)]
const HASH_M: f32 = 43758.5453123;

/// `fract` with GLSL semantics (`x - floor(x)`, always in [0,1)).
/// `f32::fract` keeps the sign and would break the hash for negative sines.
fn fract_gl(x: f32) -> f32 {
    x - x.floor()
}

/// Hash a 2D lattice point to a pseudo-random value in [0,1).
pub fn hash21(st: Vec2) -> f32 {
    fract_gl((st.dot(HASH_K)).sin() * HASH_M)
}

/// Smoothly interpolated value noise: hash the four surrounding lattice
/// corners and blend with the Hermite curve `f*f*(3-2f)`.
pub fn value_noise(st: Vec2) -> f32 {
    let i = st.floor();
    let f = st - i;

    let a = hash21(i);
    let b = hash21(i + vec2(1.0, 0.0));
    let c = hash21(i + vec2(0.0, 1.0));
    let d = hash21(i + vec2(1.0, 1.0));

    let u = f * f * (Vec2::splat(3.0) - 2.0 * f);

    lerp(a, b, u.x) + (c - a) * u.y * (1.0 - u.x) + (d - b) * u.x * u.y
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
