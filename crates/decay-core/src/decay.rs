use glam::Vec2;

use crate::noise::value_noise;

// ---------------------------------------------------------------------------
// Distortion profile — CPU mirror of the shader's per-pixel decisions
// ---------------------------------------------------------------------------
//
// All tunables of the effect live here under one roof, shared by the tests
// and kept byte-for-byte equal to the literals in decay.wgsl.

/// Heal falloff: fully clean at or inside this pointer distance.
pub const HEAL_INNER: f32 = 0.1;
/// Heal falloff: fully decayed at or beyond this pointer distance.
pub const HEAL_OUTER: f32 = 0.4;
/// Cap on the distortion strength; even fully decayed pixels shift at most
/// half a screen-width in the worst case of the centered noise term.
pub const MAX_INTENSITY: f32 = 0.5;
/// Horizontal sampling offset per unit intensity for the red/blue split.
pub const SPLIT_SCALE: f32 = 0.02;
/// Rows of the sine grid darkening the decayed regions.
pub const SCANLINE_FREQ: f32 = 800.0;
/// Peak scanline darkening at full decay.
pub const SCANLINE_DEPTH: f32 = 0.1;
/// Brightness floor a fully decayed pixel is multiplied down to.
pub const DARKEN_FLOOR: f32 = 0.5;
/// Frequency multiplier applied to the row coordinate before seeding the
/// noise — one noise cell spans 1/100th of the image height.
pub const NOISE_ROW_FREQ: f32 = 100.0;
/// Time scale of the noise scroll.
pub const NOISE_TIME_RATE: f32 = 0.5;

/// Hermite step, clamped: 0 at `edge0`, 1 at `edge1`.
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// How "clean" a point is, given its distance to the pointer: 1 inside
/// [`HEAL_INNER`], 0 beyond [`HEAL_OUTER`], smooth and non-increasing
/// in between.
pub fn heal_mask(pointer_distance: f32) -> f32 {
    1.0 - smoothstep(HEAL_INNER, HEAL_OUTER, pointer_distance)
}

/// Convenience: heal mask straight from screen-space positions.
pub fn heal_mask_at(screen_uv: Vec2, pointer: Vec2) -> f32 {
    heal_mask(screen_uv.distance(pointer))
}

/// Distortion strength for a given heal value: zero when healed, at most
/// [`MAX_INTENSITY`] when fully decayed.
pub fn intensity(heal: f32) -> f32 {
    (1.0 - heal) * MAX_INTENSITY
}

/// Horizontal sampling shift for one row at one instant: the noise term is
/// centered to [-0.5, 0.5] and scaled by the local intensity.
pub fn row_shift(row_v: f32, time: f32, intensity: f32) -> f32 {
    let n = value_noise(Vec2::new(row_v * NOISE_ROW_FREQ, time * NOISE_TIME_RATE));
    (n - 0.5) * intensity
}

/// Red/blue sampling offset for the chromatic split.
pub fn rgb_split(intensity: f32) -> f32 {
    intensity * SPLIT_SCALE
}

/// Signed scanline term subtracted from all channels.
pub fn scanline(row_v: f32, heal: f32) -> f32 {
    (row_v * SCANLINE_FREQ).sin() * SCANLINE_DEPTH * (1.0 - heal)
}

/// Global brightness factor: [`DARKEN_FLOOR`] at full decay, 1.0 when healed.
pub fn darken(heal: f32) -> f32 {
    DARKEN_FLOOR + (1.0 - DARKEN_FLOOR) * heal
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    const EPS: f32 = 1e-6;

    // --- Heal mask -------------------------------------------------------------

    #[test]
    fn heal_mask_is_one_inside_the_inner_radius() {
        for d in [0.0, 0.05, HEAL_INNER] {
            assert!((heal_mask(d) - 1.0).abs() < EPS, "d={d}");
        }
    }

    #[test]
    fn heal_mask_is_zero_beyond_the_outer_radius() {
        for d in [HEAL_OUTER, 0.5, 1.0, 14.0] {
            assert!(heal_mask(d).abs() < EPS, "d={d}");
        }
    }

    #[test]
    fn heal_mask_is_monotonically_non_increasing() {
        let mut previous = f32::INFINITY;
        for step in 0..=1000 {
            let d = step as f32 * 0.001;
            let m = heal_mask(d);
            assert!(
                m <= previous + EPS,
                "mask rose from {previous} to {m} at d={d}"
            );
            previous = m;
        }
    }

    #[test]
    fn heal_mask_midpoint_is_half() {
        // The Hermite blend is symmetric: halfway between the knees the
        // mask reads exactly 0.5.
        let mid = (HEAL_INNER + HEAL_OUTER) * 0.5;
        assert!((heal_mask(mid) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn heal_mask_is_continuous_at_both_knees() {
        for knee in [HEAL_INNER, HEAL_OUTER] {
            let below = heal_mask(knee - 1e-4);
            let above = heal_mask(knee + 1e-4);
            assert!((below - above).abs() < 1e-2, "jump at d={knee}");
        }
    }

    #[test]
    fn heal_mask_at_uses_euclidean_distance() {
        // 3-4-5 triangle: offset (0.03, 0.04) is distance 0.05 → inside the
        // inner radius, fully healed.
        let m = heal_mask_at(vec2(0.53, 0.54), vec2(0.5, 0.5));
        assert!((m - 1.0).abs() < EPS);
    }

    #[test]
    fn sentinel_pointer_decays_the_entire_screen() {
        use crate::POINTER_SENTINEL;
        for corner in [
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(0.0, 1.0),
            vec2(1.0, 1.0),
            vec2(0.5, 0.5),
        ] {
            assert!(heal_mask_at(corner, POINTER_SENTINEL).abs() < EPS);
        }
    }

    // --- Intensity & shift -----------------------------------------------------

    #[test]
    fn intensity_vanishes_when_healed() {
        assert!(intensity(1.0).abs() < EPS);
    }

    #[test]
    fn intensity_caps_at_half_when_fully_decayed() {
        assert!((intensity(0.0) - MAX_INTENSITY).abs() < EPS);
    }

    #[test]
    fn row_shift_is_centered_and_bounded() {
        // noise ∈ [0,1) → (noise - 0.5) ∈ [-0.5, 0.5) → shift magnitude is
        // at most intensity/2.
        let i = intensity(0.0);
        for step in 0..200 {
            let v = step as f32 * 0.005;
            let shift = row_shift(v, 3.2, i);
            assert!(
                shift.abs() <= i * 0.5 + EPS,
                "shift {shift} exceeds bound at v={v}"
            );
        }
    }

    #[test]
    fn row_shift_is_zero_at_zero_intensity() {
        assert_eq!(row_shift(0.37, 5.0, 0.0), 0.0);
    }

    #[test]
    fn row_shift_scrolls_with_time() {
        let a = row_shift(0.25, 0.0, MAX_INTENSITY);
        let b = row_shift(0.25, 10.0, MAX_INTENSITY);
        assert_ne!(a, b);
    }

    // --- Chromatic split -------------------------------------------------------

    #[test]
    fn rgb_split_scales_linearly_with_intensity() {
        assert!(rgb_split(0.0).abs() < EPS);
        assert!((rgb_split(MAX_INTENSITY) - MAX_INTENSITY * SPLIT_SCALE).abs() < EPS);
    }

    // --- Scanlines -------------------------------------------------------------

    #[test]
    fn scanline_disappears_when_healed() {
        for step in 0..50 {
            let v = step as f32 * 0.02;
            assert!(scanline(v, 1.0).abs() < EPS, "v={v}");
        }
    }

    #[test]
    fn scanline_amplitude_is_bounded_by_depth() {
        for step in 0..500 {
            let v = step as f32 * 0.002;
            let s = scanline(v, 0.0);
            assert!(s.abs() <= SCANLINE_DEPTH + EPS, "v={v} s={s}");
        }
    }

    // --- Darkening -------------------------------------------------------------

    #[test]
    fn darken_interpolates_between_floor_and_unity() {
        assert!((darken(0.0) - DARKEN_FLOOR).abs() < EPS);
        assert!((darken(1.0) - 1.0).abs() < EPS);
        assert!((darken(0.5) - (DARKEN_FLOOR + 1.0) * 0.5).abs() < EPS);
    }
}
