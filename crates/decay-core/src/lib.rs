pub mod decay;
pub mod mapping;
pub mod menu;
pub mod noise;

use glam::{vec2, Vec2};

// ---------------------------------------------------------------------------
// FrameState — the mutable uniform record read by the GPU layer every frame
// ---------------------------------------------------------------------------

/// Pointer value the shader never heals around: far enough outside the
/// [0,1]² screen square that the falloff radius cannot reach any pixel.
pub const POINTER_SENTINEL: Vec2 = Vec2::new(10.0, 10.0);

/// Pointer position before the first cursor event — screen center, so the
/// effect boots with a healed circle in the middle.
pub const POINTER_INITIAL: Vec2 = Vec2::new(0.5, 0.5);

/// Everything the decay shader reads, updated in place by the event handlers
/// and the frame tick. One instance lives for the process lifetime; all
/// writes happen on the render thread.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    /// Seconds since startup, taken from a monotonic clock. Never decreases.
    pub time: f32,
    /// Normalized pointer in [0,1]² with y = 0 at the bottom edge, or
    /// [`POINTER_SENTINEL`] while the menu is open.
    pub pointer: Vec2,
    /// Window inner size in physical pixels.
    pub viewport: Vec2,
    /// Natural pixel size of the loaded photo; (1,1) until it decodes.
    pub image_size: Vec2,
    /// Reserved slot in the uniform block; the decay pass currently keys
    /// everything off the pointer and never reads this.
    pub hover: f32,
}

impl FrameState {
    pub fn new(viewport_w: u32, viewport_h: u32) -> Self {
        Self {
            time: 0.0,
            pointer: POINTER_INITIAL,
            viewport: vec2(viewport_w.max(1) as f32, viewport_h.max(1) as f32),
            image_size: Vec2::ONE,
            hover: 0.0,
        }
    }

    /// Record a new window size. Pure write; calling it again with the same
    /// dimensions changes nothing.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = vec2(width.max(1) as f32, height.max(1) as f32);
    }

    /// Record the decoded photo's natural size. Called once, when (and if)
    /// the loader delivers.
    pub fn set_image_size(&mut self, width: u32, height: u32) {
        self.image_size = vec2(width as f32, height as f32);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_with_degenerate_image_size() {
        let state = FrameState::new(1280, 720);
        assert_eq!(state.image_size, Vec2::ONE);
    }

    #[test]
    fn new_state_points_at_screen_center() {
        let state = FrameState::new(1280, 720);
        assert_eq!(state.pointer, POINTER_INITIAL);
    }

    #[test]
    fn set_image_size_is_exact() {
        let mut state = FrameState::new(1280, 720);
        state.set_image_size(3024, 4032);
        assert_eq!(state.image_size, vec2(3024.0, 4032.0));
    }

    #[test]
    fn set_viewport_twice_is_idempotent() {
        let mut state = FrameState::new(1280, 720);
        state.set_viewport(1920, 1080);
        let snapshot = state.clone();
        state.set_viewport(1920, 1080);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn set_viewport_guards_zero_dimensions() {
        // A minimized window must not produce a zero divisor in the
        // pointer normalization or the cover math.
        let mut state = FrameState::new(1280, 720);
        state.set_viewport(0, 0);
        assert_eq!(state.viewport, vec2(1.0, 1.0));
    }

    #[test]
    fn sentinel_is_outside_reach_of_the_heal_falloff() {
        // The farthest on-screen point from the sentinel still has to sit
        // beyond the outer falloff edge.
        let nearest_corner = Vec2::ONE;
        assert!(POINTER_SENTINEL.distance(nearest_corner) > decay::HEAL_OUTER);
    }
}
