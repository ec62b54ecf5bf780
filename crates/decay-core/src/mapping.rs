use glam::{vec2, Vec2};

use crate::POINTER_SENTINEL;

// ---------------------------------------------------------------------------
// Pointer mapping (pure, testable)
// ---------------------------------------------------------------------------

/// Map a raw cursor position in physical pixels (origin top-left, as the
/// window system reports it) to the shader's pointer space: [0,1]² with
/// y = 0 at the bottom edge.
pub fn normalized_pointer(position_px: Vec2, viewport_px: Vec2) -> Vec2 {
    vec2(
        position_px.x / viewport_px.x,
        1.0 - position_px.y / viewport_px.y,
    )
}

/// The value actually written into the uniform record on a pointer move.
/// While the menu is open the real position is discarded and the far-outside
/// sentinel wins, which pushes every pixel past the heal falloff and leaves
/// the whole frame fully decayed.
pub fn pointer_uniform(position_px: Vec2, viewport_px: Vec2, menu_open: bool) -> Vec2 {
    if menu_open {
        POINTER_SENTINEL
    } else {
        normalized_pointer(position_px, viewport_px)
    }
}

// ---------------------------------------------------------------------------
// Cover fit (pure mirror of the shader's sampling-region math)
// ---------------------------------------------------------------------------

/// Affine map from screen uv to photo uv: `photo_uv = screen_uv * scale + offset`.
///
/// The shader computes the same two vectors per pixel; this mirror exists so
/// the cropping behavior can be pinned down on the CPU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverRegion {
    pub scale: Vec2,
    pub offset: Vec2,
}

/// CSS `background-size: cover` semantics: scale the photo uniformly until it
/// fills the viewport, center it, and crop the overflow on exactly one axis.
///
/// With `rs = viewport aspect` and `ri = image aspect`, the photo is scaled to
/// a virtual extent `fitted` that matches the viewport on the tighter axis:
///   rs < ri  →  full height used, left/right cropped equally
///   rs > ri  →  full width used, top/bottom cropped equally
/// The returned map never samples outside [0,1]² for in-screen coordinates.
pub fn cover_region(viewport: Vec2, image: Vec2) -> CoverRegion {
    let rs = viewport.x / viewport.y;
    let ri = image.x / image.y;
    let fitted = if rs < ri {
        vec2(image.x * viewport.y / image.y, viewport.y)
    } else {
        vec2(viewport.x, image.y * viewport.x / image.x)
    };
    let overflow = if rs < ri {
        vec2((fitted.x - viewport.x) * 0.5, 0.0)
    } else {
        vec2(0.0, (fitted.y - viewport.y) * 0.5)
    };
    CoverRegion {
        scale: viewport / fitted,
        offset: overflow / fitted,
    }
}

/// Apply [`cover_region`] to one screen-space coordinate.
pub fn cover_uv(screen_uv: Vec2, viewport: Vec2, image: Vec2) -> Vec2 {
    let region = cover_region(viewport, image);
    screen_uv * region.scale + region.offset
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
