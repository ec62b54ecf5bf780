use decay_core::FrameState;

/// All per-frame data uploaded to the GPU as a single uniform buffer.
/// Must match `DecayUniforms` in `decay.wgsl` member for member — two
/// vec2-pairs up front keep every offset naturally aligned, no padding
/// needed at 32 bytes total.
/// `repr(C)` + `bytemuck` ensures safe casting to `&[u8]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub resolution: [f32; 2],
    pub image_size: [f32; 2],
    pub cursor: [f32; 2],
    pub time: f32,
    /// Inert slot; present in the block, never read by the shader.
    pub hover: f32,
}

impl From<&FrameState> for Uniforms {
    fn from(state: &FrameState) -> Self {
        Self {
            resolution: state.viewport.to_array(),
            image_size: state.image_size.to_array(),
            cursor: state.pointer.to_array(),
            time: state.time,
            hover: state.hover,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_is_exactly_32_bytes() {
        // The WGSL struct is 32 bytes; a drift here silently corrupts every
        // field after the mismatch.
        assert_eq!(std::mem::size_of::<Uniforms>(), 32);
    }

    #[test]
    fn from_state_copies_every_field() {
        let mut state = FrameState::new(1920, 1080);
        state.time = 12.25;
        state.set_image_size(3024, 4032);
        state.pointer = glam::vec2(0.25, 0.75);

        let u = Uniforms::from(&state);
        assert_eq!(u.resolution, [1920.0, 1080.0]);
        assert_eq!(u.image_size, [3024.0, 4032.0]);
        assert_eq!(u.cursor, [0.25, 0.75]);
        assert_eq!(u.time, 12.25);
        assert_eq!(u.hover, 0.0);
    }

    #[test]
    fn byte_view_matches_declared_layout() {
        let u = Uniforms {
            resolution: [1.0, 2.0],
            image_size: [3.0, 4.0],
            cursor: [5.0, 6.0],
            time: 7.0,
            hover: 8.0,
        };
        let bytes = bytemuck::bytes_of(&u);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }
}
