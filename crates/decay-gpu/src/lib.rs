//! GPU side of the decay effect: the WGSL pass, the photo texture, and the
//! uniform block shared with the shader.

pub mod pipeline;
pub mod texture;
pub mod uniforms;

pub use pipeline::DecayPass;
pub use texture::PhotoTexture;
pub use uniforms::Uniforms;
