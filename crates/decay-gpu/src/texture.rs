/// A photo uploaded to the GPU, ready to bind into the decay pass.
///
/// Only the view outlives creation; the texture itself is kept alive by the
/// view's internal Arc, so we don't carry the handle around.
pub struct PhotoTexture {
    pub view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
}

impl PhotoTexture {
    /// Single black pixel, bound until the real photo arrives from the
    /// loader thread. Keeps the pipeline's bind group layout satisfied from
    /// the very first frame.
    pub fn placeholder(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        Self::from_rgba8(device, queue, 1, 1, &[0, 0, 0, 255])
    }

    /// Uploads tightly-packed RGBA8 rows (top-down, as decoders produce
    /// them). The shader flips V at sample time.
    pub fn from_rgba8(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Self {
        debug_assert_eq!(pixels.len(), (4 * width * height) as usize);

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("photo"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            view,
            width,
            height,
        }
    }
}
