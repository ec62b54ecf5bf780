use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::{Receiver, TryRecvError};
use decay_core::mapping;
use decay_core::menu::MenuState;
use decay_core::{FrameState, POINTER_INITIAL, POINTER_SENTINEL};
use decay_gpu::{DecayPass, PhotoTexture, Uniforms};
use glam::vec2;
use winit::window::Window;

use crate::loader::{self, DecodedPhoto};
use crate::ui;

/// The photo shipped with the repo, resolved against the working directory.
const PHOTO_PATH: &str = "assets/photo.png";

// ---------------------------------------------------------------------------
// Simple FPS counter — logs to console once per second
// ---------------------------------------------------------------------------

struct FpsCounter {
    frames: u32,
    last_report: Instant,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frames: 0,
            last_report: Instant::now(),
        }
    }

    /// Increment the frame count.  Returns the FPS value if a full second has
    /// elapsed since the last report (so the caller can log it).
    fn tick(&mut self) -> Option<f32> {
        self.frames += 1;
        let elapsed = self.last_report.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            let fps = self.frames as f32 / elapsed;
            self.frames = 0;
            self.last_report = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// App — wgpu surface, decay pass, menu overlay, photo loader
// ---------------------------------------------------------------------------

pub struct App {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,

    // GPU pass and the photo it samples
    decay_pass: DecayPass,
    photo: PhotoTexture,

    // Effect state fed into the uniform block each frame
    state: FrameState,
    menu: MenuState,
    /// Last known cursor position in physical pixels; `None` until the first
    /// cursor event, which leaves the pointer on its boot value.
    cursor_pos: Option<(f64, f64)>,

    // Photo decode in flight
    photo_rx: Receiver<anyhow::Result<DecodedPhoto>>,
    photo_pending: bool,

    // Menu overlay
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,

    // Frame timing
    started: Instant,
    fps: FpsCounter,
}

impl App {
    /// Initialise wgpu for a given window.  The window is wrapped in `Arc` so
    /// that the surface can safely hold a `'static` reference to it.
    pub fn new(window: Arc<Window>) -> Self {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        // ---- Instance -------------------------------------------------------
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // ---- Surface --------------------------------------------------------
        let surface = instance
            .create_surface(Arc::clone(&window))
            .expect("failed to create wgpu surface");

        // ---- Adapter --------------------------------------------------------
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("no suitable GPU adapter found");

        log::info!("GPU adapter: {}", adapter.get_info().name);

        // ---- Device & Queue -------------------------------------------------
        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("decay-app device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("failed to create GPU device");

        // ---- Surface configuration ------------------------------------------
        let surface_caps = surface.get_capabilities(&adapter);

        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &surface_config);
        log::info!(
            "Surface configured: {}×{} {:?} Fifo",
            surface_config.width,
            surface_config.height,
            format
        );

        // ---- Decay pass, fed a 1×1 placeholder until the photo decodes ------
        let decay_pass = DecayPass::new(&device, format);
        let photo = PhotoTexture::placeholder(&device, &queue);
        let photo_rx = loader::spawn_loader(PHOTO_PATH.into());

        // ---- Menu overlay ---------------------------------------------------
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, format, None, 1, false);

        Self {
            surface,
            device,
            queue,
            surface_config,
            decay_pass,
            photo,
            state: FrameState::new(width, height),
            menu: MenuState::default(),
            cursor_pos: None,
            photo_rx,
            photo_pending: true,
            egui_ctx,
            egui_state,
            egui_renderer,
            started: Instant::now(),
            fps: FpsCounter::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Resize
    // -------------------------------------------------------------------------

    /// Reconfigure the surface and refresh everything derived from the window
    /// size. Safe to call repeatedly with the same dimensions.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width == 0 || new_height == 0 {
            return;
        }
        self.surface_config.width = new_width;
        self.surface_config.height = new_height;
        self.surface.configure(&self.device, &self.surface_config);

        // Pointer normalization divides by the viewport, so re-derive it.
        self.state.set_viewport(new_width, new_height);
        self.apply_pointer();

        log::debug!("Surface resized to {}×{}", new_width, new_height);
    }

    // -------------------------------------------------------------------------
    // Input — called by main.rs window_event handler
    // -------------------------------------------------------------------------

    /// Give the menu overlay first look at an event. Returns egui's response
    /// so the caller can skip app shortcuts the UI consumed.
    pub fn on_window_event(
        &mut self,
        window: &Window,
        event: &winit::event::WindowEvent,
    ) -> egui_winit::EventResponse {
        self.egui_state.on_window_event(window, event)
    }

    /// Track the cursor in physical pixels and push it into the uniform
    /// record. Tracking continues while the menu is open; only the uniform
    /// is pinned to the sentinel, so closing the menu restores the real
    /// position immediately.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor_pos = Some((x, y));
        self.apply_pointer();
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
        self.apply_pointer();
        log::info!(
            "Menu {}",
            if self.menu.is_open() { "opened" } else { "closed" }
        );
    }

    /// Recompute the pointer uniform from the latest cursor sample and the
    /// menu state. An open menu always wins; before the first cursor event
    /// the pointer stays on the boot value (screen center).
    fn apply_pointer(&mut self) {
        self.state.pointer = match self.cursor_pos {
            Some((x, y)) => mapping::pointer_uniform(
                vec2(x as f32, y as f32),
                self.state.viewport,
                self.menu.is_open(),
            ),
            None if self.menu.is_open() => POINTER_SENTINEL,
            None => POINTER_INITIAL,
        };
    }

    // -------------------------------------------------------------------------
    // Photo loader
    // -------------------------------------------------------------------------

    /// Non-blocking check on the loader thread. At most one message ever
    /// arrives; on failure the placeholder stays bound and the effect keeps
    /// running on black.
    fn poll_photo(&mut self) {
        if !self.photo_pending {
            return;
        }
        match self.photo_rx.try_recv() {
            Ok(Ok(decoded)) => {
                self.photo = PhotoTexture::from_rgba8(
                    &self.device,
                    &self.queue,
                    decoded.width,
                    decoded.height,
                    &decoded.pixels,
                );
                self.state.set_image_size(decoded.width, decoded.height);
                self.photo_pending = false;
                log::info!("Photo ready: {}×{}", decoded.width, decoded.height);
            }
            Ok(Err(err)) => {
                self.photo_pending = false;
                log::error!("Photo load failed: {err:#}");
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.photo_pending = false;
                log::error!("Photo loader thread exited without a result");
            }
        }
    }

    // -------------------------------------------------------------------------
    // Render
    // -------------------------------------------------------------------------

    /// Run one full frame: poll the loader, advance time, draw the decay pass
    /// and the menu overlay on top of it.
    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        self.poll_photo();
        self.state.time = self.started.elapsed().as_secs_f32();

        if let Some(fps) = self.fps.tick() {
            log::debug!(
                "FPS: {:.1}  pointer: ({:.2}, {:.2})  menu: {}",
                fps,
                self.state.pointer.x,
                self.state.pointer.y,
                if self.menu.is_open() { "open" } else { "closed" },
            );
        }

        let uniforms = Uniforms::from(&self.state);

        // --- Menu overlay frame ----------------------------------------------
        let raw_input = self.egui_state.take_egui_input(window);
        let menu = self.menu;
        let mut button_clicked = false;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            button_clicked = ui::menu_layer(ctx, menu);
        });
        if button_clicked {
            self.toggle_menu();
        }
        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let clipped = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, delta);
        }

        // --- Acquire surface texture -----------------------------------------
        let output = self.surface.get_current_texture()?;
        let surface_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        // --- 1. Decay pass ----------------------------------------------------
        self.decay_pass.record(
            &self.device,
            &self.queue,
            &mut encoder,
            &surface_view,
            &self.photo.view,
            uniforms,
        );

        // --- 2. Menu overlay on top ------------------------------------------
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point: full_output.pixels_per_point,
        };
        let user_cmds = self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &clipped,
            &screen,
        );
        {
            let mut rpass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("menu-pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &surface_view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();
            self.egui_renderer.render(&mut rpass, &clipped, &screen);
        }
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.queue
            .submit(user_cmds.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();
        Ok(())
    }
}
