use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::surface::{self, SurfaceErrorAction};
use super::GpuInit;

/// wgpu objects for one window.
///
/// The surface borrows the window for `'w`; the runtime keeps both in one
/// self-referencing entry so the window always outlives the surface.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    /// Window size in physical pixels. May be 0x0 while minimized, in which
    /// case `config` keeps the last drawable size.
    size: PhysicalSize<u32>,
}

/// An acquired swapchain image with an encoder recording into it.
///
/// Holding this blocks acquisition of the next image; hand it back to
/// [`Gpu::present`] promptly.
pub struct GpuFrame {
    texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl<'w> Gpu<'w> {
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let info = adapter.get_info();
        log::info!("adapter: {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("phong device"),
                required_features: wgpu::Features::empty(),
                required_limits: init.limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        let config = surface::surface_config(&caps, size, &init)
            .context("surface reports no supported formats")?;
        surface.configure(&device, &config);

        log::debug!(
            "swapchain: {:?} {:?} {}x{}",
            config.format,
            config.present_mode,
            config.width,
            config.height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        surface::apply_resize(
            &self.surface,
            &self.device,
            &mut self.config,
            &mut self.size,
            new_size,
        );
    }

    /// Acquires the next swapchain image and a fresh encoder.
    ///
    /// A minimized window yields `SkipFrame`. Surface errors are recovered
    /// from where possible and reported as the action to take.
    pub fn acquire(&self) -> std::result::Result<GpuFrame, SurfaceErrorAction> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(SurfaceErrorAction::SkipFrame);
        }

        let texture = self.surface.get_current_texture().map_err(|err| {
            log::debug!("surface error: {err}");
            surface::recover(&self.surface, &self.device, &self.config, err)
        })?;

        let view = texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("phong frame encoder"),
            });

        Ok(GpuFrame {
            texture,
            view,
            encoder,
        })
    }

    /// Submits the frame's commands and queues the image for display.
    pub fn present(&self, frame: GpuFrame) {
        let GpuFrame {
            texture,
            view,
            encoder,
        } = frame;
        self.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        texture.present();
    }
}
