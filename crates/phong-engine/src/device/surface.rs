use winit::dpi::PhysicalSize;

use super::GpuInit;

/// What the frame loop should do after failing to acquire a swapchain image.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface reconfigured; try again next frame.
    Reconfigured,
    /// Transient, or nothing to draw into; drop this frame.
    SkipFrame,
    /// Unrecoverable (out of memory); stop the loop.
    Fatal,
}

/// Builds the swapchain configuration for `size` from what the surface offers.
///
/// Returns `None` when the surface reports no formats at all.
pub(crate) fn surface_config(
    caps: &wgpu::SurfaceCapabilities,
    size: PhysicalSize<u32>,
    init: &GpuInit,
) -> Option<wgpu::SurfaceConfiguration> {
    let format = choose_surface_format(&caps.formats, init.prefer_srgb)?;

    let present_mode = if caps.present_modes.contains(&init.present_mode) {
        init.present_mode
    } else {
        wgpu::PresentMode::Fifo
    };

    Some(wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode,
        alpha_mode: choose_alpha_mode(&caps.alpha_modes, init.alpha_mode),
        view_formats: vec![],
        desired_maximum_frame_latency: init.frame_latency,
    })
}

/// An 8-bit sRGB format if requested and offered, otherwise the adapter's
/// first choice.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = *formats.first()?;
    if !prefer_srgb {
        return Some(first);
    }

    [wgpu::TextureFormat::Bgra8UnormSrgb, wgpu::TextureFormat::Rgba8UnormSrgb]
        .into_iter()
        .find(|f| formats.contains(f))
        .or(Some(first))
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Records the new window size and reconfigures the swapchain. A minimized
/// (0x0) window only updates the size; wgpu rejects empty configurations.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;
    if new_size.width == 0 || new_size.height == 0 {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
}

pub(crate) fn recover(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            surface.configure(device, config);
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}
