/// How the window's GPU context is set up.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Ask for an sRGB swapchain when the adapter offers one.
    ///
    /// The presenter tags its upload texture to match, so frame bytes reach the
    /// screen unchanged either way.
    pub prefer_srgb: bool,

    /// Requested swap behavior. Unsupported modes fall back to FIFO.
    pub present_mode: wgpu::PresentMode,

    /// Requested alpha mode; falls back to the first supported one.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub power_preference: wgpu::PowerPreference,

    pub limits: wgpu::Limits,

    /// Swapchain depth hint. 2 is classic double buffering.
    pub frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::LowPower,
            limits: wgpu::Limits::default(),
            frame_latency: 2,
        }
    }
}
