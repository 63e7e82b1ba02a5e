use winit::window::Window;

use crate::device::{Gpu, SurfaceErrorAction};
use crate::render::RenderCtx;
use crate::time::FrameTime;

use super::app::AppControl;

/// Window handle for the current frame.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

/// Per-frame context passed to [`super::App::on_frame`].
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window borrow carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Acquires a swapchain image, clears it to `clear`, lets `draw` record into
    /// it, then presents.
    ///
    /// Skipped and recoverable frames return `Continue`; only a fatal surface
    /// error returns `Exit`.
    pub fn render<F>(&mut self, clear: wgpu::Color, draw: F) -> AppControl
    where
        F: FnOnce(&mut RenderCtx<'_>),
    {
        let mut frame = match self.gpu.acquire() {
            Ok(frame) => frame,
            Err(SurfaceErrorAction::Fatal) => {
                log::error!("surface out of memory");
                return AppControl::Exit;
            }
            Err(_) => return AppControl::Continue,
        };

        {
            let mut rctx = RenderCtx {
                device: self.gpu.device(),
                queue: self.gpu.queue(),
                surface_format: self.gpu.surface_format(),
                size: self.gpu.size(),
                encoder: &mut frame.encoder,
                color_view: &frame.view,
            };
            drop(rctx.color_pass("phong clear", wgpu::LoadOp::Clear(clear)));
            draw(&mut rctx);
        }

        self.window.window.pre_present_notify();
        self.gpu.present(frame);

        AppControl::Continue
    }
}
