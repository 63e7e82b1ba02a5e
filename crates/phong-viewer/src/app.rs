use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use phong_core::{FrameBuffer, Options, RenderContext, Viewport};
use phong_engine::core::{App, AppControl, FrameCtx};
use phong_engine::present::FramebufferPresenter;
use phong_engine::time::FrameStats;

/// Interactive viewer: re-renders the shape every frame at the window's size.
pub struct ShadeApp {
    options: Options,
    viewport: Viewport,
    frame: FrameBuffer,
    presenter: FramebufferPresenter,
    stats: FrameStats,
}

impl ShadeApp {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            viewport: Viewport::INITIAL,
            frame: FrameBuffer::new(Viewport::INITIAL),
            presenter: FramebufferPresenter::new(),
            stats: FrameStats::default(),
        }
    }

    fn render_ctx(options: &Options, viewport: Viewport) -> RenderContext<'_> {
        RenderContext::new(&options.scene, viewport, options.shape, options.toon)
    }
}

fn is_escape_press(event: &WindowEvent) -> bool {
    matches!(
        event,
        WindowEvent::KeyboardInput { event, .. }
            if event.state == ElementState::Pressed
                && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
    )
}

impl App for ShadeApp {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        if is_escape_press(event) {
            log::info!("escape pressed");
            return AppControl::Exit;
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        log::trace!("frame {}: {:.3} ms", ctx.time.frame_index, ctx.time.dt * 1000.0);
        if let Some(summary) = self.stats.record(&ctx.time) {
            log::debug!(
                "{} frames, {:.3} ms avg ({:.1} fps)",
                summary.frames,
                summary.mean_dt * 1000.0,
                summary.fps()
            );
        }

        let size = ctx.gpu.size();
        let viewport = Viewport::new(size.width, size.height);
        if viewport.is_empty() {
            return AppControl::Continue;
        }

        let resized = viewport != self.viewport;
        self.viewport = viewport;

        let stats = Self::render_ctx(&self.options, self.viewport).render_into(&mut self.frame);
        if resized || ctx.time.frame_index == 0 {
            log::debug!(
                "viewport {}x{}, center {}, {} samples, {} written",
                viewport.width,
                viewport.height,
                viewport.draw_center(),
                stats.samples,
                stats.written
            );
        }

        let frame = &self.frame;
        let presenter = &mut self.presenter;
        ctx.render(wgpu::Color::BLACK, |rctx| {
            presenter.present(rctx, frame.width(), frame.height(), frame.as_bytes());
        })
    }
}
