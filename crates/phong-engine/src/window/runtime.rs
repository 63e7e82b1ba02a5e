use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalSize, Size};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::time::{FrameClock, FrameTime};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: Size,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "phong".to_string(),
            initial_size: PhysicalSize::new(400, 400).into(),
            resizable: true,
        }
    }
}

/// Entry point: runs the event loop until the window closes or the app exits.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    exit_requested: bool,
    /// First fatal error, surfaced from `Runtime::run` after the loop exits.
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            exit_requested: false,
            failure: None,
        }
    }

    fn exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        self.window = None;
        event_loop.exit();
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init)).context("GPU initialization failed")
            },
        }
        .try_build()
    }

    fn redraw(&mut self) -> AppControl {
        let Some(entry) = self.window.as_mut() else {
            return AppControl::Continue;
        };
        let app = &mut self.app;

        entry.with_mut(|fields| {
            let ft: FrameTime = fields.clock.tick();
            let mut ctx = FrameCtx {
                window: WindowCtx { window: fields.window },
                gpu: fields.gpu,
                time: ft,
            };
            app.on_frame(&mut ctx)
        })
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| {
                    log::info!("window created: {:?}", w.inner_size());
                    w.request_redraw();
                });
                self.window = Some(entry);
            }
            Err(e) => {
                log::error!("failed to create window: {e:#}");
                self.failure = Some(e);
                self.exit(event_loop);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Continuous redraw, like an idle callback.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(entry) = &self.window {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.exit(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.window.as_mut() {
                    log::debug!("resized to {}x{}", new_size.width, new_size.height);
                    entry.with_mut(|fields| {
                        fields.gpu.resize(new_size);
                        fields.clock.reset();
                        fields.window.request_redraw();
                    });
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.window.as_mut() {
                    entry.with_mut(|fields| {
                        let size = fields.window.inner_size();
                        fields.gpu.resize(size);
                        fields.window.request_redraw();
                    });
                }
            }

            WindowEvent::RedrawRequested => {
                if self.redraw() == AppControl::Exit {
                    self.exit(event_loop);
                }
            }

            _ => {}
        }
    }
}
