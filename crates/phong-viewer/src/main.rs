use std::path::Path;

use anyhow::Result;

use phong_core::{parse_args, Options, ParsedArgs, RenderContext, Viewport};
use phong_engine::device::GpuInit;
use phong_engine::logging::{init_logging, LoggingConfig};
use phong_engine::window::{Runtime, RuntimeConfig};

mod app;
mod sink;

use app::ShadeApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let ParsedArgs { options, diagnostics } = parse_args(std::env::args().skip(1));
    for diagnostic in &diagnostics {
        log::warn!("{diagnostic}");
    }

    log::info!(
        "{:?}, {} light(s){}",
        options.shape,
        options.scene.lights.len(),
        if options.toon { ", toon" } else { "" }
    );

    if let Some(path) = &options.save_path {
        if let Err(err) = save_first_frame(&options, path) {
            log::error!("{err:#}");
            if !options.display {
                return Err(err);
            }
        }
    }

    if !options.display {
        log::info!("display disabled, exiting");
        return Ok(());
    }

    Runtime::run(RuntimeConfig::default(), GpuInit::default(), ShadeApp::new(options))
}

/// Renders at the initial canvas size and writes the PNG.
fn save_first_frame(options: &Options, path: &Path) -> Result<()> {
    let ctx = RenderContext::new(&options.scene, Viewport::INITIAL, options.shape, options.toon);
    let (frame, stats) = ctx.render();
    log::debug!("batch render: {} samples, {} written", stats.samples, stats.written);

    sink::save_png(frame, path)?;
    log::info!("saved {}", path.display());
    Ok(())
}
