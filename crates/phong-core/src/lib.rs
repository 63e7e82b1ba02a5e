//! Shading core of the **phong** renderer.
//!
//! Everything needed to turn a material, a list of lights and a viewport into a
//! packed RGB24 frame, with no windowing or GPU code involved.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`scene`] | `Material`, `Light`, `LightKind`, `Scene` |
//! | [`shading`] | `shade`, `toon_band` |
//! | [`sampler`] | `sample_sphere`, `sample_cube`, `Orientation`, `CubeFace` |
//! | [`framebuffer`] | `FrameBuffer`, `composite` |
//! | [`viewport`] | `Viewport` |
//! | [`render`] | `RenderContext`, `Shape`, `RenderStats` |
//! | [`config`] | `parse_args`, `Options`, `ParsedArgs` |
//! | [`error`] | `ArgError` |
//!
//! # Quick start
//!
//! ```rust
//! use phong_core::{parse_args, FrameBuffer, RenderContext, Viewport};
//!
//! let parsed = parse_args(["-kd", "0.5", "0.5", "0.5", "-dl", "0", "0", "1", "1", "1", "1"]);
//! assert!(parsed.diagnostics.is_empty());
//!
//! let opts = parsed.options;
//! let ctx = RenderContext::new(&opts.scene, Viewport::new(64, 64), opts.shape, opts.toon);
//! let mut fb = FrameBuffer::new(ctx.viewport);
//! let stats = ctx.render_into(&mut fb);
//! assert!(stats.written > 0);
//! ```

pub mod config;
pub mod error;
pub mod framebuffer;
pub mod render;
pub mod sampler;
pub mod scene;
pub mod shading;
pub mod viewport;

pub use config::{parse_args, Options, ParsedArgs};
pub use error::ArgError;
pub use framebuffer::{composite, FrameBuffer};
pub use render::{RenderContext, RenderStats, Shape};
pub use sampler::{sample_cube, sample_sphere, CubeFace, Orientation, SurfaceSample};
pub use scene::{Light, LightKind, Material, Scene};
pub use shading::{shade, toon_band};
pub use viewport::Viewport;

pub use glam::{IVec2, Vec3};

/// RGB color stored in a [`Vec3`] (`x = r`, `y = g`, `z = b`).
///
/// Channels are unbounded while shading; clamping happens in the compositor.
pub type Color = Vec3;
