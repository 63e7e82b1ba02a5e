//! GPU device + swapchain for the viewer window.
//!
//! [`Gpu`] owns the wgpu device, queue and surface for one window, keeps the
//! surface in sync with the window size, and turns surface errors into a
//! [`SurfaceErrorAction`] the frame loop can act on.

mod context;
mod init;
mod surface;

pub use context::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
