//! phong engine crate.
//!
//! Platform + GPU runtime for the renderer: a single `winit` window, a `wgpu`
//! surface, frame timing, logging, and a presenter that streams a CPU-side
//! RGB24 frame to the screen.

pub mod core;
pub mod device;
pub mod present;
pub mod render;
pub mod time;
pub mod window;

pub mod logging;
