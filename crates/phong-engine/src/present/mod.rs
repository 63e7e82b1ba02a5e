//! Presentation of CPU-rendered frames.

mod framebuffer;

pub use framebuffer::{expand_rgb_to_rgba, upload_format, FramebufferPresenter};
