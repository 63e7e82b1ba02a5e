//! Frame timing.
//!
//! One [`FrameClock`] per window: call `tick()` once per presented frame.
//! [`FrameStats`] accumulates ticks into periodic averages for logging.

mod frame_clock;
mod frame_stats;

pub use frame_clock::{FrameClock, FrameTime};
pub use frame_stats::{FrameStats, FrameSummary};
