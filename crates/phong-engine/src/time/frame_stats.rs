use std::time::Duration;

use super::FrameTime;

/// Average over one reporting window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameSummary {
    pub frames: u32,
    /// Mean frame time in seconds.
    pub mean_dt: f32,
}

impl FrameSummary {
    #[inline]
    pub fn fps(&self) -> f32 {
        if self.mean_dt > 0.0 { 1.0 / self.mean_dt } else { 0.0 }
    }
}

/// Accumulates frame times and yields a summary once `interval` has elapsed.
#[derive(Debug, Clone)]
pub struct FrameStats {
    interval: f32,
    elapsed: f32,
    frames: u32,
}

impl FrameStats {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f32(),
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Records one frame. Returns a summary when the window closes.
    pub fn record(&mut self, ft: &FrameTime) -> Option<FrameSummary> {
        self.elapsed += ft.dt;
        self.frames += 1;

        if self.elapsed < self.interval {
            return None;
        }

        let summary = FrameSummary {
            frames: self.frames,
            mean_dt: self.elapsed / self.frames as f32,
        };
        self.elapsed = 0.0;
        self.frames = 0;
        Some(summary)
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}
