use glam::IVec2;

use crate::viewport::Viewport;
use crate::Color;

/// Bytes per pixel (packed RGB24).
pub const BYTES_PER_PIXEL: usize = 3;

/// Packed RGB24 pixel buffer, row-major, top row first.
///
/// Writes use +y-up screen coordinates and are flipped on the way in, so the
/// byte layout is what top-down image encoders and texture uploads expect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Allocates a zeroed (black) buffer for `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            data: vec![0; viewport.area() * BYTES_PER_PIXEL],
        }
    }

    /// Resizes to `viewport` and zero-fills every byte.
    pub fn resize(&mut self, viewport: Viewport) {
        self.width = viewport.width;
        self.height = viewport.height;
        self.data.clear();
        self.data.resize(viewport.area() * BYTES_PER_PIXEL, 0);
    }

    /// Zero-fills the buffer without changing its size.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Writes `color` at screen position `pos` (+y up).
    ///
    /// Channels are clamped to `[0, 1]`, scaled by 255 and truncated. Positions
    /// outside `[0, w) x [0, h)` are dropped. Returns whether a pixel was written.
    pub fn put(&mut self, pos: IVec2, color: Color) -> bool {
        let Some(idx) = self.index(pos) else { return false };
        self.data[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&to_rgb8(color));
        true
    }

    /// Reads the pixel at screen position `pos` (+y up).
    pub fn get(&self, pos: IVec2) -> Option<[u8; 3]> {
        let idx = self.index(pos)?;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Reads the pixel at image column `x`, image row `row` (row 0 = top).
    pub fn pixel(&self, x: u32, row: u32) -> Option<[u8; 3]> {
        if x >= self.width || row >= self.height {
            return None;
        }
        let idx = (row as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    fn index(&self, pos: IVec2) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as u32, pos.y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        let row = (self.height - 1 - y) as usize;
        Some((row * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

/// Clamps to `[0, 1]` and quantizes by truncation. NaN maps to 0.
#[inline]
pub fn to_rgb8(color: Color) -> [u8; 3] {
    let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u8;
    [q(color.x), q(color.y), q(color.z)]
}

/// Builds a fresh buffer from `(screen position, color)` pairs. Last write wins.
pub fn composite<I>(samples: I, viewport: Viewport) -> FrameBuffer
where
    I: IntoIterator<Item = (IVec2, Color)>,
{
    let mut fb = FrameBuffer::new(viewport);
    for (pos, color) in samples {
        fb.put(pos, color);
    }
    fb
}
