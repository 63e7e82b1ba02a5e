//! One full render pass: sample, shade, band, composite.

use crate::framebuffer::FrameBuffer;
use crate::sampler::{sample_cube, sample_sphere, SurfaceSample};
use crate::scene::Scene;
use crate::shading::{shade, toon_band};
use crate::viewport::Viewport;

/// Shape being rendered.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Shape {
    #[default]
    Sphere,
    Cube,
}

impl Shape {
    /// Sampling radius for this shape inside a disc of `draw_radius` pixels.
    ///
    /// The cube is scaled to fit the canvas. The rotated unit cube reaches √3
    /// from its center, so its radius is `floor(draw_radius / √3)` to stay
    /// inside the same disc as the sphere; unscaled, its corners would land
    /// off a square window. Cube offsets are rounded to the nearest pixel.
    pub fn sample_radius(self, draw_radius: i32) -> i32 {
        match self {
            Shape::Sphere => draw_radius,
            Shape::Cube => (draw_radius as f32 / 3f32.sqrt()).floor() as i32,
        }
    }
}

/// Counters from one render pass.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RenderStats {
    /// Samples produced by the sampler.
    pub samples: usize,
    /// Samples that landed inside the viewport.
    pub written: usize,
}

/// Everything a render pass reads. Borrowed, never mutated.
#[derive(Debug, Copy, Clone)]
pub struct RenderContext<'a> {
    pub scene: &'a Scene,
    pub viewport: Viewport,
    pub shape: Shape,
    pub toon: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(scene: &'a Scene, viewport: Viewport, shape: Shape, toon: bool) -> Self {
        Self { scene, viewport, shape, toon }
    }

    /// Resizes and clears `fb`, then rewrites it completely.
    pub fn render_into(&self, fb: &mut FrameBuffer) -> RenderStats {
        fb.resize(self.viewport);

        let radius = self.shape.sample_radius(self.viewport.draw_radius());
        match self.shape {
            Shape::Sphere => self.composite(fb, sample_sphere(radius)),
            Shape::Cube => self.composite(fb, sample_cube(radius)),
        }
    }

    /// Convenience wrapper returning a new buffer.
    pub fn render(&self) -> (FrameBuffer, RenderStats) {
        let mut fb = FrameBuffer::new(self.viewport);
        let stats = self.render_into(&mut fb);
        (fb, stats)
    }

    fn composite<I>(&self, fb: &mut FrameBuffer, samples: I) -> RenderStats
    where
        I: Iterator<Item = SurfaceSample>,
    {
        let center = self.viewport.draw_center();
        let material = &self.scene.material;
        let lights = self.scene.lights.as_slice();
        let mut stats = RenderStats::default();

        for s in samples {
            let mut color = shade(s.position, s.normal, material, lights);
            if self.toon {
                color = toon_band(color);
            }
            stats.samples += 1;
            if fb.put(center + s.offset, color) {
                stats.written += 1;
            }
        }

        stats
    }
}
