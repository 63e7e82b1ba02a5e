use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};

use phong_core::FrameBuffer;

/// Writes `frame` as a 24-bit RGB PNG, dimensions equal to the buffer's.
///
/// Consumes the buffer so its pixels move into the encoder without a copy.
pub fn save_png(frame: FrameBuffer, path: &Path) -> Result<()> {
    let (width, height) = (frame.width(), frame.height());
    let img = RgbImage::from_raw(width, height, frame.into_bytes())
        .context("frame buffer length does not match its dimensions")?;

    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write PNG to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use phong_core::{Color, IVec2, Viewport};

    fn temp_png(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("phong-{}-{name}.png", std::process::id()))
    }

    #[test]
    fn written_file_decodes_to_same_pixels() {
        let mut frame = FrameBuffer::new(Viewport::new(4, 3));
        frame.put(IVec2::new(0, 0), Color::new(1.0, 0.0, 0.0));
        frame.put(IVec2::new(3, 2), Color::new(0.0, 0.5, 1.0));

        let expected = frame.as_bytes().to_vec();
        let path = temp_png("roundtrip");
        save_png(frame, &path).expect("save");

        let decoded = image::open(&path).expect("decode").to_rgb8();
        let _ = std::fs::remove_file(&path);

        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.as_raw(), &expected);
        // y = 0 is the bottom row of the image.
        assert_eq!(decoded.get_pixel(0, 2).0, [255, 0, 0]);
        assert_eq!(decoded.get_pixel(3, 0).0, [0, 127, 255]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let frame = FrameBuffer::new(Viewport::new(2, 2));
        let path = std::env::temp_dir()
            .join(format!("phong-missing-{}", std::process::id()))
            .join("out.png");

        let err = save_png(frame, &path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to write PNG"));
    }
}
