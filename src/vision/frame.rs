use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::error::{MoodError, Result};

/// Anything the camera or upload flow can hand over for analysis.
#[derive(Debug, Clone, Copy)]
pub enum MediaInput<'a> {
    /// Encoded image bytes (PNG, JPEG, ...).
    Encoded(&'a [u8]),
    /// An already decoded image.
    Image(&'a DynamicImage),
    /// A raw RGBA video frame or canvas readback.
    Rgba {
        width: u32,
        height: u32,
        pixels: &'a [u8],
    },
}

impl MediaInput<'_> {
    /// Draw the source into a `size`x`size` RGBA buffer. Aspect ratio is not
    /// preserved and nothing is letterboxed.
    pub fn render(&self, size: u32) -> Result<RgbaImage> {
        let full = match *self {
            MediaInput::Encoded(bytes) => image::load_from_memory(bytes)
                .map_err(|err| MoodError::image_decode("unsupported or corrupt image data", err))?
                .to_rgba8(),
            MediaInput::Image(image) => image.to_rgba8(),
            MediaInput::Rgba {
                width,
                height,
                pixels,
            } => {
                ensure_not_empty(width, height)?;
                let expected = width as usize * height as usize * 4;
                if pixels.len() != expected {
                    return Err(MoodError::FrameSizeMismatch {
                        width,
                        height,
                        expected,
                        actual: pixels.len(),
                    });
                }
                RgbaImage::from_raw(width, height, pixels.to_vec()).ok_or(
                    MoodError::FrameSizeMismatch {
                        width,
                        height,
                        expected,
                        actual: pixels.len(),
                    },
                )?
            }
        };

        ensure_not_empty(full.width(), full.height())?;
        if full.width() == size && full.height() == size {
            return Ok(full);
        }
        Ok(imageops::resize(&full, size, size, FilterType::Triangle))
    }
}

fn ensure_not_empty(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(MoodError::EmptyFrame { width, height });
    }
    Ok(())
}
