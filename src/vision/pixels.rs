use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Aggregate colour statistics of a sampled frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelMetrics {
    /// Mean luma, 0-255.
    pub brightness: f64,
    /// Mean red over mean blue; above 1 reads warm, below 1 cool.
    pub warmth: f64,
    /// (max - min) / max over the channel means, 0-1.
    pub saturation: f64,
    /// Fraction of skin-toned pixels, 0-1.
    pub skin_ratio: f64,
    /// Population standard deviation of per-pixel luma.
    pub contrast: f64,
    pub has_face: bool,
}

fn luma(r: f64, g: f64, b: f64) -> f64 {
    0.299 * r + 0.587 * g + 0.114 * b
}

/// YCbCr skin-tone test (ITU-R BT.601 approximation).
pub fn is_skin_pixel(r: f64, g: f64, b: f64) -> bool {
    let y = luma(r, g, b);
    let cb = 128.0 - 0.169 * r - 0.331 * g + 0.500 * b;
    let cr = 128.0 + 0.500 * r - 0.419 * g - 0.081 * b;
    y > 80.0 && cb > 77.0 && cb < 127.0 && cr > 133.0 && cr < 173.0
}

/// Scan every pixel of the sample buffer once. Alpha is ignored.
pub fn extract_metrics(sample: &RgbaImage, face_skin_ratio: f64) -> PixelMetrics {
    let pixel_count = (sample.width() as usize * sample.height() as usize) as f64;

    let (mut total_r, mut total_g, mut total_b) = (0.0_f64, 0.0_f64, 0.0_f64);
    let mut skin_pixels = 0_usize;
    let mut brightness_values = Vec::with_capacity(pixel_count as usize);

    for pixel in sample.pixels() {
        let [r, g, b, _] = pixel.0;
        let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));

        total_r += r;
        total_g += g;
        total_b += b;
        brightness_values.push(luma(r, g, b));

        if is_skin_pixel(r, g, b) {
            skin_pixels += 1;
        }
    }

    let avg_r = total_r / pixel_count;
    let avg_g = total_g / pixel_count;
    let avg_b = total_b / pixel_count;
    let brightness = brightness_values.iter().fold(0.0, |acc, v| acc + v) / pixel_count;

    let variance = brightness_values
        .iter()
        .fold(0.0, |acc, v| acc + (v - brightness).powi(2))
        / pixel_count;
    let contrast = variance.sqrt();

    let warmth = if avg_b > 0.0 { avg_r / avg_b } else { 2.0 };

    let max_c = avg_r.max(avg_g).max(avg_b);
    let min_c = avg_r.min(avg_g).min(avg_b);
    let saturation = if max_c > 0.0 { (max_c - min_c) / max_c } else { 0.0 };

    let skin_ratio = skin_pixels as f64 / pixel_count;

    PixelMetrics {
        brightness,
        warmth,
        saturation,
        skin_ratio,
        contrast,
        has_face: skin_ratio > face_skin_ratio,
    }
}
