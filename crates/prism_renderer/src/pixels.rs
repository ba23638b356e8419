//! RGBA output buffer and color encoding.
//!
//! Channel conversion follows clamped-byte semantics: values are rounded,
//! clamped into [0, 255], and NaN becomes 0.

use image::{Rgba, RgbaImage};
use prism_math::{Color, Interval};

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Gamma-encoded values are clamped here before scaling to 0..=255.
const GAMMA_RANGE: Interval = Interval::new(0.0, 0.999);

/// Row-major RGBA8 pixel buffer of exactly `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zeroed (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn offset(&self, x: u32, row: u32) -> Option<usize> {
        if x >= self.width || row >= self.height {
            return None;
        }
        Some((row as usize * self.width as usize + x as usize) * CHANNELS)
    }

    /// Write a pixel. Returns false when (x, row) lies outside the buffer,
    /// in which case nothing is written.
    pub fn put(&mut self, x: u32, row: u32, rgba: [u8; 4]) -> bool {
        match self.offset(x, row) {
            Some(i) => {
                self.data[i..i + CHANNELS].copy_from_slice(&rgba);
                true
            }
            None => false,
        }
    }

    /// Read a pixel, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, row: u32) -> Option<[u8; 4]> {
        let i = self.offset(x, row)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.data[i..i + CHANNELS]);
        Some(rgba)
    }

    /// Raw bytes, row-major RGBA.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Convert to an `image` buffer for saving or display.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(self.pixel(x, y).unwrap_or([0; 4]))
        })
    }
}

/// Store a float channel into a byte the way a clamped byte array does.
#[inline]
fn clamp_to_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0) as u8
}

/// Encode a single-sample color: linear scale to 0..=255, no gamma.
pub fn unit_color_to_rgba(color: Color) -> [u8; 4] {
    let encode = |c: f64| clamp_to_byte((255.0 * c).round_ties_even());
    [encode(color.x), encode(color.y), encode(color.z), 255]
}

/// Encode a sum of `samples` colors: average, gamma 2 (square root),
/// clamp to [0, 0.999], then scale by 256.
pub fn multisample_to_rgba(accumulated: Color, samples: u32) -> [u8; 4] {
    let scale = 1.0 / samples as f64;
    let encode = |c: f64| {
        let gamma = (scale * c).sqrt();
        clamp_to_byte((256.0 * GAMMA_RANGE.clamp(gamma)).round())
    };
    [
        encode(accumulated.x),
        encode(accumulated.y),
        encode(accumulated.z),
        255,
    ]
}
