//! Pixel encodings handled by the scaling and centering routines.

use serde::{Deserialize, Serialize};

/// Pixel encoding of a raw frame buffer.
///
/// The scaling and centering routines move whole pixel units and compare
/// them for exact equality; the format only contributes the unit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// 8-bit palette-indexed pixels.
    Indexed,
    /// 16-bit 5-6-5 RGB pixels.
    Rgb565,
    /// 24-bit RGB pixels.
    Rgb24,
}

impl PixelFormat {
    /// Width of one pixel in bytes.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Indexed => 1,
            PixelFormat::Rgb565 => 2,
            PixelFormat::Rgb24 => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_per_pixel() {
        assert_eq!(PixelFormat::Indexed.bytes_per_pixel(), 1);
        assert_eq!(PixelFormat::Rgb565.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::Rgb24.bytes_per_pixel(), 3);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&PixelFormat::Rgb565).unwrap();
        assert_eq!(json, "\"rgb565\"");
        let back: PixelFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PixelFormat::Rgb565);
    }
}
