//! Bit-plane and PWM dot-pair encodings for LED matrix transmission.
//!
//! Binary-output LED drivers approximate multi-level brightness by clocking
//! out one bit of significance per scan cycle. [`split_into_bit_planes`]
//! prepares indexed frames for that scheme; [`split_into_rgb_dot_pairs`]
//! does the same for RGB565 frames on RGB matrix panels, packing two
//! vertically paired pixels into one byte per PWM sub-cycle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mapping::map_adafruit_index;

/// Vertical distance between the two rows packed into one dot pair.
const PAIR_OFFSET: usize = 16;

/// Channel order used when decomposing RGB565 into per-bit dot pairs.
///
/// Some panel revisions wire the green and blue shift registers swapped;
/// `Rbg` compensates by swapping which 5-6-5 field feeds each output bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMatrix {
    #[default]
    Rgb,
    Rbg,
}

/// Error returned when parsing a [`ColorMatrix`] from a settings string.
#[derive(Debug, thiserror::Error)]
#[error("unknown color matrix `{0}`, expected `rgb` or `rbg`")]
pub struct ParseColorMatrixError(String);

impl FromStr for ColorMatrix {
    type Err = ParseColorMatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorMatrix::Rgb),
            "rbg" => Ok(ColorMatrix::Rbg),
            _ => Err(ParseColorMatrixError(s.to_string())),
        }
    }
}

impl fmt::Display for ColorMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMatrix::Rgb => f.write_str("rgb"),
            ColorMatrix::Rbg => f.write_str("rbg"),
        }
    }
}

/// Split an indexed frame into `bitlen` contiguous bit planes.
///
/// Each plane is `width * height / 8` bytes; bit `v` of plane `i`'s byte at
/// position `p` is bit `i` of the source pixel at `p * 8 + v`. `width` must
/// be a multiple of 8 and `bitlen` at most 8.
pub fn split_into_bit_planes(
    width: usize,
    height: usize,
    bitlen: usize,
    src: &[u8],
    planes: &mut [u8],
) {
    debug_assert!(width % 8 == 0, "width {width} must be a multiple of 8");
    debug_assert!(bitlen <= 8, "bitlen {bitlen} exceeds pixel depth");
    debug_assert!(src.len() >= width * height, "source frame too small");
    debug_assert!(
        planes.len() >= width * height / 8 * bitlen,
        "plane buffer too small"
    );
    debug!(width, height, bitlen, "splitting frame into bit planes");

    let plane_size = width * height / 8;
    let mut pos = 0;
    let mut packed = [0u8; 8];

    for y in 0..height {
        for x in (0..width).step_by(8) {
            packed[..bitlen].fill(0);

            for v in (0..8).rev() {
                let pixel = src[y * width + x + v];
                for (i, byte) in packed[..bitlen].iter_mut().enumerate() {
                    *byte = (*byte << 1) | ((pixel >> i) & 1);
                }
            }

            for (i, &byte) in packed[..bitlen].iter().enumerate() {
                planes[i * plane_size + pos] = byte;
            }

            pos += 1;
        }
    }
}

/// Split an RGB565 frame into three PWM sub-frames of packed dot pairs.
///
/// Each pixel in a row with `y % 32 < 16` is paired with the pixel 16 rows
/// below it; rows in the other half of each band are covered by their
/// partner and skipped. The top 3 bits of each color channel feed one
/// sub-frame each, least significant first, packed as `r0 g0 b0 r1 g1 b1`
/// (bit 5 down to bit 0). Placement within a sub-frame follows
/// [`map_adafruit_index`]; sub-frames are contiguous, each
/// `src.len() / 2` bytes, so `dest` must hold `3 * src.len() / 2` bytes.
pub fn split_into_rgb_dot_pairs(
    src: &[u16],
    width: usize,
    num_logical_rows: usize,
    color_matrix: ColorMatrix,
    dest: &mut [u8],
) {
    let height = src.len() / width;
    let subframe_size = src.len() / 2;
    debug_assert!(src.len() % width == 0, "frame length not a row multiple");
    debug_assert!(
        dest.len() >= subframe_size * 3,
        "dot pair destination too small: {} < {}",
        dest.len(),
        subframe_size * 3
    );
    debug!(
        width,
        height,
        num_logical_rows,
        %color_matrix,
        "splitting rgb565 frame into dot pairs"
    );

    for x in 0..width {
        for y in 0..height {
            if y % (PAIR_OFFSET * 2) >= PAIR_OFFSET {
                continue;
            }

            let color0 = src[y * width + x];
            let color1 = src[(y + PAIR_OFFSET) * width + x];

            let [mut r0, mut g0, mut b0] = channel_levels(color0, color_matrix);
            let [mut r1, mut g1, mut b1] = channel_levels(color1, color_matrix);

            let index_within_subframe =
                map_adafruit_index(x, y, width, height, num_logical_rows);

            for subframe in 0..3 {
                let dot_pair = (r0 & 1) << 5
                    | (g0 & 1) << 4
                    | (b0 & 1) << 3
                    | (r1 & 1) << 2
                    | (g1 & 1) << 1
                    | (b1 & 1);
                dest[subframe * subframe_size + index_within_subframe] = dot_pair;

                r0 >>= 1;
                g0 >>= 1;
                b0 >>= 1;
                r1 >>= 1;
                g1 >>= 1;
                b1 >>= 1;
            }
        }
    }
}

/// Top 3 bits of each 5-6-5 channel as `[r, g, b]` intensity levels.
#[inline]
fn channel_levels(color: u16, matrix: ColorMatrix) -> [u8; 3] {
    let hi = (color >> 13) as u8;
    let mid = ((color >> 8) & 0x7) as u8;
    let lo = ((color >> 2) & 0x7) as u8;
    match matrix {
        ColorMatrix::Rgb => [hi, mid, lo],
        ColorMatrix::Rbg => [hi, lo, mid],
    }
}
