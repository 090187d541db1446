//! Frame conversion and resampling for dot-matrix display (DMD) hardware.
//!
//! Converts caller-owned raster frames between pixel encodings (8-bit
//! indexed, RGB565, RGB24), between resolutions (2:1 scaling, centering,
//! bilinear resize), and into the bit-plane and dot-pair layouts that drive
//! chained LED matrix panels wired in Adafruit order.
//!
//! Every operation is a synchronous buffer-in/buffer-out transform: the
//! caller allocates correctly sized source and destination buffers and
//! passes the matching geometry on every call. Nothing is retained between
//! calls, so independent invocations are safe from any number of threads.
//! Buffer-size contracts are debug-asserted and unchecked in release builds.

pub mod brightness;
pub mod center;
pub mod format;
pub mod hexdump;
pub mod mapping;
pub mod palette;
pub mod planes;
pub mod resize;
pub mod scale;

// Re-exports for convenience
pub use brightness::calc_brightness;
pub use center::{center, center_indexed};
pub use format::PixelFormat;
pub use hexdump::hex_dump;
pub use mapping::map_adafruit_index;
pub use palette::indexed_to_rgb24;
pub use planes::{ColorMatrix, ParseColorMatrixError, split_into_bit_planes, split_into_rgb_dot_pairs};
pub use resize::{interpolate_rgb565_color, interpolated_rgb565_pixel, resize_rgb565_bilinear};
pub use scale::{scale_down, scale_down_indexed, scale_down_pup, scale_up, scale_up_indexed};

/// Edge length in dots of one physical sub-matrix in a chained panel.
pub const MATRIX_DIM: usize = 32;
