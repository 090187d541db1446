//! Frame centering inside a larger canvas.

use tracing::debug;

use crate::format::PixelFormat;

/// Copy a frame unchanged into the middle of a zero-filled canvas.
///
/// The source lands at `((dest_width - src_width) / 2,
/// (dest_height - src_height) / 2)`; the border stays zero. The
/// destination must be at least as large as the source in both dimensions.
pub fn center(
    dest: &mut [u8],
    dest_width: usize,
    dest_height: usize,
    src: &[u8],
    src_width: usize,
    src_height: usize,
    format: PixelFormat,
) {
    let bytes = format.bytes_per_pixel();
    debug_assert!(
        dest_width >= src_width && dest_height >= src_height,
        "destination {dest_width}x{dest_height} smaller than source {src_width}x{src_height}"
    );
    debug_assert!(src.len() >= src_width * src_height * bytes, "source frame too small");
    debug_assert!(
        dest.len() >= dest_width * dest_height * bytes,
        "destination frame too small"
    );
    debug!(src_width, src_height, dest_width, dest_height, ?format, "centering frame");

    dest[..dest_width * dest_height * bytes].fill(0);
    let x_offset = (dest_width - src_width) / 2;
    let y_offset = (dest_height - src_height) / 2;

    for y in 0..src_height {
        let target = ((y_offset + y) * dest_width + x_offset) * bytes;
        let source = y * src_width * bytes;
        dest[target..target + src_width * bytes]
            .copy_from_slice(&src[source..source + src_width * bytes]);
    }
}

/// Indexed-frame wrapper around [`center`].
pub fn center_indexed(
    dest: &mut [u8],
    dest_width: usize,
    dest_height: usize,
    src: &[u8],
    src_width: usize,
    src_height: usize,
) {
    center(
        dest,
        dest_width,
        dest_height,
        src,
        src_width,
        src_height,
        PixelFormat::Indexed,
    );
}
