//! 2:1 frame rescaling: dedupe downscale and Scale2x upscale.
//!
//! Both directions work on whole pixel units and compare them for exact
//! byte equality, so the same code handles indexed, RGB565 and RGB24
//! frames through [`PixelFormat`].

use tracing::debug;

use crate::format::PixelFormat;

/// Halve a frame with the repeated-corner heuristic, centering the result.
///
/// For every non-overlapping 2x2 source block one pixel is emitted. The
/// corner nearest to the block's output quadrant is checked against the
/// other three first; any match emits it. Then its horizontal neighbor is
/// checked against the remaining two, then the last pair against each
/// other, falling back to the nearest corner. A block with three identical
/// corners therefore always emits the majority value. The heuristic keeps
/// anti-aliased foreground pixels alive where a plain nearest-neighbor
/// pick would drop them.
///
/// The halved frame is centered at
/// `((dest_width - src_width / 2) / 2, (dest_height - src_height / 2) / 2)`
/// in the zero-filled destination canvas. Source dimensions must be even
/// and the destination must hold the halved frame.
pub fn scale_down(
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
        src_width % 2 == 0 && src_height % 2 == 0,
        "source dimensions {src_width}x{src_height} must be even"
    );
    debug_assert!(src.len() >= src_width * src_height * bytes, "source frame too small");
    debug_assert!(
        dest.len() >= dest_width * dest_height * bytes,
        "destination frame too small"
    );
    debug!(
        src_width,
        src_height,
        dest_width,
        dest_height,
        ?format,
        "scaling frame down 2:1"
    );

    dest[..dest_width * dest_height * bytes].fill(0);
    let x_offset = (dest_width - src_width / 2) / 2;
    let y_offset = (dest_height - src_height / 2) / 2;

    let px = |offset: usize| &src[offset..offset + bytes];

    for y in (0..src_height).step_by(2) {
        for x in (0..src_width).step_by(2) {
            let upper_left = (y * src_width + x) * bytes;
            let upper_right = upper_left + bytes;
            let lower_left = upper_left + src_width * bytes;
            let lower_right = lower_left + bytes;

            // Corners ordered nearest-first for this block's quadrant:
            // nearest, its horizontal neighbor, vertical, diagonal.
            let in_left = x < src_width / 2;
            let in_top = y < src_height / 2;
            let (p0, p1, p2, p3) = match (in_top, in_left) {
                (true, true) => (upper_left, upper_right, lower_left, lower_right),
                (true, false) => (upper_right, upper_left, lower_right, lower_left),
                (false, true) => (lower_left, lower_right, upper_left, upper_right),
                (false, false) => (lower_right, lower_left, upper_right, upper_left),
            };

            let pick = if px(p0) == px(p1) || px(p0) == px(p2) || px(p0) == px(p3) {
                p0
            } else if px(p1) == px(p2) || px(p1) == px(p3) {
                p1
            } else if px(p2) == px(p3) {
                p2
            } else {
                p0
            };

            let target = ((y_offset + y / 2) * dest_width + x_offset + x / 2) * bytes;
            dest[target..target + bytes].copy_from_slice(px(pick));
        }
    }
}

/// Indexed-frame wrapper around [`scale_down`].
pub fn scale_down_indexed(
    dest: &mut [u8],
    dest_width: usize,
    dest_height: usize,
    src: &[u8],
    src_width: usize,
    src_height: usize,
) {
    scale_down(
        dest,
        dest_width,
        dest_height,
        src,
        src_width,
        src_height,
        PixelFormat::Indexed,
    );
}

/// PUP variant of the 2:1 downscale: indexed pixels, one fixed priority
/// chain (upper-left corner first) for the whole frame instead of the
/// quadrant-aware order.
pub fn scale_down_pup(
    dest: &mut [u8],
    dest_width: usize,
    dest_height: usize,
    src: &[u8],
    src_width: usize,
    src_height: usize,
) {
    debug_assert!(
        src_width % 2 == 0 && src_height % 2 == 0,
        "source dimensions {src_width}x{src_height} must be even"
    );
    debug_assert!(src.len() >= src_width * src_height, "source frame too small");
    debug_assert!(dest.len() >= dest_width * dest_height, "destination frame too small");
    debug!(src_width, src_height, dest_width, dest_height, "scaling PUP frame down 2:1");

    dest[..dest_width * dest_height].fill(0);
    let x_offset = (dest_width - src_width / 2) / 2;
    let y_offset = (dest_height - src_height / 2) / 2;

    for y in (0..src_height).step_by(2) {
        for x in (0..src_width).step_by(2) {
            let upper_left = src[y * src_width + x];
            let upper_right = src[y * src_width + x + 1];
            let lower_left = src[(y + 1) * src_width + x];
            let lower_right = src[(y + 1) * src_width + x + 1];

            let pick = if upper_left == upper_right
                || upper_left == lower_left
                || upper_left == lower_right
            {
                upper_left
            } else if upper_right == lower_left || upper_right == lower_right {
                upper_right
            } else if lower_left == lower_right {
                lower_left
            } else {
                upper_left
            };

            dest[(y_offset + y / 2) * dest_width + x_offset + x / 2] = pick;
        }
    }
}

/// Double a frame with the Scale2x edge-directed algorithm.
///
/// For each source pixel `e`, the top/bottom neighbors `b`/`h` and
/// left/right neighbors `d`/`f` decide the 2x2 output block: when `b != h`
/// and `d != f`, each output corner takes the matching edge neighbor
/// (`d == b`, `b == f`, `d == h`, `h == f`), otherwise the whole block is
/// `e`. Neighbors outside the frame are replicated from the nearest edge.
/// The destination must hold `src_width * src_height * 4` pixels.
pub fn scale_up(
    dest: &mut [u8],
    src: &[u8],
    src_width: usize,
    src_height: usize,
    format: PixelFormat,
) {
    let bytes = format.bytes_per_pixel();
    debug_assert!(src.len() >= src_width * src_height * bytes, "source frame too small");
    debug_assert!(
        dest.len() >= src_width * src_height * 4 * bytes,
        "destination frame too small"
    );
    debug!(src_width, src_height, ?format, "scaling frame up 2x");

    let dest_width = src_width * 2;
    let px = |x: usize, y: usize| {
        let offset = (y * src_width + x) * bytes;
        &src[offset..offset + bytes]
    };

    for y in 0..src_height {
        for x in 0..src_width {
            let left = x.saturating_sub(1);
            let right = (x + 1).min(src_width - 1);
            let up = y.saturating_sub(1);
            let down = (y + 1).min(src_height - 1);

            let b = px(x, up);
            let d = px(left, y);
            let e = px(x, y);
            let f = px(right, y);
            let h = px(x, down);

            let (out0, out1, out2, out3) = if b != h && d != f {
                (
                    if d == b { d } else { e },
                    if b == f { f } else { e },
                    if d == h { d } else { e },
                    if h == f { f } else { e },
                )
            } else {
                (e, e, e, e)
            };

            let top_row = (y * 2 * dest_width + x * 2) * bytes;
            let bottom_row = ((y * 2 + 1) * dest_width + x * 2) * bytes;
            dest[top_row..top_row + bytes].copy_from_slice(out0);
            dest[top_row + bytes..top_row + 2 * bytes].copy_from_slice(out1);
            dest[bottom_row..bottom_row + bytes].copy_from_slice(out2);
            dest[bottom_row + bytes..bottom_row + 2 * bytes].copy_from_slice(out3);
        }
    }
}

/// Indexed-frame wrapper around [`scale_up`].
pub fn scale_up_indexed(dest: &mut [u8], src: &[u8], src_width: usize, src_height: usize) {
    scale_up(dest, src, src_width, src_height, PixelFormat::Indexed);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x4 indexed frame from four 2x2 blocks given as corner quadruples
    /// `[upper_left, upper_right, lower_left, lower_right]`.
    fn frame_from_blocks(blocks: [[u8; 4]; 4]) -> Vec<u8> {
        let mut frame = vec![0u8; 16];
        for (i, block) in blocks.iter().enumerate() {
            let bx = (i % 2) * 2;
            let by = (i / 2) * 2;
            frame[by * 4 + bx] = block[0];
            frame[by * 4 + bx + 1] = block[1];
            frame[(by + 1) * 4 + bx] = block[2];
            frame[(by + 1) * 4 + bx + 1] = block[3];
        }
        frame
    }

    #[test]
    fn test_scale_down_majority_wins_in_every_quadrant() {
        // Three corners share a value in each block; the odd one out sits
        // in a different position per quadrant.
        let src = frame_from_blocks([
            [5, 9, 9, 9], // upper-left quadrant, odd corner nearest
            [7, 7, 2, 7], // upper-right quadrant
            [4, 4, 4, 1], // lower-left quadrant
            [8, 3, 8, 8], // lower-right quadrant
        ]);
        let mut dest = vec![0u8; 4];

        scale_down_indexed(&mut dest, 2, 2, &src, 4, 4);

        assert_eq!(dest, vec![9, 7, 4, 8]);
    }

    #[test]
    fn test_scale_down_all_distinct_falls_back_to_nearest_corner() {
        let src = frame_from_blocks([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 15, 16],
        ]);
        let mut dest = vec![0u8; 4];

        scale_down_indexed(&mut dest, 2, 2, &src, 4, 4);

        // Upper-left block keeps its upper-left corner, and so on around.
        assert_eq!(dest, vec![1, 6, 11, 16]);
    }

    #[test]
    fn test_scale_down_centers_in_larger_canvas() {
        let src = vec![3u8; 16];
        let mut dest = vec![0xffu8; 16];

        scale_down_indexed(&mut dest, 4, 4, &src, 4, 4);

        for y in 0..4 {
            for x in 0..4 {
                let expected = if (1..3).contains(&x) && (1..3).contains(&y) { 3 } else { 0 };
                assert_eq!(dest[y * 4 + x], expected, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_scale_down_rgb565_compares_whole_pixels() {
        // Two-byte pixels: three matching corners must win as a unit even
        // though single bytes of the odd corner collide with them.
        let a = [0x12u8, 0x34];
        let odd = [0x12u8, 0x99];
        let mut src = Vec::new();
        for row in [[a, a], [odd, a]] {
            for pixel in row {
                src.extend_from_slice(&pixel);
            }
        }
        let mut dest = vec![0u8; 2];

        scale_down(&mut dest, 1, 1, &src, 2, 2, PixelFormat::Rgb565);

        assert_eq!(dest, a);
    }

    #[test]
    fn test_scale_down_pup_fixed_priority() {
        // Upper-left differs from everything; the lower pair agrees.
        let src = vec![
            1, 2, //
            3, 3,
        ];
        let mut dest = vec![0u8; 1];
        scale_down_pup(&mut dest, 1, 1, &src, 2, 2);
        assert_eq!(dest[0], 3);

        // All four distinct falls back to the upper-left pixel, even in
        // what would be another quadrant for the non-PUP variant.
        let src = frame_from_blocks([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 15, 16],
        ]);
        let mut dest = vec![0u8; 4];
        scale_down_pup(&mut dest, 2, 2, &src, 4, 4);
        assert_eq!(dest, vec![1, 5, 9, 13]);
    }

    #[test]
    fn test_scale_up_uniform_frame_stays_uniform() {
        let src = vec![7u8; 5 * 4];
        let mut dest = vec![0u8; 10 * 8];

        scale_up_indexed(&mut dest, &src, 5, 4);

        assert!(dest.iter().all(|&px| px == 7));
    }

    #[test]
    fn test_scale_up_checkerboard_corners() {
        // 2x2 checkerboard: for the top-left pixel, the clamped top and
        // left neighbors equal it, so only the lower-right output cell
        // picks up the diagonal edge.
        let src = vec![
            1, 2, //
            2, 1,
        ];
        let mut dest = vec![0u8; 16];

        scale_up_indexed(&mut dest, &src, 2, 2);

        assert_eq!(dest[0], 1);
        assert_eq!(dest[1], 1);
        assert_eq!(dest[4], 1);
        assert_eq!(dest[5], 2);
    }

    #[test]
    fn test_scale_up_single_row_doubles_pixels() {
        // With one row the top and bottom neighbors clamp to the pixel
        // itself, so Scale2x degenerates to plain pixel doubling.
        let src = vec![1u8, 2, 3];
        let mut dest = vec![0u8; 12];

        scale_up_indexed(&mut dest, &src, 3, 1);

        assert_eq!(dest, vec![1, 1, 2, 2, 3, 3, 1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn test_scale_up_rgb24_moves_whole_pixels() {
        let red = [0xff, 0, 0];
        let blue = [0, 0, 0xff];
        let mut src = Vec::new();
        src.extend_from_slice(&red);
        src.extend_from_slice(&blue);
        let mut dest = vec![0u8; 2 * 3 * 4];

        scale_up(&mut dest, &src, 2, 1, PixelFormat::Rgb24);

        // Single row degenerates to pixel doubling of 3-byte units.
        let row: Vec<u8> = [red, red, blue, blue].concat();
        assert_eq!(&dest[..12], &row[..]);
        assert_eq!(&dest[12..], &row[..]);
    }
}
