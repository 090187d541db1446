//! RGB565 bilinear resize with aspect-preserving letterboxing.

use tracing::debug;

/// Linearly interpolate two RGB565 colors.
///
/// Each 5-6-5 channel is interpolated independently and clamped to its bit
/// range before repacking. `ratio` 0.0 yields `color1`, 1.0 yields `color2`.
pub fn interpolate_rgb565_color(color1: u16, color2: u16, ratio: f32) -> u16 {
    let red1 = (color1 >> 11) as i32;
    let green1 = ((color1 >> 5) & 0x3f) as i32;
    let blue1 = (color1 & 0x1f) as i32;

    let red2 = (color2 >> 11) as i32;
    let green2 = ((color2 >> 5) & 0x3f) as i32;
    let blue2 = (color2 & 0x1f) as i32;

    let red = (red1 + ((red2 - red1) as f32 * ratio) as i32).clamp(0, 0x1f);
    let green = (green1 + ((green2 - green1) as f32 * ratio) as i32).clamp(0, 0x3f);
    let blue = (blue1 + ((blue2 - blue1) as f32 * ratio) as i32).clamp(0, 0x1f);

    ((red << 11) | (green << 5) | blue) as u16
}

/// Sample an RGB565 frame at a fractional coordinate.
///
/// The four enclosing source pixels are interpolated channel-wise in 2D;
/// samples on the last row or column clamp to the frame edge instead of
/// reading out of bounds. Coordinates must already be within
/// `[0, src_width - 1]` x `[0, src_height - 1]`.
pub fn interpolated_rgb565_pixel(
    src: &[u16],
    src_x: f32,
    src_y: f32,
    src_width: usize,
    src_height: usize,
) -> u16 {
    let x = src_x as usize;
    let y = src_y as usize;
    let x_diff = src_x - x as f32;
    let y_diff = src_y - y as f32;

    let offset = y * src_width + x;
    let a = src[offset];
    let b = if x < src_width - 1 { src[offset + 1] } else { a };
    let c = if y < src_height - 1 { src[offset + src_width] } else { a };
    let d = if x < src_width - 1 && y < src_height - 1 {
        src[offset + src_width + 1]
    } else {
        c
    };

    let channels = |color: u16| {
        (
            (color >> 11) as f32,
            ((color >> 5) & 0x3f) as f32,
            (color & 0x1f) as f32,
        )
    };
    let (red_a, green_a, blue_a) = channels(a);
    let (red_b, green_b, blue_b) = channels(b);
    let (red_c, green_c, blue_c) = channels(c);
    let (red_d, green_d, blue_d) = channels(d);

    let red_ab = red_a + (red_b - red_a) * x_diff;
    let green_ab = green_a + (green_b - green_a) * x_diff;
    let blue_ab = blue_a + (blue_b - blue_a) * x_diff;

    let red_cd = red_c + (red_d - red_c) * x_diff;
    let green_cd = green_c + (green_d - green_c) * x_diff;
    let blue_cd = blue_c + (blue_d - blue_c) * x_diff;

    let red = (red_ab + (red_cd - red_ab) * y_diff).clamp(0.0, 31.0);
    let green = (green_ab + (green_cd - green_ab) * y_diff).clamp(0.0, 63.0);
    let blue = (blue_ab + (blue_cd - blue_ab) * y_diff).clamp(0.0, 31.0);

    ((red as u16) << 11) | ((green as u16) << 5) | blue as u16
}

/// Bilinearly resize an RGB565 frame into a letterboxed destination.
///
/// The source aspect ratio is preserved: the limiting axis fills the
/// destination and the scaled content is centered, with the remaining
/// canvas zero-filled rather than stretched. Sample coordinates use
/// half-pixel-center mapping clamped to the source bounds.
pub fn resize_rgb565_bilinear(
    src: &[u16],
    src_width: usize,
    src_height: usize,
    dest: &mut [u16],
    dest_width: usize,
    dest_height: usize,
) {
    debug_assert!(src.len() >= src_width * src_height, "source frame too small");
    debug_assert!(
        dest.len() >= dest_width * dest_height,
        "destination frame too small"
    );

    dest[..dest_width * dest_height].fill(0);

    let src_aspect = src_width as f32 / src_height as f32;
    let dest_aspect = dest_width as f32 / dest_height as f32;
    let (scaled_width, scaled_height) = if src_aspect > dest_aspect {
        (dest_width, (dest_width as f32 / src_aspect) as usize)
    } else {
        ((dest_height as f32 * src_aspect) as usize, dest_height)
    };
    debug!(
        src_width,
        src_height,
        dest_width,
        dest_height,
        scaled_width,
        scaled_height,
        "resizing rgb565 frame"
    );

    let offset_x = (dest_width - scaled_width) / 2;
    let offset_y = (dest_height - scaled_height) / 2;
    let offset = offset_y * dest_width + offset_x;

    for y in 0..scaled_height {
        for x in 0..scaled_width {
            let src_x = ((x as f32 + 0.5) * (src_width as f32 / scaled_width as f32) - 0.5)
                .clamp(0.0, (src_width - 1) as f32);
            let src_y = ((y as f32 + 0.5) * (src_height as f32 / scaled_height as f32) - 0.5)
                .clamp(0.0, (src_height - 1) as f32);

            dest[y * dest_width + offset + x] =
                interpolated_rgb565_pixel(src, src_x, src_y, src_width, src_height);
        }
    }
}
