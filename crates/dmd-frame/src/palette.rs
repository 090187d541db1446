//! Indexed frame expansion through an RGB24 palette.

use tracing::debug;

/// Number of entries in an indexed-frame palette.
pub const PALETTE_ENTRIES: usize = 256;

/// Byte length of an RGB24 palette (256 entries of 3 bytes).
pub const PALETTE_BYTES: usize = PALETTE_ENTRIES * 3;

/// Expand an indexed frame into RGB24 through a 768-byte palette.
///
/// Each source pixel value selects a 3-byte palette entry that is copied to
/// the destination. Every pixel value must be a valid palette index; no
/// bounds check is performed on the release path.
pub fn indexed_to_rgb24(dest: &mut [u8], src: &[u8], palette: &[u8]) {
    debug_assert!(
        dest.len() >= src.len() * 3,
        "rgb24 destination too small: {} < {}",
        dest.len(),
        src.len() * 3
    );
    debug_assert!(
        palette.len() >= PALETTE_BYTES,
        "palette must hold {PALETTE_ENTRIES} RGB24 entries"
    );
    debug!(size = src.len(), "expanding indexed frame to rgb24");

    for (i, &pixel) in src.iter().enumerate() {
        let entry = pixel as usize * 3;
        dest[i * 3..i * 3 + 3].copy_from_slice(&palette[entry..entry + 3]);
    }
}
