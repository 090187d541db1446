//! Logical-to-physical index mapping for Adafruit-wired LED matrix chains.
//!
//! Panels are assembled from 32x32 sub-matrices chained bottom row band
//! first, and each sub-matrix interleaves its logical scan rows into half of
//! its dot pairs. Frame data has to be reordered through this mapping before
//! it can be clocked out to the panel.

use crate::MATRIX_DIM;

/// Map a logical `(x, y)` display coordinate to the physical serialization
/// index used by Adafruit-wired matrix chains.
///
/// `width` and `height` must be multiples of 32, and `num_logical_rows`
/// must divide the dots of one sub-matrix row evenly; the result is
/// undefined otherwise. Rows `y` and `y + 16` within each 32-row band map
/// to the same index, forming one dot pair.
#[inline]
pub fn map_adafruit_index(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    num_logical_rows: usize,
) -> usize {
    debug_assert!(
        width % MATRIX_DIM == 0 && height % MATRIX_DIM == 0,
        "panel dimensions {width}x{height} must be multiples of {MATRIX_DIM}"
    );
    debug_assert!(
        (MATRIX_DIM * MATRIX_DIM / 2) % num_logical_rows == 0,
        "num_logical_rows {num_logical_rows} must divide the sub-matrix evenly"
    );

    let logical_row_length_per_matrix = MATRIX_DIM * MATRIX_DIM / 2 / num_logical_rows;
    let logical_row = y % num_logical_rows;
    let dot_pairs_per_logical_row = width * height / num_logical_rows / 2;
    let width_in_matrices = width / MATRIX_DIM;
    let matrix_x = x / MATRIX_DIM;
    let matrix_y = y / MATRIX_DIM;
    let total_matrices = width * height / (MATRIX_DIM * MATRIX_DIM);
    let matrix_number = total_matrices - (matrix_y + 1) * width_in_matrices + matrix_x;
    let index_within_matrix_row = x % logical_row_length_per_matrix;

    logical_row * dot_pairs_per_logical_row
        + matrix_number * logical_row_length_per_matrix
        + index_within_matrix_row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_matrix_origin() {
        assert_eq!(map_adafruit_index(0, 0, 32, 32, 16), 0);
    }

    #[test]
    fn test_single_matrix_known_values() {
        // One 32x32 matrix, 1/16 scan: index = (y % 16) * 32 + x
        assert_eq!(map_adafruit_index(5, 3, 32, 32, 16), 3 * 32 + 5);
        assert_eq!(map_adafruit_index(31, 15, 32, 32, 16), 15 * 32 + 31);
    }

    #[test]
    fn test_dot_pair_rows_share_index() {
        // Row y and y + 16 within a 32-row band form one dot pair.
        for x in [0, 7, 31] {
            assert_eq!(
                map_adafruit_index(x, 4, 32, 32, 16),
                map_adafruit_index(x, 20, 32, 32, 16),
            );
        }
    }

    #[test]
    fn test_bottom_band_comes_first() {
        // On a 64x64 panel the lower row band holds matrices 0 and 1, so the
        // top-left corner lands in matrix 2.
        let idx = map_adafruit_index(0, 0, 64, 64, 16);
        assert_eq!(idx, 2 * 32);
        // Bottom-left corner is in matrix 0.
        let idx = map_adafruit_index(0, 32, 64, 64, 16);
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_bijection_over_dot_pairs() {
        // 64x64 panel, 1/16 scan: restricted to dot-pair rows
        // (y % 32 < 16), the mapping must hit every index in
        // [0, width * height / 2) exactly once.
        let (width, height, rows) = (64, 64, 16);
        let mut seen = vec![false; width * height / 2];

        for y in (0..height).filter(|y| y % 32 < 16) {
            for x in 0..width {
                let idx = map_adafruit_index(x, y, width, height, rows);
                assert!(idx < seen.len(), "index {idx} out of range at ({x}, {y})");
                assert!(!seen[idx], "index {idx} produced twice, at ({x}, {y})");
                seen[idx] = true;
            }
        }

        assert!(seen.iter().all(|&hit| hit), "not every index was produced");
    }

    #[test]
    fn test_bijection_per_logical_row_group() {
        // Within one logical row group the offsets cover
        // [0, width * height / num_logical_rows / 2) exactly once.
        let (width, height, rows) = (64, 64, 16);
        let group_len = width * height / rows / 2;

        for logical_row in 0..rows {
            let mut seen = vec![false; group_len];
            for y in (0..height).filter(|y| y % 32 < 16 && y % rows == logical_row) {
                for x in 0..width {
                    let idx = map_adafruit_index(x, y, width, height, rows);
                    let offset = idx - logical_row * group_len;
                    assert!(offset < group_len);
                    assert!(!seen[offset]);
                    seen[offset] = true;
                }
            }
            assert!(seen.iter().all(|&hit| hit));
        }
    }
}
