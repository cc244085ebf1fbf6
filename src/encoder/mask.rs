/// Fixed checkerboard mask
use crate::models::BitMatrix;

/// Mask pattern 0: module at (row, column) flips when `(row + column) % 2 == 0`
pub fn is_masked(row: usize, col: usize) -> bool {
    (row + col) % 2 == 0
}

/// XOR the mask over every module, function patterns included.
///
/// Conventional symbols mask data modules only; this encoder masks the whole grid.
pub fn apply_mask(matrix: &mut BitMatrix) {
    let width = matrix.width();
    let height = matrix.height();

    for y in 0..height {
        for x in 0..width {
            if is_masked(y, x) {
                matrix.toggle(x, y);
            }
        }
    }
}
