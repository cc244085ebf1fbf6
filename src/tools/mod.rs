//! Inspection helpers for encoded symbols: ASCII and PNG rendering.

use crate::models::BitMatrix;
use image::{GrayImage, Luma};
use std::path::Path;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Rendering geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per module
    pub scale: u32,
    /// Light border, in modules
    pub quiet_zone: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 8,
            quiet_zone: 4,
        }
    }
}

/// Render with two characters per module so the output stays square
pub fn to_ascii(matrix: &BitMatrix, quiet_zone: usize) -> String {
    let size = matrix.width();
    let total = size + 2 * quiet_zone;
    let mut out = String::with_capacity(total * (total * 2 * 3 + 1));
    for row in 0..total {
        for col in 0..total {
            let dark = row >= quiet_zone
                && col >= quiet_zone
                && matrix.get(col - quiet_zone, row - quiet_zone);
            out.push_str(if dark { "██" } else { "  " });
        }
        out.push('\n');
    }
    out
}

/// Grayscale image of the symbol surrounded by its quiet zone
pub fn to_image(matrix: &BitMatrix, options: RenderOptions) -> GrayImage {
    let scale = options.scale.max(1);
    let modules = matrix.width() as u32 + 2 * options.quiet_zone;
    let side = modules * scale;
    GrayImage::from_fn(side, side, |px, py| {
        let mx = px / scale;
        let my = py / scale;
        let inside = mx >= options.quiet_zone && my >= options.quiet_zone;
        if inside
            && matrix.get(
                (mx - options.quiet_zone) as usize,
                (my - options.quiet_zone) as usize,
            )
        {
            DARK
        } else {
            LIGHT
        }
    })
}

/// Save the symbol as an image; the format follows the file extension.
pub fn save_image<P: AsRef<Path>>(
    matrix: &BitMatrix,
    path: P,
    options: RenderOptions,
) -> Result<(), image::ImageError> {
    to_image(matrix, options).save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BitMatrix {
        let mut matrix = BitMatrix::new(3, 3);
        matrix.set(0, 0, true);
        matrix.set(2, 1, true);
        matrix
    }

    #[test]
    fn test_ascii_layout() {
        let ascii = to_ascii(&sample(), 1);
        let lines: Vec<&str> = ascii.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], " ".repeat(10));
        assert_eq!(lines[1], "  ██      ");
        assert_eq!(lines[2], "      ██  ");
    }

    #[test]
    fn test_image_dimensions_and_quiet_zone() {
        let options = RenderOptions {
            scale: 2,
            quiet_zone: 1,
        };
        let img = to_image(&sample(), options);
        assert_eq!(img.dimensions(), (10, 10));
        assert_eq!(*img.get_pixel(0, 0), LIGHT);
        assert_eq!(*img.get_pixel(2, 2), DARK);
        assert_eq!(*img.get_pixel(3, 3), DARK);
        assert_eq!(*img.get_pixel(4, 2), LIGHT);
        assert_eq!(*img.get_pixel(6, 4), DARK);
    }

    #[test]
    fn test_zero_scale_is_clamped() {
        let options = RenderOptions {
            scale: 0,
            quiet_zone: 0,
        };
        assert_eq!(to_image(&sample(), options).dimensions(), (3, 3));
    }
}
