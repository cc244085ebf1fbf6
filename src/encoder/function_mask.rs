use crate::encoder::matrix_builder::MatrixBuilder;
use crate::models::{BitMatrix, Version};

/// Function module mask for a specific QR version.
/// true = function module (not data), false = data module.
pub struct FunctionMask {
    mask: BitMatrix,
    version: Version,
}

impl FunctionMask {
    pub fn new(version: Version) -> Self {
        let builder = MatrixBuilder::new(version);
        let size = builder.size();
        let mut mask = BitMatrix::new(size, size);
        for y in 0..size {
            for x in 0..size {
                mask.set(x, y, builder.module(x, y).is_function());
            }
        }
        Self { mask, version }
    }

    pub fn size(&self) -> usize {
        self.mask.width()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    pub fn function_modules_count(&self) -> usize {
        self.mask.count_ones()
    }

    pub fn data_modules_count(&self) -> usize {
        self.size() * self.size() - self.function_modules_count()
    }
}

/// Alignment pattern centers for a given version.
pub fn alignment_pattern_positions(version: u8) -> Vec<usize> {
    if version <= 1 {
        return Vec::new();
    }
    let num_align = (version / 7) as usize + 2;
    let size = 17 + 4 * version as usize;
    let step = if version == 32 {
        26
    } else {
        (version as usize * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
    };

    let mut positions = vec![0usize; num_align];
    positions[0] = 6;
    let mut pos = size - 7;
    for i in (1..num_align).rev() {
        positions[i] = pos;
        pos -= step;
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::{VERSIONS, version};

    /// Raw data module count from the closed-form layout
    fn expected_data_modules(version: u8) -> usize {
        let v = version as usize;
        let mut result = (16 * v + 128) * v + 64;
        if v >= 2 {
            let num_align = v / 7 + 2;
            result -= (25 * num_align - 10) * num_align - 55;
            if v >= 7 {
                result -= 36;
            }
        }
        result
    }

    #[test]
    fn test_alignment_positions() {
        assert!(alignment_pattern_positions(1).is_empty());
        assert_eq!(alignment_pattern_positions(2), vec![6, 18]);
        assert_eq!(alignment_pattern_positions(6), vec![6, 34]);
        assert_eq!(alignment_pattern_positions(7), vec![6, 22, 38]);
        assert_eq!(alignment_pattern_positions(14), vec![6, 26, 46, 66]);
        assert_eq!(alignment_pattern_positions(32), vec![6, 34, 60, 86, 112, 138]);
    }

    #[test]
    fn test_data_modules_match_closed_form() {
        for v in VERSIONS {
            let mask = FunctionMask::new(v);
            assert_eq!(mask.data_modules_count(), expected_data_modules(v.number()));
            assert_eq!(mask.data_modules_count(), v.bit_len());
        }
    }

    #[test]
    fn test_function_areas_version_1() {
        let mask = FunctionMask::new(version(1).unwrap());
        assert_eq!(mask.size(), 21);
        assert_eq!(mask.version().number(), 1);
        // Finder, separator, timing, format, dark module
        assert!(mask.is_function(0, 0));
        assert!(mask.is_function(7, 7));
        assert!(mask.is_function(10, 6));
        assert!(mask.is_function(8, 3));
        assert!(mask.is_function(8, 13));
        // Data area
        assert!(!mask.is_function(10, 10));
        assert!(!mask.is_function(20, 20));
        assert!(!mask.is_function(9, 0));
    }
}
