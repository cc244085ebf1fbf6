//! Fixed format and version information
//!
//! Only one error correction level (L) and one mask (checkerboard, pattern 0)
//! are produced, so both blocks are constants rather than computed BCH codes.
//! A penalty-scored mask choice would need a real format encoder here.

/// Format information for level L with mask pattern 0, already XOR-masked with 0x5412
pub const FORMAT_BITS: u16 = 0b111_0111_1100_0100;
/// Number of format information bits
pub const FORMAT_LEN: usize = 15;

/// Version information for version 7
pub const VERSION_7_INFO: u32 = 0x07C94;
/// Number of version information bits
pub const VERSION_INFO_LEN: usize = 18;

/// Version information block for `version`, when that version carries one
pub fn version_info(version: u8) -> Option<u32> {
    match version {
        7 => Some(VERSION_7_INFO),
        _ => None,
    }
}

/// Bit `i` of a format or version word, bit 0 being least significant
pub fn bit(word: u32, i: usize) -> bool {
    (word >> i) & 1 != 0
}

/// `(x, y)` module of each format bit, for both copies.
///
/// The first copy wraps the top-left finder; the second runs along row 8 under
/// the top-right finder (bits 0-7) and down column 8 beside the bottom-left
/// finder (bits 8-14).
pub fn format_positions(size: usize) -> [[(usize, usize); FORMAT_LEN]; 2] {
    let mut first = [(0, 0); FORMAT_LEN];
    let mut second = [(0, 0); FORMAT_LEN];

    for (i, pos) in first.iter_mut().enumerate() {
        *pos = match i {
            0..=5 => (8, i),
            6 => (8, 7),
            7 => (8, 8),
            8 => (7, 8),
            _ => (14 - i, 8),
        };
    }
    for (i, pos) in second.iter_mut().enumerate() {
        *pos = if i < 8 {
            (size - 1 - i, 8)
        } else {
            (8, size - FORMAT_LEN + i)
        };
    }

    [first, second]
}

/// `(x, y)` module of each version information bit, for both 6x3 blocks
pub fn version_positions(size: usize) -> [[(usize, usize); VERSION_INFO_LEN]; 2] {
    let mut top_right = [(0, 0); VERSION_INFO_LEN];
    let mut bottom_left = [(0, 0); VERSION_INFO_LEN];
    for i in 0..VERSION_INFO_LEN {
        let a = size - 11 + i % 3;
        let b = i / 3;
        top_right[i] = (a, b);
        bottom_left[i] = (b, a);
    }
    [top_right, bottom_left]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn bch_remainder(mut value: u32, generator: u32, degree: u32) -> u32 {
        let top = 32 - value.leading_zeros();
        for shift in (degree..top.max(degree)).rev() {
            if value & (1 << shift) != 0 {
                value ^= generator << (shift - degree);
            }
        }
        value
    }

    #[test]
    fn test_format_bits_are_valid_bch() {
        // BCH(15,5) generator x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
        let unmasked = (FORMAT_BITS ^ 0x5412) as u32;
        assert_eq!(bch_remainder(unmasked, 0x537, 10), 0);
        // Level L (01), mask 000
        assert_eq!(unmasked >> 10, 0b01_000);
    }

    #[test]
    fn test_version_info_is_valid_bch() {
        // BCH(18,6) generator x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
        assert_eq!(bch_remainder(VERSION_7_INFO, 0x1F25, 12), 0);
        assert_eq!(VERSION_7_INFO >> 12, 7);
        assert_eq!(version_info(7), Some(VERSION_7_INFO));
        assert_eq!(version_info(6), None);
    }

    #[test]
    fn test_format_positions_are_distinct_and_skip_timing() {
        for size in [21usize, 45] {
            let mut seen = HashSet::new();
            for copy in format_positions(size) {
                for (x, y) in copy {
                    assert!(x < size && y < size);
                    assert!(x != 6 && y != 6, "format bit on timing line");
                    assert!(seen.insert((x, y)));
                }
            }
            // Dark module sits between the two column runs
            assert!(!seen.contains(&(8, size - 8)));
        }
    }

    #[test]
    fn test_version_positions_mirror() {
        let [top_right, bottom_left] = version_positions(45);
        for (a, b) in top_right.iter().zip(bottom_left.iter()) {
            assert_eq!((a.0, a.1), (b.1, b.0));
        }
        assert_eq!(top_right[0], (34, 0));
        assert_eq!(top_right[17], (36, 5));
    }
}
