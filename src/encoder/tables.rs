use crate::models::Version;

// Codeword layout per version at error correction level L, single Reed-Solomon block.
// (version, data codewords, ec codewords, remainder bits)
pub const VERSIONS: [Version; 7] = [
    Version::new(1, 19, 7, 0),
    Version::new(2, 34, 10, 7),
    Version::new(3, 55, 15, 7),
    Version::new(4, 80, 20, 7),
    Version::new(5, 108, 26, 7),
    Version::new(6, 136, 36, 7),
    Version::new(7, 156, 40, 0),
];

/// Largest version in the table
pub fn largest_version() -> Version {
    VERSIONS[VERSIONS.len() - 1]
}

/// Largest payload, in bytes, any table version can carry
pub fn max_data_capacity() -> usize {
    largest_version().data_capacity()
}

/// Table entry for a version number
pub fn version(number: u8) -> Option<Version> {
    VERSIONS.iter().copied().find(|v| v.number() == number)
}
