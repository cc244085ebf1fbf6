//! QR symbol encoding modules
//!
//! This module contains the whole encoding pipeline:
//! - GF(256) arithmetic and Reed-Solomon error correction
//! - Version selection from the static version table
//! - Codeword assembly and bit serialization
//! - Function pattern layout, data placement and masking

/// Codeword assembly and bit serialization
pub mod bitstream;
/// Fixed format and version information
pub mod format;
/// Function module mask (finder/timing/format/alignment/version)
pub mod function_mask;
/// GF(256) arithmetic tables
pub mod gf256;
/// Fixed checkerboard mask
pub mod mask;
/// Module grid construction
pub mod matrix_builder;
/// Encoder facade with overflow policy
pub mod qr_encoder;
/// Reed-Solomon error correction coding
pub mod reed_solomon;
/// Version table (codeword counts per version)
pub mod tables;
/// Smallest-fit version selection
pub mod version;
