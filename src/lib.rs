//! RustQR Gen - offline QR-style symbol generator
//!
//! A pure Rust encoder that turns a short text payload into a square module grid
//! without any external codec library: GF(256) arithmetic, Reed-Solomon error
//! correction, codeword assembly and fixed-pattern matrix construction.
//!
//! The encoder produces one error correction level (L), byte mode only, a fixed
//! checkerboard mask and versions 1 to 7. The mask is applied to every module,
//! function patterns included, so symbols are best-effort rather than
//! standard-conformant.
//!
//! ```
//! let encoding = rust_qr_gen::encode("STNEST-abc123");
//! let matrix = encoding.matrix();
//! assert_eq!(matrix.width(), 21);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR symbol encoding modules (error correction, version table, layout)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (BitMatrix, Version, QrSymbol)
pub mod models;
/// Rendering helpers for inspecting symbols
pub mod tools;

pub use encoder::qr_encoder::{EncoderConfig, Encoding, OverflowPolicy, QrEncoder};
pub use error::{EncodeError, Result};
pub use models::{BitMatrix, QrSymbol, Version};

/// Encode `text` into a symbol
///
/// Payloads longer than the largest version are cut to the longest prefix that
/// fits; the result reports this as [`Encoding::Truncated`].
///
/// # Arguments
/// * `text` - Payload, encoded as its UTF-8 bytes
///
/// # Returns
/// The encoded symbol, full or truncated
pub fn encode(text: &str) -> Encoding {
    encode_bytes(text.as_bytes())
}

/// Encode raw payload bytes, truncating oversized payloads
pub fn encode_bytes(payload: &[u8]) -> Encoding {
    QrEncoder::new()
        .encode_bytes(payload)
        .expect("truncating encoder accepts every payload length")
}

/// Encode `text`, failing instead of truncating when it does not fit
pub fn encode_strict(text: &str) -> Result<QrSymbol> {
    QrEncoder::with_config(EncoderConfig::strict())
        .encode(text)
        .map(Encoding::into_symbol)
}

/// Encode several payloads in parallel, truncating oversized ones
pub fn encode_batch<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<Encoding> {
    QrEncoder::new()
        .encode_batch(texts)
        .into_iter()
        .map(|result| result.expect("truncating encoder accepts every payload length"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty() {
        let encoding = encode("");
        assert!(!encoding.is_truncated());
        assert_eq!(encoding.version().number(), 1);
        assert_eq!(encoding.matrix().width(), 21);
        assert_eq!(encoding.matrix().height(), 21);
    }

    #[test]
    fn test_encode_strict() {
        assert!(encode_strict("hello").is_ok());
        let err = encode_strict(&"z".repeat(155)).unwrap_err();
        assert!(matches!(err, EncodeError::PayloadTooLarge { len: 155, .. }));
    }

    #[test]
    fn test_encode_batch() {
        let texts = vec!["one".to_string(), "two".to_string(), "w".repeat(300)];
        let results = encode_batch(&texts);
        assert_eq!(results.len(), 3);
        assert!(!results[0].is_truncated());
        assert!(results[2].is_truncated());
    }
}
