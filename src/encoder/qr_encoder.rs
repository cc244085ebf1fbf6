use crate::encoder::bitstream::BitstreamAssembler;
use crate::encoder::matrix_builder::build_matrix;
use crate::encoder::tables::max_data_capacity;
use crate::encoder::version::VersionSelector;
use crate::error::{EncodeError, Result};
use crate::models::{BitMatrix, QrSymbol, Version};
use rayon::prelude::*;

/// What to do with a payload larger than the largest version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Keep the longest prefix that fits and report the truncation
    #[default]
    Truncate,
    /// Fail with [`EncodeError::PayloadTooLarge`]
    Reject,
}

/// Encoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncoderConfig {
    pub overflow: OverflowPolicy,
}

impl EncoderConfig {
    pub fn strict() -> Self {
        Self {
            overflow: OverflowPolicy::Reject,
        }
    }
}

/// Result of encoding a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoding {
    /// The whole payload is in the symbol
    Full(QrSymbol),
    /// Only a prefix of the payload is in the symbol
    Truncated {
        symbol: QrSymbol,
        /// Payload length before truncation, in bytes
        original_len: usize,
    },
}

impl Encoding {
    pub fn symbol(&self) -> &QrSymbol {
        match self {
            Encoding::Full(symbol) | Encoding::Truncated { symbol, .. } => symbol,
        }
    }

    pub fn into_symbol(self) -> QrSymbol {
        match self {
            Encoding::Full(symbol) | Encoding::Truncated { symbol, .. } => symbol,
        }
    }

    /// Final module grid
    pub fn matrix(&self) -> &BitMatrix {
        &self.symbol().modules
    }

    pub fn version(&self) -> Version {
        self.symbol().version
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Encoding::Truncated { .. })
    }

    /// Bytes of the payload left out of the symbol
    pub fn dropped_bytes(&self) -> usize {
        match self {
            Encoding::Full(_) => 0,
            Encoding::Truncated {
                symbol,
                original_len,
            } => original_len - symbol.payload.len(),
        }
    }
}

/// Text to symbol encoder
///
/// # Example
/// ```
/// use rust_qr_gen::QrEncoder;
///
/// let encoder = QrEncoder::new();
/// let encoding = encoder.encode("STNEST-abc123").unwrap();
/// assert!(!encoding.is_truncated());
/// assert_eq!(encoding.symbol().size(), 21);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder {
    config: EncoderConfig,
}

impl QrEncoder {
    /// Encoder that truncates oversized payloads
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode the UTF-8 bytes of `text`
    pub fn encode(&self, text: &str) -> Result<Encoding> {
        self.encode_bytes(text.as_bytes())
    }

    /// Encode raw payload bytes.
    ///
    /// Errors only under [`OverflowPolicy::Reject`].
    pub fn encode_bytes(&self, payload: &[u8]) -> Result<Encoding> {
        let selection = VersionSelector::select(payload.len());
        tracing::debug!(
            payload_len = payload.len(),
            version = selection.version.number(),
            fits = selection.fits,
            "selected version"
        );

        if selection.fits {
            return encode_with_version(payload, selection.version).map(Encoding::Full);
        }

        match self.config.overflow {
            OverflowPolicy::Reject => Err(EncodeError::PayloadTooLarge {
                len: payload.len(),
                capacity: max_data_capacity(),
            }),
            OverflowPolicy::Truncate => {
                let kept = selection.truncated_len(payload.len());
                tracing::warn!(
                    payload_len = payload.len(),
                    kept,
                    dropped = payload.len() - kept,
                    "payload exceeds largest version, truncating"
                );
                // Single retry with the prefix; it always fits the largest version
                let retry = VersionSelector::select(kept);
                let symbol = encode_with_version(&payload[..kept], retry.version)?;
                Ok(Encoding::Truncated {
                    symbol,
                    original_len: payload.len(),
                })
            }
        }
    }

    /// Encode many payloads in parallel, preserving order
    pub fn encode_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Result<Encoding>> {
        texts
            .par_iter()
            .map(|text| self.encode(text.as_ref()))
            .collect()
    }
}

/// Run the assembler and matrix builder for an already chosen version
pub fn encode_with_version(payload: &[u8], version: Version) -> Result<QrSymbol> {
    let bits = BitstreamAssembler::assemble(payload, &version)?;
    let modules = build_matrix(version, &bits);
    Ok(QrSymbol {
        version,
        modules,
        payload: payload.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::largest_version;

    #[test]
    fn test_encode_fits() {
        let encoding = QrEncoder::new().encode("STNEST-abc123").unwrap();
        assert!(!encoding.is_truncated());
        assert_eq!(encoding.dropped_bytes(), 0);
        assert_eq!(encoding.version().number(), 1);
        assert_eq!(encoding.symbol().payload, b"STNEST-abc123");
    }

    #[test]
    fn test_truncate_policy() {
        let payload = vec![b'a'; 200];
        let encoding = QrEncoder::new().encode_bytes(&payload).unwrap();
        assert!(encoding.is_truncated());
        assert_eq!(encoding.version(), largest_version());
        assert_eq!(encoding.symbol().payload.len(), 154);
        assert_eq!(encoding.dropped_bytes(), 46);
    }

    #[test]
    fn test_reject_policy() {
        let encoder = QrEncoder::with_config(EncoderConfig::strict());
        let err = encoder.encode_bytes(&[0u8; 155]).unwrap_err();
        assert_eq!(
            err,
            EncodeError::PayloadTooLarge {
                len: 155,
                capacity: 154
            }
        );
        assert!(encoder.encode_bytes(&[0u8; 154]).is_ok());
    }

    #[test]
    fn test_encode_batch_matches_sequential() {
        let medium = "x".repeat(100);
        let oversized = "y".repeat(400);
        let texts = ["", "a", "STNEST-abc123", medium.as_str(), oversized.as_str()];
        let encoder = QrEncoder::new();
        let batch = encoder.encode_batch(&texts);
        assert_eq!(batch.len(), texts.len());
        for (text, result) in texts.iter().zip(batch) {
            assert_eq!(result.unwrap(), encoder.encode(text).unwrap());
        }
    }

    #[test]
    fn test_encode_with_version_rejects_oversized() {
        let v1 = crate::encoder::tables::version(1).unwrap();
        assert!(encode_with_version(&[0u8; 18], v1).is_err());
    }
}
