//! Error types for symbol encoding

use thiserror::Error;

/// Result type alias using the crate's error type
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Errors that can occur while encoding a payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Payload does not fit the largest available version
    #[error("payload of {len} bytes exceeds capacity of {capacity} bytes")]
    PayloadTooLarge { len: usize, capacity: usize },
}
