/// Version selection for a payload length
use crate::encoder::tables::{VERSIONS, largest_version};
use crate::models::Version;

/// Outcome of picking a version for a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Chosen version
    pub version: Version,
    /// False when the payload is larger than every version and must be truncated
    pub fits: bool,
}

impl Selection {
    /// Number of payload bytes the chosen version can carry out of `payload_len`
    pub fn truncated_len(&self, payload_len: usize) -> usize {
        payload_len.min(self.version.data_capacity())
    }
}

pub struct VersionSelector;

impl VersionSelector {
    /// Smallest version whose capacity holds `payload_len` bytes.
    ///
    /// Oversized payloads clamp to the largest version with `fits == false`.
    pub fn select(payload_len: usize) -> Selection {
        match VERSIONS
            .iter()
            .find(|v| v.data_capacity() >= payload_len)
        {
            Some(&version) => Selection { version, fits: true },
            None => Selection {
                version: largest_version(),
                fits: false,
            },
        }
    }
}
