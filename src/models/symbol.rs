use super::BitMatrix;

/// QR symbol version (size class) with its codeword layout at error correction level L
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    number: u8,
    data_codewords: usize,
    ec_codewords: usize,
    remainder_bits: usize,
}

/// Codewords taken by the byte-mode header (12 bits) and terminator (4 bits)
pub const HEADER_OVERHEAD_CODEWORDS: usize = 2;

impl Version {
    pub(crate) const fn new(
        number: u8,
        data_codewords: usize,
        ec_codewords: usize,
        remainder_bits: usize,
    ) -> Self {
        Self {
            number,
            data_codewords,
            ec_codewords,
            remainder_bits,
        }
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.number as usize + 17
    }

    /// Data codewords, header and padding included
    pub fn data_codewords(&self) -> usize {
        self.data_codewords
    }

    /// Error correction codewords
    pub fn ec_codewords(&self) -> usize {
        self.ec_codewords
    }

    pub fn total_codewords(&self) -> usize {
        self.data_codewords + self.ec_codewords
    }

    /// Zero bits appended after the last codeword to fill the data area
    pub fn remainder_bits(&self) -> usize {
        self.remainder_bits
    }

    /// Largest payload, in bytes, that fits without truncation
    pub fn data_capacity(&self) -> usize {
        self.data_codewords - HEADER_OVERHEAD_CODEWORDS
    }

    /// Length of the serialized bitstream placed in the matrix
    pub fn bit_len(&self) -> usize {
        8 * self.total_codewords() + self.remainder_bits
    }
}

/// Encoded QR symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrSymbol {
    /// Version the payload was encoded with
    pub version: Version,
    /// Module matrix (true = dark, false = light)
    pub modules: BitMatrix,
    /// Bytes actually carried by the symbol
    pub payload: Vec<u8>,
}

impl QrSymbol {
    /// Width and height in modules
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    /// Whether the module at column `x`, row `y` is dark
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    /// Row-major boolean grid
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.modules.to_rows()
    }
}
