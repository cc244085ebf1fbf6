/// Reed-Solomon error correction coding for QR symbols
/// Codes are systematic over GF(256); the generator polynomial has roots alpha^0 .. alpha^(n-1)
use crate::encoder::gf256::Gf256;

/// Monic generator polynomial of degree `n`, coefficients highest degree first.
///
/// Built as the product of `(x - alpha^i)` for `i` in `0..n`; subtraction is
/// XOR in GF(256), so each factor is `(x + alpha^i)`.
pub fn generator_polynomial(n: usize) -> Vec<u8> {
    let mut poly = vec![1u8];
    for i in 0..n {
        let root = Gf256::exp(i);
        let mut next = vec![0u8; poly.len() + 1];
        for (j, &coeff) in poly.iter().enumerate() {
            // coeff * x
            next[j] ^= coeff;
            // coeff * root
            next[j + 1] ^= Gf256::mul(coeff, root);
        }
        poly = next;
    }
    poly
}

/// Reed-Solomon encoder for a fixed number of error correction codewords
#[derive(Debug, Clone)]
pub struct ReedSolomonEncoder {
    num_ecc_codewords: usize,
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self {
            num_ecc_codewords,
            generator: generator_polynomial(num_ecc_codewords),
        }
    }

    pub fn num_ecc_codewords(&self) -> usize {
        self.num_ecc_codewords
    }

    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    /// Remainder of `data * x^n` divided by the generator polynomial.
    ///
    /// Returns exactly `n` error correction codewords.
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let n = self.num_ecc_codewords;
        let mut remainder = vec![0u8; n];
        if n == 0 {
            return remainder;
        }

        for &d in data {
            let factor = d ^ remainder[0];
            remainder.rotate_left(1);
            remainder[n - 1] = 0;
            if factor == 0 {
                continue;
            }
            // Leading generator coefficient is 1 and cancels `factor`
            for (r, &g) in remainder.iter_mut().zip(&self.generator[1..]) {
                *r ^= Gf256::mul(g, factor);
            }
        }

        remainder
    }
}

/// Syndromes of a full codeword (data followed by error correction codewords).
///
/// Evaluates the codeword polynomial at alpha^0 .. alpha^(n-1); every syndrome is
/// zero exactly when the codeword is a valid Reed-Solomon codeword.
pub fn syndromes(codeword: &[u8], num_ecc_codewords: usize) -> Vec<u8> {
    (0..num_ecc_codewords)
        .map(|i| {
            let x = Gf256::exp(i);
            // Horner, c[0] is the coefficient of x^(len-1)
            codeword
                .iter()
                .fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c)
        })
        .collect()
}
