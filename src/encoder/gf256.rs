/// GF(256) arithmetic for Reed-Solomon coding
/// Field uses the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 with generator alpha = 2
pub struct Gf256;

const PRIMITIVE_POLY: u16 = 0x11D;
const EXP_LEN: usize = 512;
const LOG_LEN: usize = 256;

/// Order of the multiplicative group.
pub const GF_ORDER: usize = 255;

struct GfTables {
    exp: [u8; EXP_LEN],
    log: [u8; LOG_LEN],
}

// Built at compile time; the second half of `exp` mirrors the first 255 entries
// so `exp[log a + log b]` never needs a modular reduction.
static TABLES: GfTables = build_tables();

const fn build_tables() -> GfTables {
    let mut exp = [0u8; EXP_LEN];
    let mut log = [0u8; LOG_LEN];

    let mut x: u16 = 1;
    let mut i = 0usize;
    while i < GF_ORDER {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }

    let mut j = GF_ORDER;
    while j < EXP_LEN {
        exp[j] = exp[j - GF_ORDER];
        j += 1;
    }

    GfTables { exp, log }
}

impl Gf256 {
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = TABLES.log[a as usize] as usize;
        let log_b = TABLES.log[b as usize] as usize;
        TABLES.exp[log_a + log_b]
    }

    /// alpha^n, with `n` reduced modulo the group order
    pub fn exp(n: usize) -> u8 {
        TABLES.exp[n % GF_ORDER]
    }

    /// Discrete logarithm base alpha; zero has none
    pub fn log(a: u8) -> Option<u8> {
        if a == 0 {
            None
        } else {
            Some(TABLES.log[a as usize])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_match_known_values() {
        assert_eq!(Gf256::exp(0), 1);
        assert_eq!(Gf256::exp(1), 2);
        assert_eq!(Gf256::exp(7), 128);
        // First reduction by the primitive polynomial
        assert_eq!(Gf256::exp(8), 29);
        assert_eq!(Gf256::exp(254), 142);
        assert_eq!(Gf256::log(29), Some(8));
        assert_eq!(Gf256::log(0), None);
    }

    #[test]
    fn test_exp_table_is_mirrored() {
        for i in 0..GF_ORDER {
            assert_eq!(TABLES.exp[i], TABLES.exp[i + GF_ORDER]);
        }
    }

    #[test]
    fn test_log_exp_inverse() {
        for a in 1..=255u8 {
            let l = Gf256::log(a).unwrap() as usize;
            assert_eq!(Gf256::exp(l), a);
        }
    }

    #[test]
    fn test_mul_identities() {
        for a in 0..=255u8 {
            assert_eq!(Gf256::mul(a, 0), 0);
            assert_eq!(Gf256::mul(0, a), 0);
            assert_eq!(Gf256::mul(1, a), a);
        }
    }

    #[test]
    fn test_mul_commutative() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(Gf256::mul(a, b), Gf256::mul(b, a));
            }
        }
    }

    #[test]
    fn test_mul_distributes_over_xor() {
        for a in [3u8, 29, 142, 255] {
            for b in 0..=255u8 {
                for c in [0u8, 1, 77, 200] {
                    assert_eq!(
                        Gf256::mul(a, b ^ c),
                        Gf256::mul(a, b) ^ Gf256::mul(a, c)
                    );
                }
            }
        }
    }

    #[test]
    fn test_exp_wraps_group_order() {
        assert_eq!(Gf256::exp(255), 1);
        assert_eq!(Gf256::exp(256), 2);
        assert_eq!(Gf256::exp(260), Gf256::exp(5));
    }
}
