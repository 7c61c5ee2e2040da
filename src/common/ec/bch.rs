// BCH code over GF(2)
//------------------------------------------------------------------------------

/// Remainder of `value * x^(deg poly)` divided by `poly`, with polynomials
/// over GF(2) packed into integers.
pub fn calculate_bch(value: u32, poly: u32) -> u32 {
    debug_assert!(poly != 0, "BCH generator cannot be zero");

    let poly_len = bit_len(poly);
    let mut rem = value << (poly_len - 1);
    while bit_len(rem) >= poly_len {
        rem ^= poly << (bit_len(rem) - poly_len);
    }
    rem
}

fn bit_len(n: u32) -> u32 {
    u32::BITS - n.leading_zeros()
}

#[cfg(test)]
mod bch_tests {
    use test_case::test_case;

    use super::{bit_len, calculate_bch, FORMAT_GENERATOR, VERSION_GENERATOR};

    #[test]
    fn test_bit_len() {
        assert_eq!(bit_len(0), 0);
        assert_eq!(bit_len(1), 1);
        assert_eq!(bit_len(0x537), 11);
        assert_eq!(bit_len(0x1F25), 13);
    }

    #[test]
    fn test_zero_value() {
        assert_eq!(calculate_bch(0, FORMAT_GENERATOR), 0);
    }

    // 5 bit format data before masking
    #[test_case(0b00000, 0b0000000000)]
    #[test_case(0b00001, 0b0100110111)]
    #[test_case(0b01000, 0b1111010110)]
    #[test_case(0b11010, 0b1100100011)]
    fn test_format_remainder(value: u32, rem: u32) {
        assert_eq!(calculate_bch(value, FORMAT_GENERATOR), rem);
    }

    #[test_case(7, 0xC94)]
    #[test_case(8, 0x5BC)]
    #[test_case(21, 0x683)]
    #[test_case(40, 0xC69)]
    fn test_version_remainder(version: u32, rem: u32) {
        assert_eq!(calculate_bch(version, VERSION_GENERATOR), rem);
    }

    #[test]
    fn test_remainder_is_short() {
        for value in 0..32 {
            assert!(bit_len(calculate_bch(value, FORMAT_GENERATOR)) <= 10);
        }
        for value in 7..=40 {
            assert!(bit_len(calculate_bch(value, VERSION_GENERATOR)) <= 12);
        }
    }
}

// Global constants
//------------------------------------------------------------------------------

// x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
pub const FORMAT_GENERATOR: u32 = 0x537;

// x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
pub const VERSION_GENERATOR: u32 = 0x1F25;
