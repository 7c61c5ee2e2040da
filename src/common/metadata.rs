use std::{fmt, ops::Deref, str::FromStr};

use super::{
    codec::Mode,
    error::{QRError, QRResult},
    version_db::{alignment_pattern, block_table, raw_capacity_bits},
};

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    /// Two bit code stored in the format information.
    pub fn format_bits(self) -> u32 {
        match self {
            Self::L => 0b01,
            Self::M => 0b00,
            Self::Q => 0b11,
            Self::H => 0b10,
        }
    }
}

impl TryFrom<u8> for ECLevel {
    type Error = QRError;

    fn try_from(index: u8) -> QRResult<Self> {
        match index {
            0 => Ok(Self::L),
            1 => Ok(Self::M),
            2 => Ok(Self::Q),
            3 => Ok(Self::H),
            _ => Err(QRError::InvalidECLevel),
        }
    }
}

impl FromStr for ECLevel {
    type Err = QRError;

    fn from_str(s: &str) -> QRResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LOW" => Ok(Self::L),
            "M" | "MEDIUM" => Ok(Self::M),
            "Q" | "QUARTILE" => Ok(Self::Q),
            "H" | "HIGH" => Ok(Self::H),
            _ => Err(QRError::InvalidECLevel),
        }
    }
}

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 40;

    pub fn new(version: u8) -> QRResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&version) {
            return Err(QRError::InvalidVersion(version));
        }
        Ok(Self(version))
    }

    pub const fn width(self) -> usize {
        self.0 as usize * 4 + 17
    }

    pub fn alignment_pattern(self) -> &'static [i16] {
        alignment_pattern(self)
    }

    pub fn has_version_info(self) -> bool {
        self.0 >= 7
    }

    // Bit length of the character count field
    pub fn char_count_bits(self, mode: Mode) -> usize {
        let range = match self.0 {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        match mode {
            Mode::Numeric => [10, 12, 14][range],
            Mode::Alphanumeric => [9, 11, 13][range],
            Mode::Byte => [8, 16, 16][range],
            Mode::Kanji => [8, 10, 12][range],
        }
    }

    pub fn capacity(self, ec_level: ECLevel) -> Capacity {
        Capacity::new(self, ec_level)
    }
}

impl Default for Version {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl Deref for Version {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<u8> for Version {
    type Error = QRError;

    fn try_from(version: u8) -> QRResult<Self> {
        Self::new(version)
    }
}

impl FromStr for Version {
    type Err = QRError;

    fn from_str(s: &str) -> QRResult<Self> {
        let version = s.trim().parse::<u8>().map_err(|_| QRError::InvalidVersion(0))?;
        Self::new(version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


// Capacity
//------------------------------------------------------------------------------

/// Immutable description of a version at an error correction level: matrix
/// size, data and ecc codeword counts, and the two block groups.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Capacity {
    pub version: Version,
    pub ec_level: ECLevel,
    pub width: usize,
    pub data_size: usize,
    pub ecc_size: usize,
    // (size, count)
    pub block1: (usize, usize),
    pub block2: (usize, usize),
}

impl Capacity {
    pub fn new(version: Version, ec_level: ECLevel) -> Self {
        let (count1, size1, count2, size2) = block_table(version, ec_level);
        let data_size = size1 * count1 + size2 * count2;
        let total = raw_capacity_bits(version) / 8;
        debug_assert!(data_size < total, "Data size {data_size} exceeds capacity {total}");

        Self {
            version,
            ec_level,
            width: version.width(),
            data_size,
            ecc_size: total - data_size,
            block1: (size1, count1),
            block2: (size2, count2),
        }
    }

    pub fn block_count(&self) -> usize {
        self.block1.1 + self.block2.1
    }

    pub fn ecc_per_block(&self) -> usize {
        self.ecc_size / self.block_count()
    }

    pub fn total_codewords(&self) -> usize {
        self.data_size + self.ecc_size
    }

    pub fn data_bit_capacity(&self) -> usize {
        self.data_size << 3
    }

    // Number of modules left over after all codewords are placed
    pub fn remainder_bits(&self) -> usize {
        raw_capacity_bits(self.version) - (self.total_codewords() << 3)
    }
}

#[cfg(test)]
mod capacity_tests {
    use super::{Capacity, ECLevel, Version};
    use crate::common::version_db::raw_capacity_bits;

    const LEVELS: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    #[test]
    fn test_capacity_invariants() {
        for v in 1..=40 {
            let version = Version::new(v).unwrap();
            for ecl in LEVELS {
                let cap = Capacity::new(version, ecl);
                let (s1, c1) = cap.block1;
                let (s2, c2) = cap.block2;
                assert_eq!(cap.data_size, s1 * c1 + s2 * c2, "v {v} ecl {ecl:?}");
                assert_eq!(cap.total_codewords(), raw_capacity_bits(version) / 8, "v {v} {ecl:?}");
                assert_eq!(cap.ecc_size % cap.block_count(), 0, "v {v} ecl {ecl:?}");
                assert_eq!(
                    cap.data_size + cap.ecc_per_block() * cap.block_count(),
                    cap.total_codewords()
                );
            }
        }
    }

    #[test]
    fn test_version_1() {
        let cap = Version::new(1).unwrap().capacity(ECLevel::Q);
        assert_eq!(cap.width, 21);
        assert_eq!(cap.data_size, 13);
        assert_eq!(cap.ecc_size, 13);
        assert_eq!(cap.block1, (13, 1));
        assert_eq!(cap.block2, (0, 0));
        assert_eq!(cap.remainder_bits(), 0);
    }

    #[test]
    fn test_version_5_quartile() {
        let cap = Version::new(5).unwrap().capacity(ECLevel::Q);
        assert_eq!(cap.data_size, 62);
        assert_eq!(cap.block1, (15, 2));
        assert_eq!(cap.block2, (16, 2));
        assert_eq!(cap.ecc_per_block(), 18);
        assert_eq!(cap.remainder_bits(), 7);
    }

    #[test]
    fn test_ecc_per_block_is_standard() {
        let h40 = Version::new(40).unwrap().capacity(ECLevel::H);
        assert_eq!(h40.ecc_per_block(), 30);
        assert_eq!(h40.block_count(), 81);
        let l1 = Version::new(1).unwrap().capacity(ECLevel::L);
        assert_eq!(l1.ecc_per_block(), 7);
    }
}
