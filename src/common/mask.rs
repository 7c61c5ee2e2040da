use std::{fmt, ops::Deref, str::FromStr};

use super::error::{QRError, QRResult};

// Mask pattern
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub fn new(pattern: u8) -> QRResult<Self> {
        if pattern >= 8 {
            return Err(QRError::InvalidMaskPattern(pattern));
        }
        Ok(Self(pattern))
    }

    /// Three bit code stored in the format information.
    pub fn code(self) -> u32 {
        self.0 as u32
    }

    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        match self.0 {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!("Invalid pattern {}", self.0),
        }
    }

    /// True if the module at `(r, c)` is flipped by this mask.
    pub fn applies(self, r: i16, c: i16) -> bool {
        self.mask_function()(r, c)
    }

    pub fn formula(self) -> &'static str {
        MASK_FORMULAS[self.0 as usize]
    }
}

impl Default for MaskPattern {
    fn default() -> Self {
        Self(0b010)
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<u8> for MaskPattern {
    type Error = QRError;

    fn try_from(pattern: u8) -> QRResult<Self> {
        Self::new(pattern)
    }
}

impl FromStr for MaskPattern {
    type Err = QRError;

    fn from_str(s: &str) -> QRResult<Self> {
        let pattern = s.trim().parse::<u8>().map_err(|_| QRError::InvalidMaskPattern(u8::MAX))?;
        Self::new(pattern)
    }
}

impl fmt::Display for MaskPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03b}", self.0)
    }
}

// Predicates take (row, col)
mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

/// Cell reached from iteration indices `(i, j)` counted from the opposite
/// corner of a `width` sized matrix.
pub fn mirrored(width: usize, i: usize, j: usize) -> (i16, i16) {
    debug_assert!(i < width && j < width, "Index out of bounds: Width {width}, Index ({i}, {j})");
    ((width - 1 - i) as i16, (width - 1 - j) as i16)
}


// Global constants
//------------------------------------------------------------------------------

const MASK_FORMULAS: [&str; 8] = [
    "(r + c) % 2 == 0",
    "r % 2 == 0",
    "c % 3 == 0",
    "(r + c) % 3 == 0",
    "(r / 2 + c / 3) % 2 == 0",
    "(r * c) % 2 + (r * c) % 3 == 0",
    "((r * c) % 2 + (r * c) % 3) % 2 == 0",
    "((r + c) % 2 + (r * c) % 3) % 2 == 0",
];
