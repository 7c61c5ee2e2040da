use std::sync::OnceLock;

use crate::common::error::{QRError, QRResult};

// Galois field GF(256)
//------------------------------------------------------------------------------

/// GF(256) arithmetic backed by log and antilog tables built from the QR
/// primitive polynomial x^8 + x^4 + x^3 + x^2 + 1.
#[derive(Debug)]
pub struct GaloisField {
    exp: [u8; FIELD_SIZE],
    log: [u8; FIELD_SIZE],
}

impl GaloisField {
    /// Process wide field. Tables are built once and never mutated afterwards.
    pub fn get() -> &'static Self {
        static FIELD: OnceLock<GaloisField> = OnceLock::new();
        FIELD.get_or_init(|| Self::new(PRIMITIVE))
    }

    fn new(primitive: u16) -> Self {
        let mut exp = [0u8; FIELD_SIZE];
        let mut log = [0u8; FIELD_SIZE];

        let mut x: u16 = 1;
        for e in exp.iter_mut() {
            *e = x as u8;
            x <<= 1;
            if x >= FIELD_SIZE as u16 {
                x ^= primitive;
            }
        }
        // exp[255] wraps back to 1, so only the first 255 entries are unique
        for (i, &e) in exp.iter().take(FIELD_SIZE - 1).enumerate() {
            log[e as usize] = i as u8;
        }

        Self { exp, log }
    }

    pub fn add_or_subtract(a: u8, b: u8) -> u8 {
        a ^ b
    }

    pub fn exponent(&self, i: usize) -> u8 {
        debug_assert!(i < FIELD_SIZE, "Exponent out of range: {i}");
        self.exp[i]
    }

    pub fn log(&self, a: u8) -> QRResult<u8> {
        if a == 0 {
            return Err(QRError::ZeroHasNoLogarithm);
        }
        Ok(self.log[a as usize])
    }

    pub fn multiply(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_sum = self.log[a as usize] as usize + self.log[b as usize] as usize;
        self.exp[log_sum % ORDER]
    }

    pub fn inverse(&self, a: u8) -> QRResult<u8> {
        if a == 0 {
            return Err(QRError::ZeroHasNoInverse);
        }
        Ok(self.exp[ORDER - self.log[a as usize] as usize])
    }
}


// Global constants
//------------------------------------------------------------------------------

pub const PRIMITIVE: u16 = 0x011D;

pub const FIELD_SIZE: usize = 256;

// Order of the multiplicative group
const ORDER: usize = FIELD_SIZE - 1;
