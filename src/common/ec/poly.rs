use std::fmt;

use super::galois::GaloisField;
use crate::common::error::{QRError, QRResult};

// Polynomial over GF(256)
//------------------------------------------------------------------------------

/// Polynomial with GF(256) coefficients, highest power first. Leading zeros
/// are stripped, so only the zero polynomial starts with a zero coefficient.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FieldPoly {
    coeffs: Vec<u8>,
}

impl FieldPoly {
    pub fn new(coeffs: &[u8]) -> Self {
        debug_assert!(!coeffs.is_empty(), "Polynomial needs atleast one coefficient");

        match coeffs.iter().position(|&c| c != 0) {
            Some(first) => Self { coeffs: coeffs[first..].to_vec() },
            None => Self::zero(),
        }
    }

    pub fn zero() -> Self {
        Self { coeffs: vec![0] }
    }

    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    pub fn monomial(power: usize, coeff: u8) -> Self {
        if coeff == 0 {
            return Self::zero();
        }
        let mut coeffs = vec![0; power + 1];
        coeffs[0] = coeff;
        Self { coeffs }
    }

    pub fn coefficients(&self) -> &[u8] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn coefficient(&self, power: usize) -> u8 {
        self.coeffs[self.degree() - power]
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs[0] == 0
    }
}

// Arithmetic
//------------------------------------------------------------------------------

impl FieldPoly {
    pub fn add_or_subtract(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        let (small, large) = if self.coeffs.len() <= other.coeffs.len() {
            (&self.coeffs, &other.coeffs)
        } else {
            (&other.coeffs, &self.coeffs)
        };

        // Align low order ends
        let diff = large.len() - small.len();
        let mut sum = large.clone();
        for (s, &c) in sum[diff..].iter_mut().zip(small.iter()) {
            *s = GaloisField::add_or_subtract(*s, c);
        }
        Self::new(&sum)
    }

    pub fn multiply(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let gf = GaloisField::get();
        let mut product = vec![0; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                product[i + j] ^= gf.multiply(a, b);
            }
        }
        Self::new(&product)
    }

    pub fn scale(&self, scalar: u8) -> Self {
        match scalar {
            0 => Self::zero(),
            1 => self.clone(),
            _ => {
                let gf = GaloisField::get();
                let coeffs = self.coeffs.iter().map(|&c| gf.multiply(c, scalar));
                Self::new(&coeffs.collect::<Vec<_>>())
            }
        }
    }

    pub fn multiply_by_monomial(&self, power: usize, coeff: u8) -> Self {
        if coeff == 0 {
            return Self::zero();
        }

        let gf = GaloisField::get();
        let mut product = vec![0; self.coeffs.len() + power];
        for (p, &c) in product.iter_mut().zip(self.coeffs.iter()) {
            *p = gf.multiply(c, coeff);
        }
        Self::new(&product)
    }

    /// Long division returning `(quotient, remainder)`.
    pub fn divide(&self, other: &Self) -> QRResult<(Self, Self)> {
        if other.is_zero() {
            return Err(QRError::DivisionByZero);
        }

        let gf = GaloisField::get();
        let inv_lead = gf.inverse(other.coefficient(other.degree()))?;

        let mut quotient = Self::zero();
        let mut remainder = self.clone();
        while remainder.degree() >= other.degree() && !remainder.is_zero() {
            let power_diff = remainder.degree() - other.degree();
            let scale = gf.multiply(remainder.coefficient(remainder.degree()), inv_lead);
            let term = other.multiply_by_monomial(power_diff, scale);
            quotient = quotient.add_or_subtract(&Self::monomial(power_diff, scale));
            remainder = remainder.add_or_subtract(&term);
        }

        Ok((quotient, remainder))
    }

    pub fn evaluate_at(&self, x: u8) -> u8 {
        match x {
            0 => self.coefficient(0),
            1 => self.coeffs.iter().fold(0, |acc, &c| GaloisField::add_or_subtract(acc, c)),
            _ => {
                let gf = GaloisField::get();
                self.coeffs[1..].iter().fold(self.coeffs[0], |acc, &c| gf.multiply(x, acc) ^ c)
            }
        }
    }
}

// Coefficients are written as powers of the generator a
impl fmt::Display for FieldPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let gf = GaloisField::get();
        let mut first = true;
        for power in (0..=self.degree()).rev() {
            let coeff = self.coefficient(power);
            if coeff == 0 {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;

            if power == 0 || coeff != 1 {
                match gf.log(coeff).map_err(|_| fmt::Error)? {
                    0 => f.write_str("1")?,
                    1 => f.write_str("a")?,
                    alpha => write!(f, "a^{alpha}")?,
                }
            }
            match power {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{power}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod field_poly_tests {
    use proptest::prelude::*;

    use super::FieldPoly;
    use crate::common::error::QRError;

    #[test]
    fn test_strip_leading_zeros() {
        assert_eq!(FieldPoly::new(&[0, 0, 3, 0, 1]).coefficients(), &[3, 0, 1]);
        assert_eq!(FieldPoly::new(&[0, 0, 0]), FieldPoly::zero());
        assert_eq!(FieldPoly::new(&[0]), FieldPoly::zero());
        assert_eq!(FieldPoly::new(&[5, 0]).degree(), 1);
    }

    #[test]
    fn test_coefficient_by_power() {
        let p = FieldPoly::new(&[7, 0, 9]);
        assert_eq!(p.coefficient(2), 7);
        assert_eq!(p.coefficient(1), 0);
        assert_eq!(p.coefficient(0), 9);
    }

    #[test]
    fn test_add_aligns_low_order() {
        let a = FieldPoly::new(&[1, 2, 3]);
        let b = FieldPoly::new(&[5, 6]);
        assert_eq!(a.add_or_subtract(&b).coefficients(), &[1, 2 ^ 5, 3 ^ 6]);
        assert_eq!(b.add_or_subtract(&a), a.add_or_subtract(&b));
        assert_eq!(a.add_or_subtract(&FieldPoly::zero()), a);
    }

    #[test]
    fn test_add_cancels_leading_terms() {
        let a = FieldPoly::new(&[4, 2, 3]);
        let b = FieldPoly::new(&[4, 2, 1]);
        assert_eq!(a.add_or_subtract(&b).coefficients(), &[2]);
        assert!(a.add_or_subtract(&a).is_zero());
    }

    #[test]
    fn test_multiply() {
        // (x + 1)(x + 2) = x^2 + 3x + 2
        let a = FieldPoly::new(&[1, 1]);
        let b = FieldPoly::new(&[1, 2]);
        assert_eq!(a.multiply(&b).coefficients(), &[1, 3, 2]);
        assert!(a.multiply(&FieldPoly::zero()).is_zero());
        assert_eq!(a.multiply(&FieldPoly::one()), a);
    }

    #[test]
    fn test_scale() {
        let a = FieldPoly::new(&[1, 2, 128]);
        assert!(a.scale(0).is_zero());
        assert_eq!(a.scale(1), a);
        assert_eq!(a.scale(2).coefficients(), &[2, 4, 29]);
    }

    #[test]
    fn test_multiply_by_monomial() {
        let a = FieldPoly::new(&[1, 2]);
        assert_eq!(a.multiply_by_monomial(3, 1).coefficients(), &[1, 2, 0, 0, 0]);
        assert_eq!(a.multiply_by_monomial(0, 2).coefficients(), &[2, 4]);
        assert!(a.multiply_by_monomial(4, 0).is_zero());
    }

    #[test]
    fn test_divide_by_zero() {
        let a = FieldPoly::new(&[1, 2]);
        assert_eq!(a.divide(&FieldPoly::zero()), Err(QRError::DivisionByZero));
    }

    #[test]
    fn test_divide_exact() {
        // (x^2 + 3x + 2) / (x + 1) = x + 2
        let num = FieldPoly::new(&[1, 3, 2]);
        let den = FieldPoly::new(&[1, 1]);
        let (q, r) = num.divide(&den).unwrap();
        assert_eq!(q.coefficients(), &[1, 2]);
        assert!(r.is_zero());
    }

    #[test]
    fn test_divide_lower_degree() {
        let num = FieldPoly::new(&[3]);
        let den = FieldPoly::new(&[1, 1]);
        let (q, r) = num.divide(&den).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, num);
    }

    #[test]
    fn test_evaluate_at() {
        let p = FieldPoly::new(&[1, 3, 2]);
        assert_eq!(p.evaluate_at(0), 2);
        assert_eq!(p.evaluate_at(1), 1 ^ 3 ^ 2);
        // Roots of (x + 1)(x + 2)
        assert_eq!(p.evaluate_at(2), 0);
        assert_eq!(FieldPoly::new(&[1, 1]).evaluate_at(2), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldPoly::zero().to_string(), "0");
        assert_eq!(FieldPoly::new(&[1, 3, 2]).to_string(), "x^2 + a^25x + a");
        assert_eq!(FieldPoly::new(&[2, 0, 1]).to_string(), "ax^2 + 1");
    }

    proptest! {
        #[test]
        fn proptest_division_identity(
            num in prop::collection::vec(any::<u8>(), 1..40),
            den in prop::collection::vec(any::<u8>(), 1..12),
        ) {
            let num = FieldPoly::new(&num);
            let den = FieldPoly::new(&den);
            prop_assume!(!den.is_zero());

            let (q, r) = num.divide(&den).unwrap();
            prop_assert!(r.is_zero() || r.degree() < den.degree());
            prop_assert_eq!(q.multiply(&den).add_or_subtract(&r), num);
        }
    }
}
