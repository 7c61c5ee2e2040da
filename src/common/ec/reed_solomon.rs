use super::{galois::GaloisField, poly::FieldPoly};
use crate::common::error::QRResult;

// Reed Solomon encoder
//------------------------------------------------------------------------------

/// Systematic Reed-Solomon encoder. Generator polynomials are built on demand
/// and cached, `generators[d]` being the product of `(x - a^i)` for `i < d`.
#[derive(Debug, Clone)]
pub struct ReedSolomon {
    generators: Vec<FieldPoly>,
}

impl Default for ReedSolomon {
    fn default() -> Self {
        Self::new()
    }
}

impl ReedSolomon {
    pub fn new() -> Self {
        Self { generators: vec![FieldPoly::one()] }
    }

    pub fn generator(&mut self, degree: usize) -> &FieldPoly {
        let gf = GaloisField::get();
        for d in self.generators.len()..=degree {
            let root = FieldPoly::new(&[1, gf.exponent(d - 1)]);
            let next = self.generators[d - 1].multiply(&root);
            self.generators.push(next);
        }
        &self.generators[degree]
    }

    /// Returns exactly `ecc_len` error correction codewords for the message.
    pub fn encode(&mut self, message: &FieldPoly, ecc_len: usize) -> QRResult<Vec<u8>> {
        if ecc_len == 0 {
            return Ok(Vec::new());
        }

        let shifted = message.multiply_by_monomial(ecc_len, 1);
        let (_, remainder) = shifted.divide(self.generator(ecc_len))?;

        let coeffs = remainder.coefficients();
        assert!(
            coeffs.len() <= ecc_len,
            "Remainder longer than ecc length: Remainder {}, Ecc {ecc_len}",
            coeffs.len()
        );

        // Leading zeros of the remainder were stripped
        let mut ecc = vec![0; ecc_len - coeffs.len()];
        ecc.extend_from_slice(coeffs);
        Ok(ecc)
    }
}
