use super::{poly::FieldPoly, reed_solomon::ReedSolomon, terms::Terms};
use crate::common::error::QRResult;

// Block
//------------------------------------------------------------------------------

/// Slice of the padded codewords as a message polynomial, paired with the
/// error correction codewords computed for it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Block {
    message: Terms,
    ecc: Vec<u8>,
}

impl Block {
    pub fn new(
        data: &[u8],
        first_power: usize,
        ecc_len: usize,
        rs: &mut ReedSolomon,
    ) -> QRResult<Self> {
        let message = Terms::from_bytes(data, first_power);
        let ecc = rs.encode(&FieldPoly::new(&message.coefficients()), ecc_len)?;
        Ok(Self { message, ecc })
    }

    pub fn message(&self) -> &Terms {
        &self.message
    }

    pub fn data(&self) -> Vec<u8> {
        self.message.coefficients()
    }

    pub fn ecc(&self) -> &[u8] {
        &self.ecc
    }

    pub fn data_len(&self) -> usize {
        self.message.len()
    }

    pub fn ec_len(&self) -> usize {
        self.ecc.len()
    }
}
