use std::{collections::BTreeMap, fmt};

// Sparse polynomial terms
//------------------------------------------------------------------------------

/// Power to coefficient map. Inserting an existing power accumulates the
/// coefficient with GF(256) addition instead of adding a second term.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Terms {
    terms: BTreeMap<usize, u8>,
}

impl Terms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terms with descending powers starting at `first_power`, one per byte.
    pub fn from_bytes(bytes: &[u8], first_power: usize) -> Self {
        debug_assert!(
            bytes.len() <= first_power + 1,
            "Not enough powers for bytes: First power {first_power}, Bytes {}",
            bytes.len()
        );

        let mut terms = Self::new();
        for (i, &b) in bytes.iter().enumerate() {
            terms.insert_or_accumulate(first_power - i, b);
        }
        terms
    }

    pub fn insert_or_accumulate(&mut self, power: usize, coeff: u8) {
        *self.terms.entry(power).or_insert(0) ^= coeff;
    }

    pub fn get(&self, power: usize) -> Option<u8> {
        self.terms.get(&power).copied()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// (power, coefficient) pairs, highest power first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.terms.iter().rev().map(|(&p, &c)| (p, c))
    }

    pub fn coefficients(&self) -> Vec<u8> {
        self.iter().map(|(_, c)| c).collect()
    }
}

impl fmt::Display for Terms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (power, coeff)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "({coeff} x^{power})")?;
        }
        Ok(())
    }
}
