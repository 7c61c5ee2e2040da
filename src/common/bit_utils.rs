use std::{fmt::Display, mem};

use num_traits::PrimInt;

// Bit stream
//------------------------------------------------------------------------------

/// Growable MSB-first bit buffer with a read cursor.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct BitStream {
    data: Vec<u8>,
    // Bit length
    len: usize,
    // Pointer to take bits
    cursor: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bit_capacity: usize) -> Self {
        Self { data: Vec::with_capacity((bit_capacity + 7) >> 3), len: 0, cursor: 0 }
    }

    pub fn from(inp: &[u8]) -> Self {
        Self { data: inp.to_vec(), len: inp.len() << 3, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn get(&self, pos: usize) -> bool {
        debug_assert!(pos < self.len, "Out of bitstream bounds: Len {}, Pos {pos}", self.len);
        (self.data[pos >> 3] << (pos & 7)) & 0b10000000 != 0
    }

    /// Bits from `start` to the end, ignoring the cursor.
    pub fn bits_from(&self, start: usize) -> impl Iterator<Item = bool> + '_ {
        (start..self.len).map(|i| self.get(i))
    }
}

// Push bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    pub fn push_bits<T>(&mut self, bits: T, size: usize)
    where
        T: PrimInt + Display,
    {
        let max_bits = mem::size_of::<T>() * 8;
        debug_assert!(size <= max_bits, "Size exceeds bit width: Size {size}, Width {max_bits}");
        debug_assert!(
            size >= max_bits - bits.leading_zeros() as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );

        for i in (0..size).rev() {
            self.push((bits >> i) & T::one() == T::one());
        }
    }

    pub fn push(&mut self, bit: bool) {
        let offset = self.len & 7;
        if offset == 0 {
            self.data.push(0);
        }
        if bit {
            let pos = self.len >> 3;
            self.data[pos] |= 0b10000000 >> offset;
        }
        self.len += 1;
    }

    pub fn extend(&mut self, arr: &[u8]) {
        debug_assert!(
            (self.len & 7) == 0,
            "Bit offset must be zero to extend from another array: Bit offset {}",
            self.len & 7
        );
        self.data.extend_from_slice(arr);
        self.len += arr.len() << 3;
    }
}

#[cfg(test)]
mod bit_stream_push_tests {
    use super::BitStream;

    #[test]
    fn test_len() {
        let mut bs = BitStream::new();
        assert_eq!(bs.len(), 0);
        bs.push_bits(0, 0);
        assert_eq!(bs.len(), 0);
        bs.push_bits(0b1000, 4);
        assert_eq!(bs.len(), 4);
        bs.push_bits(0b1000, 8);
        assert_eq!(bs.len(), 12);
        bs.push_bits(0b1000, 4);
        assert_eq!(bs.len(), 16);
        bs.push_bits(0b1111111, 7);
        assert_eq!(bs.len(), 23);
        bs.push_bits(0b111111111111, 12);
        assert_eq!(bs.len(), 35);
        bs.push_bits(0b111111111111u16, 16);
        assert_eq!(bs.len(), 51);
        assert_eq!(bs.data().len(), 7);
    }

    #[test]
    #[should_panic]
    fn test_invalid_len() {
        let mut bs = BitStream::new();
        bs.push_bits(256u16, 8);
    }

    #[test]
    fn test_push() {
        let mut bs = BitStream::new();
        bs.push(false);
        assert_eq!(bs.data(), &[0b00000000]);
        bs.push(true);
        assert_eq!(bs.data(), &[0b01000000]);
        assert!(!bs.get(0));
        assert!(bs.get(1));
    }

    #[test]
    fn test_push_bits() {
        let mut bs = BitStream::new();
        bs.push_bits(0b0010u8, 4);
        bs.push_bits(779u16, 11);
        bs.push_bits(0b1u8, 1);
        bs.push_bits(0b101u32, 3);
        assert_eq!(bs.len(), 19);
        assert_eq!(bs.data(), &[0b00100110, 0b00010111, 0b10100000]);
        let tail = bs.bits_from(15).collect::<Vec<_>>();
        assert_eq!(tail, vec![true, true, false, true]);
    }

    #[test]
    fn test_extend() {
        let mut bs = BitStream::new();
        bs.push_bits(0b0010u8, 4);
        bs.push_bits(0b1010u8, 4);
        bs.extend(&[236, 17]);
        assert_eq!(bs.len(), 24);
        assert_eq!(bs.data(), &[0b00101010, 236, 17]);
    }

    #[test]
    fn test_bits_from() {
        let bs = BitStream::from(&[0b10110000]);
        assert_eq!(bs.bits_from(2).take(3).collect::<Vec<_>>(), vec![true, true, false]);
        assert_eq!(bs.bits_from(8).count(), 0);
    }
}

// Read bits from bit stream
//------------------------------------------------------------------------------

impl BitStream {
    /// Next bit at the cursor, advancing it.
    pub fn take_bit(&mut self) -> Option<bool> {
        if self.cursor == self.len {
            return None;
        }

        let bit = self.get(self.cursor);
        self.cursor += 1;
        Some(bit)
    }
}


// Iterator for bit stream
//------------------------------------------------------------------------------

impl Iterator for BitStream {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        self.take_bit()
    }
}

// Binary conversions
//------------------------------------------------------------------------------

/// `len` bits of `value`, most significant first.
pub fn to_bits(value: u32, len: usize) -> Vec<bool> {
    debug_assert!(len <= 32, "Cannot expand more than 32 bits: Len {len}");
    (0..len).rev().map(|i| (value >> i) & 1 == 1).collect()
}

pub fn from_bits(bits: &[bool]) -> u32 {
    debug_assert!(bits.len() <= 32, "Cannot fold more than 32 bits: Len {}", bits.len());
    bits.iter().fold(0, |acc, &b| (acc << 1) | b as u32)
}

pub fn bits_to_string<I: IntoIterator<Item = bool>>(bits: I) -> String {
    bits.into_iter().map(|b| if b { '1' } else { '0' }).collect()
}

pub fn bytes_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| b.to_string()).collect::<Vec<_>>().join(" ")
}
