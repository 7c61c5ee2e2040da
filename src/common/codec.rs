use std::{fmt, str::FromStr};

use super::{
    bit_utils::{bits_to_string, bytes_to_string, to_bits, BitStream},
    error::{QRError, QRResult},
    metadata::Capacity,
    trace::Tracer,
};
use crate::record;

// Mode
//------------------------------------------------------------------------------

/// Data encoding mode. The discriminant is the 4 bit mode indicator. Only
/// alphanumeric data can be encoded, the other modes are declared so their
/// indicator and character count width are known.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
    Kanji = 0b1000,
}

impl Mode {
    pub const ALL: [Self; 4] = [Self::Numeric, Self::Alphanumeric, Self::Byte, Self::Kanji];

    pub fn indicator(self) -> u8 {
        self as u8
    }

    /// Bit length of `len` characters, excluding the header.
    pub fn encoded_len(self, len: usize) -> usize {
        match self {
            Self::Numeric => (len * 10 + 2) / 3,
            Self::Alphanumeric => (len * 11 + 1) / 2,
            Self::Byte => len * 8,
            Self::Kanji => len * 13,
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = QRError;

    fn try_from(index: u8) -> QRResult<Self> {
        Self::ALL.get(index as usize).copied().ok_or(QRError::InvalidMode(index))
    }
}

impl FromStr for Mode {
    type Err = QRError;

    fn from_str(s: &str) -> QRResult<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            return Self::try_from(index);
        }
        match s.to_ascii_lowercase().as_str() {
            "numeric" => Ok(Self::Numeric),
            "alphanumeric" | "alnum" => Ok(Self::Alphanumeric),
            "byte" | "binary" => Ok(Self::Byte),
            "kanji" | "japanese" => Ok(Self::Kanji),
            _ => Err(QRError::InvalidMode(u8::MAX)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// Alphanumeric character table
//------------------------------------------------------------------------------

pub fn code_for(ch: char) -> Option<u8> {
    match ch {
        '0'..='9' => Some(ch as u8 - b'0'),
        'A'..='Z' => Some(ch as u8 - b'A' + 10),
        _ => ALPHANUMERIC_CHARS[36..].iter().position(|&c| c as char == ch).map(|i| i as u8 + 36),
    }
}

pub fn char_for(code: u8) -> Option<char> {
    ALPHANUMERIC_CHARS.get(code as usize).map(|&c| c as char)
}


// Writer for encoded data
//------------------------------------------------------------------------------

pub fn push_mode(mode: Mode, out: &mut BitStream, tracer: &mut dyn Tracer) {
    out.push_bits(mode.indicator(), MODE_INDICATOR_BITS);
    record!(tracer, "Mode {mode}: indicator {}", bits_to_string(out.bits_from(0)));
}

/// Pushes the character count of `len` characters, sized for the version.
pub fn push_char_count(
    len: usize,
    mode: Mode,
    cap: &Capacity,
    out: &mut BitStream,
    tracer: &mut dyn Tracer,
) -> QRResult<()> {
    let len_bits = cap.version.char_count_bits(mode);
    record!(tracer, "Character count field for version {}: {len_bits} bits", cap.version);

    if len >= 1 << len_bits {
        let bytes = (out.len() + len_bits + mode.encoded_len(len) + 7) >> 3;
        return Err(QRError::DataTooLong { bytes, capacity: cap.data_size });
    }

    let start = out.len();
    out.push_bits(len as u16, len_bits);
    record!(tracer, "Character count {len}: {}", bits_to_string(out.bits_from(start)));
    record!(tracer, "Stream: {}", bits_to_string(out.bits_from(0)));
    Ok(())
}

pub fn push_data(
    text: &str,
    mode: Mode,
    out: &mut BitStream,
    tracer: &mut dyn Tracer,
) -> QRResult<()> {
    match mode {
        Mode::Alphanumeric => push_alphanumeric_data(text, out, tracer),
        _ => Err(QRError::UnsupportedMode(mode)),
    }
}

fn push_alphanumeric_data(
    text: &str,
    out: &mut BitStream,
    tracer: &mut dyn Tracer,
) -> QRResult<()> {
    let codes = text
        .chars()
        .map(|ch| code_for(ch).map(|code| (ch, code)).ok_or(QRError::InvalidChar(ch)))
        .collect::<QRResult<Vec<_>>>()?;

    for chunk in codes.chunks(2) {
        match *chunk {
            [(c1, d1), (c2, d2)] => {
                let pair = d1 as u16 * ALPHANUMERIC_RADIX + d2 as u16;
                out.push_bits(pair, 11);
                record!(
                    tracer,
                    "Pair {c1:?} {c2:?}: {ALPHANUMERIC_RADIX} * {d1} + {d2} = {pair} -> {}",
                    bits_to_string(to_bits(pair as u32, 11))
                );
            }
            [(c, d)] => {
                out.push_bits(d, 6);
                record!(
                    tracer,
                    "Odd trailing character {c:?}: {d} -> {}",
                    bits_to_string(to_bits(d as u32, 6))
                );
            }
            _ => unreachable!("Chunks hold one or two characters"),
        }
    }

    record!(tracer, "Encoded {} characters into {} bits", codes.len(), out.len());
    Ok(())
}

/// Pushes up to 4 zero bits while the stream is below the data bit capacity.
pub fn push_terminator(out: &mut BitStream, cap: &Capacity, tracer: &mut dyn Tracer) {
    let bit_capacity = cap.data_bit_capacity();
    let term_len = bit_capacity.saturating_sub(out.len()).min(MAX_TERMINATOR_BITS);
    out.push_bits(0u8, term_len);
    record!(
        tracer,
        "Terminator: {term_len} zero bits, {} of {bit_capacity} bits used",
        out.len()
    );
}

pub fn push_padding_bits(out: &mut BitStream, tracer: &mut dyn Tracer) {
    let offset = out.len() & 7;
    let padding_bits_len = if offset > 0 { 8 - offset } else { 0 };
    out.push_bits(0u8, padding_bits_len);
    record!(
        tracer,
        "Byte alignment: {padding_bits_len} zero bits, {} bits, {} bytes",
        out.len(),
        out.len() >> 3
    );
}

/// Fills the remaining data codewords with the alternating pad bytes.
pub fn push_padding_codewords(
    out: &mut BitStream,
    cap: &Capacity,
    tracer: &mut dyn Tracer,
) -> QRResult<()> {
    let offset = out.len() & 7;
    debug_assert!(offset == 0, "Bit offset should be zero before padding codewords: {offset}");

    let bytes = out.len() >> 3;
    if bytes > cap.data_size {
        return Err(QRError::DataTooLong { bytes, capacity: cap.data_size });
    }

    let padding = PADDING_CODEWORDS
        .iter()
        .copied()
        .cycle()
        .take(cap.data_size - bytes)
        .collect::<Vec<_>>();
    out.extend(&padding);
    record!(tracer, "Pad codewords: {}", bytes_to_string(&padding));
    record!(tracer, "Data codewords: {}/{}", out.len() >> 3, cap.data_size);
    Ok(())
}


// Global constants
//------------------------------------------------------------------------------

pub const ALPHANUMERIC_CHARS: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

const ALPHANUMERIC_RADIX: u16 = 45;

pub const MODE_INDICATOR_BITS: usize = 4;

const MAX_TERMINATOR_BITS: usize = 4;

pub const PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];
