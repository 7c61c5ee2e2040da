use super::{
    bit_utils::{bits_to_string, to_bits},
    ec::{calculate_bch, FORMAT_GENERATOR, VERSION_GENERATOR},
    mask::MaskPattern,
    metadata::{ECLevel, Version},
    trace::Tracer,
};
use crate::record;

// Format information
//------------------------------------------------------------------------------

/// Masked 15 bit format information, most significant bit being the first
/// error correction level bit.
pub fn format_info(ec_level: ECLevel, mask: MaskPattern, tracer: &mut dyn Tracer) -> u32 {
    let data = (ec_level.format_bits() << 3) | mask.code();
    let rem = calculate_bch(data, FORMAT_GENERATOR);
    let info = (data << 10) | rem;
    let masked = info ^ FORMAT_MASK;

    record!(
        tracer,
        "Format data (ec level {ec_level:?}, mask {mask}): {}",
        bits_to_string(to_bits(data, 5))
    );
    record!(tracer, "BCH(15, 5) remainder: {}", bits_to_string(to_bits(rem, 10)));
    record!(tracer, "Appended: {}", bits_to_string(to_bits(info, FORMAT_INFO_BITS)));
    record!(
        tracer,
        "XOR with {}: {}",
        bits_to_string(to_bits(FORMAT_MASK, FORMAT_INFO_BITS)),
        bits_to_string(to_bits(masked, FORMAT_INFO_BITS))
    );
    masked
}

/// Format information in placement order, least significant bit first.
pub fn format_bits(ec_level: ECLevel, mask: MaskPattern, tracer: &mut dyn Tracer) -> Vec<bool> {
    let mut bits = to_bits(format_info(ec_level, mask, tracer), FORMAT_INFO_BITS);
    bits.reverse();
    record!(tracer, "Format bits in placement order: {}", bits_to_string(bits.iter().copied()));
    bits
}

// Version information
//------------------------------------------------------------------------------

/// 18 bit version information, or `None` below version 7.
pub fn version_info(version: Version) -> Option<u32> {
    if !version.has_version_info() {
        return None;
    }
    let v = *version as u32;
    Some((v << 12) | calculate_bch(v, VERSION_GENERATOR))
}

/// Version information in placement order, least significant bit first.
pub fn version_bits(version: Version, tracer: &mut dyn Tracer) -> Option<Vec<bool>> {
    let info = version_info(version)?;
    let mut bits = to_bits(info, VERSION_INFO_BITS);
    bits.reverse();
    record!(
        tracer,
        "Version {version} info: {}, placement order: {}",
        bits_to_string(to_bits(info, VERSION_INFO_BITS)),
        bits_to_string(bits.iter().copied())
    );
    Some(bits)
}


// Global constants
//------------------------------------------------------------------------------

pub const FORMAT_INFO_BITS: usize = 15;

pub const VERSION_INFO_BITS: usize = 18;

const FORMAT_MASK: u32 = 0b101010000010010;
