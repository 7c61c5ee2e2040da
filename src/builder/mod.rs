mod qr;

pub use qr::{module_size, Color, Module, QR};

use std::ops::Deref;

use image::RgbImage;
use tracing::{debug, info, trace};

use crate::common::{
    bit_utils::{bits_to_string, bytes_to_string, BitStream},
    codec::{
        push_char_count, push_data, push_mode, push_padding_bits, push_padding_codewords,
        push_terminator, Mode,
    },
    ec::{Block, ReedSolomon},
    error::QRResult,
    info::{format_bits, version_bits},
    mask::MaskPattern,
    metadata::{Capacity, ECLevel, Version},
    trace::{Breakpoint, NoTrace, Trace, Tracer},
};
use crate::record;

/// Encoding parameters set together by [`QRBuilder::advanced_mode`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Settings {
    pub mode: Mode,
    pub version: Version,
    pub ec_level: ECLevel,
    pub mask: MaskPattern,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Alphanumeric,
            version: Version::default(),
            ec_level: ECLevel::Q,
            mask: MaskPattern::default(),
        }
    }
}

pub struct QRBuilder<'a> {
    text: &'a str,
    settings: Settings,
    trace: Option<Trace>,
    qr: Option<QR>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, settings: Settings::default(), trace: None, qr: None }
    }

    pub fn advanced_mode(
        &mut self,
        mode: Mode,
        version: Version,
        ec_level: ECLevel,
        mask: MaskPattern,
    ) -> &mut Self {
        self.settings = Settings { mode, version, ec_level, mask };
        self.qr = None;
        self
    }

    /// Collects the step log and stops right after `breakpoint`.
    /// `Breakpoint::None` only collects the log.
    pub fn debug_mode(&mut self, breakpoint: Breakpoint) -> &mut Self {
        self.trace = Some(Trace::new(breakpoint));
        self.qr = None;
        self
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn debug_trace(&self) -> &str {
        self.trace.as_ref().map_or("", |t| t.as_str())
    }

    pub fn metadata(&self) -> String {
        let Settings { mode, version, ec_level, mask } = self.settings;
        format!("{{ Mode: {mode}, Version: {version}, Ec level: {ec_level:?}, Mask: {mask} }}")
    }
}


// Pipeline
//------------------------------------------------------------------------------

impl QRBuilder<'_> {
    /// Runs the pipeline once and keeps the result. A debug session halted at a
    /// breakpoint keeps the partially built matrix.
    pub fn build(&mut self) -> QRResult<&QR> {
        let qr = match self.qr.take() {
            Some(qr) => qr,
            None => {
                let breakpoint = self.trace.as_ref().map(Trace::breakpoint);
                let highlight = breakpoint == Some(Breakpoint::Masked);
                let mut no_trace = NoTrace;
                let tracer: &mut dyn Tracer = match self.trace.as_mut() {
                    Some(t) => {
                        *t = Trace::new(t.breakpoint());
                        t
                    }
                    None => &mut no_trace,
                };
                Self::encode(self.text, &self.settings, highlight, tracer)?
            }
        };
        Ok(self.qr.insert(qr))
    }

    /// Renders the matrix with `module_size(resolution_step)` pixels per
    /// module, building it first if needed.
    pub fn render(&mut self, resolution_step: u8) -> QRResult<RgbImage> {
        let module_sz = module_size(resolution_step);
        Ok(self.build()?.render(module_sz))
    }

    fn encode(
        text: &str,
        settings: &Settings,
        highlight: bool,
        tracer: &mut dyn Tracer,
    ) -> QRResult<QR> {
        let Settings { mode, version, ec_level, mask } = *settings;
        let cap = Capacity::new(version, ec_level);
        info!(%mode, %version, ?ec_level, %mask, len = text.len(), "Generating QR");

        let mut qr = QR::new(version, ec_level);
        qr.draw_all_function_patterns(tracer);
        if tracer.halt_at(Breakpoint::MatrixCreated) {
            return Ok(qr);
        }

        let char_count = text.chars().count();
        let mut bits = BitStream::with_capacity(cap.data_bit_capacity());
        push_mode(mode, &mut bits, tracer);
        if tracer.halt_at(Breakpoint::ModeBits) {
            return Ok(qr);
        }

        push_char_count(char_count, mode, &cap, &mut bits, tracer)?;
        if tracer.halt_at(Breakpoint::LengthBits) {
            return Ok(qr);
        }

        push_data(text, mode, &mut bits, tracer)?;
        debug!(chars = char_count, bits = bits.len(), "Data encoded");
        if tracer.halt_at(Breakpoint::DataEncoded) {
            return Ok(qr);
        }

        push_terminator(&mut bits, &cap, tracer);
        if tracer.halt_at(Breakpoint::BinaryFinished) {
            return Ok(qr);
        }

        push_padding_bits(&mut bits, tracer);
        if tracer.halt_at(Breakpoint::ByteAligned) {
            return Ok(qr);
        }

        push_padding_codewords(&mut bits, &cap, tracer)?;
        debug!(codewords = bits.len() >> 3, capacity = cap.data_size, "Data padded");
        if tracer.halt_at(Breakpoint::PaddingFilled) {
            return Ok(qr);
        }

        let blocks = Self::compute_ecc(bits.data(), &cap, tracer)?;
        if tracer.halt_at(Breakpoint::EccComputed) {
            return Ok(qr);
        }

        let payload = Self::interleave_blocks(&blocks, &cap, tracer);
        qr.draw_encoding_region(payload, tracer);
        if tracer.halt_at(Breakpoint::MatrixFilled) {
            return Ok(qr);
        }

        let flipped = qr.apply_mask(mask, highlight, tracer);
        debug!(%mask, flipped, "Mask applied");
        if tracer.halt_at(Breakpoint::Masked) {
            return Ok(qr);
        }

        qr.draw_format_info(&format_bits(ec_level, mask, tracer));
        match version_bits(version, tracer) {
            Some(bits) => qr.draw_version_info(&bits),
            None => record!(tracer, "Version {version} below 7, no version information"),
        }

        let total_modules = qr.width() * qr.width();
        let dark_modules = qr.count_dark_modules();
        info!(
            width = qr.width(),
            dark = dark_modules,
            light = total_modules - dark_modules,
            "QR generated"
        );
        record!(tracer, "QR complete");
        Ok(qr)
    }

    // ECC: Error Correction Codeword generator
    pub(crate) fn compute_ecc(
        data: &[u8],
        cap: &Capacity,
        tracer: &mut dyn Tracer,
    ) -> QRResult<Vec<Block>> {
        let ecc_len = cap.ecc_per_block();
        let first_power = cap.block1.0 + ecc_len - 1;
        let mut rs = ReedSolomon::new();
        record!(tracer, "Generator polynomial: {}", rs.generator(ecc_len));

        let blocks = Self::blockify(data, cap)
            .into_iter()
            .map(|b| Block::new(b, first_power, ecc_len, &mut rs))
            .collect::<QRResult<Vec<_>>>()?;

        for (i, b) in blocks.iter().enumerate() {
            trace!(block = i, data = b.data_len(), ecc = b.ec_len(), "Block encoded");
            record!(tracer, "Block {}: {}", i + 1, b.message());
            record!(tracer, "Block {} ecc: {}", i + 1, bytes_to_string(b.ecc()));
        }
        debug!(blocks = blocks.len(), ecc_per_block = ecc_len, "Ecc computed");
        Ok(blocks)
    }

    pub(crate) fn blockify<'b>(data: &'b [u8], cap: &Capacity) -> Vec<&'b [u8]> {
        let (block1_size, block1_count) = cap.block1;
        let (block2_size, block2_count) = cap.block2;

        let total_blocks = block1_count + block2_count;
        let total_block1_size = block1_size * block1_count;
        let total_size = total_block1_size + block2_size * block2_count;

        debug_assert!(
            total_size == data.len(),
            "Data len doesn't match total size of blocks: Data len {}, Total block size {}",
            data.len(),
            total_size
        );

        let mut data_blocks = Vec::with_capacity(total_blocks);
        data_blocks.extend(data[..total_block1_size].chunks(block1_size));
        if block2_size > 0 {
            data_blocks.extend(data[total_block1_size..].chunks(block2_size));
        }
        data_blocks
    }

    fn interleave_blocks(blocks: &[Block], cap: &Capacity, tracer: &mut dyn Tracer) -> BitStream {
        let data_blocks = blocks.iter().map(Block::data).collect::<Vec<_>>();
        let ecc_blocks = blocks.iter().map(Block::ecc).collect::<Vec<_>>();
        let data = Self::interleave(&data_blocks);
        let ecc = Self::interleave(&ecc_blocks);
        record!(tracer, "Interleaved data: {}", bytes_to_string(&data));
        record!(tracer, "Interleaved ecc: {}", bytes_to_string(&ecc));

        let mut payload = BitStream::with_capacity(cap.total_codewords() << 3);
        payload.extend(&data);
        payload.extend(&ecc);
        record!(tracer, "Final bit sequence: {}", bits_to_string(payload.bits_from(0)));
        payload
    }

    pub fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
        let max_block_size = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
        let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
        let mut res = Vec::with_capacity(total_size);
        for i in 0..max_block_size {
            for b in blocks {
                if i < b.len() {
                    res.push(b[i]);
                }
            }
        }
        res
    }
}
