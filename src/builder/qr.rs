use std::ops::{Deref, Not};

use image::{Rgb, RgbImage};

use crate::common::{
    bit_utils::BitStream,
    iter::EncRegionIter,
    mask::{mirrored, MaskPattern},
    metadata::{ECLevel, Version},
    trace::Tracer,
};
use crate::record;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<bool> for Color {
    fn from(bit: bool) -> Self {
        if bit {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// State of a single module. `Func` modules are static and never masked,
/// `Format` and `Version` are reserved placeholders until their info is
/// written, `Masked` marks a data module flipped while debugging the mask.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Format,
    Version,
    Data(Color),
    Masked(Color),
}

impl Module {
    pub fn is_static(self) -> bool {
        matches!(self, Self::Func(_) | Self::Format | Self::Version)
    }
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty | Module::Format | Module::Version => &Color::Light,
            Module::Func(c) | Module::Data(c) | Module::Masked(c) => c,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QR {
    grid: Vec<Module>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mask: Option<MaskPattern>,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub fn new(ver: Version, ecl: ECLevel) -> Self {
        let w = ver.width();
        Self { grid: vec![Module::Empty; w * w], w, ver, ecl, mask: None }
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    pub fn count_modules(&self, pred: impl Fn(Module) -> bool) -> usize {
        self.grid.iter().filter(|&&m| pred(m)).count()
    }

    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1) + 1) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'd',
                    Module::Func(Color::Light) => 'l',
                    Module::Data(Color::Dark) => 'D',
                    Module::Data(Color::Light) => 'L',
                    Module::Format => 'm',
                    Module::Version => 'v',
                    Module::Masked(_) => 'x',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be greater than or equal to w");
        debug_assert!(-w <= c && c < w, "column should be greater than or equal to w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn get_mut(&mut self, r: i16, c: i16) -> &mut Module {
        let index = self.coord_to_index(r, c);
        &mut self.grid[index]
    }

    pub fn set(&mut self, r: i16, c: i16, module: Module) {
        *self.get_mut(r, c) = module;
    }

    fn set_if_empty(&mut self, r: i16, c: i16, module: Module) {
        let m = self.get_mut(r, c);
        if *m == Module::Empty {
            *m = module;
        }
    }
}

#[cfg(test)]
mod qr_util_tests {
    use super::{Color, Module, QR};
    use crate::common::metadata::{ECLevel, Version};

    fn qr_v1() -> QR {
        QR::new(Version::new(1).unwrap(), ECLevel::L)
    }

    #[test]
    fn test_index_wrap() {
        let mut qr = qr_v1();
        let w = qr.w as i16;
        qr.set(-1, -1, Module::Func(Color::Dark));
        assert_eq!(qr.get(w - 1, w - 1), Module::Func(Color::Dark));
        qr.set(0, 0, Module::Func(Color::Dark));
        assert_eq!(qr.get(-w, -w), Module::Func(Color::Dark));
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_bound() {
        let qr = qr_v1();
        let w = qr.w as i16;
        qr.get(w, 0);
    }

    #[test]
    #[should_panic]
    fn test_col_index_overwrap() {
        let qr = qr_v1();
        let w = qr.w as i16;
        qr.get(0, -(w + 1));
    }

    #[test]
    fn test_module_color() {
        assert_eq!(*Module::Empty, Color::Light);
        assert_eq!(*Module::Format, Color::Light);
        assert_eq!(*Module::Masked(Color::Dark), Color::Dark);
        assert_eq!(!Color::Dark, Color::Light);
        assert_eq!(Color::from(true), Color::Dark);
        assert!(Module::Version.is_static());
        assert!(!Module::Data(Color::Dark).is_static());
    }
}

// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self, tracer: &mut dyn Tracer) {
        let w = self.w as i16;
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
        record!(tracer, "Position squares at (0, 0), (0, {}), ({}, 0)", w - 7, w - 7);
    }

    // Separator ring lands on the inner sides only and never overwrites
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_left, dr_right) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_top, dc_bottom) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_left..=dr_right {
            for j in dc_top..=dc_bottom {
                match (i, j) {
                    (4 | -4, _) | (_, 4 | -4) => {
                        self.set_if_empty(r + i, c + j, Module::Func(Color::Light))
                    }
                    (3 | -3, _) | (_, 3 | -3) => self.set(r + i, c + j, Module::Func(Color::Dark)),
                    (2 | -2, _) | (_, 2 | -2) => {
                        self.set(r + i, c + j, Module::Func(Color::Light))
                    }
                    _ => self.set(r + i, c + j, Module::Func(Color::Dark)),
                }
            }
        }
    }
}


// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    // Runs from index 8 until it meets the opposite finder separator
    fn draw_timing_pattern(&mut self, tracer: &mut dyn Tracer) {
        let mut i = 8;
        while i < self.w as i16 && self.get(i, 6) == Module::Empty {
            let m = Module::Func(if i & 1 == 0 { Color::Dark } else { Color::Light });
            self.set(i, 6, m);
            self.set(6, i, m);
            i += 1;
        }
        record!(tracer, "Timing patterns from 8 to {}", i - 1);
    }

    fn draw_dark_module(&mut self, tracer: &mut dyn Tracer) {
        self.set(-8, 8, Module::Func(Color::Dark));
        record!(tracer, "Dark module at ({}, 8)", self.w - 8);
    }
}

#[cfg(test)]
mod timing_pattern_tests {
    use super::{Color, QR};
    use crate::common::{
        metadata::{ECLevel, Version},
        trace::NoTrace,
    };

    #[test]
    fn test_timing_pattern_1() {
        let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::L);
        qr.draw_finder_patterns(&mut NoTrace);
        qr.draw_timing_pattern(&mut NoTrace);
        qr.draw_dark_module(&mut NoTrace);
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             dddddddl.....lddddddd\n\
             dllllldl.....ldllllld\n\
             dldddldl.....ldldddld\n\
             dldddldl.....ldldddld\n\
             dldddldl.....ldldddld\n\
             dllllldl.....ldllllld\n\
             dddddddldldldlddddddd\n\
             llllllll.....llllllll\n\
             ......d..............\n\
             ......l..............\n\
             ......d..............\n\
             ......l..............\n\
             ......d..............\n\
             lllllllld............\n\
             dddddddl.............\n\
             dllllldl.............\n\
             dldddldl.............\n\
             dldddldl.............\n\
             dldddldl.............\n\
             dllllldl.............\n\
             dddddddl.............\n"
        );
    }

    #[test]
    fn test_timing_pattern_alternates() {
        let mut qr = QR::new(Version::new(10).unwrap(), ECLevel::L);
        qr.draw_finder_patterns(&mut NoTrace);
        qr.draw_timing_pattern(&mut NoTrace);
        let w = qr.width() as i16;
        for i in 8..w - 8 {
            assert_eq!(qr.get(6, i), qr.get(i, 6));
            let expected = if i % 2 == 0 { Color::Dark } else { Color::Light };
            assert_eq!(*qr.get(6, i), expected);
        }
    }
}

// Alignment pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_alignment_patterns(&mut self, tracer: &mut dyn Tracer) {
        let positions = self.ver.alignment_pattern();
        if positions.is_empty() {
            record!(tracer, "Version {} has no alignment patterns", self.ver);
            return;
        }

        for &r in positions {
            for &c in positions {
                if self.draw_alignment_pattern_at(r, c) {
                    record!(tracer, "Alignment pattern at ({r}, {c})");
                }
            }
        }
    }

    // Skipped when the 5x5 area overlaps more than the timing line
    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) -> bool {
        let occupied = (-2..=2)
            .flat_map(|i| (-2..=2).map(move |j| (r + i, c + j)))
            .filter(|&(i, j)| self.get(i, j) != Module::Empty)
            .count();
        if occupied > MAX_ALIGNMENT_OVERLAP {
            return false;
        }

        for i in -2..=2 {
            for j in -2..=2 {
                let m = match (i, j) {
                    (2 | -2, _) | (_, 2 | -2) | (0, 0) => Module::Func(Color::Dark),
                    _ => Module::Func(Color::Light),
                };
                self.set(r + i, c + j, m);
            }
        }
        true
    }
}

#[cfg(test)]
mod alignment_pattern_tests {
    use super::{Color, Module, QR};
    use crate::common::{
        metadata::{ECLevel, Version},
        trace::{Breakpoint, NoTrace, Trace},
    };

    #[test]
    fn test_alignment_pattern_1() {
        let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::L);
        let mut tracer = Trace::new(Breakpoint::None);
        qr.draw_alignment_patterns(&mut tracer);
        assert_eq!(qr.count_modules(|m| m != Module::Empty), 0);
        assert_eq!(tracer.as_str(), "Version 1 has no alignment patterns\n");
    }

    #[test]
    fn test_alignment_pattern_2() {
        let mut qr = QR::new(Version::new(2).unwrap(), ECLevel::L);
        qr.draw_all_function_patterns(&mut NoTrace);
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             dddddddlm........lddddddd\n\
             dllllldlm........ldllllld\n\
             dldddldlm........ldldddld\n\
             dldddldlm........ldldddld\n\
             dldddldlm........ldldddld\n\
             dllllldlm........ldllllld\n\
             dddddddldldldldldlddddddd\n\
             llllllllm........llllllll\n\
             mmmmmmdmm........mmmmmmmm\n\
             ......l..................\n\
             ......d..................\n\
             ......l..................\n\
             ......d..................\n\
             ......l..................\n\
             ......d..................\n\
             ......l..................\n\
             ......d.........ddddd....\n\
             lllllllld.......dllld....\n\
             dddddddlm.......dldld....\n\
             dllllldlm.......dllld....\n\
             dldddldlm.......ddddd....\n\
             dldddldlm................\n\
             dldddldlm................\n\
             dllllldlm................\n\
             dddddddlm................\n"
        );
    }

    #[test]
    fn test_alignment_pattern_7() {
        let mut qr = QR::new(Version::new(7).unwrap(), ECLevel::L);
        let mut tracer = Trace::new(Breakpoint::None);
        qr.draw_all_function_patterns(&mut tracer);
        let placed = tracer.as_str().lines().filter(|l| l.starts_with("Alignment")).count();
        assert_eq!(placed, 6);
        for (r, c) in [(6, 22), (22, 6), (22, 22), (22, 38), (38, 22), (38, 38)] {
            assert_eq!(qr.get(r, c), Module::Func(Color::Dark), "centre ({r}, {c})");
            assert_eq!(qr.get(r + 1, c + 1), Module::Func(Color::Light), "ring ({r}, {c})");
        }
        // Overlaps the finder squares
        assert!(!tracer.as_str().contains("Alignment pattern at (6, 38)"));
        assert!(!tracer.as_str().contains("Alignment pattern at (6, 6)"));
    }
}

// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub fn draw_all_function_patterns(&mut self, tracer: &mut dyn Tracer) {
        record!(tracer, "Matrix {0}x{0} created for version {1}", self.w, self.ver);
        self.draw_finder_patterns(tracer);
        self.draw_timing_pattern(tracer);
        self.draw_dark_module(tracer);
        self.reserve_format_area(tracer);
        self.reserve_version_area(tracer);
        self.draw_alignment_patterns(tracer);
        record!(
            tracer,
            "{} modules left for data",
            self.count_modules(|m| m == Module::Empty)
        );
    }
}


// Format & version info
//------------------------------------------------------------------------------

impl QR {
    fn reserve_format_area(&mut self, tracer: &mut dyn Tracer) {
        for &(r, c) in FORMAT_INFO_COORDS_MAIN.iter().chain(FORMAT_INFO_COORDS_SIDE.iter()) {
            self.set_if_empty(r, c, Module::Format);
        }
        record!(tracer, "Format information area reserved");
    }

    fn reserve_version_area(&mut self, tracer: &mut dyn Tracer) {
        if !self.ver.has_version_info() {
            record!(tracer, "Version {} carries no version information", self.ver);
            return;
        }
        for (r, c) in self.version_info_coords() {
            self.set(r, c, Module::Version);
            self.set(c, r, Module::Version);
        }
        record!(tracer, "Version information area reserved");
    }

    /// Writes format information, least significant bit first, into both
    /// reserved copies.
    pub fn draw_format_info(&mut self, bits: &[bool]) {
        debug_assert_eq!(bits.len(), FORMAT_INFO_COORDS_MAIN.len(), "Format info length");
        self.draw_bits(bits, &FORMAT_INFO_COORDS_MAIN, Module::Format);
        self.draw_bits(bits, &FORMAT_INFO_COORDS_SIDE, Module::Format);
    }

    /// Writes version information, least significant bit first, into both
    /// reserved blocks. Matrices without a version area are left untouched.
    pub fn draw_version_info(&mut self, bits: &[bool]) {
        let coords = self.version_info_coords().collect::<Vec<_>>();
        debug_assert_eq!(bits.len(), coords.len(), "Version info length");
        let transposed = coords.iter().map(|&(r, c)| (c, r)).collect::<Vec<_>>();
        self.draw_bits(bits, &coords, Module::Version);
        self.draw_bits(bits, &transposed, Module::Version);
    }

    // Bit i of the upper right block
    fn version_info_coords(&self) -> impl Iterator<Item = (i16, i16)> {
        let w = self.w as i16;
        (0..VERSION_INFO_BIT_LEN as i16).map(move |i| (i / 3, w - 11 + i % 3))
    }

    fn draw_bits(&mut self, bits: &[bool], coords: &[(i16, i16)], placeholder: Module) {
        for (&bit, &(r, c)) in bits.iter().zip(coords) {
            let m = self.get_mut(r, c);
            if *m == placeholder {
                *m = Module::Func(Color::from(bit));
            }
        }
    }
}

#[cfg(test)]
mod qr_information_tests {
    use super::{Module, QR};
    use crate::common::{
        info::{format_bits, version_bits},
        mask::MaskPattern,
        metadata::{ECLevel, Version},
        trace::NoTrace,
    };

    #[test]
    fn test_version_info_6() {
        let mut qr = QR::new(Version::new(6).unwrap(), ECLevel::L);
        qr.draw_all_function_patterns(&mut NoTrace);
        assert_eq!(qr.count_modules(|m| m == Module::Version), 0);
        assert!(version_bits(qr.version(), &mut NoTrace).is_none());
    }

    #[test]
    fn test_version_info_7() {
        let ver = Version::new(7).unwrap();
        let mut qr = QR::new(ver, ECLevel::L);
        qr.draw_all_function_patterns(&mut NoTrace);
        assert_eq!(qr.count_modules(|m| m == Module::Version), 36);

        let bits = version_bits(ver, &mut NoTrace).unwrap();
        qr.draw_version_info(&bits);
        assert_eq!(qr.count_modules(|m| m == Module::Version), 0);

        let block = |qr: &QR, transposed: bool| {
            let mut s = String::new();
            for i in 0..6 {
                for j in 34..37 {
                    let m = if transposed { qr.get(j, i) } else { qr.get(i, j) };
                    s.push(if *m == super::Color::Dark { 'd' } else { 'l' });
                }
                s.push('\n');
            }
            s
        };
        let expected = "lld\nldl\nldl\nldd\nddd\nlll\n";
        assert_eq!(block(&qr, false), expected);
        assert_eq!(block(&qr, true), expected);
    }

    #[test]
    fn test_format_info_qr() {
        let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::Q);
        qr.draw_all_function_patterns(&mut NoTrace);
        let bits = format_bits(ECLevel::Q, MaskPattern::new(2).unwrap(), &mut NoTrace);
        qr.draw_format_info(&bits);
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             dddddddld....lddddddd\n\
             dllllldll....ldllllld\n\
             dldddldll....ldldddld\n\
             dldddldll....ldldddld\n\
             dldddldld....ldldddld\n\
             dllllldld....ldllllld\n\
             dddddddldldldlddddddd\n\
             lllllllll....llllllll\n\
             ldddddddl....llddllld\n\
             ......l..............\n\
             ......d..............\n\
             ......l..............\n\
             ......d..............\n\
             lllllllld............\n\
             dddddddld............\n\
             dllllldld............\n\
             dldddldld............\n\
             dldddldld............\n\
             dldddldld............\n\
             dllllldld............\n\
             dddddddll............\n"
        );
    }
}

// Encoding region
//------------------------------------------------------------------------------

impl QR {
    /// Places the payload into empty modules in zig-zag order and fills the
    /// modules left over with light data modules. Returns the number of
    /// placed bits.
    pub fn draw_encoding_region(&mut self, payload: BitStream, tracer: &mut dyn Tracer) -> usize {
        let placed = self.draw_payload(payload);
        let filled = self.fill_remainder_bits();
        record!(
            tracer,
            "Placed {placed} bits ({} codewords), {filled} remainder modules",
            placed >> 3
        );
        placed
    }

    fn draw_payload(&mut self, payload: BitStream) -> usize {
        let len = payload.len();
        let mut coords = EncRegionIter::new(self.w);
        let mut placed = 0;
        for bit in payload {
            let module = Module::Data(Color::from(bit));
            if let Some((r, c)) = coords.by_ref().find(|&(r, c)| self.get(r, c) == Module::Empty) {
                self.set(r, c, module);
                placed += 1;
            }
        }
        debug_assert_eq!(placed, len, "Payload exceeds the encoding region");
        placed
    }

    fn fill_remainder_bits(&mut self) -> usize {
        let mut filled = 0;
        for m in self.grid.iter_mut().filter(|m| **m == Module::Empty) {
            *m = Module::Data(Color::Light);
            filled += 1;
        }
        filled
    }

    /// Flips every data module the pattern selects. With `highlight` the
    /// flipped modules are marked as `Masked`. Returns the flipped count.
    pub fn apply_mask(
        &mut self,
        pattern: MaskPattern,
        highlight: bool,
        tracer: &mut dyn Tracer,
    ) -> usize {
        self.mask = Some(pattern);
        let mask_fn = pattern.mask_function();
        let mut flipped = 0;
        for i in 0..self.w {
            for j in 0..self.w {
                let (r, c) = mirrored(self.w, i, j);
                if !mask_fn(r, c) {
                    continue;
                }
                if let Module::Data(clr) = self.get(r, c) {
                    let m = if highlight { Module::Masked(!clr) } else { Module::Data(!clr) };
                    self.set(r, c, m);
                    flipped += 1;
                }
            }
        }
        record!(tracer, "Mask {pattern} ({}) flipped {flipped} modules", pattern.formula());
        flipped
    }
}


// Render
//------------------------------------------------------------------------------

/// Pixels per module for a resolution step, 1 outside the supported steps.
pub fn module_size(resolution_step: u8) -> u32 {
    match resolution_step {
        1..=5 => 1 << resolution_step,
        _ => 1,
    }
}

impl QR {
    pub fn render(&self, module_sz: u32) -> RgbImage {
        let qr_sz = self.w as u32 * module_sz;
        let mut canvas = RgbImage::new(qr_sz, qr_sz);
        for (x, y, pixel) in canvas.enumerate_pixels_mut() {
            let r = (y / module_sz) as i16;
            let c = (x / module_sz) as i16;
            *pixel = match self.get(r, c) {
                Module::Empty => EMPTY_RGB,
                Module::Format => FORMAT_RGB,
                Module::Version => VERSION_RGB,
                Module::Masked(_) => MASKED_RGB,
                Module::Func(clr) | Module::Data(clr) => clr.select(LIGHT_RGB, DARK_RGB),
            };
        }
        canvas
    }

    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = QUIET_ZONE * module_sz;
        let qr_sz = self.w * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::new();
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push('█');
                    continue;
                }
                let r = ((i - qz_sz) / module_sz) as i16;
                let c = ((j - qz_sz) / module_sz) as i16;
                canvas.push(self.get(r, c).select('█', ' '));
            }
            canvas.push('\n');
        }

        canvas
    }
}


// Global constants
//------------------------------------------------------------------------------

const MAX_ALIGNMENT_OVERLAP: usize = 5;

const VERSION_INFO_BIT_LEN: usize = 18;

const QUIET_ZONE: usize = 4;

// Bit 0 first: down column 8, skipping the timing row, then the lower stretch
static FORMAT_INFO_COORDS_MAIN: [(i16, i16); 15] = [
    (0, 8),
    (1, 8),
    (2, 8),
    (3, 8),
    (4, 8),
    (5, 8),
    (7, 8),
    (8, 8),
    (-7, 8),
    (-6, 8),
    (-5, 8),
    (-4, 8),
    (-3, 8),
    (-2, 8),
    (-1, 8),
];

// Bit 0 first: row 8 from the right edge leftwards, skipping the timing column
static FORMAT_INFO_COORDS_SIDE: [(i16, i16); 15] = [
    (8, -1),
    (8, -2),
    (8, -3),
    (8, -4),
    (8, -5),
    (8, -6),
    (8, -7),
    (8, -8),
    (8, 7),
    (8, 5),
    (8, 4),
    (8, 3),
    (8, 2),
    (8, 1),
    (8, 0),
];

const DARK_RGB: Rgb<u8> = Rgb([0, 0, 0]);
const LIGHT_RGB: Rgb<u8> = Rgb([255, 255, 255]);
const FORMAT_RGB: Rgb<u8> = Rgb([0, 0, 255]);
const VERSION_RGB: Rgb<u8> = Rgb([0, 128, 0]);
const MASKED_RGB: Rgb<u8> = Rgb([255, 0, 0]);
const EMPTY_RGB: Rgb<u8> = Rgb([211, 211, 211]);
