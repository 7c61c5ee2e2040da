use std::{fmt, str::FromStr};

use super::error::{QRError, QRResult};

// Breakpoint
//------------------------------------------------------------------------------

/// Pipeline stages, in execution order. A debug session halts right after
/// the selected stage completes. `None` records the trace without halting.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    MatrixCreated = 0,
    ModeBits = 1,
    LengthBits = 2,
    DataEncoded = 3,
    BinaryFinished = 4,
    ByteAligned = 5,
    PaddingFilled = 6,
    EccComputed = 7,
    MatrixFilled = 8,
    Masked = 9,
    None = 10,
}

impl Breakpoint {
    pub const ALL: [Self; 11] = [
        Self::MatrixCreated,
        Self::ModeBits,
        Self::LengthBits,
        Self::DataEncoded,
        Self::BinaryFinished,
        Self::ByteAligned,
        Self::PaddingFilled,
        Self::EccComputed,
        Self::MatrixFilled,
        Self::Masked,
        Self::None,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::MatrixCreated => "matrix-created",
            Self::ModeBits => "mode-bits",
            Self::LengthBits => "length-bits",
            Self::DataEncoded => "data-encoded",
            Self::BinaryFinished => "binary-finished",
            Self::ByteAligned => "byte-aligned",
            Self::PaddingFilled => "padding-filled",
            Self::EccComputed => "ecc-computed",
            Self::MatrixFilled => "matrix-filled",
            Self::Masked => "masked",
            Self::None => "none",
        }
    }
}

impl TryFrom<u8> for Breakpoint {
    type Error = QRError;

    fn try_from(index: u8) -> QRResult<Self> {
        Self::ALL.get(index as usize).copied().ok_or(QRError::InvalidBreakpoint(index))
    }
}

impl FromStr for Breakpoint {
    type Err = QRError;

    fn from_str(s: &str) -> QRResult<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            return Self::try_from(index);
        }
        let name = s.to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|bp| bp.name() == name)
            .ok_or(QRError::InvalidBreakpoint(u8::MAX))
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Tracer
//------------------------------------------------------------------------------

/// Sink for the human readable step log of an encoding session.
pub trait Tracer {
    fn enabled(&self) -> bool;

    fn record(&mut self, args: fmt::Arguments<'_>);

    /// Returns true if the session stops after `step`.
    fn halt_at(&mut self, step: Breakpoint) -> bool;
}

/// Appends a formatted line to a tracer, skipping the formatting when the
/// tracer is disabled.
#[macro_export]
macro_rules! record {
    ($tracer:expr, $($arg:tt)*) => {
        if $tracer.enabled() {
            $tracer.record(format_args!($($arg)*));
        }
    };
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl Tracer for NoTrace {
    fn enabled(&self) -> bool {
        false
    }

    fn record(&mut self, _: fmt::Arguments<'_>) {}

    fn halt_at(&mut self, _: Breakpoint) -> bool {
        false
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Trace {
    log: String,
    breakpoint: Breakpoint,
}

impl Trace {
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self { log: String::new(), breakpoint }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn as_str(&self) -> &str {
        &self.log
    }
}

impl Tracer for Trace {
    fn enabled(&self) -> bool {
        true
    }

    fn record(&mut self, args: fmt::Arguments<'_>) {
        use fmt::Write;
        // Writing into a String cannot fail
        let _ = self.log.write_fmt(args);
        self.log.push('\n');
    }

    fn halt_at(&mut self, step: Breakpoint) -> bool {
        if step != self.breakpoint || step == Breakpoint::None {
            return false;
        }
        record!(self, "Breakpoint reached: {step}");
        true
    }
}

#[cfg(test)]
mod trace_tests {
    use test_case::test_case;

    use super::{Breakpoint, NoTrace, Trace, Tracer};
    use crate::common::error::QRError;

    #[test]
    fn test_breakpoint_order() {
        for (i, bp) in Breakpoint::ALL.iter().enumerate() {
            assert_eq!(*bp as usize, i);
            assert_eq!(Breakpoint::try_from(i as u8), Ok(*bp));
        }
        assert!(Breakpoint::MatrixCreated < Breakpoint::Masked);
        assert_eq!(Breakpoint::try_from(11), Err(QRError::InvalidBreakpoint(11)));
    }

    #[test_case("masked", Breakpoint::Masked)]
    #[test_case("ECC_COMPUTED", Breakpoint::EccComputed)]
    #[test_case(" 2 ", Breakpoint::LengthBits)]
    #[test_case("none", Breakpoint::None)]
    fn test_parse_breakpoint(s: &str, bp: Breakpoint) {
        assert_eq!(s.parse::<Breakpoint>(), Ok(bp));
    }

    #[test]
    fn test_parse_invalid_breakpoint() {
        assert!("halfway".parse::<Breakpoint>().is_err());
        assert_eq!("12".parse::<Breakpoint>(), Err(QRError::InvalidBreakpoint(12)));
    }

    #[test]
    fn test_no_trace() {
        let mut tracer = NoTrace;
        record!(tracer, "ignored {}", 1);
        assert!(!tracer.enabled());
        assert!(!tracer.halt_at(Breakpoint::MatrixCreated));
    }

    #[test]
    fn test_trace_records_lines() {
        let mut tracer = Trace::new(Breakpoint::None);
        record!(tracer, "Mode bits: {}", "0010");
        record!(tracer, "Done");
        assert_eq!(tracer.as_str(), "Mode bits: 0010\nDone\n");
    }

    #[test]
    fn test_trace_halts_only_at_breakpoint() {
        let mut tracer = Trace::new(Breakpoint::ModeBits);
        assert!(!tracer.halt_at(Breakpoint::MatrixCreated));
        assert!(tracer.halt_at(Breakpoint::ModeBits));
        assert_eq!(tracer.as_str(), "Breakpoint reached: mode-bits\n");

        let mut tracer = Trace::new(Breakpoint::None);
        assert!(!tracer.halt_at(Breakpoint::None));
    }

    #[test]
    fn test_record_through_trait_object() {
        let mut trace = Trace::new(Breakpoint::None);
        let tracer: &mut dyn Tracer = &mut trace;
        record!(tracer, "{} modules", 441);
        assert_eq!(trace.as_str(), "441 modules\n");
    }
}
