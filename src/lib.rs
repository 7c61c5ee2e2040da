//! # qrcraft
//!
//! A Rust library for encoding alphanumeric text into QR Code symbols with Reed-Solomon error
//! correction. Every stage of the encoding pipeline can be inspected through a step by step
//! trace, and a session can be halted right after any stage to look at the half built matrix.
//!
//! ## Features
//!
//! - **QR Code Generation**: Alphanumeric mode, versions 1 to 40, error correction levels L, M,
//!   Q and H, any of the 8 mask patterns
//! - **Reed-Solomon Error Correction**: GF(256) arithmetic, generator polynomials and block
//!   interleaving
//! - **BCH Codes**: Format and version information
//! - **Debug Trace**: Human readable log of every stage with breakpoints
//!
//! ## Quick Start
//!
//! ### Simple QR Code Generation
//!
//! ```rust
//! use qrcraft::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Alphanumeric mode, version 1, error correction level Q, mask 010
//! let mut builder = QRBuilder::new("HELLO WORLD");
//! let img = builder.render(3)?; // 8 pixels per module
//! assert_eq!(img.dimensions(), (168, 168));
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrcraft::{ECLevel, MaskPattern, Mode, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = QRBuilder::new("HTTPS://EXAMPLE.COM");
//! builder.advanced_mode(Mode::Alphanumeric, Version::new(3)?, ECLevel::H, MaskPattern::new(5)?);
//!
//! let qr = builder.build()?;
//! println!("{}", qr.to_str(1));
//! # Ok(())
//! # }
//! ```
//!
//! ### Inspecting the pipeline
//!
//! ```rust
//! use qrcraft::{Breakpoint, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = QRBuilder::new("HELLO WORLD");
//! builder.debug_mode(Breakpoint::EccComputed);
//! builder.build()?;
//!
//! let trace = builder.debug_trace();
//! assert!(trace.contains("Character count 11: 000001011"));
//! assert!(trace.ends_with("Breakpoint reached: ecc-computed\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ## QR Code Components
//!
//! ### Versions
//! - Versions 1-40, with sizes from 21x21 to 177x177 modules
//!
//! ### Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction
//!
//! ### Modes
//! - **Alphanumeric**: digits, upper case letters and ` $%*+-./:`
//! - Numeric, Byte and Kanji selectors exist but are rejected with
//!   [`QRError::UnsupportedMode`]

pub mod builder;
pub mod common;

pub use builder::{module_size, Color, Module, QRBuilder, Settings, QR};
pub use common::codec::Mode;
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{Capacity, ECLevel, Version};
pub use common::trace::{Breakpoint, NoTrace, Trace, Tracer};
