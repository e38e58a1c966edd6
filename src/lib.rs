//! Conversions between binary byte, decimal byte and bit units, plus
//! human-readable size formatting.
//!
//! Narrowing conversions truncate toward zero, widening conversions saturate
//! at `i64::MAX` / `i64::MIN`, and no conversion ever panics.
//!
//! ```
//! use byte_units::{BinaryByteUnit, BitUnit, DecimalByteUnit};
//!
//! assert_eq!(BinaryByteUnit::Kibibytes.to_bytes(10), 10_240);
//! assert_eq!(DecimalByteUnit::Terabytes.to_megabytes(1), 1_000_000);
//! assert_eq!(BitUnit::Petabits.to_bytes(1), 125_000_000_000_000);
//!
//! assert_eq!(BinaryByteUnit::format(i64::MAX).unwrap(), "8,192 PiB");
//! ```
#[cfg(doctest)]
doc_comment::doctest!("../README.md");

pub mod traits;

pub mod units;
pub use units::*;

pub mod utils;

pub use byte_units_number_format::{DecimalFormat, DecimalSymbols, NumberFormatter, PatternError};
