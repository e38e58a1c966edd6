use crate::traits::ByteUnit;
use crate::units::FormatError;
use crate::units::constants::*;
use crate::units::format_units::{BIT_SCALE, DEFAULT_FORMAT, format_units};
use crate::utils::saturating_multiply;
use byte_units_number_format::{DecimalFormat, NumberFormatter};
use std::fmt;

/// Bit size at a given decimal (power of 1000) granularity.
///
/// Besides converting between bit granularities, every variant converts to
/// bytes (8 bits per byte) through [`BitUnit::to_bytes`].
///
/// # Conversion Rules:
/// - **Finer → coarser** truncates toward zero (`999` bits is `0` kilobits,
///   `7` bits is `0` bytes).
/// - **Coarser → finer** saturates at `i64::MAX` / `i64::MIN`.
///
/// # Examples
/// ```
/// use byte_units::BitUnit;
///
/// assert_eq!(BitUnit::Kilobits.to_bytes(3), 375);
/// assert_eq!(BitUnit::Petabits.to_bytes(1), 125_000_000_000_000);
/// assert_eq!(BitUnit::format(16_000).unwrap(), "16 Kb");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitUnit {
    /// One bit.
    Bits,

    /// 1000 bits.
    Kilobits,

    /// 1000 kilobits.
    Megabits,

    /// 1000 megabits.
    Gigabits,

    /// 1000 gigabits.
    Terabits,

    /// 1000 terabits.
    Petabits,
}

impl BitUnit {
    /// Every variant, from finest to coarsest.
    pub const ALL: [Self; 6] = [
        Self::Bits,
        Self::Kilobits,
        Self::Megabits,
        Self::Gigabits,
        Self::Terabits,
        Self::Petabits,
    ];

    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Display symbol, e.g. `"Mb"`.
    pub const fn symbol(self) -> &'static str {
        BIT_SYMBOLS[self as usize]
    }

    /// Converts `source_count` units of `source_unit` into this unit.
    ///
    /// # Parameters:
    /// - `source_count`: The size expressed in `source_unit`.
    /// - `source_unit`: The granularity of `source_count`.
    ///
    /// # Returns:
    /// - The size in this unit, truncated toward zero when narrowing.
    /// - `i64::MAX` or `i64::MIN` if widening would overflow.
    pub const fn convert(self, source_count: i64, source_unit: BitUnit) -> i64 {
        match self {
            Self::Bits => source_unit.to_bits(source_count),
            Self::Kilobits => source_unit.to_kilobits(source_count),
            Self::Megabits => source_unit.to_megabits(source_count),
            Self::Gigabits => source_unit.to_gigabits(source_count),
            Self::Terabits => source_unit.to_terabits(source_count),
            Self::Petabits => source_unit.to_petabits(source_count),
        }
    }

    /// Converts `count` units of this granularity into bytes.
    ///
    /// Plain bits are divided by 8 (truncating); coarser units multiply by
    /// their combined bytes-per-unit constant (a kilobit is 125 bytes) and
    /// saturate on overflow.
    pub const fn to_bytes(self, count: i64) -> i64 {
        match self {
            Self::Bits => count / BITS_PER_BYTE,
            Self::Kilobits => saturating_multiply(count, KBIT_BYTES, MAX / KBIT_BYTES),
            Self::Megabits => saturating_multiply(count, MBIT_BYTES, MAX / MBIT_BYTES),
            Self::Gigabits => saturating_multiply(count, GBIT_BYTES, MAX / GBIT_BYTES),
            Self::Terabits => saturating_multiply(count, TBIT_BYTES, MAX / TBIT_BYTES),
            Self::Petabits => saturating_multiply(count, PBIT_BYTES, MAX / PBIT_BYTES),
        }
    }

    /// Equivalent to `BitUnit::Bits.convert(count, self)`.
    pub const fn to_bits(self, count: i64) -> i64 {
        match self {
            Self::Bits => count,
            Self::Kilobits => saturating_multiply(count, KBIT / BIT, MAX / (KBIT / BIT)),
            Self::Megabits => saturating_multiply(count, MBIT / BIT, MAX / (MBIT / BIT)),
            Self::Gigabits => saturating_multiply(count, GBIT / BIT, MAX / (GBIT / BIT)),
            Self::Terabits => saturating_multiply(count, TBIT / BIT, MAX / (TBIT / BIT)),
            Self::Petabits => saturating_multiply(count, PBIT / BIT, MAX / (PBIT / BIT)),
        }
    }

    /// Equivalent to `BitUnit::Kilobits.convert(count, self)`.
    pub const fn to_kilobits(self, count: i64) -> i64 {
        match self {
            Self::Bits => count / (KBIT / BIT),
            Self::Kilobits => count,
            Self::Megabits => saturating_multiply(count, MBIT / KBIT, MAX / (MBIT / KBIT)),
            Self::Gigabits => saturating_multiply(count, GBIT / KBIT, MAX / (GBIT / KBIT)),
            Self::Terabits => saturating_multiply(count, TBIT / KBIT, MAX / (TBIT / KBIT)),
            Self::Petabits => saturating_multiply(count, PBIT / KBIT, MAX / (PBIT / KBIT)),
        }
    }

    /// Equivalent to `BitUnit::Megabits.convert(count, self)`.
    pub const fn to_megabits(self, count: i64) -> i64 {
        match self {
            Self::Bits => count / (MBIT / BIT),
            Self::Kilobits => count / (MBIT / KBIT),
            Self::Megabits => count,
            Self::Gigabits => saturating_multiply(count, GBIT / MBIT, MAX / (GBIT / MBIT)),
            Self::Terabits => saturating_multiply(count, TBIT / MBIT, MAX / (TBIT / MBIT)),
            Self::Petabits => saturating_multiply(count, PBIT / MBIT, MAX / (PBIT / MBIT)),
        }
    }

    /// Equivalent to `BitUnit::Gigabits.convert(count, self)`.
    pub const fn to_gigabits(self, count: i64) -> i64 {
        match self {
            Self::Bits => count / (GBIT / BIT),
            Self::Kilobits => count / (GBIT / KBIT),
            Self::Megabits => count / (GBIT / MBIT),
            Self::Gigabits => count,
            Self::Terabits => saturating_multiply(count, TBIT / GBIT, MAX / (TBIT / GBIT)),
            Self::Petabits => saturating_multiply(count, PBIT / GBIT, MAX / (PBIT / GBIT)),
        }
    }

    /// Equivalent to `BitUnit::Terabits.convert(count, self)`.
    pub const fn to_terabits(self, count: i64) -> i64 {
        match self {
            Self::Bits => count / (TBIT / BIT),
            Self::Kilobits => count / (TBIT / KBIT),
            Self::Megabits => count / (TBIT / MBIT),
            Self::Gigabits => count / (TBIT / GBIT),
            Self::Terabits => count,
            Self::Petabits => saturating_multiply(count, PBIT / TBIT, MAX / (PBIT / TBIT)),
        }
    }

    /// Equivalent to `BitUnit::Petabits.convert(count, self)`.
    pub const fn to_petabits(self, count: i64) -> i64 {
        match self {
            Self::Bits => count / (PBIT / BIT),
            Self::Kilobits => count / (PBIT / KBIT),
            Self::Megabits => count / (PBIT / MBIT),
            Self::Gigabits => count / (PBIT / GBIT),
            Self::Terabits => count / (PBIT / TBIT),
            Self::Petabits => count,
        }
    }

    /// Formats `bits` as a human-readable size such as `"1.2 Gb"`.
    ///
    /// # Returns:
    /// - `Ok(String)`: The formatted size.
    /// - `Err(FormatError::NegativeCount)`: If `bits < 0` (`"bits < 0: -1"`).
    pub fn format(bits: i64) -> Result<String, FormatError> {
        Self::format_with(bits, &*DEFAULT_FORMAT)
    }

    pub fn format_with<F>(bits: i64, formatter: &F) -> Result<String, FormatError>
    where
        F: NumberFormatter + ?Sized,
    {
        format_units(bits, &BIT_SCALE, formatter)
    }

    /// Formats `bits` using a [`DecimalFormat`] compiled from `pattern`.
    pub fn format_with_pattern(bits: i64, pattern: &str) -> Result<String, FormatError> {
        Self::format_with(bits, &DecimalFormat::new(pattern)?)
    }
}

impl ByteUnit for BitUnit {
    #[inline]
    fn to_bytes(&self, count: i64) -> i64 {
        BitUnit::to_bytes(*self, count)
    }
}

impl fmt::Display for BitUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
