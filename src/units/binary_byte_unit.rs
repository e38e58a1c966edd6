use crate::traits::ByteUnit;
use crate::units::FormatError;
use crate::units::constants::*;
use crate::units::format_units::{BINARY_SCALE, DEFAULT_FORMAT, format_units};
use crate::utils::saturating_multiply;
use byte_units_number_format::{DecimalFormat, NumberFormatter};
use std::fmt;

/// Byte size at a given binary (power of 1024) granularity.
///
/// A `BinaryByteUnit` does not hold a size itself; it only knows how to
/// convert counts expressed in one granularity into another.
///
/// # Conversion Rules:
/// - **Finer → coarser** truncates toward zero (`1023` bytes is `0` kibibytes).
/// - **Coarser → finer** saturates at `i64::MAX` / `i64::MIN` instead of
///   overflowing.
///
/// # Examples
/// ```
/// use byte_units::BinaryByteUnit;
///
/// assert_eq!(BinaryByteUnit::Bytes.convert(10, BinaryByteUnit::Kibibytes), 10_240);
/// assert_eq!(BinaryByteUnit::Kibibytes.to_bytes(10), 10_240);
/// assert_eq!(BinaryByteUnit::format(1_234_567).unwrap(), "1.2 MiB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryByteUnit {
    /// One byte.
    Bytes,

    /// 1024 bytes.
    Kibibytes,

    /// 1024 kibibytes.
    Mebibytes,

    /// 1024 mebibytes.
    Gibibytes,

    /// 1024 gibibytes.
    Tebibytes,

    /// 1024 tebibytes.
    Pebibytes,
}

impl BinaryByteUnit {
    /// Every variant, from finest to coarsest.
    pub const ALL: [Self; 6] = [
        Self::Bytes,
        Self::Kibibytes,
        Self::Mebibytes,
        Self::Gibibytes,
        Self::Tebibytes,
        Self::Pebibytes,
    ];

    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Display symbol, e.g. `"KiB"`.
    pub const fn symbol(self) -> &'static str {
        BINARY_SYMBOLS[self as usize]
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
    pub const fn convert(self, source_count: i64, source_unit: BinaryByteUnit) -> i64 {
        match self {
            Self::Bytes => source_unit.to_bytes(source_count),
            Self::Kibibytes => source_unit.to_kibibytes(source_count),
            Self::Mebibytes => source_unit.to_mebibytes(source_count),
            Self::Gibibytes => source_unit.to_gibibytes(source_count),
            Self::Tebibytes => source_unit.to_tebibytes(source_count),
            Self::Pebibytes => source_unit.to_pebibytes(source_count),
        }
    }

    /// Equivalent to `BinaryByteUnit::Bytes.convert(count, self)`.
    pub const fn to_bytes(self, count: i64) -> i64 {
        match self {
            Self::Bytes => count,
            Self::Kibibytes => saturating_multiply(count, KIB / B, MAX / (KIB / B)),
            Self::Mebibytes => saturating_multiply(count, MIB / B, MAX / (MIB / B)),
            Self::Gibibytes => saturating_multiply(count, GIB / B, MAX / (GIB / B)),
            Self::Tebibytes => saturating_multiply(count, TIB / B, MAX / (TIB / B)),
            Self::Pebibytes => saturating_multiply(count, PIB / B, MAX / (PIB / B)),
        }
    }

    /// Equivalent to `BinaryByteUnit::Kibibytes.convert(count, self)`.
    pub const fn to_kibibytes(self, count: i64) -> i64 {
        match self {
            Self::Bytes => count / (KIB / B),
            Self::Kibibytes => count,
            Self::Mebibytes => saturating_multiply(count, MIB / KIB, MAX / (MIB / KIB)),
            Self::Gibibytes => saturating_multiply(count, GIB / KIB, MAX / (GIB / KIB)),
            Self::Tebibytes => saturating_multiply(count, TIB / KIB, MAX / (TIB / KIB)),
            Self::Pebibytes => saturating_multiply(count, PIB / KIB, MAX / (PIB / KIB)),
        }
    }

    /// Equivalent to `BinaryByteUnit::Mebibytes.convert(count, self)`.
    pub const fn to_mebibytes(self, count: i64) -> i64 {
        match self {
            Self::Bytes => count / (MIB / B),
            Self::Kibibytes => count / (MIB / KIB),
            Self::Mebibytes => count,
            Self::Gibibytes => saturating_multiply(count, GIB / MIB, MAX / (GIB / MIB)),
            Self::Tebibytes => saturating_multiply(count, TIB / MIB, MAX / (TIB / MIB)),
            Self::Pebibytes => saturating_multiply(count, PIB / MIB, MAX / (PIB / MIB)),
        }
    }

    /// Equivalent to `BinaryByteUnit::Gibibytes.convert(count, self)`.
    pub const fn to_gibibytes(self, count: i64) -> i64 {
        match self {
            Self::Bytes => count / (GIB / B),
            Self::Kibibytes => count / (GIB / KIB),
            Self::Mebibytes => count / (GIB / MIB),
            Self::Gibibytes => count,
            Self::Tebibytes => saturating_multiply(count, TIB / GIB, MAX / (TIB / GIB)),
            Self::Pebibytes => saturating_multiply(count, PIB / GIB, MAX / (PIB / GIB)),
        }
    }

    /// Equivalent to `BinaryByteUnit::Tebibytes.convert(count, self)`.
    pub const fn to_tebibytes(self, count: i64) -> i64 {
        match self {
            Self::Bytes => count / (TIB / B),
            Self::Kibibytes => count / (TIB / KIB),
            Self::Mebibytes => count / (TIB / MIB),
            Self::Gibibytes => count / (TIB / GIB),
            Self::Tebibytes => count,
            Self::Pebibytes => saturating_multiply(count, PIB / TIB, MAX / (PIB / TIB)),
        }
    }

    /// Equivalent to `BinaryByteUnit::Pebibytes.convert(count, self)`.
    pub const fn to_pebibytes(self, count: i64) -> i64 {
        match self {
            Self::Bytes => count / (PIB / B),
            Self::Kibibytes => count / (PIB / KIB),
            Self::Mebibytes => count / (PIB / MIB),
            Self::Gibibytes => count / (PIB / GIB),
            Self::Tebibytes => count / (PIB / TIB),
            Self::Pebibytes => count,
        }
    }

    /// Formats `bytes` as a human-readable size such as `"1.2 GiB"`.
    ///
    /// Uses the default `#,##0.#` rendering: grouped thousands, at most one
    /// fraction digit.
    ///
    /// # Returns:
    /// - `Ok(String)`: The formatted size.
    /// - `Err(FormatError::NegativeCount)`: If `bytes < 0`.
    pub fn format(bytes: i64) -> Result<String, FormatError> {
        Self::format_with(bytes, &*DEFAULT_FORMAT)
    }

    /// Formats `bytes` using `formatter` for the numeric part.
    pub fn format_with<F>(bytes: i64, formatter: &F) -> Result<String, FormatError>
    where
        F: NumberFormatter + ?Sized,
    {
        format_units(bytes, &BINARY_SCALE, formatter)
    }

    /// Formats `bytes` using a [`DecimalFormat`] compiled from `pattern`.
    pub fn format_with_pattern(bytes: i64, pattern: &str) -> Result<String, FormatError> {
        Self::format_with(bytes, &DecimalFormat::new(pattern)?)
    }
}

impl ByteUnit for BinaryByteUnit {
    #[inline]
    fn to_bytes(&self, count: i64) -> i64 {
        BinaryByteUnit::to_bytes(*self, count)
    }
}

impl fmt::Display for BinaryByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
