use crate::traits::ByteUnit;
use crate::units::FormatError;
use crate::units::constants::*;
use crate::units::format_units::{DECIMAL_SCALE, DEFAULT_FORMAT, format_units};
use crate::utils::saturating_multiply;
use byte_units_number_format::{DecimalFormat, NumberFormatter};
use std::fmt;

/// Byte size at a given decimal (power of 1000) granularity.
///
/// A `DecimalByteUnit` does not hold a size itself; it only knows how to
/// convert counts expressed in one granularity into another.
///
/// # Conversion Rules:
/// - **Finer → coarser** truncates toward zero (`999` bytes is `0` kilobytes).
/// - **Coarser → finer** saturates at `i64::MAX` / `i64::MIN` instead of
///   overflowing.
///
/// # Examples
/// ```
/// use byte_units::DecimalByteUnit;
///
/// assert_eq!(DecimalByteUnit::Megabytes.convert(1, DecimalByteUnit::Terabytes), 1_000_000);
/// assert_eq!(DecimalByteUnit::Kilobytes.to_bytes(10), 10_000);
/// assert_eq!(DecimalByteUnit::format(1_234_567).unwrap(), "1.2 MB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecimalByteUnit {
    /// One byte.
    Bytes,

    /// 1000 bytes.
    Kilobytes,

    /// 1000 kilobytes.
    Megabytes,

    /// 1000 megabytes.
    Gigabytes,

    /// 1000 gigabytes.
    Terabytes,

    /// 1000 terabytes.
    Petabytes,
}

impl DecimalByteUnit {
    /// Every variant, from finest to coarsest.
    pub const ALL: [Self; 6] = [
        Self::Bytes,
        Self::Kilobytes,
        Self::Megabytes,
        Self::Gigabytes,
        Self::Terabytes,
        Self::Petabytes,
    ];

    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Display symbol, e.g. `"KB"`.
    pub const fn symbol(self) -> &'static str {
        DECIMAL_SYMBOLS[self as usize]
    }

    /// Converts `source_count` units of `source_unit` into this unit,
    /// truncating when narrowing and saturating when widening.
    pub const fn convert(self, source_count: i64, source_unit: DecimalByteUnit) -> i64 {
        match self {
            Self::Bytes => source_unit.to_bytes(source_count),
            Self::Kilobytes => source_unit.to_kilobytes(source_count),
            Self::Megabytes => source_unit.to_megabytes(source_count),
            Self::Gigabytes => source_unit.to_gigabytes(source_count),
            Self::Terabytes => source_unit.to_terabytes(source_count),
            Self::Petabytes => source_unit.to_petabytes(source_count),
        }
    }

    /// Equivalent to `DecimalByteUnit::Bytes.convert(count, self)`.
    pub const fn to_bytes(self, count: i64) -> i64 {
        match self {
            Self::Bytes => count,
            Self::Kilobytes => saturating_multiply(count, KB / B, MAX / (KB / B)),
            Self::Megabytes => saturating_multiply(count, MB / B, MAX / (MB / B)),
            Self::Gigabytes => saturating_multiply(count, GB / B, MAX / (GB / B)),
            Self::Terabytes => saturating_multiply(count, TB / B, MAX / (TB / B)),
            Self::Petabytes => saturating_multiply(count, PB / B, MAX / (PB / B)),
        }
    }

    /// Equivalent to `DecimalByteUnit::Kilobytes.convert(count, self)`.
    pub const fn to_kilobytes(self, count: i64) -> i64 {
        match self {
            Self::Bytes => count / (KB / B),
            Self::Kilobytes => count,
            Self::Megabytes => saturating_multiply(count, MB / KB, MAX / (MB / KB)),
            Self::Gigabytes => saturating_multiply(count, GB / KB, MAX / (GB / KB)),
            Self::Terabytes => saturating_multiply(count, TB / KB, MAX / (TB / KB)),
            Self::Petabytes => saturating_multiply(count, PB / KB, MAX / (PB / KB)),
        }
    }

    /// Equivalent to `DecimalByteUnit::Megabytes.convert(count, self)`.
    pub const fn to_megabytes(self, count: i64) -> i64 {
        match self {
            Self::Bytes => count / (MB / B),
            Self::Kilobytes => count / (MB / KB),
            Self::Megabytes => count,
            Self::Gigabytes => saturating_multiply(count, GB / MB, MAX / (GB / MB)),
            Self::Terabytes => saturating_multiply(count, TB / MB, MAX / (TB / MB)),
            Self::Petabytes => saturating_multiply(count, PB / MB, MAX / (PB / MB)),
        }
    }

    /// Equivalent to `DecimalByteUnit::Gigabytes.convert(count, self)`.
    pub const fn to_gigabytes(self, count: i64) -> i64 {
        match self {
            Self::Bytes => count / (GB / B),
            Self::Kilobytes => count / (GB / KB),
            Self::Megabytes => count / (GB / MB),
            Self::Gigabytes => count,
            Self::Terabytes => saturating_multiply(count, TB / GB, MAX / (TB / GB)),
            Self::Petabytes => saturating_multiply(count, PB / GB, MAX / (PB / GB)),
        }
    }

    /// Equivalent to `DecimalByteUnit::Terabytes.convert(count, self)`.
    pub const fn to_terabytes(self, count: i64) -> i64 {
        match self {
            Self::Bytes => count / (TB / B),
            Self::Kilobytes => count / (TB / KB),
            Self::Megabytes => count / (TB / MB),
            Self::Gigabytes => count / (TB / GB),
            Self::Terabytes => count,
            Self::Petabytes => saturating_multiply(count, PB / TB, MAX / (PB / TB)),
        }
    }

    /// Equivalent to `DecimalByteUnit::Petabytes.convert(count, self)`.
    pub const fn to_petabytes(self, count: i64) -> i64 {
        match self {
            Self::Bytes => count / (PB / B),
            Self::Kilobytes => count / (PB / KB),
            Self::Megabytes => count / (PB / MB),
            Self::Gigabytes => count / (PB / GB),
            Self::Terabytes => count / (PB / TB),
            Self::Petabytes => count,
        }
    }

    /// Formats `bytes` as a human-readable size such as `"1.2 GB"`.
    ///
    /// Fails with [`FormatError::NegativeCount`] if `bytes < 0`.
    pub fn format(bytes: i64) -> Result<String, FormatError> {
        Self::format_with(bytes, &*DEFAULT_FORMAT)
    }

    /// Formats `bytes` using `formatter` for the numeric part.
    pub fn format_with<F>(bytes: i64, formatter: &F) -> Result<String, FormatError>
    where
        F: NumberFormatter + ?Sized,
    {
        format_units(bytes, &DECIMAL_SCALE, formatter)
    }

    /// Formats `bytes` using a [`DecimalFormat`] compiled from `pattern`.
    pub fn format_with_pattern(bytes: i64, pattern: &str) -> Result<String, FormatError> {
        Self::format_with(bytes, &DecimalFormat::new(pattern)?)
    }
}

impl ByteUnit for DecimalByteUnit {
    #[inline]
    fn to_bytes(&self, count: i64) -> i64 {
        DecimalByteUnit::to_bytes(*self, count)
    }
}

impl fmt::Display for DecimalByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
