/// A unit whose counts can be expressed in bytes.
///
/// Implemented by [`crate::BinaryByteUnit`], [`crate::DecimalByteUnit`] and
/// [`crate::BitUnit`], so callers can accept any of them generically.
///
/// # Example
/// ```
/// use byte_units::{BinaryByteUnit, BitUnit, traits::ByteUnit};
///
/// fn size_in_bytes<U: ByteUnit>(unit: U, count: i64) -> i64 {
///     unit.to_bytes(count)
/// }
///
/// assert_eq!(size_in_bytes(BinaryByteUnit::Kibibytes, 1), 1_024);
/// assert_eq!(size_in_bytes(BitUnit::Bits, 16), 2);
/// ```
pub trait ByteUnit {
    /// Converts `count` units of this granularity into bytes.
    ///
    /// # Returns:
    /// - The byte count, truncated toward zero when the unit is finer than a byte.
    /// - `i64::MAX` or `i64::MIN` if the conversion would overflow.
    fn to_bytes(&self, count: i64) -> i64;
}
