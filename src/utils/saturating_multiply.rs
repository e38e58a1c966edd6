/// Multiplies `size` by `factor`, clamping instead of overflowing.
///
/// The overflow check happens **before** the multiplication, so the
/// overflowing product is never computed.
///
/// # Parameters:
/// - `size`: The count being widened.
/// - `factor`: The (positive) ratio between the source and target granularity.
/// - `over`: The overflow threshold, always `i64::MAX / factor`. Call sites
///   pass it as a constant so the division happens at compile time.
///
/// # Returns:
/// - `i64::MAX` if `size > over`.
/// - `i64::MIN` if `size < -over`.
/// - `size * factor` otherwise.
///
/// # Examples
/// ```
/// use byte_units::utils::saturating_multiply;
///
/// assert_eq!(saturating_multiply(10, 1024, i64::MAX / 1024), 10_240);
/// assert_eq!(saturating_multiply(i64::MAX / 2, 1024, i64::MAX / 1024), i64::MAX);
/// assert_eq!(saturating_multiply(i64::MIN / 2, 1024, i64::MAX / 1024), i64::MIN);
/// ```
#[inline]
pub const fn saturating_multiply(size: i64, factor: i64, over: i64) -> i64 {
    if size > over {
        return i64::MAX;
    }
    if size < -over {
        return i64::MIN;
    }
    size * factor
}
