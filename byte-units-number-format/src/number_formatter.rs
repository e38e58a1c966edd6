/// Renders a floating-point magnitude as display text.
///
/// This is the seam through which all locale and precision policy enters the
/// size formatters. [`crate::DecimalFormat`] is the built-in implementation;
/// any `Fn(f64) -> String` closure qualifies as well.
///
/// # Example
/// ```rust
/// use byte_units_number_format::NumberFormatter;
///
/// let two_places = |value: f64| format!("{value:.2}");
/// assert_eq!(two_places.format_number(1.5), "1.50");
/// ```
pub trait NumberFormatter {
    /// Formats `value` for display.
    fn format_number(&self, value: f64) -> String;
}

impl<F> NumberFormatter for F
where
    F: Fn(f64) -> String,
{
    #[inline]
    fn format_number(&self, value: f64) -> String {
        self(value)
    }
}
