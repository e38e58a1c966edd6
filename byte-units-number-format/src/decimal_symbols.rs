/// Separator strings used by [`crate::DecimalFormat`] when rendering.
///
/// The default matches US English conventions (`1,234.5`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalSymbols {
    /// Inserted between digit groups of the integer part.
    pub grouping_separator: String,

    /// Placed between the integer and fraction parts.
    pub decimal_separator: String,
}

impl DecimalSymbols {
    pub fn new(grouping_separator: impl Into<String>, decimal_separator: impl Into<String>) -> Self {
        Self {
            grouping_separator: grouping_separator.into(),
            decimal_separator: decimal_separator.into(),
        }
    }
}

impl Default for DecimalSymbols {
    fn default() -> Self {
        Self::new(",", ".")
    }
}
