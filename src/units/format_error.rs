use byte_units_number_format::PatternError;
use thiserror::Error;

/// Errors returned by the human-readable size formatters.
///
/// Conversions never fail; only formatting validates its input.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FormatError {
    /// Sizes are never negative. `domain` is `"bytes"` or `"bits"`.
    #[error("{domain} < 0: {count}")]
    NegativeCount { domain: &'static str, count: i64 },

    #[error(transparent)]
    InvalidPattern(#[from] PatternError),
}
