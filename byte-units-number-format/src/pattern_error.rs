use thiserror::Error;

/// Errors produced while compiling a [`crate::DecimalFormat`] pattern.
///
/// Positions are zero-based character offsets into the pattern.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PatternError {
    #[error("Number pattern is empty")]
    Empty,

    #[error("Unexpected character {character:?} at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    /// A `#` after a `0` in the integer part, or a `0` after a `#` in the fraction part.
    #[error("Misplaced digit {character:?} at position {position}")]
    MisplacedDigit { character: char, position: usize },

    #[error("Number pattern contains more than one decimal separator")]
    MultipleDecimalSeparators,

    #[error("Grouping separator is not followed by any digit")]
    EmptyGroup,

    #[error("Grouping separator is not allowed in the fraction part")]
    GroupingInFraction,
}
