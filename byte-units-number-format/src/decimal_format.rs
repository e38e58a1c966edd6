use crate::{DecimalSymbols, NumberFormatter, PatternError};
use std::str::FromStr;
use thousands::{Separable, SeparatorPolicy, digits};
use tracing::debug;

/// Pattern used by [`DecimalFormat::default`]: grouped thousands and at most
/// one fraction digit, with a trailing zero dropped.
pub const DEFAULT_PATTERN: &str = "#,##0.#";

/// A compiled decimal number pattern.
///
/// Supports the numeric subset of the familiar `DecimalFormat` grammar:
///
/// - **Integer part**: `#` (optional digit), `0` (required digit) and `,`
///   (grouping separator). A `#` may not follow a `0`. The group size is the
///   number of digit characters after the last `,`.
/// - **Fraction part** (after `.`): `0` (required digit) followed by `#`
///   (optional digit).
///
/// Values are rounded half-to-even on their exact binary value to the maximum
/// number of fraction digits, then trailing zeros are trimmed down to the
/// minimum. A pattern with a fraction part but no `0` in its integer part
/// behaves as if its last integer `#` were a `0` (`#.##` renders `0.5`, not
/// `.5`).
///
/// # Examples
/// ```rust
/// use byte_units_number_format::{DecimalFormat, DecimalSymbols, NumberFormatter};
///
/// let format = DecimalFormat::default();
/// assert_eq!(format.format_number(9_223.372), "9,223.4");
/// assert_eq!(format.format_number(1.0009), "1");
///
/// let french = DecimalFormat::new("#.##")
///     .unwrap()
///     .with_symbols(DecimalSymbols::new("\u{202f}", ","));
/// assert_eq!(french.format_number(1.177), "1,18");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalFormat {
    pattern: String,
    min_integer_digits: usize,
    min_fraction_digits: usize,
    max_fraction_digits: usize,
    grouping_size: Option<u8>,
    symbols: DecimalSymbols,
}

impl DecimalFormat {
    /// Compiles `pattern` using the default [`DecimalSymbols`].
    ///
    /// # Returns:
    /// - `Ok(DecimalFormat)`: The compiled pattern.
    /// - `Err(PatternError)`: If the pattern is empty or malformed.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::parse(pattern).inspect_err(|err| debug!(pattern, %err, "Rejected number pattern"))
    }

    /// Replaces the separator symbols used when rendering.
    pub fn with_symbols(mut self, symbols: DecimalSymbols) -> Self {
        self.symbols = symbols;
        self
    }

    /// The source pattern this format was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn symbols(&self) -> &DecimalSymbols {
        &self.symbols
    }

    fn parse(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        let mut integer_digits = 0usize;
        let mut min_integer_digits = 0usize;
        let mut min_fraction_digits = 0usize;
        let mut max_fraction_digits = 0usize;
        let mut group_digits: Option<usize> = None;
        let mut in_fraction = false;

        for (position, character) in pattern.chars().enumerate() {
            match (character, in_fraction) {
                ('#', false) => {
                    if min_integer_digits > 0 {
                        return Err(PatternError::MisplacedDigit {
                            character,
                            position,
                        });
                    }
                    integer_digits += 1;
                    if let Some(count) = group_digits.as_mut() {
                        *count += 1;
                    }
                }
                ('0', false) => {
                    min_integer_digits += 1;
                    integer_digits += 1;
                    if let Some(count) = group_digits.as_mut() {
                        *count += 1;
                    }
                }
                (',', false) => group_digits = Some(0),
                ('.', false) => in_fraction = true,
                ('0', true) => {
                    if max_fraction_digits > min_fraction_digits {
                        return Err(PatternError::MisplacedDigit {
                            character,
                            position,
                        });
                    }
                    min_fraction_digits += 1;
                    max_fraction_digits += 1;
                }
                ('#', true) => max_fraction_digits += 1,
                ('.', true) => return Err(PatternError::MultipleDecimalSeparators),
                (',', true) => return Err(PatternError::GroupingInFraction),
                _ => {
                    return Err(PatternError::UnexpectedCharacter {
                        character,
                        position,
                    });
                }
            }
        }

        let grouping_size = match group_digits {
            Some(0) => return Err(PatternError::EmptyGroup),
            Some(size) => Some(u8::try_from(size).unwrap_or(u8::MAX)),
            None => None,
        };

        // `#.##` is read as `#0.##`, and `.##` as `.0#`
        if in_fraction && min_integer_digits == 0 {
            if integer_digits > 0 {
                min_integer_digits = 1;
            } else if max_fraction_digits > 0 {
                min_fraction_digits = min_fraction_digits.max(1);
            }
        }

        Ok(Self {
            pattern: pattern.to_owned(),
            min_integer_digits,
            min_fraction_digits,
            max_fraction_digits,
            grouping_size,
            symbols: DecimalSymbols::default(),
        })
    }

    fn render(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let rounded = format!("{:.*}", self.max_fraction_digits, value.abs());
        let (integer, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

        let significant = fraction.trim_end_matches('0').len();
        let fraction = &fraction[..significant.max(self.min_fraction_digits)];

        let integer = integer.trim_start_matches('0');
        let integer = format!("{integer:0>width$}", width = self.min_integer_digits);
        let integer = match self.grouping_size {
            Some(size) => integer.separate_by_policy(SeparatorPolicy {
                separator: &self.symbols.grouping_separator,
                groups: &[size],
                digits: digits::ASCII_DECIMAL,
            }),
            None => integer,
        };

        let mut rendered = String::with_capacity(integer.len() + fraction.len() + 2);

        // No sign for values that round to zero
        if value.is_sign_negative() && rounded.bytes().any(|byte| matches!(byte, b'1'..=b'9')) {
            rendered.push('-');
        }

        match (integer.is_empty(), fraction.is_empty()) {
            (true, true) => rendered.push('0'),
            (_, true) => rendered.push_str(&integer),
            (_, false) => {
                rendered.push_str(&integer);
                rendered.push_str(&self.symbols.decimal_separator);
                rendered.push_str(fraction);
            }
        }

        rendered
    }
}

impl Default for DecimalFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_owned(),
            min_integer_digits: 1,
            min_fraction_digits: 0,
            max_fraction_digits: 1,
            grouping_size: Some(3),
            symbols: DecimalSymbols::default(),
        }
    }
}

impl FromStr for DecimalFormat {
    type Err = PatternError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Self::new(pattern)
    }
}

impl NumberFormatter for DecimalFormat {
    #[inline]
    fn format_number(&self, value: f64) -> String {
        self.render(value)
    }
}
