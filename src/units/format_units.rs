use crate::units::FormatError;
use crate::units::constants::*;
use byte_units_number_format::{DecimalFormat, NumberFormatter};
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Renderer behind the plain `format` entry points (`#,##0.#`).
pub(crate) static DEFAULT_FORMAT: LazyLock<DecimalFormat> = LazyLock::new(DecimalFormat::default);

/// Everything the shared scaling loop needs to know about a unit family.
pub(crate) struct UnitScale {
    /// Noun used in error messages.
    pub domain: &'static str,
    pub threshold: f64,
    pub symbols: &'static [&'static str; 6],
}

pub(crate) const BINARY_SCALE: UnitScale = UnitScale {
    domain: "bytes",
    threshold: BINARY_THRESHOLD,
    symbols: &BINARY_SYMBOLS,
};

pub(crate) const DECIMAL_SCALE: UnitScale = UnitScale {
    domain: "bytes",
    threshold: DECIMAL_THRESHOLD,
    symbols: &DECIMAL_SYMBOLS,
};

pub(crate) const BIT_SCALE: UnitScale = UnitScale {
    domain: "bits",
    threshold: DECIMAL_THRESHOLD,
    symbols: &BIT_SYMBOLS,
};

/// Scales `count` (in the family's base unit) to the largest unit under which
/// it is still `>= 1`, then renders `"<magnitude> <symbol>"`.
///
/// The loop stops at the last symbol, so `i64::MAX` renders in the largest
/// unit rather than running off the table.
pub(crate) fn format_units<F>(
    count: i64,
    scale: &UnitScale,
    formatter: &F,
) -> Result<String, FormatError>
where
    F: NumberFormatter + ?Sized,
{
    if count < 0 {
        debug!(domain = scale.domain, count, "Rejected negative size");
        return Err(FormatError::NegativeCount {
            domain: scale.domain,
            count,
        });
    }

    let last_index = scale.symbols.len() - 1;
    let mut unit_index = 0;
    let mut magnitude = count as f64;

    while magnitude >= scale.threshold && unit_index < last_index {
        magnitude /= scale.threshold;
        unit_index += 1;
    }

    let symbol = scale.symbols[unit_index];
    trace!(count, magnitude, symbol, "Scaled size for display");

    let mut rendered = formatter.format_number(magnitude);
    rendered.push(' ');
    rendered.push_str(symbol);

    Ok(rendered)
}
