#[cfg(feature = "expose-internal-api")]
pub mod constants;
#[cfg(not(feature = "expose-internal-api"))]
mod constants;

mod binary_byte_unit;
pub use binary_byte_unit::BinaryByteUnit;

mod decimal_byte_unit;
pub use decimal_byte_unit::DecimalByteUnit;

mod bit_unit;
pub use bit_unit::BitUnit;

mod format_error;
pub use format_error::FormatError;

mod format_units;
