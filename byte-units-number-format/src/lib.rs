pub mod decimal_format;
pub use decimal_format::*;

pub mod decimal_symbols;
pub use decimal_symbols::*;

pub mod number_formatter;
pub use number_formatter::*;

pub mod pattern_error;
pub use pattern_error::*;
