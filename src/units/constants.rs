pub const MAX: i64 = i64::MAX;

// Binary byte scales, in bytes
pub const B: i64 = 1;
pub const KIB: i64 = B * 1024;
pub const MIB: i64 = KIB * 1024;
pub const GIB: i64 = MIB * 1024;
pub const TIB: i64 = GIB * 1024;
pub const PIB: i64 = TIB * 1024;

// Decimal byte scales, in bytes
pub const KB: i64 = B * 1000;
pub const MB: i64 = KB * 1000;
pub const GB: i64 = MB * 1000;
pub const TB: i64 = GB * 1000;
pub const PB: i64 = TB * 1000;

// Bit scales, in bits
pub const BIT: i64 = 1;
pub const KBIT: i64 = BIT * 1000;
pub const MBIT: i64 = KBIT * 1000;
pub const GBIT: i64 = MBIT * 1000;
pub const TBIT: i64 = GBIT * 1000;
pub const PBIT: i64 = TBIT * 1000;

pub const BITS_PER_BYTE: i64 = 8;

// Bytes per bit unit, pre-combined so widening is a single multiplication
pub const KBIT_BYTES: i64 = KBIT / BITS_PER_BYTE;
pub const MBIT_BYTES: i64 = KBIT_BYTES * 1000;
pub const GBIT_BYTES: i64 = MBIT_BYTES * 1000;
pub const TBIT_BYTES: i64 = GBIT_BYTES * 1000;
pub const PBIT_BYTES: i64 = TBIT_BYTES * 1000;

/// Magnitude at which the formatter moves to the next binary byte unit.
pub const BINARY_THRESHOLD: f64 = 1024.0;

/// Magnitude at which the formatter moves to the next decimal byte or bit unit.
pub const DECIMAL_THRESHOLD: f64 = 1000.0;

pub const BINARY_SYMBOLS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];
pub const DECIMAL_SYMBOLS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];
pub const BIT_SYMBOLS: [&str; 6] = ["b", "Kb", "Mb", "Gb", "Tb", "Pb"];
