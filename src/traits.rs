mod byte_unit;
pub use byte_unit::ByteUnit;
