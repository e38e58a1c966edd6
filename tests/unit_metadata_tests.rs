#[cfg(test)]
mod tests {
    use byte_units::{BinaryByteUnit, BitUnit, DecimalByteUnit, traits::ByteUnit};

    fn byte_counts(units: &[&dyn ByteUnit], count: i64) -> Vec<i64> {
        units.iter().map(|unit| unit.to_bytes(count)).collect()
    }

    #[test]
    fn test_families_share_the_byte_bridge() {
        let units: [&dyn ByteUnit; 4] = [
            &BinaryByteUnit::Kibibytes,
            &DecimalByteUnit::Kilobytes,
            &BitUnit::Kilobits,
            &BitUnit::Bits,
        ];

        assert_eq!(byte_counts(&units, 8), [8_192, 8_000, 1_000, 1]);
    }

    #[test]
    fn test_conversions_are_const() {
        const KIB_IN_BYTES: i64 = BinaryByteUnit::Kibibytes.to_bytes(1);
        const MEGABYTES_PER_TERABYTE: i64 =
            DecimalByteUnit::Megabytes.convert(1, DecimalByteUnit::Terabytes);
        const GIGABIT_IN_BYTES: i64 = BitUnit::Gigabits.to_bytes(1);

        assert_eq!(KIB_IN_BYTES, 1_024);
        assert_eq!(MEGABYTES_PER_TERABYTE, 1_000_000);
        assert_eq!(GIGABIT_IN_BYTES, 125_000_000);
    }

    #[test]
    fn test_all_lists_every_variant_once_in_order() {
        assert_eq!(BinaryByteUnit::ALL.first(), Some(&BinaryByteUnit::Bytes));
        assert_eq!(BinaryByteUnit::ALL.last(), Some(&BinaryByteUnit::Pebibytes));
        assert_eq!(DecimalByteUnit::iter().count(), 6);
        assert!(BitUnit::ALL.windows(2).all(|pair| pair[0] < pair[1]));

        for (index, unit) in DecimalByteUnit::iter().enumerate() {
            assert_eq!(unit as usize, index);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let encoded = serde_json::to_string(&BinaryByteUnit::Mebibytes).unwrap();
        assert_eq!(encoded, "\"Mebibytes\"");

        let decoded: BitUnit = serde_json::from_str("\"Terabits\"").unwrap();
        assert_eq!(decoded, BitUnit::Terabits);
    }

    #[cfg(feature = "expose-internal-api")]
    #[test]
    fn test_exposed_constants() {
        use byte_units::units::constants::{BINARY_SYMBOLS, KBIT_BYTES, PIB};

        assert_eq!(KBIT_BYTES, 125);
        assert_eq!(PIB, 1 << 50);
        assert_eq!(BINARY_SYMBOLS[5], "PiB");
    }
}
