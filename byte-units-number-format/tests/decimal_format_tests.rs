#[cfg(test)]
mod tests {
    use byte_units_number_format::{DecimalFormat, DecimalSymbols, NumberFormatter, PatternError};
    use rand::{Rng, rng};

    fn french() -> DecimalSymbols {
        DecimalSymbols::new("\u{202f}", ",")
    }

    #[test]
    fn test_default_pattern_rendering() {
        let format = DecimalFormat::default();

        assert_eq!(format.format_number(0.0), "0");
        assert_eq!(format.format_number(1.0), "1");
        assert_eq!(format.format_number(16.0), "16");
        assert_eq!(format.format_number(1.177), "1.2");
        assert_eq!(format.format_number(8_192.0), "8,192");
        assert_eq!(format.format_number(9_223.372_036_854_776), "9,223.4");
        assert_eq!(format.format_number(1_234_567.0), "1,234,567");
    }

    #[test]
    fn test_trailing_zero_is_trimmed() {
        let format = DecimalFormat::default();
        assert_eq!(format.format_number(1.000_976_562_5), "1");
        assert_eq!(format.format_number(2.04), "2");
    }

    #[test]
    fn test_required_fraction_digits() {
        let format = DecimalFormat::new("0.0#").unwrap();

        assert_eq!(format.format_number(0.0), "0.0");
        assert_eq!(format.format_number(1.0), "1.0");
        assert_eq!(format.format_number(1.000_976_562_5), "1.0");
        assert_eq!(format.format_number(16.0), "16.0");
        assert_eq!(format.format_number(1.177_375_793_457_031_2), "1.18");
    }

    #[test]
    fn test_custom_symbols() {
        let format = DecimalFormat::new("#.##").unwrap().with_symbols(french());

        assert_eq!(format.format_number(16.0), "16");
        assert_eq!(format.format_number(1.177_375_793_457_031_2), "1,18");

        let grouped = DecimalFormat::default().with_symbols(french());
        assert_eq!(grouped.format_number(9_223.372), "9\u{202f}223,4");
    }

    #[test]
    fn test_hash_only_pattern_renders_zero() {
        let format = DecimalFormat::new("#").unwrap();
        assert_eq!(format.format_number(0.0), "0");
        assert_eq!(format.format_number(0.4), "0");
        assert_eq!(format.format_number(42.0), "42");
    }

    #[test]
    fn test_fraction_only_pattern_omits_integer_zero() {
        let format = DecimalFormat::new(".##").unwrap();
        assert_eq!(format.format_number(0.5), ".5");
        assert_eq!(format.format_number(0.0), ".0");
        assert_eq!(format.format_number(3.25), "3.25");
    }

    #[test]
    fn test_minimum_integer_digits_are_padded() {
        let format = DecimalFormat::new("000").unwrap();
        assert_eq!(format.format_number(7.0), "007");
        assert_eq!(format.format_number(1_234.0), "1234");
    }

    #[test]
    fn test_custom_grouping_size() {
        let format = DecimalFormat::new("#,#0").unwrap();
        assert_eq!(format.format_number(123_456.0), "12,34,56");
    }

    #[test]
    fn test_negative_values() {
        let format = DecimalFormat::default();
        assert_eq!(format.format_number(-1_234.56), "-1,234.6");
        assert_eq!(format.format_number(-0.01), "0");
    }

    #[test]
    fn test_non_finite_values() {
        let format = DecimalFormat::default();
        assert_eq!(format.format_number(f64::INFINITY), "inf");
        assert_eq!(format.format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_pattern_errors() {
        assert_eq!(DecimalFormat::new(""), Err(PatternError::Empty));
        assert_eq!(
            DecimalFormat::new("0#"),
            Err(PatternError::MisplacedDigit {
                character: '#',
                position: 1
            })
        );
        assert_eq!(
            DecimalFormat::new("0.#0"),
            Err(PatternError::MisplacedDigit {
                character: '0',
                position: 3
            })
        );
        assert_eq!(
            DecimalFormat::new("0.0.0"),
            Err(PatternError::MultipleDecimalSeparators)
        );
        assert_eq!(
            DecimalFormat::new("0.0,0"),
            Err(PatternError::GroupingInFraction)
        );
        assert_eq!(DecimalFormat::new("#,"), Err(PatternError::EmptyGroup));
        assert_eq!(DecimalFormat::new("#,.#"), Err(PatternError::EmptyGroup));
        assert_eq!(
            DecimalFormat::new("0.0 MB"),
            Err(PatternError::UnexpectedCharacter {
                character: ' ',
                position: 3
            })
        );
    }

    #[test]
    fn test_from_str_and_pattern_accessor() {
        let format: DecimalFormat = "0.00".parse().expect("valid pattern");
        assert_eq!(format.pattern(), "0.00");
        assert_eq!(format.format_number(2.5), "2.50");
    }

    #[test]
    fn test_closure_is_a_number_formatter() {
        let formatter = |value: f64| format!("<{value}>");
        assert_eq!(formatter.format_number(1.5), "<1.5>");
    }

    #[test]
    fn test_integers_render_exactly_under_default_pattern() {
        let format = DecimalFormat::default();
        let mut rng = rng();

        for _ in 0..1_000 {
            let value: u32 = rng.random_range(0..1_000_000);
            let expected = value.to_string();
            let rendered = format.format_number(f64::from(value)).replace(',', "");
            assert_eq!(rendered, expected, "Integer {value} should render without fraction");
        }
    }
}
