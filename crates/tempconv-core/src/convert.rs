//! Text-in, text-out temperature conversions.
//!
//! Every function here is total: text that does not screen as a decimal
//! numeral produces [`NO_VALUE`] instead of an error, and the converters render
//! that sentinel inline as if it were a normal result.

/// Rendered in place of a result when the input text is not a number.
pub const NO_VALUE: &str = "null";

/// Converts Celsius text to Fahrenheit text using `v * 9 / 5 + 32`.
pub fn celsius_to_fahrenheit(celsius: &str) -> String {
    let result = parse_decimal(celsius).map(|value| value * 9.0 / 5.0 + 32.0);
    log::trace!("celsius {:?} -> fahrenheit {:?}", celsius, result);
    render(result)
}

/// Converts Fahrenheit text to Celsius text using `(v - 32) * 5 / 9`.
pub fn fahrenheit_to_celsius(fahrenheit: &str) -> String {
    let result = parse_decimal(fahrenheit).map(|value| (value - 32.0) * 5.0 / 9.0);
    log::trace!("fahrenheit {:?} -> celsius {:?}", fahrenheit, result);
    render(result)
}

fn render(value: Option<f64>) -> String {
    value.map_or_else(|| NO_VALUE.to_string(), format_double)
}

/// Parses a decimal numeral the way the text fields expect it.
///
/// Accepted forms, after stripping surrounding characters in `0x00..=0x20`:
/// an optional sign followed by `NaN`, `Infinity`, or a numeral with optional
/// fraction and exponent and an optional `f`/`F`/`d`/`D` suffix. Spellings
/// that only Rust's `f64::from_str` understands (`inf`, `nan`) are rejected.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| c <= ' ');
    let (negative, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    let magnitude = match unsigned {
        "NaN" => f64::NAN,
        "Infinity" => f64::INFINITY,
        numeral => parse_numeral(numeral)?,
    };

    Some(if negative { -magnitude } else { magnitude })
}

fn parse_numeral(numeral: &str) -> Option<f64> {
    let numeral = numeral
        .strip_suffix(['f', 'F', 'd', 'D'])
        .unwrap_or(numeral);
    if !is_decimal_numeral(numeral) {
        return None;
    }
    numeral.parse::<f64>().ok()
}

/// `digits [. digits] [e [sign] digits]` where at least one side of the point
/// carries a digit.
fn is_decimal_numeral(numeral: &str) -> bool {
    let bytes = numeral.as_bytes();
    let mut pos = count_digits(bytes);
    let mut mantissa_digits = pos;

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let fraction = count_digits(&bytes[pos..]);
        pos += fraction;
        mantissa_digits += fraction;
    }
    if mantissa_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exponent = count_digits(&bytes[pos..]);
        if exponent == 0 {
            return false;
        }
        pos += exponent;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Renders an `f64` in its natural text form.
///
/// Magnitudes in `[1e-3, 1e7)` print as plain decimals with at least one
/// fractional digit; everything else prints as `d.dddE±n`. Digits are the
/// shortest sequence that round-trips.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-3..1e7).contains(&magnitude) {
        let plain = value.to_string();
        return if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        };
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_and_boiling_points() {
        assert_eq!(celsius_to_fahrenheit("0"), "32.0");
        assert_eq!(celsius_to_fahrenheit("100"), "212.0");
        assert_eq!(fahrenheit_to_celsius("32"), "0.0");
        assert_eq!(fahrenheit_to_celsius("212"), "100.0");
    }

    #[test]
    fn minus_forty_is_the_same_on_both_scales() {
        assert_eq!(celsius_to_fahrenheit("-40"), "-40.0");
        assert_eq!(fahrenheit_to_celsius("-40"), "-40.0");
    }

    #[test]
    fn result_matches_formula_for_numeric_input() {
        for text in ["37", "-17.5", "0.25", "451", "1e3", "-273.15", "12345.678"] {
            let value: f64 = text.parse().unwrap();
            assert_eq!(
                celsius_to_fahrenheit(text),
                format_double(value * 9.0 / 5.0 + 32.0),
                "celsius input {text}"
            );
            assert_eq!(
                fahrenheit_to_celsius(text),
                format_double((value - 32.0) * 5.0 / 9.0),
                "fahrenheit input {text}"
            );
        }
    }

    #[test]
    fn unparseable_text_renders_sentinel() {
        for text in [
            "", " ", "abc", "12abc", "-", ".", "1.2.3", "1e", "1e+", "--5", "inf", "nan", "1,5",
        ] {
            assert_eq!(celsius_to_fahrenheit(text), NO_VALUE, "input {text:?}");
            assert_eq!(fahrenheit_to_celsius(text), NO_VALUE, "input {text:?}");
        }
        assert_eq!(celsius_to_fahrenheit("abc"), "null");
    }

    #[test]
    fn parse_accepts_signs_points_and_exponents() {
        assert_eq!(parse_decimal("+5"), Some(5.0));
        assert_eq!(parse_decimal("-5"), Some(-5.0));
        assert_eq!(parse_decimal("5."), Some(5.0));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("1e3"), Some(1000.0));
        assert_eq!(parse_decimal("2.5E-1"), Some(0.25));
        assert_eq!(parse_decimal("1e+2"), Some(100.0));
    }

    #[test]
    fn parse_ignores_surrounding_whitespace_and_type_suffix() {
        assert_eq!(parse_decimal("  42\t"), Some(42.0));
        assert_eq!(parse_decimal("\n-1.5 "), Some(-1.5));
        assert_eq!(parse_decimal("7d"), Some(7.0));
        assert_eq!(parse_decimal("7.5F"), Some(7.5));
        assert_eq!(parse_decimal("d"), None);
        assert_eq!(parse_decimal("7dd"), None);
        assert_eq!(parse_decimal("4 2"), None);
    }

    #[test]
    fn parse_accepts_named_non_finite_values() {
        assert_eq!(parse_decimal("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_decimal("-Infinity"), Some(f64::NEG_INFINITY));
        assert!(parse_decimal("NaN").is_some_and(f64::is_nan));
        assert_eq!(parse_decimal("infinity"), None);
        assert_eq!(parse_decimal("NaNd"), None);
        assert_eq!(celsius_to_fahrenheit("Infinity"), "Infinity");
        assert_eq!(fahrenheit_to_celsius("-Infinity"), "-Infinity");
        assert_eq!(celsius_to_fahrenheit("NaN"), "NaN");
    }

    #[test]
    fn format_plain_range_keeps_a_fraction_digit() {
        assert_eq!(format_double(32.0), "32.0");
        assert_eq!(format_double(-72.0), "-72.0");
        assert_eq!(format_double(0.5), "0.5");
        assert_eq!(format_double(0.001), "0.001");
        assert_eq!(format_double(1234567.0), "1234567.0");
        assert_eq!(format_double(9999999.5), "9999999.5");
    }

    #[test]
    fn format_switches_to_scientific_outside_plain_range() {
        assert_eq!(format_double(1e7), "1.0E7");
        assert_eq!(format_double(18000032.0), "1.8000032E7");
        assert_eq!(format_double(1e-4), "1.0E-4");
        assert_eq!(format_double(-2.5e-5), "-2.5E-5");
        assert_eq!(format_double(1e300), "1.0E300");
        assert_eq!(celsius_to_fahrenheit("1e7"), "1.8000032E7");
    }

    #[test]
    fn format_zero_and_non_finite() {
        assert_eq!(format_double(0.0), "0.0");
        assert_eq!(format_double(-0.0), "-0.0");
        assert_eq!(format_double(f64::NAN), "NaN");
        assert_eq!(format_double(f64::INFINITY), "Infinity");
        assert_eq!(format_double(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn huge_exponent_overflows_to_infinity() {
        assert_eq!(parse_decimal("1e400"), Some(f64::INFINITY));
        assert_eq!(celsius_to_fahrenheit("1e400"), "Infinity");
    }

    #[test]
    fn round_trip_lands_near_the_input() {
        for text in ["37", "-12.75", "0.1", "98.6", "1000", "-459.67"] {
            let original: f64 = text.parse().unwrap();
            let back = fahrenheit_to_celsius(&celsius_to_fahrenheit(text));
            let back = parse_decimal(&back).expect("round trip stays numeric");
            assert!(
                (back - original).abs() <= 1e-9 * original.abs().max(1.0),
                "{text} came back as {back}"
            );
        }
    }
}
