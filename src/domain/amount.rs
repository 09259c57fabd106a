// Lenient decimal reading for AMOUNT and fee cells.

/// Reads the longest leading decimal number in `raw`.
///
/// Leading whitespace is skipped and anything after the number is ignored, so
/// `"12.5 USD"` reads as `12.5` while `"abc"` or `""` read as nothing. Thousands
/// separators end the number (`"1,234"` reads as `1`). Non-finite results
/// (`"1e400"`) are rejected.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        let frac_digits = frac_end - (end + 1);
        // "5." and "5.e3" keep the dot; a lone "." does not.
        if frac_digits > 0 || mantissa_digits > 0 {
            mantissa_digits += frac_digits;
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_end = skip_digits(bytes, exp_end);
        if exp_digits_end > exp_end {
            end = exp_digits_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Fee cells never reject a record: missing or unreadable means zero.
pub fn parse_fee(raw: Option<&str>) -> f64 {
    raw.and_then(parse_decimal).unwrap_or(0.0)
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_plain_and_signed_numbers() {
        assert_eq!(parse_decimal("100"), Some(100.0));
        assert_eq!(parse_decimal("-42.75"), Some(-42.75));
        assert_eq!(parse_decimal("+3.5"), Some(3.5));
        assert_eq!(parse_decimal("0"), Some(0.0));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("  7.25"), Some(7.25));
    }

    #[test]
    fn stops_at_first_non_numeric_character() {
        assert_eq!(parse_decimal("12.5 USD"), Some(12.5));
        assert_eq!(parse_decimal("1,234.56"), Some(1.0));
        assert_eq!(parse_decimal("5."), Some(5.0));
        assert_eq!(parse_decimal("5.e3"), Some(5000.0));
        assert_eq!(parse_decimal("1.E2"), Some(100.0));
        assert_eq!(parse_decimal("-2.e-1 fee"), Some(-0.2));
        assert_eq!(parse_decimal("2e3x"), Some(2000.0));
        assert_eq!(parse_decimal("2e"), Some(2.0));
    }

    #[test]
    fn rejects_text_empty_and_non_finite() {
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("-"), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal(".e3"), None);
        assert_eq!(parse_decimal("$12.00"), None);
        assert_eq!(parse_decimal("Infinity"), None);
        assert_eq!(parse_decimal("1e400"), None);
    }

    #[test]
    fn fees_default_to_zero() {
        assert_eq!(parse_fee(None), 0.0);
        assert_eq!(parse_fee(Some("")), 0.0);
        assert_eq!(parse_fee(Some("n/a")), 0.0);
        assert_eq!(parse_fee(Some("-0.65")), -0.65);
    }
}
