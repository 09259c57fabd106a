use chrono::NaiveDate;

use crate::config::INPUT;

/// Parses a `M/DD/YY` or `MM/DD/YY` trade date.
///
/// The string must split into exactly three parts. Each part is read as a
/// lenient integer (leading whitespace, optional sign, leading digits), the
/// year is offset into the 2000s, and the result must name a real calendar
/// day: `2/29/24` parses, `2/30/24` and `13/01/24` do not.
pub fn parse_trade_date(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.split(INPUT.date_separator).collect();
    let [month, day, year] = parts.as_slice() else {
        return None;
    };

    let month = u32::try_from(parse_int_prefix(month)?).ok()?;
    let day = u32::try_from(parse_int_prefix(day)?).ok()?;
    let year = parse_int_prefix(year)?.checked_add(INPUT.year_offset)?;

    // Two-digit calendar years would be read back as 19xx; no such date round-trips.
    if (0..100).contains(&year) {
        return None;
    }
    let year = i32::try_from(year).ok()?;

    // from_ymd_opt refuses out-of-range months and days instead of rolling them over.
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let value: i64 = digits[..len].parse().ok()?;
    Some(if negative { -value } else { value })
}
