/// "$" followed by the value rounded to cents, sign after the dollar ("$-12.50").
/// Matches the summary lines users already know from the spreadsheet export.
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// Leading sign, for tooltips where gains and losses sit side by side ("+$12.50", "-$3.00").
pub fn format_signed_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "+" };
    format!("{}${:.2}", sign, value.abs())
}
