//! Trade-history CSV layout.

pub struct InputConfig {
    /// Column holding the trade date (`M/DD/YY` or `MM/DD/YY`). Also the grouping key.
    pub date_field: &'static str,
    /// Column holding the signed gain/loss of the trade.
    pub amount_field: &'static str,
    /// Optional fee columns. Absent or unreadable cells count as zero.
    pub misc_fees_field: &'static str,
    pub commissions_fees_field: &'static str,

    pub date_separator: char,
    /// Added to the two-digit year ("24" -> 2024)
    pub year_offset: i64,

    /// Header plus at least one data row
    pub min_rows: usize,
}

pub const INPUT: InputConfig = InputConfig {
    date_field: "DATE",
    amount_field: "AMOUNT",
    misc_fees_field: "Misc Fees",
    commissions_fees_field: "Commissions & Fees",

    date_separator: '/',
    year_offset: 2000,

    min_rows: 2,
};
