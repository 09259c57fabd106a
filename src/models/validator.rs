use {
    crate::{
        config::{DF, INPUT},
        domain::{RawRow, TradeRecord, parse_decimal, parse_fee, parse_trade_date},
    },
    chrono::NaiveDate,
    serde::Serialize,
    std::fmt,
};

/// A row that passed both the date and the amount check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedRecord {
    /// DATE exactly as written in the file. This is the grouping key.
    pub date_key: String,
    pub date: NaiveDate,
    pub amount: f64,
    /// Already defaulted to zero when missing or unreadable.
    pub misc_fees: f64,
    pub commissions_fees: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    MissingField(&'static str),
    InvalidDate(String),
    InvalidAmount(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing {}", field),
            Self::InvalidDate(raw) => write!(f, "invalid date '{}'", raw),
            Self::InvalidAmount(raw) => write!(f, "invalid amount '{}'", raw),
        }
    }
}

/// Why a data row was left out. Rejections never touch the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowRejection {
    /// 1-based, counting data rows only (the header is row 0).
    pub row_number: usize,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationOutcome {
    pub records: Vec<ValidatedRecord>,
    pub rejections: Vec<RowRejection>,
}

impl ValidationOutcome {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Checks a single keyed record. Date is checked before amount.
pub fn validate_record(record: &TradeRecord) -> Result<ValidatedRecord, RejectReason> {
    let raw_date = record
        .get(INPUT.date_field)
        .ok_or(RejectReason::MissingField(INPUT.date_field))?;
    let date =
        parse_trade_date(raw_date).ok_or_else(|| RejectReason::InvalidDate(raw_date.to_owned()))?;

    let raw_amount = record
        .get(INPUT.amount_field)
        .ok_or(RejectReason::MissingField(INPUT.amount_field))?;
    let amount =
        parse_decimal(raw_amount).ok_or_else(|| RejectReason::InvalidAmount(raw_amount.to_owned()))?;

    Ok(ValidatedRecord {
        date_key: raw_date.to_owned(),
        date,
        amount,
        misc_fees: parse_fee(record.get(INPUT.misc_fees_field)),
        commissions_fees: parse_fee(record.get(INPUT.commissions_fees_field)),
    })
}

/// Rebuilds keyed records from `header` and `rows` and keeps the valid ones.
///
/// Never fails: invalid rows are collected as rejections and it is up to the
/// caller to decide whether an empty result is an error.
pub fn validate_rows(header: &[String], rows: &[RawRow]) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    for (i, row) in rows.iter().enumerate() {
        let record = TradeRecord::from_row(header, row);
        match validate_record(&record) {
            Ok(valid) => outcome.records.push(valid),
            Err(reason) => {
                if DF.log_rejections {
                    log::info!("Row {} skipped: {}", i + 1, reason);
                }
                outcome.rejections.push(RowRejection {
                    row_number: i + 1,
                    reason,
                });
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn header() -> Vec<String> {
        strings(&["DATE", "AMOUNT", "Misc Fees", "Commissions & Fees"])
    }

    #[test]
    fn keeps_valid_rows_and_defaults_fees() {
        let rows = vec![
            strings(&["1/05/24", "12.50", "0.10", "0.65"]),
            strings(&["1/05/24", "-2", "", "x"]),
        ];
        let outcome = validate_rows(&header(), &rows);
        assert_eq!(outcome.records.len(), 2);
        assert!(outcome.rejections.is_empty());

        let second = &outcome.records[1];
        assert_eq!(second.date_key, "1/05/24");
        assert_eq!(second.amount, -2.0);
        assert_eq!(second.misc_fees, 0.0);
        assert_eq!(second.commissions_fees, 0.0);
    }

    #[test]
    fn non_numeric_amount_is_rejected_even_with_a_good_date() {
        let rows = vec![strings(&["1/05/24", "abc"])];
        let outcome = validate_rows(&header(), &rows);
        assert!(outcome.is_empty());
        assert_eq!(
            outcome.rejections,
            vec![RowRejection {
                row_number: 1,
                reason: RejectReason::InvalidAmount("abc".into()),
            }]
        );
    }

    #[test]
    fn impossible_date_is_rejected() {
        let rows = vec![
            strings(&["2/29/24", "1"]),
            strings(&["2/30/24", "1"]),
        ];
        let outcome = validate_rows(&header(), &rows);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].date_key, "2/29/24");
        assert_eq!(outcome.rejections[0].row_number, 2);
        assert_eq!(
            outcome.rejections[0].reason,
            RejectReason::InvalidDate("2/30/24".into())
        );
    }

    #[test]
    fn missing_cells_and_columns() {
        let outcome = validate_rows(&header(), &[strings(&["1/05/24"])]);
        assert_eq!(
            outcome.rejections[0].reason,
            RejectReason::MissingField("AMOUNT")
        );

        let no_date_column = strings(&["AMOUNT"]);
        let outcome = validate_rows(&no_date_column, &[strings(&["5"])]);
        assert_eq!(
            outcome.rejections[0].reason,
            RejectReason::MissingField("DATE")
        );
    }

    #[test]
    fn extra_columns_do_not_matter() {
        let header = strings(&["SYMBOL", "DATE", "DESCRIPTION", "AMOUNT"]);
        let rows = vec![strings(&["AAPL", "3/01/24", "Sold", "40"])];
        let outcome = validate_rows(&header, &rows);
        assert_eq!(outcome.records[0].amount, 40.0);
    }

    #[test]
    fn rejection_reasons_read_well() {
        assert_eq!(
            RejectReason::InvalidDate("2/30/24".into()).to_string(),
            "invalid date '2/30/24'"
        );
        assert_eq!(RejectReason::MissingField("DATE").to_string(), "missing DATE");
    }
}
