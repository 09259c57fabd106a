use crate::{
    config::INPUT,
    domain::{HeaderRow, RawRow},
    errors::PipelineError,
};

/// A parsed CSV file: first row as header, the rest as data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub header: HeaderRow,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// Splits parsed rows into header and data. Needs a header plus at least one data row.
    pub fn from_rows(mut rows: Vec<RawRow>) -> Result<Self, PipelineError> {
        if rows.len() < INPUT.min_rows {
            return Err(PipelineError::NotEnoughRows);
        }
        let data = rows.split_off(1);
        let header = rows.pop().unwrap_or_default();
        Ok(Self { header, rows: data })
    }
}

const UNTERMINATED_QUOTE: &str = "Quoted field unterminated";
const MALFORMED_CLOSING_QUOTE: &str = "Trailing quote on quoted field is malformed";

/// Reads every row of `text` as plain string cells.
///
/// No header interpretation happens here. Rows may have differing lengths and
/// blank lines are skipped. Broken quoting is a `Parse` error.
pub fn parse_csv(text: &str) -> Result<Vec<RawRow>, PipelineError> {
    let text = text.trim_start_matches('\u{feff}');
    check_quoting(text)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    reader
        .records()
        .map(|r| {
            r.map(|record| record.iter().map(str::to_owned).collect::<RawRow>())
                .map_err(|e| PipelineError::Parse(e.to_string()))
        })
        .filter(|r| !matches!(r, Ok(cells) if is_blank(cells)))
        .collect()
}

/// Parses `text` and splits it into header and data rows.
pub fn load_table(text: &str) -> Result<RawTable, PipelineError> {
    RawTable::from_rows(parse_csv(text)?)
}

/// Browser uploads and dropped files arrive as bytes.
pub fn decode_csv_bytes(bytes: &[u8]) -> Result<&str, PipelineError> {
    std::str::from_utf8(bytes).map_err(|e| PipelineError::Read(e.to_string()))
}

/// Rejects quoting the csv reader would otherwise accept silently.
///
/// A quote opening a field must be closed, and the closing quote may only be
/// followed by spaces and then a delimiter, a line break or the end of input.
/// `""` inside a quoted field is an escaped quote. Quotes inside unquoted
/// fields are plain text.
fn check_quoting(text: &str) -> Result<(), PipelineError> {
    let mut chars = text.chars().peekable();
    let mut at_field_start = true;

    while let Some(c) = chars.next() {
        match c {
            '"' if at_field_start => {
                loop {
                    match chars.next() {
                        None => return Err(PipelineError::Parse(UNTERMINATED_QUOTE.into())),
                        Some('"') if chars.peek() == Some(&'"') => {
                            chars.next();
                        }
                        Some('"') => {
                            while matches!(chars.peek(), Some(' ' | '\t')) {
                                chars.next();
                            }
                            match chars.peek() {
                                None | Some(',' | '\n' | '\r') => break,
                                Some(_) => {
                                    return Err(PipelineError::Parse(
                                        MALFORMED_CLOSING_QUOTE.into(),
                                    ));
                                }
                            }
                        }
                        Some(_) => {}
                    }
                }
                at_field_start = false;
            }
            ',' | '\n' | '\r' => at_field_start = true,
            _ => at_field_start = false,
        }
    }
    Ok(())
}

// Blank lines carry no cells, or a single empty one.
fn is_blank(cells: &[String]) -> bool {
    match cells {
        [] => true,
        [only] => only.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_header_and_rows_without_interpreting_them() {
        let rows = parse_csv("DATE,AMOUNT\n1/05/24,12.5\n1/06/24,-3\n").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["DATE", "AMOUNT"]);
        assert_eq!(rows[2], vec!["1/06/24", "-3"]);
    }

    #[test]
    fn quoted_cells_keep_commas() {
        let rows = parse_csv("DATE,DESCRIPTION,AMOUNT\n1/05/24,\"Bought 1, sold 2\",4\n").unwrap();
        assert_eq!(rows[1][1], "Bought 1, sold 2");
    }

    #[test]
    fn escaped_quotes_and_quotes_inside_plain_cells_are_fine() {
        let rows = parse_csv("DATE,NOTE,AMOUNT\n1/05/24,\"say \"\"hi\"\"\" ,1\n1/06/24,5\"2,2\n")
            .unwrap();
        assert_eq!(rows[1][1], "say \"hi\" ");
        assert_eq!(rows[2][1], "5\"2");
    }

    #[test]
    fn unterminated_quote_is_a_parse_error() {
        assert_eq!(
            parse_csv("DATE,AMOUNT\n1/05/24,\"12\n"),
            Err(PipelineError::Parse("Quoted field unterminated".into()))
        );
        assert!(matches!(
            parse_csv("DATE,AMOUNT\n1/05/24,\"12\"\"\n1/06/24,3\n"),
            Err(PipelineError::Parse(_))
        ));
    }

    #[test]
    fn text_after_closing_quote_is_a_parse_error() {
        let err = load_table("DATE,AMOUNT\n1/05/24,\"12\"x\n").unwrap_err();
        assert_eq!(
            err,
            PipelineError::Parse("Trailing quote on quoted field is malformed".into())
        );
        assert_eq!(
            err.to_string(),
            "Error parsing the CSV file: Trailing quote on quoted field is malformed"
        );
    }

    #[test]
    fn ragged_rows_and_blank_lines() {
        let rows = parse_csv("DATE,AMOUNT,Misc Fees\n\n1/05/24,1\n\n1/06/24,2,0.1,extra\n").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].len(), 2);
        assert_eq!(rows[2].len(), 4);
    }

    #[test]
    fn byte_order_mark_is_not_part_of_the_header() {
        let rows = parse_csv("\u{feff}DATE,AMOUNT\n1/05/24,1\n").unwrap();
        assert_eq!(rows[0][0], "DATE");
    }

    #[test]
    fn header_only_is_not_enough() {
        assert_eq!(load_table("DATE,AMOUNT\n"), Err(PipelineError::NotEnoughRows));
        assert_eq!(load_table(""), Err(PipelineError::NotEnoughRows));
    }

    #[test]
    fn table_splits_header_from_data() {
        let table = load_table("DATE,AMOUNT\n1/05/24,1\n").unwrap();
        assert_eq!(table.header, vec!["DATE", "AMOUNT"]);
        assert_eq!(table.rows, vec![vec!["1/05/24".to_string(), "1".to_string()]]);
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        assert!(matches!(
            decode_csv_bytes(&[0xff, 0xfe, 0x00]),
            Err(PipelineError::Read(_))
        ));
    }
}
