use std::collections::HashMap;

/// Field names from the first CSV row, in column order.
pub type HeaderRow = Vec<String>;

/// One data row's cells, positionally aligned with the header.
pub type RawRow = Vec<String>;

/// A data row keyed by header name.
///
/// Cells past the end of a short row are simply absent; cells past the end of
/// the header are dropped. With duplicate header names the later column wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeRecord {
    fields: HashMap<String, String>,
}

impl TradeRecord {
    pub fn from_row(header: &[String], row: &[String]) -> Self {
        let fields = header
            .iter()
            .zip(row)
            .map(|(name, cell)| (name.clone(), cell.clone()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
