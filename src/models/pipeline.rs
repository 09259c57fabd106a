use {
    crate::{
        config::DF,
        data::{decode_csv_bytes, load_table},
        errors::PipelineError,
        models::{Aggregation, ChartSeries, LabelOrder, RowRejection, aggregate, validate_rows},
    },
    serde::Serialize,
};

#[cfg(not(target_arch = "wasm32"))]
use {crate::data::read_csv_file, std::path::Path};

/// Result of one successful load.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineReport {
    pub aggregation: Aggregation,
    /// Data rows that made it into the totals.
    pub accepted: usize,
    pub rejections: Vec<RowRejection>,
}

impl PipelineReport {
    pub fn series(&self, order: LabelOrder) -> ChartSeries {
        self.aggregation.series(order)
    }

    pub fn total_rows(&self) -> usize {
        self.accepted + self.rejections.len()
    }
}

/// parse -> validate -> aggregate.
///
/// Stops at the first failing stage: a file with fewer than two rows never
/// reaches validation, and a file whose rows all fail validation never reaches
/// aggregation.
pub fn run_pipeline(text: &str) -> Result<PipelineReport, PipelineError> {
    let table = crate::trace_time!("Parse CSV", 5_000, { load_table(text) })?;

    let outcome = crate::trace_time!("Validate rows", 5_000, {
        validate_rows(&table.header, &table.rows)
    });
    if outcome.is_empty() {
        log::warn!(
            "No valid rows among {} data rows ({} rejected)",
            table.rows.len(),
            outcome.rejections.len()
        );
        return Err(PipelineError::NoValidData);
    }

    let aggregation = crate::trace_time!("Aggregate", 5_000, { aggregate(&outcome.records) });

    if DF.log_pipeline {
        log::info!(
            "Loaded {} rows: {} kept, {} skipped, {} dates",
            table.rows.len(),
            outcome.records.len(),
            outcome.rejections.len(),
            aggregation.daily.len()
        );
    }

    Ok(PipelineReport {
        aggregation,
        accepted: outcome.records.len(),
        rejections: outcome.rejections,
    })
}

/// Same as [`run_pipeline`] for file contents handed over as bytes (drag and drop, browser uploads).
pub fn run_pipeline_bytes(bytes: &[u8]) -> Result<PipelineReport, PipelineError> {
    run_pipeline(decode_csv_bytes(bytes)?)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn run_pipeline_file(path: impl AsRef<Path>) -> Result<PipelineReport, PipelineError> {
    run_pipeline(&read_csv_file(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
DATE,TIME,TYPE,AMOUNT,Misc Fees,Commissions & Fees
1/05/24,09:31:00,TRD,120.00,-0.02,-0.65
1/05/24,10:02:10,TRD,-20.00,,-0.65
1/08/24,11:15:44,TRD,abc,-0.01,-0.65
2/30/24,12:00:00,TRD,50.00,-0.01,-0.65
1/09/24,13:45:00,TRD,-35.50,-0.03,
";

    #[test]
    fn sums_per_date_and_skips_bad_rows() {
        let report = run_pipeline(SAMPLE).unwrap();
        let daily = &report.aggregation.daily;
        assert_eq!(daily.get("1/05/24"), Some(100.0));
        assert_eq!(daily.get("1/09/24"), Some(-35.5));
        assert_eq!(daily.get("1/08/24"), None);
        assert_eq!(daily.get("2/30/24"), None);
        assert_eq!(report.accepted, 3);
        assert_eq!(report.rejections.len(), 2);
        assert_eq!(report.total_rows(), 5);
    }

    #[test]
    fn rejected_rows_contribute_no_fees() {
        let report = run_pipeline(SAMPLE).unwrap();
        let totals = report.aggregation.totals;
        assert!((totals.misc_fees_total - -0.05).abs() < 1e-9);
        assert!((totals.commissions_fees_total - -1.30).abs() < 1e-9);
        assert!((totals.grand_total - (64.5 - 0.05 - 1.30)).abs() < 1e-9);
    }

    #[test]
    fn header_only_fails_before_validation() {
        assert_eq!(
            run_pipeline("DATE,AMOUNT\n"),
            Err(PipelineError::NotEnoughRows)
        );
    }

    #[test]
    fn all_rows_invalid_is_a_content_error() {
        assert_eq!(
            run_pipeline("DATE,AMOUNT\n2/30/24,1\n1/05/24,abc\n"),
            Err(PipelineError::NoValidData)
        );
    }

    #[test]
    fn running_twice_gives_identical_results() {
        assert_eq!(run_pipeline(SAMPLE), run_pipeline(SAMPLE));
    }

    #[test]
    fn bytes_entry_point_matches_text() {
        assert_eq!(run_pipeline_bytes(SAMPLE.as_bytes()), run_pipeline(SAMPLE));
    }
}
