mod aggregator;
mod label_order;
mod pipeline;
mod validator;

pub use {
    aggregator::{
        Aggregation, ChartSeries, DailyAggregate, DailyBucket, FeeTotals, SummaryTotals, aggregate,
    },
    label_order::LabelOrder,
    pipeline::{PipelineReport, run_pipeline, run_pipeline_bytes},
    validator::{
        RejectReason, RowRejection, ValidatedRecord, ValidationOutcome, validate_record,
        validate_rows,
    },
};

#[cfg(not(target_arch = "wasm32"))]
pub use pipeline::run_pipeline_file;
