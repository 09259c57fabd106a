use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};

use gainloss_chart::{
    LabelOrder, PipelineReport,
    models::{RowRejection, SummaryTotals},
    run_pipeline_file,
    ui::UI_TEXT,
    utils::{TimeUtils, format_currency},
};

/// Print per-day gains/losses and the fee totals of a trade-history CSV
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct SummarizeArgs {
    /// Trade-history CSV file
    file: PathBuf,

    /// Order of the date rows
    #[arg(long, value_enum, default_value_t = LabelOrder::FirstSeen)]
    order: LabelOrder,

    /// Emit JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Also list the rows that were skipped and why
    #[arg(long, default_value_t = false)]
    show_skipped: bool,
}

#[derive(Debug, Tabled, Serialize)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(skip)]
    iso_date: String,
    #[tabled(rename = "Trades")]
    trades: usize,
    #[tabled(rename = "Gain/Loss")]
    #[serde(skip)]
    display: String,
    #[tabled(skip)]
    gain_loss: f64,
}

#[derive(Debug, Serialize)]
struct JsonSummary<'a> {
    source: String,
    order: LabelOrder,
    days: &'a [DayRow],
    totals: &'a SummaryTotals,
    accepted: usize,
    rejections: &'a [RowRejection],
}

fn day_rows(report: &PipelineReport, order: LabelOrder) -> Vec<DayRow> {
    let series = report.series(order);
    series
        .labels
        .into_iter()
        .zip(series.values)
        .map(|(date, gain_loss)| {
            let bucket = report.aggregation.daily.bucket(&date);
            DayRow {
                iso_date: bucket
                    .map(|b| TimeUtils::date_to_iso_string(b.date))
                    .unwrap_or_default(),
                trades: bucket.map(|b| b.trade_count).unwrap_or_default(),
                date,
                display: format_currency(gain_loss),
                gain_loss,
            }
        })
        .collect()
}

fn print_table(args: &SummarizeArgs, report: &PipelineReport, days: &[DayRow]) {
    println!("{}", Table::new(days).with(Style::rounded()));

    let totals = &report.aggregation.totals;
    for (label, value) in [
        (&UI_TEXT.sum_gains_before_fees, totals.daily_total),
        (&UI_TEXT.sum_misc_fees, totals.misc_fees_total),
        (&UI_TEXT.sum_commissions_fees, totals.commissions_fees_total),
        (&UI_TEXT.sum_gains_after_fees, totals.grand_total),
    ] {
        println!("{} {}", label, format_currency(value));
    }

    println!(
        "{} rows used, {} skipped",
        report.accepted,
        report.rejections.len()
    );
    if args.show_skipped {
        for rejection in &report.rejections {
            println!("  row {}: {}", rejection.row_number, rejection.reason);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = SummarizeArgs::parse();
    log::info!("Summarizing {}", args.file.display());

    let report = run_pipeline_file(&args.file)
        .with_context(|| format!("Could not summarize {}", args.file.display()))?;
    let days = day_rows(&report, args.order);

    if args.json {
        let summary = JsonSummary {
            source: args.file.display().to_string(),
            order: args.order,
            days: &days,
            totals: &report.aggregation.totals,
            accepted: report.accepted,
            rejections: &report.rejections,
        };
        let json = serde_json::to_string_pretty(&summary).context("Failed to encode summary")?;
        println!("{}", json);
    } else {
        print_table(&args, &report, &days);
    }
    Ok(())
}
