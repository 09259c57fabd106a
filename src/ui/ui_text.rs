use std::sync::LazyLock;

pub struct UiText {
    pub app_title: String,

    // --- SUMMARY PANEL ---
    pub sum_gains_before_fees: String,
    pub sum_misc_fees: String,
    pub sum_commissions_fees: String,
    pub sum_gains_after_fees: String,
    pub sum_heading: String,

    // --- TOP TOOLBAR ---
    pub tb_file: String,
    pub tb_path_hint: String,
    pub tb_load: String,
    pub tb_order: String,
    pub tb_drop_hint: String,

    // --- CENTER PANEL ---
    pub cp_awaiting_file: String,
    pub cp_awaiting_file_body: String,
    pub cp_drop_now: String,
    pub cp_no_chart: String,
    pub cp_resize_hint: String,

    // --- STATUS BAR ---
    pub sb_source: String,
    pub sb_rows_kept: String,
    pub sb_rows_skipped: String,
    pub sb_days: String,
    pub sb_size: String,
    pub sb_font: String,
    pub sb_skipped_heading: String,

}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Gain/Loss Chart".to_string(),

    // Summary lines read "<label> $<value>"
    sum_gains_before_fees: "CSV Total Gains/Losses (before Fees):".to_string(),
    sum_misc_fees: "CSV Total Misc Fees:".to_string(),
    sum_commissions_fees: "CSV Total Commissions & Fees:".to_string(),
    sum_gains_after_fees: "CSV Total Gains/Losses (after Fees):".to_string(),
    sum_heading: "Totals".to_string(),

    tb_file: "Trade history CSV:".to_string(),
    tb_path_hint: "path/to/trades.csv".to_string(),
    tb_load: "Load".to_string(),
    tb_order: "Date order".to_string(),
    tb_drop_hint: "or drop a .csv file anywhere on this window".to_string(),

    cp_awaiting_file: "No trade history loaded".to_string(),
    cp_awaiting_file_body:
        "Load a CSV export with DATE and AMOUNT columns (Misc Fees and Commissions & Fees are optional)."
            .to_string(),
    cp_drop_now: "Release to load".to_string(),
    cp_no_chart: "Nothing to chart yet.".to_string(),
    cp_resize_hint: "Drag the corner handle to resize".to_string(),

    sb_source: "Source".to_string(),
    sb_rows_kept: "Rows used".to_string(),
    sb_rows_skipped: "Skipped".to_string(),
    sb_days: "Days".to_string(),
    sb_size: "Chart".to_string(),
    sb_font: "Font".to_string(),
    sb_skipped_heading: "Skipped rows".to_string(),
});
