use thiserror::Error;

/// Everything that can stop a load before a chart is drawn.
///
/// The `Display` text is what the error region shows, so keep it user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("No file selected. Please select a CSV file.")]
    NoFileSelected,

    /// The file could not be read or is not UTF-8 text.
    #[error("Error reading the file: {0}")]
    Read(String),

    /// The CSV reader rejected the input.
    #[error("Error parsing the CSV file: {0}")]
    Parse(String),

    /// Fewer than a header row plus one data row.
    #[error("The CSV file does not contain enough rows.")]
    NotEnoughRows,

    /// Every data row failed validation.
    #[error("No valid data found in the CSV file.")]
    NoValidData,
}

/// Failures at the chart boundary. The previously displayed chart survives all of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("Error: Unable to get the chart drawing surface.")]
    MissingSurface,

    #[error(
        "Error: Invalid data format. Labels and values must be the same length ({labels} labels, {values} values)."
    )]
    MismatchedSeries { labels: usize, values: usize },

    #[error("No data available to display the chart.")]
    EmptySeries,

    #[error("Error creating the chart: {0}")]
    Chart(String),
}
