//! Configuration module for the gain/loss chart.

// Can all be private now because we have a public re-export.
mod chart;
mod debug;
mod input;
mod persistence;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use chart::{CHART, ChartConfig};
pub use debug::DF;
pub use input::{INPUT, InputConfig};
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;

/// Switches the `trace_time!` macro on.
pub const LOG_PERFORMANCE: bool = DF.log_performance;
