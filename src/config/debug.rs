//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Stage-by-stage progress of a load (rows read, records kept, buckets built).
    pub log_pipeline: bool,

    /// One line per rejected row, with the reason.
    pub log_rejections: bool,

    /// Container size and font size on every applied drag.
    pub log_resize: bool,

    /// Chart handle create/dispose.
    pub log_chart_lifecycle: bool,

    /// Activate trace_time macro (for scope-level timing)
    pub log_performance: bool,

    pub log_persistence: bool,
}

pub const DF: LogFlags = LogFlags {
    log_pipeline: true,
    log_rejections: false,
    log_resize: false,
    log_chart_lifecycle: false,
    log_performance: false,
    log_persistence: false,
};
