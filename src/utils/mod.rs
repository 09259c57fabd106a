mod format;
mod perf;
mod time_utils;

pub use format::{format_currency, format_signed_currency};
pub use time_utils::{AppInstant, TimeUtils};
