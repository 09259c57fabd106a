mod chart_view;
mod panels;
mod resize;
mod styles;
mod ui_config;
mod ui_text;

pub use chart_view::{ChartHandle, ChartView};
pub use resize::{ContainerSize, ResizeState};

pub(crate) use styles::{UiStyleExt, get_outcome_color};
pub(crate) use ui_config::UI_CONFIG;
pub use ui_text::{UI_TEXT, UiText};
