//! Chart container sizing and font scaling.

pub struct ChartConfig {
    /// Height used to derive the font size of the first render after a load.
    pub initial_font_basis_height: f32,
    /// Container size before the user ever drags the handle.
    pub default_width: f32,
    pub default_height: f32,

    /// font = max(min_font_size, height / font_divisor)
    pub font_divisor: f32,
    pub min_font_size: f32,
    /// Title is font + legend_font_delta, never below this.
    pub min_title_font_size: f32,
    pub legend_font_delta: f32,

    /// A drag only applies when both new dimensions exceed this (pixels).
    pub min_container_px: f32,
    pub handle_size: f32,

    /// Fraction of the slot each bar fills (1.0 = bars touch).
    pub bar_width_pct: f64,
    pub bar_border_width: f32,
}

pub const CHART: ChartConfig = ChartConfig {
    initial_font_basis_height: 800.0,
    default_width: 900.0,
    default_height: 500.0,

    font_divisor: 50.0,
    min_font_size: 12.0,
    min_title_font_size: 14.0,
    legend_font_delta: 2.0,

    min_container_px: 100.0,
    handle_size: 14.0,

    bar_width_pct: 0.8,
    bar_border_width: 1.0,
};

impl ChartConfig {
    /// Font size for a container of the given height.
    pub fn font_size_for_height(&self, height: f32) -> f32 {
        self.min_font_size.max(height / self.font_divisor)
    }

    pub fn initial_font_size(&self) -> f32 {
        self.font_size_for_height(self.initial_font_basis_height)
    }

    pub fn title_font_size(&self, font_size: f32) -> f32 {
        (font_size + self.legend_font_delta).max(self.min_title_font_size)
    }
}
