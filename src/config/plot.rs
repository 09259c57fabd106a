//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- BARS ---
    /// Non-negative days
    pub gain_border_color: Color32,
    /// Negative days
    pub loss_border_color: Color32,
    /// Bar fill opacity relative to the border colour (0.0 = invisible, 1.0 = fully opaque)
    pub bar_fill_opacity_pct: f32,

    // --- TEXT ---
    pub chart_title: &'static str,
    pub dataset_label: &'static str,
    pub x_axis_label: &'static str,
    pub y_axis_label: &'static str,

    // --- SEMANTIC COLORS ---
    pub color_profit: Color32,
    pub color_loss: Color32,
    pub color_warning: Color32,
    pub color_error: Color32,

    pub color_text_primary: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,

    // UI WIDGET STYLES
    pub color_chart_background: Color32,
    pub color_widget_border: Color32,
    pub color_resize_handle: Color32,
    pub color_resize_handle_active: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    gain_border_color: Color32::from_rgb(75, 192, 192), // Teal
    loss_border_color: Color32::from_rgb(255, 99, 132), // Pink-red
    bar_fill_opacity_pct: 0.2,

    chart_title: "Gains/Losses Chart",
    dataset_label: "Gains/Losses per Day",
    x_axis_label: "Date",
    y_axis_label: "Gain/Loss ($)",

    color_profit: Color32::from_rgb(100, 255, 100),
    color_loss: Color32::from_rgb(255, 80, 80),
    color_warning: Color32::from_rgb(255, 215, 0), // Gold
    color_error: Color32::from_rgb(255, 80, 80),

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    color_chart_background: Color32::from_rgb(30, 30, 30),
    color_widget_border: Color32::from_gray(60),
    color_resize_handle: Color32::from_gray(110),
    color_resize_handle_active: Color32::from_rgb(255, 215, 0),
};

impl PlotConfig {
    /// (fill, border) for a bar of the given value. Zero counts as a gain.
    pub fn bar_colors(&self, value: f64) -> (Color32, Color32) {
        let border = if value >= 0.0 {
            self.gain_border_color
        } else {
            self.loss_border_color
        };
        (border.gamma_multiply(self.bar_fill_opacity_pct), border)
    }
}
