use {
    crate::config::{CHART, PLOT_CONFIG},
    eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke},
};

#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub chart_border: Color32,
}

#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Padding shared by the toolbar and the totals panel.
    pub chrome_margin: i8,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY, // every label
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(40, 40, 48),
        side_panel: Color32::from_rgb(25, 25, 25),
        chart_border: Color32::from_gray(70),
    },
    chrome_margin: 8,
};

impl UiConfig {
    fn chrome_frame(&self, inner_margin: Margin) -> Frame {
        Frame::NONE.fill(self.colors.side_panel).inner_margin(inner_margin)
    }

    pub fn top_panel_frame(&self) -> Frame {
        self.chrome_frame(Margin::same(self.chrome_margin))
    }

    pub fn side_panel_frame(&self) -> Frame {
        self.chrome_frame(Margin::same(self.chrome_margin))
    }

    /// Status bar sits tighter vertically.
    pub fn bottom_panel_frame(&self) -> Frame {
        self.chrome_frame(Margin::symmetric(self.chrome_margin, self.chrome_margin / 2))
    }

    /// Scroll area around the chart. The right and bottom gutters keep the
    /// resize grip clear of the panel edge and of the scroll bars.
    pub fn central_panel_frame(&self) -> Frame {
        let gutter = CHART.handle_size as i8;
        Frame::NONE.fill(self.colors.central_panel).inner_margin(Margin {
            left: self.chrome_margin,
            right: gutter,
            top: self.chrome_margin,
            bottom: gutter,
        })
    }

    /// Background and border painted behind the chart container.
    pub fn chart_container_frame(&self) -> Frame {
        Frame::NONE
            .fill(PLOT_CONFIG.color_chart_background)
            .stroke(Stroke::new(1.0, self.colors.chart_border))
            .corner_radius(CornerRadius::same(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_gutter_fits_the_resize_grip() {
        let frame = UI_CONFIG.central_panel_frame();
        assert!(frame.inner_margin.right as f32 >= CHART.handle_size);
        assert!(frame.inner_margin.bottom as f32 >= CHART.handle_size);
    }

    #[test]
    fn chrome_panels_share_one_fill() {
        for frame in [
            UI_CONFIG.top_panel_frame(),
            UI_CONFIG.side_panel_frame(),
            UI_CONFIG.bottom_panel_frame(),
        ] {
            assert_eq!(frame.fill, UI_CONFIG.colors.side_panel);
        }
        assert_eq!(
            UI_CONFIG.chart_container_frame().fill,
            PLOT_CONFIG.color_chart_background
        );
    }
}
