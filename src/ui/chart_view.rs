use {
    crate::{
        config::{CHART, DF, PLOT_CONFIG},
        errors::RenderError,
        ui::UI_TEXT,
        utils::{format_currency, format_signed_currency},
    },
    eframe::egui::{FontId, RichText, TextStyle, Ui, Vec2},
    egui_plot::{
        Axis, AxisHints, Bar, BarChart, Corner, GridMark, HPlacement, Legend, Plot, VPlacement,
    },
    std::sync::Arc,
};

const LEGEND_TEXT_STYLE: &str = "chart_legend";

/// The chart currently on screen.
///
/// Never patched in place: every change of data, order or size goes through
/// [`ChartView::create_chart`], which retires the old handle first.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartHandle {
    generation: u64,
    labels: Arc<[String]>,
    values: Arc<[f64]>,
    font_size: f32,
}

impl ChartHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

/// Owner of the single displayed chart and the surface it is drawn on.
#[derive(Debug, Default)]
pub struct ChartView {
    current: Option<ChartHandle>,
    last_generation: u64,
    surface: Vec2,
}

impl ChartView {
    pub fn new(surface: Vec2) -> Self {
        Self {
            surface,
            ..Default::default()
        }
    }

    pub fn current(&self) -> Option<&ChartHandle> {
        self.current.as_ref()
    }

    pub fn surface(&self) -> Vec2 {
        self.surface
    }

    pub fn set_surface(&mut self, surface: Vec2) {
        self.surface = surface;
    }

    /// Replaces the displayed chart with one built from `labels` and `values`.
    ///
    /// On error nothing changes: the previous chart (if any) stays on screen.
    pub fn create_chart(
        &mut self,
        labels: impl Into<Arc<[String]>>,
        values: impl Into<Arc<[f64]>>,
        font_size: f32,
    ) -> Result<(), RenderError> {
        let labels = labels.into();
        let values = values.into();

        if !(self.surface.x > 0.0 && self.surface.y > 0.0) {
            return Err(RenderError::MissingSurface);
        }
        if labels.len() != values.len() {
            return Err(RenderError::MismatchedSeries {
                labels: labels.len(),
                values: values.len(),
            });
        }
        if labels.is_empty() {
            return Err(RenderError::EmptySeries);
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(RenderError::Chart(format!(
                "value for '{}' is not a finite number",
                labels[i]
            )));
        }

        self.dispose();
        self.last_generation += 1;
        if DF.log_chart_lifecycle {
            log::info!(
                "Chart #{} created: {} bars, font {:.1}px, surface {:.0}x{:.0}",
                self.last_generation,
                labels.len(),
                font_size,
                self.surface.x,
                self.surface.y
            );
        }
        self.current = Some(ChartHandle {
            generation: self.last_generation,
            labels,
            values,
            font_size,
        });
        Ok(())
    }

    /// Rebuilds the current chart from its own series at a new font size.
    /// Does nothing when no chart is displayed.
    pub fn recreate_with_font(&mut self, font_size: f32) -> Result<(), RenderError> {
        let Some(handle) = &self.current else {
            return Ok(());
        };
        let (labels, values) = (Arc::clone(&handle.labels), Arc::clone(&handle.values));
        self.create_chart(labels, values, font_size)
    }

    /// Tears down the displayed chart, returning it.
    pub fn dispose(&mut self) -> Option<ChartHandle> {
        let old = self.current.take();
        if DF.log_chart_lifecycle {
            if let Some(handle) = &old {
                log::info!("Chart #{} disposed", handle.generation);
            }
        }
        old
    }

    /// Draws title, bars, axes and legend inside the current surface.
    pub fn show(&self, ui: &mut Ui) {
        let Some(handle) = &self.current else {
            ui.vertical_centered(|ui| {
                ui.add_space(self.surface.y / 3.0);
                ui.label(RichText::new(&UI_TEXT.cp_no_chart).color(PLOT_CONFIG.color_text_subdued));
            });
            return;
        };

        let font = handle.font_size;
        let title_size = CHART.title_font_size(font);

        ui.scope(|ui| {
            let style = ui.style_mut();
            style
                .text_styles
                .insert(TextStyle::Body, FontId::proportional(font));
            style.text_styles.insert(
                TextStyle::Name(LEGEND_TEXT_STYLE.into()),
                FontId::proportional(font + CHART.legend_font_delta),
            );

            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(PLOT_CONFIG.chart_title)
                        .size(title_size)
                        .strong()
                        .color(PLOT_CONFIG.color_text_primary),
                );
            });

            let title_height = title_size * 1.6;
            let plot_height = (self.surface.y - title_height).max(1.0);
            let bar_count = handle.labels.len();
            let target_labels = (self.surface.x / (font * 6.0)).max(1.0) as f64;

            let chart = BarChart::new(PLOT_CONFIG.dataset_label, build_bars(handle))
                .element_formatter(Box::new(|bar, _chart| {
                    format!("{}\n{}", bar.name, format_signed_currency(bar.value))
                }));

            // Fresh id per generation: a recreated chart starts with fresh plot memory.
            Plot::new(("gain_loss_chart", handle.generation))
                .width(self.surface.x)
                .height(plot_height)
                .legend(
                    Legend::default()
                        .position(Corner::LeftTop)
                        .text_style(TextStyle::Name(LEGEND_TEXT_STYLE.into())),
                )
                .custom_x_axes(vec![create_date_axis(Arc::clone(&handle.labels))])
                .custom_y_axes(vec![create_value_axis()])
                .label_formatter(|_, _| String::new())
                .x_grid_spacer(move |input| {
                    let (min, max) = input.bounds;
                    label_marks(min, max, bar_count, target_labels)
                })
                .include_x(-0.5)
                .include_x(bar_count as f64 - 0.5)
                .include_y(0.0)
                .allow_double_click_reset(false)
                .allow_scroll(false)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_boxed_zoom(false)
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(chart);
                });
        });
    }
}

fn build_bars(handle: &ChartHandle) -> Vec<Bar> {
    handle
        .labels
        .iter()
        .zip(handle.values.iter())
        .enumerate()
        .map(|(i, (label, &value))| {
            let (fill, border) = PLOT_CONFIG.bar_colors(value);
            Bar::new(i as f64, value)
                .name(label)
                .width(CHART.bar_width_pct)
                .fill(fill)
                .stroke((CHART.bar_border_width, border))
        })
        .collect()
}

// Helper: Calculate a human-friendly step size (1, 2, 5, 10, 20, 50...)
fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    if raw_step <= 0.0 || !raw_step.is_finite() {
        return 1.0;
    }
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag;

    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    // Never step less than one bar
    (nice_step * mag).max(1.0).round()
}

/// Grid marks on bar centres only, thinned so roughly `target_count` labels fit.
fn label_marks(min: f64, max: f64, bar_count: usize, target_count: f64) -> Vec<GridMark> {
    if bar_count == 0 {
        return Vec::new();
    }
    let step = calculate_adaptive_step(max - min, target_count);
    let last = (bar_count - 1) as f64;
    let start = (min.max(0.0) / step).ceil() as i64;
    let end = (max.min(last) / step).floor() as i64;

    (start..=end)
        .map(|i| GridMark {
            value: i as f64 * step,
            step_size: step,
        })
        .collect()
}

/// Label under bar `value`, or nothing between bars and outside the series.
fn label_for_mark(labels: &[String], value: f64) -> String {
    let index = value.round();
    if (value - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

fn create_date_axis(labels: Arc<[String]>) -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(PLOT_CONFIG.x_axis_label)
        .formatter(move |mark, _range| label_for_mark(&labels, mark.value))
        .placement(VPlacement::Bottom)
}

fn create_value_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(PLOT_CONFIG.y_axis_label)
        .formatter(|mark, _range| format_currency(mark.value))
        .placement(HPlacement::Left)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn view() -> ChartView {
        ChartView::new(Vec2::new(CHART.default_width, CHART.default_height))
    }

    #[test]
    fn create_replaces_the_previous_handle() {
        let mut view = view();
        view.create_chart(labels(&["1/05/24"]), vec![10.0], 16.0).unwrap();
        let first = view.current().unwrap().generation();

        view.create_chart(labels(&["1/05/24", "1/06/24"]), vec![10.0, -3.0], 16.0)
            .unwrap();
        let current = view.current().unwrap();
        assert!(current.generation() > first);
        assert_eq!(current.labels(), ["1/05/24", "1/06/24"]);
        assert_eq!(current.values(), [10.0, -3.0]);
    }

    #[test]
    fn failures_keep_the_previous_chart() {
        let mut view = view();
        view.create_chart(labels(&["1/05/24"]), vec![10.0], 16.0).unwrap();
        let before = view.current().cloned();

        assert_eq!(
            view.create_chart(labels(&["a", "b"]), vec![1.0], 16.0),
            Err(RenderError::MismatchedSeries {
                labels: 2,
                values: 1
            })
        );
        assert_eq!(
            view.create_chart(Vec::<String>::new(), Vec::<f64>::new(), 16.0),
            Err(RenderError::EmptySeries)
        );
        assert!(matches!(
            view.create_chart(labels(&["a"]), vec![f64::NAN], 16.0),
            Err(RenderError::Chart(_))
        ));
        assert_eq!(view.current().cloned(), before);
    }

    #[test]
    fn surface_is_checked_first() {
        let mut view = ChartView::default();
        assert_eq!(
            view.create_chart(Vec::<String>::new(), vec![1.0], 16.0),
            Err(RenderError::MissingSurface)
        );
        assert!(view.current().is_none());
    }

    #[test]
    fn recreate_keeps_series_and_changes_font() {
        let mut view = view();
        view.create_chart(labels(&["1/05/24", "1/06/24"]), vec![4.0, -1.0], 16.0)
            .unwrap();
        let before = view.current().unwrap().clone();

        view.set_surface(Vec2::new(400.0, 1000.0));
        view.recreate_with_font(20.0).unwrap();
        let after = view.current().unwrap();
        assert_eq!(after.labels(), before.labels());
        assert_eq!(after.values(), before.values());
        assert_eq!(after.font_size(), 20.0);
        assert!(after.generation() > before.generation());
    }

    #[test]
    fn recreate_without_chart_is_a_no_op() {
        let mut view = view();
        assert_eq!(view.recreate_with_font(20.0), Ok(()));
        assert!(view.current().is_none());
    }

    #[test]
    fn dispose_hands_back_the_chart() {
        let mut view = view();
        view.create_chart(labels(&["1/05/24"]), vec![1.0], 16.0).unwrap();
        assert!(view.dispose().is_some());
        assert!(view.current().is_none());
        assert!(view.dispose().is_none());
    }

    #[test]
    fn bars_carry_sign_colours_and_labels() {
        let mut view = view();
        view.create_chart(labels(&["a", "b", "c"]), vec![5.0, 0.0, -2.0], 16.0)
            .unwrap();
        let bars = build_bars(view.current().unwrap());
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].name, "a");
        assert_eq!(bars[2].argument, 2.0);
        assert_eq!(bars[0].fill, PLOT_CONFIG.bar_colors(5.0).0);
        assert_eq!(bars[1].fill, PLOT_CONFIG.bar_colors(5.0).0);
        assert_eq!(bars[2].fill, PLOT_CONFIG.bar_colors(-2.0).0);
        assert_eq!(bars[2].stroke.color, PLOT_CONFIG.loss_border_color);
    }

    #[test]
    fn axis_labels_only_on_bar_centres() {
        let names = labels(&["1/05/24", "1/06/24"]);
        assert_eq!(label_for_mark(&names, 0.0), "1/05/24");
        assert_eq!(label_for_mark(&names, 1.0), "1/06/24");
        assert_eq!(label_for_mark(&names, 0.5), "");
        assert_eq!(label_for_mark(&names, 2.0), "");
        assert_eq!(label_for_mark(&names, -1.0), "");
    }

    #[test]
    fn label_marks_thin_out_for_long_series() {
        let dense = label_marks(-0.5, 9.5, 10, 20.0);
        assert_eq!(dense.len(), 10);

        let sparse = label_marks(-0.5, 199.5, 200, 10.0);
        assert!(sparse.len() <= 11);
        assert!(sparse.iter().all(|m| m.value.fract() == 0.0 && m.value <= 199.0));

        assert!(label_marks(0.0, 1.0, 0, 5.0).is_empty());
    }
}
