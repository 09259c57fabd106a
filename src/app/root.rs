use {
    eframe::{
        Frame, Storage,
        egui::{Context, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{fmt, mem},
};

use crate::{
    Cli,
    app::{AppState, AwaitingFileState, FileSource, PhaseView, ShowingState},
    config::{CHART, DF},
    errors::PipelineError,
    models::{LabelOrder, PipelineReport},
    ui::{ChartView, ContainerSize, ResizeState, UI_CONFIG},
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) container: ContainerSize, // persists across sessions.
    pub(crate) label_order: LabelOrder,
    pub(crate) path_input: String,
    #[serde(skip)]
    pub(crate) chart_view: ChartView,
    #[serde(skip)]
    pub(crate) resize: ResizeState,
    #[serde(skip)]
    pub(crate) report: Option<PipelineReport>,
    #[serde(skip)]
    pub(crate) source_name: Option<String>,
    #[serde(skip)]
    pub(crate) error_message: Option<String>,
    #[serde(skip)]
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        let container = ContainerSize::default();
        Self {
            container,
            label_order: LabelOrder::default(),
            path_input: String::new(),
            chart_view: ChartView::new(container.to_vec2()),
            resize: ResizeState::default(),
            report: None,
            source_name: None,
            error_message: None,
            state: AppState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };
        if DF.log_persistence {
            log::info!(
                "RESTORE [App]: container {:.0}x{:.0}, order {}",
                app.container.width,
                app.container.height,
                app.label_order
            );
        }

        app.chart_view = ChartView::new(app.container.to_vec2());
        app.state = AppState::default();
        app.apply_args(args);
        app
    }

    /// Command-line choices win over restored preferences.
    pub(crate) fn apply_args(&mut self, args: Cli) {
        if let Some(order) = args.order {
            self.label_order = order;
        }
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = args.file {
            self.path_input = path.display().to_string();
            let source = FileSource::from_path_input(&self.path_input);
            if self.load(source) {
                self.state = AppState::Showing(ShowingState);
            }
        }
    }

    /// Runs the pipeline for `request` and applies the outcome.
    ///
    /// Success replaces report, summary and chart and clears the error region.
    /// Failure only replaces the error message. Returns whether a report was loaded.
    pub(crate) fn load(&mut self, request: Result<FileSource, PipelineError>) -> bool {
        let result = request.and_then(|source| {
            let report = source.run()?;
            Ok((source.display_name(), report))
        });

        match result {
            Ok((name, report)) => {
                log::info!(
                    "Loaded {}: {} rows kept, {} skipped",
                    name,
                    report.accepted,
                    report.rejections.len()
                );
                self.report = Some(report);
                self.source_name = Some(name);
                self.error_message = None;
                self.rebuild_chart(CHART.initial_font_size());
                true
            }
            Err(e) => {
                self.show_error(e);
                false
            }
        }
    }

    /// Recreates the chart from the loaded report in the current label order.
    pub(crate) fn rebuild_chart(&mut self, font_size: f32) {
        let Some(report) = &self.report else {
            return;
        };
        let series = report.series(self.label_order);
        if let Err(e) = self
            .chart_view
            .create_chart(series.labels, series.values, font_size)
        {
            self.show_error(e);
        }
    }

    pub(crate) fn handle_order_change(&mut self) {
        let font = self
            .chart_view
            .current()
            .map(|c| c.font_size())
            .unwrap_or_else(|| CHART.initial_font_size());
        self.rebuild_chart(font);
    }

    pub(crate) fn handle_resize(&mut self, size: ContainerSize) {
        if size == self.container {
            return;
        }
        self.container = size;
        self.chart_view.set_surface(size.to_vec2());
        if let Err(e) = self.chart_view.recreate_with_font(size.font_size()) {
            self.show_error(e);
        }
    }

    /// Only the newest message is kept.
    pub(crate) fn show_error(&mut self, error: impl fmt::Display) {
        let message = error.to_string();
        log::warn!("{}", message);
        self.error_message = Some(message);
    }

    pub(crate) fn tick_awaiting_state(&mut self, ctx: &Context) -> AppState {
        if self.render_chrome(ctx) {
            ctx.request_repaint();
            return AppState::Showing(ShowingState);
        }
        self.render_awaiting_panel(ctx);
        AppState::AwaitingFile(AwaitingFileState)
    }

    pub(crate) fn tick_showing_state(&mut self, ctx: &Context) -> AppState {
        self.render_chrome(ctx);
        self.render_central_panel(ctx);
        AppState::Showing(ShowingState)
    }

    /// Panels shared by every phase. Returns whether a file loaded this frame.
    fn render_chrome(&mut self, ctx: &Context) -> bool {
        let mut request = self.render_top_panel(ctx);
        if let Some(dropped) = crate::app::dropped_file_request(ctx) {
            request = Some(dropped);
        }
        self.render_status_panel(ctx);
        self.render_summary_panel(ctx);

        match request {
            Some(request) => self.load(request),
            None => false,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::AwaitingFile(mut s) => s.tick(self, ctx),
            AppState::Showing(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if DF.log_persistence {
            log::info!(
                "SAVE [App]: container {:.0}x{:.0}, order {}",
                self.container.width,
                self.container.height,
                self.label_order
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
