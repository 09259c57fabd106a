use {
    crate::{
        app::{App, FileSource},
        config::PLOT_CONFIG,
        errors::PipelineError,
        models::{LabelOrder, SummaryTotals},
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt, get_outcome_color},
        utils::format_currency,
    },
    eframe::egui::{
        CentralPanel, CollapsingHeader, ComboBox, Context, RichText, ScrollArea, Sense,
        SidePanel, TopBottomPanel, Ui, UiBuilder,
    },
    strum::IntoEnumIterator,
};

impl App {
    /// File controls and label order. Returns a load request when the user asked for one.
    pub(crate) fn render_top_panel(
        &mut self,
        ctx: &Context,
    ) -> Option<Result<FileSource, PipelineError>> {
        let frame = UI_CONFIG.top_panel_frame();
        let mut request = None;

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    #[cfg(not(target_arch = "wasm32"))]
                    {
                        ui.label(&UI_TEXT.tb_file);
                        let edit = ui.add(
                            eframe::egui::TextEdit::singleline(&mut self.path_input)
                                .hint_text(&UI_TEXT.tb_path_hint)
                                .desired_width(320.0),
                        );
                        let submitted = edit.lost_focus()
                            && ui.input(|i| i.key_pressed(eframe::egui::Key::Enter));
                        let clicked = ui
                            .button(ui.button_text_primary(&UI_TEXT.tb_load))
                            .clicked();
                        if clicked || submitted {
                            request = Some(FileSource::from_path_input(&self.path_input));
                        }
                    }
                    ui.label_subdued(&UI_TEXT.tb_drop_hint);

                    ui.separator();

                    ui.label(&UI_TEXT.tb_order);
                    let before = self.label_order;
                    ComboBox::from_id_salt("label_order")
                        .selected_text(self.label_order.to_string())
                        .show_ui(ui, |ui| {
                            for order in LabelOrder::iter() {
                                ui.selectable_value(&mut self.label_order, order, order.to_string());
                            }
                        });
                    if self.label_order != before {
                        self.handle_order_change();
                    }
                });
            });

        request
    }

    /// The four totals, the error region and the skipped-row list.
    pub(crate) fn render_summary_panel(&self, ctx: &Context) {
        let frame = UI_CONFIG.side_panel_frame();

        SidePanel::left("summary_panel")
            .min_width(300.0)
            .resizable(false)
            .frame(frame)
            .show(ctx, |ui| {
                ui.label_subheader(&UI_TEXT.sum_heading);
                ui.add_space(4.0);

                match self.report.as_ref().map(|r| r.aggregation.totals) {
                    Some(totals) => render_totals(ui, &totals),
                    None => ui.label_subdued(&UI_TEXT.cp_no_chart),
                }

                if let Some(message) = &self.error_message {
                    ui.add_space(10.0);
                    ui.separator();
                    ui.label_error(message);
                }

                let Some(report) = &self.report else {
                    return;
                };
                if report.rejections.is_empty() {
                    return;
                }
                ui.add_space(10.0);
                let header = format!(
                    "{} ({})",
                    UI_TEXT.sb_skipped_heading,
                    report.rejections.len()
                );
                CollapsingHeader::new(header)
                    .id_salt("skipped_rows")
                    .default_open(false)
                    .show(ui, |ui| {
                        ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                            for rejection in &report.rejections {
                                ui.metric(
                                    &format!("Row {}", rejection.row_number),
                                    &rejection.reason.to_string(),
                                    PLOT_CONFIG.color_warning,
                                );
                            }
                        });
                    });
            });
    }

    pub(crate) fn render_status_panel(&self, ctx: &Context) {
        let frame = UI_CONFIG.bottom_panel_frame();
        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let (Some(name), Some(report)) = (&self.source_name, &self.report) {
                        ui.metric(&UI_TEXT.sb_source, name, PLOT_CONFIG.color_text_neutral);
                        ui.separator();
                        ui.metric(
                            &UI_TEXT.sb_rows_kept,
                            &format!("{}/{}", report.accepted, report.total_rows()),
                            PLOT_CONFIG.color_profit,
                        );
                        let skipped = report.rejections.len();
                        let skipped_color = if skipped > 0 {
                            PLOT_CONFIG.color_warning
                        } else {
                            PLOT_CONFIG.color_text_subdued
                        };
                        ui.metric(&UI_TEXT.sb_rows_skipped, &skipped.to_string(), skipped_color);
                        ui.metric(
                            &UI_TEXT.sb_days,
                            &report.aggregation.daily.len().to_string(),
                            PLOT_CONFIG.color_text_neutral,
                        );
                        ui.separator();
                    }

                    ui.metric(
                        &UI_TEXT.sb_size,
                        &format!("{:.0}x{:.0}", self.container.width, self.container.height),
                        PLOT_CONFIG.color_text_neutral,
                    );
                    if let Some(chart) = self.chart_view.current() {
                        ui.metric(
                            &UI_TEXT.sb_font,
                            &format!("{:.0}px", chart.font_size()),
                            PLOT_CONFIG.color_text_neutral,
                        );
                    }
                    ui.label_subdued(&UI_TEXT.cp_resize_hint);
                });
            });
    }

    /// Chart container with its resize handle.
    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::both()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let (rect, _) =
                            ui.allocate_exact_size(self.container.to_vec2(), Sense::hover());
                        ui.painter()
                            .add(UI_CONFIG.chart_container_frame().paint(rect));
                        ui.scope_builder(UiBuilder::new().max_rect(rect), |ui| {
                            self.chart_view.show(ui);
                        });

                        if let Some(size) = self.resize.handle(ui, rect) {
                            self.handle_resize(size);
                        }
                    });
            });
    }

    pub(crate) fn render_awaiting_panel(&self, ctx: &Context) {
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                if hovering {
                    render_fullscreen_message(ui, &UI_TEXT.cp_drop_now, &UI_TEXT.tb_drop_hint);
                } else {
                    render_fullscreen_message(
                        ui,
                        &UI_TEXT.cp_awaiting_file,
                        &UI_TEXT.cp_awaiting_file_body,
                    );
                }
            });
    }
}

fn render_totals(ui: &mut Ui, totals: &SummaryTotals) {
    let lines = [
        (&UI_TEXT.sum_gains_before_fees, totals.daily_total),
        (&UI_TEXT.sum_misc_fees, totals.misc_fees_total),
        (&UI_TEXT.sum_commissions_fees, totals.commissions_fees_total),
        (&UI_TEXT.sum_gains_after_fees, totals.grand_total),
    ];
    for (label, value) in lines {
        ui.total_line(label, &format_currency(value), get_outcome_color(value));
    }
}

fn render_fullscreen_message(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(RichText::new(title).color(UI_CONFIG.colors.heading));
        ui.add_space(6.0);
        ui.label(RichText::new(subtitle).color(PLOT_CONFIG.color_text_neutral));
    });
}
