use {
    crate::config::{CHART, DF, PLOT_CONFIG},
    eframe::egui::{Color32, CursorIcon, Id, Pos2, Rect, Sense, Stroke, Ui, Vec2},
    serde::{Deserialize, Serialize},
};

/// Size of the chart container. Persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ContainerSize {
    fn default() -> Self {
        Self {
            width: CHART.default_width,
            height: CHART.default_height,
        }
    }
}

impl ContainerSize {
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn font_size(self) -> f32 {
        CHART.font_size_for_height(self.height)
    }

    /// Size implied by dragging the handle to `pointer` for a container anchored at `origin`.
    /// `None` unless both sides would exceed the minimum.
    pub fn from_drag(origin: Pos2, pointer: Pos2) -> Option<Self> {
        let width = pointer.x - origin.x;
        let height = pointer.y - origin.y;
        (width > CHART.min_container_px && height > CHART.min_container_px)
            .then_some(Self { width, height })
    }
}

/// Drag state for the bottom-right handle.
#[derive(Debug, Default)]
pub struct ResizeState {
    is_resizing: bool,
}

impl ResizeState {
    pub fn is_resizing(&self) -> bool {
        self.is_resizing
    }

    /// Draws the handle on the corner of `container` and tracks the drag.
    /// Returns the new size for every pointer move that passes the minimum check.
    pub fn handle(&mut self, ui: &mut Ui, container: Rect) -> Option<ContainerSize> {
        let size = Vec2::splat(CHART.handle_size);
        let handle_rect = Rect::from_min_size(container.right_bottom() - size, size);
        let response = ui.interact(handle_rect, Id::new("chart_resize_handle"), Sense::drag());

        if response.drag_started() {
            self.is_resizing = true;
        }
        if response.drag_stopped() {
            self.is_resizing = false;
        }
        if response.hovered() || self.is_resizing {
            ui.ctx().set_cursor_icon(CursorIcon::ResizeNwSe);
        }

        let color = if self.is_resizing || response.hovered() {
            PLOT_CONFIG.color_resize_handle_active
        } else {
            PLOT_CONFIG.color_resize_handle
        };
        paint_grip(ui, handle_rect, color);

        if !self.is_resizing {
            return None;
        }
        let pointer = response.interact_pointer_pos()?;
        let proposed = ContainerSize::from_drag(container.left_top(), pointer);
        if DF.log_resize {
            match proposed {
                Some(s) => log::info!(
                    "Resize to {:.0}x{:.0} (font {:.1}px)",
                    s.width,
                    s.height,
                    s.font_size()
                ),
                None => log::debug!("Resize ignored: pointer too close to container origin"),
            }
        }
        proposed
    }
}

// Three diagonal strokes, like a window grip.
fn paint_grip(ui: &Ui, rect: Rect, color: Color32) {
    let painter = ui.painter();
    let stroke = Stroke::new(1.5, color);
    let corner = rect.right_bottom();
    for step in 1..=3 {
        let offset = rect.width() * step as f32 / 3.0;
        painter.line_segment(
            [
                Pos2::new(corner.x - offset, corner.y),
                Pos2::new(corner.x, corner.y - offset),
            ],
            stroke,
        );
    }
}
