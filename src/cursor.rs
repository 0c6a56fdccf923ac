//! Horizontal threshold cursor.
//!
//! The cursor follows the pointer vertically while it is over the plot and
//! draws a single constant-y line there. There is no vertical line. When the
//! pointer leaves the plot the line is hidden but its last y is kept, so the
//! threshold sampled at the next release is the last hovered position.

use egui_plot::{HLine, PlotPoint, PlotUi};

use crate::data::trace_look::TraceLook;

#[derive(Debug, Clone)]
pub struct ThresholdCursor {
    y: f64,
    hovering: bool,
    pub look: TraceLook,
}

impl ThresholdCursor {
    /// Cursor parked at `initial_y` until the pointer first enters the plot.
    pub fn new(initial_y: f64, look: TraceLook) -> Self {
        Self {
            y: initial_y,
            hovering: false,
            look,
        }
    }

    /// Update from the pointer position in plot coordinates (`None` when outside the plot).
    pub fn track(&mut self, pointer: Option<PlotPoint>) {
        match pointer {
            Some(p) if p.y.is_finite() => {
                self.y = p.y;
                self.hovering = true;
            }
            _ => self.hovering = false,
        }
    }

    /// Current threshold in data coordinates.
    pub fn threshold(&self) -> f64 {
        self.y
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub(crate) fn draw(&self, plot_ui: &mut PlotUi) {
        if !self.hovering || !self.look.visible {
            return;
        }
        // empty name keeps the line out of the legend
        plot_ui.hline(
            HLine::new("", self.y)
                .color(self.look.color)
                .width(self.look.width)
                .style(self.look.style),
        );
    }
}
