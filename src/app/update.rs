//! Per-frame update for [`CounterApp`].

use eframe::egui;
use egui_phosphor::regular::{CHART_LINE_UP, CROSSHAIR};

use super::CounterApp;

impl eframe::App for CounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Bottom strip first so the central plot takes the remaining space.
        self.render_status_bar(ctx);
        self.render_central_plot_panel(ctx);
    }
}

impl CounterApp {
    fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} threshold {:.4}",
                    CROSSHAIR,
                    self.cursor.threshold()
                ));
                ui.separator();
                match self.last_report() {
                    Some(r) => {
                        ui.label(format!(
                            "{} {} crossings in {} rows, rate {}",
                            CHART_LINE_UP, r.count, r.window_len, r.rate
                        ));
                    }
                    None => {
                        ui.weak("release a mouse button over the plot to count crossings");
                    }
                }
            });
        });
    }
}
