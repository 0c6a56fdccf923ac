//! Central plot: the three channel curves, the threshold cursor, and
//! detection of pointer button releases over the canvas.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotResponse, PlotTransform};

use super::CounterApp;

impl CounterApp {
    /// Render the central plot inside the default central panel and apply interactions.
    ///
    /// The whole central panel is the canvas: a release anywhere on it counts,
    /// margins around the plot frame included.
    pub(super) fn render_central_plot_panel(&mut self, ctx: &egui::Context) -> PlotTransform {
        let panel = egui::CentralPanel::default().show(ctx, |ui| self.plot_channels(ui));
        self.handle_release(ctx, panel.response.rect);
        panel.inner.transform
    }

    fn plot_channels(&mut self, ui: &mut egui::Ui) -> PlotResponse<()> {
        // Primary drag must not pan: it belongs to the threshold cursor.
        let mut plot = Plot::new("crossing_plot")
            .allow_drag(false)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_boxed_zoom(true);
        if self.show_legend {
            plot = plot.legend(Legend::default());
        }

        let series = &self.series;
        let cursor = &mut self.cursor;
        plot.show(ui, |plot_ui| {
            for s in series.iter().filter(|s| s.look.visible) {
                let line = Line::new(s.name.as_str(), s.points.clone())
                    .color(s.look.color)
                    .width(s.look.width.max(0.1))
                    .style(s.look.style);
                plot_ui.line(line);
            }
            cursor.track(plot_ui.pointer_coordinate());
            cursor.draw(plot_ui);
        })
    }

    /// Any pointer button released inside `canvas` triggers a count.
    fn handle_release(&mut self, ctx: &egui::Context, canvas: egui::Rect) {
        let (released, pos) = ctx.input(|i| (i.pointer.any_released(), i.pointer.interact_pos()));
        if released && pos.is_some_and(|p| canvas.contains(p)) {
            self.on_button_release();
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{self, Event, Modifiers, PointerButton, Pos2, RawInput, Rect};
    use egui_plot::PlotTransform;

    use crate::app::CounterApp;
    use crate::config::CounterConfig;
    use crate::data::table::Table;

    fn scenario_app() -> CounterApp {
        let t: Table = "time\tA\tB\tC\n\
                        0\t0\t0\t0\n\
                        1000\t5\t0\t0\n\
                        2000\t-5\t0\t0\n\
                        3000\t5\t0\t0\n\
                        6000\t-5\t0\t0\n\
                        7000\t5\t0\t0\n"
            .parse()
            .unwrap();
        CounterApp::new(t, &CounterConfig::default())
    }

    fn frame(ctx: &egui::Context, app: &mut CounterApp, events: Vec<Event>) -> PlotTransform {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0))),
            events,
            ..Default::default()
        };
        let mut transform = None;
        let _ = ctx.run(input, |ctx| {
            transform = Some(app.render_central_plot_panel(ctx));
        });
        transform.unwrap()
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// Lay out the plot and hover `pos` until bounds and hover state settle.
    fn hover(ctx: &egui::Context, app: &mut CounterApp, pos: Pos2) -> PlotTransform {
        frame(ctx, app, vec![]);
        frame(ctx, app, vec![]);
        let mut transform = frame(ctx, app, vec![Event::PointerMoved(pos)]);
        for _ in 0..3 {
            transform = frame(ctx, app, vec![]);
        }
        transform
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-9 * b.abs().max(1.0), "{a} != {b}");
    }

    #[test]
    fn release_over_plot_counts_at_pointer_y() {
        let ctx = egui::Context::default();
        let mut app = scenario_app();
        let pos = Pos2::new(400.0, 300.0);
        let transform = hover(&ctx, &mut app, pos);
        let expected_y = transform.value_from_position(pos).y;
        assert!(app.cursor().is_hovering());

        frame(&ctx, &mut app, vec![button(pos, true)]);
        assert!(app.last_report().is_none());
        frame(&ctx, &mut app, vec![button(pos, false)]);

        let report = app.last_report().cloned().unwrap();
        assert_close(report.threshold, expected_y);
        assert_close(app.cursor().threshold(), expected_y);
        assert_eq!(report.window_len, 3);
    }

    #[test]
    fn release_in_panel_margin_still_counts() {
        let ctx = egui::Context::default();
        let mut app = scenario_app();
        let on_plot = Pos2::new(400.0, 300.0);
        let transform = hover(&ctx, &mut app, on_plot);
        let expected_y = transform.value_from_position(on_plot).y;

        let margin = Pos2::new(2.0, 2.0);
        frame(&ctx, &mut app, vec![Event::PointerMoved(margin)]);
        frame(&ctx, &mut app, vec![button(margin, true)]);
        frame(&ctx, &mut app, vec![button(margin, false)]);

        let report = app.last_report().cloned().unwrap();
        assert!(!app.cursor().is_hovering());
        assert_close(report.threshold, expected_y);
    }

    #[test]
    fn pointer_motion_alone_does_not_count() {
        let ctx = egui::Context::default();
        let mut app = scenario_app();
        hover(&ctx, &mut app, Pos2::new(300.0, 200.0));
        frame(&ctx, &mut app, vec![Event::PointerMoved(Pos2::new(500.0, 400.0))]);
        assert!(app.last_report().is_none());
    }
}
