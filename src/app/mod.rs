//! Application context for the crossing counter window.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`update`] | Per-frame rendering: status strip and central plot |
//! | [`plot`]   | Channel curves, threshold cursor and release detection |
//! | [`run`]    | Top-level [`run_counter()`] entry point and icon loading |
//!
//! [`CounterApp`] owns everything the release handler needs (the table, the
//! cursor, the counter settings) so nothing lives in globals.

mod plot;
mod run;
mod update;

pub use run::run_counter;

use crate::config::CounterConfig;
use crate::cursor::ThresholdCursor;
use crate::data::crossings::{
    recent_window, window_start, CrossingCounter, CrossingReport, WindowDump,
};
use crate::data::table::{Table, CHANNELS};
use crate::data::trace_look::TraceLook;

/// One plotted channel: its legend label, points and look.
pub(crate) struct ChannelSeries {
    pub(crate) name: String,
    pub(crate) points: Vec<[f64; 2]>,
    pub(crate) look: TraceLook,
}

pub struct CounterApp {
    table: Table,
    pub(crate) series: Vec<ChannelSeries>,
    pub(crate) cursor: ThresholdCursor,
    counter: CrossingCounter,
    pub(crate) show_legend: bool,
    last_report: Option<CrossingReport>,
}

impl CounterApp {
    pub fn new(table: Table, cfg: &CounterConfig) -> Self {
        let series = CHANNELS
            .iter()
            .enumerate()
            .map(|(i, &column)| ChannelSeries {
                name: table.name(column).to_string(),
                points: table.channel_points(column),
                look: TraceLook::new(i),
            })
            .collect();
        let cursor = ThresholdCursor::new(
            table.channel_min().unwrap_or(0.0),
            TraceLook::solid(cfg.cursor_color32(), 1.0),
        );
        Self {
            table,
            series,
            cursor,
            counter: CrossingCounter::new(cfg.window, cfg.rate_divisor),
            show_legend: cfg.show_legend,
            last_report: None,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn cursor(&self) -> &ThresholdCursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut ThresholdCursor {
        &mut self.cursor
    }

    /// Result of the most recent release, if any.
    pub fn last_report(&self) -> Option<&CrossingReport> {
        self.last_report.as_ref()
    }

    /// Pointer button released over the canvas: count crossings at the current threshold.
    ///
    /// Prints the full table, the recent window with its length, and the
    /// `"{rate} {count}"` line to stdout.
    pub fn on_button_release(&mut self) -> CrossingReport {
        let window = recent_window(&self.table, self.counter.window);
        let report = self.counter.evaluate_rows(
            &window,
            window_start(&self.table, self.counter.window),
            self.cursor.threshold(),
        );

        print!("{}", self.release_output(&window, &report));
        log::info!(
            "threshold {:.6}: {} crossings in {} rows, rate {}",
            report.threshold,
            report.count,
            report.window_len,
            report.rate
        );

        self.last_report = Some(report.clone());
        report
    }

    /// Full table, recent window rows and length, then the `"{rate} {count}"` line.
    fn release_output(&self, window: &[&[f64]], report: &CrossingReport) -> String {
        format!(
            "{}{}{} rows in recent window\n{}\n",
            self.table,
            WindowDump(window),
            window.len(),
            report
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_WINDOW;

    #[test]
    fn release_output_dumps_table_window_and_result() {
        let t: Table = "time\tA\tB\tC\n0\t-1\t0\t0\n6000\t-1\t0\t0\n7000\t1\t0\t0\n"
            .parse()
            .unwrap();
        let mut app = CounterApp::new(t, &CounterConfig::default());
        app.cursor_mut()
            .track(Some(egui_plot::PlotPoint::new(0.0, 0.0)));
        let report = app.on_button_release();
        let window = recent_window(app.table(), DEFAULT_WINDOW);

        let out = app.release_output(&window, &report);
        assert_eq!(
            out,
            "time\tA\tB\tC\n0\t-1\t0\t0\n6000\t-1\t0\t0\n7000\t1\t0\t0\n\
             6000\t-1\t0\t0\n7000\t1\t0\t0\n\
             2 rows in recent window\n\
             0 1\n"
        );
    }
}
