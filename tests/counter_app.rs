use crossing_counter::{CounterApp, CounterConfig, PlotPoint, Table};

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

#[test]
fn cursor_starts_at_lowest_channel_value() {
    let app = scenario_app();
    assert_eq!(app.cursor().threshold(), -5.0);
    assert!(!app.cursor().is_hovering());
    assert!(app.last_report().is_none());
}

#[test]
fn release_counts_at_cursor_threshold() {
    let mut app = scenario_app();
    app.cursor_mut().track(Some(PlotPoint::new(4000.0, 0.0)));
    let report = app.on_button_release();
    assert_eq!(report.threshold, 0.0);
    assert_eq!(report.window_len, 3);
    assert_eq!(report.count, 1);
    assert_eq!(report.rate, 0);
    assert_eq!(app.last_report(), Some(&report));
}

#[test]
fn cursor_keeps_last_y_after_pointer_leaves() {
    let mut app = scenario_app();
    app.cursor_mut().track(Some(PlotPoint::new(0.0, 10.0)));
    app.cursor_mut().track(None);
    assert!(!app.cursor().is_hovering());
    assert_eq!(app.cursor().threshold(), 10.0);
    assert_eq!(app.on_button_release().count, 0);
}

#[test]
fn each_release_recomputes() {
    let mut app = scenario_app();
    app.cursor_mut().track(Some(PlotPoint::new(0.0, 100.0)));
    assert_eq!(app.on_button_release().count, 0);
    app.cursor_mut().track(Some(PlotPoint::new(0.0, -1.0)));
    assert_eq!(app.on_button_release().count, 1);
}

#[test]
fn empty_table_release_does_not_panic() {
    let t: Table = "time\tA\tB\tC\n".parse().unwrap();
    let mut app = CounterApp::new(t, &CounterConfig::default());
    assert_eq!(app.cursor().threshold(), 0.0);
    let report = app.on_button_release();
    assert_eq!(report.count, 0);
    assert_eq!(report.window_start, None);
}

#[test]
fn config_window_and_divisor_are_used() {
    let t: Table = "time\tA\tB\tC\n0\t-1\t0\t0\n1\t1\t0\t0\n2\t-1\t0\t0\n3\t1\t0\t0\n"
        .parse()
        .unwrap();
    let mut cfg = CounterConfig::default();
    cfg.window = 1.5;
    cfg.rate_divisor = 1;
    let mut app = CounterApp::new(t, &cfg);
    app.cursor_mut().track(Some(PlotPoint::new(0.0, 0.0)));
    let report = app.on_button_release();
    // rows at t = 2, 3
    assert_eq!(report.window_len, 2);
    assert_eq!(report.count, 1);
    assert_eq!(report.rate, 1);
}
