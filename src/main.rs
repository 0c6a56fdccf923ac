use std::path::Path;

use anyhow::{Context, Result};
use env_logger::Env;

use crossing_counter::data::crossings::window_start;
use crossing_counter::{run_counter, CounterConfig, Table};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cfg = CounterConfig::load_or_default(Path::new("."))
        .context("failed to load crossing counter config")?;

    let table = Table::load(&cfg.data_path)
        .with_context(|| format!("failed to load recording {:?}", cfg.data_path))?;
    log::info!(
        "loaded {} rows with columns {:?} from {:?}",
        table.len(),
        table.names(),
        cfg.data_path
    );

    if let Some(row) = table.row(1) {
        log::info!("second row: {:?}", row);
    }
    if let Some(i) = table.first_time_regression() {
        log::warn!(
            "time decreases at row {}; the recent window still selects rows by time",
            i
        );
    }
    if let Some(start) = window_start(&table, cfg.window) {
        log::info!(
            "rows before the recent window (time < {}): {:?}",
            start,
            table.indices_before(start)
        );
    }

    run_counter(table, cfg)?;
    Ok(())
}
