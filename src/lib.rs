pub mod args;
pub mod collectors;
pub mod config;
pub mod error;
pub mod models;
pub mod renderer;
pub mod sampler;

use crate::collectors::{CounterSource, SystemCounters};
use crate::config::{AppConfig, MonitorConfig};
use crate::error::MonitorError;
use crate::models::Series;
use crate::renderer::{ChartOutput, PngChart};
use anyhow::Context;
use humansize::{format_size, BINARY};
use log::{info, warn};

/// Samples the configured interface, then renders the series if anything
/// was captured.
///
/// Rendering is skipped entirely when the interface is missing at the start
/// or no sample was taken. A mid-run loss is logged and the partial series
/// is still rendered.
pub async fn monitor<S, C>(
    source: &S,
    chart: &mut C,
    settings: &MonitorConfig,
) -> Result<Series, MonitorError>
where
    S: CounterSource + ?Sized,
    C: ChartOutput + ?Sized,
{
    info!(
        "Monitoring {} for {} s, sampling every {} s",
        settings.interface, settings.duration, settings.interval
    );

    let run = sampler::sample(
        source,
        &settings.interface,
        settings.duration,
        settings.interval,
    )
    .await?;

    if let Some(lost) = run.lost() {
        warn!("{}", lost);
    }

    let series = run.into_series()?;
    info!(
        "Captured {} samples on {}: peak {:.2} Mbits/sec, mean {:.2} Mbits/sec, {} transferred",
        series.len(),
        series.interface(),
        series.peak_mbps().unwrap_or(0.0),
        series.mean_mbps().unwrap_or(0.0),
        format_size(series.transferred_bytes(), BINARY)
    );

    chart.render(&series)?;
    Ok(series)
}

/// Runs one monitoring session against the OS counters and writes the chart.
pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    config.validate()?;
    let source = SystemCounters::new();
    let mut chart = PngChart::new(config.chart.clone());

    monitor(&source, &mut chart, &config.monitor)
        .await
        .context(format!("Monitoring {} failed", config.monitor.interface))?;

    info!("Monitoring completed successfully");
    Ok(())
}

/// Interfaces the OS currently reports, sorted by name.
pub fn interfaces() -> Vec<String> {
    let mut names = SystemCounters::new().interfaces();
    names.sort();
    names
}
