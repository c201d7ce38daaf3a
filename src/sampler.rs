use log::debug;
use std::time::{Duration, Instant};

use crate::collectors::CounterSource;
use crate::error::MonitorError;
use crate::models::series::MEBIBYTE;
use crate::models::{Completion, CounterSnapshot, Sample, SampleRun, Series};

/// Bandwidth between two consecutive snapshots, in mebibytes per second
/// summed over both directions. Displayed as "Mbits/sec" for compatibility
/// with existing charts.
pub fn bandwidth_mbps(previous: &CounterSnapshot, current: &CounterSnapshot, interval_secs: u64) -> f64 {
    let (sent_delta, recv_delta) = current.delta_since(previous);
    let divisor = interval_secs as f64 * MEBIBYTE;
    let sent_bw = sent_delta as f64 / divisor;
    let recv_bw = recv_delta as f64 / divisor;
    sent_bw + recv_bw
}

/// Polls `interface` every `interval_secs` until `duration_secs` have been
/// covered, yielding one sample per interval.
///
/// Fails with [`MonitorError::ZeroInterval`] for a zero interval and with
/// [`MonitorError::InterfaceNotFound`] without waiting if the interface is
/// absent at the start. If it disappears later the partial series is
/// returned with [`Completion::InterfaceLost`].
pub async fn sample<S>(
    source: &S,
    interface: &str,
    duration_secs: u64,
    interval_secs: u64,
) -> Result<SampleRun, MonitorError>
where
    S: CounterSource + ?Sized,
{
    let start = Instant::now();
    if interval_secs == 0 {
        return Err(MonitorError::ZeroInterval);
    }

    let mut previous = source
        .snapshot(interface)
        .ok_or_else(|| MonitorError::InterfaceNotFound {
            interface: interface.to_string(),
            available: source.interfaces(),
        })?;

    let mut series = Series::new(interface, interval_secs);
    let mut completion = Completion::Finished;
    let step = usize::try_from(interval_secs).unwrap_or(usize::MAX);

    for t in (0..duration_secs).step_by(step) {
        let Some(current) = source.snapshot(interface) else {
            debug!("Interface {} vanished at t={}s", interface, t);
            completion = Completion::InterfaceLost;
            break;
        };

        let bandwidth = bandwidth_mbps(&previous, &current, interval_secs);
        debug!("t={}s {} {:.3} Mbits/sec", t, interface, bandwidth);
        series.push(Sample {
            time_offset_secs: t,
            bandwidth_mbps: bandwidth,
        });
        previous = current;

        tokio::time::sleep(Duration::from_secs(interval_secs)).await;
    }

    debug!("sample took: {} ms", start.elapsed().as_millis());
    Ok(SampleRun {
        series,
        completion,
    })
}
