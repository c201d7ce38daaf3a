use crate::error::MonitorError;

/// Bytes in one mebibyte; the divisor used for every bandwidth figure.
pub const MEBIBYTE: f64 = 1_048_576.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time_offset_secs: u64,
    pub bandwidth_mbps: f64,
}

/// Samples from one monitoring run, in time order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    interface: String,
    interval_secs: u64,
    samples: Vec<Sample>,
}

impl Series {
    pub fn new(interface: &str, interval_secs: u64) -> Self {
        Self {
            interface: interface.to_string(),
            interval_secs,
            samples: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, sample: Sample) {
        debug_assert!(self
            .samples
            .last()
            .map_or(true, |last| last.time_offset_secs < sample.time_offset_secs));
        self.samples.push(sample);
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn time_offsets(&self) -> Vec<f64> {
        self.samples
            .iter()
            .map(|s| s.time_offset_secs as f64)
            .collect()
    }

    pub fn bandwidths(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.bandwidth_mbps).collect()
    }

    pub fn peak_mbps(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|s| s.bandwidth_mbps)
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }

    pub fn mean_mbps(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let total: f64 = self.samples.iter().map(|s| s.bandwidth_mbps).sum();
        Some(total / self.samples.len() as f64)
    }

    /// Estimated bytes moved in both directions over the run. Negative
    /// intervals (counter resets) count as zero.
    pub fn transferred_bytes(&self) -> u64 {
        let bytes: f64 = self
            .samples
            .iter()
            .map(|s| s.bandwidth_mbps.max(0.0) * self.interval_secs as f64 * MEBIBYTE)
            .sum();
        bytes.round() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Every scheduled interval was sampled.
    Finished,
    /// The interface disappeared before the duration elapsed.
    InterfaceLost,
}

#[derive(Debug, Clone)]
pub struct SampleRun {
    pub series: Series,
    pub completion: Completion,
}

impl SampleRun {
    /// The mid-run loss as an error value, if the run was cut short.
    pub fn lost(&self) -> Option<MonitorError> {
        match self.completion {
            Completion::Finished => None,
            Completion::InterfaceLost => Some(MonitorError::InterfaceLost {
                interface: self.series.interface().to_string(),
                samples: self.series.len(),
            }),
        }
    }

    /// Hands over the series, or `EmptyResult` when nothing was captured.
    pub fn into_series(self) -> Result<Series, MonitorError> {
        if self.series.is_empty() {
            return Err(MonitorError::EmptyResult);
        }
        Ok(self.series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_of(values: &[f64]) -> Series {
        let mut series = Series::new("eth0", 2);
        for (i, v) in values.iter().enumerate() {
            series.push(Sample {
                time_offset_secs: i as u64 * 2,
                bandwidth_mbps: *v,
            });
        }
        series
    }

    #[test]
    fn test_statistics() {
        let series = series_of(&[1.0, 3.0, 2.0]);
        assert_eq!(series.peak_mbps(), Some(3.0));
        assert_eq!(series.mean_mbps(), Some(2.0));
        assert_eq!(series.transferred_bytes(), 6 * 2 * 1_048_576);
        assert_eq!(series.time_offsets(), vec![0.0, 2.0, 4.0]);
        assert_eq!(series.bandwidths(), vec![1.0, 3.0, 2.0]);
    }

    #[test]
    fn test_statistics_empty() {
        let series = series_of(&[]);
        assert_eq!(series.peak_mbps(), None);
        assert_eq!(series.mean_mbps(), None);
        assert_eq!(series.transferred_bytes(), 0);
    }

    #[test]
    fn test_negative_rates_do_not_count_as_traffic() {
        let series = series_of(&[-4.0, 1.0]);
        assert_eq!(series.peak_mbps(), Some(1.0));
        assert_eq!(series.transferred_bytes(), 2 * 1_048_576);
    }

    #[test]
    fn test_into_series_empty() {
        let run = SampleRun {
            series: series_of(&[]),
            completion: Completion::InterfaceLost,
        };
        assert!(matches!(run.lost(), Some(MonitorError::InterfaceLost { samples: 0, .. })));
        assert!(matches!(run.into_series(), Err(MonitorError::EmptyResult)));
    }

    #[test]
    fn test_into_series_finished() {
        let run = SampleRun {
            series: series_of(&[0.5]),
            completion: Completion::Finished,
        };
        assert!(run.lost().is_none());
        assert_eq!(run.into_series().unwrap().len(), 1);
    }
}
