use chrono::Local;
use image::RgbaImage;
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

use crate::config::ChartConfig;
use crate::error::MonitorError;
use crate::models::Series;
use crate::renderer::colours::Colours;
use crate::renderer::{drawing, fonts, ChartOutput};

const MARGIN_LEFT: u32 = 90;
const MARGIN_RIGHT: u32 = 30;
const MARGIN_TOP: u32 = 70;
const MARGIN_BOTTOM: u32 = 80;
const MARKER_RADIUS: i32 = 4;

pub const MIN_WIDTH: u32 = 320;
pub const MIN_HEIGHT: u32 = 240;

/// Rounds `raw` up to 1, 2 or 5 times a power of ten.
pub(crate) fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Axis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Axis {
    /// An axis covering `min..=max` and zero, snapped to whole tick steps.
    pub fn covering(min: f64, max: f64, ticks: u32, min_step: f64) -> Self {
        let mut lo = min.min(0.0);
        let mut hi = max.max(0.0);
        if hi - lo < f64::EPSILON {
            hi = lo + 1.0;
        }
        let step = nice_step((hi - lo) / ticks as f64).max(min_step);
        lo = (lo / step).floor() * step;
        hi = (hi / step).ceil() * step;
        Self { min: lo, max: hi, step }
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as u32;
        (0..=count).map(|k| self.min + k as f64 * self.step).collect()
    }

    fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

/// Formats a tick with as many decimals as the step needs to tell ticks apart.
fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()).max(0.0) as usize
    };
    format!("{:.*}", decimals, value)
}

/// Pixel geometry of the plot area for one series.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Plot {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub x: Axis,
    pub y: Axis,
}

impl Plot {
    pub fn new(width: u32, height: u32, series: &Series) -> Self {
        let offsets = series.time_offsets();
        let bandwidths = series.bandwidths();

        let x_max = offsets
            .last()
            .copied()
            .unwrap_or(0.0)
            .max(series.interval_secs() as f64);
        let y_min = bandwidths.iter().copied().fold(0.0, f64::min);
        let y_max = bandwidths.iter().copied().fold(0.0, f64::max);

        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            right: width.saturating_sub(MARGIN_RIGHT),
            bottom: height.saturating_sub(MARGIN_BOTTOM),
            x: Axis::covering(0.0, x_max, 8, 1.0),
            y: Axis::covering(y_min, y_max, 5, 0.0),
        }
    }

    pub fn to_pixel(&self, time: f64, bandwidth: f64) -> (f32, f32) {
        let px = self.left as f64 + self.x.fraction(time) * (self.right - self.left) as f64;
        let py = self.bottom as f64 - self.y.fraction(bandwidth) * (self.bottom - self.top) as f64;
        (px as f32, py as f32)
    }
}

/// Line chart of a series written to a PNG file.
pub struct PngChart {
    config: ChartConfig,
}

impl PngChart {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        Path::new(&self.config.file)
    }

    pub fn draw(&self, series: &Series) -> Result<RgbaImage, MonitorError> {
        let start = Instant::now();
        let width = self.config.width;
        let height = self.config.height;
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(MonitorError::ChartTooSmall {
                width,
                height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }
        let colours = Colours::default();
        let fc_title = fonts::title_font_config()?;
        let fc_regular = fonts::regular_font_config()?;
        let fc_small = fonts::small_font_config()?;

        let mut image = RgbaImage::new(width, height);
        drawing::fill(&mut image, colours.background);

        let plot = Plot::new(width, height, series);

        // Grid and tick labels
        for tick in plot.y.ticks() {
            let (_, py) = plot.to_pixel(plot.x.min, tick);
            let py = py.round() as u32;
            drawing::horizontal_line(&mut image, plot.left, plot.right, py, colours.grid);
            drawing::right_aligned_text(
                &mut image,
                colours.text,
                plot.left as i32 - 8,
                py as i32 - 8,
                &fc_small,
                &format_tick(tick, plot.y.step),
            );
        }
        for tick in plot.x.ticks() {
            let (px, _) = plot.to_pixel(tick, plot.y.min);
            let px = px.round() as u32;
            drawing::vertical_line(&mut image, px, plot.top, plot.bottom, colours.grid);
            drawing::centred_text(
                &mut image,
                colours.text,
                px as i32,
                plot.bottom as i32 + 6,
                &fc_small,
                &format_tick(tick, plot.x.step),
            );
        }
        drawing::frame(
            &mut image,
            plot.left as i32,
            plot.top as i32,
            plot.right - plot.left + 1,
            plot.bottom - plot.top + 1,
            colours.axis,
        );

        // Bandwidth line, then a marker on every sample
        let points: Vec<(f32, f32)> = series
            .samples()
            .iter()
            .map(|s| plot.to_pixel(s.time_offset_secs as f64, s.bandwidth_mbps))
            .collect();
        for pair in points.windows(2) {
            drawing::segment(&mut image, pair[0], pair[1], colours.line);
        }
        for point in &points {
            drawing::marker(&mut image, *point, MARKER_RADIUS, colours.marker);
        }

        // Labels
        drawing::centred_text(
            &mut image,
            colours.title,
            (width / 2) as i32,
            12,
            &fc_title,
            &self.config.title,
        );
        drawing::text(
            &mut image,
            colours.text,
            10,
            plot.top as i32 - 28,
            &fc_regular,
            &self.config.y_label,
        );
        drawing::centred_text(
            &mut image,
            colours.text,
            ((plot.left + plot.right) / 2) as i32,
            plot.bottom as i32 + 28,
            &fc_regular,
            &self.config.x_label,
        );

        let footer = format!(
            "{} | every {} s | peak {:.2} | mean {:.2} | {}",
            series.interface(),
            series.interval_secs(),
            series.peak_mbps().unwrap_or(0.0),
            series.mean_mbps().unwrap_or(0.0),
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        drawing::text(
            &mut image,
            colours.footer,
            10,
            height as i32 - 22,
            &fc_small,
            &footer,
        );

        debug!("draw took: {} ms", start.elapsed().as_millis());
        Ok(image)
    }
}

impl ChartOutput for PngChart {
    fn render(&mut self, series: &Series) -> Result<(), MonitorError> {
        if series.is_empty() {
            return Err(MonitorError::EmptyResult);
        }
        let image = self.draw(series)?;
        image
            .save(self.path())
            .map_err(|source| MonitorError::Render {
                path: self.config.file.clone(),
                source,
            })?;
        info!("Chart saved to {}", self.config.file);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sample;
    use image::GenericImageView;

    fn series_of(values: &[f64]) -> Series {
        let mut series = Series::new("eth0", 1);
        for (i, v) in values.iter().enumerate() {
            series.push(Sample {
                time_offset_secs: i as u64,
                bandwidth_mbps: *v,
            });
        }
        series
    }

    fn chart_in(dir: &Path) -> PngChart {
        PngChart::new(ChartConfig {
            file: dir.join("chart.png").to_string_lossy().into_owned(),
            ..ChartConfig::default()
        })
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(0.0), 1.0);
        assert_eq!(nice_step(0.7), 1.0);
        assert_eq!(nice_step(1.5), 2.0);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(7.0), 10.0);
        assert_eq!(nice_step(30.0), 50.0);
    }

    #[test]
    fn test_axis_covers_values_and_zero() {
        let axis = Axis::covering(0.3, 4.2, 5, 0.0);
        assert_eq!(axis.min, 0.0);
        assert!(axis.max >= 4.2);
        assert_eq!(axis.ticks().first(), Some(&0.0));

        let axis = Axis::covering(-1.5, 2.0, 5, 0.0);
        assert!(axis.min <= -1.5);
        assert!(axis.ticks().iter().any(|t| t.abs() < 1e-9));
    }

    #[test]
    fn test_flat_series_gets_unit_range() {
        let axis = Axis::covering(0.0, 0.0, 5, 0.0);
        assert_eq!(axis.min, 0.0);
        assert!((axis.max - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_time_axis_uses_whole_seconds() {
        let axis = Axis::covering(0.0, 3.0, 8, 1.0);
        assert_eq!(axis.step, 1.0);
        assert_eq!(axis.ticks(), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(10.0, 5.0), "10");
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(0.05, 0.05), "0.05");
        assert_eq!(format_tick(0.003, 0.001), "0.003");
    }

    #[test]
    fn test_idle_interface_ticks_are_distinct() {
        let series = series_of(&[0.002, 0.004, 0.001]);
        let plot = Plot::new(800, 480, &series);

        let labels: Vec<String> = plot
            .y
            .ticks()
            .iter()
            .map(|t| format_tick(*t, plot.y.step))
            .collect();
        let distinct: std::collections::HashSet<&String> = labels.iter().collect();

        assert!(labels.len() > 1);
        assert_eq!(distinct.len(), labels.len(), "labels: {labels:?}");
    }

    #[test]
    fn test_small_chart_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut chart = PngChart::new(ChartConfig {
            file: dir.path().join("tiny.png").to_string_lossy().into_owned(),
            width: 100,
            height: 100,
            ..ChartConfig::default()
        });
        let series = series_of(&[1.0]);

        assert!(matches!(
            chart.draw(&series),
            Err(MonitorError::ChartTooSmall { width: 100, height: 100, .. })
        ));
        assert!(matches!(chart.render(&series), Err(MonitorError::ChartTooSmall { .. })));
        assert!(!chart.path().exists());
    }

    #[test]
    fn test_draw_places_markers_on_samples() {
        let dir = tempfile::tempdir().unwrap();
        let chart = chart_in(dir.path());
        let series = series_of(&[0.5, 2.0, 1.0, 3.5]);

        let image = chart.draw(&series).unwrap();
        assert_eq!(image.dimensions(), (800, 480));

        let plot = Plot::new(800, 480, &series);
        let marker = Colours::default().marker;
        for s in series.samples() {
            let (px, py) = plot.to_pixel(s.time_offset_secs as f64, s.bandwidth_mbps);
            assert_eq!(*image.get_pixel(px.round() as u32, py.round() as u32), marker);
        }
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut chart = chart_in(dir.path());

        chart.render(&series_of(&[1.0, 0.25])).unwrap();

        let written = image::open(chart.path()).unwrap();
        assert_eq!(written.dimensions(), (800, 480));
    }

    #[test]
    fn test_render_rejects_empty_series() {
        let dir = tempfile::tempdir().unwrap();
        let mut chart = chart_in(dir.path());

        let result = chart.render(&series_of(&[]));

        assert!(matches!(result, Err(MonitorError::EmptyResult)));
        assert!(!chart.path().exists());
    }
}
