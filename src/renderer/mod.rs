use crate::error::MonitorError;
use crate::models::Series;

pub(crate) mod chart;
pub(crate) mod colours;
pub(crate) mod drawing;
pub(crate) mod fonts;

pub use chart::PngChart;

/// Destination for a finished series.
pub trait ChartOutput {
    fn render(&mut self, series: &Series) -> Result<(), MonitorError>;
}
