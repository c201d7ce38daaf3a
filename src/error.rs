use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Interface {interface} not found (available: {})", .available.join(", "))]
    InterfaceNotFound {
        interface: String,
        available: Vec<String>,
    },
    #[error("Interface {interface} not found during monitoring, kept {samples} samples")]
    InterfaceLost { interface: String, samples: usize },
    #[error("Failed to capture network traffic data")]
    EmptyResult,
    #[error("Sampling interval must be at least one second")]
    ZeroInterval,
    #[error("Chart size {width}x{height} is too small (minimum {min_width}x{min_height})")]
    ChartTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
    #[error("Failed to write chart to {path}")]
    Render {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to load chart font")]
    Font,
}
