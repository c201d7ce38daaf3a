use anyhow::{bail, Context, Result};
use config::{Config, File, FileFormat};
use log::{debug, info, LevelFilter};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::renderer::chart::{MIN_HEIGHT, MIN_WIDTH};

pub const DEFAULT_CONFIG_FILE: &str = "netbw.ini";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MonitorConfig {
    pub interface: String,
    pub duration: u64,
    pub interval: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interface: "eth0".to_string(),
            duration: 30,
            interval: 1,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChartConfig {
    pub file: String,
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            file: "bandwidth.png".to_string(),
            width: 800,
            height: 480,
            title: "Network Traffic Monitoring".to_string(),
            x_label: "Time (s)".to_string(),
            y_label: "Bandwidth (Mbits/sec)".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(rename = "MONITOR", alias = "monitor", default)]
    pub monitor: MonitorConfig,
    #[serde(rename = "CHART", alias = "chart", default)]
    pub chart: ChartConfig,
    #[serde(rename = "LOGGING", alias = "logging", default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads `netbw.ini` from the working directory, or defaults if it is absent.
    pub fn new() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE, false)
    }

    pub fn get_log_level(&self) -> LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info, // Default to Info if invalid
        }
    }

    /// Loads the file named on the command line, which must exist and parse.
    /// Without one, a broken `netbw.ini` falls back to the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Ok(Self::new().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {:#}", e);
                Self::default()
            })),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(path, true)
    }

    fn load<P: AsRef<Path>>(path: P, required: bool) -> Result<Self> {
        let config_path = path.as_ref();
        debug!("Loading configuration from {}", config_path.display());

        let config = Config::builder()
            .add_source(
                File::from(config_path)
                    .format(FileFormat::Ini)
                    .required(required),
            )
            .build()
            .context(format!("Failed to load config from {}", config_path.display()))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }

    /// Rejects settings the sampler and chart cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.monitor.interface.trim().is_empty() {
            bail!("Interface name must not be empty");
        }
        if self.monitor.duration == 0 {
            bail!("Duration must be a positive number of seconds");
        }
        if self.monitor.interval == 0 {
            bail!("Interval must be a positive number of seconds");
        }
        if self.chart.width < MIN_WIDTH || self.chart.height < MIN_HEIGHT {
            bail!(
                "Chart size {}x{} is too small (minimum {}x{})",
                self.chart.width,
                self.chart.height,
                MIN_WIDTH,
                MIN_HEIGHT
            );
        }
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_path = path.as_ref();

        let mut config_str = String::new();

        config_str.push_str(&format!(
            "[MONITOR]\ninterface = {}\nduration = {}\ninterval = {}\n\n",
            self.monitor.interface, self.monitor.duration, self.monitor.interval
        ));

        config_str.push_str(&format!(
            "[CHART]\nfile = {}\nwidth = {}\nheight = {}\ntitle = {}\nx_label = {}\ny_label = {}\n\n",
            self.chart.file,
            self.chart.width,
            self.chart.height,
            self.chart.title,
            self.chart.x_label,
            self.chart.y_label
        ));

        config_str.push_str(&format!("[LOGGING]\nlevel = {}\n", self.logging.level));

        fs::write(config_path, config_str)
            .context(format!("Failed to save config to {}", config_path.display()))?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}
