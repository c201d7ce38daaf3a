use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

/// Samples one network interface and charts its bandwidth over time.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Interface to monitor [default: eth0]
    #[arg(short, long)]
    pub interface: Option<String>,

    /// Total monitoring time in seconds [default: 30]
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub duration: Option<u64>,

    /// Seconds between samples [default: 1]
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Chart file to write [default: bandwidth.png]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Configuration file [default: netbw.ini]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the interfaces the OS reports and exit
    #[arg(long)]
    pub list_interfaces: bool,

    /// Write the effective configuration to this file and exit
    #[arg(long)]
    pub save_config: Option<PathBuf>,
}

impl Args {
    /// Overrides configuration values with the flags that were given.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(interface) = &self.interface {
            config.monitor.interface = interface.clone();
        }
        if let Some(duration) = self.duration {
            config.monitor.duration = duration;
        }
        if let Some(interval) = self.interval {
            config.monitor.interval = interval;
        }
        if let Some(output) = &self.output {
            config.chart.file = output.clone();
        }
    }
}
