use clap::Parser;
use env_logger::{Builder, WriteStyle};
use log::error;
use netbw::args::Args;
use netbw::config::AppConfig;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration first (without logging)
    let mut config = match AppConfig::resolve(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    args.apply(&mut config);

    // Initialise logger with a configured log level
    Builder::new()
        .filter_level(config.get_log_level())
        .write_style(WriteStyle::Always)
        .format_timestamp_secs()
        .init();

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {:#}", e);
        return ExitCode::FAILURE;
    }

    if let Some(path) = &args.save_config {
        return match config.save(path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{:#}", e);
                ExitCode::FAILURE
            }
        };
    }

    if args.list_interfaces {
        for name in netbw::interfaces() {
            println!("{}", name);
        }
        return ExitCode::SUCCESS;
    }

    if let Err(e) = netbw::run(&config).await {
        error!("{:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
