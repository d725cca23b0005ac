//! Command line entry point: `flysites-gpx <source.xml> <slope-start.gpx> <landing-site.gpx> <whinch-start.gpx>`

use std::process::ExitCode;

use flysites_gpx::{ConvertConfig, ConvertError, LoggingConfig, SiteLocationType, UnicodeBold};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging(&LoggingConfig::default());

    let config = match ConvertConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    match flysites_gpx::run(&config, &UnicodeBold) {
        Ok(summary) => {
            info!(
                "Converted {} sites: {} slope starts, {} landing sites, {} winch starts",
                summary.sites,
                summary.waypoints(SiteLocationType::SlopeStart),
                summary.waypoints(SiteLocationType::LandingSite),
                summary.waypoints(SiteLocationType::WhinchStart),
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            match e.downcast_ref::<ConvertError>() {
                Some(convert_error) => error!("{}", convert_error.user_message()),
                None => error!("Conversion failed"),
            }
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
