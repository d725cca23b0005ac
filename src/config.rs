//! Run configuration for the converter
//!
//! The converter takes exactly four positional paths: the DHV source XML
//! and one GPX output per location category. Logging verbosity follows
//! `RUST_LOG` and falls back to [`LoggingConfig`].

use std::path::{Path, PathBuf};

use crate::Result;
use crate::error::ConvertError;
use crate::models::SiteLocationType;

/// Number of positional arguments the converter expects
pub const EXPECTED_ARGUMENTS: usize = 4;

/// Input and output paths of one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// DHV flying site XML export
    pub source: PathBuf,
    /// GPX file for slope starts
    pub slope_start: PathBuf,
    /// GPX file for landing sites
    pub landing_site: PathBuf,
    /// GPX file for winch starts
    pub whinch_start: PathBuf,
}

/// Logging configuration settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ConvertConfig {
    /// Build the configuration from positional arguments, program name excluded
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let [source, slope_start, landing_site, whinch_start] =
            <[String; EXPECTED_ARGUMENTS]>::try_from(args).map_err(|args| {
                ConvertError::argument(format!(
                    "Expected {EXPECTED_ARGUMENTS} path arguments, got {}",
                    args.len()
                ))
            })?;

        let config = Self {
            source: PathBuf::from(source),
            slope_start: PathBuf::from(slope_start),
            landing_site: PathBuf::from(landing_site),
            whinch_start: PathBuf::from(whinch_start),
        };
        config.validate()?;

        Ok(config)
    }

    /// Validate all paths
    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("source", &self.source),
            ("slope start output", &self.slope_start),
            ("landing site output", &self.landing_site),
            ("winch start output", &self.whinch_start),
        ];

        for (name, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(ConvertError::argument(format!("The {name} path is empty")));
            }
        }

        for (location_type, path) in self.outputs() {
            if path == self.source.as_path() {
                return Err(ConvertError::argument(format!(
                    "The {} output would overwrite the source file {}",
                    location_type.plural_label(),
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Output path for a location category
    #[must_use]
    pub fn output_for(&self, location_type: SiteLocationType) -> &Path {
        match location_type {
            SiteLocationType::SlopeStart => &self.slope_start,
            SiteLocationType::LandingSite => &self.landing_site,
            SiteLocationType::WhinchStart => &self.whinch_start,
        }
    }

    /// All outputs in fixed category order
    #[must_use]
    pub fn outputs(&self) -> [(SiteLocationType, &Path); 3] {
        SiteLocationType::ALL.map(|location_type| (location_type, self.output_for(location_type)))
    }
}
