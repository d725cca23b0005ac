//! Conversion pipeline
//!
//! Reads the DHV export once and writes one GPX file per location category.
//! Any failure stops the run; files written before the failure are kept.

use anyhow::{Context, Result};
use std::fs;
use tracing::info;

use crate::config::ConvertConfig;
use crate::description::TextDecorator;
use crate::dhv::DhvParser;
use crate::gpx::GpxDocument;
use crate::models::SiteLocationType;

/// Waypoints written per category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversionSummary {
    pub sites: usize,
    pub written: Vec<(SiteLocationType, usize)>,
}

impl ConversionSummary {
    /// Waypoints written for a category
    #[must_use]
    pub fn waypoints(&self, location_type: SiteLocationType) -> usize {
        self.written
            .iter()
            .find(|(written_type, _)| *written_type == location_type)
            .map_or(0, |(_, count)| *count)
    }
}

/// Run a full conversion as described by `config`
pub fn run(config: &ConvertConfig, decorator: &dyn TextDecorator) -> Result<ConversionSummary> {
    let sites = DhvParser::load_sites(&config.source)
        .with_context(|| format!("Failed to read {}", config.source.display()))?;

    let mut summary = ConversionSummary {
        sites: sites.len(),
        written: Vec::with_capacity(SiteLocationType::ALL.len()),
    };

    for (location_type, path) in config.outputs() {
        let document = GpxDocument::for_category(&sites, location_type, decorator);
        let waypoints = document.waypoints.len();
        let xml = document
            .to_xml()
            .with_context(|| format!("Failed to build GPX for {}", location_type.plural_label()))?;

        fs::write(path, xml).with_context(|| format!("Failed to write {}", path.display()))?;
        info!(
            "Wrote {} {} to {}",
            waypoints,
            location_type.plural_label(),
            path.display()
        );

        summary.written.push((location_type, waypoints));
    }

    Ok(summary)
}
