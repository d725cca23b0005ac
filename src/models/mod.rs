//! Domain models for the flying site catalog
//!
//! This module contains the typed records the converter works on:
//! - Site: one flying area with its metadata
//! - SiteLocation: a single take-off, landing or winch point of a site
//! - SiteLocationType: the closed set of location categories

pub mod location_type;
pub mod site;

// Re-export all public types for convenient access
pub use location_type::SiteLocationType;
pub use site::{Site, SiteLocation, prune_empty};
