//! `flysites-gpx` - DHV flying sites as GPX waypoints
//!
//! This library converts the XML export of the DHV flying site database
//! into GPX files, one per location category, with a readable description
//! on every waypoint.

pub mod config;
pub mod description;
pub mod dhv;
pub mod directions;
pub mod error;
pub mod gpx;
pub mod models;
pub mod pipeline;

// Re-export core types for public API
pub use config::{ConvertConfig, LoggingConfig};
pub use description::{PlainText, TextDecorator, TextStyle, UnicodeBold, describe_location};
pub use dhv::DhvParser;
pub use directions::direction_arrows;
pub use error::ConvertError;
pub use gpx::{GpxDocument, build_gpx};
pub use models::{Site, SiteLocation, SiteLocationType};
pub use pipeline::{ConversionSummary, run};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ConvertError>;
