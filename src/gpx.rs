//! GPX 1.1 document assembly
//!
//! One document holds the waypoints of a single location category.

use quick_xml::se::Serializer;
use serde::Serialize;
use tracing::debug;

use crate::Result;
use crate::description::{TextDecorator, describe_location};
use crate::error::ConvertError;
use crate::models::{Site, SiteLocation, SiteLocationType};

pub const GPX_VERSION: &str = "1.1";
pub const GPX_CREATOR: &str = "flysites-gpx";
pub const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const GPX_SCHEMA_LOCATION: &str =
    "http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// GPX root element
#[derive(Debug, Serialize)]
pub struct GpxDocument {
    #[serde(rename = "@version")]
    pub version: &'static str,
    #[serde(rename = "@creator")]
    pub creator: &'static str,
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    #[serde(rename = "@xmlns:xsi")]
    pub xmlns_xsi: &'static str,
    #[serde(rename = "@xsi:schemaLocation")]
    pub schema_location: &'static str,
    pub metadata: GpxMetadata,
    #[serde(rename = "wpt")]
    pub waypoints: Vec<Waypoint>,
}

#[derive(Debug, Serialize)]
pub struct GpxMetadata {
    pub name: String,
}

/// A single `wpt` element
#[derive(Debug, Serialize)]
pub struct Waypoint {
    #[serde(rename = "@lat")]
    pub lat: String,
    #[serde(rename = "@lon")]
    pub lon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ele: Option<i64>,
    pub name: String,
    pub desc: String,
    #[serde(rename = "type")]
    pub waypoint_type: String,
}

impl Waypoint {
    fn from_location(site: &Site, location: &SiteLocation, decorator: &dyn TextDecorator) -> Self {
        Self {
            lat: location.latitude.clone(),
            lon: location.longitude.clone(),
            ele: (location.altitude > 0).then_some(location.altitude),
            name: location.name.clone(),
            desc: describe_location(site, location, decorator),
            waypoint_type: location.location_type.label().to_string(),
        }
    }
}

impl GpxDocument {
    /// Collect the waypoints of one category, in site order then location order
    #[must_use]
    pub fn for_category(
        sites: &[Site],
        location_type: SiteLocationType,
        decorator: &dyn TextDecorator,
    ) -> Self {
        let waypoints: Vec<Waypoint> = sites
            .iter()
            .flat_map(move |site| {
                site.locations_of(location_type)
                    .map(move |location| Waypoint::from_location(site, location, decorator))
            })
            .collect();

        debug!(
            "Collected {} waypoints for {}",
            waypoints.len(),
            location_type.plural_label()
        );

        Self {
            version: GPX_VERSION,
            creator: GPX_CREATOR,
            xmlns: GPX_NAMESPACE,
            xmlns_xsi: XSI_NAMESPACE,
            schema_location: GPX_SCHEMA_LOCATION,
            metadata: GpxMetadata {
                name: format!("DHV {}", location_type.plural_label()),
            },
            waypoints,
        }
    }

    /// Serialize as indented XML with a leading declaration
    pub fn to_xml(&self) -> Result<String> {
        let mut body = String::new();
        let mut serializer = Serializer::with_root(&mut body, Some("gpx"))
            .map_err(|e| ConvertError::serialize(format!("Failed to create GPX root: {e}")))?;
        serializer.indent(' ', 2);
        self.serialize(serializer)
            .map_err(|e| ConvertError::serialize(format!("Failed to serialize GPX: {e}")))?;

        Ok(format!("{XML_DECLARATION}\n{body}\n"))
    }
}

/// Build the GPX text for all locations of one category
pub fn build_gpx(
    sites: &[Site],
    location_type: SiteLocationType,
    decorator: &dyn TextDecorator,
) -> Result<String> {
    GpxDocument::for_category(sites, location_type, decorator).to_xml()
}
