//! DHV flying site XML parser
//!
//! Reads the `FlyingSites` export of the DHV site database into the
//! typed [`Site`] model. Optional text is normalized with [`prune_empty`],
//! numbers are read as integers and flags are true only for the literal `true`.

use quick_xml::de::from_str;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::Result;
use crate::error::ConvertError;
use crate::models::{Site, SiteLocation, SiteLocationType, prune_empty};

/// DHV XML parser and site loader
pub struct DhvParser;

/// DHV XML structure for deserialization
#[derive(Debug, Deserialize)]
pub struct DhvXml {
    #[serde(rename = "FlyingSites")]
    pub flying_sites: DhvFlyingSites,
}

#[derive(Debug, Deserialize)]
pub struct DhvFlyingSites {
    #[serde(rename = "FlyingSite", default)]
    pub sites: Vec<DhvFlyingSite>,
}

#[derive(Debug, Deserialize)]
pub struct DhvFlyingSite {
    #[serde(rename = "SiteID")]
    pub site_id: Option<String>,
    #[serde(rename = "SiteName")]
    pub site_name: Option<String>,
    #[serde(rename = "SiteCountry")]
    pub site_country: Option<String>,
    #[serde(rename = "SiteType")]
    pub site_type: Option<String>,
    #[serde(rename = "SiteType_en")]
    pub site_type_en: Option<String>,
    #[serde(rename = "HeightDifferenceMax")]
    pub height_difference_max: Option<String>,
    #[serde(rename = "WebCam1")]
    pub webcam1: Option<String>,
    #[serde(rename = "WebCam2")]
    pub webcam2: Option<String>,
    #[serde(rename = "WebCam3")]
    pub webcam3: Option<String>,
    // Misspelled in the export itself
    #[serde(rename = "WheaterInfo")]
    pub weather_info: Option<String>,
    #[serde(rename = "WheaterPhone")]
    pub weather_phone: Option<String>,
    #[serde(rename = "DECertified")]
    pub de_certified: Option<String>,
    #[serde(rename = "DECertificationHolder")]
    pub de_certification_holder: Option<String>,
    #[serde(rename = "SiteContact")]
    pub site_contact: Option<String>,
    #[serde(rename = "SiteInformation")]
    pub site_information: Option<String>,
    #[serde(rename = "CableCar")]
    pub cable_car: Option<String>,
    #[serde(rename = "SiteRemarks")]
    pub site_remarks: Option<String>,
    #[serde(rename = "Requirements")]
    pub requirements: Option<String>,
    #[serde(rename = "SiteUrl")]
    pub site_url: Option<String>,
    #[serde(rename = "Location", default)]
    pub locations: Vec<DhvLocation>,
}

#[derive(Debug, Deserialize)]
pub struct DhvLocation {
    #[serde(rename = "LocationID")]
    pub location_id: Option<String>,
    #[serde(rename = "LocationType")]
    pub location_type: Option<String>, // 1 = slope start, 2 = landing, 3 = winch
    #[serde(rename = "LocationName")]
    pub location_name: Option<String>,
    #[serde(rename = "Coordinates")]
    pub coordinates: Option<String>, // Format: "longitude,latitude"
    #[serde(rename = "Altitude")]
    pub altitude: Option<String>,
    #[serde(rename = "LocationCountry")]
    pub location_country: Option<String>,
    #[serde(rename = "PostCode")]
    pub post_code: Option<String>,
    #[serde(rename = "RegionID")]
    pub region_id: Option<String>,
    #[serde(rename = "Region")]
    pub region: Option<String>,
    #[serde(rename = "Municipality")]
    pub municipality: Option<String>,
    #[serde(rename = "Directions")]
    pub directions: Option<String>,
    #[serde(rename = "DirectionsText")]
    pub directions_text: Option<String>,
    #[serde(rename = "TowingLength")]
    pub towing_length: Option<String>,
    #[serde(rename = "MobileWinch")]
    pub mobile_winch: Option<String>,
    #[serde(rename = "TowingHeight1")]
    pub towing_height1: Option<String>,
    #[serde(rename = "TowingHeight2")]
    pub towing_height2: Option<String>,
    #[serde(rename = "AccessByCar")]
    pub access_by_car: Option<String>,
    #[serde(rename = "AccessByPublicTransport")]
    pub access_by_public_transport: Option<String>,
    #[serde(rename = "AccessByFoot")]
    pub access_by_foot: Option<String>,
    #[serde(rename = "AccessRemarks")]
    pub access_remarks: Option<String>,
    #[serde(rename = "Hanggliding")]
    pub hanggliding: Option<String>,
    #[serde(rename = "Paragliding")]
    pub paragliding: Option<String>,
    #[serde(rename = "SuitabilityHG")]
    pub suitability_hg: Option<String>,
    #[serde(rename = "SuitabilityHG_en")]
    pub suitability_hg_en: Option<String>,
    #[serde(rename = "SuitabilityPG")]
    pub suitability_pg: Option<String>,
    #[serde(rename = "SuitabilityPG_en")]
    pub suitability_pg_en: Option<String>,
    #[serde(rename = "LocationRemarks")]
    pub location_remarks: Option<String>,
}

/// Read an integer element; absent or empty text counts as 0
fn parse_int(field: &str, value: Option<&str>) -> Result<i64> {
    let text = value.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Ok(0);
    }

    text.parse::<i64>()
        .map_err(|e| ConvertError::field_conversion(field, text, e.to_string()))
}

/// Only the literal `true` counts as set
fn parse_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Split DHV coordinates "longitude,latitude" into `(latitude, longitude)`
pub fn parse_coordinates(coordinates: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = coordinates.split(',').map(str::trim).collect();
    let [longitude, latitude] = parts.as_slice() else {
        return Err(ConvertError::field_conversion(
            "Coordinates",
            coordinates,
            "expected a longitude,latitude pair",
        ));
    };

    for (field, value) in [("longitude", longitude), ("latitude", latitude)] {
        let number = value.parse::<f64>().map_err(|e| {
            ConvertError::field_conversion(format!("Coordinates {field}"), *value, e.to_string())
        })?;
        if !number.is_finite() {
            return Err(ConvertError::field_conversion(
                format!("Coordinates {field}"),
                *value,
                "not a finite number",
            ));
        }
    }

    Ok(((*latitude).to_string(), (*longitude).to_string()))
}

impl DhvFlyingSite {
    /// Convert the raw DHV record into a [`Site`]
    pub fn to_site(&self) -> Result<Site> {
        let id = parse_int("SiteID", self.site_id.as_deref())?;
        let locations = self
            .locations
            .iter()
            .map(DhvLocation::to_location)
            .collect::<Result<Vec<_>>>()?;

        if locations.is_empty() {
            warn!("DHV site {} has no locations", id);
        }

        Ok(Site {
            id,
            name: self.site_name.clone().unwrap_or_default(),
            country: self.site_country.clone().unwrap_or_default(),
            site_type: self.site_type.clone().unwrap_or_default(),
            site_type_en: self.site_type_en.clone().unwrap_or_default(),
            height_difference_max: parse_int(
                "HeightDifferenceMax",
                self.height_difference_max.as_deref(),
            )?,
            webcam1: prune_empty(self.webcam1.clone()),
            webcam2: prune_empty(self.webcam2.clone()),
            webcam3: prune_empty(self.webcam3.clone()),
            weather_info: prune_empty(self.weather_info.clone()),
            weather_phone: prune_empty(self.weather_phone.clone()),
            de_certified: parse_flag(self.de_certified.as_deref()),
            de_certification_holder: prune_empty(self.de_certification_holder.clone()),
            contact: prune_empty(self.site_contact.clone()),
            info: prune_empty(self.site_information.clone()),
            cable_car: prune_empty(self.cable_car.clone()),
            remarks: prune_empty(self.site_remarks.clone()),
            requirements: prune_empty(self.requirements.clone()),
            url: prune_empty(self.site_url.clone()),
            locations,
        })
    }
}

impl DhvLocation {
    /// Convert the raw DHV record into a [`SiteLocation`]
    pub fn to_location(&self) -> Result<SiteLocation> {
        let id = parse_int("LocationID", self.location_id.as_deref())?;
        let raw_type = parse_int("LocationType", self.location_type.as_deref())?;
        let location_type = SiteLocationType::from_raw(id, raw_type)?;

        let coordinates = self.coordinates.as_deref().ok_or_else(|| {
            ConvertError::field_conversion("Coordinates", "", format!("missing for location {id}"))
        })?;
        let (latitude, longitude) = parse_coordinates(coordinates)?;

        Ok(SiteLocation {
            id,
            location_type,
            name: self.location_name.clone().unwrap_or_default(),
            latitude,
            longitude,
            altitude: parse_int("Altitude", self.altitude.as_deref())?,
            country: prune_empty(self.location_country.clone()),
            post_code: prune_empty(self.post_code.clone()),
            region_id: parse_int("RegionID", self.region_id.as_deref())?,
            region: self.region.clone().unwrap_or_default(),
            municipality: prune_empty(self.municipality.clone()),
            directions: prune_empty(self.directions.clone()),
            directions_text: prune_empty(self.directions_text.clone()),
            towing_length: parse_int("TowingLength", self.towing_length.as_deref())?,
            mobile_winch: parse_int("MobileWinch", self.mobile_winch.as_deref())?,
            towing_height1: parse_int("TowingHeight1", self.towing_height1.as_deref())?,
            towing_height2: parse_int("TowingHeight2", self.towing_height2.as_deref())?,
            access_by_car: parse_flag(self.access_by_car.as_deref()),
            access_by_public_transport: parse_flag(self.access_by_public_transport.as_deref()),
            access_by_foot: parse_flag(self.access_by_foot.as_deref()),
            access_remarks: prune_empty(self.access_remarks.clone()),
            hanggliding: parse_flag(self.hanggliding.as_deref()),
            paragliding: parse_flag(self.paragliding.as_deref()),
            suitability_hg: prune_empty(self.suitability_hg.clone()),
            suitability_hg_en: prune_empty(self.suitability_hg_en.clone()),
            suitability_pg: prune_empty(self.suitability_pg.clone()),
            suitability_pg_en: prune_empty(self.suitability_pg_en.clone()),
            remarks: prune_empty(self.location_remarks.clone()),
        })
    }
}

impl DhvParser {
    /// Load and parse DHV XML file
    pub fn load_sites<P: AsRef<Path>>(xml_path: P) -> Result<Vec<Site>> {
        let xml_path = xml_path.as_ref();
        info!("Loading DHV sites from: {:?}", xml_path);

        let xml_content = fs::read_to_string(xml_path)?;
        Self::parse_xml(&xml_content)
    }

    /// Parse DHV XML content; any invalid site aborts the whole parse
    pub fn parse_xml(xml_content: &str) -> Result<Vec<Site>> {
        debug!("Parsing DHV XML content ({} bytes)", xml_content.len());

        let dhv_xml: DhvXml = from_str(xml_content)
            .map_err(|e| ConvertError::parse(format!("Failed to parse DHV XML: {e}")))?;

        let sites = dhv_xml
            .flying_sites
            .sites
            .iter()
            .map(DhvFlyingSite::to_site)
            .collect::<Result<Vec<_>>>()?;

        let location_count: usize = sites.iter().map(|site| site.locations.len()).sum();
        info!(
            "Loaded {} sites with {} locations from DHV XML",
            sites.len(),
            location_count
        );

        Ok(sites)
    }
}
