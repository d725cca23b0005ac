//! Flying site and location records

use super::SiteLocationType;

/// Turn empty text into `None`, keep everything else unchanged
#[must_use]
pub fn prune_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// A flying area from the DHV catalog
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Site {
    pub id: i64,
    pub name: String,
    pub country: String,
    /// Site type in German, e.g. "Hanggelände"
    pub site_type: String,
    /// Site type in English
    pub site_type_en: String,
    /// Maximum height difference in meters, 0 when unknown
    pub height_difference_max: i64,
    pub webcam1: Option<String>,
    pub webcam2: Option<String>,
    pub webcam3: Option<String>,
    pub weather_info: Option<String>,
    pub weather_phone: Option<String>,
    pub de_certified: bool,
    pub de_certification_holder: Option<String>,
    pub contact: Option<String>,
    pub info: Option<String>,
    pub cable_car: Option<String>,
    pub remarks: Option<String>,
    pub requirements: Option<String>,
    pub url: Option<String>,
    /// Locations in source document order
    pub locations: Vec<SiteLocation>,
}

/// A single take-off, landing or winch point of a site
#[derive(Debug, Clone, PartialEq)]
pub struct SiteLocation {
    pub id: i64,
    pub location_type: SiteLocationType,
    pub name: String,
    /// Decimal degrees exactly as written in the source
    pub latitude: String,
    /// Decimal degrees exactly as written in the source
    pub longitude: String,
    /// Altitude in meters, 0 when unknown
    pub altitude: i64,
    pub country: Option<String>,
    pub post_code: Option<String>,
    pub region_id: i64,
    pub region: String,
    pub municipality: Option<String>,
    /// Compass abbreviations such as "SW, W"
    pub directions: Option<String>,
    pub directions_text: Option<String>,

    // Only meaningful for winch locations
    pub towing_length: i64,
    /// -1 marks a mobile winch
    pub mobile_winch: i64,
    pub towing_height1: i64,
    pub towing_height2: i64,

    pub access_by_car: bool,
    pub access_by_public_transport: bool,
    pub access_by_foot: bool,
    pub access_remarks: Option<String>,

    pub hanggliding: bool,
    pub paragliding: bool,

    pub suitability_hg: Option<String>,
    pub suitability_hg_en: Option<String>,
    pub suitability_pg: Option<String>,
    pub suitability_pg_en: Option<String>,

    pub remarks: Option<String>,
}

impl SiteLocation {
    /// Create a location with only the required fields set
    #[must_use]
    pub fn new(
        id: i64,
        location_type: SiteLocationType,
        name: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            id,
            location_type,
            name: name.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
            altitude: 0,
            country: None,
            post_code: None,
            region_id: 0,
            region: String::new(),
            municipality: None,
            directions: None,
            directions_text: None,
            towing_length: 0,
            mobile_winch: 0,
            towing_height1: 0,
            towing_height2: 0,
            access_by_car: false,
            access_by_public_transport: false,
            access_by_foot: false,
            access_remarks: None,
            hanggliding: false,
            paragliding: false,
            suitability_hg: None,
            suitability_hg_en: None,
            suitability_pg: None,
            suitability_pg_en: None,
            remarks: None,
        }
    }

    /// Whether the winch is a mobile one
    #[must_use]
    pub fn is_mobile_winch(&self) -> bool {
        self.mobile_winch == -1
    }
}

impl Site {
    /// Locations of the given category, in source order
    pub fn locations_of(
        &self,
        location_type: SiteLocationType,
    ) -> impl Iterator<Item = &SiteLocation> {
        self.locations
            .iter()
            .filter(move |location| location.location_type == location_type)
    }

    /// Whether any weather related field is set
    #[must_use]
    pub fn has_weather_info(&self) -> bool {
        [
            &self.webcam1,
            &self.webcam2,
            &self.webcam3,
            &self.weather_info,
            &self.weather_phone,
        ]
        .iter()
        .any(|field| field.is_some())
    }
}
