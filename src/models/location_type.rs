//! Location categories used to split sites into separate GPX files

use std::fmt;

use crate::error::ConvertError;

/// Category of a site location, as encoded by the `LocationType` element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteLocationType {
    SlopeStart = 1,
    LandingSite = 2,
    WhinchStart = 3,
}

impl SiteLocationType {
    /// All categories in output order
    pub const ALL: [SiteLocationType; 3] = [
        SiteLocationType::SlopeStart,
        SiteLocationType::LandingSite,
        SiteLocationType::WhinchStart,
    ];

    /// German label shown in waypoint descriptions
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SiteLocationType::SlopeStart => "Startplatz",
            SiteLocationType::LandingSite => "Landeplatz",
            SiteLocationType::WhinchStart => "Winde",
        }
    }

    /// Plural label used for GPX document metadata
    #[must_use]
    pub fn plural_label(self) -> &'static str {
        match self {
            SiteLocationType::SlopeStart => "Startplätze",
            SiteLocationType::LandingSite => "Landeplätze",
            SiteLocationType::WhinchStart => "Winden",
        }
    }

    /// Map a raw `LocationType` value, rejecting anything outside 1..=3
    pub fn from_raw(location_id: i64, value: i64) -> Result<Self, ConvertError> {
        match value {
            1 => Ok(SiteLocationType::SlopeStart),
            2 => Ok(SiteLocationType::LandingSite),
            3 => Ok(SiteLocationType::WhinchStart),
            _ => Err(ConvertError::UnknownLocationType { location_id, value }),
        }
    }
}

impl fmt::Display for SiteLocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, SiteLocationType::SlopeStart)]
    #[case(2, SiteLocationType::LandingSite)]
    #[case(3, SiteLocationType::WhinchStart)]
    fn test_from_raw_known_values(#[case] raw: i64, #[case] expected: SiteLocationType) {
        assert_eq!(SiteLocationType::from_raw(10, raw).unwrap(), expected);
        assert_eq!(expected as i64, raw);
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    #[case(-1)]
    fn test_from_raw_rejects_unknown(#[case] raw: i64) {
        let err = SiteLocationType::from_raw(42, raw).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnknownLocationType {
                location_id: 42,
                value
            } if value == raw
        ));
    }

    #[test]
    fn test_labels() {
        assert_eq!(SiteLocationType::SlopeStart.label(), "Startplatz");
        assert_eq!(SiteLocationType::LandingSite.label(), "Landeplatz");
        assert_eq!(SiteLocationType::WhinchStart.to_string(), "Winde");
    }
}
