//! Error types and handling for the flying site converter

use thiserror::Error;

/// Main error type for the conversion pipeline
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Wrong number or shape of command line arguments
    #[error("Argument error: {message}")]
    Argument { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// The XML document lacks the expected element structure
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// A field could not be converted to its expected type
    #[error("Invalid value '{value}' for {field}: {message}")]
    FieldConversion {
        field: String,
        value: String,
        message: String,
    },

    /// A location carries a category outside the known set
    #[error("Location {location_id} has unknown location type {value}")]
    UnknownLocationType { location_id: i64, value: i64 },

    /// GPX serialization errors
    #[error("Serialization error: {message}")]
    Serialize { message: String },
}

impl ConvertError {
    /// Create a new argument error
    pub fn argument<S: Into<String>>(message: S) -> Self {
        Self::Argument {
            message: message.into(),
        }
    }

    /// Create a new structural parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new field conversion error
    pub fn field_conversion<F, V, M>(field: F, value: V, message: M) -> Self
    where
        F: Into<String>,
        V: Into<String>,
        M: Into<String>,
    {
        Self::FieldConversion {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialize<S: Into<String>>(message: S) -> Self {
        Self::Serialize {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ConvertError::Argument { message } => format!(
                "{message}. Usage: flysites-gpx <source.xml> <slope-start.gpx> <landing-site.gpx> <whinch-start.gpx>"
            ),
            ConvertError::Io { .. } => {
                "File operation failed. Please check paths and file permissions.".to_string()
            }
            ConvertError::Parse { .. } => {
                "The source file is not a DHV flying site export.".to_string()
            }
            ConvertError::FieldConversion { field, value, .. } => {
                format!("The source file contains an invalid {field} value '{value}'.")
            }
            ConvertError::UnknownLocationType { location_id, value } => {
                format!("Location {location_id} has an unsupported location type {value}.")
            }
            ConvertError::Serialize { message } => message.clone(),
        }
    }
}
