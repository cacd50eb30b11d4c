//! Types shared between the api, the ui and the tests.
//!
//! Besides the request/response payloads this crate carries everything the
//! property upload form needs that does not touch the DOM: field validation,
//! the data URI codec and the form model itself, so that all of it can be
//! exercised natively.

pub mod api_client;
pub mod data_uri;
pub mod form;
pub mod requests;
pub mod responses;
pub mod validation;

use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use api_client::{APIClient, ClientError};

/// Path of the upload endpoint, relative to `/api`.
pub const UPLOAD_PATH: &str = "upload-image";

/// Id type wrapper helps ensure we don't mix up ids for different resources.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    FromStr,
    Serialize,
    Deserialize,
)]
pub struct PropertyId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    FromStr,
    Serialize,
    Deserialize,
)]
pub struct ListingImageId(pub Uuid);

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    Apartment,
    Villa,
    Condo,
    Bungalow,
}

impl PropertyType {
    /// All property types, in the order the form offers them.
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::Condo,
        PropertyType::Bungalow,
    ];

    /// Lowercase value used on the wire and in `<option value>`s.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::Villa => "villa",
            Self::Condo => "condo",
            Self::Bungalow => "bungalow",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::Villa => "Villa",
            Self::Condo => "Condo",
            Self::Bungalow => "Bungalow",
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown property type: {0}")]
pub struct UnknownPropertyType(pub String);

impl std::str::FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPropertyType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_type_wire_format() {
        let json = serde_json::to_string(&PropertyType::Bungalow).unwrap();
        assert_eq!(json, r#""bungalow""#);
        let parsed: PropertyType = serde_json::from_str(r#""condo""#).unwrap();
        assert_eq!(parsed, PropertyType::Condo);
    }

    #[test]
    fn property_type_from_select_value() {
        assert_eq!("villa".parse(), Ok(PropertyType::Villa));
        assert_eq!(" Apartment ".parse(), Ok(PropertyType::Apartment));
        assert!("castle".parse::<PropertyType>().is_err());
    }

    #[test]
    fn ids_parse_from_route_segments() {
        let id = PropertyId(Uuid::new_v4());
        let parsed: PropertyId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
