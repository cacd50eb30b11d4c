use crate::PropertyType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata of a listing, as entered on the upload form.
///
/// Numbers go over the wire as JSON numbers, field names in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub location: String,
    pub bedrooms: u32,
    /// Decimal so half baths can be listed.
    #[serde(with = "rust_decimal::serde::float")]
    pub bathrooms: Decimal,
    pub sqft: u32,
    pub property_type: PropertyType,
    pub is_for_sale: bool,
}

impl Default for PropertyDetails {
    /// The values a freshly mounted form starts with.
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: Decimal::ZERO,
            location: String::new(),
            bedrooms: 1,
            bathrooms: Decimal::ONE,
            sqft: 0,
            property_type: PropertyType::default(),
            is_for_sale: true,
        }
    }
}

/// Body of `POST /api/upload-image`.
///
/// `files` holds one data URI per image and `descriptions` the matching
/// description at the same index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadProperty {
    pub files: Vec<String>,
    pub descriptions: Vec<String>,
    pub details: PropertyDetails,
}
