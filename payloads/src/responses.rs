use crate::{ListingImageId, PropertyId, PropertyType, requests};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of description characters shown before "Show More".
pub const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// Record for one stored image, in the order the files were submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub id: ListingImageId,
    pub description: String,
    pub content_type: String,
    /// Decoded size in bytes.
    pub size: usize,
}

/// Response of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImages {
    pub property_id: PropertyId,
    pub uploaded_images: Vec<UploadedImage>,
}

impl UploadedImages {
    pub fn image_ids(&self) -> Vec<ListingImageId> {
        self.uploaded_images.iter().map(|image| image.id).collect()
    }
}

/// Image reference on a listing. Bytes are fetched separately through
/// `APIClient::image_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImage {
    pub id: ListingImageId,
    pub description: String,
}

/// A stored listing with its image references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub details: requests::PropertyDetails,
    pub images: Vec<PropertyImage>,
    pub created_at: Timestamp,
}

impl Property {
    /// First image of the listing, used as its cover.
    pub fn cover_image(&self) -> Option<&PropertyImage> {
        self.images.first()
    }

    /// The description cut to [`DESCRIPTION_PREVIEW_CHARS`] characters with a
    /// trailing ellipsis, or the whole description if it is short enough.
    pub fn description_preview(&self) -> String {
        let description = &self.details.description;
        match description.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
            Some((cut, _)) => format!("{}...", &description[..cut]),
            None => description.clone(),
        }
    }
}

/// Lightweight listing info for the home page grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    pub id: PropertyId,
    pub title: String,
    pub location: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub bedrooms: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub bathrooms: Decimal,
    pub sqft: u32,
    pub property_type: PropertyType,
    pub is_for_sale: bool,
    pub cover_image_id: Option<ListingImageId>,
    pub created_at: Timestamp,
}

impl PropertySummary {
    /// Whether the listing passes the home page filters. The query is
    /// matched case-insensitively against title and location; an empty query
    /// matches everything.
    pub fn matches(
        &self,
        query: &str,
        property_type: Option<PropertyType>,
    ) -> bool {
        if property_type.is_some_and(|t| t != self.property_type) {
            return false;
        }
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.title.to_lowercase().contains(&query)
            || self.location.to_lowercase().contains(&query)
    }
}

impl From<&Property> for PropertySummary {
    fn from(property: &Property) -> Self {
        let details = &property.details;
        Self {
            id: property.id,
            title: details.title.clone(),
            location: details.location.clone(),
            price: details.price,
            bedrooms: details.bedrooms,
            bathrooms: details.bathrooms,
            sqft: details.sqft,
            property_type: details.property_type,
            is_for_sale: details.is_for_sale,
            cover_image_id: property.cover_image().map(|image| image.id),
            created_at: property.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;
    use uuid::Uuid;

    fn property(description: &str) -> Property {
        Property {
            id: PropertyId(Uuid::new_v4()),
            details: requests::PropertyDetails {
                title: "Harbour View".into(),
                description: description.into(),
                price: dec!(420000),
                location: "Old Town".into(),
                bedrooms: 3,
                bathrooms: dec!(1.5),
                sqft: 1400,
                property_type: PropertyType::Condo,
                is_for_sale: false,
            },
            images: vec![],
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn short_description_is_not_truncated() {
        let p = property("Quiet street, close to the ferry.");
        assert_eq!(p.description_preview(), "Quiet street, close to the ferry.");
    }

    #[test]
    fn long_description_is_cut_at_char_boundary() {
        let long = "é".repeat(DESCRIPTION_PREVIEW_CHARS + 10);
        let preview = property(&long).description_preview();
        assert!(preview.ends_with("..."));
        assert_eq!(
            preview.trim_end_matches("...").chars().count(),
            DESCRIPTION_PREVIEW_CHARS
        );
    }

    #[test]
    fn summary_filters_by_query_and_type() {
        let summary = PropertySummary::from(&property("x"));
        assert!(summary.matches("", None));
        assert!(summary.matches("harbour", None));
        assert!(summary.matches("OLD town", Some(PropertyType::Condo)));
        assert!(!summary.matches("harbour", Some(PropertyType::Villa)));
        assert!(!summary.matches("riverside", None));
    }

    #[test]
    fn upload_response_uses_camel_case() {
        let response = UploadedImages {
            property_id: PropertyId(Uuid::nil()),
            uploaded_images: vec![UploadedImage {
                id: ListingImageId(Uuid::nil()),
                description: String::new(),
                content_type: "image/png".into(),
                size: 68,
            }],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("propertyId").is_some());
        assert_eq!(json["uploadedImages"][0]["contentType"], "image/png");
    }
}
