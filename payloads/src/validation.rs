//! Field validation for property submissions.
//!
//! The same rules run in the browser before anything is encoded and in the
//! api before anything is stored.

use crate::requests::PropertyDetails;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// A control on the upload form that can carry an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Title,
    Description,
    Price,
    Location,
    Bedrooms,
    Bathrooms,
    Sqft,
    PropertyType,
    Images,
    Descriptions,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Price => "Price",
            Self::Location => "Location",
            Self::Bedrooms => "Bedrooms",
            Self::Bathrooms => "Bathrooms",
            Self::Sqft => "Square footage",
            Self::PropertyType => "Property type",
            Self::Images => "Images",
            Self::Descriptions => "Descriptions",
        }
    }

    fn required_message(&self) -> String {
        match self {
            Self::Images => "At least one image must be uploaded".into(),
            Self::Descriptions => "Each image must have a description".into(),
            other => format!("{} is required", other.label()),
        }
    }

    fn range_message(&self) -> String {
        match self {
            Self::Price => "Price must be greater than 0".into(),
            Self::Bedrooms => "Bedrooms must be at least 1".into(),
            Self::Bathrooms => "Bathrooms must be at least 1".into(),
            Self::Sqft => "Square footage must be greater than 0".into(),
            other => format!("{} is out of range", other.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{}", .0.required_message())]
    Required(FormField),
    #[error("{}", .0.range_message())]
    OutOfRange(FormField),
}

impl FieldError {
    pub fn field(&self) -> FormField {
        match self {
            Self::Required(field) | Self::OutOfRange(field) => *field,
        }
    }
}

/// Errors keyed by the control they belong to. At most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Message to render next to `field`, if it is invalid.
    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    fn push(&mut self, error: FieldError) {
        self.errors.entry(error.field()).or_insert(error);
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> =
            self.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

fn require_text(errors: &mut ValidationErrors, field: FormField, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::Required(field));
    }
}

/// Check the metadata fields only.
pub fn validate_details(details: &PropertyDetails) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    require_text(&mut errors, FormField::Title, &details.title);
    require_text(&mut errors, FormField::Description, &details.description);
    if details.price <= Decimal::ZERO {
        errors.push(FieldError::OutOfRange(FormField::Price));
    }
    require_text(&mut errors, FormField::Location, &details.location);
    if details.bedrooms < 1 {
        errors.push(FieldError::OutOfRange(FormField::Bedrooms));
    }
    if details.bathrooms < Decimal::ONE {
        errors.push(FieldError::OutOfRange(FormField::Bathrooms));
    }
    if details.sqft == 0 {
        errors.push(FieldError::OutOfRange(FormField::Sqft));
    }

    errors
}

/// Check a whole submission.
///
/// Only the presence of descriptions is enforced; an individual description
/// may be empty.
pub fn validate_submission(
    details: &PropertyDetails,
    image_count: usize,
    description_count: usize,
) -> Result<(), ValidationErrors> {
    let mut errors = validate_details(details);
    if image_count == 0 {
        errors.push(FieldError::Required(FormField::Images));
    }
    if description_count == 0 {
        errors.push(FieldError::Required(FormField::Descriptions));
    }
    errors.into_result()
}
