//! The property upload form, independent of the DOM.
//!
//! The form owns one ordered list of [`ImageEntry`] records, each pairing a
//! selected file with its description, so the `files` and `descriptions`
//! lists sent to the api can never drift apart. The file type is generic: the
//! ui plugs in browser files that own an object URL preview, tests plug in
//! in-memory fakes.
//!
//! Submission walks through [`SubmitPhase`]s:
//!
//! ```text
//! Idle -> Validating -> (invalid) -> Idle, errors set
//!                    -> Encoding -> Submitting -> Idle, form reset on success
//! ```

use std::future::Future;

use futures::future::try_join_all;

use crate::{
    APIClient, ClientError, data_uri,
    requests::{PropertyDetails, UploadProperty},
    responses::UploadedImages,
    validation::{self, ValidationErrors},
};

pub const SUCCESS_MESSAGE: &str = "Property added successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to add property.";

/// A file picked by the user.
pub trait ImageFile {
    fn name(&self) -> String;

    /// Media type reported for the file. May be empty.
    fn media_type(&self) -> String;

    /// Read the complete file contents.
    fn read(&self) -> impl Future<Output = Result<Vec<u8>, EncodingError>>;
}

/// Where a finished submission is sent. Implemented by [`APIClient`].
pub trait PropertyUploader {
    fn upload(
        &self,
        request: &UploadProperty,
    ) -> impl Future<Output = Result<UploadedImages, ClientError>>;
}

impl PropertyUploader for APIClient {
    fn upload(
        &self,
        request: &UploadProperty,
    ) -> impl Future<Output = Result<UploadedImages, ClientError>> {
        self.upload_property(request)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Could not read {name}: {reason}")]
pub struct EncodingError {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("No image at index {index}, the form holds {len}")]
    DescriptionIndexOutOfBounds { index: usize, len: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Some fields are invalid: {0}")]
    Invalid(ValidationErrors),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error("Upload failed: {0}")]
    Upload(#[from] ClientError),
}

impl SubmitError {
    /// Acknowledgment for the user. Field errors are shown inline instead.
    pub fn alert(&self) -> Option<&'static str> {
        match self {
            Self::Invalid(_) => None,
            Self::Encoding(_) | Self::Upload(_) => Some(FAILURE_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Encoding,
    Submitting,
}

/// A selected file and the description typed for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageEntry<F> {
    file: F,
    description: String,
}

impl<F> ImageEntry<F> {
    fn new(file: F) -> Self {
        Self {
            file,
            description: String::new(),
        }
    }

    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<F: ImageFile> ImageEntry<F> {
    async fn encode(&self) -> Result<String, EncodingError> {
        let data = self.file.read().await?;
        Ok(data_uri::encode(&self.file.media_type(), &data))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyForm<F> {
    details: PropertyDetails,
    images: Vec<ImageEntry<F>>,
    errors: ValidationErrors,
    /// Set by the first validation; afterwards every edit re-validates.
    attempted: bool,
    phase: SubmitPhase,
}

impl<F> Default for PropertyForm<F> {
    fn default() -> Self {
        Self {
            details: PropertyDetails::default(),
            images: Vec::new(),
            errors: ValidationErrors::default(),
            attempted: false,
            phase: SubmitPhase::Idle,
        }
    }
}

impl<F> PropertyForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn details(&self) -> &PropertyDetails {
        &self.details
    }

    pub fn update_details(&mut self, edit: impl FnOnce(&mut PropertyDetails)) {
        edit(&mut self.details);
        self.revalidate();
    }

    pub fn images(&self) -> &[ImageEntry<F>] {
        &self.images
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.images
            .iter()
            .map(|entry| entry.description.clone())
            .collect()
    }

    /// Replace the whole selection. Previous entries, and whatever they own,
    /// are dropped; every new entry starts with an empty description.
    pub fn select_images(&mut self, files: impl IntoIterator<Item = F>) {
        self.images = files.into_iter().map(ImageEntry::new).collect();
        self.revalidate();
    }

    pub fn set_description(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), FormError> {
        let len = self.images.len();
        let entry = self
            .images
            .get_mut(index)
            .ok_or(FormError::DescriptionIndexOutOfBounds { index, len })?;
        entry.description = text.into();
        self.revalidate();
        Ok(())
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Validate everything and keep the result for display.
    pub fn validate(&mut self) -> Result<(), ValidationErrors> {
        self.attempted = true;
        let result = validation::validate_submission(
            &self.details,
            self.images.len(),
            self.images.len(),
        );
        self.errors = result.clone().err().unwrap_or_default();
        result
    }

    fn revalidate(&mut self) {
        if self.attempted {
            let _ = self.validate();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn set_phase(
        &mut self,
        phase: SubmitPhase,
        on_phase: &impl Fn(SubmitPhase),
    ) {
        self.phase = phase;
        on_phase(phase);
    }
}

impl<F: ImageFile> PropertyForm<F> {
    /// Encode every selected file as a data URI, in selection order.
    ///
    /// All reads run concurrently; the first failure fails the batch.
    pub async fn encode_images(&self) -> Result<Vec<String>, EncodingError> {
        try_join_all(self.images.iter().map(ImageEntry::encode)).await
    }

    async fn upload(
        &mut self,
        uploader: &impl PropertyUploader,
        on_phase: &impl Fn(SubmitPhase),
    ) -> Result<UploadedImages, SubmitError> {
        self.set_phase(SubmitPhase::Encoding, on_phase);
        let files = self.encode_images().await?;
        let request = UploadProperty {
            files,
            descriptions: self.descriptions(),
            details: self.details.clone(),
        };

        self.set_phase(SubmitPhase::Submitting, on_phase);
        Ok(uploader.upload(&request).await?)
    }
}

/// Validate, encode and upload the form.
///
/// On success the form is reset. On failure it is left as it was, so the
/// user can fix the problem and submit again.
pub async fn submit<F: ImageFile>(
    form: &mut PropertyForm<F>,
    uploader: &impl PropertyUploader,
) -> Result<UploadedImages, SubmitError> {
    submit_with_progress(form, uploader, |_| {}).await
}

/// [`submit`], reporting every phase change to `on_phase`.
pub async fn submit_with_progress<F: ImageFile>(
    form: &mut PropertyForm<F>,
    uploader: &impl PropertyUploader,
    on_phase: impl Fn(SubmitPhase),
) -> Result<UploadedImages, SubmitError> {
    form.set_phase(SubmitPhase::Validating, &on_phase);
    if let Err(errors) = form.validate() {
        tracing::debug!("Submission blocked: {errors}");
        form.set_phase(SubmitPhase::Idle, &on_phase);
        return Err(SubmitError::Invalid(errors));
    }

    let result = form.upload(uploader, &on_phase).await;
    form.set_phase(SubmitPhase::Idle, &on_phase);

    match result {
        Ok(uploaded) => {
            tracing::info!(
                property_id = %uploaded.property_id,
                images = ?uploaded.image_ids(),
                "Added property"
            );
            form.reset();
            Ok(uploaded)
        }
        Err(e) => {
            tracing::error!(error = ?e, "Error adding property: {e}");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ListingImageId, PropertyId, PropertyType, responses::UploadedImage,
        validation::FormField,
    };
    use reqwest::StatusCode;
    use rust_decimal::{Decimal, dec};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeImage {
        name: String,
        media_type: String,
        bytes: Option<Vec<u8>>,
        drops: Rc<Cell<usize>>,
    }

    impl FakeImage {
        fn png(name: &str, bytes: &[u8]) -> Self {
            Self {
                name: name.into(),
                media_type: "image/png".into(),
                bytes: Some(bytes.to_vec()),
                drops: Rc::default(),
            }
        }

        fn unreadable(name: &str) -> Self {
            let mut image = Self::png(name, &[]);
            image.bytes = None;
            image
        }

        fn tracked(name: &str, drops: &Rc<Cell<usize>>) -> Self {
            let mut image = Self::png(name, b"img");
            image.drops = drops.clone();
            image
        }
    }

    impl Drop for FakeImage {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    impl ImageFile for FakeImage {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn media_type(&self) -> String {
            self.media_type.clone()
        }

        async fn read(&self) -> Result<Vec<u8>, EncodingError> {
            self.bytes.clone().ok_or_else(|| EncodingError {
                name: self.name.clone(),
                reason: "permission denied".into(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingUploader {
        requests: RefCell<Vec<UploadProperty>>,
        fail: bool,
    }

    impl PropertyUploader for RecordingUploader {
        async fn upload(
            &self,
            request: &UploadProperty,
        ) -> Result<UploadedImages, ClientError> {
            self.requests.borrow_mut().push(request.clone());
            if self.fail {
                return Err(ClientError::APIError(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong".into(),
                ));
            }
            Ok(UploadedImages {
                property_id: PropertyId(Uuid::new_v4()),
                uploaded_images: request
                    .descriptions
                    .iter()
                    .map(|description| UploadedImage {
                        id: ListingImageId(Uuid::new_v4()),
                        description: description.clone(),
                        content_type: "image/png".into(),
                        size: 3,
                    })
                    .collect(),
            })
        }
    }

    fn sunny_loft() -> PropertyDetails {
        PropertyDetails {
            title: "Sunny Loft".into(),
            description: "Bright 2BR".into(),
            price: dec!(250000),
            location: "Riverside".into(),
            bedrooms: 2,
            bathrooms: dec!(1),
            sqft: 900,
            property_type: PropertyType::Apartment,
            is_for_sale: true,
        }
    }

    fn filled_form(images: Vec<FakeImage>) -> PropertyForm<FakeImage> {
        let mut form = PropertyForm::new();
        form.update_details(|d| *d = sunny_loft());
        form.select_images(images);
        form
    }

    #[test]
    fn selecting_images_resets_descriptions_and_drops_old_entries() {
        let old_drops = Rc::new(Cell::new(0));
        let mut form = PropertyForm::new();
        form.select_images(vec![
            FakeImage::tracked("a.png", &old_drops),
            FakeImage::tracked("b.png", &old_drops),
        ]);
        form.set_description(0, "Living room").unwrap();
        form.set_description(1, "Kitchen").unwrap();

        form.select_images(vec![
            FakeImage::png("c.png", b"c"),
            FakeImage::png("d.png", b"d"),
            FakeImage::png("e.png", b"e"),
        ]);

        assert_eq!(form.descriptions(), vec!["", "", ""]);
        assert_eq!(old_drops.get(), 2);
        let names: Vec<String> =
            form.images().iter().map(|e| e.file().name()).collect();
        assert_eq!(names, ["c.png", "d.png", "e.png"]);
    }

    #[test]
    fn editing_a_description_touches_only_that_entry() {
        let mut form = filled_form(vec![
            FakeImage::png("a.png", b"a"),
            FakeImage::png("b.png", b"b"),
            FakeImage::png("c.png", b"c"),
        ]);
        form.set_description(0, "Front").unwrap();
        let files_before: Vec<FakeImage> =
            form.images().iter().map(|e| e.file().clone()).collect();

        form.set_description(1, "Garden").unwrap();

        assert_eq!(form.descriptions(), vec!["Front", "Garden", ""]);
        let files_after: Vec<FakeImage> =
            form.images().iter().map(|e| e.file().clone()).collect();
        assert_eq!(files_before, files_after);
    }

    #[test]
    fn out_of_bounds_description_edit_is_rejected() {
        let mut form = filled_form(vec![FakeImage::png("a.png", b"a")]);
        let before = form.clone();

        let result = form.set_description(3, "Attic");

        assert_eq!(
            result,
            Err(FormError::DescriptionIndexOutOfBounds { index: 3, len: 1 })
        );
        assert_eq!(form, before);
    }

    #[tokio::test]
    async fn sunny_loft_is_uploaded() {
        let mut form = filled_form(vec![FakeImage::png("loft.png", b"abc")]);
        assert_eq!(form.descriptions(), vec![""]);
        let uploader = RecordingUploader::default();
        let phases = RefCell::new(Vec::new());

        let uploaded = submit_with_progress(&mut form, &uploader, |phase| {
            phases.borrow_mut().push(phase)
        })
        .await
        .unwrap();

        let requests = uploader.requests.borrow();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.files, vec!["data:image/png;base64,YWJj"]);
        assert_eq!(request.descriptions, vec![""]);
        assert_eq!(request.details, sunny_loft());
        assert_eq!(uploaded.uploaded_images.len(), 1);

        assert_eq!(
            *phases.borrow(),
            [
                SubmitPhase::Validating,
                SubmitPhase::Encoding,
                SubmitPhase::Submitting,
                SubmitPhase::Idle,
            ]
        );
        // The form starts over after a successful upload.
        assert!(form.images().is_empty());
        assert_eq!(form.details(), &PropertyDetails::default());
    }

    #[tokio::test]
    async fn files_keep_selection_order() {
        let mut form = filled_form(vec![
            FakeImage::png("1.png", b"one"),
            FakeImage::png("2.png", b"two"),
            FakeImage::png("3.png", b"three"),
        ]);
        form.set_description(2, "Balcony").unwrap();
        let uploader = RecordingUploader::default();

        submit(&mut form, &uploader).await.unwrap();

        let request = &uploader.requests.borrow()[0];
        assert_eq!(
            request.files,
            vec![
                data_uri::encode("image/png", b"one"),
                data_uri::encode("image/png", b"two"),
                data_uri::encode("image/png", b"three"),
            ]
        );
        assert_eq!(request.descriptions, vec!["", "", "Balcony"]);
    }

    #[tokio::test]
    async fn missing_images_block_submission() {
        let mut form = filled_form(vec![]);
        let uploader = RecordingUploader::default();

        let err = submit(&mut form, &uploader).await.unwrap_err();

        assert!(matches!(err, SubmitError::Invalid(_)));
        assert_eq!(err.alert(), None);
        assert_eq!(
            form.errors().message(FormField::Images).as_deref(),
            Some("At least one image must be uploaded")
        );
        assert!(uploader.requests.borrow().is_empty());
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[tokio::test]
    async fn zero_price_blocks_submission() {
        let mut form = filled_form(vec![FakeImage::png("a.png", b"a")]);
        form.update_details(|d| d.price = Decimal::ZERO);
        let uploader = RecordingUploader::default();

        let err = submit(&mut form, &uploader).await.unwrap_err();

        let SubmitError::Invalid(errors) = err else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.len(), 1);
        assert!(errors.get(FormField::Price).is_some());
        assert!(uploader.requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn one_unreadable_file_sends_nothing() {
        let mut form = filled_form(vec![
            FakeImage::png("a.png", b"a"),
            FakeImage::unreadable("broken.png"),
        ]);
        let uploader = RecordingUploader::default();

        let err = submit(&mut form, &uploader).await.unwrap_err();

        assert!(matches!(&err, SubmitError::Encoding(e) if e.name == "broken.png"));
        assert_eq!(err.alert(), Some(FAILURE_MESSAGE));
        assert!(uploader.requests.borrow().is_empty());
        assert_eq!(form.images().len(), 2);
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[tokio::test]
    async fn rejected_upload_keeps_the_form() {
        let mut form = filled_form(vec![FakeImage::png("a.png", b"a")]);
        form.set_description(0, "Street view").unwrap();
        let uploader = RecordingUploader {
            fail: true,
            ..Default::default()
        };

        let err = submit(&mut form, &uploader).await.unwrap_err();

        assert!(matches!(err, SubmitError::Upload(_)));
        assert_eq!(err.alert(), Some(FAILURE_MESSAGE));
        assert_eq!(uploader.requests.borrow().len(), 1);
        assert_eq!(form.details(), &sunny_loft());
        assert_eq!(form.descriptions(), vec!["Street view"]);
    }

    #[tokio::test]
    async fn reported_phases_follow_the_form() {
        let mut form = filled_form(vec![FakeImage::png("a.png", b"a")]);
        let uploader = RecordingUploader {
            fail: true,
            ..Default::default()
        };
        let phases = RefCell::new(Vec::new());

        let _ = submit_with_progress(&mut form, &uploader, |phase| {
            phases.borrow_mut().push(phase)
        })
        .await;

        assert_eq!(
            *phases.borrow(),
            [
                SubmitPhase::Validating,
                SubmitPhase::Encoding,
                SubmitPhase::Submitting,
                SubmitPhase::Idle,
            ]
        );
        assert_eq!(phases.borrow().last().copied(), Some(form.phase()));

        // Blocked submissions never leave validation
        let mut empty = filled_form(vec![]);
        phases.borrow_mut().clear();
        let _ = submit_with_progress(&mut empty, &uploader, |phase| {
            phases.borrow_mut().push(phase)
        })
        .await;
        assert_eq!(
            *phases.borrow(),
            [SubmitPhase::Validating, SubmitPhase::Idle]
        );
        assert_eq!(empty.phase(), SubmitPhase::Idle);
    }

    #[tokio::test]
    async fn edits_revalidate_after_first_attempt() {
        let mut form: PropertyForm<FakeImage> = PropertyForm::new();
        form.update_details(|d| d.title = String::new());
        assert!(form.errors().is_empty());

        let uploader = RecordingUploader::default();
        let _ = submit(&mut form, &uploader).await;
        assert!(form.errors().get(FormField::Title).is_some());

        form.update_details(|d| d.title = "Cottage".into());
        assert!(form.errors().get(FormField::Title).is_none());
        form.select_images(vec![FakeImage::png("a.png", b"a")]);
        assert!(form.errors().get(FormField::Images).is_none());
        assert!(form.errors().get(FormField::Descriptions).is_none());
    }
}
