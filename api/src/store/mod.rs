//! In-memory listing store.
//!
//! Listings and image bytes live for the lifetime of the process. The store
//! is cheap to clone and shared between workers through `web::Data`.

use std::collections::HashMap;
use std::sync::Arc;

use jiff::Timestamp;
use tokio::sync::RwLock;
use uuid::Uuid;

use payloads::{
    ListingImageId, PropertyId,
    requests::PropertyDetails,
    responses::{self, UploadedImage, UploadedImages},
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Property not found")]
    PropertyNotFound,
    #[error("Image not found")]
    ImageNotFound,
}

/// A decoded image ready to be stored.
#[derive(Debug, Clone)]
pub struct NewImage {
    pub description: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Raw image bytes and the content type to serve them with.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub content_type: String,
    pub data: Arc<[u8]>,
}

struct StoredImage {
    description: String,
    content_type: String,
    data: Arc<[u8]>,
}

struct StoredProperty {
    details: PropertyDetails,
    image_ids: Vec<ListingImageId>,
    created_at: Timestamp,
}

#[derive(Default)]
struct Listings {
    properties: HashMap<PropertyId, StoredProperty>,
    images: HashMap<ListingImageId, StoredImage>,
    /// Property ids in insertion order.
    order: Vec<PropertyId>,
}

impl Listings {
    fn property(&self, id: PropertyId) -> Result<responses::Property, StoreError> {
        let stored =
            self.properties.get(&id).ok_or(StoreError::PropertyNotFound)?;
        let images = stored
            .image_ids
            .iter()
            .filter_map(|image_id| {
                self.images.get(image_id).map(|image| {
                    responses::PropertyImage {
                        id: *image_id,
                        description: image.description.clone(),
                    }
                })
            })
            .collect();
        Ok(responses::Property {
            id,
            details: stored.details.clone(),
            images,
            created_at: stored.created_at,
        })
    }
}

#[derive(Clone, Default)]
pub struct ListingStore {
    inner: Arc<RwLock<Listings>>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a listing and its images, keeping the image order.
    pub async fn create_property(
        &self,
        details: PropertyDetails,
        images: Vec<NewImage>,
    ) -> UploadedImages {
        let property_id = PropertyId(Uuid::new_v4());
        let mut uploaded_images = Vec::with_capacity(images.len());
        let mut image_ids = Vec::with_capacity(images.len());

        let mut listings = self.inner.write().await;
        for image in images {
            let id = ListingImageId(Uuid::new_v4());
            uploaded_images.push(UploadedImage {
                id,
                description: image.description.clone(),
                content_type: image.content_type.clone(),
                size: image.data.len(),
            });
            image_ids.push(id);
            listings.images.insert(
                id,
                StoredImage {
                    description: image.description,
                    content_type: image.content_type,
                    data: image.data.into(),
                },
            );
        }
        listings.properties.insert(
            property_id,
            StoredProperty {
                details,
                image_ids,
                created_at: Timestamp::now(),
            },
        );
        listings.order.push(property_id);

        UploadedImages {
            property_id,
            uploaded_images,
        }
    }

    pub async fn get_property(
        &self,
        property_id: &PropertyId,
    ) -> Result<responses::Property, StoreError> {
        self.inner.read().await.property(*property_id)
    }

    /// Summaries of every listing, newest first.
    pub async fn list_properties(&self) -> Vec<responses::PropertySummary> {
        let listings = self.inner.read().await;
        listings
            .order
            .iter()
            .rev()
            .filter_map(|id| listings.property(*id).ok())
            .map(|property| responses::PropertySummary::from(&property))
            .collect()
    }

    pub async fn get_image(
        &self,
        image_id: &ListingImageId,
    ) -> Result<ImageData, StoreError> {
        let listings = self.inner.read().await;
        let image =
            listings.images.get(image_id).ok_or(StoreError::ImageNotFound)?;
        Ok(ImageData {
            content_type: image.content_type.clone(),
            data: image.data.clone(),
        })
    }

    pub async fn property_count(&self) -> usize {
        self.inner.read().await.properties.len()
    }
}
