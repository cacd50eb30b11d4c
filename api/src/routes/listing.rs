use actix_web::{HttpResponse, get, post, web};
use anyhow::{Context, anyhow};
use payloads::{
    ListingImageId, PropertyId, data_uri, requests, validation,
};
use uuid::Uuid;

use crate::store::{ListingStore, NewImage};
use crate::telemetry::spawn_blocking_with_tracing;

use super::APIError;

#[tracing::instrument(
    skip(body, store),
    fields(files = body.files.len(), title = %body.details.title)
)]
#[post("/upload-image")]
pub async fn upload_property(
    body: web::Json<requests::UploadProperty>,
    store: web::Data<ListingStore>,
) -> Result<HttpResponse, APIError> {
    let requests::UploadProperty {
        files,
        descriptions,
        details,
    } = body.into_inner();

    validation::validate_submission(&details, files.len(), descriptions.len())
        .map_err(|e| APIError::BadRequest(e.into()))?;
    if files.len() != descriptions.len() {
        return Err(APIError::BadRequest(anyhow!(
            "Got {} files but {} descriptions",
            files.len(),
            descriptions.len()
        )));
    }

    let images =
        spawn_blocking_with_tracing(move || decode_images(files, descriptions))
            .await
            .context("Image decoding task failed")?
            .map_err(APIError::BadRequest)?;

    let uploaded = store.create_property(details, images).await;
    tracing::info!(
        property_id = %uploaded.property_id,
        images = uploaded.uploaded_images.len(),
        "Stored property"
    );
    Ok(HttpResponse::Ok().json(uploaded))
}

/// Decode the data URIs and make sure each one holds an image.
///
/// The content type is taken from the bytes, not from the URI header.
fn decode_images(
    files: Vec<String>,
    descriptions: Vec<String>,
) -> anyhow::Result<Vec<NewImage>> {
    files
        .iter()
        .zip(descriptions)
        .enumerate()
        .map(|(index, (file, description))| {
            let number = index + 1;
            let decoded = data_uri::decode(file).with_context(|| {
                format!("File {number} is not a valid data URI")
            })?;
            let kind = infer::get(&decoded.data)
                .filter(|kind| {
                    matches!(kind.matcher_type(), infer::MatcherType::Image)
                })
                .ok_or_else(|| {
                    anyhow!("File {number} is not a supported image")
                })?;
            if kind.mime_type() != decoded.media_type {
                tracing::debug!(
                    declared = %decoded.media_type,
                    detected = kind.mime_type(),
                    "File {number} declared a different media type"
                );
            }
            Ok(NewImage {
                description,
                content_type: kind.mime_type().to_string(),
                data: decoded.data,
            })
        })
        .collect()
}

#[tracing::instrument(skip(store))]
#[get("/properties")]
pub async fn list_properties(
    store: web::Data<ListingStore>,
) -> Result<HttpResponse, APIError> {
    let properties = store.list_properties().await;
    Ok(HttpResponse::Ok().json(properties))
}

#[tracing::instrument(skip(store))]
#[post("/get_property")]
pub async fn get_property(
    property_id: web::Json<PropertyId>,
    store: web::Data<ListingStore>,
) -> Result<HttpResponse, APIError> {
    let property = store.get_property(&property_id).await?;
    Ok(HttpResponse::Ok().json(property))
}

#[tracing::instrument(skip(store))]
#[get("/images/{image_id}")]
pub async fn get_image(
    image_id: web::Path<Uuid>,
    store: web::Data<ListingStore>,
) -> Result<HttpResponse, APIError> {
    let image = store.get_image(&ListingImageId(*image_id)).await?;
    Ok(HttpResponse::Ok()
        .content_type(image.content_type)
        .body(image.data.to_vec()))
}
