use payloads::{ListingImageId, PropertyId, PropertyType};
use reqwest::StatusCode;
use test_helpers::{
    TestImage, assert_status_code, mock::DevDataset, seaside_villa_details,
    spawn_app, sunny_loft_details,
};
use uuid::Uuid;

#[tokio::test]
async fn list_newest_first() -> anyhow::Result<()> {
    let app = spawn_app().await;
    assert!(app.client.list_properties().await?.is_empty());

    let loft = app
        .upload_listing(
            sunny_loft_details(),
            &[(&TestImage::png("loft.png"), "Loft")],
        )
        .await?;
    let villa = app
        .upload_listing(
            seaside_villa_details(),
            &[
                (&TestImage::jpeg("front.jpg"), "Front"),
                (&TestImage::png("pool.png"), "Pool"),
            ],
        )
        .await?;

    let properties = app.client.list_properties().await?;
    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].id, villa.property_id);
    assert_eq!(properties[1].id, loft.property_id);

    // The first uploaded image is the cover
    assert_eq!(
        properties[0].cover_image_id,
        Some(villa.uploaded_images[0].id)
    );
    assert_eq!(properties[0].property_type, PropertyType::Villa);
    assert_eq!(properties[0].bathrooms, seaside_villa_details().bathrooms);

    Ok(())
}

#[tokio::test]
async fn unknown_property_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.get_property(&PropertyId(Uuid::new_v4())).await;
    assert!(
        result
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("Property not found")
    );
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn unknown_image_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let url = app.client.image_url(&ListingImageId(Uuid::new_v4()));
    let response = app.client.inner_client.get(url).send().await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn dev_dataset_filters() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = DevDataset::create(&app).await?;

    let properties = app.client.list_properties().await?;
    assert_eq!(properties.len(), 4);
    assert_eq!(properties[0].id, dataset.downtown_condo.property_id);

    let in_austin: Vec<_> =
        properties.iter().filter(|p| p.matches("austin", None)).collect();
    assert_eq!(in_austin.len(), 1);
    assert_eq!(in_austin[0].title, "Downtown Condo");

    let villas: Vec<_> = properties
        .iter()
        .filter(|p| p.matches("", Some(PropertyType::Villa)))
        .collect();
    assert_eq!(villas.len(), 1);
    assert_eq!(villas[0].id, dataset.seaside_villa.property_id);

    let villa = app
        .client
        .get_property(&dataset.seaside_villa.property_id)
        .await?;
    assert_eq!(villa.images.len(), 3);
    assert_eq!(villa.images[2].description, "");
    // Short descriptions are shown whole
    assert_eq!(villa.description_preview(), villa.details.description);

    Ok(())
}
