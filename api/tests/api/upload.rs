use payloads::{
    PropertyType, data_uri,
    form::{self, PropertyForm, SubmitError},
    requests,
};
use reqwest::StatusCode;
use rust_decimal::dec;
use test_helpers::{
    TINY_JPEG, TINY_PNG, TestImage, assert_status_code, spawn_app,
    spawn_app_with_config, sunny_loft_details,
};

#[tokio::test]
async fn submit_form_and_read_back() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut property_form = PropertyForm::new();
    property_form.update_details(|details| *details = sunny_loft_details());
    property_form.select_images([
        TestImage::png("living.png"),
        TestImage::jpeg("kitchen.jpg"),
    ]);
    property_form.set_description(0, "Living room")?;

    let uploaded = form::submit(&mut property_form, &app.client).await?;

    // Form is cleared after a successful upload
    assert_eq!(property_form.details(), &requests::PropertyDetails::default());
    assert!(property_form.images().is_empty());

    assert_eq!(uploaded.uploaded_images.len(), 2);
    assert_eq!(uploaded.uploaded_images[0].description, "Living room");
    assert_eq!(uploaded.uploaded_images[0].content_type, "image/png");
    assert_eq!(uploaded.uploaded_images[0].size, TINY_PNG.len());
    assert_eq!(uploaded.uploaded_images[1].description, "");
    assert_eq!(uploaded.uploaded_images[1].content_type, "image/jpeg");

    let property = app.client.get_property(&uploaded.property_id).await?;
    assert_eq!(property.id, uploaded.property_id);
    assert_eq!(property.details, sunny_loft_details());
    assert_eq!(
        property.images.iter().map(|i| i.id).collect::<Vec<_>>(),
        uploaded.image_ids()
    );

    let cover = property.cover_image().unwrap();
    let response = app
        .client
        .inner_client
        .get(app.client.image_url(&cover.id))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_TYPE],
        "image/png"
    );
    assert_eq!(response.bytes().await?.as_ref(), TINY_PNG);

    Ok(())
}

#[tokio::test]
async fn content_type_comes_from_the_bytes() -> anyhow::Result<()> {
    let app = spawn_app().await;

    // Declared as png, but the bytes are a jpeg
    let request = requests::UploadProperty {
        files: vec![data_uri::encode("image/png", TINY_JPEG)],
        descriptions: vec!["Front".into()],
        details: sunny_loft_details(),
    };
    let uploaded = app.client.upload_property(&request).await?;
    assert_eq!(uploaded.uploaded_images[0].content_type, "image/jpeg");

    Ok(())
}

#[tokio::test]
async fn reject_non_image_upload() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let request = requests::UploadProperty {
        files: vec![
            TestImage::png("ok.png").data_uri(),
            TestImage::text_as_png("notes.png").data_uri(),
        ],
        descriptions: vec!["".into(), "".into()],
        details: sunny_loft_details(),
    };
    let result = app.client.upload_property(&request).await;
    assert!(
        result
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("File 2 is not a supported image")
    );
    assert_status_code(result, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.property_count().await, 0);

    Ok(())
}

#[tokio::test]
async fn reject_malformed_data_uri() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let request = requests::UploadProperty {
        files: vec!["data:image/png;base64,***".into()],
        descriptions: vec!["".into()],
        details: sunny_loft_details(),
    };
    let result = app.client.upload_property(&request).await;
    assert!(
        result
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("File 1 is not a valid data URI")
    );
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn reject_mismatched_descriptions() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let request = requests::UploadProperty {
        files: vec![
            TestImage::png("a.png").data_uri(),
            TestImage::png("b.png").data_uri(),
        ],
        descriptions: vec!["only one".into()],
        details: sunny_loft_details(),
    };
    let result = app.client.upload_property(&request).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.property_count().await, 0);

    Ok(())
}

#[tokio::test]
async fn reject_invalid_details() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut details = sunny_loft_details();
    details.title = "   ".into();
    details.price = dec!(0);
    let request = requests::UploadProperty {
        files: vec![TestImage::png("a.png").data_uri()],
        descriptions: vec!["".into()],
        details,
    };
    let result = app.client.upload_property(&request).await;
    let message = result.as_ref().unwrap_err().to_string();
    assert!(message.contains("Title is required"));
    assert!(message.contains("Price must be greater than 0"));
    assert_status_code(result, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.property_count().await, 0);

    Ok(())
}

#[tokio::test]
async fn reject_body_over_upload_limit() -> anyhow::Result<()> {
    let app = spawn_app_with_config(api::Config {
        ip: "127.0.0.1".into(),
        port: 0,
        allowed_origins: vec!["*".to_string()],
        max_upload_bytes: 1024,
    })
    .await;

    let mut bytes = TINY_PNG.to_vec();
    bytes.resize(4096, 0);
    let large = TestImage {
        name: "large.png".into(),
        media_type: "image/png".into(),
        bytes,
    };
    let result = app.upload_listing(sunny_loft_details(), &[(&large, "")]).await;
    let message = result.as_ref().unwrap_err().to_string();
    assert!(message.contains("larger than allowed"));
    assert_eq!(app.store.property_count().await, 0);

    // Small uploads still fit under the lowered limit
    let small = TestImage::png("small.png");
    app.upload_listing(sunny_loft_details(), &[(&small, "")])
        .await?;
    assert_eq!(app.store.property_count().await, 1);

    let request = requests::UploadProperty {
        files: vec![large.data_uri()],
        descriptions: vec!["".into()],
        details: sunny_loft_details(),
    };
    let result = app.client.upload_property(&request).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn reject_upload_without_images() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let request = requests::UploadProperty {
        files: vec![],
        descriptions: vec![],
        details: sunny_loft_details(),
    };
    let result = app.client.upload_property(&request).await;
    assert!(
        result
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("At least one image must be uploaded")
    );
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn invalid_form_never_reaches_the_server() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut property_form = PropertyForm::<TestImage>::new();
    property_form.update_details(|details| {
        *details = sunny_loft_details();
        details.property_type = PropertyType::Condo;
    });

    let result = form::submit(&mut property_form, &app.client).await;
    assert!(matches!(result, Err(SubmitError::Invalid(_))));
    assert_eq!(
        property_form.details().property_type,
        PropertyType::Condo
    );
    assert_eq!(app.store.property_count().await, 0);

    Ok(())
}
