pub mod mock;

use api::{Config, store::ListingStore, telemetry};
use payloads::{
    PropertyType, data_uri,
    form::{EncodingError, ImageFile},
    requests,
};
use reqwest::StatusCode;
use rust_decimal::dec;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

/// A 1x1 transparent PNG.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
    0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00,
    0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// The start of a JFIF file; enough for content sniffing.
pub const TINY_JPEG: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01,
    0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xD9,
];

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
    pub store: ListingStore,
}

impl TestApp {
    /// Upload a listing directly, bypassing the form.
    pub async fn upload_listing(
        &self,
        details: requests::PropertyDetails,
        images: &[(&TestImage, &str)],
    ) -> anyhow::Result<payloads::responses::UploadedImages> {
        let request = requests::UploadProperty {
            files: images
                .iter()
                .map(|(image, _)| image.data_uri())
                .collect(),
            descriptions: images
                .iter()
                .map(|(_, description)| description.to_string())
                .collect(),
            details,
        };
        Ok(self.client.upload_property(&request).await?)
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    spawn_app_with_config(Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
        max_upload_bytes: api::DEFAULT_MAX_UPLOAD_BYTES,
    })
    .await
}

/// Spawn with a custom config, e.g. a lower body limit.
pub async fn spawn_app_with_config(mut config: Config) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let store = ListingStore::new();

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let server = api::build(&mut config, store.clone()).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: client,
        },
        store,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

/// An in-memory file standing in for one picked in the browser.
#[derive(Debug, Clone)]
pub struct TestImage {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl TestImage {
    pub fn png(name: &str) -> Self {
        Self {
            name: name.into(),
            media_type: "image/png".into(),
            bytes: TINY_PNG.to_vec(),
        }
    }

    pub fn jpeg(name: &str) -> Self {
        Self {
            name: name.into(),
            media_type: "image/jpeg".into(),
            bytes: TINY_JPEG.to_vec(),
        }
    }

    /// A file that claims to be an image but holds plain text.
    pub fn text_as_png(name: &str) -> Self {
        Self {
            name: name.into(),
            media_type: "image/png".into(),
            bytes: b"definitely not a picture".to_vec(),
        }
    }

    pub fn data_uri(&self) -> String {
        data_uri::encode(&self.media_type, &self.bytes)
    }
}

impl ImageFile for TestImage {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    async fn read(&self) -> Result<Vec<u8>, EncodingError> {
        Ok(self.bytes.clone())
    }
}

pub fn sunny_loft_details() -> requests::PropertyDetails {
    requests::PropertyDetails {
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

pub fn seaside_villa_details() -> requests::PropertyDetails {
    requests::PropertyDetails {
        title: "Seaside Villa".into(),
        description: "Five minutes from the beach, with a wraparound \
                      terrace and a private pool."
            .into(),
        price: dec!(1250000),
        location: "Santa Cruz".into(),
        bedrooms: 4,
        bathrooms: dec!(3.5),
        sqft: 3200,
        property_type: PropertyType::Villa,
        is_for_sale: true,
    }
}
