//! Mock listings for development and testing
//!
//! Used by the dev-server to give the ui something to show, and by the api's
//! integration tests wherever a populated store is handy.

use crate::{TestApp, TestImage, seaside_villa_details, sunny_loft_details};
use anyhow::Result;
use payloads::{PropertyType, requests::PropertyDetails, responses};
use rust_decimal::dec;

/// A handful of listings covering every property type.
pub struct DevDataset {
    pub sunny_loft: responses::UploadedImages,
    pub seaside_villa: responses::UploadedImages,
    pub garden_bungalow: responses::UploadedImages,
    pub downtown_condo: responses::UploadedImages,
}

impl DevDataset {
    /// Uploads the listings through the api, oldest first.
    pub async fn create(app: &TestApp) -> Result<Self> {
        tracing::info!("🏠 Uploading mock listings");

        let sunny_loft = app
            .upload_listing(
                sunny_loft_details(),
                &[
                    (&TestImage::png("loft-living.png"), "Living room"),
                    (&TestImage::png("loft-kitchen.png"), "Open kitchen"),
                ],
            )
            .await?;

        let seaside_villa = app
            .upload_listing(
                seaside_villa_details(),
                &[
                    (&TestImage::jpeg("villa-front.jpg"), "Front view"),
                    (&TestImage::png("villa-pool.png"), "Pool at dusk"),
                    (&TestImage::png("villa-terrace.png"), ""),
                ],
            )
            .await?;

        let garden_bungalow = app
            .upload_listing(
                garden_bungalow_details(),
                &[(&TestImage::jpeg("bungalow.jpg"), "Garden side")],
            )
            .await?;

        let downtown_condo = app
            .upload_listing(
                downtown_condo_details(),
                &[(&TestImage::png("condo.png"), "Skyline from the balcony")],
            )
            .await?;

        Ok(Self {
            sunny_loft,
            seaside_villa,
            garden_bungalow,
            downtown_condo,
        })
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Mock listings:");
        for (name, uploaded) in [
            ("Sunny Loft", &self.sunny_loft),
            ("Seaside Villa", &self.seaside_villa),
            ("Garden Bungalow", &self.garden_bungalow),
            ("Downtown Condo", &self.downtown_condo),
        ] {
            tracing::info!(
                "   {name}: /properties/{} ({} images)",
                uploaded.property_id,
                uploaded.uploaded_images.len()
            );
        }
    }
}

fn garden_bungalow_details() -> PropertyDetails {
    PropertyDetails {
        title: "Garden Bungalow".into(),
        description: "Single storey home on a quiet street, with a mature \
                      garden, a workshop and room for two cars."
            .into(),
        price: dec!(2400),
        location: "Portland".into(),
        bedrooms: 3,
        bathrooms: dec!(1.5),
        sqft: 1400,
        property_type: PropertyType::Bungalow,
        is_for_sale: false,
    }
}

fn downtown_condo_details() -> PropertyDetails {
    PropertyDetails {
        title: "Downtown Condo".into(),
        description: "Corner unit on the 18th floor, walking distance to \
                      the river and the light rail."
            .into(),
        price: dec!(489000),
        location: "Austin".into(),
        bedrooms: 1,
        bathrooms: dec!(1),
        sqft: 720,
        property_type: PropertyType::Condo,
        is_for_sale: true,
    }
}
