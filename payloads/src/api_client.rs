use crate::{ListingImageId, PropertyId, UPLOAD_PATH, requests, responses};
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    /// Submit a listing with its encoded images.
    pub async fn upload_property(
        &self,
        details: &requests::UploadProperty,
    ) -> Result<responses::UploadedImages, ClientError> {
        let response = self.post(UPLOAD_PATH, details).await?;
        ok_body(response).await
    }

    /// All listings, newest first.
    pub async fn list_properties(
        &self,
    ) -> Result<Vec<responses::PropertySummary>, ClientError> {
        let response = self.empty_get("properties").await?;
        ok_body(response).await
    }

    pub async fn get_property(
        &self,
        property_id: &PropertyId,
    ) -> Result<responses::Property, ClientError> {
        let response = self.post("get_property", property_id).await?;
        ok_body(response).await
    }

    /// Returns the URL for fetching raw image bytes.
    /// Use this for `<img src>` attributes in the UI.
    pub fn image_url(&self, image_id: &ListingImageId) -> String {
        format!("{}/api/images/{}", self.address, image_id.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(reqwest::StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
