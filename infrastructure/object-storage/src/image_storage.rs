use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

use business::domain::errors::StorageError;
use business::domain::image::key::ObjectKey;
use business::domain::image::model::ImageUrl;
use business::domain::image::services::ImageStorageService;

use crate::client::ObjectStorageClient;

/// Blob store adapter speaking plain HTTP: one `PUT` per upload, one
/// `DELETE` per removal. The store acknowledges a `PUT` only after the
/// object is durably written, so an error response means no blob exists
/// under the generated key.
pub struct ImageStorageHttp {
    client: ObjectStorageClient,
}

impl ImageStorageHttp {
    pub fn new(client: ObjectStorageClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageStorageService for ImageStorageHttp {
    async fn put(
        &self,
        key: &ObjectKey,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<ImageUrl, StorageError> {
        let url = self.client.object_url(key.as_str());

        let response = self
            .client
            .client
            .put(&url)
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|_| StorageError::Transfer)?;

        if !response.status().is_success() {
            return Err(StorageError::Transfer);
        }

        Ok(ImageUrl::new(url))
    }

    async fn delete(&self, url: &ImageUrl) -> Result<(), StorageError> {
        let key = self
            .client
            .key_for_url(url.as_str())
            .ok_or(StorageError::InvalidReference)?;

        let response = self
            .client
            .client
            .delete(self.client.object_url(&key))
            .send()
            .await
            .map_err(|_| StorageError::Transfer)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(StorageError::NotFound),
            status if status.is_success() => Ok(()),
            _ => Err(StorageError::Transfer),
        }
    }
}
