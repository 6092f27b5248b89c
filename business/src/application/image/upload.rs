use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::image::errors::ImageError;
use crate::domain::image::key::ObjectKey;
use crate::domain::image::model::ImageUrl;
use crate::domain::image::services::{ImageSourceService, ImageStorageService};
use crate::domain::image::use_cases::upload::{UploadImageParams, UploadImageUseCase};
use crate::domain::logger::Logger;

pub struct UploadImageUseCaseImpl {
    pub source: Arc<dyn ImageSourceService>,
    pub storage: Arc<dyn ImageStorageService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UploadImageUseCase for UploadImageUseCaseImpl {
    async fn execute(&self, params: UploadImageParams) -> Result<ImageUrl, ImageError> {
        self.logger
            .info(&format!("Uploading image from: {}", params.source_uri));

        // Resolve the local bytes before touching the store; a stale
        // handle must not leave anything behind remotely.
        let bytes = self.source.read(&params.source_uri).await?;

        let key = ObjectKey::generate(&params.content_type);
        let url = self
            .storage
            .put(&key, bytes, &params.content_type)
            .await?;

        self.logger.info(&format!("Image stored at: {}", url));
        Ok(url)
    }
}
