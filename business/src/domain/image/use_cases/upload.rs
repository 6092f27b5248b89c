use async_trait::async_trait;

use crate::domain::image::errors::ImageError;
use crate::domain::image::model::ImageUrl;

pub struct UploadImageParams {
    pub source_uri: String,
    pub content_type: String,
}

#[async_trait]
pub trait UploadImageUseCase: Send + Sync {
    async fn execute(&self, params: UploadImageParams) -> Result<ImageUrl, ImageError>;
}
