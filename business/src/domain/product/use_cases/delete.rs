use async_trait::async_trait;

use crate::domain::image::model::ImageUrl;
use crate::domain::product::errors::ProductError;
use crate::domain::shared::value_objects::ProductId;

pub struct DeleteProductParams {
    pub id: ProductId,
    /// Last-known image reference; `None`, blank, or the placeholder mean
    /// there is no blob to remove.
    pub image_url: Option<ImageUrl>,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
