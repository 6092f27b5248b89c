use async_trait::async_trait;

use crate::domain::image::model::ImageUrl;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::OptionalField;

pub struct CreateProductParams {
    pub name: String,
    pub color: String,
    pub size: String,
    /// Reference already resolved by the upload pipeline.
    pub image_url: ImageUrl,
    pub gst: OptionalField,
    pub discount: OptionalField,
    pub hsn_code: OptionalField,
    pub remarks: OptionalField,
    pub barcode: OptionalField,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
