use async_trait::async_trait;

use crate::domain::image::model::ImageUrl;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::{OptionalField, ProductId};

pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: String,
    pub color: String,
    pub size: String,
    /// Either freshly uploaded or carried over from the prior record.
    pub image_url: ImageUrl,
    pub gst: OptionalField,
    pub discount: OptionalField,
    pub hsn_code: OptionalField,
    pub remarks: OptionalField,
    pub barcode: OptionalField,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
