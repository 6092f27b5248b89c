use sqlx::FromRow;

use business::domain::image::model::ImageUrl;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub color: String,
    pub size: String,
    pub image_url: String,
    pub gst: String,
    pub discount: String,
    pub hsn_code: String,
    pub remarks: String,
    pub barcode: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.name,
            self.color,
            self.size,
            ImageUrl::new(self.image_url),
            self.gst,
            self.discount,
            self.hsn_code,
            self.remarks,
            self.barcode,
        )
    }
}
