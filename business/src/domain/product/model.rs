use crate::domain::image::model::ImageUrl;
use crate::domain::shared::value_objects::{OptionalField, ProductId};

use super::errors::ProductError;

/// A fully normalized catalog record, ready for persistence.
///
/// Optional fields hold either the caller's value or the placeholder
/// sentinel; they are never empty once a record exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub color: String,
    pub size: String,
    pub image_url: ImageUrl,
    pub gst: String,
    pub discount: String,
    pub hsn_code: String,
    pub remarks: String,
    pub barcode: String,
}

pub struct NewProductProps {
    pub name: String,
    pub color: String,
    pub size: String,
    pub image_url: ImageUrl,
    pub gst: OptionalField,
    pub discount: OptionalField,
    pub hsn_code: OptionalField,
    pub remarks: OptionalField,
    pub barcode: OptionalField,
}

impl Product {
    /// Builds a record under a freshly generated identity.
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        Self::with_identity(ProductId::generate(), props)
    }

    /// Builds a record under an existing identity (update flow).
    ///
    /// Validation happens here, before any remote call: required fields
    /// must be non-blank and an image reference must already be resolved.
    pub fn with_identity(id: ProductId, props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if props.color.trim().is_empty() {
            return Err(ProductError::ColorEmpty);
        }
        if props.size.trim().is_empty() {
            return Err(ProductError::SizeEmpty);
        }
        if props.image_url.is_empty() {
            return Err(ProductError::ImageRequired);
        }

        Ok(Self {
            id,
            name: props.name,
            color: props.color,
            size: props.size,
            image_url: props.image_url,
            gst: props.gst.normalized(),
            discount: props.discount.normalized(),
            hsn_code: props.hsn_code.normalized(),
            remarks: props.remarks.normalized(),
            barcode: props.barcode.normalized(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ProductId,
        name: String,
        color: String,
        size: String,
        image_url: ImageUrl,
        gst: String,
        discount: String,
        hsn_code: String,
        remarks: String,
        barcode: String,
    ) -> Self {
        Self {
            id,
            name,
            color,
            size,
            image_url,
            gst,
            discount,
            hsn_code,
            remarks,
            barcode,
        }
    }
}
