use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::Product;

/// Port to the products collection of the document store.
///
/// Every operation is a single round trip the store applies atomically at
/// record granularity. `insert` creates under a new identity; `update`
/// overwrites all fields of an existing record and surfaces `NotFound`
/// from the store itself when the identity is absent.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
}
