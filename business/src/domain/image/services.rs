use async_trait::async_trait;

use crate::domain::errors::StorageError;

use super::errors::ImageError;
use super::key::ObjectKey;
use super::model::ImageUrl;

/// Port to the external blob store.
///
/// `put` returns the public reference only once the store acknowledged the
/// write; a failed call leaves no reference behind. `delete` reports an
/// already-absent object as `StorageError::NotFound` so callers can decide
/// whether that matters.
#[async_trait]
pub trait ImageStorageService: Send + Sync {
    async fn put(
        &self,
        key: &ObjectKey,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<ImageUrl, StorageError>;

    async fn delete(&self, url: &ImageUrl) -> Result<(), StorageError>;
}

/// Port reading the bytes behind a locally selected file handle.
#[async_trait]
pub trait ImageSourceService: Send + Sync {
    async fn read(&self, uri: &str) -> Result<Vec<u8>, ImageError>;
}
