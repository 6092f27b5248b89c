#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image.source_unreadable")]
    SourceUnreadable,
    #[error("image.storage")]
    Storage(#[from] crate::domain::errors::StorageError),
}
