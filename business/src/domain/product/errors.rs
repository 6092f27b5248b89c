#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.color_empty")]
    ColorEmpty,
    #[error("product.size_empty")]
    SizeEmpty,
    #[error("product.image_required")]
    ImageRequired,
    #[error("product.not_found")]
    NotFound,
    #[error("product.not_allowed")]
    NotAllowed,
    #[error("product.scan_failed")]
    ScanFailed,
    #[error("product.image_delete_failed")]
    Storage(#[from] crate::domain::errors::StorageError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
    #[error("session.unavailable")]
    Session(#[from] crate::domain::session::SessionError),
}
