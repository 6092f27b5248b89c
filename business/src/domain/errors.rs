/// Errors surfaced by the document store and blob store ports.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.transfer")]
    Transfer,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn transfer() -> Self {
        RepositoryError::Transfer
    }
}

/// Errors surfaced by the blob store port.
///
/// `NotFound` marks a delete aimed at an already-absent object so the
/// deletion flow can downgrade it instead of aborting.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.not_found")]
    NotFound,
    #[error("storage.invalid_reference")]
    InvalidReference,
    #[error("storage.transfer")]
    Transfer,
}
