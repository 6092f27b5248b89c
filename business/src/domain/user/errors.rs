#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.not_found")]
    NotFound,
    #[error("user.not_allowed")]
    NotAllowed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
    #[error("session.unavailable")]
    Session(#[from] crate::domain::session::SessionError),
}
