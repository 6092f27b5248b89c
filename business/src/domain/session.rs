use async_trait::async_trait;

use crate::domain::user::model::Role;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session.unavailable")]
    Unavailable,
}

/// Port to the external identity provider.
///
/// Mutating use cases consult the current actor's role before touching the
/// stores; enforcement beyond that check belongs to the provider itself.
#[async_trait]
pub trait SessionService: Send + Sync {
    async fn current_role(&self) -> Result<Role, SessionError>;
}
