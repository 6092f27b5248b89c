use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Role, User};

/// Port to the users collection of the document store.
///
/// `set_role` overwrites only the role field; `delete` removes the whole
/// record. Both surface `NotFound` when the identity is absent.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn set_role(&self, id: &UserId, role: Role) -> Result<(), RepositoryError>;
    async fn delete(&self, id: &UserId) -> Result<(), RepositoryError>;
}
