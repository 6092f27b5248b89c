use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;

pub struct RemoveUserParams {
    pub id: UserId,
}

/// Deletes the user record. Callers drop the entry from their known
/// listing locally; no re-fetch is needed for a record they just removed.
#[async_trait]
pub trait RemoveUserUseCase: Send + Sync {
    async fn execute(&self, params: RemoveUserParams) -> Result<(), UserError>;
}
