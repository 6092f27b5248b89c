use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{Role, User};

pub struct SetRoleParams {
    pub id: UserId,
    pub role: Role,
}

/// Overwrites a user's role, then returns the re-fetched full listing so
/// callers never patch their view optimistically.
#[async_trait]
pub trait SetRoleUseCase: Send + Sync {
    async fn execute(&self, params: SetRoleParams) -> Result<Vec<User>, UserError>;
}
