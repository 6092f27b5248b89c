use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::session::SessionService;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{Role, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::set_role::{SetRoleParams, SetRoleUseCase};

pub struct SetRoleUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub session: Arc<dyn SessionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetRoleUseCase for SetRoleUseCaseImpl {
    async fn execute(&self, params: SetRoleParams) -> Result<Vec<User>, UserError> {
        if self.session.current_role().await? != Role::Admin {
            return Err(UserError::NotAllowed);
        }

        self.logger
            .info(&format!("Setting role of {} to {}", params.id, params.role));

        self.repository
            .set_role(&params.id, params.role)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        // Role changes are visible to concurrent viewer logic, so the
        // listing is re-fetched rather than patched locally.
        let users = self.repository.get_all().await?;

        self.logger
            .info(&format!("Role of {} is now {}", params.id, params.role));
        Ok(users)
    }
}
