use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::session::SessionService;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::Role;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::remove::{RemoveUserParams, RemoveUserUseCase};

pub struct RemoveUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub session: Arc<dyn SessionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveUserUseCase for RemoveUserUseCaseImpl {
    async fn execute(&self, params: RemoveUserParams) -> Result<(), UserError> {
        if self.session.current_role().await? != Role::Admin {
            return Err(UserError::NotAllowed);
        }

        self.logger.info(&format!("Removing user: {}", params.id));

        self.repository
            .delete(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        self.logger.info(&format!("User removed: {}", params.id));
        Ok(())
    }
}
