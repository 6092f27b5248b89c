use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_all::GetAllUsersUseCase;

pub struct GetAllUsersUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllUsersUseCase for GetAllUsersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<User>, UserError> {
        self.logger.debug("Fetching all users");
        let users = self.repository.get_all().await?;
        self.logger.debug(&format!("Found {} users", users.len()));
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::model::Role;
    use mockall::mock;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
            async fn set_role(&self, id: &UserId, role: Role) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &UserId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_all_users() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                User::from_repository(UserId::new("u1"), "a@shop.example".to_string(), Role::Admin),
                User::from_repository(UserId::new("u2"), "b@shop.example".to_string(), Role::User),
            ])
        });

        let use_case = GetAllUsersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        let users = result.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].role, Role::User);
    }
}
