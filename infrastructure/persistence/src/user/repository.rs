use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::{Role, User};
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        let entities =
            sqlx::query_as::<_, UserEntity>("SELECT id, email, role FROM users")
                .fetch_all(&self.pool)
                .await
                .map_err(|_| RepositoryError::Transfer)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn set_role(&self, id: &UserId, role: Role) -> Result<(), RepositoryError> {
        // Only the role column moves; email and identity stay untouched.
        let result = sqlx::query("UPDATE users SET role = $2 WHERE id = $1")
            .bind(id.as_str())
            .bind(role.to_string())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::Transfer)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::Transfer)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
