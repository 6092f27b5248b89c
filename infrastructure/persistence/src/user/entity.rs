use sqlx::FromRow;

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::{Role, User};

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: String,
    pub email: String,
    pub role: String,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User::from_repository(
            UserId::new(self.id),
            self.email,
            self.role.parse::<Role>().unwrap_or(Role::User),
        )
    }
}
