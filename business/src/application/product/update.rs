use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::session::SessionService;
use crate::domain::user::model::Role;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub session: Arc<dyn SessionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        if self.session.current_role().await? != Role::Admin {
            return Err(ProductError::NotAllowed);
        }

        self.logger
            .info(&format!("Updating product: {}", params.id));

        let product = Product::with_identity(
            params.id,
            NewProductProps {
                name: params.name,
                color: params.color,
                size: params.size,
                image_url: params.image_url,
                gst: params.gst,
                discount: params.discount,
                hsn_code: params.hsn_code,
                remarks: params.remarks,
                barcode: params.barcode,
            },
        )?;

        // The store itself reports a missing identity; no local pre-check.
        self.repository
            .update(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image::model::ImageUrl;
    use crate::domain::session::SessionError;
    use crate::domain::shared::value_objects::{OptionalField, ProductId};
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
            async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Session {}

        #[async_trait]
        impl SessionService for Session {
            async fn current_role(&self) -> Result<Role, SessionError>;
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

    fn session_with(role: Role) -> Arc<dyn SessionService> {
        let mut session = MockSession::new();
        session.expect_current_role().returning(move || Ok(role));
        Arc::new(session)
    }

    fn valid_params(id: &str) -> UpdateProductParams {
        UpdateProductParams {
            id: ProductId::new(id),
            name: "Shirt".to_string(),
            color: "Red".to_string(),
            size: "L".to_string(),
            image_url: ImageUrl::new("https://store/img2.jpg"),
            gst: OptionalField::new("12%"),
            discount: OptionalField::Absent,
            hsn_code: OptionalField::Absent,
            remarks: OptionalField::Absent,
            barcode: OptionalField::Absent,
        }
    }

    #[tokio::test]
    async fn should_update_product_preserving_identity() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update().returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session_with(Role::Admin),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params("1718000000000ab12")).await;

        let product = result.unwrap();
        assert_eq!(product.id, ProductId::new("1718000000000ab12"));
        assert_eq!(product.color, "Red");
        assert_eq!(product.gst, "12%");
    }

    #[tokio::test]
    async fn should_return_not_found_when_identity_absent_in_store() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session_with(Role::Admin),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params("gone")).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_update_when_required_field_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session_with(Role::Admin),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                size: String::new(),
                ..valid_params("1718000000000ab12")
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::SizeEmpty));
    }

    #[tokio::test]
    async fn should_reject_update_for_non_admin_session() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session_with(Role::User),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params("1718000000000ab12")).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotAllowed));
    }
}
