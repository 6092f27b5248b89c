use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::session::SessionService;
use crate::domain::user::model::Role;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub session: Arc<dyn SessionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        if self.session.current_role().await? != Role::Admin {
            return Err(ProductError::NotAllowed);
        }

        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(NewProductProps {
            name: params.name,
            color: params.color,
            size: params.size,
            image_url: params.image_url,
            gst: params.gst,
            discount: params.discount,
            hsn_code: params.hsn_code,
            remarks: params.remarks,
            barcode: params.barcode,
        })?;

        self.repository.insert(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::image::model::ImageUrl;
    use crate::domain::session::SessionError;
    use crate::domain::shared::value_objects::{OptionalField, PLACEHOLDER, ProductId};
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

    fn valid_params() -> CreateProductParams {
        CreateProductParams {
            name: "Shirt".to_string(),
            color: "Blue".to_string(),
            size: "M".to_string(),
            image_url: ImageUrl::new("https://store/img1.jpg"),
            gst: OptionalField::new(""),
            discount: OptionalField::Absent,
            hsn_code: OptionalField::Absent,
            remarks: OptionalField::Absent,
            barcode: OptionalField::Absent,
        }
    }

    #[tokio::test]
    async fn should_create_product_with_normalized_optionals() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session_with(Role::Admin),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params()).await;

        let product = result.unwrap();
        assert_eq!(product.name, "Shirt");
        assert_eq!(product.gst, PLACEHOLDER);
        assert_eq!(product.discount, PLACEHOLDER);
        assert!(!product.id.as_str().is_empty());
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session_with(Role::Admin),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: String::new(),
                ..valid_params()
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_create_without_image_reference() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session_with(Role::Admin),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                image_url: ImageUrl::new(""),
                ..valid_params()
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::ImageRequired));
    }

    #[tokio::test]
    async fn should_reject_create_for_non_admin_session() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session_with(Role::User),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params()).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotAllowed));
    }

    #[tokio::test]
    async fn should_surface_store_failure_on_insert() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::Transfer));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session_with(Role::Admin),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params()).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::Transfer)
        ));
    }
}
