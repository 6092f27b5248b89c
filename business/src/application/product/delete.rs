use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::{RepositoryError, StorageError};
use crate::domain::image::services::ImageStorageService;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::session::SessionService;
use crate::domain::shared::value_objects::PLACEHOLDER;
use crate::domain::user::model::Role;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_storage: Arc<dyn ImageStorageService>,
    pub session: Arc<dyn SessionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        if self.session.current_role().await? != Role::Admin {
            return Err(ProductError::NotAllowed);
        }

        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Blob first, record second: an aborted run leaves at worst an
        // orphaned blob, never a record pointing at nothing.
        let blob = params
            .image_url
            .filter(|url| !url.is_empty() && url.as_str() != PLACEHOLDER);

        if let Some(url) = blob {
            match self.image_storage.delete(&url).await {
                Ok(()) => {}
                Err(StorageError::NotFound) => {
                    self.logger
                        .warn(&format!("Image already absent, continuing: {}", url));
                }
                Err(e) => {
                    self.logger
                        .error(&format!("Image delete failed for {}: {}", params.id, e));
                    return Err(ProductError::Storage(e));
                }
            }
        }

        self.repository
            .delete(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
