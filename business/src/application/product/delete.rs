use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::lookup::{find_existing_product, storage_failure};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

/// Hard delete. Soft deleted products can be purged as well.
pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        find_existing_product(self.repository.as_ref(), self.logger.as_ref(), params.id).await?;

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| storage_failure(self.logger.as_ref(), "delete product", e))?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
