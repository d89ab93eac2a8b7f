use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::lookup::{find_available_product, storage_failure};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::soft_delete::{
    SoftDeleteProductParams, SoftDeleteProductUseCase,
};

pub struct SoftDeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SoftDeleteProductUseCase for SoftDeleteProductUseCaseImpl {
    async fn execute(&self, params: SoftDeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Soft deleting product: {}", params.id));

        find_available_product(self.repository.as_ref(), self.logger.as_ref(), params.id).await?;

        self.repository
            .mark_unavailable(params.id)
            .await
            .map_err(|e| storage_failure(self.logger.as_ref(), "soft delete product", e))?;

        self.logger
            .info(&format!("Product soft deleted: {}", params.id));
        Ok(())
    }
}
