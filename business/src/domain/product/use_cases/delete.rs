use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;

#[derive(Debug, Clone, Copy)]
pub struct DeleteProductParams {
    pub id: Uuid,
}

/// Permanently removes a product, active or soft-deleted.
#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
