use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;

pub struct SoftDeleteProductParams {
    pub id: Uuid,
}

/// Marks a product as unavailable. There is no inverse operation.
#[async_trait]
pub trait SoftDeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: SoftDeleteProductParams) -> Result<(), ProductError>;
}
