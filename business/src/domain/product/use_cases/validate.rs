use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct ValidateProductsParams {
    pub ids: Vec<Uuid>,
}

/// Confirms that every requested product exists and is available.
#[async_trait]
pub trait ValidateProductsUseCase: Send + Sync {
    async fn execute(&self, params: ValidateProductsParams) -> Result<Vec<Product>, ProductError>;
}
