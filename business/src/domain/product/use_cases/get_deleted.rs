use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::pagination::{Page, Pagination};

pub struct GetDeletedProductsParams {
    pub pagination: Pagination,
}

#[async_trait]
pub trait GetDeletedProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetDeletedProductsParams,
    ) -> Result<Page<Product>, ProductError>;
}
