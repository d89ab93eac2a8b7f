use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::lookup::fetch_page;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_deleted::{
    GetDeletedProductsParams, GetDeletedProductsUseCase,
};
use crate::domain::shared::pagination::Page;

pub struct GetDeletedProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetDeletedProductsUseCase for GetDeletedProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetDeletedProductsParams,
    ) -> Result<Page<Product>, ProductError> {
        let pagination = params.pagination;
        self.logger.info(&format!(
            "Fetching soft deleted products (page {}, limit {})",
            pagination.page(),
            pagination.limit()
        ));

        fetch_page(
            self.repository.as_ref(),
            self.logger.as_ref(),
            false,
            &pagination,
            "retrieve deleted products",
            ProductError::NoDeletedProductsFound,
        )
        .await
    }
}
