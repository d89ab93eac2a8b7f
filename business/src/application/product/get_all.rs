use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::lookup::fetch_page;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use crate::domain::shared::pagination::Page;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Page<Product>, ProductError> {
        let pagination = params.pagination;
        self.logger.info(&format!(
            "Fetching available products (page {}, limit {})",
            pagination.page(),
            pagination.limit()
        ));

        let page = fetch_page(
            self.repository.as_ref(),
            self.logger.as_ref(),
            true,
            &pagination,
            "retrieve products",
            ProductError::NoProductsFound,
        )
        .await?;

        self.logger.info(&format!(
            "Found {} of {} available products",
            page.data.len(),
            page.meta.total
        ));
        Ok(page)
    }
}
