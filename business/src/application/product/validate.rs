use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::product::lookup::storage_failure;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::validate::{
    ValidateProductsParams, ValidateProductsUseCase,
};

pub struct ValidateProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

/// Removes duplicates, keeping the first occurrence of each id.
fn distinct_ids(ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[async_trait]
impl ValidateProductsUseCase for ValidateProductsUseCaseImpl {
    async fn execute(&self, params: ValidateProductsParams) -> Result<Vec<Product>, ProductError> {
        let ids = distinct_ids(params.ids);
        self.logger
            .info(&format!("Validating {} products", ids.len()));

        let products = self
            .repository
            .find_many_by_ids(&ids, true)
            .await
            .map_err(|e| storage_failure(self.logger.as_ref(), "validate products", e))?;

        if products.len() != ids.len() {
            self.logger.warn(&format!(
                "Only {} of {} requested products are available",
                products.len(),
                ids.len()
            ));
            return Err(ProductError::ProductsNotAvailable);
        }

        Ok(products)
    }
}
