use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::lookup::{find_available_product, storage_failure};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if params.changes.is_empty() {
            return Err(ProductError::EmptyUpdate);
        }
        params.changes.validate()?;

        find_available_product(self.repository.as_ref(), self.logger.as_ref(), params.id).await?;

        let updated = self
            .repository
            .update(params.id, &params.changes)
            .await
            .map_err(|e| storage_failure(self.logger.as_ref(), "update product", e))?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::ProductChanges;
    use crate::test_support::{MockProductRepo, mock_logger, sample_product};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_update_product_when_exists() {
        let existing = sample_product(true);
        let product_id = existing.id;
        let mut mock_repo = MockProductRepo::new();

        let found = existing.clone();
        mock_repo
            .expect_find_first()
            .returning(move |_, _| Ok(Some(found.clone())));
        mock_repo
            .expect_update()
            .withf(move |id, changes| {
                *id == product_id && changes.name.as_deref() == Some("Gadget")
            })
            .returning(move |_, changes| {
                let mut product = existing.clone();
                product.apply(changes);
                Ok(product)
            });

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateProductParams {
                id: product_id,
                changes: ProductChanges {
                    name: Some("Gadget".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.id, product_id);
        assert_eq!(updated.name, "Gadget");
        assert_eq!(updated.price.to_string(), "9.99");
    }

    #[tokio::test]
    async fn should_reject_empty_update_without_touching_store() {
        // No expectations: any repository call would panic.
        let mock_repo = MockProductRepo::new();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: Uuid::new_v4(),
                changes: ProductChanges::default(),
            })
            .await;

        assert!(matches!(result, Err(ProductError::EmptyUpdate)));
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let mock_repo = MockProductRepo::new();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: Uuid::new_v4(),
                changes: ProductChanges {
                    name: Some("  ".to_string()),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_soft_deleted() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_first()
            .withf(|_, available| *available == Some(true))
            .returning(|_, _| Ok(None));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: Uuid::new_v4(),
                changes: ProductChanges {
                    description: Some(Some("New description".to_string())),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_report_storage_failure_when_update_fails() {
        let existing = sample_product(true);
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_first()
            .returning(move |_, _| Ok(Some(existing.clone())));
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::Database("connection reset".to_string())));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: Uuid::new_v4(),
                changes: ProductChanges {
                    price: Some("1.25".parse().unwrap()),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result, Err(ProductError::Storage("update product"))));
    }
}
