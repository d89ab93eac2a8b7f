use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::lookup::storage_failure;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::shared::id_generator::IdGenerator;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub id_generator: Arc<dyn IdGenerator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(
            self.id_generator.new_id(),
            NewProductProps {
                name: params.name,
                description: params.description,
                price: params.price,
            },
        )?;

        let created = self
            .repository
            .create(&product)
            .await
            .map_err(|e| storage_failure(self.logger.as_ref(), "create product", e))?;

        self.logger
            .info(&format!("Product created with id: {}", created.id));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::id_generator::UuidV4Generator;
    use crate::test_support::{MockIdGen, MockProductRepo, mock_logger};
    use uuid::Uuid;

    fn params(name: &str) -> CreateProductParams {
        CreateProductParams {
            name: name.to_string(),
            description: None,
            price: "9.99".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn should_create_available_product_with_generated_id() {
        let generated = Uuid::new_v4();
        let mut mock_ids = MockIdGen::new();
        mock_ids.expect_new_id().times(1).return_const(generated);

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .withf(move |product| product.id == generated && product.available)
            .returning(|product| Ok(product.clone()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            id_generator: Arc::new(mock_ids),
            logger: mock_logger(),
        };

        let product = use_case.execute(params("Widget")).await.unwrap();

        assert_eq!(product.id, generated);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price.to_string(), "9.99");
        assert!(product.available);
    }

    #[tokio::test]
    async fn should_issue_a_new_id_for_every_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .returning(|product| Ok(product.clone()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            id_generator: Arc::new(UuidV4Generator),
            logger: mock_logger(),
        };

        let first = use_case.execute(params("Widget")).await.unwrap();
        let second = use_case.execute(params("Widget")).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_empty() {
        let mock_repo = MockProductRepo::new();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            id_generator: Arc::new(UuidV4Generator),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("")).await;

        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }

    #[tokio::test]
    async fn should_report_storage_failure_when_insert_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::Database("connection reset".to_string())));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            id_generator: Arc::new(UuidV4Generator),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Widget")).await;

        assert!(matches!(result, Err(ProductError::Storage("create product"))));
    }
}
