use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{Product, ProductChanges};
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::id_generator::IdGenerator;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn create(&self, product: &Product) -> Result<Product, RepositoryError>;
        async fn find_many(&self, available: bool, skip: u64, take: u64) -> Result<Vec<Product>, RepositoryError>;
        async fn count(&self, available: bool) -> Result<u64, RepositoryError>;
        async fn find_first(&self, id: Uuid, available: Option<bool>) -> Result<Option<Product>, RepositoryError>;
        async fn find_many_by_ids(&self, ids: &[Uuid], available: bool) -> Result<Vec<Product>, RepositoryError>;
        async fn update(&self, id: Uuid, changes: &ProductChanges) -> Result<Product, RepositoryError>;
        async fn mark_unavailable(&self, id: Uuid) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub IdGen {}

    impl IdGenerator for IdGen {
        fn new_id(&self) -> Uuid;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn sample_product(available: bool) -> Product {
    let now = Utc::now();
    Product::from_repository(
        Uuid::new_v4(),
        "Widget".to_string(),
        Some("A small widget".to_string()),
        "9.99".parse().unwrap(),
        available,
        now,
        now,
    )
}
