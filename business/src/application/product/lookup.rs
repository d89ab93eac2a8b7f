use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::pagination::{Page, Pagination};

/// Logs a repository failure and replaces it with an opaque storage error.
pub fn storage_failure(
    logger: &dyn Logger,
    operation: &'static str,
    err: RepositoryError,
) -> ProductError {
    logger.error(&format!("Failed to {}: {}", operation, err));
    ProductError::Storage(operation)
}

/// Returns the product only if it exists and is available.
pub async fn find_available_product(
    repository: &dyn ProductRepository,
    logger: &dyn Logger,
    id: Uuid,
) -> Result<Product, ProductError> {
    repository
        .find_first(id, Some(true))
        .await
        .map_err(|e| storage_failure(logger, "retrieve product", e))?
        .ok_or(ProductError::NotFound(id))
}

/// Returns the product whatever its availability.
pub async fn find_existing_product(
    repository: &dyn ProductRepository,
    logger: &dyn Logger,
    id: Uuid,
) -> Result<Product, ProductError> {
    repository
        .find_first(id, None)
        .await
        .map_err(|e| storage_failure(logger, "retrieve product", e))?
        .ok_or(ProductError::NotFound(id))
}

/// Fetches one page of products with the given availability, counting the
/// matching rows concurrently. An empty page is reported as `empty`.
pub async fn fetch_page(
    repository: &dyn ProductRepository,
    logger: &dyn Logger,
    available: bool,
    pagination: &Pagination,
    operation: &'static str,
    empty: ProductError,
) -> Result<Page<Product>, ProductError> {
    let (data, total) = tokio::try_join!(
        repository.find_many(available, pagination.skip(), u64::from(pagination.limit())),
        repository.count(available),
    )
    .map_err(|e| storage_failure(logger, operation, e))?;

    if data.is_empty() {
        return Err(empty);
    }

    Ok(Page::new(data, total, pagination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockProductRepo, mock_logger, sample_product};

    #[tokio::test]
    async fn should_return_available_product() {
        let product = sample_product(true);
        let id = product.id;
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_first()
            .withf(move |requested, available| *requested == id && *available == Some(true))
            .returning(move |_, _| Ok(Some(product.clone())));

        let logger = mock_logger();
        let result = find_available_product(&mock_repo, logger.as_ref(), id).await;

        assert_eq!(result.unwrap().id, id);
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_first().returning(|_, _| Ok(None));

        let id = Uuid::new_v4();
        let logger = mock_logger();
        let result = find_available_product(&mock_repo, logger.as_ref(), id).await;

        assert!(matches!(result, Err(ProductError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn should_look_up_any_state_for_existing_product() {
        let product = sample_product(false);
        let id = product.id;
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_first()
            .withf(|_, available| available.is_none())
            .returning(move |_, _| Ok(Some(product.clone())));

        let logger = mock_logger();
        let result = find_existing_product(&mock_repo, logger.as_ref(), id).await;

        assert!(!result.unwrap().available);
    }

    #[tokio::test]
    async fn should_hide_repository_error_behind_storage_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_first()
            .returning(|_, _| Err(RepositoryError::Database("connection reset".to_string())));

        let logger = mock_logger();
        let result = find_available_product(&mock_repo, logger.as_ref(), Uuid::new_v4()).await;

        assert!(matches!(
            result,
            Err(ProductError::Storage("retrieve product"))
        ));
    }
}
