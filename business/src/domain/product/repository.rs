use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductChanges};

/// Persistence port for products. All `available` filters are exact matches.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn find_many(
        &self,
        available: bool,
        skip: u64,
        take: u64,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn count(&self, available: bool) -> Result<u64, RepositoryError>;
    /// `available: None` matches the product in any state.
    async fn find_first(
        &self,
        id: Uuid,
        available: Option<bool>,
    ) -> Result<Option<Product>, RepositoryError>;
    async fn find_many_by_ids(
        &self,
        ids: &[Uuid],
        available: bool,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn update(&self, id: Uuid, changes: &ProductChanges) -> Result<Product, RepositoryError>;
    async fn mark_unavailable(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
