use uuid::Uuid;

/// Coarse classification surfaced to callers of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    StorageFailure,
}

/// Errors returned by the product use cases.
///
/// Storage errors carry only the name of the failed operation; the
/// underlying repository error is logged and never exposed.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product name must not be empty")]
    NameEmpty,
    #[error("Price must be non-negative with at most 4 decimal places")]
    InvalidPrice,
    #[error("No data provided for update")]
    EmptyUpdate,
    #[error("Page and limit must be greater than zero")]
    InvalidPagination,
    #[error("Product with id {0} not found")]
    NotFound(Uuid),
    #[error("No products found")]
    NoProductsFound,
    #[error("No deleted products found")]
    NoDeletedProductsFound,
    #[error("Some products are not available")]
    ProductsNotAvailable,
    #[error("Failed to {0}")]
    Storage(&'static str),
}

impl ProductError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProductError::NameEmpty
            | ProductError::InvalidPrice
            | ProductError::EmptyUpdate
            | ProductError::InvalidPagination => ErrorKind::BadRequest,
            ProductError::NotFound(_)
            | ProductError::NoProductsFound
            | ProductError::NoDeletedProductsFound
            | ProductError::ProductsNotAvailable => ErrorKind::NotFound,
            ProductError::Storage(_) => ErrorKind::StorageFailure,
        }
    }
}
