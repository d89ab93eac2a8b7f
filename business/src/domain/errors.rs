/// Failures reported by store adapters. Never returned past a use case.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error: {0}")]
    Database(String),
}
