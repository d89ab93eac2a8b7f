use poem::http::StatusCode;

use business::domain::product::errors::{ErrorKind, ProductError};

use crate::rpc::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> ErrorResponse {
        let (status, name) = match self.kind() {
            ErrorKind::BadRequest => (StatusCode::BAD_REQUEST, "ValidationError"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ErrorKind::StorageFailure => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        ErrorResponse::new(status, name, self.to_string())
    }
}
