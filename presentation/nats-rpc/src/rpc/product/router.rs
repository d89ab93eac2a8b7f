use std::sync::Arc;

use poem::http::StatusCode;
use uuid::Uuid;

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_deleted::{
    GetDeletedProductsParams, GetDeletedProductsUseCase,
};
use business::domain::product::use_cases::soft_delete::{
    SoftDeleteProductParams, SoftDeleteProductUseCase,
};
use business::domain::product::use_cases::update::UpdateProductUseCase;
use business::domain::product::use_cases::validate::{
    ValidateProductsParams, ValidateProductsUseCase,
};

use crate::rpc::commands::ProductCommand;
use crate::rpc::error::{ErrorResponse, IntoErrorResponse, ReplyEnvelope, parse_payload};
use crate::rpc::product::dto::{
    CreateProductRequest, MessageResponse, PaginatedProductsResponse, PaginationRequest,
    ProductEnvelope, ProductIdRequest, ProductResponse, UpdateProductRequest, parse_id,
};

type Reply = Result<ReplyEnvelope, ErrorResponse>;

/// Dispatches product commands to their use cases and shapes the replies.
pub struct ProductRouter {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    soft_delete_use_case: Arc<dyn SoftDeleteProductUseCase>,
    get_deleted_use_case: Arc<dyn GetDeletedProductsUseCase>,
    validate_use_case: Arc<dyn ValidateProductsUseCase>,
}

impl ProductRouter {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        soft_delete_use_case: Arc<dyn SoftDeleteProductUseCase>,
        get_deleted_use_case: Arc<dyn GetDeletedProductsUseCase>,
        validate_use_case: Arc<dyn ValidateProductsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            soft_delete_use_case,
            get_deleted_use_case,
            validate_use_case,
        }
    }

    /// Handles one request. Always produces a reply, success or error.
    pub async fn handle(&self, command: &str, payload: &[u8]) -> ReplyEnvelope {
        let Ok(command) = command.parse::<ProductCommand>() else {
            return ReplyEnvelope::error(ErrorResponse::new(
                StatusCode::NOT_FOUND,
                "UnknownCommand",
                format!("No handler for command {}", command),
            ));
        };

        let reply = match command {
            ProductCommand::CreateProduct => self.create_product(payload).await,
            ProductCommand::FindAllProducts => self.find_all_products(payload).await,
            ProductCommand::FindOneProduct => self.find_one_product(payload).await,
            ProductCommand::UpdateProduct => self.update_product(payload).await,
            ProductCommand::DeleteProduct => self.delete_product(payload).await,
            ProductCommand::SoftDeleteProduct => self.soft_delete_product(payload).await,
            ProductCommand::FindDeletedProducts => self.find_deleted_products(payload).await,
            ProductCommand::ValidateProducts => self.validate_products(payload).await,
        };

        reply.unwrap_or_else(ReplyEnvelope::error)
    }

    async fn create_product(&self, payload: &[u8]) -> Reply {
        let request: CreateProductRequest = parse_payload(payload)?;
        let params = request
            .into_params()
            .map_err(IntoErrorResponse::into_error_response)?;

        let product = self
            .create_use_case
            .execute(params)
            .await
            .map_err(IntoErrorResponse::into_error_response)?;

        Ok(ReplyEnvelope::ok(&ProductEnvelope {
            data: product.into(),
            message: "Product created successfully".to_string(),
            status: StatusCode::CREATED.as_u16(),
        }))
    }

    async fn find_all_products(&self, payload: &[u8]) -> Reply {
        let request: Option<PaginationRequest> = parse_payload(payload)?;
        let pagination = request
            .unwrap_or_default()
            .into_pagination()
            .map_err(IntoErrorResponse::into_error_response)?;

        let page = self
            .get_all_use_case
            .execute(GetAllProductsParams { pagination })
            .await
            .map_err(IntoErrorResponse::into_error_response)?;

        Ok(ReplyEnvelope::ok(&PaginatedProductsResponse::from(page)))
    }

    async fn find_one_product(&self, payload: &[u8]) -> Reply {
        let request: ProductIdRequest = parse_payload(payload)?;
        let id = parse_id(&request.id)?;

        let product = self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
            .map_err(IntoErrorResponse::into_error_response)?;

        Ok(ReplyEnvelope::ok(&ProductEnvelope {
            data: product.into(),
            message: "Product found successfully".to_string(),
            status: StatusCode::OK.as_u16(),
        }))
    }

    async fn update_product(&self, payload: &[u8]) -> Reply {
        let request: UpdateProductRequest = parse_payload(payload)?;
        let id = parse_id(&request.id)?;
        let params = request
            .into_params(id)
            .map_err(IntoErrorResponse::into_error_response)?;

        let product = self
            .update_use_case
            .execute(params)
            .await
            .map_err(IntoErrorResponse::into_error_response)?;

        Ok(ReplyEnvelope::ok(&ProductEnvelope {
            data: product.into(),
            message: "Product updated successfully".to_string(),
            status: StatusCode::OK.as_u16(),
        }))
    }

    async fn delete_product(&self, payload: &[u8]) -> Reply {
        let request: ProductIdRequest = parse_payload(payload)?;
        let id = parse_id(&request.id)?;

        self.delete_use_case
            .execute(DeleteProductParams { id })
            .await
            .map_err(IntoErrorResponse::into_error_response)?;

        Ok(ReplyEnvelope::ok(&MessageResponse {
            message: format!("Product with id {} deleted successfully", id),
            status: StatusCode::OK.as_u16(),
        }))
    }

    async fn soft_delete_product(&self, payload: &[u8]) -> Reply {
        let request: ProductIdRequest = parse_payload(payload)?;
        let id = parse_id(&request.id)?;

        self.soft_delete_use_case
            .execute(SoftDeleteProductParams { id })
            .await
            .map_err(IntoErrorResponse::into_error_response)?;

        Ok(ReplyEnvelope::ok(&MessageResponse {
            message: format!("Product with id {} soft deleted successfully", id),
            status: StatusCode::OK.as_u16(),
        }))
    }

    async fn find_deleted_products(&self, payload: &[u8]) -> Reply {
        let request: Option<PaginationRequest> = parse_payload(payload)?;
        let pagination = request
            .unwrap_or_default()
            .into_pagination()
            .map_err(IntoErrorResponse::into_error_response)?;

        let page = self
            .get_deleted_use_case
            .execute(GetDeletedProductsParams { pagination })
            .await
            .map_err(IntoErrorResponse::into_error_response)?;

        Ok(ReplyEnvelope::ok(&PaginatedProductsResponse::from(page)))
    }

    async fn validate_products(&self, payload: &[u8]) -> Reply {
        let raw_ids: Vec<String> = parse_payload(payload)?;
        // No product carries a non-UUID id, so one in the batch is a missing product.
        let ids = raw_ids
            .iter()
            .map(|raw| Uuid::parse_str(raw))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ProductError::ProductsNotAvailable.into_error_response())?;

        let products = self
            .validate_use_case
            .execute(ValidateProductsParams { ids })
            .await
            .map_err(IntoErrorResponse::into_error_response)?;

        let body: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
        Ok(ReplyEnvelope::ok(&body))
    }
}
