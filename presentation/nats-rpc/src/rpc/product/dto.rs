use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, ProductChanges};
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::update::UpdateProductParams;
use business::domain::product::value_objects::Price;
use business::domain::shared::pagination::{Page, PageMeta, Pagination};

use crate::rpc::error::ErrorResponse;

/// Parses a product id the way callers expect: any non-UUID is a validation error.
pub fn parse_id(raw: &str) -> Result<Uuid, ErrorResponse> {
    Uuid::parse_str(raw)
        .map_err(|_| ErrorResponse::validation("Validation failed (uuid is expected)"))
}

/// JSON numbers arrive as `f64`; going through their shortest decimal
/// representation keeps `9.99` as `9.99` instead of its binary expansion.
fn price_from_number(value: f64) -> Result<Price, ProductError> {
    if !value.is_finite() {
        return Err(ProductError::InvalidPrice);
    }
    let decimal = BigDecimal::from_str(&value.to_string()).map_err(|_| ProductError::InvalidPrice)?;
    Price::new(decimal)
}

/// Payload of `create_product`. A caller supplied `id` is not read.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl CreateProductRequest {
    pub fn into_params(self) -> Result<CreateProductParams, ProductError> {
        Ok(CreateProductParams {
            name: self.name,
            description: self.description,
            price: price_from_number(self.price)?,
        })
    }
}

/// Marks a field as sent, so an explicit `null` is told apart from an absent key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Payload of `update_product`: the id plus any subset of writable fields.
/// `"description": null` clears the description.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl UpdateProductRequest {
    pub fn into_params(self, id: Uuid) -> Result<UpdateProductParams, ProductError> {
        Ok(UpdateProductParams {
            id,
            changes: ProductChanges {
                name: self.name,
                description: self.description,
                price: self.price.map(price_from_number).transpose()?,
            },
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PaginationRequest {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PaginationRequest {
    pub fn into_pagination(self) -> Result<Pagination, ProductError> {
        Pagination::new(self.page, self.limit)
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductIdRequest {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price.value().to_f64().unwrap_or_default(),
            available: product.available,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Single product plus confirmation, as returned by create/find one/update.
#[derive(Debug, Serialize)]
pub struct ProductEnvelope {
    pub data: ProductResponse,
    pub message: String,
    pub status: u16,
}

#[derive(Debug, Serialize)]
pub struct PaginatedProductsResponse {
    pub data: Vec<ProductResponse>,
    pub meta: PageMeta,
}

impl From<Page<Product>> for PaginatedProductsResponse {
    fn from(page: Page<Product>) -> Self {
        Self {
            data: page.data.into_iter().map(ProductResponse::from).collect(),
            meta: page.meta,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    pub status: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_decimal_price_exact() {
        let price = price_from_number(9.99).unwrap();
        assert_eq!(price.to_string(), "9.99");
    }

    #[test]
    fn should_reject_price_with_too_many_decimals() {
        assert!(matches!(
            price_from_number(0.12345),
            Err(ProductError::InvalidPrice)
        ));
    }

    #[test]
    fn should_ignore_id_on_create() {
        let request: CreateProductRequest = serde_json::from_str(
            r#"{"id":"8d7e1d3c-0a6b-4b44-9a53-1f0f3a8d2b11","name":"Widget","price":9.99}"#,
        )
        .unwrap();
        let params = request.into_params().unwrap();
        assert_eq!(params.name, "Widget");
        assert!(params.description.is_none());
    }

    #[test]
    fn should_build_empty_changes_when_only_id_is_sent() {
        let id = Uuid::new_v4();
        let request: UpdateProductRequest =
            serde_json::from_str(&format!(r#"{{"id":"{}"}}"#, id)).unwrap();
        let params = request.into_params(id).unwrap();
        assert!(params.changes.is_empty());
    }

    #[test]
    fn should_read_null_description_as_clear() {
        let id = Uuid::new_v4();
        let request: UpdateProductRequest =
            serde_json::from_str(&format!(r#"{{"id":"{}","description":null}}"#, id)).unwrap();
        let params = request.into_params(id).unwrap();
        assert_eq!(params.changes.description, Some(None));
        assert!(!params.changes.is_empty());
    }

    #[test]
    fn should_keep_description_untouched_when_absent() {
        let id = Uuid::new_v4();
        let request: UpdateProductRequest =
            serde_json::from_str(&format!(r#"{{"id":"{}","name":"Gadget"}}"#, id)).unwrap();
        let params = request.into_params(id).unwrap();
        assert_eq!(params.changes.description, None);
    }

    #[test]
    fn should_reject_invalid_uuid() {
        let err = parse_id("not-a-uuid").unwrap_err();
        assert_eq!(err.status, 400);
    }

    #[test]
    fn should_serialize_product_in_camel_case() {
        let now = Utc::now();
        let product = Product::from_repository(
            Uuid::nil(),
            "Widget".to_string(),
            None,
            "9.99".parse().unwrap(),
            true,
            now,
            now,
        );
        let json = serde_json::to_value(ProductResponse::from(product)).unwrap();
        assert_eq!(json["price"], serde_json::json!(9.99));
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
