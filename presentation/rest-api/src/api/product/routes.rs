use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_key::{
    GetProductByKeyParams, GetProductByKeyUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::value_objects::ProductKey;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{AdminProductResponse, ProductRequest};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_key_use_case: Arc<dyn GetProductByKeyUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_key_use_case: Arc<dyn GetProductByKeyUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_key_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product management API
///
/// Endpoints for creating, reading, updating, and deleting products in the
/// document store. Changes are picked up by the storefront on its next start.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// The document store assigns the key.
    #[oai(path = "/admin/products", method = "post", tag = "ApiTags::Admin")]
    async fn create_product(&self, body: Json<ProductRequest>) -> CreateProductResponse {
        let body = body.0;
        let params = CreateProductParams {
            name: body.name,
            price: body.price,
            image: body.image,
            category: body.category,
            description: body.description,
            storage: body.storage,
            battery_health: body.battery_health,
            condition: body.condition,
            extra_images: body.extra_images,
        };

        match self.create_use_case.execute(params).await {
            Ok(record) => CreateProductResponse::Created(Json(record.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all stored products
    #[oai(path = "/admin/products", method = "get", tag = "ApiTags::Admin")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(records) => {
                let responses: Vec<AdminProductResponse> =
                    records.into_iter().map(|r| r.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by key
    #[oai(path = "/admin/products/:key", method = "get", tag = "ApiTags::Admin")]
    async fn get_product_by_key(&self, key: Path<String>) -> GetProductByKeyResponse {
        match self
            .get_by_key_use_case
            .execute(GetProductByKeyParams {
                key: ProductKey::new(key.0),
            })
            .await
        {
            Ok(record) => GetProductByKeyResponse::Ok(Json(record.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetProductByKeyResponse::BadRequest(json),
                    404 => GetProductByKeyResponse::NotFound(json),
                    _ => GetProductByKeyResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces every field of an existing product.
    #[oai(path = "/admin/products/:key", method = "put", tag = "ApiTags::Admin")]
    async fn update_product(
        &self,
        key: Path<String>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let body = body.0;
        let params = UpdateProductParams {
            key: ProductKey::new(key.0),
            name: body.name,
            price: body.price,
            image: body.image,
            category: body.category,
            description: body.description,
            storage: body.storage,
            battery_health: body.battery_health,
            condition: body.condition,
            extra_images: body.extra_images,
        };

        match self.update_use_case.execute(params).await {
            Ok(record) => UpdateProductResponse::Ok(Json(record.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/admin/products/:key", method = "delete", tag = "ApiTags::Admin")]
    async fn delete_product(&self, key: Path<String>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams {
                key: ProductKey::new(key.0),
            })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteProductResponse::BadRequest(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<AdminProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<AdminProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByKeyResponse {
    #[oai(status = 200)]
    Ok(Json<AdminProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<AdminProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
