use crate::errors::ServiceError;
use crate::handlers::common::{created_response, no_content_response};
use crate::models::product::{Product, ProductId, ProductInput, ProductUpdate};
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Json, Path, State,
    },
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

/// Create the product router
pub fn products_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// List every product
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products in id order", body = [Product],
            headers(("X-Request-Id" = String, description = "Unique request id for tracing"))
        )
    ),
    tag = "products"
)]
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.product_service.list_products().await)
}

/// Get a single product
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product returned", body = Product),
        (status = 400, description = "Malformed id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<ProductId>, PathRejection>,
) -> Result<Json<Product>, ServiceError> {
    let Path(id) = id?;
    let product = state.product_service.get_product(id).await?;
    Ok(Json(product))
}

/// Create a product; the id is assigned by storage
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = Product,
            headers(("Location" = String, description = "Route of the created product"))
        ),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let Json(input) = payload?;
    let product = state.product_service.create_product(input).await?;
    let location = format!("{}/{}", state.config.api_prefix, product.id);
    Ok(created_response(&location, product))
}

/// Replace a product's name, price and quantity
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductUpdate,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Body id does not match route id, or invalid body", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<ProductId>, PathRejection>,
    payload: Result<Json<ProductUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Path(id) = id?;
    let Json(update) = payload?;
    state.product_service.update_product(id, update).await?;
    Ok(no_content_response())
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Malformed id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<ProductId>, PathRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Path(id) = id?;
    state.product_service.delete_product(id).await?;
    Ok(no_content_response())
}
