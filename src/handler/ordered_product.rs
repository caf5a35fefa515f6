use crate::{
    abstract_trait::DynOrderedProductService,
    domain::{
        requests::{CreateOrderedProductRequest, UpdateOrderedProductRequest},
        responses::{ApiResponse, OrderedProductResponse, ProductResponse},
    },
    errors::HttpError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/order-products",
    tag = "Order-product",
    responses(
        (status = 200, description = "List of order lines", body = ApiResponse<Vec<OrderedProductResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_order_products(
    Extension(service): Extension<DynOrderedProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/order-products/{id}",
    tag = "Order-product",
    params(("id" = i32, Path, description = "Order line ID")),
    responses(
        (status = 200, description = "Order line details", body = ApiResponse<OrderedProductResponse>),
        (status = 404, description = "Order line not found")
    )
)]
pub async fn get_order_product(
    Extension(service): Extension<DynOrderedProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/order-products/order/{order_id}",
    tag = "Order-product",
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Lines of an order", body = ApiResponse<Vec<OrderedProductResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_lines_by_order(
    Extension(service): Extension<DynOrderedProductService>,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_order(order_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/order-products/order/{order_id}/products",
    tag = "Order-product",
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Products of an order", body = ApiResponse<Vec<ProductResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_products_by_order(
    Extension(service): Extension<DynOrderedProductService>,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_products_by_order(order_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/order-products/order/{order_id}/product/{product_id}/quantity",
    tag = "Order-product",
    params(
        ("order_id" = i32, Path, description = "Order ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Ordered quantity for the pair", body = ApiResponse<i32>),
        (status = 404, description = "No line for the pair")
    )
)]
pub async fn get_ordered_quantity(
    Extension(service): Extension<DynOrderedProductService>,
    Path((order_id, product_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.quantity_for(order_id, product_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/order-products",
    tag = "Order-product",
    request_body = CreateOrderedProductRequest,
    responses(
        (status = 201, description = "Order line created, stock decreased", body = ApiResponse<OrderedProductResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not on stock"),
        (status = 409, description = "Order already contains the product")
    )
)]
pub async fn create_order_product(
    Extension(service): Extension<DynOrderedProductService>,
    Json(body): Json<CreateOrderedProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::BadRequest(e.to_string()))?;

    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/order-products/{id}",
    tag = "Order-product",
    params(("id" = i32, Path, description = "Order line ID")),
    request_body = UpdateOrderedProductRequest,
    responses(
        (status = 200, description = "Order line updated, stock adjusted by the delta", body = ApiResponse<OrderedProductResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Order line not found"),
        (status = 409, description = "Another line already holds the pair")
    )
)]
pub async fn update_order_product(
    Extension(service): Extension<DynOrderedProductService>,
    Path(id): Path<i32>,
    Json(mut body): Json<UpdateOrderedProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    body.validate()
        .map_err(|e| HttpError::BadRequest(e.to_string()))?;

    let response = service.update(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/order-products/{id}",
    tag = "Order-product",
    params(("id" = i32, Path, description = "Order line ID")),
    responses(
        (status = 200, description = "Order line deleted, stock restored", body = serde_json::Value),
        (status = 404, description = "Order line not found")
    )
)]
pub async fn delete_order_product(
    Extension(service): Extension<DynOrderedProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn ordered_product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/order-products", get(get_order_products))
        .route("/api/order-products", post(create_order_product))
        .route("/api/order-products/{id}", get(get_order_product))
        .route("/api/order-products/{id}", put(update_order_product))
        .route("/api/order-products/{id}", delete(delete_order_product))
        .route(
            "/api/order-products/order/{order_id}",
            get(get_lines_by_order),
        )
        .route(
            "/api/order-products/order/{order_id}/products",
            get(get_products_by_order),
        )
        .route(
            "/api/order-products/order/{order_id}/product/{product_id}/quantity",
            get(get_ordered_quantity),
        )
        .layer(Extension(
            app_state.di_container.ordered_product_service.clone(),
        ))
}
