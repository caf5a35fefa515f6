use crate::{
    abstract_trait::DynOrderService,
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        responses::{ApiResponse, OrderResponse},
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
    path = "/api/orders",
    tag = "Order",
    responses(
        (status = 200, description = "List of orders", body = ApiResponse<Vec<OrderResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/client/{client_id}",
    tag = "Order",
    params(("client_id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Orders of a client", body = ApiResponse<Vec<OrderResponse>>),
        (status = 404, description = "Client has no orders")
    )
)]
pub async fn get_client_orders(
    Extension(service): Extension<DynOrderService>,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_client(client_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/client/{client_id}/count",
    tag = "Order",
    params(("client_id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Order count of a client", body = ApiResponse<i64>),
        (status = 404, description = "Client has no orders")
    )
)]
pub async fn get_client_order_count(
    Extension(service): Extension<DynOrderService>,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.count_by_client(client_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}/canceled",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Cancellation flag of the order", body = ApiResponse<bool>),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order_canceled(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.is_canceled(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Client not found")
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderService>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::BadRequest(e.to_string()))?;

    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Order or client not found")
    )
)]
pub async fn update_order(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i32>,
    Json(mut body): Json<UpdateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    body.validate()
        .map_err(|e| HttpError::BadRequest(e.to_string()))?;

    let response = service.update(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/cancel",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order canceled", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found")
    )
)]
pub async fn cancel_order(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.cancel(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/uncancel",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order cancellation reverted", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found")
    )
)]
pub async fn uncancel_order(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.uncancel(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted, stock restored", body = serde_json::Value),
        (status = 404, description = "Order not found")
    )
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(get_orders))
        .route("/api/orders", post(create_order))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}", put(update_order))
        .route("/api/orders/{id}", delete(delete_order))
        .route("/api/orders/{id}/cancel", put(cancel_order))
        .route("/api/orders/{id}/uncancel", put(uncancel_order))
        .route("/api/orders/{id}/canceled", get(get_order_canceled))
        .route("/api/orders/client/{client_id}", get(get_client_orders))
        .route(
            "/api/orders/client/{client_id}/count",
            get(get_client_order_count),
        )
        .layer(Extension(app_state.di_container.order_service.clone()))
}
