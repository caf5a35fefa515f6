use crate::{
    abstract_trait::DynStorageService,
    domain::{
        requests::{CreateStorageRequest, UpdateStorageRequest},
        responses::{ApiResponse, StorageResponse},
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
    path = "/api/storages",
    tag = "Storage",
    responses(
        (status = 200, description = "List of storage rows", body = ApiResponse<Vec<StorageResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_storages(
    Extension(service): Extension<DynStorageService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/storages/{id}",
    tag = "Storage",
    params(("id" = i32, Path, description = "Storage ID")),
    responses(
        (status = 200, description = "Storage details", body = ApiResponse<StorageResponse>),
        (status = 404, description = "Storage not found")
    )
)]
pub async fn get_storage(
    Extension(service): Extension<DynStorageService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/storages/product/{product_id}/availability",
    tag = "Storage",
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Remaining stock quantity", body = ApiResponse<i32>),
        (status = 404, description = "Product not on stock")
    )
)]
pub async fn get_availability(
    Extension(service): Extension<DynStorageService>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.check_availability(product_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/storages",
    tag = "Storage",
    request_body = CreateStorageRequest,
    responses(
        (status = 201, description = "Storage row created", body = ApiResponse<StorageResponse>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_storage(
    Extension(service): Extension<DynStorageService>,
    Json(body): Json<CreateStorageRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::BadRequest(e.to_string()))?;

    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/storages/{id}",
    tag = "Storage",
    params(("id" = i32, Path, description = "Storage ID")),
    request_body = UpdateStorageRequest,
    responses(
        (status = 200, description = "Storage row updated", body = ApiResponse<StorageResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Storage not found")
    )
)]
pub async fn update_storage(
    Extension(service): Extension<DynStorageService>,
    Path(id): Path<i32>,
    Json(mut body): Json<UpdateStorageRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    body.validate()
        .map_err(|e| HttpError::BadRequest(e.to_string()))?;

    let response = service.update(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/storages/{id}",
    tag = "Storage",
    params(("id" = i32, Path, description = "Storage ID")),
    responses(
        (status = 200, description = "Storage row deleted", body = serde_json::Value),
        (status = 404, description = "Storage not found")
    )
)]
pub async fn delete_storage(
    Extension(service): Extension<DynStorageService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn storage_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/storages", get(get_storages))
        .route("/api/storages", post(create_storage))
        .route("/api/storages/{id}", get(get_storage))
        .route("/api/storages/{id}", put(update_storage))
        .route("/api/storages/{id}", delete(delete_storage))
        .route(
            "/api/storages/product/{product_id}/availability",
            get(get_availability),
        )
        .layer(Extension(app_state.di_container.storage_service.clone()))
}
