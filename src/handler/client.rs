use crate::{
    abstract_trait::DynClientService,
    domain::{
        requests::{CreateClientRequest, UpdateClientRequest},
        responses::{ApiResponse, ClientResponse},
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
    path = "/api/clients",
    tag = "Client",
    responses(
        (status = 200, description = "List of clients", body = ApiResponse<Vec<ClientResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_clients(
    Extension(service): Extension<DynClientService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = "Client",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = ApiResponse<ClientResponse>),
        (status = 404, description = "Client not found")
    )
)]
pub async fn get_client(
    Extension(service): Extension<DynClientService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "Client",
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Client created", body = ApiResponse<ClientResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Gender not found"),
        (status = 409, description = "Phone number already exists")
    )
)]
pub async fn create_client(
    Extension(service): Extension<DynClientService>,
    Json(body): Json<CreateClientRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::BadRequest(e.to_string()))?;

    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = "Client",
    params(("id" = i32, Path, description = "Client ID")),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Client updated", body = ApiResponse<ClientResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Client or gender not found"),
        (status = 409, description = "Phone number already exists")
    )
)]
pub async fn update_client(
    Extension(service): Extension<DynClientService>,
    Path(id): Path<i32>,
    Json(mut body): Json<UpdateClientRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    body.validate()
        .map_err(|e| HttpError::BadRequest(e.to_string()))?;

    let response = service.update(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = "Client",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client deleted", body = serde_json::Value),
        (status = 404, description = "Client not found")
    )
)]
pub async fn delete_client(
    Extension(service): Extension<DynClientService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn client_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/clients", get(get_clients))
        .route("/api/clients", post(create_client))
        .route("/api/clients/{id}", get(get_client))
        .route("/api/clients/{id}", put(update_client))
        .route("/api/clients/{id}", delete(delete_client))
        .layer(Extension(app_state.di_container.client_service.clone()))
}
