use crate::{
    abstract_trait::DynGenderService,
    domain::responses::{ApiResponse, GenderResponse},
    errors::HttpError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/genders",
    tag = "Gender",
    responses(
        (status = 200, description = "List of genders", body = ApiResponse<Vec<GenderResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_genders(
    Extension(service): Extension<DynGenderService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/genders/{id}",
    tag = "Gender",
    params(("id" = i32, Path, description = "Gender ID")),
    responses(
        (status = 200, description = "Gender details", body = ApiResponse<GenderResponse>),
        (status = 404, description = "Gender not found")
    )
)]
pub async fn get_gender(
    Extension(service): Extension<DynGenderService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn gender_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/genders", get(get_genders))
        .route("/api/genders/{id}", get(get_gender))
        .layer(Extension(app_state.di_container.gender_service.clone()))
}
