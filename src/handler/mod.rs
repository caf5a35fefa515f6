mod client;
mod gender;
mod order;
mod ordered_product;
mod product;
mod storage;

use crate::state::AppState;
use crate::utils::shutdown_signal;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::client::client_routes;
pub use self::gender::gender_routes;
pub use self::order::order_routes;
pub use self::ordered_product::ordered_product_routes;
pub use self::product::product_routes;
pub use self::storage::storage_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        order::get_orders,
        order::get_order,
        order::get_client_orders,
        order::get_client_order_count,
        order::get_order_canceled,
        order::create_order,
        order::update_order,
        order::cancel_order,
        order::uncancel_order,
        order::delete_order,

        ordered_product::get_order_products,
        ordered_product::get_order_product,
        ordered_product::get_lines_by_order,
        ordered_product::get_products_by_order,
        ordered_product::get_ordered_quantity,
        ordered_product::create_order_product,
        ordered_product::update_order_product,
        ordered_product::delete_order_product,

        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        client::get_clients,
        client::get_client,
        client::create_client,
        client::update_client,
        client::delete_client,

        storage::get_storages,
        storage::get_storage,
        storage::get_availability,
        storage::create_storage,
        storage::update_storage,
        storage::delete_storage,

        gender::get_genders,
        gender::get_gender,
    ),
    tags(
        (name = "Order", description = "Order endpoints"),
        (name = "Order-product", description = "Order line endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "Client", description = "Client endpoints"),
        (name = "Storage", description = "Stock endpoints"),
        (name = "Gender", description = "Gender reference endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(order_routes(shared_state.clone()))
            .merge(ordered_product_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(client_routes(shared_state.clone()))
            .merge(storage_routes(shared_state.clone()))
            .merge(gender_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app =
            app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
