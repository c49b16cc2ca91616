mod health;
mod room;
mod room_type;

use crate::state::AppState;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::health::health_routes;
pub use self::room::room_routes;
pub use self::room_type::room_type_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,

        room_type::get_room_types,
        room_type::get_room_type,
        room_type::create_room_type,
        room_type::update_room_type,
        room_type::trash_room_type_handler,

        room::get_rooms,
        room::get_room,
        room::create_room,
        room::update_room,
        room::trash_room_handler,
    ),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "RoomType", description = "Room type pricing/category management endpoints"),
        (name = "Room", description = "Room management endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(health_routes())
            .merge(room_type_routes(shared_state.clone()))
            .merge(room_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
