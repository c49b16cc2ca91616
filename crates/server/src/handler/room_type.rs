use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::room_type::service::{DynRoomTypeCommandService, DynRoomTypeQueryService},
    domain::{
        requests::{CreateRoomTypeRequest, UpdateRoomTypeRequest},
        responses::{ApiResponse, RoomTypeResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/room-types",
    tag = "RoomType",
    responses(
        (status = 200, description = "List of room types", body = ApiResponse<Vec<RoomTypeResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_room_types(
    Extension(service): Extension<DynRoomTypeQueryService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/room-types/{id}",
    tag = "RoomType",
    params(("id" = Uuid, Path, description = "Room type ID")),
    responses(
        (status = 200, description = "Room type details", body = ApiResponse<RoomTypeResponse>),
        (status = 404, description = "Room type not found")
    )
)]
pub async fn get_room_type(
    Extension(service): Extension<DynRoomTypeQueryService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/room-types",
    tag = "RoomType",
    request_body = CreateRoomTypeRequest,
    responses(
        (status = 201, description = "Room type created", body = ApiResponse<RoomTypeResponse>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_room_type(
    Extension(service): Extension<DynRoomTypeCommandService>,
    Json(body): Json<CreateRoomTypeRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/room-types/{id}",
    tag = "RoomType",
    params(("id" = Uuid, Path, description = "Room type ID")),
    request_body = UpdateRoomTypeRequest,
    responses(
        (status = 200, description = "Room type updated", body = ApiResponse<RoomTypeResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Room type not found")
    )
)]
pub async fn update_room_type(
    Extension(service): Extension<DynRoomTypeCommandService>,
    Path(id): Path<Uuid>,
    Json(mut body): Json<UpdateRoomTypeRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    body.id_roomtype = Some(id);
    let response = service.update(&body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/room-types/{id}",
    tag = "RoomType",
    params(("id" = Uuid, Path, description = "Room type ID")),
    responses(
        (status = 200, description = "Room type soft-deleted", body = ApiResponse<bool>),
        (status = 404, description = "Room type not found")
    )
)]
pub async fn trash_room_type_handler(
    Extension(service): Extension<DynRoomTypeCommandService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.trash(id).await?;
    Ok(Json(response))
}

pub fn room_type_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/room-types", get(get_room_types))
        .route("/api/room-types/{id}", get(get_room_type))
        .route("/api/room-types", post(create_room_type))
        .route("/api/room-types/{id}", put(update_room_type))
        .route("/api/room-types/{id}", delete(trash_room_type_handler))
        .layer(Extension(
            app_state.di_container.room_type.query_service.clone(),
        ))
        .layer(Extension(
            app_state.di_container.room_type.command_service.clone(),
        ))
}
