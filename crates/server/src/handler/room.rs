use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::room::service::{DynRoomCommandService, DynRoomQueryService},
    domain::{
        requests::{CreateRoomRequest, UpdateRoomRequest},
        responses::{ApiResponse, RoomDetailResponse, RoomResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = "Room",
    responses(
        (status = 200, description = "List of rooms with their room type", body = ApiResponse<Vec<RoomDetailResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_rooms(
    Extension(service): Extension<DynRoomQueryService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = "Room",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = ApiResponse<RoomDetailResponse>),
        (status = 404, description = "Room not found")
    )
)]
pub async fn get_room(
    Extension(service): Extension<DynRoomQueryService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = "Room",
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room created", body = ApiResponse<RoomResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Referenced room type does not exist"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_room(
    Extension(service): Extension<DynRoomCommandService>,
    Json(body): Json<CreateRoomRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    tag = "Room",
    params(("id" = Uuid, Path, description = "Room ID")),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Room updated", body = ApiResponse<RoomResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Room or referenced room type not found")
    )
)]
pub async fn update_room(
    Extension(service): Extension<DynRoomCommandService>,
    Path(id): Path<Uuid>,
    Json(mut body): Json<UpdateRoomRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    body.id_room = Some(id);
    let response = service.update(&body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    tag = "Room",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room soft-deleted", body = ApiResponse<bool>),
        (status = 404, description = "Room not found")
    )
)]
pub async fn trash_room_handler(
    Extension(service): Extension<DynRoomCommandService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.trash(id).await?;
    Ok(Json(response))
}

pub fn room_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/rooms", get(get_rooms))
        .route("/api/rooms/{id}", get(get_room))
        .route("/api/rooms", post(create_room))
        .route("/api/rooms/{id}", put(update_room))
        .route("/api/rooms/{id}", delete(trash_room_handler))
        .layer(Extension(app_state.di_container.room.query_service.clone()))
        .layer(Extension(
            app_state.di_container.room.command_service.clone(),
        ))
}
