use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomRequest {
    pub id_roomtype: Uuid,

    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoomRequest {
    /// Taken from the request path, never from the body.
    #[serde(skip)]
    pub id_room: Option<Uuid>,

    pub id_roomtype: Uuid,

    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}
