use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomTypeRequest {
    #[validate(length(min = 1, message = "room type name is required"))]
    pub room_type: String,

    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: f64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoomTypeRequest {
    /// Taken from the request path, never from the body.
    #[serde(skip)]
    pub id_roomtype: Option<Uuid>,

    #[validate(length(min = 1, message = "room type name is required"))]
    pub room_type: String,

    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: f64,
}
