use crate::model::room_type::RoomTypeModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Full room type view. The soft-delete flag is never surfaced.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct RoomTypeResponse {
    pub id_roomtype: Uuid,
    pub room_type: String,
    pub price: f64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<RoomTypeModel> for RoomTypeResponse {
    fn from(value: RoomTypeModel) -> Self {
        RoomTypeResponse {
            id_roomtype: value.id_roomtype,
            room_type: value.room_type,
            price: value.price,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
