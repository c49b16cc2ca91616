use crate::model::room::{RoomModel, RoomWithTypeModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Flat room view returned by the write operations.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct RoomResponse {
    pub id_room: Uuid,
    pub id_roomtype: Uuid,
    pub status: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Trimmed room type view nested in the read operations. The display name
/// is intentionally absent.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct RoomTypeSummaryResponse {
    pub id_roomtype: Uuid,
    pub price: f64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Room joined with its room type, returned by the read operations.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct RoomDetailResponse {
    pub id_room: Uuid,
    pub status: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub room_type: RoomTypeSummaryResponse,
}

impl From<RoomModel> for RoomResponse {
    fn from(value: RoomModel) -> Self {
        RoomResponse {
            id_room: value.id_room,
            id_roomtype: value.id_roomtype,
            status: value.status,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

impl From<RoomWithTypeModel> for RoomDetailResponse {
    fn from(value: RoomWithTypeModel) -> Self {
        RoomDetailResponse {
            id_room: value.id_room,
            status: value.status,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
            room_type: RoomTypeSummaryResponse {
                id_roomtype: value.id_roomtype,
                price: value.room_type_price,
                created_at: value.room_type_created_at.map(|dt| dt.to_string()),
                updated_at: value.room_type_updated_at.map(|dt| dt.to_string()),
            },
        }
    }
}
