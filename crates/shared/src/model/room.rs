use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomModel {
    pub id_room: Uuid,
    pub id_roomtype: Uuid,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub deleted: bool,
}

/// Room row joined with its room type, as produced by the read queries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomWithTypeModel {
    pub id_room: Uuid,
    pub id_roomtype: Uuid,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub deleted: bool,
    pub room_type_price: f64,
    pub room_type_created_at: Option<NaiveDateTime>,
    pub room_type_updated_at: Option<NaiveDateTime>,
}
