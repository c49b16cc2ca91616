use crate::{
    domain::responses::{ApiResponse, RoomTypeResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynRoomTypeQueryService = Arc<dyn RoomTypeQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait RoomTypeQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<RoomTypeResponse>>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<RoomTypeResponse>, ServiceError>;
}
