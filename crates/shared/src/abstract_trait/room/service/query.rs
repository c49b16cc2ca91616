use crate::{
    domain::responses::{ApiResponse, RoomDetailResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynRoomQueryService = Arc<dyn RoomQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait RoomQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<RoomDetailResponse>>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<RoomDetailResponse>, ServiceError>;
}
