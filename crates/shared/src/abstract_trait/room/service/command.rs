use crate::{
    domain::{
        requests::{CreateRoomRequest, UpdateRoomRequest},
        responses::{ApiResponse, RoomResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynRoomCommandService = Arc<dyn RoomCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait RoomCommandServiceTrait {
    async fn create(
        &self,
        request: &CreateRoomRequest,
    ) -> Result<ApiResponse<RoomResponse>, ServiceError>;
    async fn update(
        &self,
        request: &UpdateRoomRequest,
    ) -> Result<ApiResponse<RoomResponse>, ServiceError>;
    async fn trash(&self, id: Uuid) -> Result<ApiResponse<bool>, ServiceError>;
}
