use crate::{
    domain::{
        requests::{CreateRoomTypeRequest, UpdateRoomTypeRequest},
        responses::{ApiResponse, RoomTypeResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynRoomTypeCommandService = Arc<dyn RoomTypeCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait RoomTypeCommandServiceTrait {
    async fn create(
        &self,
        request: &CreateRoomTypeRequest,
    ) -> Result<ApiResponse<RoomTypeResponse>, ServiceError>;
    async fn update(
        &self,
        request: &UpdateRoomTypeRequest,
    ) -> Result<ApiResponse<RoomTypeResponse>, ServiceError>;
    async fn trash(&self, id: Uuid) -> Result<ApiResponse<bool>, ServiceError>;
}
