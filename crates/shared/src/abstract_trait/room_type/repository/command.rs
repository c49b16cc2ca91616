use crate::{
    domain::requests::{CreateRoomTypeRequest, UpdateRoomTypeRequest},
    errors::RepositoryError,
    model::room_type::RoomTypeModel,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynRoomTypeCommandRepository = Arc<dyn RoomTypeCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RoomTypeCommandRepositoryTrait {
    async fn create(
        &self,
        request: &CreateRoomTypeRequest,
    ) -> Result<RoomTypeModel, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        request: &UpdateRoomTypeRequest,
    ) -> Result<RoomTypeModel, RepositoryError>;
    async fn trash(&self, id: Uuid) -> Result<RoomTypeModel, RepositoryError>;
}
