use crate::{
    domain::requests::{CreateRoomRequest, UpdateRoomRequest},
    errors::RepositoryError,
    model::room::RoomModel,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynRoomCommandRepository = Arc<dyn RoomCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RoomCommandRepositoryTrait {
    async fn create(&self, request: &CreateRoomRequest) -> Result<RoomModel, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        request: &UpdateRoomRequest,
    ) -> Result<RoomModel, RepositoryError>;
    async fn trash(&self, id: Uuid) -> Result<RoomModel, RepositoryError>;
}
