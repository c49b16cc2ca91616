use crate::{errors::RepositoryError, model::room_type::RoomTypeModel};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynRoomTypeQueryRepository = Arc<dyn RoomTypeQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RoomTypeQueryRepositoryTrait {
    /// All room types that are not soft-deleted.
    async fn find_all(&self) -> Result<Vec<RoomTypeModel>, RepositoryError>;

    /// One non-deleted room type by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RoomTypeModel>, RepositoryError>;

    /// Bare primary-key lookup that ignores the soft-delete flag. Used by the
    /// room write path to verify the referenced room type exists.
    async fn find_by_id_any(&self, id: Uuid) -> Result<Option<RoomTypeModel>, RepositoryError>;

    /// Number of non-deleted rows with the given id (0 or 1).
    async fn count_active(&self, id: Uuid) -> Result<i64, RepositoryError>;
}
