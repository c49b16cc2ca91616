use crate::{errors::RepositoryError, model::room::RoomWithTypeModel};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynRoomQueryRepository = Arc<dyn RoomQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RoomQueryRepositoryTrait {
    /// All non-deleted rooms joined with their room type. The join does not
    /// filter on the room type's soft-delete flag.
    async fn find_all(&self) -> Result<Vec<RoomWithTypeModel>, RepositoryError>;

    /// One non-deleted room by id, joined with its room type.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RoomWithTypeModel>, RepositoryError>;

    /// Number of non-deleted rows with the given id (0 or 1).
    async fn count_active(&self, id: Uuid) -> Result<i64, RepositoryError>;
}
