mod command;
mod query;

pub use self::command::{DynRoomCommandRepository, RoomCommandRepositoryTrait};
pub use self::query::{DynRoomQueryRepository, RoomQueryRepositoryTrait};
