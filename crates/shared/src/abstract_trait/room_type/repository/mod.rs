mod command;
mod query;

pub use self::command::{DynRoomTypeCommandRepository, RoomTypeCommandRepositoryTrait};
pub use self::query::{DynRoomTypeQueryRepository, RoomTypeQueryRepositoryTrait};
